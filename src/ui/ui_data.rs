//! State that the demo widgets read from and write to every frame
use serde::{Deserialize, Serialize};

/// Lowest value the "Compression:" property can take
pub const COMPRESSION_MIN: i32 = 0;
/// Highest value the "Compression:" property can take
pub const COMPRESSION_MAX: i32 = 100;
/// How much the "Compression:" property changes per step button click
pub const COMPRESSION_STEP: i32 = 10;

/// An 8-bit per channel RGBA colour
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Normalised `[r, g, b, a]`, as used by the colour widgets and `clear_color`
    pub fn to_f32_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a].map(|channel| f32::from(channel) / 255.0)
    }

    /// Inverse of [Rgba8::to_f32_array]. Values outside `0.0..=1.0` are clamped
    ///
    /// Rounds to the nearest value, so feeding [Rgba8::to_f32_array] back in gives the same colour
    pub fn from_f32_array(rgba: [f32; 4]) -> Self {
        let [r, g, b, a] = rgba.map(|channel| (channel.clamp(0.0, 1.0) * 255.0).round() as u8);
        Self { r, g, b, a }
    }

    pub fn channels_i32(self) -> [i32; 4] {
        [self.r, self.g, self.b, self.a].map(i32::from)
    }

    /// Sets every channel from an `i32`, clamping each to `0..=255`
    pub fn set_channels_i32(&mut self, channels: [i32; 4]) {
        let [r, g, b, a] = channels.map(|channel| channel.clamp(0, 255) as u8);
        *self = Self { r, g, b, a };
    }
}

impl Default for Rgba8 {
    fn default() -> Self {
        DEFAULT_BACKGROUND
    }
}

/// The dark blue-grey the demos start with
pub const DEFAULT_BACKGROUND: Rgba8 = Rgba8::new(28, 48, 62, 255);

/// The two radio options in the demo panel
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

/// Everything the user can change through the demo panel
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DemoState {
    pub background: Rgba8,
    compression: i32,
    pub difficulty: Difficulty,
    /// Contents of the text edit field
    pub text: String,
    /// Whether the (closable) demo panel is still shown
    pub panel_open: bool,
}

impl DemoState {
    pub fn new(background: Rgba8) -> Self {
        Self {
            background,
            compression: COMPRESSION_MIN,
            difficulty: Difficulty::default(),
            text: String::new(),
            panel_open: true,
        }
    }

    pub fn compression(&self) -> i32 {
        self.compression
    }

    /// Sets the compression, clamped to [COMPRESSION_MIN]..=[COMPRESSION_MAX]
    pub fn set_compression(&mut self, value: i32) {
        self.compression = value.clamp(COMPRESSION_MIN, COMPRESSION_MAX);
    }
}

impl Default for DemoState {
    fn default() -> Self {
        Self::new(DEFAULT_BACKGROUND)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_state_matches_startup_values() {
        let state = DemoState::default();
        assert_eq!(state.background, Rgba8::new(28, 48, 62, 255));
        assert_eq!(state.compression(), 0);
        assert_eq!(state.difficulty, Difficulty::Easy);
        assert_eq!(state.text, "");
        assert!(state.panel_open);
    }

    #[test]
    fn compression_is_clamped() {
        let mut state = DemoState::default();
        state.set_compression(COMPRESSION_MAX + COMPRESSION_STEP);
        assert_eq!(state.compression(), 100);
        state.set_compression(-COMPRESSION_STEP);
        assert_eq!(state.compression(), 0);
        state.set_compression(40);
        assert_eq!(state.compression(), 40);
    }

    #[test]
    fn colour_survives_float_conversion_for_every_channel_value() {
        // The picker hands back floats every frame, so any drift here would slowly change the colour
        for value in 0..=255u8 {
            let colour = Rgba8::new(value, 255 - value, value / 2, 255);
            assert_eq!(Rgba8::from_f32_array(colour.to_f32_array()), colour);
        }
    }

    #[test]
    fn float_conversion_clamps_out_of_range_values() {
        assert_eq!(Rgba8::from_f32_array([-0.5, 1.5, 0.5, 1.0]), Rgba8::new(0, 255, 128, 255));
    }

    #[test]
    fn integer_channels_are_clamped() {
        let mut colour = DEFAULT_BACKGROUND;
        assert_eq!(colour.channels_i32(), [28, 48, 62, 255]);
        colour.set_channels_i32([-4, 300, 12, 128]);
        assert_eq!(colour, Rgba8::new(0, 255, 12, 128));
    }
}
