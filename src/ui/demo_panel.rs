//! The widgets both demos show: buttons, radio options, a text field, a numeric property and a background colour picker
use imgui::{Drag, Ui};
use tracing::{info, trace};

use crate::helper::logging::event_targets::{UI_PERFRAME_SPAMMY, UI_USER_EVENT};
use crate::ui::ui_data::{DemoState, Difficulty, Rgba8, COMPRESSION_STEP};

/// Size of the first button in the panel
pub const FIXED_BUTTON_SIZE: [f32; 2] = [80.0, 30.0];
/// Height of the background colour swatch
pub const COLOUR_SWATCH_HEIGHT: f32 = 25.0;
/// Popup that holds the background colour picker
const BACKGROUND_POPUP_ID: &str = "background_picker";

/// Text that differs between the demos
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PanelLabels {
    pub button: &'static str,
}

impl Default for PanelLabels {
    fn default() -> Self {
        Self { button: "button" }
    }
}

/// Declares the demo widgets into the current window, reading from and writing to `state`
pub fn build_demo_panel(ui: &Ui, state: &mut DemoState, labels: PanelLabels) {
    trace!(target: UI_PERFRAME_SPAMMY, "building demo panel");

    if ui.button_with_size(labels.button, FIXED_BUTTON_SIZE) {
        info!(target: UI_USER_EVENT, "button pressed!");
    }

    difficulty_selector(ui, &mut state.difficulty);

    ui.set_next_item_width(-1.0);
    ui.input_text("##text", &mut state.text).build();
    if ui.button("Print Entered Text") {
        info!(target: UI_USER_EVENT, "{}", state.text);
    }

    compression_input(ui, state);

    ui.text("background:");
    background_picker(ui, &mut state.background);
}

/// `easy` and `hard` radio options on one row
fn difficulty_selector(ui: &Ui, difficulty: &mut Difficulty) {
    if ui.radio_button("easy", difficulty, Difficulty::Easy) {
        info!(target: UI_USER_EVENT, ?difficulty, "difficulty changed");
    }
    ui.same_line();
    if ui.radio_button("hard", difficulty, Difficulty::Hard) {
        info!(target: UI_USER_EVENT, ?difficulty, "difficulty changed");
    }
}

/// Integer input with -/+ step buttons. Whatever imgui hands back goes through [DemoState::set_compression], which clamps it
fn compression_input(ui: &Ui, state: &mut DemoState) {
    let mut compression = state.compression();
    if ui
        .input_int("Compression:", &mut compression)
        .step(COMPRESSION_STEP)
        .step_fast(COMPRESSION_STEP)
        .build()
    {
        state.set_compression(compression);
    }
}

/// Full-width colour swatch that opens a picker popup when clicked
fn background_picker(ui: &Ui, background: &mut Rgba8) {
    let swatch_size = [ui.content_region_avail()[0], COLOUR_SWATCH_HEIGHT];
    if ui
        .color_button_config("##background", background.to_f32_array())
        .size(swatch_size)
        .build()
    {
        ui.open_popup(BACKGROUND_POPUP_ID);
    }

    ui.popup(BACKGROUND_POPUP_ID, || {
        let mut rgba = background.to_f32_array();
        // Only write back on change, so an untouched picker never nudges the colour
        if ui.color_picker4("##picker", &mut rgba) {
            *background = Rgba8::from_f32_array(rgba);
        }

        let [mut r, mut g, mut b, mut a] = background.channels_i32();
        let mut changed = false;
        for (label, channel) in [("R", &mut r), ("G", &mut g), ("B", &mut b), ("A", &mut a)] {
            changed |= Drag::new(label).range(0, 255).speed(1.0).build(ui, channel);
        }
        if changed {
            background.set_channels_i32([r, g, b, a]);
        }
    });
}
