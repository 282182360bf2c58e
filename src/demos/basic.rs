use imgui::{Condition, Ui};
use tracing::{info, trace};

use crate::config::window_config::WindowConfig;
use crate::config::DemoConfig;
use crate::demos::Demo;
use crate::helper::logging::event_targets::{UI_PERFRAME_SPAMMY, UI_USER_EVENT};
use crate::ui::demo_panel::{build_demo_panel, PanelLabels};
use crate::ui::ui_data::DemoState;

pub const NAME: &str = "basic_demo";
/// Where the demo window first appears
pub const PANEL_POSITION: [f32; 2] = [30.0, 50.0];
pub const PANEL_SIZE: [f32; 2] = [230.0, 300.0];

/// A single movable, resizable, closable window holding the demo panel
#[derive(Debug, Clone)]
pub struct BasicDemo {
    state: DemoState,
}

impl BasicDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            state: DemoState::new(config.initial_background),
        }
    }

    pub fn default_config() -> DemoConfig {
        DemoConfig {
            window: WindowConfig {
                width: 400,
                height: 500,
                ..WindowConfig::default()
            },
            ..DemoConfig::default()
        }
    }
}

impl Demo for BasicDemo {
    fn name(&self) -> &'static str {
        NAME
    }

    fn build_ui(&mut self, ui: &Ui) {
        trace!(target: UI_PERFRAME_SPAMMY, "current refresh");
        if !self.state.panel_open {
            return;
        }

        let mut open = true;
        let state = &mut self.state;
        ui.window("Demo")
            .position(PANEL_POSITION, Condition::FirstUseEver)
            .size(PANEL_SIZE, Condition::FirstUseEver)
            .opened(&mut open)
            .build(|| build_demo_panel(ui, state, PanelLabels::default()));

        if !open {
            info!(target: UI_USER_EVENT, "demo window closed");
            self.state.panel_open = false;
        }
    }

    fn background(&self) -> [f32; 4] {
        self.state.background.to_f32_array()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use std::cell::Cell;

    use super::*;
    use crate::ui::headless::{click_input, run_frames, run_frames_with_input, CLICK_FRAMES, NO_MOUSE};
    use crate::ui::ui_data::Rgba8;

    #[test]
    fn starts_with_configured_background() {
        let config = DemoConfig {
            initial_background: Rgba8::new(255, 0, 0, 255),
            ..BasicDemo::default_config()
        };
        let demo = BasicDemo::new(&config);
        assert_eq!(demo.background(), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn default_window_is_400_by_500() {
        let config = BasicDemo::default_config();
        assert_eq!((config.window.width, config.window.height), (400, 500));
        assert_eq!(config.frame_rate, 30);
    }

    #[test]
    fn frames_build_without_input() {
        let mut demo = BasicDemo::new(&BasicDemo::default_config());
        run_frames(3, |ui| demo.build_ui(ui));
        assert!(demo.state.panel_open);
    }

    #[test]
    fn close_button_hides_window_for_good() {
        let mut demo = BasicDemo::new(&BasicDemo::default_config());
        let close_button = Cell::new(NO_MOUSE);
        run_frames_with_input(
            CLICK_FRAMES,
            |frame, io| click_input(frame, io, close_button.get()),
            |ui| {
                // The close button sits at the right end of the title bar, which is one frame height tall
                let title_height = ui.frame_height();
                close_button.set([
                    PANEL_POSITION[0] + PANEL_SIZE[0] - title_height / 2.0 - 3.0,
                    PANEL_POSITION[1] + title_height / 2.0,
                ]);
                demo.build_ui(ui);
            },
        );
        assert!(!demo.state.panel_open);

        // Further frames don't bring it back
        run_frames(2, |ui| demo.build_ui(ui));
        assert!(!demo.state.panel_open);
    }
}
