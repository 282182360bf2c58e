use std::path::PathBuf;

use glium::Display;
use imgui::{Condition, ImageButton, StyleVar, TextureId, Ui, WindowFlags};
use imgui_glium_renderer::Renderer;
use tracing::{debug, info, instrument, trace};

use crate::config::window_config::WindowConfig;
use crate::config::DemoConfig;
use crate::demos::Demo;
use crate::helper::file_helper::resolve_resource_path;
use crate::helper::logging::event_targets::{UI_PERFRAME_SPAMMY, UI_USER_EVENT};
use crate::ui::demo_panel::{build_demo_panel, PanelLabels};
use crate::ui::fonts::{FontSettings, GlyphRangeSet};
use crate::ui::layout::{anchored_bottom_right, menu_bar_bounds, MENU_PADDING};
use crate::ui::textures::load_texture;
use crate::ui::ui_data::DemoState;
use crate::FallibleFn;

pub const NAME: &str = "image_menu_demo";
/// Width and height of each menu slot
pub const MENU_SLOT_SIZE: f32 = 64.0;
/// Slots in the menu bar: the image button, then the labelled buttons
pub const MENU_SLOT_COUNT: usize = 5;
pub const MENU_BUTTON_LABEL: &str = "测试button";
pub const PANEL_SIZE: [f32; 2] = [230.0, 250.0];
/// Gap between the panel and the bottom-right corner of the window
pub const PANEL_MARGIN: f32 = 5.0;

const PANEL_LABELS: PanelLabels = PanelLabels { button: MENU_BUTTON_LABEL };

/// A menu bar with an image button along the top, and a fixed demo panel in the bottom-right corner
#[derive(Debug, Clone)]
pub struct ImageMenuDemo {
    state: DemoState,
    /// [None] when the icon couldn't be loaded, in which case its slot is left blank
    home_icon: Option<TextureId>,
}

impl ImageMenuDemo {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            state: DemoState::new(config.initial_background),
            home_icon: None,
        }
    }

    pub fn default_config() -> DemoConfig {
        DemoConfig {
            window: WindowConfig {
                width: 800,
                height: 600,
                ..WindowConfig::default()
            },
            font: FontSettings {
                path: Some(PathBuf::from("fonts/DroidSansFallback.ttf")),
                size_pixels: 17.0,
                glyph_ranges: GlyphRangeSet::ChineseSimplifiedCommon,
                ..FontSettings::default()
            },
            image: Some(PathBuf::from("icons/001-home.png")),
            ..DemoConfig::default()
        }
    }

    fn build_menu(&self, ui: &Ui) {
        match self.home_icon {
            Some(icon) => {
                if ImageButton::new(icon, [MENU_SLOT_SIZE, MENU_SLOT_SIZE])
                    .frame_padding(0)
                    .build(ui)
                {
                    info!(target: UI_USER_EVENT, slot = 0, "button pressed!");
                }
            }
            // Keep the icon's slot so the labelled buttons fill the bar either way
            None => ui.dummy([MENU_SLOT_SIZE, MENU_SLOT_SIZE]),
        }
        for slot in 1..MENU_SLOT_COUNT {
            ui.same_line();
            // `##` keeps the label the same while giving each button its own id
            if ui.button_with_size(format!("{MENU_BUTTON_LABEL}##menu{slot}"), [MENU_SLOT_SIZE, MENU_SLOT_SIZE]) {
                info!(target: UI_USER_EVENT, slot, "button pressed!");
            }
        }
    }
}

impl Demo for ImageMenuDemo {
    fn name(&self) -> &'static str {
        NAME
    }

    #[instrument(skip_all)]
    fn init(&mut self, display: &Display, renderer: &mut Renderer, config: &DemoConfig) -> FallibleFn {
        match &config.image {
            Some(relative) => {
                let path = resolve_resource_path(&config.resources_path, relative);
                debug!(?path, "loading home icon");
                self.home_icon = load_texture(display, renderer, &path);
            }
            None => debug!("no home icon configured"),
        }
        Ok(())
    }

    fn build_ui(&mut self, ui: &Ui) {
        trace!(target: UI_PERFRAME_SPAMMY, "current refresh");
        let viewport = ui.io().display_size;

        let menu = menu_bar_bounds(viewport, MENU_SLOT_SIZE, MENU_SLOT_COUNT);
        {
            let _padding = ui.push_style_var(StyleVar::WindowPadding([MENU_PADDING, MENU_PADDING]));
            let _spacing = ui.push_style_var(StyleVar::ItemSpacing([MENU_PADDING, MENU_PADDING]));
            ui.window("menu")
                .position(menu.position(), Condition::Always)
                .size(menu.size(), Condition::Always)
                .flags(
                    WindowFlags::NO_DECORATION
                        | WindowFlags::NO_MOVE
                        | WindowFlags::NO_SCROLLBAR
                        | WindowFlags::NO_BRING_TO_FRONT_ON_FOCUS
                        | WindowFlags::NO_SAVED_SETTINGS,
                )
                .build(|| self.build_menu(ui));
        }

        let panel = anchored_bottom_right(viewport, PANEL_SIZE, PANEL_MARGIN);
        let state = &mut self.state;
        ui.window("Demo")
            .position(panel.position(), Condition::Always)
            .size(panel.size(), Condition::Always)
            .flags(
                WindowFlags::NO_TITLE_BAR
                    | WindowFlags::NO_MOVE
                    | WindowFlags::NO_RESIZE
                    | WindowFlags::NO_COLLAPSE
                    | WindowFlags::NO_SAVED_SETTINGS,
            )
            .build(|| build_demo_panel(ui, state, PANEL_LABELS));
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
    use crate::ui::headless::run_frames;

    #[test]
    fn default_config_asks_for_cjk_font_and_icon() {
        let config = ImageMenuDemo::default_config();
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.font.glyph_ranges, GlyphRangeSet::ChineseSimplifiedCommon);
        assert_eq!(config.font.size_pixels, 17.0);
        assert_eq!(config.image, Some(PathBuf::from("icons/001-home.png")));
    }

    #[test]
    fn starts_without_icon() {
        let demo = ImageMenuDemo::new(&ImageMenuDemo::default_config());
        assert_eq!(demo.home_icon, None);
    }

    #[test]
    fn builds_with_and_without_icon() {
        let mut without_icon = ImageMenuDemo::new(&ImageMenuDemo::default_config());
        let mut with_icon = without_icon.clone();
        with_icon.home_icon = Some(TextureId::new(1));

        run_frames(2, |ui| without_icon.build_ui(ui));
        run_frames(2, |ui| with_icon.build_ui(ui));

        assert_eq!(without_icon.state, DemoState::default());
        assert_eq!(with_icon.state, DemoState::default());
    }

    /// Right edge of the last menu button relative to its window, and where a full row of slots would end
    fn menu_row_extent(demo: &ImageMenuDemo) -> (f32, f32) {
        let extent = Cell::new((0.0, 0.0));
        run_frames(2, |ui| {
            ui.window("menu")
                .position([0.0, 0.0], Condition::Always)
                .size([600.0, 100.0], Condition::Always)
                .build(|| {
                    demo.build_menu(ui);
                    let style = ui.clone_style();
                    let slots = MENU_SLOT_COUNT as f32;
                    let full_row = style.window_padding[0] + slots * MENU_SLOT_SIZE + (slots - 1.0) * style.item_spacing[0];
                    extent.set((ui.item_rect_max()[0] - ui.window_pos()[0], full_row));
                });
        });
        extent.get()
    }

    #[test]
    fn missing_icon_keeps_its_slot() {
        let without_icon = ImageMenuDemo::new(&ImageMenuDemo::default_config());
        let mut with_icon = without_icon.clone();
        with_icon.home_icon = Some(TextureId::new(1));

        let (right_edge, full_row) = menu_row_extent(&without_icon);
        assert_eq!(right_edge, full_row);
        assert_eq!(menu_row_extent(&with_icon), (full_row, full_row));
    }
}
