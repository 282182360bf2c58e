//! The two demo programs. Each is a [Demo] that [run_demo](crate::program::run_demo) drives once per frame
use glium::Display;
use imgui::Ui;
use imgui_glium_renderer::Renderer;

use crate::config::DemoConfig;
use crate::FallibleFn;

pub mod basic;
pub mod image_menu;

pub use basic::BasicDemo;
pub use image_menu::ImageMenuDemo;

pub trait Demo {
    /// Short name, used for the config file and in logs
    fn name(&self) -> &'static str;

    /// Called once the window and renderer exist, before the first frame. Load textures here
    fn init(&mut self, _display: &Display, _renderer: &mut Renderer, _config: &DemoConfig) -> FallibleFn {
        Ok(())
    }

    /// Declares this frame's widgets
    fn build_ui(&mut self, ui: &Ui);

    /// Colour the window is cleared to before the UI is drawn
    fn background(&self) -> [f32; 4];
}
