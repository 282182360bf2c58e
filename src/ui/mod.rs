//! Everything that talks to imgui: setting it up, the widgets, and the resources it draws with
pub mod clipboard_integration;
pub mod demo_panel;
pub mod fonts;
pub mod layout;
pub mod textures;
pub mod ui_data;
pub mod ui_system;

#[cfg(test)]
pub(crate) mod headless;
