use serde::{Deserialize, Serialize};

/// Options for the OS window and the GL context created with it. Only read at startup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width, in logical pixels
    pub width: u32,
    /// Initial inner height, in logical pixels
    pub height: u32,
    pub resizable: bool,
    /// flag for if the renderer should enable VSync
    ///
    /// see [glium::glutin::ContextBuilder::with_vsync]
    pub vsync: bool,
    /// Whether hardware acceleration is required to be a certain value ([Some]), or automatic ([None])
    pub hardware_acceleration: Option<bool>,
    ///Sets the multisampling level to request. A value of 0 indicates that multisampling must not be enabled.
    ///
    /// Must be a power of 2
    pub multisampling: u16,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Widget Demo".to_string(),
            width: 400,
            height: 500,
            resizable: true,
            vsync: false,
            hardware_acceleration: None,
            multisampling: 0,
        }
    }
}
