use std::path::{Path, PathBuf};

use color_eyre::eyre;
use color_eyre::eyre::WrapErr;
use glium::glutin;
use glium::glutin::dpi::LogicalSize;
use glium::glutin::event_loop::{EventLoop, EventLoopBuilder};
use glium::glutin::window::WindowBuilder;
use glium::glutin::{Api, GlProfile, GlRequest};
use glium::Display;
use imgui::Context;
use imgui_glium_renderer::Renderer;
use imgui_winit_support::{HiDpiMode, WinitPlatform};
use tracing::{debug, info, instrument, trace, warn};

use crate::config::window_config::WindowConfig;
use crate::{log_expr, log_expr_val};
use crate::program::ProgramEvent;
use crate::ui::clipboard_integration::SystemClipboard;
use crate::ui::fonts::{install_fonts, FontSettings};

/// Struct that encapsulates the UI system components
pub struct UiSystem {
    pub display: Display,
    pub event_loop: EventLoop<ProgramEvent>,
    pub imgui_context: Context,
    pub platform: WinitPlatform,
    /// The renderer that renders the current UI system
    pub renderer: Renderer,
}

///Initialises the UI system and returns it
///
/// * `window_config` - Options for the window and GL context
/// * `font_settings` - Font to load into the atlas before the renderer uploads it
/// * `resources_dir` - Folder the font path is relative to
#[instrument(skip_all, fields(title = %window_config.title))]
pub fn init_ui_system(
    window_config: &WindowConfig,
    font_settings: &FontSettings,
    resources_dir: &Path,
) -> eyre::Result<UiSystem> {
    trace!("creating [winit] event loop");
    let event_loop = EventLoopBuilder::<ProgramEvent>::with_user_event().build();

    trace!("creating [glutin] context builder");
    let glutin_context_builder = glutin::ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, (3, 2)))
        .with_gl_profile(GlProfile::Core)
        .with_vsync(window_config.vsync)
        .with_hardware_acceleration(window_config.hardware_acceleration)
        .with_multisampling(window_config.multisampling);
    trace!("creating [winit] window builder");
    let window_builder = WindowBuilder::new()
        .with_title(window_config.title.clone())
        .with_inner_size(LogicalSize::new(window_config.width, window_config.height))
        .with_resizable(window_config.resizable);
    trace!("creating display");
    let display = Display::new(window_builder, glutin_context_builder, &event_loop)
        .wrap_err("could not initialise display")?;
    {
        let size = display.gl_window().window().inner_size();
        info!("created window {}x{}", size.width, size.height);
    }

    trace!("creating [imgui] context");
    let mut imgui_context = Context::create();
    // Nothing about the layout is worth remembering between runs
    imgui_context.set_ini_filename(None::<PathBuf>);
    imgui_context.set_log_filename(None::<PathBuf>);

    debug!("trying to enable clipboard support");
    match SystemClipboard::connect() {
        Ok(clipboard_backend) => {
            trace!("have clipboard support: {clipboard_backend:?}");
            imgui_context.set_clipboard_backend(clipboard_backend);
        }
        Err(error) => {
            warn!("could not initialise clipboard: {error}")
        }
    }

    trace!("creating [winit] platform");
    let mut platform = log_expr!(WinitPlatform::init(&mut imgui_context));
    trace!("attaching window");
    platform.attach_window(
        imgui_context.io_mut(),
        display.gl_window().window(),
        HiDpiMode::Default,
    );
    log_expr_val!(platform.hidpi_factor());

    debug!("adding fonts");
    let custom_font = install_fonts(&mut imgui_context, font_settings, resources_dir);
    debug!(custom_font, "fonts added");

    trace!("creating [glium] renderer");
    let renderer = Renderer::init(&mut imgui_context, &display).wrap_err("failed to create renderer")?;

    trace!("done");
    Ok(UiSystem {
        display,
        event_loop,
        imgui_context,
        platform,
        renderer,
    })
}
