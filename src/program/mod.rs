use std::time::Instant;

use color_eyre::eyre::WrapErr;
use glium::glutin::event::{Event, WindowEvent};
use glium::glutin::event_loop::{ControlFlow, EventLoopProxy};
use glium::glutin::platform::run_return::EventLoopExtRunReturn;
use glium::{Display, Surface};
use imgui::Context;
use imgui_glium_renderer::Renderer;
use imgui_winit_support::WinitPlatform;
use nameof::name_of;
use tracing::{debug_span, error, info, instrument, trace, trace_span, warn};

use crate::build;
use crate::config::{load_or_init, DemoConfig};
use crate::demos::Demo;
use crate::helper::logging::event_targets::*;
use crate::helper::logging::{format_error, init_tracing};
use crate::helper::panic_pill::install_panic_hook;
use crate::program::frame_ticker::FrameTicker;
use crate::ui::ui_system::{init_ui_system, UiSystem};
use crate::FallibleFn;

pub mod frame_ticker;

/// Events the program posts into its own event loop
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ProgramEvent {
    /// Ctrl+C was pressed; leave the loop the same way closing the window does
    Shutdown,
}

/// Entry point shared by the demo binaries: sets up error reporting, config and logging, then runs the demo built by `make_demo`
///
/// * `demo_name` - Name of the config file (without extension) next to the executable
/// * `defaults` - Config used (and saved) when there's no usable config file
pub fn launch<D: Demo>(demo_name: &str, defaults: DemoConfig, make_demo: impl FnOnce(&DemoConfig) -> D) -> FallibleFn {
    color_eyre::install()?; //Set up eyre (with colours) for error handling

    let (config, config_source) = load_or_init(demo_name, defaults);
    init_tracing(&config.tracing)?;
    config_source.log();
    install_panic_hook();
    info!(
        target: PROGRAM_LIFECYCLE,
        "{} v{} - {} ({})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        build::BUILD_TARGET,
        demo_name
    );

    let result = run_demo(make_demo(&config), &config);
    if let Err(report) = &result {
        error!(target: PROGRAM_LIFECYCLE, report = format_error(report), "{demo_name} exited with an error");
    }
    result
}

///Creates the window and runs `demo` in it, returning once the window is closed or the process is asked to shut down
///
/// Everything happens on the calling thread, which has to be the main thread since that's where the GL context lives
#[instrument(skip_all, fields(demo = demo.name()))]
pub fn run_demo<D: Demo>(mut demo: D, config: &DemoConfig) -> FallibleFn {
    // If we fail here, it is considered a fatal error, since there's no window to show anything in
    let UiSystem {
        display,
        mut event_loop,
        mut imgui_context,
        mut platform,
        mut renderer,
    } = init_ui_system(&config.window, &config.font, &config.resources_path)
        .wrap_err("failed while initialising ui system")?;

    demo.init(&display, &mut renderer, config)
        .wrap_err_with(|| format!("failed to initialise {}", demo.name()))?;

    install_shutdown_handler(event_loop.create_proxy());

    let mut ticker = FrameTicker::new(config.frame_rate, Instant::now())
        .wrap_err_with(|| format!("invalid `{}` in config", name_of!(frame_rate in DemoConfig)))?;
    info!(
        target: PROGRAM_LIFECYCLE,
        interval = %humantime::format_duration(ticker.interval()),
        "running event loop"
    );

    /*
    The event loop closure can't return anything, so let it write through `result_ref` and return `result` afterwards
    */
    let mut result: FallibleFn = Ok(());
    let result_ref = &mut result;
    let mut last_frame = Instant::now();

    let imgui_internal_span = debug_span!("imgui_internal");
    let _guard_imgui_internal_span = imgui_internal_span.enter();

    event_loop.run_return(|event, _window_target, control_flow| {
        let _span = trace_span!(target: UI_PERFRAME_SPAMMY, "process_ui_event", ?event).entered();
        match event {
            //Input has all been forwarded by now, so this is where we check whether a frame is due
            Event::MainEventsCleared => {
                if ticker.poll(Instant::now()) {
                    trace!(target: UI_PERFRAME_SPAMMY, "tick, requesting redraw");
                    let gl_window = display.gl_window();
                    if let Err(error) = platform.prepare_frame(imgui_context.io_mut(), gl_window.window()) {
                        // Only happens if the cursor can't be moved, which isn't worth stopping for
                        warn!("failed to prepare frame: {error}");
                    }
                    gl_window.window().request_redraw();
                }
                *control_flow = ControlFlow::WaitUntil(ticker.next_deadline());
            }

            Event::RedrawRequested(_) => {
                let now = Instant::now();
                imgui_context.io_mut().update_delta_time(now - last_frame);
                last_frame = now;

                let render_result = render_frame(&display, &mut imgui_context, &mut platform, &mut renderer, &mut demo);
                if let Err(report) = render_result {
                    let report = report.wrap_err("encountered error while rendering, program should now exit");
                    error!(target: PROGRAM_LIFECYCLE, report = format_error(&report), "render failed");
                    *result_ref = Err(report);
                    *control_flow = ControlFlow::Exit;
                }
            }

            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!(target: PROGRAM_LIFECYCLE, "window close requested");
                *control_flow = ControlFlow::Exit;
            }

            Event::UserEvent(ProgramEvent::Shutdown) => {
                info!(target: PROGRAM_LIFECYCLE, "shutdown signal received");
                *control_flow = ControlFlow::Exit;
            }

            //Catch-all, passes onto the imgui platform so widgets see the input
            event => {
                let gl_window = display.gl_window();
                platform.handle_event(imgui_context.io_mut(), gl_window.window(), &event);
            }
        }
    });

    info!(target: PROGRAM_LIFECYCLE, "event loop exited");
    result
}

/// Declares one frame of UI, then draws it over the demo's background colour
fn render_frame<D: Demo>(
    display: &Display,
    imgui_context: &mut Context,
    platform: &mut WinitPlatform,
    renderer: &mut Renderer,
    demo: &mut D,
) -> FallibleFn {
    let ui = imgui_context.new_frame();
    {
        let _span = trace_span!(target: UI_PERFRAME_SPAMMY, "build_ui", frame = ui.frame_count()).entered();
        demo.build_ui(ui);
    }

    let gl_window = display.gl_window();
    let mut target = display.draw();
    let [r, g, b, a] = demo.background();
    target.clear_color(r, g, b, a);
    platform.prepare_render(ui, gl_window.window());
    let draw_data = imgui_context.render();

    // The frame has to be finished even if rendering failed, glium panics on dropping an unfinished frame
    let render_result = renderer.render(&mut target, draw_data).wrap_err("UI rendering failed");
    let finish_result = target.finish().wrap_err("failed to swap buffers");
    render_result?;
    finish_result?;
    Ok(())
}

/// Makes Ctrl+C post [ProgramEvent::Shutdown] into the event loop
fn install_shutdown_handler(proxy: EventLoopProxy<ProgramEvent>) {
    let result = ctrlc::set_handler(move || {
        // Errors only if the loop has already exited, in which case we're shutting down anyway
        let _ = proxy.send_event(ProgramEvent::Shutdown);
    });
    if let Err(error) = result {
        warn!(target: PROGRAM_LIFECYCLE, "could not install Ctrl+C handler, only closing the window will exit: {error}");
    }
}
