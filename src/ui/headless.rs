//! Lets tests declare widgets against a real imgui context without a window or GL context
use std::path::PathBuf;
use std::sync::Mutex;

use imgui::{Context, Io, Ui};
use lazy_static::lazy_static;

lazy_static! {
    /// imgui only allows one active context per process, and tests run in parallel
    static ref IMGUI_CONTEXT_LOCK: Mutex<()> = Mutex::new(());
}

/// Mouse position imgui treats as "no mouse"
pub(crate) const NO_MOUSE: [f32; 2] = [-f32::MAX, -f32::MAX];
/// Frame on which [click_input] presses the left button. The frames before it let the target appear and be hovered
pub(crate) const CLICK_PRESS_FRAME: usize = 2;
/// Frames needed for one full click from [click_input], including a frame after the release
pub(crate) const CLICK_FRAMES: usize = CLICK_PRESS_FRAME + 3;

/// Runs `f` with a fresh imgui context (800x600 display, no ini/log files), holding the context lock
pub(crate) fn with_context<R>(f: impl FnOnce(&mut Context) -> R) -> R {
    let _guard = IMGUI_CONTEXT_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    let mut context = Context::create();
    context.set_ini_filename(None::<PathBuf>);
    context.set_log_filename(None::<PathBuf>);
    context.io_mut().display_size = [800.0, 600.0];
    f(&mut context)
}

/// Runs `build` once per frame for `frames` frames, without any input
pub(crate) fn run_frames(frames: usize, build: impl FnMut(&Ui)) {
    run_frames_with_input(frames, |_, _| {}, build)
}

/// Like [run_frames], but calls `input` with the frame index before each frame starts so tests can drive the mouse
pub(crate) fn run_frames_with_input(frames: usize, mut input: impl FnMut(usize, &mut Io), mut build: impl FnMut(&Ui)) {
    with_context(|context| {
        context.fonts().build_rgba32_texture();
        for frame in 0..frames {
            input(frame, context.io_mut());
            let ui = context.new_frame();
            build(ui);
            context.render();
        }
    })
}

/// Holds the mouse over `target` and clicks the left button once, pressing on [CLICK_PRESS_FRAME] and releasing on the frame after
pub(crate) fn click_input(frame: usize, io: &mut Io, target: [f32; 2]) {
    io.mouse_pos = target;
    io.mouse_down[0] = frame == CLICK_PRESS_FRAME;
}

/// Screen-space centre of the last item declared
pub(crate) fn last_item_centre(ui: &Ui) -> [f32; 2] {
    let [min_x, min_y] = ui.item_rect_min();
    let [max_x, max_y] = ui.item_rect_max();
    [(min_x + max_x) / 2.0, (min_y + max_y) / 2.0]
}
