//! Two small immediate-mode GUI demos, rendered with [imgui] on top of [glium]
//!
//! The binaries in `src/bin` pick a [demos::Demo] and hand it to [program::run_demo], which owns the window and the frame loop

use shadow_rs::shadow;

shadow!(build); //Required for shadow-rs to work

pub mod config;
pub mod demos;
pub mod helper;
pub mod program;
pub mod ui;

/// Shorthand for functions that can fail but don't return anything
pub type FallibleFn = color_eyre::eyre::Result<()>;
