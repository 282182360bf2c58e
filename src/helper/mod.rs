pub mod file_helper;
pub mod logging;
pub mod panic_pill;
