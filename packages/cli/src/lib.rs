// ABOUTME: idbrief CLI library - rendering and logging shared by the binary
// ABOUTME: Keeps output formatting pure so it can be tested without a terminal

pub mod logging;
pub mod render;
