//! FLTK presentation: the main window and its light/dark palette.

pub mod main_window;
pub mod theme;
