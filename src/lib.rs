//! FerrisLink: a desktop client for a URL-shortening service.
//!
//! [`app`] holds everything that can run without a display; [`ui`] is the
//! FLTK window that drives it.

pub mod app;
pub mod ui;
