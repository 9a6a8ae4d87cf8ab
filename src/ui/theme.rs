use fltk::{enums::Color, prelude::*};

use super::main_window::MainWidgets;

/// Sun while dark (click for light), moon while light.
pub fn theme_button_label(is_dark: bool) -> &'static str {
    if is_dark { "\u{2600}" } else { "\u{263e}" }
}

pub fn apply_theme(w: &mut MainWidgets, is_dark: bool) {
    let (bg, fg, field_bg, button_bg, accent, error) = if is_dark {
        (
            Color::from_rgb(25, 25, 25),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(40, 40, 40),
            Color::from_rgb(55, 55, 55),
            Color::from_rgb(254, 240, 138), // yellow-200
            Color::from_rgb(248, 113, 113),
        )
    } else {
        (
            Color::from_rgb(240, 240, 240),
            Color::Black,
            Color::White,
            Color::from_rgb(225, 225, 225),
            Color::from_rgb(79, 70, 229), // indigo-600
            Color::from_rgb(185, 28, 28),  // red-700
        )
    };

    w.wind.set_color(bg);
    w.wind.set_label_color(fg);
    w.flex.set_color(bg);
    w.form.set_color(bg);
    w.result.set_color(bg);

    w.logo.set_label_color(fg);
    w.error_frame.set_label_color(error);

    w.input.set_color(field_bg);
    w.input.set_text_color(fg);
    w.input.set_cursor_color(fg);
    w.input.set_selection_color(accent);
    w.short_url.set_color(field_bg);
    w.short_url.set_text_color(fg);
    w.short_url.set_selection_color(accent);

    w.submit_btn.set_color(button_bg);
    w.submit_btn.set_label_color(fg);
    w.copy_btn.set_color(button_bg);
    w.copy_btn.set_label_color(fg);
    w.back_btn.set_color(button_bg);
    w.back_btn.set_label_color(fg);
    w.theme_btn.set_color(bg);
    w.theme_btn.set_label_color(accent);

    #[cfg(target_os = "windows")]
    {
        if w.wind.shown() {
            set_windows_titlebar_theme(&w.wind, is_dark);
        }
    }

    w.wind.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}
