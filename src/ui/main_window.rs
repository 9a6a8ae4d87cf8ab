use fltk::{
    app::{self, Sender},
    button::{Button, ReturnButton},
    enums::{Align, CallbackTrigger, Font},
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    output::Output,
    prelude::*,
    window::Window,
};

use crate::app::controllers::flow::Render;
use crate::app::domain::{AppState, Message};
use crate::app::page::View;
use crate::app::services::theme::ThemeSurface;

use super::theme::{apply_theme, theme_button_label};

const COPY_LABEL: &str = "Copy";
const COPIED_LABEL: &str = "Copied!";
const SUBMIT_LABEL: &str = "Shorten";
const LOADING_LABEL: &str = "Shortening...";

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub logo: Frame,
    pub theme_btn: Button,
    pub form: Flex,
    pub input: Input,
    pub submit_btn: ReturnButton,
    pub error_frame: Frame,
    pub result: Flex,
    pub short_url: Output,
    pub copy_btn: Button,
    pub back_btn: Button,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 560, 240, "\u{1f980} FerrisLink");
    wind.set_xclass("FerrisLink");

    let mut flex = Flex::new(0, 0, 560, 240, None);
    flex.set_type(FlexType::Column);
    flex.set_margin(16);
    flex.set_spacing(10);

    // Header: logo on the left, theme toggle on the right
    let mut header = Flex::default();
    header.set_type(FlexType::Row);
    let mut logo = Frame::default().with_label("\u{1f980} FerrisLink");
    logo.set_label_size(22);
    logo.set_label_font(Font::HelveticaBold);
    logo.set_align(Align::Left | Align::Inside);
    let mut theme_btn = Button::default();
    theme_btn.set_tooltip("Change theme");
    header.fixed(&theme_btn, 36);
    header.end();
    flex.fixed(&header, 40);

    // Form
    let mut form = Flex::default();
    form.set_type(FlexType::Column);
    form.set_spacing(8);
    let mut input_row = Flex::default();
    input_row.set_type(FlexType::Row);
    input_row.set_spacing(8);
    let mut input = Input::default();
    input.set_trigger(CallbackTrigger::Changed);
    let submit_btn = ReturnButton::default().with_label(SUBMIT_LABEL);
    input_row.fixed(&submit_btn, 130);
    input_row.end();
    form.fixed(&input_row, 34);
    let mut error_frame = Frame::default();
    error_frame.set_align(Align::Left | Align::Inside);
    form.fixed(&error_frame, 24);
    form.end();

    // Result
    let mut result = Flex::default();
    result.set_type(FlexType::Column);
    result.set_spacing(8);
    let mut short_url = Output::default();
    short_url.set_text_size(16);
    result.fixed(&short_url, 34);
    let mut button_row = Flex::default();
    button_row.set_type(FlexType::Row);
    button_row.set_spacing(10);
    let copy_btn = Button::default().with_label(COPY_LABEL);
    let back_btn = Button::default().with_label("Back");
    button_row.end();
    result.fixed(&button_row, 34);
    result.end();
    result.hide();

    flex.end();
    wind.resizable(&flex);
    wind.end();

    let mut widgets = MainWidgets {
        wind,
        flex,
        logo,
        theme_btn,
        form,
        input,
        submit_btn,
        error_frame,
        result,
        short_url,
        copy_btn,
        back_btn,
    };
    wire_callbacks(&mut widgets, *sender);
    widgets
}

fn wire_callbacks(w: &mut MainWidgets, s: Sender<Message>) {
    w.input.set_callback(move |i| s.send(Message::UrlChanged(i.value())));
    w.submit_btn.set_callback(move |_| s.send(Message::Submit));
    w.copy_btn.set_callback(move |_| s.send(Message::CopyClicked));
    w.back_btn.set_callback(move |_| s.send(Message::BackClicked));
    w.theme_btn.set_callback(move |_| s.send(Message::ToggleTheme));
    w.wind.set_callback(move |_| {
        if app::event() == fltk::enums::Event::Close {
            s.send(Message::Quit);
        }
    });
}

impl ThemeSurface for MainWidgets {
    fn set_dark_mode(&mut self, is_dark: bool) {
        self.theme_btn.set_label(theme_button_label(is_dark));
        apply_theme(self, is_dark);
    }
}

impl View for MainWidgets {
    fn render(&mut self, state: &AppState, render: Render) {
        match state {
            AppState::Initial(s) => {
                if let Render::Switch(_) = render {
                    self.result.hide();
                    self.form.show();
                }
                // Only push the value when it differs so the cursor stays put while typing
                if self.input.value() != s.url {
                    self.input.set_value(&s.url);
                }
                if s.loading {
                    self.submit_btn.set_label(LOADING_LABEL);
                    self.submit_btn.deactivate();
                } else {
                    self.submit_btn.set_label(SUBMIT_LABEL);
                    self.submit_btn.activate();
                }
                let error_text = s.error.as_ref().map(|e| e.user_message()).unwrap_or("");
                self.error_frame.set_label(error_text);
            }
            AppState::Final(s) => {
                if let Render::Switch(_) = render {
                    self.form.hide();
                    self.result.show();
                }
                self.short_url.set_value(&s.short_url);
                self.copy_btn
                    .set_label(if s.copied { COPIED_LABEL } else { COPY_LABEL });
            }
        }
        self.flex.layout();
        self.wind.redraw();
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        app::copy(text);
    }

    fn show_copied(&mut self) {
        self.copy_btn.set_label(COPIED_LABEL);
        self.copy_btn.redraw();
    }
}
