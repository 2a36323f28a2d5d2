use fltk::{
    app::{self, Sender},
    button::Button,
    enums::{Align, CallbackTrigger, Color, FrameType},
    frame::Frame,
    input::SecretInput,
    prelude::*,
    window::Window,
};

use crate::app::auth;
use crate::app::messages::Message;

/// Build the access-code window shown before the editor. On a successful
/// unlock it hides itself and posts [`Message::LaunchEditor`]; closing it
/// before unlocking quits the application.
pub fn build_launcher(sender: &Sender<Message>) -> Window {
    let mut wind = Window::default()
        .with_size(420, 280)
        .with_label("CodeVault")
        .center_screen();
    wind.set_color(Color::from_rgb(229, 231, 235));

    let mut title = Frame::new(0, 30, 420, 40, "CodeVault");
    title.set_label_size(28);
    title.set_label_color(Color::from_rgb(40, 40, 40));

    let mut subtitle = Frame::new(0, 72, 420, 22, "Enter your access code to unlock the editor");
    subtitle.set_label_size(12);
    subtitle.set_label_color(Color::from_rgb(100, 100, 100));

    let mut input = SecretInput::new(60, 115, 300, 32, None);
    input.set_text_size(14);

    let mut message = Frame::new(60, 155, 300, 24, "");
    message.set_label_size(12);
    message.set_align(Align::Center | Align::Inside);

    let mut unlock = Button::new(160, 195, 100, 34, "Unlock");
    unlock.set_frame(FrameType::FlatBox);
    unlock.set_color(Color::from_rgb(212, 175, 55));
    unlock.set_label_color(Color::from_rgb(40, 40, 40));

    wind.end();

    let try_unlock = {
        let sender = *sender;
        let wind = wind.clone();
        let input = input.clone();
        let message = message.clone();
        move || {
            let mut wind = wind.clone();
            let mut message = message.clone();
            let result = auth::check_access_code(&input.value());
            if result.success {
                wind.hide();
                sender.send(Message::LaunchEditor);
            } else {
                message.set_label_color(Color::from_rgb(200, 40, 40));
                message.set_label(&result.message);
            }
        }
    };

    unlock.set_callback({
        let f = try_unlock.clone();
        move |_| f()
    });
    // Enter in the input field unlocks too
    input.set_trigger(CallbackTrigger::EnterKey);
    input.set_callback(move |_| try_unlock());

    // Closing the launcher before unlocking exits
    wind.set_callback(|_| app::quit());

    wind
}
