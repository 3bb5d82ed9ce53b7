// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Arrow keys drive the gallery the same way the two buttons do. Keys that a
//! widget already captured are left alone.

use super::Message;
use crate::ui::gallery;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, Subscription};

/// Gallery event bound to `key`, if any.
#[must_use]
pub fn gallery_message_for_key(key: &Key) -> Option<gallery::Message> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(gallery::Message::Previous),
        Key::Named(Named::ArrowRight) => Some(gallery::Message::Next),
        _ => None,
    }
}

/// Creates the keyboard subscription for gallery navigation.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if status == event::Status::Captured {
            return None;
        }

        match event {
            event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                gallery_message_for_key(&key).map(Message::Gallery)
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_gallery_events() {
        assert_eq!(
            gallery_message_for_key(&Key::Named(Named::ArrowLeft)),
            Some(gallery::Message::Previous)
        );
        assert_eq!(
            gallery_message_for_key(&Key::Named(Named::ArrowRight)),
            Some(gallery::Message::Next)
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(gallery_message_for_key(&Key::Named(Named::ArrowUp)), None);
        assert_eq!(gallery_message_for_key(&Key::Character("n".into())), None);
    }
}
