// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes drive the feed viewport height. Video playback and the
//! spinner clock come from the feed itself.

use super::Message;
use crate::ui::feed;
use iced::{event, window, Subscription};

/// Routes native window events to the application.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Playback streams for the feed tiles, plus the spinner tick while needed.
pub fn create_feed_subscription(feed: &feed::State) -> Subscription<Message> {
    feed.subscription().map(Message::Feed)
}
