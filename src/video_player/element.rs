// SPDX-License-Identifier: MPL-2.0
//! Per-tile media element.
//!
//! A `MediaElement` is the UI-side handle of one looping, inline video: it
//! tracks whether playback is paused, requested, or confirmed, holds the last
//! decoded frame, and forwards play/pause to the decoder. Starting playback is
//! subject to an [`AutoplayPolicy`], like a browser `<video>` element.
//!
//! ```text
//!   Paused ──play()──▶ PlayPending ──Playing event──▶ Playing
//!     ▲                    │                             │
//!     └──── pause() / Error event ◀──────────────────────┘
//! ```

use super::subscription::{DecoderCommandSender, PlaybackMessage};
use super::DecoderCommand;
use iced::widget::image;
use std::sync::Arc;

/// Playback state of a media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElementState {
    #[default]
    Paused,
    /// `Play` was sent; waiting for the decoder to confirm.
    PlayPending,
    Playing,
}

/// Rules for starting playback without a user gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AutoplayPolicy {
    /// The element that wants to start is muted.
    pub muted: bool,
    /// The user has interacted with the feed at least once.
    pub user_activated: bool,
}

impl AutoplayPolicy {
    /// Muted media may always start; audible media needs a user activation.
    #[must_use]
    pub fn allows_start(self) -> bool {
        self.muted || self.user_activated
    }
}

/// Why a playback start was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayError {
    /// Blocked by the autoplay policy.
    NotAllowed,
    /// The decoder is not running yet. The request is kept and replayed once
    /// it starts.
    NotReady,
}

impl std::fmt::Display for PlayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayError::NotAllowed => write!(f, "playback start not allowed by autoplay policy"),
            PlayError::NotReady => write!(f, "decoder not ready"),
        }
    }
}

impl std::error::Error for PlayError {}

/// Notable outcome of a playback message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementEvent {
    /// The decoder confirmed a pending start.
    Started,
    /// Playback failed; the element went back to paused.
    Failed(String),
    /// A frame was skipped; the play state is unchanged.
    FrameDropped(String),
}

#[derive(Debug)]
pub struct MediaElement {
    url: String,
    state: ElementState,
    muted: bool,
    sender: Option<DecoderCommandSender>,
    start_requested: bool,
    frame: Option<image::Handle>,
    position_secs: f64,
    duration_secs: Option<f64>,
}

impl MediaElement {
    #[must_use]
    pub fn new(url: impl Into<String>, muted: bool) -> Self {
        Self {
            url: url.into(),
            state: ElementState::Paused,
            muted,
            sender: None,
            start_requested: false,
            frame: None,
            position_secs: 0.0,
            duration_secs: None,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn state(&self) -> ElementState {
        self.state
    }

    /// Returns true while playback is requested or running.
    #[must_use]
    pub fn is_started(&self) -> bool {
        !matches!(self.state, ElementState::Paused)
    }

    #[must_use]
    pub fn muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Last decoded frame, if any.
    #[must_use]
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }

    /// Playback progress in `0.0..=1.0`, or 0 when the duration is unknown.
    #[must_use]
    pub fn progress(&self) -> f32 {
        match self.duration_secs {
            Some(duration) if duration > 0.0 => (self.position_secs / duration).clamp(0.0, 1.0) as f32,
            _ => 0.0,
        }
    }

    /// Requests playback.
    ///
    /// Does nothing if playback is already requested or running.
    pub fn play(&mut self, policy: AutoplayPolicy) -> Result<(), PlayError> {
        if self.is_started() {
            return Ok(());
        }
        if !policy.allows_start() {
            return Err(PlayError::NotAllowed);
        }

        let Some(sender) = &self.sender else {
            self.start_requested = true;
            return Err(PlayError::NotReady);
        };
        if sender.send(DecoderCommand::Play).is_err() {
            self.start_requested = true;
            return Err(PlayError::NotReady);
        }

        self.state = ElementState::PlayPending;
        Ok(())
    }

    /// Pauses playback and forgets any start request.
    pub fn pause(&mut self) {
        self.start_requested = false;
        if !self.is_started() {
            return;
        }
        if let Some(sender) = &self.sender {
            let _ = sender.send(DecoderCommand::Pause);
        }
        self.state = ElementState::Paused;
    }

    /// Applies a message from the playback subscription.
    pub fn handle(&mut self, message: PlaybackMessage) -> Option<ElementEvent> {
        match message {
            PlaybackMessage::Started(sender) => {
                if std::mem::take(&mut self.start_requested)
                    && sender.send(DecoderCommand::Play).is_ok()
                {
                    self.state = ElementState::PlayPending;
                }
                self.sender = Some(sender);
                None
            }
            PlaybackMessage::Opened { duration_secs } => {
                self.duration_secs = duration_secs;
                None
            }
            PlaybackMessage::Frame(frame) => {
                self.position_secs = frame.pts_secs;
                self.frame = Some(image::Handle::from_rgba(
                    frame.width,
                    frame.height,
                    Arc::unwrap_or_clone(frame.rgba_data),
                ));
                None
            }
            PlaybackMessage::Playing => {
                // A confirmation for a start that was paused in the meantime is stale
                if self.state == ElementState::PlayPending {
                    self.state = ElementState::Playing;
                    Some(ElementEvent::Started)
                } else {
                    None
                }
            }
            PlaybackMessage::Looped => {
                self.position_secs = 0.0;
                None
            }
            PlaybackMessage::FrameDropped(message) => Some(ElementEvent::FrameDropped(message)),
            PlaybackMessage::Error(message) => {
                self.state = ElementState::Paused;
                self.start_requested = false;
                Some(ElementEvent::Failed(message))
            }
        }
    }
}

impl Drop for MediaElement {
    fn drop(&mut self) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(DecoderCommand::Stop);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_player::DecodedFrame;
    use tokio::sync::mpsc::error::TryRecvError;

    const MUTED: AutoplayPolicy = AutoplayPolicy {
        muted: true,
        user_activated: false,
    };

    fn attached(muted: bool) -> (MediaElement, tokio::sync::mpsc::UnboundedReceiver<DecoderCommand>) {
        let (sender, receiver) = DecoderCommandSender::channel();
        let mut element = MediaElement::new("clip.mp4", muted);
        assert!(element.handle(PlaybackMessage::Started(sender)).is_none());
        (element, receiver)
    }

    #[test]
    fn autoplay_policy_requires_mute_or_activation() {
        assert!(MUTED.allows_start());
        assert!(AutoplayPolicy {
            muted: false,
            user_activated: true
        }
        .allows_start());
        assert!(!AutoplayPolicy::default().allows_start());
    }

    #[test]
    fn play_is_confirmed_by_decoder() {
        let (mut element, mut commands) = attached(true);

        assert_eq!(element.play(MUTED), Ok(()));
        assert_eq!(element.state(), ElementState::PlayPending);
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Play));

        assert_eq!(
            element.handle(PlaybackMessage::Playing),
            Some(ElementEvent::Started)
        );
        assert_eq!(element.state(), ElementState::Playing);
    }

    #[test]
    fn repeated_play_sends_single_command() {
        let (mut element, mut commands) = attached(true);
        element.play(MUTED).unwrap();
        element.play(MUTED).unwrap();
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Play));
        assert_eq!(commands.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn autoplay_rejection_keeps_element_paused() {
        let (mut element, mut commands) = attached(false);
        assert_eq!(
            element.play(AutoplayPolicy::default()),
            Err(PlayError::NotAllowed)
        );
        assert_eq!(element.state(), ElementState::Paused);
        assert_eq!(commands.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn play_before_start_is_replayed() {
        let mut element = MediaElement::new("clip.mp4", true);
        assert_eq!(element.play(MUTED), Err(PlayError::NotReady));
        assert_eq!(element.state(), ElementState::Paused);

        let (sender, mut commands) = DecoderCommandSender::channel();
        element.handle(PlaybackMessage::Started(sender));
        assert_eq!(element.state(), ElementState::PlayPending);
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Play));
    }

    #[test]
    fn pause_before_start_cancels_replay() {
        let mut element = MediaElement::new("clip.mp4", true);
        let _ = element.play(MUTED);
        element.pause();

        let (sender, mut commands) = DecoderCommandSender::channel();
        element.handle(PlaybackMessage::Started(sender));
        assert_eq!(element.state(), ElementState::Paused);
        assert_eq!(commands.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn stale_confirmation_is_ignored() {
        let (mut element, _commands) = attached(true);
        element.play(MUTED).unwrap();
        element.pause();
        assert_eq!(element.handle(PlaybackMessage::Playing), None);
        assert_eq!(element.state(), ElementState::Paused);
    }

    #[test]
    fn error_returns_to_paused() {
        let (mut element, _commands) = attached(true);
        element.play(MUTED).unwrap();
        let event = element.handle(PlaybackMessage::Error("boom".to_string()));
        assert_eq!(event, Some(ElementEvent::Failed("boom".to_string())));
        assert_eq!(element.state(), ElementState::Paused);
    }

    #[test]
    fn dropped_frame_keeps_pending_start() {
        let (mut element, mut commands) = attached(true);
        element.play(MUTED).unwrap();
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Play));

        let event = element.handle(PlaybackMessage::FrameDropped("Scaling failed".to_string()));
        assert_eq!(
            event,
            Some(ElementEvent::FrameDropped("Scaling failed".to_string()))
        );
        assert_eq!(element.state(), ElementState::PlayPending);

        // Decoding goes on: the next good frame confirms the start
        element.handle(PlaybackMessage::Frame(DecodedFrame {
            rgba_data: Arc::new(vec![0; 4]),
            width: 1,
            height: 1,
            pts_secs: 0.04,
        }));
        assert_eq!(element.handle(PlaybackMessage::Playing), Some(ElementEvent::Started));
        assert_eq!(element.state(), ElementState::Playing);

        // No second Play was needed
        assert_eq!(commands.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn frames_update_progress() {
        let (mut element, _commands) = attached(true);
        element.handle(PlaybackMessage::Opened {
            duration_secs: Some(10.0),
        });
        element.handle(PlaybackMessage::Frame(DecodedFrame {
            rgba_data: Arc::new(vec![0; 4]),
            width: 1,
            height: 1,
            pts_secs: 2.5,
        }));
        assert!(element.frame().is_some());
        assert!((element.progress() - 0.25).abs() < f32::EPSILON);

        element.handle(PlaybackMessage::Looped);
        assert_eq!(element.progress(), 0.0);
    }

    #[test]
    fn drop_sends_stop() {
        let (element, mut commands) = attached(true);
        drop(element);
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Stop));
    }
}
