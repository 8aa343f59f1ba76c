// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for video playback events.
//!
//! One subscription per feed tile. The subscription owns the decoder: when the
//! tile leaves the feed, iced drops the stream, the decoder's command channel
//! disconnects and its thread exits.

use super::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
use crate::error::{Error, Result};
use iced::futures::{SinkExt, Stream};
use iced::stream;
use tokio::sync::mpsc;

/// Stable identity of a feed entry, independent of its position on screen.
pub type TileId = u64;

/// Buffer between the decoder loop and the iced runtime.
const OUTPUT_BUFFER: usize = 4;

/// Handle for sending commands to the decoder from the UI.
#[derive(Clone)]
pub struct DecoderCommandSender {
    video_tx: mpsc::UnboundedSender<DecoderCommand>,
}

impl DecoderCommandSender {
    /// Wraps a raw command channel.
    pub fn new(video_tx: mpsc::UnboundedSender<DecoderCommand>) -> Self {
        Self { video_tx }
    }

    /// Creates a sender with a detached receiver, for driving a media element
    /// without a decoder.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<DecoderCommand>) {
        let (video_tx, video_rx) = mpsc::unbounded_channel();
        (Self::new(video_tx), video_rx)
    }

    pub fn send(&self, command: DecoderCommand) -> Result<()> {
        self.video_tx
            .send(command)
            .map_err(|_| Error::Io("Video decoder not running".to_string()))
    }
}

impl std::fmt::Debug for DecoderCommandSender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderCommandSender")
            .field("closed", &self.video_tx.is_closed())
            .finish()
    }
}

/// Messages emitted by a tile's playback subscription.
#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Decoder spawned; commands can be sent from now on.
    Started(DecoderCommandSender),

    /// Input opened.
    Opened { duration_secs: Option<f64> },

    /// A new frame is ready for display.
    Frame(DecodedFrame),

    /// Playback actually started after a `Play` command.
    Playing,

    /// The video wrapped around to the beginning.
    Looped,

    /// A frame was skipped; the decoder keeps its play state.
    FrameDropped(String),

    /// Decoding stopped; the decoder is paused or gone.
    Error(String),
}

impl From<DecoderEvent> for PlaybackMessage {
    fn from(event: DecoderEvent) -> Self {
        match event {
            DecoderEvent::Opened { duration_secs } => Self::Opened { duration_secs },
            DecoderEvent::FrameReady(frame) => Self::Frame(frame),
            DecoderEvent::Playing => Self::Playing,
            DecoderEvent::Looped => Self::Looped,
            DecoderEvent::FrameDropped(message) => Self::FrameDropped(message),
            DecoderEvent::Error(message) => Self::Error(message),
        }
    }
}

/// A playback message tagged with the tile it belongs to.
#[derive(Debug, Clone)]
pub struct PlaybackEvent {
    pub tile: TileId,
    pub message: PlaybackMessage,
}

/// What to play and for whom. Also the subscription identity: a new URL for
/// the same tile restarts the decoder.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaybackSource {
    pub tile: TileId,
    pub url: String,
}

/// Creates the playback subscription of one tile.
pub fn video_playback(tile: TileId, url: String) -> iced::Subscription<PlaybackEvent> {
    iced::Subscription::run_with(PlaybackSource { tile, url }, playback_stream)
}

fn playback_stream(source: &PlaybackSource) -> impl Stream<Item = PlaybackEvent> {
    let PlaybackSource { tile, url } = source.clone();

    stream::channel(OUTPUT_BUFFER, move |mut output: iced::futures::channel::mpsc::Sender<PlaybackEvent>| async move {
        let tag = |message| PlaybackEvent { tile, message };

        match AsyncDecoder::new(&url) {
            Ok(mut decoder) => {
                let sender = DecoderCommandSender::new(decoder.command_sender());
                let _ = output.send(tag(PlaybackMessage::Started(sender))).await;

                while let Some(event) = decoder.recv_event().await {
                    if output.send(tag(event.into())).await.is_err() {
                        break;
                    }
                }
                log::debug!("Decoder for tile {} exited", tile);
            }
            Err(e) => {
                log::warn!("Cannot start playback of {}: {}", url, e);
                let _ = output.send(tag(PlaybackMessage::Error(e.to_string()))).await;
            }
        }

        // Keep subscription alive but idle
        std::future::pending::<()>().await;
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_message_can_be_debugged() {
        let msg = PlaybackMessage::Error("test error".to_string());
        let debug_str = format!("{:?}", msg);
        assert!(debug_str.contains("test error"));
    }

    #[test]
    fn decoder_events_map_to_messages() {
        assert!(matches!(
            PlaybackMessage::from(DecoderEvent::Playing),
            PlaybackMessage::Playing
        ));
        assert!(matches!(
            PlaybackMessage::from(DecoderEvent::FrameDropped("scale".into())),
            PlaybackMessage::FrameDropped(message) if message == "scale"
        ));
        assert!(matches!(
            PlaybackMessage::from(DecoderEvent::Opened {
                duration_secs: Some(3.0)
            }),
            PlaybackMessage::Opened {
                duration_secs: Some(d)
            } if (d - 3.0).abs() < f64::EPSILON
        ));
    }

    #[test]
    fn sender_reports_closed_receiver() {
        let (sender, receiver) = DecoderCommandSender::channel();
        assert!(sender.send(DecoderCommand::Play).is_ok());
        drop(receiver);
        assert!(sender.send(DecoderCommand::Pause).is_err());
    }

    #[test]
    fn sources_differ_by_url() {
        let a = PlaybackSource {
            tile: 1,
            url: "a.mp4".to_string(),
        };
        let b = PlaybackSource {
            tile: 1,
            url: "b.mp4".to_string(),
        };
        assert_ne!(a, b);
    }
}
