// SPDX-License-Identifier: MPL-2.0
//! Async video frame decoder using FFmpeg.
//!
//! The decoder runs on a Tokio blocking thread and talks to the UI through two
//! channels: commands in (unbounded), events out (bounded, for backpressure).
//! It always loops: at end of stream it seeks back to the start and keeps going.

use crate::error::{Error, Result, VideoError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Event channel capacity. Two frames of slack, then the decoder waits.
const EVENT_CHANNEL_CAPACITY: usize = 2;

/// Idle sleep while paused, so the command poll does not spin.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,
    pub width: u32,
    pub height: u32,
    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCommand {
    /// Start or resume paced decoding.
    Play,
    /// Stop sending frames, keep the position.
    Pause,
    /// Stop decoding and release the input.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// Input opened. Duration is unknown for some live sources.
    Opened { duration_secs: Option<f64> },

    /// A new frame is ready for display. The first one is the poster frame.
    FrameReady(DecodedFrame),

    /// First frame after a `Play` command was delivered.
    Playing,

    /// End of stream reached; decoding restarted from the beginning.
    Looped,

    /// One frame could not be converted. Playback continues with the next.
    FrameDropped(String),

    /// Decoding stopped: the decoder exited or paused itself.
    Error(String),
}

/// Async video decoder that runs in a Tokio blocking task.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Creates a decoder for a local path or a URL that FFmpeg can open.
    ///
    /// Local paths are checked up front; URLs fail later through a
    /// [`DecoderEvent::Error`].
    pub fn new(source: &str) -> Result<Self> {
        if !is_remote(source) && !std::path::Path::new(source).exists() {
            return Err(Error::Io(format!("Video file not found: {source}")));
        }

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);

        // FFmpeg contexts are not Send, so the whole loop lives on one thread
        let source = source.to_string();
        tokio::task::spawn_blocking(move || {
            let error_tx = event_tx.clone();
            if let Err(e) = decoder_loop_blocking(&source, command_rx, event_tx) {
                log::warn!("Decoder for {} failed: {}", source, e);
                let _ = error_tx.blocking_send(DecoderEvent::Error(e.to_string()));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    /// Returns a handle that can send commands after `self` moves elsewhere.
    pub fn command_sender(&self) -> mpsc::UnboundedSender<DecoderCommand> {
        self.command_tx.clone()
    }

    /// Receives the next event. Returns `None` once the decoder thread exited.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }
}

fn is_remote(source: &str) -> bool {
    source.contains("://")
}

fn video_error(context: &str, err: impl std::fmt::Display) -> Error {
    Error::Video(VideoError::from_message(&format!("{context}: {err}")))
}

/// Main decoder loop.
///
/// Paused decoding still produces one poster frame right after opening, so a
/// tile has something to show before it ever plays.
fn decoder_loop_blocking(
    source: &str,
    mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
    event_tx: mpsc::Sender<DecoderEvent>,
) -> Result<()> {
    super::init_ffmpeg()?;

    let mut ictx =
        ffmpeg_next::format::input(&source).map_err(|e| video_error("Failed to open video", e))?;

    let input = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or(Error::Video(VideoError::NoVideoStream))?;
    let video_stream_index = input.index();
    let time_base = input.time_base();
    let time_base_f64 = f64::from(time_base.numerator()) / f64::from(time_base.denominator());

    let context_decoder =
        ffmpeg_next::codec::context::Context::from_parameters(input.parameters())
            .map_err(|e| video_error("Failed to create codec context", e))?;
    let mut decoder = context_decoder
        .decoder()
        .video()
        .map_err(|e| video_error("Failed to create video decoder", e))?;

    let width = decoder.width();
    let height = decoder.height();

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGBA,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| video_error("Failed to create scaler", e))?;

    // Container duration is in AV_TIME_BASE units (microseconds)
    let duration_secs = (ictx.duration() > 0).then(|| ictx.duration() as f64 / 1_000_000.0);
    if event_tx
        .blocking_send(DecoderEvent::Opened { duration_secs })
        .is_err()
    {
        return Ok(());
    }

    let mut is_playing = false;
    let mut announce_playing = false;
    let mut decode_poster = true;
    let mut playback_start_time: Option<Instant> = None;
    let mut first_pts: Option<f64> = None;

    loop {
        match command_rx.try_recv() {
            Ok(DecoderCommand::Play) => {
                if !is_playing {
                    is_playing = true;
                    announce_playing = true;
                    playback_start_time = Some(Instant::now());
                    first_pts = None;
                }
            }
            Ok(DecoderCommand::Pause) => {
                is_playing = false;
                announce_playing = false;
                playback_start_time = None;
                first_pts = None;
            }
            Ok(DecoderCommand::Stop) | Err(mpsc::error::TryRecvError::Disconnected) => break,
            Err(mpsc::error::TryRecvError::Empty) => {}
        }

        if !is_playing && !decode_poster {
            std::thread::sleep(IDLE_POLL);
            continue;
        }

        let mut frame_decoded = false;
        for (stream, packet) in ictx.packets() {
            if stream.index() != video_stream_index {
                continue;
            }

            if let Err(e) = decoder.send_packet(&packet) {
                log::debug!("Packet rejected by decoder: {}", e);
                continue;
            }

            let mut decoded_frame = ffmpeg_next::frame::Video::empty();
            if decoder.receive_frame(&mut decoded_frame).is_err() {
                continue;
            }

            let mut rgb_frame = ffmpeg_next::frame::Video::empty();
            if let Err(e) = scaler.run(&decoded_frame, &mut rgb_frame) {
                if event_tx
                    .blocking_send(DecoderEvent::FrameDropped(format!("Scaling failed: {e}")))
                    .is_err()
                {
                    return Ok(());
                }
                continue;
            }

            let pts_secs = decoded_frame
                .timestamp()
                .map_or(0.0, |pts| pts as f64 * time_base_f64);

            // Frame pacing relative to the first frame after (re)start
            if let Some(start_time) = playback_start_time {
                let first = *first_pts.get_or_insert(pts_secs);
                let frame_delay = (pts_secs - first).max(0.0);
                let target_time = start_time + Duration::from_secs_f64(frame_delay);
                let now = Instant::now();
                if target_time > now {
                    std::thread::sleep(target_time - now);
                }
            }

            let frame = DecodedFrame {
                rgba_data: Arc::new(extract_rgba_data(&rgb_frame)),
                width,
                height,
                pts_secs,
            };
            if event_tx
                .blocking_send(DecoderEvent::FrameReady(frame))
                .is_err()
            {
                return Ok(());
            }

            if announce_playing && is_playing {
                announce_playing = false;
                if event_tx.blocking_send(DecoderEvent::Playing).is_err() {
                    return Ok(());
                }
            }

            frame_decoded = true;
            decode_poster = false;
            break;
        }

        if frame_decoded {
            continue;
        }

        // End of stream: rewind and keep playing
        decode_poster = false;
        match ictx.seek(0, ..0) {
            Ok(()) => {
                decoder.flush();
                if is_playing {
                    playback_start_time = Some(Instant::now());
                }
                first_pts = None;
                if event_tx.blocking_send(DecoderEvent::Looped).is_err() {
                    return Ok(());
                }
            }
            Err(e) => {
                is_playing = false;
                announce_playing = false;
                playback_start_time = None;
                let _ = event_tx.blocking_send(DecoderEvent::Error(format!("Loop seek failed: {e}")));
            }
        }
    }

    Ok(())
}

/// Extracts RGBA data from a decoded frame, handling stride correctly.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);
    let row_len = width * 4;

    let mut rgba_bytes = Vec::with_capacity(row_len * height);
    for row in data.chunks(stride).take(height) {
        rgba_bytes.extend_from_slice(&row[..row_len]);
    }

    rgba_bytes
}
