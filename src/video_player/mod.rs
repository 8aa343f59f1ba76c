// SPDX-License-Identifier: MPL-2.0
//! Video playback engine for the feed.
//!
//! This module provides video playback using FFmpeg for decoding and Tokio
//! blocking tasks for non-blocking frame delivery. Playback is video only.

mod decoder;
pub mod element;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent};
pub use element::{AutoplayPolicy, ElementEvent, ElementState, MediaElement, PlayError};
pub use subscription::{
    video_playback, DecoderCommandSender, PlaybackEvent, PlaybackMessage, PlaybackSource, TileId,
};

use crate::error::{Error, Result};
use std::sync::Once;

static FFMPEG_INIT: Once = Once::new();

/// Initializes FFmpeg once per process.
pub fn init_ffmpeg() -> Result<()> {
    let mut init_result: Result<()> = Ok(());

    FFMPEG_INIT.call_once(|| {
        if let Err(e) = ffmpeg_next::init() {
            init_result = Err(Error::Io(format!("FFmpeg initialization failed: {e}")));
            return;
        }
        ffmpeg_next::format::network::init();

        // Only errors; FFmpeg warnings would flood stderr
        // SAFETY: av_log_set_level is thread-safe and only affects logging
        unsafe {
            ffmpeg_next::ffi::av_log_set_level(ffmpeg_next::ffi::AV_LOG_ERROR);
        }
    });

    init_result
}
