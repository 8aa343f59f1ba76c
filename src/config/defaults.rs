// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Window**: Default and minimum window size
//! - **Feed**: Tile layout and visibility threshold
//! - **Hover**: Scrub bar fade timings
//! - **Playback**: Initial playing intent and mute state

use std::time::Duration;

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;

/// Default window height in logical pixels.
pub const WINDOW_DEFAULT_HEIGHT: f32 = 820.0;

/// Minimum window width in logical pixels.
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Minimum window height in logical pixels.
pub const MIN_WINDOW_HEIGHT: f32 = 560.0;

/// Height reserved for the navigation bar.
pub const NAVBAR_HEIGHT: f32 = 56.0;

// ==========================================================================
// Feed Defaults
// ==========================================================================

/// Fraction of a tile's area that must be inside the feed viewport for the
/// tile to count as intersecting.
pub const VISIBILITY_THRESHOLD: f32 = 0.6;

/// Tile height as a fraction of the feed viewport height.
pub const TILE_VIEWPORT_FRACTION: f32 = 0.7;

/// Vertical gap between tiles.
pub const TILE_SPACING: f32 = 16.0;

/// Padding above the first tile.
pub const FEED_PADDING: f32 = 16.0;

// ==========================================================================
// Hover Defaults
// ==========================================================================

/// Delay after pointer-enter before the scrub bar starts fading.
pub const SCRUB_BAR_FADE_DELAY: Duration = Duration::from_millis(1300);

/// Delay after pointer-enter before the scrub bar is hidden.
pub const SCRUB_BAR_HIDE_DELAY: Duration = Duration::from_millis(1500);

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Whether the feed starts with the playing intent on.
pub const DEFAULT_AUTOPLAY: bool = true;

/// Whether feed videos start muted.
pub const DEFAULT_MUTED: bool = true;

/// Spinner animation frame interval.
pub const SPINNER_TICK: Duration = Duration::from_millis(16);

/// Spinner rotation per tick, in radians.
pub const SPINNER_STEP_RADIANS: f32 = 0.1;

const _: () = {
    assert!(VISIBILITY_THRESHOLD > 0.0 && VISIBILITY_THRESHOLD <= 1.0);
    assert!(TILE_VIEWPORT_FRACTION > 0.0 && TILE_VIEWPORT_FRACTION <= 1.0);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
    assert!(MIN_WINDOW_HEIGHT > NAVBAR_HEIGHT);
};
