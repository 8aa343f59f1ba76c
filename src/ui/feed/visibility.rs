// SPDX-License-Identifier: MPL-2.0
//! Tile visibility inside the feed's scroll viewport.
//!
//! Tiles are laid out in a single column with a fixed stride, so each tile's
//! vertical span follows from its index. Tiles always span the full viewport
//! width, which makes the visible height fraction equal to the visible area
//! fraction. There is no root margin: the viewport is the scrollable itself.

use crate::config::{FEED_PADDING, TILE_SPACING, TILE_VIEWPORT_FRACTION, VISIBILITY_THRESHOLD};

/// The visible part of the feed, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    /// Scroll offset from the top of the content.
    pub offset_y: f32,
    pub height: f32,
}

impl Viewport {
    #[must_use]
    pub fn new(offset_y: f32, height: f32) -> Self {
        Self {
            offset_y: offset_y.max(0.0),
            height: height.max(0.0),
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.offset_y + self.height
    }
}

/// Column layout of the feed, derived from the viewport height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedLayout {
    pub tile_height: f32,
    pub spacing: f32,
    pub padding: f32,
}

impl FeedLayout {
    /// Layout for a viewport of the given height.
    #[must_use]
    pub fn for_viewport(viewport_height: f32) -> Self {
        Self {
            tile_height: (viewport_height * TILE_VIEWPORT_FRACTION).max(1.0),
            spacing: TILE_SPACING,
            padding: FEED_PADDING,
        }
    }

    /// Distance between the tops of two consecutive tiles.
    #[must_use]
    pub fn stride(&self) -> f32 {
        self.tile_height + self.spacing
    }

    /// Top edge of the tile at `index`, in content coordinates.
    #[must_use]
    pub fn tile_top(&self, index: usize) -> f32 {
        self.padding + index as f32 * self.stride()
    }

    /// Fraction of the tile at `index` that lies inside the viewport.
    #[must_use]
    pub fn visible_fraction(&self, index: usize, viewport: Viewport) -> f32 {
        let top = self.tile_top(index);
        let bottom = top + self.tile_height;
        let visible = (bottom.min(viewport.bottom()) - top.max(viewport.offset_y)).max(0.0);
        (visible / self.tile_height).clamp(0.0, 1.0)
    }
}

/// One tile's visibility after a viewport change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub index: usize,
    pub ratio: f32,
    pub is_intersecting: bool,
}

/// Tracks which tiles cross the visibility threshold.
///
/// Like a browser intersection observer with a single threshold, it reports a
/// tile only when its intersecting state flips, plus every tile on the first
/// observation.
#[derive(Debug, Clone)]
pub struct IntersectionWatcher {
    threshold: f32,
    intersecting: Vec<Option<bool>>,
    ratios: Vec<f32>,
}

impl Default for IntersectionWatcher {
    fn default() -> Self {
        Self::new(VISIBILITY_THRESHOLD)
    }
}

impl IntersectionWatcher {
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            intersecting: Vec::new(),
            ratios: Vec::new(),
        }
    }

    /// Forgets all tiles, so the next observation reports each of them.
    pub fn reset(&mut self) {
        self.intersecting.clear();
        self.ratios.clear();
    }

    /// Latest visible fraction of the tile at `index`.
    #[must_use]
    pub fn ratio(&self, index: usize) -> f32 {
        self.ratios.get(index).copied().unwrap_or(0.0)
    }

    /// Recomputes every tile's visibility and returns the ones that changed.
    pub fn observe(
        &mut self,
        layout: &FeedLayout,
        viewport: Viewport,
        count: usize,
    ) -> Vec<IntersectionEntry> {
        self.intersecting.resize(count, None);
        self.ratios.resize(count, 0.0);

        let mut changes = Vec::new();
        for index in 0..count {
            let ratio = layout.visible_fraction(index, viewport);
            let is_intersecting = ratio >= self.threshold;
            self.ratios[index] = ratio;

            if self.intersecting[index] != Some(is_intersecting) {
                self.intersecting[index] = Some(is_intersecting);
                changes.push(IntersectionEntry {
                    index,
                    ratio,
                    is_intersecting,
                });
            }
        }
        changes
    }

    /// Index of the intersecting tile with the largest visible fraction.
    #[must_use]
    pub fn most_visible(&self) -> Option<usize> {
        self.ratios
            .iter()
            .enumerate()
            .filter(|(_, ratio)| **ratio >= self.threshold)
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(index, _)| index)
    }
}
