// SPDX-License-Identifier: MPL-2.0
//! Home feed: a vertical list of autoplaying video tiles.
//!
//! The feed owns the shared playback inputs (playing intent, mute state, user
//! activation) and the scroll viewport. After every change it recomputes tile
//! visibility and picks the active tile: the intersecting tile with the
//! largest visible fraction. At most one tile is active at a time, so at most
//! one video plays.

pub mod tile;
pub mod visibility;

use crate::config::{FeedVideoConfig, SCRUB_BAR_FADE_DELAY, SPINNER_TICK};
use crate::domain::filter::{FilterSelection, Region, Species};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::widgets::animated_spinner;
use crate::video_player::{self, AutoplayPolicy, PlaybackEvent, TileId};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{center, operation, scrollable, Column, Id, Text};
use iced::{Element, Length, Subscription, Task};
use std::collections::HashMap;
use visibility::{FeedLayout, IntersectionWatcher, Viewport};

pub const SCROLLABLE_ID: &str = "home-feed-scrollable";

/// One video available to the feed, before filtering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    pub id: TileId,
    pub url: String,
    pub title: Option<String>,
    pub species: Option<Species>,
    pub region: Option<Region>,
}

impl FeedEntry {
    /// Builds an entry from its config form. Unknown labels leave the entry
    /// unclassified.
    #[must_use]
    pub fn from_config(id: TileId, video: &FeedVideoConfig) -> Self {
        Self {
            id,
            url: video.url.clone(),
            title: video.title.clone(),
            species: video.species.as_deref().and_then(Species::from_label),
            region: video.region.as_deref().and_then(Region::from_label),
        }
    }

    /// An unclassified entry for a bare URL or path.
    #[must_use]
    pub fn unclassified(id: TileId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            title: None,
            species: None,
            region: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Tile(TileId, tile::Message),
    Scrolled { offset_y: f32, height: f32 },
    /// Available feed height changed (window resize).
    Resized(f32),
    SpinnerTick,
    Playback(PlaybackEvent),
}

#[derive(Debug)]
pub struct State {
    entries: Vec<FeedEntry>,
    tiles: Vec<tile::State>,
    filter: FilterSelection,
    playing: bool,
    muted: bool,
    user_activated: bool,
    viewport: Viewport,
    /// Another page covers the feed; no tile counts as visible.
    hidden: bool,
    watcher: IntersectionWatcher,
    active: Option<usize>,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new(entries: Vec<FeedEntry>, playing: bool, muted: bool, viewport_height: f32) -> Self {
        let mut state = Self {
            entries,
            tiles: Vec::new(),
            filter: FilterSelection::default(),
            playing,
            muted,
            user_activated: false,
            viewport: Viewport::new(0.0, viewport_height),
            hidden: false,
            watcher: IntersectionWatcher::default(),
            active: None,
            spinner_rotation: 0.0,
        };
        state.rebuild_tiles();
        state
    }

    #[must_use]
    pub fn tiles(&self) -> &[tile::State] {
        &self.tiles
    }

    #[must_use]
    pub fn filter(&self) -> FilterSelection {
        self.filter
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Feed index of the active tile.
    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn layout(&self) -> FeedLayout {
        FeedLayout::for_viewport(self.viewport.height)
    }

    fn policy(&self) -> AutoplayPolicy {
        AutoplayPolicy {
            muted: self.muted,
            user_activated: self.user_activated,
        }
    }

    /// Shows only the entries matching `filter`.
    ///
    /// The model restarts at the top of the list, so the returned task scrolls
    /// the widget back there too.
    pub fn apply_filter(&mut self, filter: FilterSelection) -> Task<Message> {
        if filter == self.filter {
            return Task::none();
        }
        self.filter = filter;
        self.rebuild_tiles();
        log::debug!(
            "Feed filtered to {} of {} entries",
            self.tiles.len(),
            self.entries.len()
        );
        scroll_to_top()
    }

    /// Rebuilds the tile list from the entries, keeping the state of tiles
    /// that stay visible. Dropped tiles stop their decoders.
    fn rebuild_tiles(&mut self) {
        let mut previous: HashMap<TileId, tile::State> =
            self.tiles.drain(..).map(|tile| (tile.id(), tile)).collect();
        let policy = self.policy();

        self.tiles = self
            .entries
            .iter()
            .filter(|entry| self.filter.matches(entry.species, entry.region))
            .enumerate()
            .map(|(index, entry)| match previous.remove(&entry.id) {
                Some(mut tile) => {
                    tile.set_index(index);
                    tile.set_active(false, policy);
                    tile
                }
                None => tile::State::new(entry.id, index, entry.url.clone(), self.muted, self.playing)
                    .with_title(entry.title.clone()),
            })
            .collect();

        self.active = None;
        self.viewport.offset_y = 0.0;
        self.watcher.reset();
        self.refresh_visibility();
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Hides or shows the feed. Hidden tiles stop intersecting, so they pause.
    ///
    /// The scrollable is rebuilt at offset 0 when the feed comes back, so the
    /// model restarts at the top as well.
    pub fn set_hidden(&mut self, hidden: bool) -> Task<Message> {
        if hidden == self.hidden {
            return Task::none();
        }
        self.hidden = hidden;
        if hidden {
            self.refresh_visibility();
            Task::none()
        } else {
            self.viewport.offset_y = 0.0;
            self.refresh_visibility();
            scroll_to_top()
        }
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }
        self.viewport = viewport;
        self.refresh_visibility();
    }

    /// Feeds visibility changes to the tiles, then re-elects the active tile.
    fn refresh_visibility(&mut self) {
        let layout = self.layout();
        let policy = self.policy();
        let viewport = if self.hidden {
            Viewport::new(self.viewport.offset_y, 0.0)
        } else {
            self.viewport
        };
        for change in self.watcher.observe(&layout, viewport, self.tiles.len()) {
            if let Some(tile) = self.tiles.get_mut(change.index) {
                tile.set_intersecting(change.is_intersecting, policy);
            }
        }

        let next = self.watcher.most_visible();
        if next == self.active {
            return;
        }
        // Deactivate first so two tiles are never active together
        if let Some(tile) = self.active.and_then(|index| self.tiles.get_mut(index)) {
            tile.set_active(false, policy);
        }
        if let Some(tile) = next.and_then(|index| self.tiles.get_mut(index)) {
            tile.set_active(true, policy);
        }
        self.active = next;
    }

    fn set_playing(&mut self, playing: bool) {
        self.playing = playing;
        let policy = self.policy();
        for tile in &mut self.tiles {
            tile.set_playing(playing, policy);
        }
        log::debug!("Feed playing intent: {}", playing);
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        let policy = self.policy();
        for tile in &mut self.tiles {
            tile.set_muted(self.muted);
            tile.reconcile(policy);
        }
    }

    fn tile_mut(&mut self, id: TileId) -> Option<&mut tile::State> {
        self.tiles.iter_mut().find(|tile| tile.id() == id)
    }

    /// Whether any tile currently shows a spinner.
    #[must_use]
    pub fn needs_spinner(&self) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.overlay() == tile::Overlay::Spinner)
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tile(id, tile_message) => self.handle_tile_message(id, tile_message),
            Message::Scrolled { offset_y, height } => {
                self.set_viewport(Viewport::new(offset_y, height));
                Task::none()
            }
            Message::Resized(height) => {
                self.set_viewport(Viewport::new(self.viewport.offset_y, height));
                Task::none()
            }
            Message::SpinnerTick => {
                self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                Task::none()
            }
            Message::Playback(PlaybackEvent { tile, message }) => {
                if let Some(tile) = self.tile_mut(tile) {
                    tile.handle(tile::Message::Playback(message));
                }
                Task::none()
            }
        }
    }

    fn handle_tile_message(&mut self, id: TileId, message: tile::Message) -> Task<Message> {
        let Some(tile) = self.tile_mut(id) else {
            return Task::none();
        };

        match tile.handle(message) {
            tile::Effect::None => Task::none(),
            tile::Effect::SetPlaying(playing) => {
                self.user_activated = true;
                self.set_playing(playing);
                Task::none()
            }
            tile::Effect::UserActivated => {
                self.user_activated = true;
                let policy = self.policy();
                for tile in &mut self.tiles {
                    tile.reconcile(policy);
                }
                Task::none()
            }
            tile::Effect::Liked(index) => {
                if let Some(tile) = self.tiles.get_mut(index) {
                    tile.toggle_liked();
                    log::info!("Tile {} liked: {}", tile.id(), tile.is_liked());
                }
                Task::none()
            }
            tile::Effect::ScheduleScrubBarFade(generation) => Task::perform(
                tokio::time::sleep(SCRUB_BAR_FADE_DELAY),
                move |()| Message::Tile(id, tile::Message::ScrubBarFadeElapsed(generation)),
            ),
            tile::Effect::ScheduleScrubBarHide(generation) => Task::perform(
                tokio::time::sleep(tile::SCRUB_BAR_FADE_DURATION),
                move |()| Message::Tile(id, tile::Message::ScrubBarHideElapsed(generation)),
            ),
            tile::Effect::ToggleMute => {
                self.user_activated = true;
                self.toggle_mute();
                Task::none()
            }
        }
    }

    /// One playback subscription per tile, plus the spinner clock while a
    /// spinner is on screen.
    pub fn subscription(&self) -> Subscription<Message> {
        let playback = Subscription::batch(
            self.tiles
                .iter()
                .map(|tile| video_player::video_playback(tile.id(), tile.url().to_string())),
        )
        .map(Message::Playback);

        if self.needs_spinner() && !self.is_hidden() {
            Subscription::batch([
                playback,
                iced::time::every(SPINNER_TICK).map(|_| Message::SpinnerTick),
            ])
        } else {
            playback
        }
    }
}

fn scroll_to_top() -> Task<Message> {
    operation::snap_to(Id::new(SCROLLABLE_ID), RelativeOffset { x: 0.0, y: 0.0 })
}

/// Contextual data needed to render the feed.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub i18n: &'a I18n,
}

/// Render the feed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    if state.tiles.is_empty() {
        return center(Text::new(ctx.i18n.tr("feed-empty")).size(typography::BODY)).into();
    }

    let layout = state.layout();
    let tiles = state.tiles.iter().fold(
        Column::new()
            .spacing(layout.spacing)
            .padding(layout.padding)
            .width(Length::Fill),
        |column, tile_state| {
            let id = tile_state.id();
            column.push(
                tile::view(tile::ViewContext {
                    state: tile_state,
                    i18n: ctx.i18n,
                    height: layout.tile_height,
                    spinner_rotation: state.spinner_rotation,
                })
                .map(move |message| Message::Tile(id, message)),
            )
        },
    );

    scrollable(tiles)
        .id(Id::new(SCROLLABLE_ID))
        .on_scroll(|viewport| Message::Scrolled {
            offset_y: viewport.absolute_offset().y,
            height: viewport.bounds().height,
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
