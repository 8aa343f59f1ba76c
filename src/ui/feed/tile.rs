// SPDX-License-Identifier: MPL-2.0
//! A single video tile of the home feed.
//!
//! The tile owns a [`MediaElement`] and is the only place that tells it to
//! play or pause. Everything else (visibility, the feed-wide playing intent,
//! the choice of active tile) just updates the tile's inputs, and
//! [`State::reconcile`] turns them into at most one element call.
//!
//! Hovering reveals a scrub bar for a short while. Each pointer-enter starts a
//! new hover session with its own generation number; timer messages carrying
//! an older generation are ignored, so re-entering restarts the fade.

use crate::config::{SCRUB_BAR_FADE_DELAY, SCRUB_BAR_HIDE_DELAY};
use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use crate::video_player::{
    AutoplayPolicy, ElementEvent, MediaElement, PlaybackMessage, PlayError, TileId,
};
use iced::widget::{
    button, center, container, image, mouse_area, Column, Container, Row, Space, Stack, Text,
};
use iced::{alignment, ContentFit, Element, Length};
use std::time::Duration;

/// Time between the fade start and the scrub bar disappearing.
pub const SCRUB_BAR_FADE_DURATION: Duration =
    SCRUB_BAR_HIDE_DELAY.saturating_sub(SCRUB_BAR_FADE_DELAY);

/// What is drawn on top of the video.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    /// "Tap to play" hint.
    Instruction,
    Spinner,
}

/// Chooses the overlay for a tile.
///
/// The first tile keeps its hint until the video starts; later tiles swap the
/// hint for a spinner while they are expected to be playing.
#[must_use]
pub fn overlay(loading: bool, is_first: bool, playing: bool) -> Overlay {
    match (loading, is_first, playing) {
        (false, _, _) => Overlay::None,
        (true, true, _) | (true, false, false) => Overlay::Instruction,
        (true, false, true) => Overlay::Spinner,
    }
}

/// Scrub bar visibility within one hover session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrubBar {
    #[default]
    Hidden,
    Visible,
    Fading,
}

impl ScrubBar {
    #[must_use]
    pub fn alpha(self) -> f32 {
        match self {
            ScrubBar::Hidden => opacity::TRANSPARENT,
            ScrubBar::Visible => opacity::OPAQUE,
            ScrubBar::Fading => opacity::SCRUB_BAR_FADING,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Pressed,
    DoubleClicked,
    PointerEntered,
    /// Fade timer of the given hover session elapsed.
    ScrubBarFadeElapsed(u64),
    /// Hide timer of the given hover session elapsed.
    ScrubBarHideElapsed(u64),
    ToggleMute,
    Playback(PlaybackMessage),
}

/// Effects produced by tile interactions, handled by the feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user asked for the playing intent to become this value.
    SetPlaying(bool),
    /// The click only unblocks a refused start; the intent stays as is.
    UserActivated,
    /// Double click on the tile at this feed index.
    Liked(usize),
    /// Start the fade timer for this hover session.
    ScheduleScrubBarFade(u64),
    /// Start the hide timer for this hover session.
    ScheduleScrubBarHide(u64),
    ToggleMute,
}

#[derive(Debug)]
pub struct State {
    id: TileId,
    index: usize,
    title: Option<String>,
    element: MediaElement,
    is_active: bool,
    is_intersecting: bool,
    playing: bool,
    loading: bool,
    /// Last start attempt was refused by the autoplay policy.
    start_refused: bool,
    liked: bool,
    hover_generation: u64,
    scrub_bar: ScrubBar,
}

impl State {
    #[must_use]
    pub fn new(id: TileId, index: usize, url: impl Into<String>, muted: bool, playing: bool) -> Self {
        Self {
            id,
            index,
            title: None,
            element: MediaElement::new(url, muted),
            is_active: false,
            is_intersecting: false,
            playing,
            loading: true,
            start_refused: false,
            liked: false,
            hover_generation: 0,
            scrub_bar: ScrubBar::Hidden,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Moves the tile to another feed position (after refiltering).
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    #[must_use]
    pub fn url(&self) -> &str {
        self.element.url()
    }

    #[must_use]
    pub fn element(&self) -> &MediaElement {
        &self.element
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[must_use]
    pub fn is_intersecting(&self) -> bool {
        self.is_intersecting
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn is_liked(&self) -> bool {
        self.liked
    }

    pub fn toggle_liked(&mut self) {
        self.liked = !self.liked;
    }

    #[must_use]
    pub fn scrub_bar(&self) -> ScrubBar {
        self.scrub_bar
    }

    /// Overlay for the current inputs.
    #[must_use]
    pub fn overlay(&self) -> Overlay {
        overlay(self.loading, self.index == 0, self.playing)
    }

    /// Whether this tile should be playing right now.
    #[must_use]
    pub fn desired_playing(&self) -> bool {
        self.is_active && self.is_intersecting && self.playing
    }

    pub fn set_active(&mut self, active: bool, policy: AutoplayPolicy) {
        self.is_active = active;
        self.reconcile(policy);
    }

    pub fn set_intersecting(&mut self, intersecting: bool, policy: AutoplayPolicy) {
        self.is_intersecting = intersecting;
        self.reconcile(policy);
    }

    pub fn set_playing(&mut self, playing: bool, policy: AutoplayPolicy) {
        self.playing = playing;
        self.reconcile(policy);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.element.set_muted(muted);
    }

    /// Brings the media element in line with [`Self::desired_playing`].
    ///
    /// A refused start is logged and dropped; the tile stays paused and keeps
    /// its loading overlay until some later input change succeeds.
    pub fn reconcile(&mut self, policy: AutoplayPolicy) {
        self.start_refused = false;
        if !self.desired_playing() {
            self.element.pause();
            return;
        }

        match self.element.play(policy) {
            Ok(()) => {}
            Err(PlayError::NotReady) => {
                log::debug!("Tile {} will start once its decoder is up", self.id);
            }
            Err(e @ PlayError::NotAllowed) => {
                log::debug!("Tile {} start refused: {}", self.id, e);
                self.start_refused = true;
            }
        }
    }

    /// Handles a tile message.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            // Toggling after a refused start would only pause a paused video
            Message::Pressed if self.start_refused => Effect::UserActivated,
            Message::Pressed => Effect::SetPlaying(!self.playing),
            Message::DoubleClicked => Effect::Liked(self.index),
            Message::PointerEntered => {
                self.hover_generation = self.hover_generation.wrapping_add(1);
                self.scrub_bar = ScrubBar::Visible;
                Effect::ScheduleScrubBarFade(self.hover_generation)
            }
            Message::ScrubBarFadeElapsed(generation) => {
                if generation == self.hover_generation && self.scrub_bar == ScrubBar::Visible {
                    self.scrub_bar = ScrubBar::Fading;
                    Effect::ScheduleScrubBarHide(generation)
                } else {
                    Effect::None
                }
            }
            Message::ScrubBarHideElapsed(generation) => {
                if generation == self.hover_generation {
                    self.scrub_bar = ScrubBar::Hidden;
                }
                Effect::None
            }
            Message::ToggleMute => Effect::ToggleMute,
            Message::Playback(playback) => {
                match self.element.handle(playback) {
                    Some(ElementEvent::Started) => {
                        if self.loading {
                            log::debug!("Tile {} started playing", self.id);
                        }
                        self.loading = false;
                    }
                    Some(ElementEvent::FrameDropped(message)) => {
                        log::debug!("Tile {} dropped a frame: {}", self.id, message);
                    }
                    Some(ElementEvent::Failed(message)) => {
                        let error = VideoError::from_message(&message);
                        log::warn!("Tile {} playback failed ({}): {}", self.id, error, message);
                    }
                    None => {}
                }
                Effect::None
            }
        }
    }
}

/// Contextual data needed to render a tile.
pub struct ViewContext<'a> {
    pub state: &'a State,
    pub i18n: &'a I18n,
    pub height: f32,
    pub spinner_rotation: f32,
}

/// Render a tile.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let video: Element<'a, Message> = match state.element.frame() {
        Some(handle) => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => Space::new().width(Length::Fill).height(Length::Fill).into(),
    };

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(video);

    match state.overlay() {
        Overlay::Instruction => {
            let hint = Container::new(Text::new(ctx.i18n.tr("feed-instruction")).size(typography::BODY))
                .padding([spacing::XS, spacing::MD])
                .style(styles::overlay::indicator);
            layers = layers.push(center(hint));
        }
        Overlay::Spinner => {
            let spinner = AnimatedSpinner::new(palette::WHITE, ctx.spinner_rotation).into_element();
            layers = layers.push(center(spinner));
        }
        Overlay::None => {}
    }

    layers = layers.push(build_chrome(&ctx));

    let surface = Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fixed(ctx.height))
        .clip(true)
        .style(styles::container::tile);

    mouse_area(surface)
        .on_press(Message::Pressed)
        .on_double_click(Message::DoubleClicked)
        .on_enter(Message::PointerEntered)
        .into()
}

/// Title, like badge, mute toggle and scrub bar around the edges of the tile.
fn build_chrome<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;

    let mut top = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center);
    let title = state
        .title
        .clone()
        .unwrap_or_else(|| ctx.i18n.tr("feed-untitled"));
    top = top.push(
        Container::new(Text::new(title).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::XS])
            .style(styles::overlay::indicator),
    );
    top = top.push(Space::new().width(Length::Fill));
    if state.liked {
        top = top.push(
            Container::new(Text::new(format!("♥ {}", ctx.i18n.tr("feed-liked"))).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::overlay::like_badge),
        );
    }

    let mute_key = if state.element.muted() {
        "feed-unmute"
    } else {
        "feed-mute"
    };
    let mute_button = button(Text::new(ctx.i18n.tr(mute_key)).size(typography::CAPTION))
        .on_press(Message::ToggleMute)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));
    let bottom = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(mute_button);

    let mut column = Column::new()
        .padding(spacing::SM)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top)
        .push(Space::new().height(Length::Fill))
        .push(bottom);

    if state.scrub_bar != ScrubBar::Hidden {
        column = column.push(build_scrub_bar(state.element.progress(), state.scrub_bar.alpha()));
    }

    column.into()
}

fn build_scrub_bar<'a>(progress: f32, alpha: f32) -> Element<'a, Message> {
    let played = (progress * 1000.0).round() as u16;
    let remaining = 1000u16.saturating_sub(played);

    let mut track = Row::new().height(Length::Fixed(sizing::SCRUB_BAR_HEIGHT));
    if played > 0 {
        track = track.push(
            container(Space::new())
                .width(Length::FillPortion(played))
                .height(Length::Fill)
                .style(styles::overlay::scrub_fill(alpha)),
        );
    }
    if remaining > 0 {
        track = track.push(
            container(Space::new())
                .width(Length::FillPortion(remaining))
                .height(Length::Fill)
                .style(styles::overlay::scrub_track(alpha)),
        );
    }
    track.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::video_player::{DecoderCommand, DecoderCommandSender, ElementState};

    const MUTED: AutoplayPolicy = AutoplayPolicy {
        muted: true,
        user_activated: false,
    };

    fn started_tile(index: usize) -> (State, tokio::sync::mpsc::UnboundedReceiver<DecoderCommand>) {
        let mut tile = State::new(index as TileId, index, "clip.mp4", true, true);
        let (sender, receiver) = DecoderCommandSender::channel();
        tile.handle(Message::Playback(PlaybackMessage::Started(sender)));
        (tile, receiver)
    }

    #[test]
    fn first_tile_shows_instruction_while_loading() {
        assert_eq!(overlay(true, true, true), Overlay::Instruction);
        assert_eq!(overlay(true, true, false), Overlay::Instruction);
        assert_eq!(overlay(false, true, true), Overlay::None);
    }

    #[test]
    fn later_tiles_show_spinner_only_when_playing() {
        assert_eq!(overlay(true, false, false), Overlay::Instruction);
        assert_eq!(overlay(true, false, true), Overlay::Spinner);
        assert_eq!(overlay(false, false, true), Overlay::None);
        assert_eq!(overlay(false, false, false), Overlay::None);
    }

    #[test]
    fn plays_only_when_active_intersecting_and_playing() {
        let (mut tile, mut commands) = started_tile(1);

        tile.set_intersecting(true, MUTED);
        assert!(commands.try_recv().is_err());

        tile.set_active(true, MUTED);
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Play));
        assert_eq!(tile.element().state(), ElementState::PlayPending);

        tile.set_intersecting(false, MUTED);
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Pause));
        assert_eq!(tile.element().state(), ElementState::Paused);
    }

    #[test]
    fn losing_visibility_pauses_regardless_of_intent() {
        let (mut tile, mut commands) = started_tile(0);
        tile.set_active(true, MUTED);
        tile.set_intersecting(true, MUTED);
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Play));

        tile.set_playing(true, MUTED);
        tile.set_intersecting(false, MUTED);
        assert_eq!(commands.try_recv(), Ok(DecoderCommand::Pause));
    }

    #[test]
    fn loading_clears_on_confirmed_start() {
        let (mut tile, _commands) = started_tile(2);
        tile.set_active(true, MUTED);
        tile.set_intersecting(true, MUTED);
        assert_eq!(tile.overlay(), Overlay::Spinner);

        tile.handle(Message::Playback(PlaybackMessage::Playing));
        assert!(!tile.is_loading());
        assert_eq!(tile.overlay(), Overlay::None);
    }

    #[test]
    fn refused_start_keeps_loading() {
        let mut tile = State::new(3, 3, "clip.mp4", false, true);
        let (sender, mut commands) = DecoderCommandSender::channel();
        tile.handle(Message::Playback(PlaybackMessage::Started(sender)));

        tile.set_active(true, AutoplayPolicy::default());
        tile.set_intersecting(true, AutoplayPolicy::default());
        assert!(commands.try_recv().is_err());
        assert!(tile.is_loading());
        assert_eq!(tile.element().state(), ElementState::Paused);
    }

    #[test]
    fn press_toggles_intent_even_when_not_active() {
        let (mut tile, _commands) = started_tile(1);
        tile.set_intersecting(true, MUTED);
        assert!(!tile.is_active());
        assert_eq!(tile.handle(Message::Pressed), Effect::SetPlaying(false));

        tile.set_playing(false, MUTED);
        assert_eq!(tile.handle(Message::Pressed), Effect::SetPlaying(true));
    }

    #[test]
    fn press_toggles_intent_while_decoder_not_ready() {
        let mut tile = State::new(5, 0, "clip.mp4", true, true);
        tile.set_active(true, MUTED);
        tile.set_intersecting(true, MUTED);
        assert!(!tile.element().is_started());
        assert_eq!(tile.handle(Message::Pressed), Effect::SetPlaying(false));
    }

    #[test]
    fn press_after_refused_start_only_activates() {
        let mut tile = State::new(3, 0, "clip.mp4", false, true);
        let (sender, _commands) = DecoderCommandSender::channel();
        tile.handle(Message::Playback(PlaybackMessage::Started(sender)));
        tile.set_active(true, AutoplayPolicy::default());
        tile.set_intersecting(true, AutoplayPolicy::default());
        assert_eq!(tile.handle(Message::Pressed), Effect::UserActivated);

        let activated = AutoplayPolicy {
            muted: false,
            user_activated: true,
        };
        tile.reconcile(activated);
        assert_eq!(tile.element().state(), ElementState::PlayPending);
        // Started now, so the next click is an ordinary toggle
        assert_eq!(tile.handle(Message::Pressed), Effect::SetPlaying(false));
    }

    #[test]
    fn double_click_reports_index() {
        let mut tile = State::new(9, 4, "clip.mp4", true, true);
        assert_eq!(tile.handle(Message::DoubleClicked), Effect::Liked(4));
    }

    #[test]
    fn hover_session_fades_then_hides() {
        let mut tile = State::new(1, 0, "clip.mp4", true, true);

        let effect = tile.handle(Message::PointerEntered);
        assert_eq!(effect, Effect::ScheduleScrubBarFade(1));
        assert_eq!(tile.scrub_bar(), ScrubBar::Visible);

        let effect = tile.handle(Message::ScrubBarFadeElapsed(1));
        assert_eq!(effect, Effect::ScheduleScrubBarHide(1));
        assert_eq!(tile.scrub_bar(), ScrubBar::Fading);

        tile.handle(Message::ScrubBarHideElapsed(1));
        assert_eq!(tile.scrub_bar(), ScrubBar::Hidden);
    }

    #[test]
    fn reentry_cancels_previous_fade() {
        let mut tile = State::new(1, 0, "clip.mp4", true, true);
        tile.handle(Message::PointerEntered);
        tile.handle(Message::PointerEntered);

        // Timers of the first session arrive late and are ignored
        assert_eq!(tile.handle(Message::ScrubBarFadeElapsed(1)), Effect::None);
        tile.handle(Message::ScrubBarHideElapsed(1));
        assert_eq!(tile.scrub_bar(), ScrubBar::Visible);

        assert_eq!(
            tile.handle(Message::ScrubBarFadeElapsed(2)),
            Effect::ScheduleScrubBarHide(2)
        );
    }

    #[test]
    fn fade_duration_matches_delays() {
        assert_eq!(SCRUB_BAR_FADE_DURATION, Duration::from_millis(200));
    }

    #[test]
    fn tile_view_renders() {
        let i18n = I18n::default();
        let mut tile = State::new(1, 1, "clip.mp4", true, true).with_title(Some("Corgi".into()));
        tile.handle(Message::PointerEntered);
        tile.toggle_liked();
        let _element = view(ViewContext {
            state: &tile,
            i18n: &i18n,
            height: 400.0,
            spinner_rotation: 0.0,
        });
    }
}
