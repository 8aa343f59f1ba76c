// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the navbar, the feed and
//! the secondary pages.
//!
//! The `App` struct owns every piece of shared state: the filter store, the
//! router, the navbar's modal state and the feed. Components receive it by
//! reference when rendering and report back through `Event`s, which the
//! handlers in `update` turn into filter writes, navigation and persistence.

pub mod filter_store;
mod message;
pub mod paths;
mod persistence;
pub mod router;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{
    self, Config, DEFAULT_AUTOPLAY, DEFAULT_MUTED, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH,
    NAVBAR_HEIGHT, WINDOW_DEFAULT_HEIGHT, WINDOW_DEFAULT_WIDTH,
};
use crate::domain::filter::FilterSelection;
use crate::domain::route::{ListingQuery, Route};
use crate::i18n::fluent::I18n;
use crate::ui::feed::{self, FeedEntry};
use crate::ui::navbar;
use crate::video_player::{self, TileId};
use filter_store::FilterStore;
use iced::{window, Element, Subscription, Task, Theme};
use router::Router;
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: Theme,
    config: Config,
    /// Config directory override; `None` uses the resolved app directory.
    config_dir: Option<PathBuf>,
    navbar: navbar::State,
    filters: FilterStore,
    router: Router,
    feed: feed::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.router.current().to_path())
            .field("filter", self.filters.current())
            .field("tiles", &self.feed.tiles().len())
            .finish()
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    iced::application(move || App::new(flags.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Route to open for a filter: the filtered listing, or the plain feed.
fn listing_route(filter: FilterSelection) -> Route {
    if filter.is_active() {
        Route::Home(Some(ListingQuery::first_page(filter)))
    } else {
        Route::Home(None)
    }
}

impl App {
    /// Loads the config from disk and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        if let Err(error) = video_player::init_ffmpeg() {
            log::warn!("{}", error);
        }

        let (config, config_warning) = config::load();
        let app = Self::with_config(config, &flags, None);
        if let Some(key) = config_warning {
            log::warn!("{}", app.i18n.tr(&key));
        }

        (app, Task::none())
    }

    /// Builds the application from an already loaded config.
    ///
    /// Filter changes are saved under `config_dir` when given, otherwise in
    /// the resolved app config directory.
    #[must_use]
    pub fn with_config(config: Config, flags: &Flags, config_dir: Option<PathBuf>) -> Self {
        let i18n = I18n::new(flags.lang.clone(), &config);
        let theme = config.general.theme_mode.iced_theme();

        let mut entries: Vec<FeedEntry> = config
            .feed
            .videos
            .iter()
            .enumerate()
            .map(|(id, video)| FeedEntry::from_config(id as TileId, video))
            .collect();
        let offset = entries.len();
        entries.extend(
            flags
                .videos
                .iter()
                .enumerate()
                .map(|(id, url)| FeedEntry::unclassified((offset + id) as TileId, url.clone())),
        );

        let playing = config.feed.autoplay.unwrap_or(DEFAULT_AUTOPLAY);
        let muted = config.feed.muted.unwrap_or(DEFAULT_MUTED);
        let filters = FilterStore::new(config.filter.selection());
        let route = listing_route(*filters.current());

        let mut feed = feed::State::new(
            entries,
            playing,
            muted,
            WINDOW_DEFAULT_HEIGHT - NAVBAR_HEIGHT,
        );
        // No scrollable exists yet, so the scroll task has nothing to do
        let _ = feed.apply_filter(*filters.current());

        log::info!(
            "Starting at {} with {} feed videos (autoplay: {}, muted: {})",
            route.to_path(),
            feed.tiles().len(),
            playing,
            muted
        );

        Self {
            i18n,
            theme,
            config,
            config_dir,
            navbar: navbar::State::default(),
            filters,
            router: Router::new(route),
            feed,
        }
    }

    #[must_use]
    pub fn route(&self) -> &Route {
        self.router.current()
    }

    #[must_use]
    pub fn router(&self) -> &Router {
        &self.router
    }

    #[must_use]
    pub fn filter(&self) -> &FilterSelection {
        self.filters.current()
    }

    #[must_use]
    pub fn navbar(&self) -> &navbar::State {
        &self.navbar
    }

    #[must_use]
    pub fn feed(&self) -> &feed::State {
        &self.feed
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self.router.current() {
            Route::Home(_) => self.i18n.tr("window-title"),
            route => self
                .i18n
                .tr_with_args("window-title-with-route", &[("route", route.path_name())]),
        }
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_feed_subscription(&self.feed),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            navbar: &mut self.navbar,
            filters: &mut self.filters,
            router: &mut self.router,
            feed: &mut self.feed,
            config: &mut self.config,
            config_dir: self.config_dir.clone(),
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Feed(feed_message) => update::handle_feed_message(&mut ctx, feed_message),
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            navbar: &self.navbar,
            route: self.router.current(),
            filter: self.filters.current(),
            feed: &self.feed,
        })
    }
}
