// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Components report intent as `Event`s; the handlers here turn those into
//! writes to the shared filter, navigation, and feed updates.

use super::filter_store::FilterStore;
use super::persistence;
use super::router::Router;
use super::Message;
use crate::config::{Config, NAVBAR_HEIGHT};
use crate::domain::filter::FilterChange;
use crate::domain::route::{ListingQuery, Route};
use crate::ui::feed;
use crate::ui::navbar::{self, Event as NavbarEvent};
use crate::ui::pages;
use iced::{Size, Task};
use std::path::PathBuf;

/// Mutable application state needed by the handlers.
pub struct UpdateContext<'a> {
    pub navbar: &'a mut navbar::State,
    pub filters: &'a mut FilterStore,
    pub router: &'a mut Router,
    pub feed: &'a mut feed::State,
    pub config: &'a mut Config,
    pub config_dir: Option<PathBuf>,
}

pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match navbar::update(message, ctx.navbar) {
        NavbarEvent::None => Task::none(),
        NavbarEvent::Navigate(route) => navigate(ctx, route),
        NavbarEvent::SpeciesSelected(species) => {
            apply_filter(ctx, FilterChange::Species(species));
            Task::none()
        }
        NavbarEvent::RegionSelected(region) => {
            apply_filter(ctx, FilterChange::Region(region));
            let query = ListingQuery::first_page(*ctx.filters.current());
            navigate(ctx, Route::Home(Some(query)))
        }
    }
}

pub fn handle_feed_message(ctx: &mut UpdateContext<'_>, message: feed::Message) -> Task<Message> {
    ctx.feed.handle_message(message).map(Message::Feed)
}

pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    match message {
        pages::Message::BackToFeed => navigate(ctx, Route::Home(None)),
    }
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    let feed_height = (size.height - NAVBAR_HEIGHT).max(0.0);
    handle_feed_message(ctx, feed::Message::Resized(feed_height))
}

/// Writes through the filter store and persists the result.
fn apply_filter(ctx: &mut UpdateContext<'_>, change: FilterChange) {
    if ctx.filters.apply(change) {
        persistence::persist_filter(ctx.config, ctx.filters.current(), ctx.config_dir.clone());
    }
}

/// Switches route and shows the matching listing in the feed.
fn navigate(ctx: &mut UpdateContext<'_>, route: Route) -> Task<Message> {
    ctx.router.navigate(route);

    let shown = ctx.feed.set_hidden(!route.is_home());
    if !route.is_home() {
        return shown.map(Message::Feed);
    }
    let filter = route
        .listing_query()
        .map(|query| query.filter)
        .unwrap_or_default();
    let filtered = ctx.feed.apply_filter(filter);
    Task::batch([shown, filtered]).map(Message::Feed)
}
