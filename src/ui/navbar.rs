// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar is always visible: brand button (home feed), category button and
//! links to the shelter finder, registration and profile pages. It owns the
//! category modal's open flag and tab; the modal itself is drawn by the
//! application as a layer over the whole window while it is open.

use crate::config::NAVBAR_HEIGHT;
use crate::domain::filter::{FilterSelection, Region, Species};
use crate::domain::route::Route;
use crate::i18n::fluent::I18n;
use crate::ui::category_modal::{self, CategoryTab};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Space, Text},
    Element, Length,
};

/// Category modal state owned by the navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct State {
    modal_open: bool,
    tab: CategoryTab,
}

impl State {
    #[must_use]
    pub fn is_modal_open(&self) -> bool {
        self.modal_open
    }

    #[must_use]
    pub fn tab(&self) -> CategoryTab {
        self.tab
    }

    /// Closes the modal and rewinds it to the species tab.
    fn close_modal(&mut self) {
        self.modal_open = false;
        self.tab = CategoryTab::Species;
    }
}

/// Which navbar link matches the current route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteFlags {
    pub is_find_shelter_page: bool,
    pub is_register_page: bool,
    pub is_profile_page: bool,
}

impl RouteFlags {
    #[must_use]
    pub fn from_route(route: &Route) -> Self {
        Self {
            is_find_shelter_page: matches!(route, Route::FindShelter),
            is_register_page: matches!(route, Route::Register),
            is_profile_page: matches!(route, Route::Profile),
        }
    }
}

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub route: &'a Route,
    /// Shared filter, highlighted inside the modal.
    pub selection: &'a FilterSelection,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    HomePressed,
    CategoryPressed,
    Navigate(Route),
    Modal(category_modal::Message),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Route),
    /// A species was picked; the modal stays open on the region tab.
    SpeciesSelected(Species),
    /// A region was picked; the modal is already closed.
    RegionSelected(Region),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::HomePressed => Event::Navigate(Route::Home(None)),
        Message::CategoryPressed => {
            state.modal_open = true;
            state.tab = CategoryTab::Species;
            Event::None
        }
        Message::Navigate(route) => Event::Navigate(route),
        Message::Modal(message) => match category_modal::update(message, &mut state.tab) {
            category_modal::Event::None => Event::None,
            category_modal::Event::SpeciesSelected(species) => Event::SpeciesSelected(species),
            category_modal::Event::RegionSelected(region) => {
                state.close_modal();
                Event::RegionSelected(region)
            }
            category_modal::Event::Closed => {
                state.close_modal();
                Event::None
            }
        },
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let flags = RouteFlags::from_route(ctx.route);

    let brand = button(Text::new(ctx.i18n.tr("navbar-brand")).size(typography::TITLE_MD))
        .on_press(Message::HomePressed)
        .style(styles::button::nav_link(ctx.route.is_home()));

    let category = button(Text::new(category_label(&ctx)).size(typography::BODY))
        .on_press(Message::CategoryPressed)
        .padding([spacing::XXS, spacing::SM])
        .style(if ctx.state.modal_open {
            styles::button::selected
        } else {
            styles::button::unselected
        });

    let row = Row::new()
        .spacing(spacing::XS)
        .padding([0.0, spacing::SM])
        .height(Length::Fill)
        .align_y(Vertical::Center)
        .push(brand)
        .push(category)
        .push(Space::new().width(Length::Fill))
        .push(nav_link(
            &ctx,
            "navbar-find-shelter",
            Route::FindShelter,
            flags.is_find_shelter_page,
        ))
        .push(nav_link(&ctx, "navbar-register", Route::Register, flags.is_register_page))
        .push(nav_link(&ctx, "navbar-profile", Route::Profile, flags.is_profile_page));

    Container::new(row)
        .width(Length::Fill)
        .height(Length::Fixed(NAVBAR_HEIGHT))
        .style(styles::container::navbar)
        .into()
}

/// Render the category modal layer, if it is open.
pub fn modal<'a>(ctx: ViewContext<'a>) -> Option<Element<'a, Message>> {
    if !ctx.state.modal_open {
        return None;
    }

    let layer = category_modal::view(category_modal::ViewContext {
        i18n: ctx.i18n,
        tab: ctx.state.tab,
        selection: ctx.selection,
    });
    Some(layer.map(Message::Modal))
}

/// Category button label: the filter of the current listing, or a prompt.
fn category_label(ctx: &ViewContext<'_>) -> String {
    match ctx.route.listing_query() {
        Some(query) if query.filter.is_active() => {
            let species = ctx.i18n.tr(query.filter.species.i18n_key());
            let region = ctx.i18n.tr(query.filter.region.i18n_key());
            ctx.i18n.tr_with_args(
                "feed-filter-summary",
                &[("species", &species), ("region", &region)],
            )
        }
        _ => ctx.i18n.tr("navbar-category-button"),
    }
}

fn nav_link<'a>(
    ctx: &ViewContext<'a>,
    key: &str,
    route: Route,
    active: bool,
) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
        .on_press(Message::Navigate(route))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::nav_link(active))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::route::ListingQuery;

    fn open() -> State {
        let mut state = State::default();
        update(Message::CategoryPressed, &mut state);
        state
    }

    #[test]
    fn category_button_opens_modal_on_species_tab() {
        let state = open();
        assert!(state.is_modal_open());
        assert_eq!(state.tab(), CategoryTab::Species);
    }

    #[test]
    fn species_pick_keeps_modal_open() {
        let mut state = open();
        let event = update(
            Message::Modal(category_modal::Message::SpeciesPicked(Species::Dog)),
            &mut state,
        );
        assert_eq!(event, Event::SpeciesSelected(Species::Dog));
        assert!(state.is_modal_open());
        assert_eq!(state.tab(), CategoryTab::Region);
    }

    #[test]
    fn region_pick_closes_and_resets() {
        let mut state = open();
        update(
            Message::Modal(category_modal::Message::SpeciesPicked(Species::Cat)),
            &mut state,
        );
        let event = update(
            Message::Modal(category_modal::Message::RegionPicked(Region::Seoul)),
            &mut state,
        );
        assert_eq!(event, Event::RegionSelected(Region::Seoul));
        assert_eq!(state, State::default());
    }

    #[test]
    fn every_close_trigger_resets_tab() {
        for close in [
            category_modal::Message::ClosePressed,
            category_modal::Message::BackdropPressed,
        ] {
            let mut state = open();
            update(
                Message::Modal(category_modal::Message::TabSelected(CategoryTab::Region)),
                &mut state,
            );
            assert_eq!(update(Message::Modal(close), &mut state), Event::None);
            assert!(!state.is_modal_open());
            assert_eq!(state.tab(), CategoryTab::Species);
        }
    }

    #[test]
    fn links_emit_navigation() {
        let mut state = State::default();
        assert_eq!(
            update(Message::HomePressed, &mut state),
            Event::Navigate(Route::Home(None))
        );
        assert_eq!(
            update(Message::Navigate(Route::Profile), &mut state),
            Event::Navigate(Route::Profile)
        );
    }

    #[test]
    fn route_flags_follow_route() {
        assert_eq!(RouteFlags::from_route(&Route::default()), RouteFlags::default());
        assert!(RouteFlags::from_route(&Route::Profile).is_profile_page);
        assert!(RouteFlags::from_route(&Route::FindShelter).is_find_shelter_page);
        assert!(RouteFlags::from_route(&Route::Register).is_register_page);
    }

    #[test]
    fn category_label_shows_listing_filter() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let state = State::default();
        let selection = FilterSelection::default();
        let filter = FilterSelection::new(Species::Cat, Region::Seoul);
        let route = Route::Home(Some(ListingQuery::first_page(filter)));
        let ctx = ViewContext {
            i18n: &i18n,
            state: &state,
            route: &route,
            selection: &selection,
        };
        assert_eq!(category_label(&ctx), "Cats · Seoul");
    }

    #[test]
    fn modal_layer_only_when_open() {
        let i18n = I18n::default();
        let route = Route::default();
        let selection = FilterSelection::default();

        let closed = State::default();
        assert!(modal(ViewContext {
            i18n: &i18n,
            state: &closed,
            route: &route,
            selection: &selection,
        })
        .is_none());

        let opened = open();
        assert!(modal(ViewContext {
            i18n: &i18n,
            state: &opened,
            route: &route,
            selection: &selection,
        })
        .is_some());
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let selection = FilterSelection::default();
        for route in [Route::default(), Route::FindShelter, Route::Profile] {
            let _element = view(ViewContext {
                i18n: &i18n,
                state: &state,
                route: &route,
                selection: &selection,
            });
        }
    }
}
