// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits on top of the current page. While the category modal is
//! open it is stacked over everything, navbar included.

use super::Message;
use crate::domain::filter::FilterSelection;
use crate::domain::route::Route;
use crate::i18n::fluent::I18n;
use crate::ui::feed;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::pages::{self, Page, ViewContext as PagesViewContext};
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub navbar: &'a navbar::State,
    pub route: &'a Route,
    pub filter: &'a FilterSelection,
    pub feed: &'a feed::State,
}

/// Renders the navbar, the page for the current route and the modal layer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar_context(&ctx)).map(Message::Navbar);

    let page: Element<'_, Message> = match Page::from_route(ctx.route) {
        None => feed::view(feed::ViewContext {
            state: ctx.feed,
            i18n: ctx.i18n,
        })
        .map(Message::Feed),
        Some(page) => pages::view(PagesViewContext {
            i18n: ctx.i18n,
            page,
        })
        .map(Message::Page),
    };

    let base = Column::new()
        .push(navbar_view)
        .push(
            Container::new(page)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    match navbar::modal(navbar_context(&ctx)) {
        Some(modal) => Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(base)
            .push(modal.map(Message::Navbar))
            .into(),
        None => base.into(),
    }
}

fn navbar_context<'a>(ctx: &ViewContext<'a>) -> NavbarViewContext<'a> {
    NavbarViewContext {
        i18n: ctx.i18n,
        state: ctx.navbar,
        route: ctx.route,
        selection: ctx.filter,
    }
}
