// SPDX-License-Identifier: MPL-2.0
//! Secondary pages reachable from the navbar.
//!
//! Shelter search, registration and profile are backed by a remote service
//! that this app does not talk to; each page shows its title and a short
//! description.

use crate::domain::route::Route;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{button, scrollable, text, Column, Text},
    Element, Length,
};

/// Non-feed page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    FindShelter,
    Register,
    Profile,
}

impl Page {
    /// Page shown for a route, or `None` for the home feed.
    #[must_use]
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::Home(_) => None,
            Route::FindShelter => Some(Self::FindShelter),
            Route::Register => Some(Self::Register),
            Route::Profile => Some(Self::Profile),
        }
    }

    fn keys(self) -> (&'static str, &'static str) {
        match self {
            Self::FindShelter => ("page-find-shelter-title", "page-find-shelter-description"),
            Self::Register => ("page-register-title", "page-register-description"),
            Self::Profile => ("page-profile-title", "page-profile-description"),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    BackToFeed,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: Page,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let (title_key, description_key) = ctx.page.keys();

    let back_button = button(
        text(format!("← {}", ctx.i18n.tr("page-back-to-feed"))).size(typography::BODY),
    )
    .on_press(Message::BackToFeed);

    let content = Column::new()
        .width(Length::Fill)
        .spacing(spacing::LG)
        .align_x(Horizontal::Left)
        .padding(spacing::MD)
        .push(back_button)
        .push(Text::new(ctx.i18n.tr(title_key)).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr(description_key)).size(typography::BODY));

    scrollable(content).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_has_no_page() {
        assert_eq!(Page::from_route(&Route::default()), None);
        assert_eq!(Page::from_route(&Route::Register), Some(Page::Register));
    }

    #[test]
    fn every_page_has_translations() {
        let i18n = I18n::default();
        for page in [Page::FindShelter, Page::Register, Page::Profile] {
            let (title, description) = page.keys();
            assert!(!i18n.tr(title).starts_with("MISSING"));
            assert!(!i18n.tr(description).starts_with("MISSING"));
            let _element = view(ViewContext { i18n: &i18n, page });
        }
    }
}
