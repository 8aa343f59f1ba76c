// SPDX-License-Identifier: MPL-2.0
//! Category picker shown over the whole window.
//!
//! The user picks a species first, then a region. The modal only reports
//! picks; the owner writes the filter and decides when to close it.
//!
//! ```text
//!   SpeciesTab ──species picked──▶ RegionTab ──region picked──▶ (closed)
//!       ▲  └────── tab buttons ──────┘  │
//!       └────────── close / backdrop ◀──┘
//! ```

use crate::domain::filter::{FilterSelection, Region, Species};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, center, container, mouse_area, opaque, scrollable, Column, Row, Space, Text},
    Element, Length,
};

/// Number of region chips per row.
const REGION_COLUMNS: usize = 2;

/// Tab currently shown in the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryTab {
    #[default]
    Species,
    Region,
}

#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(CategoryTab),
    SpeciesPicked(Species),
    RegionPicked(Region),
    ClosePressed,
    /// Press on the dimmed area around the card.
    BackdropPressed,
}

/// Events propagated to the owner of the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    SpeciesSelected(Species),
    RegionSelected(Region),
    Closed,
}

/// Process a modal message and return the corresponding event.
pub fn update(message: Message, tab: &mut CategoryTab) -> Event {
    match message {
        Message::TabSelected(selected) => {
            *tab = selected;
            Event::None
        }
        Message::SpeciesPicked(species) => {
            *tab = CategoryTab::Region;
            Event::SpeciesSelected(species)
        }
        Message::RegionPicked(region) => Event::RegionSelected(region),
        Message::ClosePressed | Message::BackdropPressed => Event::Closed,
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub tab: CategoryTab,
    /// Current filter, used to highlight the chosen chips.
    pub selection: &'a FilterSelection,
}

/// Render the modal layer: a backdrop covering the window with the card
/// centered on it.
///
/// The card is opaque, so presses on it never reach the backdrop handler.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let card = container(build_card(&ctx))
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::modal_card);

    let backdrop = center(opaque(card)).style(styles::container::backdrop);

    opaque(mouse_area(backdrop).on_press(Message::BackdropPressed))
}

fn build_card<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let header = Row::new()
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("category-modal-title")).size(typography::TITLE_SM))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new(ctx.i18n.tr("category-modal-close")).size(typography::BODY))
                .on_press(Message::ClosePressed)
                .style(styles::button::nav_link(false)),
        );

    let tabs = Row::new()
        .spacing(spacing::XS)
        .push(tab_button(ctx, CategoryTab::Species, "category-tab-species"))
        .push(tab_button(ctx, CategoryTab::Region, "category-tab-region"));

    let options = match ctx.tab {
        CategoryTab::Species => species_options(ctx),
        CategoryTab::Region => region_options(ctx),
    };

    Column::new()
        .spacing(spacing::MD)
        .push(header)
        .push(tabs)
        .push(options)
        .into()
}

fn tab_button<'a>(ctx: &ViewContext<'a>, tab: CategoryTab, key: &str) -> Element<'a, Message> {
    let style = if ctx.tab == tab {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
        .on_press(Message::TabSelected(tab))
        .width(Length::Fill)
        .padding([spacing::XS, spacing::SM])
        .style(style)
        .into()
}

fn chip<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    let style = if selected {
        styles::button::selected
    } else {
        styles::button::unselected
    };

    button(Text::new(label).size(typography::BODY))
        .on_press(message)
        .width(Length::Fixed(sizing::CHIP_WIDTH))
        .padding([spacing::XS, spacing::SM])
        .style(style)
        .into()
}

fn species_options<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    Species::ALL
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, &species| {
            column.push(chip(
                ctx.i18n.tr(species.i18n_key()),
                ctx.selection.species == species,
                Message::SpeciesPicked(species),
            ))
        })
        .into()
}

fn region_options<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new().spacing(spacing::XS);
    for regions in Region::ALL.chunks(REGION_COLUMNS) {
        let row = regions
            .iter()
            .fold(Row::new().spacing(spacing::XS), |row, &region| {
                row.push(chip(
                    ctx.i18n.tr(region.i18n_key()),
                    ctx.selection.region == region,
                    Message::RegionPicked(region),
                ))
            });
        grid = grid.push(row);
    }

    scrollable(grid).height(Length::Fixed(sizing::MODAL_LIST_HEIGHT)).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_pick_switches_to_region_tab() {
        let mut tab = CategoryTab::Species;
        let event = update(Message::SpeciesPicked(Species::Dog), &mut tab);
        assert_eq!(event, Event::SpeciesSelected(Species::Dog));
        assert_eq!(tab, CategoryTab::Region);
    }

    #[test]
    fn region_pick_is_reported_without_touching_tab() {
        let mut tab = CategoryTab::Region;
        let event = update(Message::RegionPicked(Region::Seoul), &mut tab);
        assert_eq!(event, Event::RegionSelected(Region::Seoul));
        assert_eq!(tab, CategoryTab::Region);
    }

    #[test]
    fn tabs_switch_both_ways() {
        let mut tab = CategoryTab::Species;
        assert_eq!(update(Message::TabSelected(CategoryTab::Region), &mut tab), Event::None);
        assert_eq!(tab, CategoryTab::Region);
        update(Message::TabSelected(CategoryTab::Species), &mut tab);
        assert_eq!(tab, CategoryTab::Species);
    }

    #[test]
    fn close_and_backdrop_both_close() {
        let mut tab = CategoryTab::Region;
        assert_eq!(update(Message::ClosePressed, &mut tab), Event::Closed);
        assert_eq!(update(Message::BackdropPressed, &mut tab), Event::Closed);
    }

    // Pointer routing is not simulated: that a press on the card never reaches
    // the backdrop's `mouse_area` rests on the card being wrapped in `opaque`.
    // This covers the other half, that browsing the card does not close it.
    // A region pick commits the filter and is reported, not closed here.
    #[test]
    fn card_content_presses_keep_modal_open() {
        let mut content = vec![
            Message::TabSelected(CategoryTab::Species),
            Message::TabSelected(CategoryTab::Region),
        ];
        content.extend(Species::ALL.into_iter().map(Message::SpeciesPicked));

        for message in content {
            let mut tab = CategoryTab::Species;
            let event = update(message.clone(), &mut tab);
            assert_ne!(event, Event::Closed, "{message:?} closed the modal");
        }
    }

    #[test]
    fn modal_view_renders_both_tabs() {
        let i18n = I18n::default();
        let selection = FilterSelection::new(Species::Cat, Region::Busan);
        for tab in [CategoryTab::Species, CategoryTab::Region] {
            let _element = view(ViewContext {
                i18n: &i18n,
                tab,
                selection: &selection,
            });
        }
    }
}
