// SPDX-License-Identifier: MPL-2.0
//! Styles for the indicators drawn over a feed video.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

fn container_background() -> Color {
    Color {
        a: opacity::OVERLAY_STRONG,
        ..BLACK
    }
}

/// Pill holding the tap instruction or the like badge.
pub fn indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(container_background())),
        text_color: Some(WHITE),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        ..Default::default()
    }
}

/// Like badge in the tile corner.
pub fn like_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::LIKE_500)),
        text_color: Some(WHITE),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Scrub bar track, at the given hover opacity.
pub fn scrub_track(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..WHITE
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Played part of the scrub bar, at the given hover opacity.
pub fn scrub_fill(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::PRIMARY_500
        })),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrub_fill_follows_hover_alpha() {
        let style = scrub_fill(opacity::SCRUB_BAR_FADING)(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => assert_eq!(color.a, opacity::SCRUB_BAR_FADING),
            other => panic!("unexpected background {other:?}"),
        }
    }
}
