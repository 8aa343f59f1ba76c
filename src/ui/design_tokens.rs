// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Every color, spacing step, and size used by the UI lives here, so the navbar,
the category modal, and the feed tiles stay visually consistent.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use pawfeed::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::BACKDROP,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_100: Color = Color::from_rgb(0.92, 0.92, 0.92);

    // Brand colors (warm orange scale)
    pub const PRIMARY_400: Color = Color::from_rgb(1.0, 0.66, 0.36);
    pub const PRIMARY_500: Color = Color::from_rgb(0.96, 0.55, 0.22);
    pub const PRIMARY_600: Color = Color::from_rgb(0.86, 0.45, 0.14);

    // Semantic colors
    pub const LIKE_500: Color = Color::from_rgb(0.93, 0.27, 0.38);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Dimmed layer behind the category modal.
    pub const BACKDROP: f32 = 0.55;

    /// Scrub bar opacity once the fade has started.
    pub const SCRUB_BAR_FADING: f32 = 0.3;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Scrub bar track height.
    pub const SCRUB_BAR_HEIGHT: f32 = 4.0;

    /// Category modal card width.
    pub const MODAL_WIDTH: f32 = 340.0;

    /// Category option chip width (two columns inside the modal).
    pub const CHIP_WIDTH: f32 = 140.0;

    /// Height of the scrolling region list inside the modal.
    pub const MODAL_LIST_HEIGHT: f32 = 320.0;

    /// Loading spinner diameter.
    pub const SPINNER: f32 = 40.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Brand name and page titles.
    pub const TITLE_MD: f32 = 20.0;

    /// Modal title.
    pub const TITLE_SM: f32 = 18.0;

    /// Most UI text.
    pub const BODY: f32 = 14.0;

    /// Badges, tile captions.
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::BACKDROP > 0.0 && opacity::BACKDROP < 1.0);
    assert!(opacity::SCRUB_BAR_FADING > opacity::TRANSPARENT);
    assert!(opacity::SCRUB_BAR_FADING < opacity::OPAQUE);

    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);

    assert!(sizing::MODAL_WIDTH > sizing::CHIP_WIDTH * 2.0);
};
