//! Colors, fonts and text styles for the round panel.
//!
//! All styles are `const` so draw functions never build them per frame.

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10},
        MonoTextStyle,
    },
    pixelcolor::{Rgb565, RgbColor},
    primitives::PrimitiveStyle,
    text::{Alignment, Baseline, TextStyle, TextStyleBuilder},
};
use profont::PROFONT_24_POINT;

pub const BACKGROUND: Rgb565 = Rgb565::BLACK;
pub const FOREGROUND: Rgb565 = Rgb565::WHITE;
/// Strava brand orange (#FC4C02).
pub const ACCENT: Rgb565 = Rgb565::new(31, 19, 0);
pub const ERROR: Rgb565 = Rgb565::RED;
pub const MUTED: Rgb565 = Rgb565::new(16, 32, 16);

/// Anchored at its horizontal center and top edge.
pub const TOP_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Anchored at its center point.
pub const CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Middle)
    .build();

/// Anchored at its horizontal center and bottom edge.
pub const BOTTOM_CENTER: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Bottom)
    .build();

pub const TITLE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, ACCENT);
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&PROFONT_24_POINT, FOREGROUND);
pub const DETAIL_STYLE: MonoTextStyle<'static, Rgb565> =
    MonoTextStyle::new(&FONT_10X20, FOREGROUND);
pub const FOOTER_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_6X10, MUTED);
pub const ERROR_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&FONT_10X20, ERROR);

pub const RING_STYLE: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_stroke(ACCENT, 2);
