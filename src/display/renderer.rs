// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Weekly stats screen for the 240x240 round panel.
//!
//! Rendering is split in two steps: [`Screen::from_stats`] decides what text
//! goes on the panel (pure, no drawing), then [`render`] paints it. Invalid
//! stats always produce the error layout, so their numbers are never read.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Circle;
use embedded_graphics::text::{Text, TextStyle};

use super::styles::{
    BACKGROUND, BOTTOM_CENTER, CENTER, DETAIL_STYLE, ERROR_STYLE, FOOTER_STYLE, RING_STYLE,
    TITLE_STYLE, TOP_CENTER, VALUE_STYLE,
};
use super::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::models::WeeklyStats;

const CENTER_X: i32 = DISPLAY_WIDTH as i32 / 2;

const TITLE_POS: Point = Point::new(CENTER_X, 40);
const DISTANCE_POS: Point = Point::new(CENTER_X, 95);
const TIME_POS: Point = Point::new(CENTER_X, 135);
const RUNS_POS: Point = Point::new(CENTER_X, 165);
const FOOTER_POS: Point = Point::new(CENTER_X, 205);
const ERROR_LINE_1_POS: Point = Point::new(CENTER_X, 108);
const ERROR_LINE_2_POS: Point = Point::new(CENTER_X, 132);

/// Ring inset from the panel edge.
const RING_INSET: i32 = 2;

pub const TITLE: &str = "THIS WEEK";
pub const ERROR_LINES: [&str; 2] = ["Unable to load", "weekly stats"];

/// What the panel should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Last fetch failed. Only the fixed message is shown.
    Error { lines: [&'static str; 2] },
    /// Weekly summary, top to bottom.
    Stats {
        title: &'static str,
        distance: String,
        time: String,
        runs: String,
        footer: Option<String>,
    },
}

impl Screen {
    /// Lay out the screen for `stats`.
    ///
    /// `ms_since_last_fetch` is `None` if no fetch has succeeded yet.
    pub fn from_stats(stats: &WeeklyStats, ms_since_last_fetch: Option<u64>) -> Self {
        if !stats.valid {
            return Screen::Error { lines: ERROR_LINES };
        }

        let (hours, minutes) = stats.hours_minutes();
        Screen::Stats {
            title: TITLE,
            distance: format!("{:.1} km", stats.distance_km()),
            time: format!("{}h {}m", hours, minutes),
            runs: format!("{} runs", stats.run_count),
            footer: ms_since_last_fetch.map(format_updated_ago),
        }
    }

    /// Every text line on the screen, top to bottom.
    pub fn lines(&self) -> Vec<&str> {
        match self {
            Screen::Error { lines } => lines.to_vec(),
            Screen::Stats {
                title,
                distance,
                time,
                runs,
                footer,
            } => {
                let mut lines = vec![*title, distance.as_str(), time.as_str(), runs.as_str()];
                lines.extend(footer.as_deref());
                lines
            }
        }
    }
}

/// Footer text, whole minutes since the last successful fetch.
pub fn format_updated_ago(ms_since_last_fetch: u64) -> String {
    format!("updated {}m ago", ms_since_last_fetch / 60_000)
}

/// Render the weekly stats, or the error screen when they are invalid.
pub fn render<D>(display: &mut D, stats: &WeeklyStats, ms_since_last_fetch: Option<u64>) -> Screen
where
    D: DrawTarget<Color = Rgb565>,
{
    let screen = Screen::from_stats(stats, ms_since_last_fetch);
    draw_screen(display, &screen);
    screen
}

/// Paint a laid-out screen.
pub fn draw_screen<D>(display: &mut D, screen: &Screen)
where
    D: DrawTarget<Color = Rgb565>,
{
    display.clear(BACKGROUND).ok();

    match screen {
        Screen::Error { lines } => {
            draw_text(display, lines[0], ERROR_LINE_1_POS, ERROR_STYLE, CENTER);
            draw_text(display, lines[1], ERROR_LINE_2_POS, ERROR_STYLE, CENTER);
        }
        Screen::Stats {
            title,
            distance,
            time,
            runs,
            footer,
        } => {
            draw_ring(display);
            draw_text(display, title, TITLE_POS, TITLE_STYLE, TOP_CENTER);
            draw_text(display, distance, DISTANCE_POS, VALUE_STYLE, CENTER);
            draw_text(display, time, TIME_POS, DETAIL_STYLE, CENTER);
            draw_text(display, runs, RUNS_POS, DETAIL_STYLE, CENTER);
            if let Some(footer) = footer {
                draw_text(display, footer, FOOTER_POS, FOOTER_STYLE, BOTTOM_CENTER);
            }
        }
    }
}

fn draw_text<D>(
    display: &mut D,
    text: &str,
    position: Point,
    style: MonoTextStyle<'static, Rgb565>,
    anchor: TextStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Text::with_text_style(text, position, style, anchor)
        .draw(display)
        .ok();
}

/// Accent ring following the edge of the round panel.
fn draw_ring<D>(display: &mut D)
where
    D: DrawTarget<Color = Rgb565>,
{
    let diameter = DISPLAY_WIDTH.min(DISPLAY_HEIGHT) - 2 * RING_INSET as u32;
    Circle::new(Point::new(RING_INSET, RING_INSET), diameter)
        .into_styled(RING_STYLE)
        .draw(display)
        .ok();
}
