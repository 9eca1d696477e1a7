// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Display surface and renderer.
//!
//! Rendering targets any embedded-graphics `DrawTarget<Color = Rgb565>`.
//! [`FrameBuffer`] is the in-memory 240x240 panel used on the host and in
//! tests; it can dump each frame to a PPM file for inspection.

pub mod renderer;
pub mod styles;

pub use renderer::{render, Screen};

use anyhow::Context;
use embedded_graphics::pixelcolor::{Rgb565, Rgb888};
use embedded_graphics::prelude::*;
use std::convert::Infallible;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Panel width in pixels (GC9A01 round display).
pub const DISPLAY_WIDTH: u32 = 240;
/// Panel height in pixels.
pub const DISPLAY_HEIGHT: u32 = 240;

/// A draw target that can present a finished frame.
pub trait Panel: DrawTarget<Color = Rgb565> {
    /// Push the frame drawn since the last flush to the panel.
    fn flush(&mut self) -> anyhow::Result<()>;
}

/// In-memory Rgb565 frame buffer.
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pixels: Vec<Rgb565>,
    snapshot_path: Option<PathBuf>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            pixels: vec![styles::BACKGROUND; (DISPLAY_WIDTH * DISPLAY_HEIGHT) as usize],
            snapshot_path: None,
        }
    }

    /// Write a PPM snapshot to `path` on every flush.
    pub fn with_snapshot_path(mut self, path: Option<PathBuf>) -> Self {
        self.snapshot_path = path;
        self
    }

    fn index(&self, point: Point) -> Option<usize> {
        let (x, y) = (u32::try_from(point.x).ok()?, u32::try_from(point.y).ok()?);
        (x < DISPLAY_WIDTH && y < DISPLAY_HEIGHT).then(|| (y * DISPLAY_WIDTH + x) as usize)
    }

    /// Raw pixels, row-major.
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    pub fn pixel(&self, point: Point) -> Option<Rgb565> {
        self.index(point).map(|i| self.pixels[i])
    }

    /// Number of pixels currently set to `color`.
    pub fn count_color(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&c| c == color).count()
    }

    /// Write the frame as a binary PPM (P6) image.
    pub fn write_ppm(&self, path: &Path) -> std::io::Result<()> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3 + 16);
        write!(out, "P6\n{} {}\n255\n", DISPLAY_WIDTH, DISPLAY_HEIGHT)?;
        for &pixel in &self.pixels {
            let rgb = Rgb888::from(pixel);
            out.extend_from_slice(&[rgb.r(), rgb.g(), rgb.b()]);
        }
        std::fs::write(path, out)
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(DISPLAY_WIDTH, DISPLAY_HEIGHT)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if let Some(i) = self.index(point) {
                self.pixels[i] = color;
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.pixels.fill(color);
        Ok(())
    }
}

impl Panel for FrameBuffer {
    fn flush(&mut self) -> anyhow::Result<()> {
        if let Some(path) = &self.snapshot_path {
            self.write_ppm(path)
                .with_context(|| format!("Failed to write snapshot to {}", path.display()))?;
        }
        Ok(())
    }
}
