//! Lissajous curve rasterization.
//!
//! A frame is produced by sweeping a time parameter `t` through
//! `cycles` revolutions of the x oscillator and plotting
//! `(sin t, sin(t * freq + phase))` onto a square canvas of palette indices.

use std::f64::consts::PI;

use rand::Rng;
use rand::distributions::Uniform;

use crate::palette::{BLACK_INDEX, Palette};

/// Inputs for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Number of complete x oscillator revolutions.
    pub cycles: f64,
    /// Relative frequency of the y oscillator.
    pub freq: f64,
    /// Phase difference applied to the y oscillator.
    pub phase: f64,
    /// Angular step between plotted points.
    pub resolution: f64,
    /// Canvas half-size; the canvas covers `[-size..+size]` on both axes.
    pub size: usize,
}

impl CurveParams {
    /// Side length of the square canvas, `2 * size + 1`.
    pub fn side(&self) -> usize {
        2 * self.size + 1
    }
}

/// Square raster of palette indices, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Frame {
    /// A frame filled with the background (black) index.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![BLACK_INDEX; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn index_at(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Set the pixel at `(x, y)`. Coordinates outside the frame are ignored.
    pub fn set_index(&mut self, x: i64, y: i64, index: u8) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.pixels[y as usize * self.width + x as usize] = index;
    }
}

/// Canvas coordinates visited by the curve, in plotting order.
///
/// A non-positive `resolution` yields no points.
pub fn curve_points(params: &CurveParams) -> impl Iterator<Item = (i64, i64)> + '_ {
    let limit = params.cycles * 2.0 * PI;
    let step = params.resolution;
    let size = params.size as f64;
    let offset = params.size as i64;

    std::iter::successors(Some(0.0f64), move |t| Some(t + step))
        .take_while(move |t| step > 0.0 && *t < limit)
        .map(move |t| {
            let x = t.sin();
            let y = (t * params.freq + params.phase).sin();
            // `as` truncates toward zero.
            (
                offset + (x * size + 0.5) as i64,
                offset + (y * size + 0.5) as i64,
            )
        })
}

/// Rasterize one Lissajous frame.
///
/// Every plotted point receives an index drawn uniformly from the whole
/// palette, so a point may land on the background color. Points that hit an
/// already plotted pixel overwrite it.
pub fn rasterize<R: Rng>(params: &CurveParams, palette: &Palette, rng: &mut R) -> Frame {
    let side = params.side();
    let mut frame = Frame::new(side, side);
    let dist = Uniform::from(0..palette.len());
    for (x, y) in curve_points(params) {
        frame.set_index(x, y, rng.sample(dist) as u8);
    }
    frame
}
