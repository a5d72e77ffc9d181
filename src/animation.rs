//! Animation assembly and GIF encoding.
//!
//! `build_animation` renders a fixed number of frames, advancing the phase of
//! the y oscillator between frames, and `encode_gif` serializes the result
//! into any `std::io::Write` sink. `lissajous` ties both together with the
//! default configuration and palette.

use std::borrow::Cow;
use std::io::Write;

use rand::Rng;
use rand::distributions::Uniform;
use tracing::debug;

use crate::error::LissajousError;
use crate::palette::Palette;
use crate::raster::{CurveParams, Frame, rasterize};

/// Cycle count used when the caller has no preference.
pub const DEFAULT_CYCLES: i64 = 5;

/// Generator constants.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationConfig {
    /// Number of animation frames.
    pub frames: usize,
    /// Delay between frames in 10ms units.
    pub delay: u16,
    /// Angular resolution.
    pub resolution: f64,
    /// Canvas half-size; frames are `2 * size + 1` pixels square.
    pub size: usize,
    /// Phase added after each frame.
    pub phase_step: f64,
    /// Upper bound (exclusive) for the random y oscillator frequency.
    pub max_freq: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frames: 64,
            delay: 8,
            resolution: 0.001,
            size: 100,
            phase_step: 0.1,
            max_freq: 3.0,
        }
    }
}

impl AnimationConfig {
    pub fn curve(&self, cycles: f64, freq: f64, phase: f64) -> CurveParams {
        CurveParams {
            cycles,
            freq,
            phase,
            resolution: self.resolution,
            size: self.size,
        }
    }
}

/// Ordered frames with their display delays and the loop count written to
/// the NETSCAPE extension.
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub frames: Vec<Frame>,
    pub delays: Vec<u16>,
    pub loop_count: u16,
}

/// Render every frame of one animation.
///
/// The y oscillator frequency is drawn once from `[0, max_freq)`; the phase
/// starts at zero and grows by `phase_step` per frame without wrapping. The
/// loop count is set to the frame count.
pub fn build_animation<R: Rng>(
    cycles: f64,
    config: &AnimationConfig,
    palette: &Palette,
    rng: &mut R,
) -> Animation {
    let freq = if config.max_freq > 0.0 {
        rng.sample(Uniform::new(0.0, config.max_freq))
    } else {
        0.0
    };
    debug!(cycles, freq, frames = config.frames, "building animation");

    let mut frames = Vec::with_capacity(config.frames);
    let mut delays = Vec::with_capacity(config.frames);
    let mut phase = 0.0;
    for _ in 0..config.frames {
        let params = config.curve(cycles, freq, phase);
        frames.push(rasterize(&params, palette, rng));
        delays.push(config.delay);
        phase += config.phase_step;
    }

    Animation {
        frames,
        delays,
        loop_count: u16::try_from(config.frames).unwrap_or(u16::MAX),
    }
}

/// Encode `animation` as a GIF using `palette` as the global color table.
///
/// The logical screen takes the size of the first frame. An empty animation
/// produces a header-only GIF.
pub fn encode_gif<W: Write>(
    animation: &Animation,
    palette: &Palette,
    out: W,
) -> Result<(), LissajousError> {
    let (width, height) = match animation.frames.first() {
        Some(f) => gif_dim(f)?,
        None => (0, 0),
    };

    let mut encoder = gif::Encoder::new(out, width, height, &palette.rgb_bytes())?;
    encoder.set_repeat(gif::Repeat::Finite(animation.loop_count))?;

    for (i, frame) in animation.frames.iter().enumerate() {
        let (w, h) = gif_dim(frame)?;
        let mut gif_frame = gif::Frame::default();
        gif_frame.width = w;
        gif_frame.height = h;
        gif_frame.delay = animation.delays.get(i).copied().unwrap_or(0);
        gif_frame.buffer = Cow::Borrowed(frame.pixels());
        encoder.write_frame(&gif_frame)?;
    }

    encoder.into_inner()?;
    Ok(())
}

fn gif_dim(frame: &Frame) -> Result<(u16, u16), LissajousError> {
    let too_large = || LissajousError::FrameTooLarge {
        width: frame.width(),
        height: frame.height(),
    };
    let w = u16::try_from(frame.width()).map_err(|_| too_large())?;
    let h = u16::try_from(frame.height()).map_err(|_| too_large())?;
    Ok((w, h))
}

/// Generate one animation with the default configuration and palette and
/// write it to `out` as a GIF.
pub fn lissajous<W: Write, R: Rng>(
    out: W,
    cycles: i64,
    rng: &mut R,
) -> Result<(), LissajousError> {
    let config = AnimationConfig::default();
    let palette = Palette::default();
    let animation = build_animation(cycles as f64, &config, &palette, rng);
    encode_gif(&animation, &palette, out)
}
