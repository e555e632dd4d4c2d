use crate::{Color, GradientError, GradientResult};
use derivative::Derivative;
use derive_setters::Setters;
use image::RgbImage;
use rayon::prelude::*;
use std::str::FromStr;

/// Where a pixel falls relative to the disc
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Zone {
    /// Inside the inner circle, pure center color
    Center,
    /// Inside the ring, carries the interpolation factor in (0, 1)
    Blend(f64),
    /// On or outside the inscribed circle
    Background,
}

impl Zone {
    /// `dist_ratio` is the distance from the canvas center divided by half the
    /// smaller canvas dimension. The inner boundary is inclusive, so the center
    /// color wins over the background when both apply.
    pub fn classify(dist_ratio: f64, circle_radius_ratio: f64) -> Self {
        if dist_ratio <= circle_radius_ratio {
            Zone::Center
        } else if dist_ratio >= 1.0 {
            Zone::Background
        } else {
            Zone::Blend((dist_ratio - circle_radius_ratio) / (1.0 - circle_radius_ratio))
        }
    }
}

/// How an interpolated channel is converted back to 8 bits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelRounding {
    /// Drop the fraction, keeps output byte-compatible with existing renders
    #[default]
    Truncate,
    Nearest,
}

impl ChannelRounding {
    pub fn convert(&self, value: f64) -> u8 {
        match self {
            ChannelRounding::Truncate => value as u8,
            ChannelRounding::Nearest => value.round() as u8,
        }
    }
}

impl FromStr for ChannelRounding {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "truncate" => Ok(ChannelRounding::Truncate),
            "nearest" => Ok(ChannelRounding::Nearest),
            _ => Err(GradientError::InvalidParameter(format!(
                "unknown rounding mode {s:?}, expected \"truncate\" or \"nearest\""
            ))),
        }
    }
}

/// Radial gradient configuration
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GradientConfig {
    #[derivative(Default(value = "800"))]
    width: u32,

    #[derivative(Default(value = "800"))]
    height: u32,

    /// Fraction of the max radius where blending starts
    #[derivative(Default(value = "0.4"))]
    circle_radius_ratio: f64,

    #[derivative(Default(value = "Color::from_rgb(0x00, 0xAE, 0xC9)"))]
    center_color: Color,

    #[derivative(Default(value = "Color::from_rgb(0x0D, 0x65, 0x86)"))]
    edge_color: Color,

    rounding: ChannelRounding,
}

#[derive(Debug, Clone, Copy)]
struct Geometry {
    cx: f64,
    cy: f64,
    max_radius: f64,
}

impl Geometry {
    fn dist_ratio(&self, x: u32, y: u32) -> f64 {
        let dx = x as f64 - self.cx;
        let dy = y as f64 - self.cy;
        (dx * dx + dy * dy).sqrt() / self.max_radius
    }
}

impl GradientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn geometry(&self) -> GradientResult<Geometry> {
        let buffer_len = (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(3));

        if self.width.min(self.height) == 0 || buffer_len.is_none() {
            return Err(GradientError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }

        Ok(Geometry {
            cx: self.width as f64 / 2.0,
            cy: self.height as f64 / 2.0,
            max_radius: self.width.min(self.height) as f64 / 2.0,
        })
    }

    fn check_canvas(&self, canvas: &RgbImage) -> GradientResult<Geometry> {
        if canvas.dimensions() != self.dimensions() {
            return Err(GradientError::InvalidDimension {
                width: canvas.width(),
                height: canvas.height(),
            });
        }

        self.geometry()
    }

    /// Linear interpolation from the center color (`t = 0`) to the edge color (`t = 1`)
    pub fn blend(&self, t: f64) -> Color {
        let lerp = |c: u8, e: u8| self.rounding.convert(c as f64 + (e as f64 - c as f64) * t);

        Color::from_rgb(
            lerp(self.center_color.r, self.edge_color.r),
            lerp(self.center_color.g, self.edge_color.g),
            lerp(self.center_color.b, self.edge_color.b),
        )
    }

    fn pixel(&self, geometry: &Geometry, x: u32, y: u32) -> Color {
        match Zone::classify(geometry.dist_ratio(x, y), self.circle_radius_ratio) {
            Zone::Center => self.center_color,
            Zone::Blend(t) => self.blend(t),
            Zone::Background => Color::BACKGROUND,
        }
    }

    pub fn zone_at(&self, x: u32, y: u32) -> GradientResult<Zone> {
        let geometry = self.geometry()?;
        Ok(Zone::classify(
            geometry.dist_ratio(x, y),
            self.circle_radius_ratio,
        ))
    }

    pub fn color_at(&self, x: u32, y: u32) -> GradientResult<Color> {
        Ok(self.pixel(&self.geometry()?, x, y))
    }

    /// Allocate a canvas of the configured size filled with the background
    pub fn new_canvas(&self) -> GradientResult<RgbImage> {
        self.geometry()?;
        Ok(RgbImage::from_pixel(
            self.width,
            self.height,
            Color::BACKGROUND.into(),
        ))
    }

    pub fn paint(&self, canvas: &mut RgbImage) -> GradientResult<()> {
        let geometry = self.check_canvas(canvas)?;

        for (y, row) in canvas.rows_mut().enumerate() {
            for (x, pixel) in row.enumerate() {
                *pixel = self.pixel(&geometry, x as u32, y as u32).into();
            }
        }

        Ok(())
    }

    /// Same output as [`GradientConfig::paint`], rows are painted in parallel
    pub fn par_paint(&self, canvas: &mut RgbImage) -> GradientResult<()> {
        let geometry = self.check_canvas(canvas)?;
        let row_stride = self.width as usize * 3;
        let pixels: &mut [u8] = &mut **canvas;

        pixels
            .par_chunks_exact_mut(row_stride)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, pixel) in row.chunks_exact_mut(3).enumerate() {
                    pixel.copy_from_slice(&self.pixel(&geometry, x as u32, y as u32).channels());
                }
            });

        Ok(())
    }

    pub fn render(&self) -> GradientResult<RgbImage> {
        log::debug!(
            "render {}x{} ratio={} center={} edge={} rounding={:?}",
            self.width,
            self.height,
            self.circle_radius_ratio,
            self.center_color,
            self.edge_color,
            self.rounding
        );

        let mut canvas = self.new_canvas()?;
        self.par_paint(&mut canvas)?;

        log::debug!("render done");
        Ok(canvas)
    }
}
