//! Rendering Base

use std::cmp::max;
use std::cmp::min;
use std::path::Path;

use crate::color::Rgb8;
use crate::error::Result;
use crate::pixfmt::Pixfmt;
use crate::ppm;

use crate::Color;
use crate::Pixel;
use crate::PixelData;
use crate::Source;

/// Rendering Base
///
/// Wraps a [Pixfmt] and clips all writes to the image region.
pub struct RenderingBase<T> {
    pub pixf: Pixfmt<T>,
}

impl<T> RenderingBase<T> where Pixfmt<T>: Pixel {
    /// Create new Rendering Base from a Pixel Format
    pub fn new(pixf: Pixfmt<T>) -> Self {
        RenderingBase { pixf }
    }
    /// Set the image to a single color
    pub fn clear<C: Color>(&mut self, color: C) {
        self.pixf.fill(color);
    }
    /// Image limits as (xmin, xmax, ymin, ymax)
    pub fn limits(&self) -> (i64,i64,i64,i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w-1, 0, h-1)
    }
    /// Fill pixels from `x1` to `x2`, inclusive, on scanline `y`
    ///
    /// The span is clipped to the image limits; a span with `x2 < x1`
    /// is empty. Returns the number of pixels written.
    pub fn fill_hline<C: Color>(&mut self, x1: i64, y: i64, x2: i64, c: &C) -> usize {
        let (xmin,xmax,ymin,ymax) = self.limits();
        if y < ymin || y > ymax || x1 > xmax || x2 < xmin || x2 < x1 {
            return 0;
        }
        let x1 = max(x1, xmin);
        let x2 = min(x2, xmax);
        for x in x1 ..= x2 {
            self.pixf.set((x as usize, y as usize), *c);
        }
        (x2 - x1 + 1) as usize
    }
}

impl<T> RenderingBase<T> where Pixfmt<T>: Pixel + Source {
    /// Write the image to a file, converting to 8-bit RGB
    ///
    /// The output format is taken from the filename extension
    pub fn to_file<P: AsRef<Path>>(&self, filename: P) -> Result<()> {
        let (w, h) = (self.pixf.width(), self.pixf.height());
        let mut buf = Vec::with_capacity(w * h * 3);
        for y in 0 .. h {
            for x in 0 .. w {
                let c = Rgb8::from(&self.pixf.get((x,y)));
                buf.extend_from_slice(&[c.r, c.g, c.b]);
            }
        }
        ppm::write_file(&buf, w, h, filename)
    }
}

impl<T> PixelData for RenderingBase<T> {
    fn pixeldata(&self) -> &[u8] {
        self.pixf.pixeldata()
    }
}
