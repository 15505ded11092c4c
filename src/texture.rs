//! Texture sampling

use crate::color::Rgb32;
use crate::error::{RasterError, Result};

/// Flat 2D texture of float RGB texels
///
/// Texels are stored row-major. Sampling coordinates are in [0,1] with
/// (0,0) at the first texel; out-of-range coordinates are clamped to
/// the edge.
#[derive(Debug,Clone)]
pub struct Texture {
    width: usize,
    height: usize,
    texels: Vec<Rgb32>,
}

impl Texture {
    /// Create a new texture from row-major texels
    ///
    /// Errors when the texel count does not match width * height.
    pub fn new(width: usize, height: usize, texels: Vec<Rgb32>) -> Result<Self> {
        if texels.len() != width * height {
            return Err(RasterError::TexelCountMismatch {
                width,
                height,
                found: texels.len(),
            });
        }
        Ok(Texture { width, height, texels })
    }
    /// Width of the texture in texels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Height of the texture in texels
    pub fn height(&self) -> usize {
        self.height
    }

    fn texel(&self, u: usize, v: usize) -> Rgb32 {
        self.texels[self.width * v + u]
    }

    /// Sample the nearest texel to (`u`,`v`)
    ///
    /// Coordinates are clamped to [0,1]; an empty texture samples black.
    pub fn sample_nearest(&self, u: f64, v: f64) -> Rgb32 {
        if self.texels.is_empty() {
            return Rgb32::black();
        }
        let ui = Self::nearest(u, self.width);
        let vi = Self::nearest(v, self.height);
        self.texel(ui, vi)
    }

    /// Sample (`u`,`v`) with bilinear filtering
    ///
    /// The four texels around the sample point are blended with the
    /// fractional distances as weights. Coordinates are clamped to
    /// [0,1]; an empty texture samples black.
    pub fn sample_bilinear(&self, u: f64, v: f64) -> Rgb32 {
        if self.texels.is_empty() {
            return Rgb32::black();
        }
        let u = u.clamp(0.0, 1.0) * (self.width - 1) as f64;
        let v = v.clamp(0.0, 1.0) * (self.height - 1) as f64;
        let u0 = u.floor() as usize;
        let v0 = v.floor() as usize;
        let u1 = (u0 + 1).min(self.width - 1);
        let v1 = (v0 + 1).min(self.height - 1);
        let fu = (u - u0 as f64) as f32;
        let fv = (v - v0 as f64) as f32;

        let top = self.texel(u0, v0).lerp(self.texel(u1, v0), fu);
        let bottom = self.texel(u0, v1).lerp(self.texel(u1, v1), fu);
        top.lerp(bottom, fv)
    }

    fn nearest(coord: f64, dim: usize) -> usize {
        (coord.clamp(0.0, 1.0) * (dim - 1) as f64).round() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker() -> Texture {
        // 2x2: red green / blue white
        Texture::new(2, 2, vec![
            Rgb32::new(1.,0.,0.), Rgb32::new(0.,1.,0.),
            Rgb32::new(0.,0.,1.), Rgb32::new(1.,1.,1.),
        ]).unwrap()
    }

    #[test]
    fn texel_count_mismatch_test() {
        let r = Texture::new(2, 2, vec![Rgb32::black(); 3]);
        assert!(matches!(r, Err(RasterError::TexelCountMismatch { found: 3, .. })));
    }

    #[test]
    fn nearest_corners_test() {
        let tex = checker();
        assert_eq!(tex.sample_nearest(0.0, 0.0), Rgb32::new(1.,0.,0.));
        assert_eq!(tex.sample_nearest(1.0, 0.0), Rgb32::new(0.,1.,0.));
        assert_eq!(tex.sample_nearest(0.0, 1.0), Rgb32::new(0.,0.,1.));
        assert_eq!(tex.sample_nearest(1.0, 1.0), Rgb32::new(1.,1.,1.));
        // clamped
        assert_eq!(tex.sample_nearest(-3.0, 0.0), Rgb32::new(1.,0.,0.));
        assert_eq!(tex.sample_nearest(2.0, 2.0), Rgb32::new(1.,1.,1.));
        // nearest rounds
        assert_eq!(tex.sample_nearest(0.4, 0.0), Rgb32::new(1.,0.,0.));
        assert_eq!(tex.sample_nearest(0.6, 0.0), Rgb32::new(0.,1.,0.));
    }

    #[test]
    fn bilinear_test() {
        let tex = checker();
        // exact texel positions return the texel
        assert_eq!(tex.sample_bilinear(0.0, 0.0), Rgb32::new(1.,0.,0.));
        assert_eq!(tex.sample_bilinear(1.0, 1.0), Rgb32::new(1.,1.,1.));
        // midpoints blend the neighbors
        assert_eq!(tex.sample_bilinear(0.5, 0.0), Rgb32::new(0.5, 0.5, 0.0));
        assert_eq!(tex.sample_bilinear(0.0, 0.5), Rgb32::new(0.5, 0.0, 0.5));
        assert_eq!(tex.sample_bilinear(0.5, 0.5), Rgb32::new(0.5, 0.5, 0.5));
    }

    #[test]
    fn single_texel_test() {
        let tex = Texture::new(1, 1, vec![Rgb32::gray(0.25)]).unwrap();
        assert_eq!(tex.sample_nearest(0.7, 0.2), Rgb32::gray(0.25));
        assert_eq!(tex.sample_bilinear(0.7, 0.2), Rgb32::gray(0.25));
    }
}
