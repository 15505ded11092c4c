//! Software rasterization algorithms on in-memory pixel buffers
//!
//! Components are library-style: the caller owns the pixel buffer and
//! every input is an explicit parameter. There is no shared runtime and
//! no hidden state.
//!
//! - Scanline polygon filling ([`fill_polygon`])
//! - Four-connected flood filling ([`flood_fill`])
//! - Texture sampling and mipmap level selection ([`Texture`], [`MipMap`])
//! - Perspective projection of homogeneous points ([`Projective`])
//!
//! Fill a polygon into an RGB buffer:
//!
//!     use rasterkit::{Pixfmt,Rgb8,Rgba8,RenderingBase,Polygon,fill_polygon};
//!
//!     let pix = Pixfmt::<Rgb8>::new(100,100);
//!     let mut ren_base = RenderingBase::new(pix);
//!     ren_base.clear(Rgba8::white());
//!
//!     let tri = Polygon::from_xy(&[(10.,10.),(90.,10.),(50.,90.)],
//!                                Rgba8::new(255,127,0,255));
//!     let report = fill_polygon(&tri, &mut ren_base);
//!     assert!(report.pixels_filled > 0);

pub mod base;
pub mod buffer;
pub mod color;
pub mod edge_table;
pub mod error;
pub mod flood_fill;
pub mod mipmap;
pub mod pixfmt;
pub mod polygon;
pub mod ppm;
pub mod scanline;
pub mod texture;
pub mod transform;

pub use crate::base::*;
pub use crate::buffer::*;
pub use crate::color::*;
pub use crate::edge_table::*;
pub use crate::error::*;
pub use crate::flood_fill::*;
pub use crate::mipmap::*;
pub use crate::pixfmt::*;
pub use crate::polygon::*;
pub use crate::scanline::*;
pub use crate::texture::*;
pub use crate::transform::*;

/// Access to the underlying pixel component data
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Source of pixel colors
pub trait Source {
    /// Get the pixel at the location `id = (x,y)`
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Writable grid of pixels with a known size
pub trait Pixel {
    /// Set the pixel at the location `id = (x,y)` to the color `c`
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Width of the image in pixels
    fn width(&self) -> usize;
    /// Height of the image in pixels
    fn height(&self) -> usize;
    /// Set every pixel to the color `c`
    fn fill<C: Color>(&mut self, c: C) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.set((x, y), c);
            }
        }
    }
}

/// Access Color properties and compoents
pub trait Color: std::fmt::Debug + Copy {
    /// Get the red value [0,1] as f64
    fn red(&self) -> f64;
    /// Get the green value [0,1] as f64
    fn green(&self) -> f64;
    /// Get the blue value [0,1] as f64
    fn blue(&self) -> f64;
    /// Get the alpha value [0,1] as f64
    fn alpha(&self) -> f64;
    /// Get the red value [0,255] as u8
    fn red8(&self) -> u8;
    /// Get the green value [0,255] as u8
    fn green8(&self) -> u8;
    /// Get the blue value [0,255] as u8
    fn blue8(&self) -> u8;
    /// Get the alpha value [0,255] as u8
    fn alpha8(&self) -> u8;
}
