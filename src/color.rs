//! Colors

use crate::Color;

/// Convert an f64 [0,1] component to a u8 [0,255] component
pub fn cu8(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Color as Red, Green, Blue, and Alpha
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Create new color from any [Color]
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8(), c.alpha8())
    }
}

impl Color for Rgba8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.r) }
    fn green(&self) -> f64 { color_u8_to_f64(self.g) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.b) }
    fn alpha(&self) -> f64 { color_u8_to_f64(self.a) }
    fn alpha8(&self) -> u8 { self.a }
    fn red8(&self) -> u8 { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8 { self.b }
}

/// Color as Red, Green, Blue
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub fn white() -> Self {
        Self::new(255,255,255)
    }
    pub fn black() -> Self {
        Self::new(0,0,0)
    }
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb8 { r, g, b }
    }
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g)
    }
    /// Create new color from any [Color]
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8())
    }
}

impl Color for Rgb8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.r) }
    fn green(&self) -> f64 { color_u8_to_f64(self.g) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.b) }
    fn alpha(&self) -> f64 { 1.0 }
    fn alpha8(&self) -> u8 { 255 }
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
}

impl From<Rgba8> for Rgb8 {
    fn from(c: Rgba8) -> Rgb8 {
        Rgb8::new( c.r, c.g, c.b )
    }
}
impl From<Rgb8> for Rgba8 {
    fn from(c: Rgb8) -> Rgba8 {
        Rgba8::new( c.r, c.g, c.b, 255 )
    }
}

/// Color as Red, Green, Blue with f32 [0,1] components
///
/// Used for texture and mipmap filtering where component math happens
/// before quantization to bytes.
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Rgb32 {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb32 {
    pub fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
    pub fn black() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Rgb32 { r, g, b }
    }
    pub fn gray(g: f32) -> Self {
        Self::new(g,g,g)
    }
    /// Linear interpolation towards `other`; `t = 0` is self, `t = 1` is other
    pub fn lerp(self, other: Rgb32, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }
    /// Component-wise mean of two colors
    pub fn mean(self, other: Rgb32) -> Self {
        Self::new(
            0.5 * (self.r + other.r),
            0.5 * (self.g + other.g),
            0.5 * (self.b + other.b),
        )
    }
}

impl Color for Rgb32 {
    fn   red(&self) -> f64 { f64::from(self.r) }
    fn green(&self) -> f64 { f64::from(self.g) }
    fn  blue(&self) -> f64 { f64::from(self.b) }
    fn alpha(&self) -> f64 { 1.0 }
    fn alpha8(&self) -> u8 { 255 }
    fn red8(&self) -> u8   { cu8(self.red()) }
    fn green8(&self) -> u8 { cu8(self.green()) }
    fn blue8(&self) -> u8  { cu8(self.blue()) }
}

impl From<Rgb8> for Rgb32 {
    fn from(c: Rgb8) -> Rgb32 {
        Rgb32::new(c.red() as f32, c.green() as f32, c.blue() as f32)
    }
}

impl<'a, C> From<&'a C> for Rgba8 where C: Color {
    fn from(c: &C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8(), c.alpha8() )
    }
}
impl<'a, C> From<&'a C> for Rgb8 where C: Color {
    fn from(c: &C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8())
    }
}
