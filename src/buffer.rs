//! Rendering buffer

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format)
#[derive(Debug,Default)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the Image is allocated and initialized to 0
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![0u8; width * height * bpp]
        }
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Clear an image; all components are set to 255
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 255);
    }
}

use std::ops::Index;
use std::ops::IndexMut;

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &self.data[i..i+self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &mut self.data[i..i+self.bpp]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendering_buffer_test() {
        let mut rbuf = RenderingBuffer::new(4, 2, 3);
        assert_eq!(rbuf.len(), 24);
        assert_eq!(&rbuf[(0,0)], &[0u8,0,0][..]);

        rbuf[(1,0)][0] = 7;
        rbuf[(1,0)][2] = 9;
        assert_eq!(&rbuf[(1,0)], &[7u8,0,9][..]);
        // row-major: (0,1) starts one full row in
        rbuf[(0,1)][1] = 5;
        assert_eq!(rbuf.data[4*3+1], 5);

        rbuf.clear();
        assert_eq!(&rbuf[(1,0)], &[255u8,255,255][..]);
    }
}
