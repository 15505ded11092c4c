//! Flood filling

use log::trace;

use crate::color::Rgb8;
use crate::pixfmt::Pixfmt;

use crate::Pixel;
use crate::Source;

/// Fill the 4-connected region around a seed with a color
///
/// The fill color doubles as the region border: painting stops at any
/// pixel that already holds it, and at the image limits. Comparison is
/// on the RGB components; alpha does not separate regions. Returns the
/// number of pixels painted, which is 0 when the seed is outside the
/// image or already holds the fill color.
///
/// The worklist is an explicit stack, so region size is bounded by
/// memory rather than call depth.
///
///     use rasterkit::{flood_fill,Pixfmt,Rgb8,Source,Rgba8};
///
///     let mut pix = Pixfmt::<Rgb8>::new(4,4);
///     let painted = flood_fill(&mut pix, 0, 0, Rgb8::new(255,0,0));
///     assert_eq!(painted, 16);
///     assert_eq!(pix.get((3,3)), Rgba8::new(255,0,0,255));
///
pub fn flood_fill<T>(pix: &mut Pixfmt<T>, seed_x: i64, seed_y: i64, color: Rgb8) -> usize
    where Pixfmt<T>: Pixel + Source
{
    let (w, h) = (pix.width() as i64, pix.height() as i64);
    let mut painted = 0;
    let mut stack = vec![(seed_x, seed_y)];

    while let Some((x, y)) = stack.pop() {
        if x < 0 || y < 0 || x >= w || y >= h {
            continue;
        }
        let id = (x as usize, y as usize);
        if Rgb8::from(&pix.get(id)) == color {
            continue;
        }
        pix.set(id, color);
        painted += 1;

        stack.push((x, y + 1));
        stack.push((x + 1, y));
        stack.push((x, y - 1));
        stack.push((x - 1, y));
    }
    trace!("flood_fill: painted {} pixels from seed ({},{})", painted, seed_x, seed_y);
    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba8;

    #[test]
    fn seed_on_fill_color_test() {
        let mut pix = Pixfmt::<Rgb8>::new(4,4);
        pix.fill(Rgb8::new(0,255,0));
        assert_eq!(flood_fill(&mut pix, 1, 1, Rgb8::new(0,255,0)), 0);
    }

    #[test]
    fn out_of_bounds_seed_test() {
        let mut pix = Pixfmt::<Rgb8>::new(4,4);
        assert_eq!(flood_fill(&mut pix, -1, 0, Rgb8::black()), 0);
        assert_eq!(flood_fill(&mut pix, 0, 4, Rgb8::black()), 0);
        assert_eq!(flood_fill(&mut pix, 100, 100, Rgb8::black()), 0);
    }

    #[test]
    fn alpha_does_not_separate_regions_test() {
        // same RGB at differing alpha still reads as the fill color
        let mut pix = Pixfmt::<Rgba8>::new(2,1);
        pix.set((0,0), Rgba8::new(255,0,0,10));
        pix.set((1,0), Rgba8::new(0,0,0,255));
        assert_eq!(flood_fill(&mut pix, 0, 0, Rgb8::new(255,0,0)), 0);
        assert_eq!(flood_fill(&mut pix, 1, 0, Rgb8::new(255,0,0)), 1);
    }
}
