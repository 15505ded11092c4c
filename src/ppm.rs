//! Reading and writing of image files
//!
//! Buffers are 8-bit RGB; the file format is chosen from the filename
//! extension. See <https://en.wikipedia.org/wiki/Netpbm_format#PPM_example>
//! for the PPM layout.

use std::path::Path;

use log::debug;

use crate::error::Result;

/// Read an image file into RGB bytes, returning (data, width, height)
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize)> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    let buf = img.into_raw();
    Ok((buf, w as usize, h as usize))
}

/// Write RGB bytes of width * height pixels to an image file
pub fn write_file<P: AsRef<Path>>(buf: &[u8], width: usize, height: usize, filename: P) -> Result<()> {
    image::save_buffer(filename, buf, width as u32, height as u32,
                       image::ExtendedColorType::Rgb8)?;
    Ok(())
}

/// Compare two image files byte for byte
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        debug!("img_diff: dimensions differ: {}x{} vs {}x{}", w1,h1,w2,h2);
        return Ok(false);
    }
    let mut n_diff = 0;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            if n_diff == 0 {
                debug!("img_diff: first difference at {} [{},{},{}]: {} {}",
                       i, (i/3)%w1, (i/3)/w1, i%3, v1, v2);
            }
            n_diff += 1;
        }
    }
    if n_diff > 0 {
        debug!("img_diff: {} bytes differ", n_diff);
    }
    Ok(n_diff == 0)
}
