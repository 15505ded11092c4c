//! Mipmap construction, sampling, and level selection

use log::debug;

use crate::color::Rgb32;
use crate::error::{RasterError, Result};

/// Pyramid of box-filtered texture levels
///
/// Level 0 is the source texture; every following level halves the
/// texel count by averaging neighbor pairs, down to a single texel
/// unless capped earlier.
#[derive(Debug,Clone)]
pub struct MipMap {
    levels: Vec<Vec<Rgb32>>,
}

impl MipMap {
    /// Build a pyramid from a texture whose length is a power of two
    ///
    /// The pyramid holds `log2(len) + 1` levels, capped by
    /// `n_level_max` and never less than 1.
    ///
    ///     use rasterkit::{MipMap,Rgb32};
    ///
    ///     let texels = [Rgb32::gray(0.0), Rgb32::gray(1.0),
    ///                   Rgb32::gray(0.5), Rgb32::gray(0.5)];
    ///     let mip = MipMap::build(&texels, 8).unwrap();
    ///     assert_eq!(mip.n_levels(), 3);
    ///     assert_eq!(mip.level(2).unwrap(), &[Rgb32::gray(0.5)]);
    ///
    pub fn build(texels: &[Rgb32], n_level_max: usize) -> Result<Self> {
        if !texels.len().is_power_of_two() {
            return Err(RasterError::NotPowerOfTwo(texels.len()));
        }
        let n_levels = (texels.len().ilog2() as usize + 1).min(n_level_max).max(1);

        let mut levels = Vec::with_capacity(n_levels);
        levels.push(texels.to_vec());
        for l in 1 .. n_levels {
            let coarser: Vec<Rgb32> = levels[l-1]
                .chunks_exact(2)
                .map(|pair| pair[0].mean(pair[1]))
                .collect();
            levels.push(coarser);
        }
        debug!("mipmap: built {} levels from {} texels", levels.len(), texels.len());
        Ok(MipMap { levels })
    }
    /// Number of levels in the pyramid
    pub fn n_levels(&self) -> usize {
        self.levels.len()
    }
    /// Texels of one level; level 0 is the source texture
    pub fn level(&self, level: usize) -> Option<&[Rgb32]> {
        self.levels.get(level).map(|l| l.as_slice())
    }
    /// Sample the nearest texel to `coord` on one level
    ///
    /// `coord` is clamped to [0,1] and `level` to the coarsest level.
    /// An empty level samples black.
    pub fn sample_nearest(&self, coord: f64, level: usize) -> Rgb32 {
        let level = level.min(self.levels.len() - 1);
        let data = &self.levels[level];
        if data.is_empty() {
            return Rgb32::black();
        }
        let len = data.len() as f64;
        let idx = (coord.clamp(0.0, 1.0) * len - 0.5).round().clamp(0.0, len - 1.0);
        data[idx as usize]
    }
    /// Pick the level whose texel size covers a pixel footprint
    ///
    /// Texel size is 1 at the coarsest level and halves with each finer
    /// level. The finest level with texel size >= `footprint` is
    /// selected; when even the coarsest is too fine, the coarsest is
    /// returned.
    pub fn level_for_footprint(&self, footprint: f64) -> usize {
        let n = self.levels.len();
        let mut texel_size = (2.0_f64).powi(-(n as i32 - 1));
        for level in 0 .. n {
            if texel_size >= footprint {
                return level;
            }
            texel_size *= 2.0;
        }
        n - 1
    }
}
