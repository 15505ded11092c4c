//! Scanline polygon filling

use log::{debug, trace};

use crate::base::RenderingBase;
use crate::edge_table::{ActiveEdgeTable, EdgeTable};
use crate::pixfmt::Pixfmt;
use crate::polygon::Polygon;

use crate::Pixel;

/// Classification of what a polygon fill did
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum FillOutcome {
    /// At least one pixel was written
    Filled,
    /// Fewer than three vertices; there is nothing to fill
    DegeneratePolygon,
    /// Valid input that produced no pixels: zero area, every edge
    /// horizontal, or the polygon lies outside the image
    EmptyRegion,
}

/// Report of a polygon fill
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct FillReport {
    pub outcome: FillOutcome,
    /// Number of pixels written
    pub pixels_filled: usize,
    /// Number of scanlines where a trailing unpaired crossing was skipped
    pub odd_scanlines: usize,
}

impl FillReport {
    fn empty(outcome: FillOutcome) -> Self {
        FillReport { outcome, pixels_filled: 0, odd_scanlines: 0 }
    }
}

/// Fill a polygon into a rendering base with the polygon's color
///
/// Classic scanline filling: edges are bucketed into an [EdgeTable]
/// sorted by lower y bound, the sweep walks scanlines top to bottom
/// keeping the edges that cross the current scanline in an
/// [ActiveEdgeTable], and pixels between pairs of crossings are
/// filled from `floor(x_left)` inclusive to `floor(x_right)` exclusive.
/// Writes are clipped to the image; degenerate inputs are reported,
/// not failed.
///
///     use rasterkit::{Pixfmt,Rgb8,Rgba8,RenderingBase,Polygon};
///     use rasterkit::{fill_polygon,FillOutcome};
///
///     let pix = Pixfmt::<Rgb8>::new(10,10);
///     let mut ren_base = RenderingBase::new(pix);
///     ren_base.clear(Rgba8::white());
///
///     let rect = Polygon::from_xy(&[(2.,3.),(8.,3.),(8.,7.),(2.,7.)],
///                                 Rgba8::black());
///     let report = fill_polygon(&rect, &mut ren_base);
///     assert_eq!(report.outcome, FillOutcome::Filled);
///     assert_eq!(report.pixels_filled, 24); // x in [2,8), y in [3,7)
///
pub fn fill_polygon<T>(polygon: &Polygon, ren: &mut RenderingBase<T>) -> FillReport
    where Pixfmt<T>: Pixel
{
    if polygon.vertices.len() < 3 {
        return FillReport::empty(FillOutcome::DegeneratePolygon);
    }

    let mut edge_table = EdgeTable::new(polygon);
    let mut active = ActiveEdgeTable::new();
    debug!("fill_polygon: {} vertices, {} sweepable edges",
           polygon.vertices.len(), edge_table.len());

    // lowest scanline touched by any edge; may be above the image
    let mut y = match edge_table.next_start() {
        Some(y0) => y0.floor(),
        None => return FillReport::empty(FillOutcome::EmptyRegion),
    };

    let ymax = ren.limits().3;
    let mut pixels_filled = 0;
    let mut odd_scanlines = 0;

    while y <= ymax as f64 {
        if edge_table.is_exhausted() && active.is_empty() {
            break;
        }
        // with no edge crossing this scanline, jump ahead to the next start
        if active.is_empty() {
            if let Some(y_next) = edge_table.next_start() {
                let y_next = y_next.floor();
                if y_next > y {
                    trace!("fill_polygon: jump {} -> {}", y, y_next);
                    y = y_next;
                }
            }
        }
        active.expire(y);
        active.promote(edge_table.take_started(y));
        active.sort_by_x();

        for (x_left, x_right) in active.spans() {
            let x1 = x_left.floor() as i64;
            let x2 = x_right.floor() as i64 - 1;
            pixels_filled += ren.fill_hline(x1, y as i64, x2, &polygon.color);
        }
        if active.has_unpaired() {
            trace!("fill_polygon: unpaired crossing at scanline {}", y);
            odd_scanlines += 1;
        }

        active.advance();
        y += 1.0;
    }

    let outcome = if pixels_filled > 0 {
        FillOutcome::Filled
    } else {
        FillOutcome::EmptyRegion
    };
    FillReport { outcome, pixels_filled, odd_scanlines }
}
