//! Edge tables for the scanline sweep

use crate::polygon::{Edge, Polygon};

/// Bounds and slope of one polygon edge
///
/// The endpoint with the smaller y is the anchor: `x_lower` is the x
/// position there, and `inv_slope` is dx/dy walking towards the other
/// endpoint. Horizontal edges have dy = 0 and no finite slope.
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct EdgeTableEntry {
    /// Scanline where the edge begins
    pub y_lower: f64,
    /// Scanline where the edge ends
    pub y_upper: f64,
    /// X position at y_lower
    pub x_lower: f64,
    /// Change in x per unit step in y
    pub inv_slope: f64,
}

impl EdgeTableEntry {
    /// Build an entry from an edge, anchored at the lower-y endpoint
    pub fn from_edge(edge: Edge) -> Self {
        let (lower, upper) = if edge.p0.y < edge.p1.y {
            (edge.p0, edge.p1)
        } else {
            (edge.p1, edge.p0)
        };
        EdgeTableEntry {
            y_lower: lower.y,
            y_upper: upper.y,
            x_lower: lower.x,
            inv_slope: (upper.x - lower.x) / (upper.y - lower.y),
        }
    }
    /// True for edges with no finite slope; dy = 0 gives an infinite
    /// inv_slope, a zero-length edge gives NaN
    pub fn is_horizontal(&self) -> bool {
        !self.inv_slope.is_finite()
    }
}

/// All edges of a polygon, sorted by lower y bound
///
/// Horizontal edges are dropped on construction. The sweep consumes
/// entries front to back through a cursor; entries are never removed
/// mid-iteration.
#[derive(Debug,Default)]
pub struct EdgeTable {
    entries: Vec<EdgeTableEntry>,
    cursor: usize,
}

impl EdgeTable {
    /// Build a sorted edge table from a polygon
    pub fn new(polygon: &Polygon) -> Self {
        let mut entries: Vec<_> = polygon.edges()
            .map(EdgeTableEntry::from_edge)
            // entries must have finite y bounds or the sweep cannot terminate
            .filter(|e| !e.is_horizontal() && e.y_lower.is_finite() && e.y_upper.is_finite())
            .collect();
        entries.sort_by(|a,b| a.y_lower.total_cmp(&b.y_lower));
        EdgeTable { entries, cursor: 0 }
    }
    /// Number of entries remaining
    pub fn len(&self) -> usize {
        self.entries.len() - self.cursor
    }
    /// True once every entry has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.entries.len()
    }
    /// Lower bound of the next entry to be consumed
    pub fn next_start(&self) -> Option<f64> {
        self.entries.get(self.cursor).map(|e| e.y_lower)
    }
    /// Consume and return the entries whose lower bound has been reached
    pub fn take_started(&mut self, y: f64) -> &[EdgeTableEntry] {
        let begin = self.cursor;
        while self.cursor < self.entries.len() && self.entries[self.cursor].y_lower <= y {
            self.cursor += 1;
        }
        &self.entries[begin..self.cursor]
    }
}

/// Edge state while the sweep is between its bounds
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct ActiveEdgeTableEntry {
    /// X where the edge crosses the current scanline
    pub x_intersect: f64,
    /// Scanline where the edge expires
    pub y_upper: f64,
    /// Change in x per unit step in y
    pub inv_slope: f64,
}

impl From<EdgeTableEntry> for ActiveEdgeTableEntry {
    fn from(e: EdgeTableEntry) -> Self {
        ActiveEdgeTableEntry {
            x_intersect: e.x_lower,
            y_upper: e.y_upper,
            inv_slope: e.inv_slope,
        }
    }
}

impl ActiveEdgeTableEntry {
    /// True while the scanline is strictly below the edge's upper bound
    pub fn is_active(&self, y: f64) -> bool {
        y < self.y_upper
    }
    /// Step the crossing point to the next scanline
    pub fn advance(&mut self) {
        self.x_intersect += self.inv_slope;
    }
}

/// The edges crossing the current scanline
#[derive(Debug,Default)]
pub struct ActiveEdgeTable {
    entries: Vec<ActiveEdgeTableEntry>,
}

impl ActiveEdgeTable {
    pub fn new() -> Self {
        ActiveEdgeTable { entries: vec![] }
    }
    /// Number of edges crossing the scanline
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    /// Drop edges whose upper bound has been reached
    pub fn expire(&mut self, y: f64) {
        self.entries.retain(|e| e.is_active(y));
    }
    /// Take in edges that begin on this scanline
    pub fn promote(&mut self, started: &[EdgeTableEntry]) {
        self.entries.extend(started.iter().map(|&e| ActiveEdgeTableEntry::from(e)));
    }
    /// Order the crossings left to right for pairing
    pub fn sort_by_x(&mut self) {
        self.entries.sort_by(|a,b| a.x_intersect.total_cmp(&b.x_intersect));
    }
    /// Crossings paired as (0,1), (2,3), ...
    ///
    /// A trailing unpaired crossing is skipped; see [has_unpaired](Self::has_unpaired).
    pub fn spans(&self) -> impl Iterator<Item = (f64,f64)> + '_ {
        self.entries.chunks_exact(2).map(|p| (p[0].x_intersect, p[1].x_intersect))
    }
    /// True when the scanline has a crossing left unpaired
    pub fn has_unpaired(&self) -> bool {
        self.entries.len() % 2 == 1
    }
    /// Step every crossing to the next scanline
    pub fn advance(&mut self) {
        for e in &mut self.entries {
            e.advance();
        }
    }
}
