//! Points, Edges, and Polygons

use crate::color::Rgba8;

/// Point in 2D space
#[derive(Debug,Default,Copy,Clone,PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Edge between two points
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Edge {
    pub p0: Point,
    pub p1: Point,
}

impl Edge {
    /// Create a new edge
    pub fn new(p0: Point, p1: Point) -> Self {
        Edge { p0, p1 }
    }
}

/// Closed polygon with a fill color
///
/// The vertex list is implicitly closed: the edge from the last vertex
/// back to the first is part of the polygon.
#[derive(Debug,Clone)]
pub struct Polygon {
    pub vertices: Vec<Point>,
    pub color: Rgba8,
}

impl Polygon {
    /// Create a new polygon from its vertices
    pub fn new(vertices: Vec<Point>, color: Rgba8) -> Self {
        Polygon { vertices, color }
    }
    /// Create a new polygon from (x,y) pairs
    ///
    ///     use rasterkit::{Polygon,Rgba8};
    ///
    ///     let tri = Polygon::from_xy(&[(0.,0.),(10.,0.),(5.,8.)], Rgba8::black());
    ///     assert_eq!(tri.vertices.len(), 3);
    ///     assert_eq!(tri.edges().count(), 3);
    ///
    pub fn from_xy(points: &[(f64,f64)], color: Rgba8) -> Self {
        let vertices = points.iter().map(|&(x,y)| Point::new(x,y)).collect();
        Self::new(vertices, color)
    }
    /// Edges between consecutive vertices, including the closing edge
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Edge::new(self.vertices[i], self.vertices[(i+1) % n]))
    }
}
