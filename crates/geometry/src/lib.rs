//! QuoteForge Geometry Engine
//!
//! Grid snapping and position constraint math for the document canvas.

mod snap;

pub use snap::{constrain, near_edge, snap, EDGE_SNAP_THRESHOLD};

/// A point on the document canvas
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A pixel size
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Container bounds the canvas is laid out in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Bounds {
    /// Default document canvas size
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 1200.0,
        }
    }
}

/// A rectangle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Check if a point is inside the rectangle
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    /// Top-left corner of the rectangle
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Pixel size of the rectangle
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
