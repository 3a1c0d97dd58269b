use nalgebra as na;
use serde_derive::{Deserialize, Serialize};

/// Pixel coordinates of a point in the frame.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline(always)]
    pub fn as_point(&self) -> na::Point2<f32> {
        na::Point2::new(self.x as f32, self.y as f32)
    }

    /// Euclidean distance to another position, in pixels.
    #[inline]
    pub fn distance(&self, other: &Position) -> f32 {
        na::distance(&self.as_point(), &other.as_point())
    }
}

impl From<(i32, i32)> for Position {
    #[inline]
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Width-height of a box, in pixels.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    #[inline]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl From<(i32, i32)> for Size {
    #[inline]
    fn from((width, height): (i32, i32)) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned box in left-top-width-height form, as emitted by the
/// detector after class filtering and non-maximum suppression.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub position: Position,
    pub size: Size,
}

impl BoundingBox {
    #[inline]
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            position: Position::new(x, y),
            size: Size::new(width, height),
        }
    }

    #[inline(always)]
    pub fn left(&self) -> i32 {
        self.position.x
    }

    #[inline(always)]
    pub fn top(&self) -> i32 {
        self.position.y
    }

    #[inline(always)]
    pub fn right(&self) -> i32 {
        self.position.x + self.size.width
    }

    #[inline(always)]
    pub fn bottom(&self) -> i32 {
        self.position.y + self.size.height
    }

    /// Geometric center, integer division. Matching runs on this point.
    #[inline]
    pub fn centroid(&self) -> Position {
        Position::new(
            self.position.x + self.size.width / 2,
            self.position.y + self.size.height / 2,
        )
    }
}

impl From<[i32; 4]> for BoundingBox {
    #[inline]
    fn from([x, y, w, h]: [i32; 4]) -> Self {
        Self::new(x, y, w, h)
    }
}
