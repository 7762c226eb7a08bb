use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Item geometry, expressed in the coordinates of the item's parent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left/top edges are inside, right/bottom edges are not.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.y >= self.y
            && point.x < self.x + self.width
            && point.y < self.y + self.height
    }
}

/// Scale then translate, one coordinate space into another.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub dx: f64,
    pub dy: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            dx: 0.0,
            dy: 0.0,
        }
    }

    pub fn translation(dx: f64, dy: f64) -> Self {
        Self {
            dx,
            dy,
            ..Self::identity()
        }
    }

    pub fn scale(scale_x: f64, scale_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            ..Self::identity()
        }
    }

    pub fn map(&self, point: Point) -> Point {
        Point {
            x: point.x * self.scale_x + self.dx,
            y: point.y * self.scale_y + self.dy,
        }
    }

    /// `self` first, then `next`.
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            scale_x: self.scale_x * next.scale_x,
            scale_y: self.scale_y * next.scale_y,
            dx: self.dx * next.scale_x + next.dx,
            dy: self.dy * next.scale_y + next.dy,
        }
    }
}

/// Hit test for a point produced by one item against another item.
///
/// `mapping` takes the source item's coordinates into the coordinate
/// space of `target`'s parent, which is where `target` is positioned.
pub fn point_is_in_item(mapping: &Transform, target: &Rect, point: Point) -> bool {
    let mapped = mapping.map(point);
    let hit = target.contains(mapped);
    tracing::trace!(?point, ?mapped, hit, "point hit test");
    hit
}
