use std::ops::{Add, Sub};

/// Per-frame pixel displacement applied to a draw position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0, dy: 0 };

    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Absolute pixel position on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Offset> for Point {
    type Output = Point;

    fn add(self, offset: Offset) -> Point {
        Point::new(self.x.saturating_add(offset.dx), self.y.saturating_add(offset.dy))
    }
}

impl Sub<Offset> for Point {
    type Output = Point;

    fn sub(self, offset: Offset) -> Point {
        Point::new(self.x.saturating_sub(offset.dx), self.y.saturating_sub(offset.dy))
    }
}

/// Integer rectangle with the centering rules of a 2D blitting surface:
/// the center of a rect is `x + width / 2`, and centering a rect on a point
/// moves its corner to `cx - width / 2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Rect of the given size anchored at the origin.
    pub const fn from_size(size: (i32, i32)) -> Self {
        Self::new(0, 0, size.0, size.1)
    }

    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.x + self.width.div_euclid(2),
            self.y + self.height.div_euclid(2),
        )
    }

    /// Same size, moved so that its center lands on `center`.
    pub fn with_center(&self, center: Point) -> Rect {
        Rect::new(
            center.x - self.width.div_euclid(2),
            center.y - self.height.div_euclid(2),
            self.width,
            self.height,
        )
    }
}

/// Largest size fitting inside `target` that keeps the aspect ratio of `original`.
pub fn fit_keep_aspect(original: (i32, i32), target: (i32, i32)) -> (i32, i32) {
    let (ow, oh) = (original.0 as i64, original.1 as i64);
    let (tw, th) = (target.0.max(0) as i64, target.1.max(0) as i64);
    if ow <= 0 || oh <= 0 {
        return (tw as i32, th as i32);
    }

    // Integer cross-multiplication keeps the limiting side exact.
    if tw * oh <= th * ow {
        (tw as i32, (oh * tw / ow) as i32)
    } else {
        ((ow * th / oh) as i32, th as i32)
    }
}
