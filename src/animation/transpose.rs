use crate::geometry::{Offset, Point};

/// Straight move from `origin` to `target`, as a cumulative offset from
/// `origin`.
///
/// Both axes advance by `step` on each frame and clamp at their own end, so
/// the shorter axis arrives first and waits. Once both have arrived the full
/// displacement is returned forever.
///
/// Distances are tracked in `i64`; offsets beyond the `i32` range saturate.
#[derive(Debug, Clone)]
pub struct Transpose {
    x_end: i64,
    y_end: i64,
    x_sign: i64,
    y_sign: i64,
    step: i64,
    tick: i64,
}

fn saturate(value: i64) -> i32 {
    value.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl Transpose {
    pub fn new(origin: Point, target: Point, step: i32) -> Self {
        let x_sign = if origin.x > target.x { -1 } else { 1 };
        let y_sign = if origin.y > target.y { -1 } else { 1 };

        Self {
            x_end: origin.x.abs_diff(target.x) as i64,
            y_end: origin.y.abs_diff(target.y) as i64,
            x_sign,
            y_sign,
            step: step as i64,
            tick: 0,
        }
    }

    /// Displacement that takes `origin` exactly onto `target`.
    pub fn destination(&self) -> Offset {
        Offset::new(saturate(self.x_sign * self.x_end), saturate(self.y_sign * self.y_end))
    }

    pub fn is_arrived(&self) -> bool {
        self.step <= 0 || self.travelled() >= self.x_end.max(self.y_end)
    }

    fn travelled(&self) -> i64 {
        self.tick.saturating_mul(self.step)
    }

    pub fn next_offset(&mut self) -> Offset {
        if self.is_arrived() {
            return self.destination();
        }

        let travelled = self.travelled();
        self.tick += 1;
        Offset::new(
            saturate(self.x_sign * travelled.min(self.x_end)),
            saturate(self.y_sign * travelled.min(self.y_end)),
        )
    }
}

impl Iterator for Transpose {
    type Item = Offset;

    fn next(&mut self) -> Option<Offset> {
        Some(self.next_offset())
    }
}
