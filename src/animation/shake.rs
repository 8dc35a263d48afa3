use crate::geometry::Offset;

const SWEEPS: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ShakePhase {
    Outward, // Moving away from rest towards `magnitude`
    Inward,  // Coming back from `magnitude` towards rest
    Resting,
}

/// Horizontal back-and-forth motion: three sweeps, alternating side
/// (left first), then `(0, 0)` forever.
///
/// With magnitude 15 and step 5 the sequence is
/// `0, -5, -10, -15, -10, -5, 0, 5, 10, 15, 10, 5, 0, -5, ... , 0, 0, ...`.
#[derive(Debug, Clone)]
pub struct Shake {
    magnitude: i32,
    step: i32,
    sign: i32,
    sweep: u8,
    phase: ShakePhase,
    x: i32,
}

impl Shake {
    pub fn new(magnitude: i32, step: i32) -> Self {
        // A non-positive step would never leave the first sweep.
        let phase = if magnitude > 0 && step > 0 {
            ShakePhase::Outward
        } else {
            ShakePhase::Resting
        };

        Self {
            magnitude,
            step,
            sign: -1,
            sweep: 0,
            phase,
            x: 0,
        }
    }

    pub fn next_offset(&mut self) -> Offset {
        loop {
            match self.phase {
                ShakePhase::Outward => {
                    if self.x < self.magnitude {
                        let offset = Offset::new(self.x * self.sign, 0);
                        self.x = self.x.saturating_add(self.step);
                        return offset;
                    }
                    self.x = self.magnitude;
                    self.phase = ShakePhase::Inward;
                }
                ShakePhase::Inward => {
                    if self.x > 0 {
                        let offset = Offset::new(self.x * self.sign, 0);
                        self.x -= self.step;
                        return offset;
                    }
                    self.sign = -self.sign;
                    self.sweep += 1;
                    self.x = 0;
                    self.phase = if self.sweep < SWEEPS {
                        ShakePhase::Outward
                    } else {
                        ShakePhase::Resting
                    };
                }
                ShakePhase::Resting => return Offset::ZERO,
            }
        }
    }
}

impl Iterator for Shake {
    type Item = Offset;

    fn next(&mut self) -> Option<Offset> {
        Some(self.next_offset())
    }
}
