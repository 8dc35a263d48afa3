use std::time::Instant;

use tracing::{debug, trace};

use crate::animation::Shake;
use crate::constants::*;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::surface::{ImageProvider, Picture, Surface};
use crate::timer::PoolingTimer;

use super::{layout_asset_name, thumbnail_size, thumbnail_slots};

struct Thumbnails<I> {
    images: [I; 2],
    positions: [Point; 2],
}

/// Two layout thumbnails shaking in opposite directions.
pub struct ChoiceLayouts<I> {
    choices: [u32; 2],
    thumbnails: Option<Thumbnails<I>>,
    shake: Option<Shake>,
    shake_timer: PoolingTimer,
}

impl<I: Picture> ChoiceLayouts<I> {
    pub fn new(choices: [u32; 2]) -> Self {
        Self {
            choices,
            thumbnails: None,
            shake: None,
            shake_timer: PoolingTimer::new(ANIMATION_PERIOD),
        }
    }

    pub(super) fn resize<P>(&mut self, display: Rect, background: &I, provider: &mut P) -> Result<()>
    where
        P: ImageProvider<Image = I>,
    {
        let size = thumbnail_size(background);
        let left = provider.get_image(&layout_asset_name(self.choices[0]), size)?;
        let right = provider.get_image(&layout_asset_name(self.choices[1]), size)?;

        let positions = thumbnail_slots(display, background, &left, right.size().0);
        debug!(choices = ?self.choices, ?positions, "Placed layout thumbnails");

        self.thumbnails = Some(Thumbnails { images: [left, right], positions });
        Ok(())
    }

    pub(super) fn animate<S: Surface<I>>(&mut self, surface: &mut S, now: Instant) {
        let Some(thumbnails) = &self.thumbnails else {
            return;
        };

        if self.shake.is_none() || self.shake_timer.is_timed_out(now) {
            trace!("Restarting shake");
            self.shake = Some(Shake::new(SHAKE_MAGNITUDE, SHAKE_STEP));
            self.shake_timer.start(now);
        }

        let offset = self.shake.as_mut().map(Shake::next_offset).unwrap_or_default();
        let [left, right] = &thumbnails.images;
        let [left_pos, right_pos] = thumbnails.positions;
        surface.blit(left, left_pos + offset);
        surface.blit(right, right_pos - offset);
    }
}
