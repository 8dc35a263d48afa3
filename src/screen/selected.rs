use std::time::Instant;

use tracing::{debug, trace};

use crate::animation::Transpose;
use crate::constants::*;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::surface::{ImageProvider, Picture, Surface};
use crate::timer::PoolingTimer;

use super::{layout_asset_name, thumbnail_size, thumbnail_slots};

/// The chosen layout thumbnail, sliding from its slot to the display center.
pub struct SelectedLayout<I> {
    choices: [u32; 2],
    selected: u32,
    thumbnail: Option<(I, Point)>,
    transpose: Option<Transpose>,
    transpose_timer: PoolingTimer,
}

impl<I> SelectedLayout<I> {
    pub fn selected(&self) -> u32 {
        self.selected
    }

    /// True when the selection was offered on the left.
    pub fn is_left_slot(&self) -> bool {
        self.selected == self.choices[0]
    }
}

impl<I: Picture> SelectedLayout<I> {
    pub fn new(choices: [u32; 2], selected: u32) -> Result<Self> {
        if !choices.contains(&selected) {
            return Err(Error::SelectionNotOffered { selected, choices });
        }

        Ok(Self {
            choices,
            selected,
            thumbnail: None,
            transpose: None,
            transpose_timer: PoolingTimer::new(ANIMATION_PERIOD),
        })
    }

    pub(super) fn resize<P>(&mut self, display: Rect, background: &I, provider: &mut P) -> Result<()>
    where
        P: ImageProvider<Image = I>,
    {
        let image = provider.get_image(&layout_asset_name(self.selected), thumbnail_size(background))?;

        let [left, right] = thumbnail_slots(display, background, &image, image.size().0);
        let position = if self.is_left_slot() { left } else { right };
        debug!(selected = self.selected, ?position, "Placed selected thumbnail");

        self.thumbnail = Some((image, position));
        Ok(())
    }

    pub(super) fn animate<S: Surface<I>>(&mut self, display: Rect, surface: &mut S, now: Instant) {
        let Some((image, position)) = &self.thumbnail else {
            return;
        };

        let end = Point::new(image.rect().with_center(display.center()).left(), position.y);
        if self.transpose.is_none() || self.transpose_timer.is_timed_out(now) {
            trace!(from = ?position, to = ?end, "Restarting transpose");
            self.transpose = Some(Transpose::new(*position, end, TRANSPOSE_STEP));
            self.transpose_timer.start(now);
        }

        let offset = self.transpose.as_mut().map(Transpose::next_offset).unwrap_or_default();
        surface.blit(image, *position + offset);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::super::Screen;
    use super::super::testing::{FakeImage, FakeProvider, RecordingSurface};
    use super::*;

    const DISPLAY: Rect = Rect::new(0, 0, 1920, 1080);

    fn xs(surface: &RecordingSurface, name: &str) -> Vec<i32> {
        surface.blits_of(name).iter().map(|p| p.x).collect()
    }

    #[test]
    fn name_follows_the_selection() {
        let screen: Screen<FakeImage> = Screen::selected([3, 7], 7).unwrap();
        assert_eq!(screen.to_string(), "chosen7.png");
    }

    #[test]
    fn selection_must_be_offered() {
        let err = SelectedLayout::<FakeImage>::new([3, 7], 4).err().unwrap();
        assert!(matches!(err, Error::SelectionNotOffered { selected: 4, choices: [3, 7] }));
    }

    #[test]
    fn second_choice_starts_in_the_right_slot() {
        let mut provider = FakeProvider::default()
            .with_natural("layout7.png", (400, 600));
        let mut screen = Screen::selected([3, 7], 7).unwrap();
        screen.resize(DISPLAY, &mut provider).unwrap();

        assert_eq!(
            provider.loads,
            vec![
                ("chosen.png".to_string(), (1920, 1080)),
                ("layout7.png".to_string(), (1152, 648)),
            ]
        );

        let mut surface = RecordingSurface::default();
        screen.animate(&mut surface, Instant::now());
        // 432px thumbnail: gutter 352, right slot at 352 * 2 + 432.
        assert_eq!(surface.blits_of("layout7.png"), vec![Point::new(1136, 280)]);
    }

    #[test]
    fn slides_to_the_center_and_stays() {
        let mut provider = FakeProvider::default()
            .with_natural("layout7.png", (400, 600));
        let mut screen = Screen::selected([3, 7], 7).unwrap();
        screen.resize(DISPLAY, &mut provider).unwrap();

        let now = Instant::now();
        let mut surface = RecordingSurface::default();
        for _ in 0..12 {
            screen.animate(&mut surface, now);
        }

        // From 1136 to the centered left edge 960 - 216 = 744.
        assert_eq!(
            xs(&surface, "layout7.png"),
            vec![1136, 1086, 1036, 986, 936, 886, 836, 786, 744, 744, 744, 744]
        );
        assert!(surface.blits_of("layout7.png").iter().all(|p| p.y == 280));
    }

    #[test]
    fn first_choice_slides_right_from_the_left_slot() {
        let mut provider = FakeProvider::default()
            .with_natural("layout3.png", (400, 600));
        let mut screen = Screen::selected([3, 7], 3).unwrap();
        screen.resize(DISPLAY, &mut provider).unwrap();

        let now = Instant::now();
        let mut surface = RecordingSurface::default();
        for _ in 0..10 {
            screen.animate(&mut surface, now);
        }
        assert_eq!(
            xs(&surface, "layout3.png"),
            vec![352, 402, 452, 502, 552, 602, 652, 702, 744, 744]
        );
    }

    #[test]
    fn slide_replays_after_the_period() {
        let mut provider = FakeProvider::default()
            .with_natural("layout7.png", (400, 600));
        let mut screen = Screen::selected([3, 7], 7).unwrap();
        screen.resize(DISPLAY, &mut provider).unwrap();

        let t0 = Instant::now();
        let mut surface = RecordingSurface::default();
        screen.animate(&mut surface, t0);
        screen.animate(&mut surface, t0 + Duration::from_secs(1));
        screen.animate(&mut surface, t0 + Duration::from_secs(9));
        screen.animate(&mut surface, t0 + Duration::from_secs(11));
        screen.animate(&mut surface, t0 + Duration::from_secs(12));

        assert_eq!(xs(&surface, "layout7.png"), vec![1136, 1086, 1036, 1136, 1086]);
    }
}
