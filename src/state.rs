use clap::ValueEnum;

use crate::error::Result;
use crate::screen::{Screen, StaticKind};
use crate::surface::Picture;

/// Kiosk states, each shown with its own background screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BoothState {
    Intro,          // Waiting for a visitor
    Choose,         // Two layouts offered
    Chosen,         // Layout picked, thumbnail slides to the center
    Capture,        // Taking pictures
    Processing,     // Assembling the final picture
    Print,          // Asking whether to print
    Finished,       // Thank you
    IntroWithPrint, // Waiting, last picture still printable
    Oops,           // Something went wrong
}

impl BoothState {
    /// State shown after this one in an unattended session.
    pub fn next(self) -> Self {
        match self {
            BoothState::Intro | BoothState::IntroWithPrint => BoothState::Choose,
            BoothState::Choose => BoothState::Chosen,
            BoothState::Chosen => BoothState::Capture,
            BoothState::Capture => BoothState::Processing,
            BoothState::Processing => BoothState::Print,
            BoothState::Print => BoothState::Finished,
            BoothState::Finished => BoothState::IntroWithPrint,
            BoothState::Oops => BoothState::Intro,
        }
    }

    pub fn screen<I: Picture>(self, choices: [u32; 2], selected: u32) -> Result<Screen<I>> {
        let kind = match self {
            BoothState::Choose => return Ok(Screen::choice(choices)),
            BoothState::Chosen => return Screen::selected(choices, selected),
            BoothState::Intro => StaticKind::Intro,
            BoothState::IntroWithPrint => StaticKind::IntroWithPrint,
            BoothState::Capture => StaticKind::Capture,
            BoothState::Processing => StaticKind::Processing,
            BoothState::Print => StaticKind::Print,
            BoothState::Finished => StaticKind::Finished,
            BoothState::Oops => StaticKind::Oops,
        };
        Ok(Screen::fixed(kind))
    }
}
