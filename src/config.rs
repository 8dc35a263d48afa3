use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::*;
use crate::error::{Error, Result};
use crate::state::BoothState;

/// Photobooth background screens: shows each kiosk state's animated
/// background in a window.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Config {
    /// Directory holding the background and layout pictures
    #[arg(short, long, default_value = "assets")]
    pub assets: PathBuf,

    /// Initial window width
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Initial window height
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// The two layouts offered on the choice screen
    #[arg(long, num_args = 2, value_names = ["LEFT", "RIGHT"], default_values_t = [1, 2])]
    pub choices: Vec<u32>,

    /// Layout picked on the chosen screen (defaults to the left choice)
    #[arg(long)]
    pub selected: Option<u32>,

    /// State to start from
    #[arg(long, value_enum, default_value_t = BoothState::Intro)]
    pub start: BoothState,

    /// Seconds each state stays on screen
    #[arg(long, default_value_t = DISPLAY_DURATION)]
    pub dwell: f32,

    /// Stay on the start state instead of walking through the session
    #[arg(long)]
    pub hold: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn choice_pair(&self) -> Result<[u32; 2]> {
        <[u32; 2]>::try_from(self.choices.as_slice())
            .map_err(|_| Error::InvalidConfig(format!("expected two choices, got {:?}", self.choices)))
    }

    pub fn selected_layout(&self) -> Result<u32> {
        let choices = self.choice_pair()?;
        let selected = self.selected.unwrap_or(choices[0]);
        if !choices.contains(&selected) {
            return Err(Error::SelectionNotOffered { selected, choices });
        }
        Ok(selected)
    }

    /// Time each state stays on screen. Rejects values that are not positive
    /// or too large to represent as a `Duration`.
    pub fn dwell_duration(&self) -> Result<Duration> {
        if self.dwell.is_nan() || self.dwell <= 0.0 {
            return Err(Error::InvalidConfig(format!("dwell must be positive, got {}", self.dwell)));
        }
        Duration::try_from_secs_f32(self.dwell)
            .map_err(|e| Error::InvalidConfig(format!("dwell of {} seconds: {}", self.dwell, e)))
    }

    pub fn validate(&self) -> Result<()> {
        self.selected_layout()?;
        self.dwell_duration()?;
        if self.width <= 0 || self.height <= 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        Config::try_parse_from(std::iter::once("boothscreens").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.assets, PathBuf::from("assets"));
        assert_eq!((config.width, config.height), (960, 540));
        assert_eq!(config.choice_pair().unwrap(), [1, 2]);
        assert_eq!(config.selected_layout().unwrap(), 1);
        assert_eq!(config.start, BoothState::Intro);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_choices_and_selection() {
        let config = parse(&["--choices", "3", "7", "--selected", "7", "--start", "chosen", "--hold"]);
        assert_eq!(config.choice_pair().unwrap(), [3, 7]);
        assert_eq!(config.selected_layout().unwrap(), 7);
        assert_eq!(config.start, BoothState::Chosen);
        assert!(config.hold);
    }

    #[test]
    fn selection_outside_choices_is_rejected() {
        let config = parse(&["--choices", "3", "7", "--selected", "4"]);
        assert!(matches!(config.validate(), Err(Error::SelectionNotOffered { selected: 4, .. })));
    }

    #[test]
    fn dwell_must_be_positive() {
        let config = parse(&["--dwell", "0"]);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn oversized_dwell_is_rejected() {
        let config = parse(&["--dwell", "1e30"]);
        assert!(matches!(config.dwell_duration(), Err(Error::InvalidConfig(_))));
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn dwell_converts_to_a_duration() {
        let config = parse(&["--dwell", "2.5"]);
        assert_eq!(config.dwell_duration().unwrap(), Duration::from_millis(2500));
    }

    #[test]
    fn a_single_choice_does_not_parse() {
        let args = ["boothscreens", "--choices", "3"];
        assert!(Config::try_parse_from(args).is_err());
    }

    #[test]
    fn start_state_names_are_kebab_case() {
        assert_eq!(parse(&["--start", "intro-with-print"]).start, BoothState::IntroWithPrint);
    }
}
