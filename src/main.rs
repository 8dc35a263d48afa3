use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use raylib::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod animation;
mod config;
mod constants;
mod error;
mod geometry;
mod render;
mod screen;
mod state;
mod surface;
mod texture_loader;
mod timer;

use crate::config::Config;
use crate::constants::*;
use crate::render::{RaylibSurface, draw_error, window_rect};
use crate::screen::Screen;
use crate::texture_loader::{Asset, AssetStore};
use crate::timer::PoolingTimer;

fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = if config.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    config.validate().context("invalid arguments")?;
    let choices = config.choice_pair()?;
    let selected = config.selected_layout()?;

    let mut assets = AssetStore::new(&config.assets);
    let available = assets.list()
        .with_context(|| format!("cannot read asset directory {}", assets.root().display()))?;
    info!(directory = %assets.root().display(), pictures = available.len(), "Using assets");

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title("Photobooth")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Session State ---
    let mut state = config.start;
    let mut screen: Screen<Asset> = state.screen(choices, selected)?;
    let mut dwell_timer = PoolingTimer::new(config.dwell_duration()?);
    dwell_timer.start(Instant::now());
    info!(?state, screen = %screen, "Showing screen");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let now = Instant::now();

        if !config.hold && dwell_timer.is_timed_out(now) {
            state = state.next();
            screen = state.screen(choices, selected)?;
            dwell_timer.start(now);
            info!(?state, screen = %screen, "Showing screen");
        }

        let rect = window_rect(&rl);
        let resized = screen.resize(rect, &mut assets.loader(&mut rl, &thread));
        if let Err(e) = resized {
            error!("{}", e);
            let message = e.to_string();
            let show_until = Instant::now() + Duration::from_secs_f32(ERROR_DISPLAY);
            while Instant::now() < show_until && !rl.window_should_close() {
                let mut d = rl.begin_drawing(&thread);
                draw_error(&mut d, &message);
            }
            return Err(e).with_context(|| format!("cannot show {}", screen));
        }

        let mut d = rl.begin_drawing(&thread);
        screen.animate(&mut RaylibSurface::new(&mut d), now);
    }

    Ok(())
}
