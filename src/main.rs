//! Myrmica - entry point
//!
//! Parses the command line, builds the colony and runs either the terminal
//! UI or a fixed number of headless ticks.

use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::info;

use myrmica::colony::Colony;
use myrmica::command::{self, Command};
use myrmica::core::config::SimConfig;
use myrmica::core::error::Result;
use myrmica::scheduler::{EnemyCadence, WaveTimer};
use myrmica::ui::{self, HudState};

/// Ant colony simulation in the terminal
#[derive(Parser, Debug)]
#[command(name = "myrmica")]
#[command(about = "Watch an ant colony dig, forage and defend its queen")]
struct Args {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// World width in cells
    #[arg(long)]
    width: Option<usize>,

    /// World height in cells
    #[arg(long)]
    height: Option<usize>,

    /// Run without a terminal UI
    #[arg(long)]
    headless: bool,

    /// Allied ticks to run in headless mode
    #[arg(long, default_value_t = 5000)]
    ticks: u64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("myrmica=info")
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => SimConfig::from_path(path)?,
        None => SimConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    config.validate()?;

    let mut colony = Colony::new(config)?;
    if args.headless {
        run_headless(&mut colony, args.ticks)
    } else {
        run_tui(&mut colony)
    }
}

/// Advance the simulation a fixed number of ticks without a UI
fn run_headless(colony: &mut Colony, ticks: u64) -> Result<()> {
    let dt = colony.config.tick_dt;
    let mut cadence = EnemyCadence::new();
    let mut wave_rng = ChaCha8Rng::seed_from_u64(colony.config.seed.wrapping_add(1));
    let mut wave_timer = WaveTimer::new(&mut wave_rng);
    let mut enemy_accum = 0.0f32;

    for _ in 0..ticks {
        colony.regen_cooldown(dt);
        if wave_timer.advance(dt, &mut wave_rng) {
            colony.spawn_wave();
        }

        enemy_accum += dt;
        if enemy_accum >= cadence.interval() {
            enemy_accum -= cadence.interval();
            colony.tick_enemies();
            cadence.adjust(1.0 / dt);
        }

        colony.step();
    }

    info!(
        food = colony.store.food(),
        queen_level = colony.store.queen_level(),
        allies = colony.allies.len(),
        enemies = colony.enemies.len(),
        "headless run finished"
    );
    Ok(())
}

fn run_tui(colony: &mut Colony) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = event_loop(&mut terminal, colony);

    // Restore the terminal even when the loop errored
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    colony: &mut Colony,
) -> Result<()> {
    let mut hud = HudState::default();
    let mut cadence = EnemyCadence::new();
    let mut wave_rng = ChaCha8Rng::seed_from_u64(colony.config.seed.wrapping_add(1));
    let mut wave_timer = WaveTimer::new(&mut wave_rng);

    let tick_dt = colony.config.tick_dt;
    let tick_rate = Duration::from_secs_f32(tick_dt);
    let mut last_frame = Instant::now();
    let mut sim_accum = 0.0f32;
    let mut enemy_accum = 0.0f32;

    loop {
        terminal.draw(|frame| ui::draw(frame, colony, &hud))?;

        let timeout = tick_rate.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if let Some(cmd) = Command::from_key(key) {
                        if !command::apply(colony, &mut hud, cmd) {
                            break;
                        }
                    }
                }
            }
        }

        let frame_dt = last_frame.elapsed().as_secs_f32();
        last_frame = Instant::now();

        colony.regen_cooldown(frame_dt);
        if wave_timer.advance(frame_dt, &mut wave_rng) {
            colony.spawn_wave();
        }

        // The allied side runs on a fixed timestep regardless of frame rate
        sim_accum += frame_dt;
        while sim_accum >= tick_dt {
            sim_accum -= tick_dt;
            colony.step();
        }

        // Enemies run on their own load-adaptive interval
        enemy_accum += frame_dt;
        if enemy_accum >= cadence.interval() {
            enemy_accum = 0.0;
            colony.tick_enemies();
            if frame_dt > 0.0 {
                cadence.adjust(1.0 / frame_dt);
            }
        }
    }
    Ok(())
}
