//! Command-line driver for the phalanx hand animation core.
//!
//! Runs a scripted, fixed-step session through the engine and reports the
//! camera, patrol and finger state, or dumps options and their schema.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use phalanx::input::{InputEvent, InputProcessor, MouseButton};
use phalanx::render::SceneUniform;
use phalanx::skeleton::Finger;
use phalanx::util::FrameClock;
use phalanx::{HandEngine, Options};

#[derive(Parser)]
#[command(name = "phalanx")]
#[command(about = "Quaternion camera, patrol and finger gestures for a hand viewer", long_about = None)]
#[command(version)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in input script at a fixed frame rate
    Simulate {
        /// Number of frames to run
        #[arg(long, default_value_t = 900)]
        frames: u32,
        /// Simulated frames per second
        #[arg(long, default_value_t = 60.0)]
        fps: f64,
        /// Viewport aspect ratio
        #[arg(long, default_value_t = 1.0)]
        aspect: f32,
        /// Print a status line every this many frames
        #[arg(long, default_value_t = 60)]
        report_every: u32,
        /// TOML options file
        #[arg(long)]
        options: Option<PathBuf>,
    },
    /// Print options as TOML (defaults unless a file is given)
    Options {
        /// Options file to load and validate
        #[arg(long)]
        from: Option<PathBuf>,
        /// Write to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the JSON schema of the UI-exposed options
    Schema,
    /// List option presets in a directory
    Presets {
        /// Directory holding `*.toml` presets
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .init();

    let mut out = io::stdout().lock();
    match cli.command {
        Commands::Simulate {
            frames,
            fps,
            aspect,
            report_every,
            options,
        } => {
            let options = load_options(options.as_deref())?;
            simulate(&mut out, options, frames, fps, aspect, report_every)
        }
        Commands::Options { from, output } => {
            let toml = load_options(from.as_deref())?.to_toml()?;
            match output {
                Some(path) => std::fs::write(&path, toml)
                    .with_context(|| format!("writing {}", path.display())),
                None => Ok(write!(out, "{toml}")?),
            }
        }
        Commands::Schema => {
            let schema = serde_json::to_string_pretty(&Options::json_schema())?;
            Ok(writeln!(out, "{schema}")?)
        }
        Commands::Presets { dir } => {
            for name in Options::list_presets(&dir) {
                writeln!(out, "{name}")?;
            }
            Ok(())
        }
    }
}

fn load_options(path: Option<&Path>) -> Result<Options> {
    match path {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading options from {}", path.display())),
        None => Ok(Options::default()),
    }
}

/// Scripted session: pick shapes, nudge the camera, patrol, stop, quit.
fn script() -> Vec<(f64, InputEvent)> {
    let mouse = |button, pressed| InputEvent::MouseButton { button, pressed };
    let mut events = vec![
        (0.0, InputEvent::key("KeyJ", true)),
        (0.1, InputEvent::key("KeyJ", false)),
        (1.0, InputEvent::key("KeyW", true)),
        (1.5, InputEvent::key("KeyW", false)),
        (1.5, mouse(MouseButton::Left, true)),
        (2.0, mouse(MouseButton::Left, false)),
        (2.0, InputEvent::key("KeyE", true)),
        (2.5, InputEvent::key("KeyE", false)),
        (3.0, InputEvent::key("KeyP", true)),
        (3.1, InputEvent::key("KeyP", false)),
        (4.0, InputEvent::key("KeyK", true)),
        (4.1, InputEvent::key("KeyK", false)),
        (4.5, InputEvent::key("KeyW", true)),
        (5.0, InputEvent::key("KeyW", false)),
        (6.0, InputEvent::key("ArrowUp", true)),
        (7.0, InputEvent::key("ArrowUp", false)),
        (9.0, InputEvent::key("KeyP", true)),
        (9.1, InputEvent::key("KeyP", false)),
        (10.0, InputEvent::key("KeyL", true)),
        (10.1, InputEvent::key("KeyL", false)),
        (11.0, InputEvent::key("KeyU", true)),
        (11.1, InputEvent::key("KeyU", false)),
        (12.0, InputEvent::key("KeyI", true)),
        (12.1, InputEvent::key("KeyI", false)),
        (14.0, InputEvent::key("Escape", true)),
    ];
    // Sweep the cursor right and up during manual flight.
    for i in 0..30 {
        let t = 0.2 + f64::from(i) * 0.02;
        let x = 400.0 + i as f32 * 4.0;
        let y = 300.0 - i as f32 * 2.0;
        events.push((t, InputEvent::CursorMoved { x, y }));
    }
    events.sort_by(|a, b| a.0.total_cmp(&b.0));
    events
}

fn simulate(
    out: &mut impl Write,
    options: Options,
    frames: u32,
    fps: f64,
    aspect: f32,
    report_every: u32,
) -> Result<()> {
    anyhow::ensure!(fps > 0.0, "fps must be positive");
    let mut input = InputProcessor::with_key_bindings(options.keybindings.clone());
    let mut engine = HandEngine::try_new(options)?;
    let mut clock = FrameClock::new();
    let mut uniform = SceneUniform::new();
    let events = script();
    let mut next_event = 0;

    for frame in 0..frames {
        let now = f64::from(frame) / fps;
        while let Some((_, event)) =
            events.get(next_event).filter(|(t, _)| *t <= now)
        {
            let _ = input.handle_event(event);
            next_event += 1;
        }

        let dt = clock.advance(now);
        engine.tick(&input.take_frame(), now, dt);
        engine.render(&mut uniform, aspect);

        if report_every > 0 && frame % report_every == 0 {
            report(out, &engine, now)?;
        }
        if engine.quit_requested() {
            log::info!("quit at frame {frame}");
            break;
        }
    }

    log::debug!("scene uniform: {} bytes", uniform.as_bytes().len());
    writeln!(
        out,
        "done: {} frames, {:.1} fps, patrol {:?}",
        engine.frame_count(),
        clock.fps(),
        engine.patrol_state()
    )?;
    Ok(())
}

fn report(out: &mut impl Write, engine: &HandEngine, now: f64) -> Result<()> {
    let body = engine.camera().body();
    let position = body.position();
    let front = body.front();
    let angles: Vec<String> = Finger::ALL
        .into_iter()
        .map(|finger| {
            let m = engine.pose().finger(finger).proximal;
            format!("{:5.1}", m.x_axis.y.atan2(m.x_axis.x).to_degrees())
        })
        .collect();
    writeln!(
        out,
        "t={now:6.2}s {:<14} pos=({:7.2}, {:7.2}, {:7.2}) front=({:5.2}, {:5.2}, {:5.2}) fingers=[{}]",
        format!("{:?}", engine.patrol_state()),
        position.x,
        position.y,
        position.z,
        front.x,
        front.y,
        front.z,
        angles.join(" "),
    )?;
    Ok(())
}
