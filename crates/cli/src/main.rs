#![deny(unsafe_code)]
//! Headless renderer for the ambient network.
//!
//! Subcommands:
//! - `render`: simulate N frames at a fixed frame rate, write the last as PNG
//! - `params`: print the default parameters and their schema

mod error;

use ambient_net::{AmbientNetwork, FrameStats};
use ambient_net_core::{DVec2, NetworkConfig, Viewport};
use ambient_net_raster::snapshot::write_png;
use ambient_net_raster::PixelSurface;
use clap::{ArgAction, Parser, Subcommand};
use error::CliError;
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "ambient-net", about = "Ambient network renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a number of frames and write the final one as a PNG.
    Render {
        /// Host window width; the canvas is capped at 980 px wide.
        #[arg(short = 'W', long, default_value_t = 980.0)]
        window_width: f64,

        /// Number of frames to simulate.
        #[arg(short, long, default_value_t = 120,
              value_parser = clap::value_parser!(u64).range(1..))]
        frames: u64,

        /// Simulated frames per second.
        #[arg(long, default_value_t = 60.0)]
        fps: f64,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Pointer position on the canvas as `x,y`.
        #[arg(long, value_parser = parse_pointer)]
        pointer: Option<DVec2>,

        /// Resize the window before a frame, as `FRAME:WIDTH`.
        #[arg(long, value_parser = parse_resize)]
        resize_at: Option<ResizeAt>,

        /// Output file path.
        #[arg(short, long, default_value = "network.png")]
        output: PathBuf,

        /// Also write every frame into this directory.
        #[arg(long)]
        sequence: Option<PathBuf>,

        /// Network parameters as a JSON string.
        #[arg(long, default_value = "{}")]
        params: String,
    },
    /// Print default parameters and the parameter schema.
    Params,
}

/// A window resize scheduled before a given frame.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResizeAt {
    frame: u64,
    window_width: f64,
}

fn parse_pointer(s: &str) -> Result<DVec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(DVec2::new(x, y))
}

fn parse_resize(s: &str) -> Result<ResizeAt, String> {
    let (frame, width) = s
        .split_once(':')
        .ok_or_else(|| format!("expected FRAME:WIDTH, got {s:?}"))?;
    Ok(ResizeAt {
        frame: frame.trim().parse().map_err(|e| format!("bad frame: {e}"))?,
        window_width: width.trim().parse().map_err(|e| format!("bad width: {e}"))?,
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

struct RenderJob {
    window_width: f64,
    frames: u64,
    fps: f64,
    seed: u64,
    pointer: Option<DVec2>,
    resize_at: Option<ResizeAt>,
    output: PathBuf,
    sequence: Option<PathBuf>,
    params: serde_json::Value,
}

/// Runs the job and returns the stats of its final frame.
fn render(job: &RenderJob) -> Result<(FrameStats, Viewport), CliError> {
    if !job.fps.is_finite() || job.fps <= 0.0 {
        return Err(CliError::FrameRate(job.fps));
    }
    let viewport = Viewport::from_window_width(job.window_width);
    let mut net = AmbientNetwork::from_json(viewport, job.seed, &job.params)?;
    net.set_pointer(job.pointer);

    let (w, h) = viewport.pixel_size();
    let mut surface = PixelSurface::new(w, h);

    if let Some(dir) = &job.sequence {
        fs::create_dir_all(dir)
            .map_err(|e| CliError::write(dir, e))?;
    }

    let frame_ms = 1000.0 / job.fps;
    let mut stats = FrameStats::default();
    for frame in 0..job.frames {
        if let Some(resize) = job.resize_at.filter(|r| r.frame == frame) {
            net.resize(resize.window_width, &mut surface);
        }
        stats = net.frame(frame as f64 * frame_ms, &mut surface);
        log::info!(
            "frame {frame}: {} edges, {} halos, max degree {}",
            stats.edges,
            stats.halos,
            stats.max_degree
        );
        if let Some(dir) = &job.sequence {
            let path = dir.join(format!("frame_{frame:05}.png"));
            write_png(&surface, &path).map_err(|e| CliError::write(&path, e))?;
        }
    }

    write_png(&surface, &job.output).map_err(|e| CliError::write(&job.output, e))?;
    Ok((stats, net.viewport()))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Params => {
            let info = serde_json::json!({
                "defaults": NetworkConfig::default().to_json(),
                "schema": NetworkConfig::param_schema(),
            });
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else if let Some(defaults) = info["defaults"].as_object() {
                for (name, value) in defaults {
                    println!("{name} = {value}");
                }
            }
        }
        Command::Render {
            window_width,
            frames,
            fps,
            seed,
            pointer,
            resize_at,
            output,
            sequence,
            params,
        } => {
            let params: serde_json::Value = serde_json::from_str(&params)
                .map_err(|e| CliError::Params(e.to_string()))?;
            let job = RenderJob {
                window_width,
                frames,
                fps,
                seed,
                pointer,
                resize_at,
                output,
                sequence,
                params,
            };
            let (stats, viewport) = render(&job)?;

            if cli.json {
                let info = serde_json::json!({
                    "width": viewport.width(),
                    "height": viewport.height(),
                    "frames": job.frames,
                    "fps": job.fps,
                    "seed": job.seed,
                    "stats": stats,
                    "output": job.output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} frames ({}x{}, seed {}, {} edges) -> {}",
                    job.frames,
                    viewport.width(),
                    viewport.height(),
                    job.seed,
                    stats.edges,
                    job.output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
