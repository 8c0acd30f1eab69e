//! fixtrace viewer.
//!
//! Renders one frame of the reference scene (or a scene loaded from JSON)
//! and writes it to stdout, either as a plain text block or through
//! cursor-addressed terminal writes.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{cursor, queue, style, terminal};
use log::info;
use thiserror::Error;

use fixtrace::prelude::*;

#[derive(Parser)]
#[command(name = "fixtrace")]
#[command(version = fixtrace::VERSION)]
#[command(about = "Fixed-point sphere-tracing ASCII renderer", long_about = None)]
struct Cli {
    /// Shade rows in parallel.
    #[arg(long)]
    parallel: bool,

    /// Draw with cursor-addressed terminal writes instead of printing a
    /// text block.
    #[arg(long)]
    term: bool,

    /// Load scene configuration from a JSON file instead of the built-in
    /// reference scene.
    #[arg(long)]
    scene: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum ViewerError {
    #[error("surface: {0}")]
    Surface(#[from] SurfaceError),
    #[error("io: {0}")]
    Io(#[from] io::Error),
    #[error("scene file: {0}")]
    Scene(#[from] serde_json::Error),
}

/// Glyph sink that addresses the terminal cursor per write, one
/// `(x, y, glyph)` triple at a time like a memory-mapped character
/// surface.
struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> GlyphSurface for TerminalSurface<W> {
    fn put(&mut self, x: u32, y: u32, glyph: char) -> Result<(), SurfaceError> {
        queue!(
            self.out,
            cursor::MoveTo(x as u16, y as u16),
            style::Print(glyph)
        )
        .map_err(SurfaceError::Io)
    }
}

fn load_scene(cli: &Cli) -> Result<Scene, ViewerError> {
    match &cli.scene {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&text)?)
        }
        None => Ok(Scene::default()),
    }
}

fn render<S: GlyphSurface>(
    cli: &Cli,
    scene: &Scene,
    viewport: &Viewport,
    surface: &mut S,
) -> Result<(), SurfaceError> {
    if cli.parallel {
        render_frame_parallel(scene, viewport, surface)
    } else {
        render_frame(scene, viewport, surface)
    }
}

fn run(cli: &Cli) -> Result<(), ViewerError> {
    let scene = load_scene(cli)?;
    let viewport = Viewport::default();
    info!(
        "rendering {}x{} viewport, sphere radius {}",
        viewport.width, viewport.height, scene.sphere_radius
    );

    if cli.term {
        let mut out = io::stdout();
        queue!(out, terminal::Clear(terminal::ClearType::All))?;
        let mut surface = TerminalSurface { out };
        render(cli, &scene, &viewport, &mut surface)?;
        queue!(
            surface.out,
            cursor::MoveTo(0, viewport.out_height() as u16)
        )?;
        surface.out.flush()?;
    } else {
        let mut fb = FrameBuffer::new(viewport.width as u32, viewport.out_height() as u32);
        render(cli, &scene, &viewport, &mut fb)?;
        print!("{fb}");
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fixtrace: {err}");
            ExitCode::FAILURE
        }
    }
}
