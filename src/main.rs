//! ortho-svg CLI
//!
//! Usage:
//!   ortho-svg [OPTIONS] [FILE]
//!
//! Reads a TOML scene (stdin if FILE is omitted) and writes SVG.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use ortho_svg::{Color, Scene};

#[derive(Parser)]
#[command(name = "ortho-svg")]
#[command(about = "Render TOML scenes with rounded orthogonal connectors to SVG")]
struct Cli {
    /// Scene file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Write SVG to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the smoothing radius
    #[arg(short, long, allow_negative_numbers = true)]
    radius: Option<f64>,

    /// Override the default stroke color
    #[arg(long)]
    stroke: Option<String>,

    /// Emit a single line without XML declaration
    #[arg(long)]
    compact: bool,

    /// Log smoothing details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let (source, filename) = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => (content, path.display().to_string()),
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => (buffer, "<stdin>".to_string()),
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut scene = match Scene::from_str(&source) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename).trim_end());
            std::process::exit(1);
        }
    };

    if let Some(radius) = cli.radius {
        scene.config.smoothing_radius = radius.abs();
    }
    if let Some(stroke) = cli.stroke {
        scene.config.stroke_color = Color::from(stroke);
    }
    if cli.compact {
        scene.config.standalone = false;
        scene.config.pretty_print = false;
    }

    let svg = match scene.render() {
        Ok(svg) => svg,
        Err(e) => {
            eprintln!("{}", e.format(&source, &filename).trim_end());
            std::process::exit(1);
        }
    };

    match &cli.output {
        Some(path) => {
            if let Err(e) = fs::write(path, svg) {
                eprintln!("Error writing file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
            log::info!("wrote {}", path.display());
        }
        None => print!("{}", svg),
    }
}
