//! # Linemode CLI
//!
//! Command-line interface for rendering receipt markup.
//!
//! ## Usage
//!
//! ```bash
//! # Show the command stream for a receipt
//! linemode render receipt.xml
//!
//! # Clip every line to 48 columns and write printer bytes
//! linemode render --max-width 48 --format bytes -o /dev/usb/lp0 receipt.xml
//!
//! # Preview in the terminal, reading markup from stdin
//! cat receipt.xml | linemode render --format preview
//!
//! # Load options from JSON
//! linemode render --options options.json --format json receipt.xml
//! ```
//!
//! Set `RUST_LOG=debug` to see what the renderer ignores.

use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use linemode::{LineModeError, LineModeRenderer, PrintJob, RenderOptions};

/// Linemode - Receipt markup renderer
#[derive(Parser, Debug)]
#[command(name = "linemode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a markup document to printer commands
    Render {
        /// Markup file to render ("-" or omitted for stdin)
        input: Option<PathBuf>,

        /// Maximum line width in character cells
        #[arg(long)]
        max_width: Option<usize>,

        /// Skip the reset and charset prelude
        #[arg(long)]
        no_prelude: bool,

        /// Read render options from a JSON file (flags override it)
        #[arg(long, value_name = "FILE")]
        options: Option<PathBuf>,

        /// Merge writes and drop redundant style toggles
        #[arg(long)]
        optimize: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "list")]
        format: Format,

        /// Write output to a file or device instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One command per line
    List,
    /// JSON array of commands
    Json,
    /// StarPRNT printer bytes
    Bytes,
    /// ANSI-styled terminal preview
    Preview,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), LineModeError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            max_width,
            no_prelude,
            options,
            optimize,
            format,
            output,
        } => {
            let mut render_options = match options {
                Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
                None => RenderOptions::default(),
            };
            if max_width.is_some() {
                render_options.max_width = max_width;
            }
            if no_prelude {
                render_options.prelude = false;
            }

            let source = read_source(input.as_ref())?;
            let renderer = LineModeRenderer::new(source, render_options);
            let mut out = open_output(output.as_ref())?;

            // The list format streams; everything else needs the whole job.
            if format == Format::List && !optimize {
                for command in renderer.render()? {
                    writeln!(out, "{}", command?)?;
                }
                out.flush()?;
                return Ok(());
            }

            let mut job = renderer.render_job()?;
            if optimize {
                job = job.optimize();
            }
            write_job(&job, format, &mut out)?;
            out.flush()?;
        }
    }

    Ok(())
}

/// Read markup from a file, or stdin for `-` / no path
fn read_source(input: Option<&PathBuf>) -> Result<String, LineModeError> {
    match input {
        Some(path) if path.as_os_str() != "-" => Ok(fs::read_to_string(path)?),
        _ => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn open_output(output: Option<&PathBuf>) -> Result<Box<dyn Write>, LineModeError> {
    Ok(match output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout().lock()),
    })
}

fn write_job(job: &PrintJob, format: Format, out: &mut dyn Write) -> Result<(), LineModeError> {
    match format {
        Format::List => {
            for command in job {
                writeln!(out, "{}", command)?;
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, job)?;
            writeln!(out)?;
        }
        Format::Bytes => out.write_all(&job.to_bytes()?)?,
        Format::Preview => out.write_all(job.to_ansi().as_bytes())?,
    }
    Ok(())
}
