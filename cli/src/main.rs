//! docdiff CLI - Word document comparison tool

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use docdiff::{compare_uploads, extract_file, render, CompareOptions, DiffResult, JsonFormat};

#[derive(Parser)]
#[command(name = "docdiff")]
#[command(version)]
#[command(about = "Compare the text, styles, and tables of two Word documents", long_about = None)]
struct Cli {
    /// First DOCX file
    #[arg(value_name = "FIRST")]
    first: Option<PathBuf>,

    /// Second DOCX file
    #[arg(value_name = "SECOND")]
    second: Option<PathBuf>,

    /// Directory for temporary upload copies
    #[arg(long, value_name = "DIR", env = "DOCDIFF_TEMP_DIR", global = true)]
    temp_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents
    #[command(alias = "diff")]
    Compare {
        /// First DOCX file
        #[arg(value_name = "FIRST")]
        first: PathBuf,

        /// Second DOCX file
        #[arg(value_name = "SECOND")]
        second: PathBuf,

        /// Output the delta as JSON
        #[arg(long)]
        json: bool,

        /// Output compact JSON
        #[arg(long, requires = "json")]
        compact: bool,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Show the normalized representation of a document
    Extract {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Resolve a hex color code to its CSS3 name
    Color {
        /// Hex color code, e.g. "#1F4E79"
        #[arg(value_name = "HEX")]
        hex: String,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = CompareOptions {
        temp_dir: cli.temp_dir,
    };
    log::debug!(
        "Staging uploads in {}",
        options
            .temp_dir
            .as_deref()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "the system temp dir".to_string())
    );

    let result = match cli.command {
        Some(Commands::Compare {
            first,
            second,
            json,
            compact,
            output,
        }) => {
            let format = json.then(|| json_format(compact));
            cmd_compare(&first, &second, &options, format, output.as_deref())
        }
        Some(Commands::Extract { input, compact }) => cmd_extract(&input, compact),
        Some(Commands::Color { hex }) => cmd_color(&hex),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => {
            // Default behavior: compare if both inputs are provided
            if let (Some(first), Some(second)) = (cli.first, cli.second) {
                cmd_compare(&first, &second, &options, None, None)
            } else {
                println!("{}", "Usage: docdiff <FIRST> <SECOND>".yellow());
                println!("       docdiff --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn cmd_compare(
    first: &Path,
    second: &Path,
    options: &CompareOptions,
    json: Option<JsonFormat>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Comparing {} with {}", first.display(), second.display());
    let first_bytes = read_upload(first)?;
    let second_bytes = read_upload(second)?;
    let result = compare_uploads(&first_bytes, &second_bytes, options)?;

    let report = match json {
        Some(format) => render::to_json(&result, format)?,
        None => render::to_text(&result),
    };

    if let Some(path) = output {
        fs::write(path, &report)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else if json.is_some() {
        println!("{}", report);
    } else {
        print_report(&result, &report);
    }

    Ok(())
}

fn read_upload(path: &Path) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    fs::read(path).map_err(|e| format!("Cannot read {}: {}", path.display(), e).into())
}

fn print_report(result: &DiffResult, report: &str) {
    if result.is_identical() {
        println!("{}", report.green());
        return;
    }

    let titles: Vec<&str> = result.sections().iter().map(|(title, _)| *title).collect();
    for line in report.lines() {
        if titles.contains(&line) {
            println!("{}", line.cyan().bold());
        } else if line.starts_with('=') {
            println!("{}", line.dimmed());
        } else if line.trim_start().starts_with("added") {
            println!("{}", line.green());
        } else if line.trim_start().starts_with("removed") {
            println!("{}", line.red());
        } else {
            println!("{}", line);
        }
    }
}

fn cmd_extract(input: &Path, compact: bool) -> Result<(), Box<dyn std::error::Error>> {
    log::debug!("Extracting {}", input.display());
    let doc = extract_file(input)?;
    let json = render::extracted_to_json(&doc, json_format(compact))?;
    println!("{}", json);
    Ok(())
}

fn cmd_color(hex: &str) -> Result<(), Box<dyn std::error::Error>> {
    let rgb = docdiff::Rgb::from_hex(hex)?;
    let name = docdiff::resolve_color(hex)?;
    println!("{} {}", rgb.to_hex().bold(), name);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "docdiff".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Word document comparison tool");
}
