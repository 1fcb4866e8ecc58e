//! Markup Canvas CLI
//!
//! Usage:
//!   markup-canvas [OPTIONS] [FILE]
//!
//! Options:
//!   --escape           Escape attribute values and text content
//!   --wrap             Wrap the fragments in an <svg> root element
//!   --width <N>        Root element width (with --wrap)
//!   --height <N>       Root element height (with --wrap)
//!   -v, --verbose      Debug logging to stderr
//!   -h, --help         Print help

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use markup_canvas::Script;

#[derive(Parser)]
#[command(name = "markup-canvas")]
#[command(about = "Render a TOML drawing script to SVG markup")]
struct Cli {
    /// Drawing script (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Escape attribute values and text content, overriding the script
    #[arg(long)]
    escape: bool,

    /// Wrap the output in an <svg> root element
    #[arg(long)]
    wrap: bool,

    /// Width of the root element
    #[arg(long, default_value_t = 300.0, requires = "wrap")]
    width: f64,

    /// Height of the root element
    #[arg(long, default_value_t = 150.0, requires = "wrap")]
    height: f64,

    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Read input
    let source = match &cli.input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    std::process::exit(1);
                }
            }
        }
    };

    let mut script = match Script::parse(&source) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if cli.escape {
        script.config = script.config.with_escape(true);
    }

    let markup = script.render();
    tracing::debug!(bytes = markup.len(), "rendered markup");

    if cli.wrap {
        println!("{}", wrap_svg(&markup, cli.width, cli.height));
    } else {
        println!("{}", markup);
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Embed markup fragments in a standalone SVG root element
fn wrap_svg(markup: &str, width: f64, height: f64) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">{}</svg>"#,
        width, height, width, height, markup
    )
}
