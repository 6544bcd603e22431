mod error;
mod input;
mod render;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::settings::Overrides;

#[derive(Parser)]
#[command(name = "plategen", version, about = "Keyboard plate DXF generator", long_about = None)]
struct Cli {
    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a KLE layout into a plate DXF
    Render(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// Layout file (KLE JSON or raw data); `-` or nothing reads stdin
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Output DXF; `-` or nothing writes to stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// YAML settings file; flags below override its values
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Switch cutout type: mx, alps, omron
    #[arg(long, value_name = "TYPE")]
    cutout_type: Option<String>,

    /// Switch cutout fillet radius in mm
    #[arg(long, value_name = "MM")]
    cutout_radius: Option<Decimal>,

    /// Stabilizer type: mx-simple, large-cuts, mx-notched, alps-aek, alps-at101
    #[arg(long, value_name = "TYPE")]
    stab_type: Option<String>,

    /// Stabilizer cutout fillet radius in mm
    #[arg(long, value_name = "MM")]
    stab_radius: Option<Decimal>,

    /// Acoustic cutouts: none, typical, extreme
    #[arg(long, value_name = "MODE")]
    acoustics: Option<String>,

    /// Acoustic cutout fillet radius in mm
    #[arg(long, value_name = "MM")]
    acoustics_radius: Option<Decimal>,

    /// Millimetres per layout unit along x
    #[arg(long, value_name = "MM")]
    unit_width: Option<Decimal>,

    /// Millimetres per layout unit along y
    #[arg(long, value_name = "MM")]
    unit_height: Option<Decimal>,

    /// Working precision for rotations, in decimal places
    #[arg(long, value_name = "DIGITS")]
    precision: Option<u32>,
}

impl RenderArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            cutout_type: self.cutout_type.clone(),
            cutout_radius: self.cutout_radius,
            stab_type: self.stab_type.clone(),
            stab_radius: self.stab_radius,
            acoustics: self.acoustics.clone(),
            acoustics_radius: self.acoustics_radius,
            unit_width: self.unit_width,
            unit_height: self.unit_height,
            precision: self.precision,
        }
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Render(args) => {
            let overrides = args.overrides();
            render::run_render(args.input, args.output, args.settings, overrides)
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            if !e.use_stderr() {
                return ExitCode::SUCCESS;
            }
            return ExitCode::from(CliError::usage(e.to_string()).code as u8);
        }
    };

    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.code as u8)
        }
    }
}
