//! `shapeink`: converts document shape dumps into per-page SVG or HTML files.

mod args;
mod batch;

use args::{Args, USAGE};
use shapeink_core::{ConvertConfig, ConvertError};
use std::fs;
use std::process::ExitCode;
use thiserror::Error;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Convert(#[from] ConvertError),
}

impl CliError {
    fn exit_code(&self) -> ExitCode {
        match self {
            CliError::Usage(_) => ExitCode::from(2),
            CliError::Io(_) | CliError::Convert(_) => ExitCode::from(1),
        }
    }
}

fn load_config(args: &Args) -> Result<ConvertConfig, CliError> {
    let mut config = match &args.config {
        Some(path) => ConvertConfig::from_json(&fs::read_to_string(path)?)?,
        None => ConvertConfig::default(),
    };
    if let Some(format) = args.format {
        config.format = format;
    }
    Ok(config)
}

fn run(args: Args) -> Result<(), CliError> {
    let config = load_config(&args)?;
    if let Some(dir) = &args.out_dir {
        fs::create_dir_all(dir)?;
    }

    let inputs = batch::collect_inputs(&args.inputs)?;
    let mut pages = 0;
    for input in &inputs {
        log::info!("Converting {}", input.display());
        pages += batch::convert_file(input, args.out_dir.as_deref(), &config)?.len();
    }
    log::info!("Converted {} pages from {} documents", pages, inputs.len());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let result = Args::parse(std::env::args().skip(1)).and_then(|args| {
        if args.help {
            print!("{USAGE}");
            Ok(())
        } else {
            run(args)
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("shapeink: {err}");
            if matches!(err, CliError::Usage(_)) {
                eprint!("\n{USAGE}");
            }
            err.exit_code()
        }
    }
}
