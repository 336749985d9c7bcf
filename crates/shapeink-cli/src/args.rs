//! Command-line argument parsing.

use crate::CliError;
use shapeink_core::OutputFormat;
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: shapeink [OPTIONS] INPUT...

Converts document shape dumps (.json) into one SVG or HTML file per page.
INPUT may be a .json file or a directory of .json files.

Options:
  --format <html|svg>   Output format (default: html, or the config's format)
  --out-dir <DIR>       Output directory (default: next to each input)
  --config <FILE>       JSON conversion config
  -h, --help            Print this help
";

/// Parsed command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Args {
    pub inputs: Vec<PathBuf>,
    pub format: Option<OutputFormat>,
    pub out_dir: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub help: bool,
}

impl Args {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "--format" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| CliError::Usage("--format requires a value".to_string()))?;
                    let format = OutputFormat::from_name(&value)
                        .ok_or_else(|| CliError::Usage(format!("unknown format: {value}")))?;
                    parsed.format = Some(format);
                }
                "--out-dir" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| CliError::Usage("--out-dir requires a value".to_string()))?;
                    parsed.out_dir = Some(PathBuf::from(value));
                }
                "--config" => {
                    let value = iter
                        .next()
                        .ok_or_else(|| CliError::Usage("--config requires a value".to_string()))?;
                    parsed.config = Some(PathBuf::from(value));
                }
                flag if flag.starts_with('-') && flag.len() > 1 => {
                    return Err(CliError::Usage(format!("unknown option: {flag}")));
                }
                _ => parsed.inputs.push(PathBuf::from(&arg)),
            }
        }

        if parsed.inputs.is_empty() && !parsed.help {
            return Err(CliError::Usage("no input given".to_string()));
        }
        Ok(parsed)
    }
}
