//! Command line front end.
//!
//! Parses the arguments, runs the engine once and renders the record.

use crate::config::Config;
use crate::error::CalcError;
use crate::output::{render, OutputFormat};
use crate::processing::{compute_with, MaskSource};
use clap::{ArgGroup, Parser};

#[derive(Parser, Debug)]
#[command(version, about = "IPv4 address, mask and subnet calculator")]
#[command(group(ArgGroup::new("mask_source").args(["prefix", "mask", "classful", "split_default"])))]
pub struct Cli {
    /// IPv4 address, e.g. 192.168.0.103 or 192.168.0.103/24.
    pub address: String,

    /// CIDR prefix length (0-32). Defaults to IPCALC_PREFIX or 24.
    #[arg(short = 'p', long = "prefix")]
    pub prefix: Option<u32>,

    /// Dotted-quad subnet mask, e.g. 255.255.255.0.
    #[arg(short = 'm', long = "mask")]
    pub mask: Option<String>,

    /// Use the legacy class default mask of the address.
    #[arg(long = "classful")]
    pub classful: bool,

    /// Split the address' /24 in --subnets parts and describe one part.
    #[arg(long = "split-default")]
    pub split_default: bool,

    /// Number of equal subnets (1, 2, 4 ... 256). Defaults to IPCALC_SUBNETS or 1.
    #[arg(short = 's', long = "subnets")]
    pub subnets: Option<u32>,

    /// Output format: text, json or csv. Defaults to IPCALC_FORMAT or text.
    #[arg(short = 'f', long = "format")]
    pub format: Option<OutputFormat>,
}

impl Cli {
    /// Mask source picked by the flags, falling back to the configured prefix.
    pub fn mask_source(&self, config: &Config) -> Result<MaskSource, CalcError> {
        if let Some(mask) = &self.mask {
            return Ok(MaskSource::Mask(mask.clone()));
        }
        if self.classful {
            return Ok(MaskSource::Classful);
        }
        if self.split_default {
            return Ok(MaskSource::SplitDefault);
        }
        let prefix = match self.prefix {
            Some(p) => crate::models::check_prefix(p)?,
            None => config.prefix,
        };
        Ok(MaskSource::Prefix(prefix))
    }

    pub fn format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.format)
    }

    pub fn subnets(&self, config: &Config) -> u32 {
        self.subnets.unwrap_or(config.subnets)
    }
}

/// Outcome of one run: the rendered text and the error, if any.
///
/// On error the output holds the placeholder rendering.
pub struct RunOutput {
    pub rendered: String,
    pub error: Option<CalcError>,
}

/// Compute and render for the given arguments.
pub fn run(cli: &Cli, config: &Config) -> Result<RunOutput, Box<dyn std::error::Error>> {
    let format = cli.format(config);
    let result = cli
        .mask_source(config)
        .and_then(|source| compute_with(&cli.address, &source, cli.subnets(config)));

    match result {
        Ok(info) => Ok(RunOutput {
            rendered: render(format, Some(&info))?,
            error: None,
        }),
        Err(e) => {
            log::error!("Calculation failed for {:?}: {e}", cli.address);
            Ok(RunOutput {
                rendered: render(format, None)?,
                error: Some(e),
            })
        }
    }
}
