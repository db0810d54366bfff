use crate::upload::DEFAULT_BRANCH;
use clap::Parser;
use std::{ffi::OsString, path::PathBuf};

const SINGLE_DASH_FLAGS: [&str; 2] = ["config", "branch"];

#[derive(Parser, Debug)]
#[command(name = "gitup", version)]
#[command(about = "Upload a file to a GitHub repository and print a markdown link to it")]
pub struct Cli {
    /// Configure GitUp
    #[arg(long)]
    pub config: bool,

    /// Enable verbose logging
    #[arg(short = 'v')]
    pub verbose: bool,

    /// Git branch used in the returned URL
    #[arg(long, default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// File to upload
    #[arg(value_name = "FILE-PATH")]
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn try_parse_args<I>(args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = OsString>,
    {
        Cli::try_parse_from(normalize_args(args))
    }
}

pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut positional_only = false;

    args.into_iter()
        .map(|arg| {
            if positional_only {
                return arg;
            }

            let Some(value) = arg.to_str() else {
                return arg;
            };

            if value == "--" {
                positional_only = true;
                return arg;
            }

            match value.strip_prefix('-') {
                Some(flag) if !flag.starts_with('-') => {
                    let name = flag.split('=').next().unwrap_or_default();

                    if SINGLE_DASH_FLAGS.contains(&name) {
                        OsString::from(format!("-{}", value))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}
