mod cli;
mod config;
mod credentials;
mod filename;
mod folder;
mod github;
mod http;
mod logger;
mod markdown;
mod setup;
mod upload;

use anyhow::{bail, Context, Result};
use clap::{error::ErrorKind, CommandFactory};
use cli::Cli;
use config::{Config, ConfigError, ConfigFile};
use github::GithubClient;
use std::process::ExitCode;
use upload::Uploader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    if let Err(err) = logger::init(cli.verbose) {
        eprintln!("Cannot initialize logger: {:#}", err);
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            if err.downcast_ref::<ConfigError>().is_some() {
                eprintln!("Run 'gitup -config' first");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = credentials::default_store();
    let config_file = ConfigFile::default_location().context("Cannot locate config file")?;

    if cli.config {
        return setup::configure(&config_file, store.as_ref()).await;
    }

    let Some(file) = cli.file else {
        bail!(
            "Missing file path\n\n{}",
            Cli::command().render_usage()
        );
    };

    // Reject bad input before the config is even looked at.
    upload::validation::validate_input_file(&file)
        .await
        .context("Invalid file")?;

    let config = Config::load(&config_file, store.as_ref())
        .await
        .context("Error loading config")?;
    let repository = config.repository().context("Invalid repository")?;
    log::debug!("uploading {} to {}", file.display(), repository);

    let client = GithubClient::new(&config.token).context("Cannot create GitHub client")?;
    let uploader = Uploader::new(client.repo(&repository.owner, &repository.name), &cli.branch);

    let output = uploader.upload(&file).await.context("Upload failed")?;

    println!("{}", output);

    Ok(())
}
