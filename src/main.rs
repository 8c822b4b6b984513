use clap::Parser;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tripview::{Dataset, config};

mod cli;
mod commands;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = cli::Args::parse();

    // Loaded before the subscriber exists since it supplies the log filter.
    let config = config::load()?;
    let _guard = initialize_logging(&config.log.filter)?;
    info!("Starting tripview");
    match config::loader::config_path() {
        Some(path) if path.exists() => info!(?path, "Loaded config"),
        _ => info!("No config file found, using defaults"),
    }

    let path = args
        .data
        .or(config.dataset)
        .ok_or_else(|| eyre!("no dataset given; pass --data or set `dataset` in the config file"))?;
    let dataset = Dataset::load(&path)?;

    match args.command {
        cli::Command::Render(render) => commands::render(&dataset, &render),
        cli::Command::List => commands::list(&dataset),
    }
}

fn initialize_logging(default_filter: &str) -> Result<WorkerGuard> {
    let directory = dirs::data_local_dir().map_or_else(
        || std::path::PathBuf::from("logs"),
        |path| path.join("tripview").join("logs"),
    );
    std::fs::create_dir_all(&directory)?;

    let file_appender = tracing_appender::rolling::daily(&directory, "tripview.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true),
        )
        .init();

    Ok(guard)
}
