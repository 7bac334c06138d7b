use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use tracing_error::ErrorLayer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

fn data_directory() -> PathBuf {
    ProjectDirs::from("com", "beatlens", "beatlens")
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Logs go to a file in the platform data directory; stdout belongs to the
/// terminal UI.
pub fn initialize_logging() -> color_eyre::Result<()> {
    let directory = data_directory();
    fs::create_dir_all(&directory)?;
    let log_file = fs::File::create(directory.join("beatlens.log"))?;

    let env_filter = EnvFilter::try_from_env("BEATLENS_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
