//! File-backed tracing setup. The alternate screen owns stdout, so log
//! records go to a file in the home directory; `RUST_LOG` narrows them.

use std::error::Error;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const LOG_FILE_NAME: &str = ".portal_login.log";

pub fn setup_logger() -> Result<PathBuf, Box<dyn Error>> {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let log_path = PathBuf::from(home).join(LOG_FILE_NAME);

    let file = File::create(&log_path)?;
    let writer = BoxMakeWriter::new(Arc::new(file));

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(log_path)
}
