//! BrandStore server
//!
//! Usage: `brandstore [config.json]`. `BRANDSTORE_*` variables override the file.

use anyhow::Context;
use brandstore_core::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    brandstore_core::init_logging();

    let config = match std::env::args().nth(1) {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("loading config from {path}"))?,
        None => Config::default(),
    };
    let config = config.with_env().context("applying environment overrides")?;

    brandstore_server::run(config).await
}
