use std::io;

use anyhow::{anyhow, Context as _, Result};
use tracing_subscriber::EnvFilter;

/// `.env` を読み込んでから tracing の subscriber を登録する.
///
/// ログの絞り込みは `RUST_LOG` で行う (例: `RUST_LOG=sdl_circles=debug`). 指定がなければ `info`.
pub fn init() -> Result<()> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(dotenv::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {}
        Err(e) => return Err(e).context("failed to load .env"),
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("{}", e))
        .context("failed to install tracing subscriber")
}
