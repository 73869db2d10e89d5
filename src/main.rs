mod app;
mod ingest;
mod model;
mod pipeline;
mod ui;

use std::path::PathBuf;

use anyhow::Context;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("events.csv"));

    let table = ingest::load_events(&path).context("load event table")?;
    app::run(table, path).map_err(|err| anyhow::anyhow!("start ui: {err}"))
}
