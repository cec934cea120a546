//! src/main.rs
//!
//! Entrypoint: installs error reporting and logging, then delegates to `app::run()`.

mod app;
mod config;
mod error;
mod graph;
mod logging;
mod panels;
mod render;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = config::AppConfig::default();
    logging::init(&config.log_file)?;
    app::run(config)
}
