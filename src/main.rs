//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

use panel_glow::{app, config::AppConfig, logging};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = AppConfig::from_env();
    logging::init_tracing(&config.log)?;
    app::run(config)
}
