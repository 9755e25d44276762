//! Drive the catalog view without a terminal UI and print the resulting page.
//! Usage:
//!   cargo run --bin catalog_probe
//!   cargo run --bin catalog_probe -- --search <title>
//!   cargo run --bin catalog_probe -- --movie <id>
//!   cargo run --bin catalog_probe -- --search <title> --movie <id>
//! Reads FILMOTEKA_API_URL from the environment (.env supported).

use anyhow::{anyhow, bail, Result};
use dotenvy::dotenv;
use filmoteka::models::MovieId;
use filmoteka::{CatalogClient, CatalogView, Config};
use std::env;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Default)]
struct ProbeArgs {
    search: Option<String>,
    movie: Option<MovieId>,
}

impl ProbeArgs {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut parsed = ProbeArgs::default();
        while let Some(flag) = args.next() {
            let value = args
                .next()
                .ok_or_else(|| anyhow!("missing value for {}", flag))?;
            match flag.as_str() {
                "--search" => parsed.search = Some(value),
                "--movie" => parsed.movie = value.parse().ok(),
                other => bail!("unknown argument '{}'", other),
            }
        }
        Ok(parsed)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenv();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    let args = ProbeArgs::parse(env::args().skip(1))?;
    let config = Config::from_env()?;
    let client = CatalogClient::from_config(&config)?;
    let mut view = CatalogView::new(Arc::new(client));

    view.bootstrap().await;
    if let Some(title) = args.search {
        view.page_mut().search_input = title;
        view.submit_search().await;
    }
    if let Some(id) = args.movie {
        view.show_movie(&id).await;
    }

    print!("{}", view.page());
    Ok(())
}
