// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use vitrine::SearchConfig;

mod cli;
use cli::{Cli, Commands};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for results. `RUST_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vitrine=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(cli: &Cli) -> Result<SearchConfig> {
    let mut config = match &cli.config {
        Some(path) => SearchConfig::from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SearchConfig::default(),
    };
    if let Some(sitemap) = &cli.sitemap {
        config.sitemap_path = sitemap.clone();
    }
    if let Commands::Search { limit: Some(limit), .. } = &cli.command {
        config.max_results = *limit;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting async runtime")?;

    runtime.block_on(async {
        match cli.command {
            Commands::Crawl { base, save } => cli::commands::crawl(&config, &base, save.as_deref()).await,
            Commands::Search {
                base,
                query,
                cache,
                json,
                ..
            } => cli::commands::search(&config, &base, &query, cache.as_deref(), json).await,
            Commands::Audit { base, pages } => cli::commands::audit(&config, &base, pages).await,
        }
    })
}
