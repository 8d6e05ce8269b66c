// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the vitrine command-line interface.
//!
//! Three subcommands: `crawl` to build (and optionally save) the index of a
//! live site, `search` to query it, and `audit` to check every page for SEO
//! tags and performance hygiene. All of them talk to the site over HTTP
//! through the same fetcher the library uses.

pub mod commands;
pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "vitrine", about = "Site search and audit for static brochure sites", version)]
pub struct Cli {
    /// JSON config file (camelCase keys; every key optional)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Sitemap path relative to the site base, overrides the config file
    #[arg(long, global = true)]
    pub sitemap: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a site through its sitemap and summarize the index
    Crawl {
        /// Site base URL, e.g. https://example.com/
        #[arg(short, long)]
        base: String,

        /// Directory to write the session snapshot into
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Search a site and print ranked results
    Search {
        /// Site base URL
        #[arg(short, long)]
        base: String,

        /// Search query
        query: String,

        /// Maximum number of results (1 to 12), overrides the config file
        #[arg(short, long)]
        limit: Option<usize>,

        /// Directory holding session snapshots; used instead of crawling
        /// when a snapshot for the site exists, written after a crawl
        #[arg(long)]
        cache: Option<PathBuf>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Audit pages for SEO tags and performance hygiene
    Audit {
        /// Site base URL
        #[arg(short, long)]
        base: String,

        /// Page to audit (repeatable); defaults to every sitemap entry
        #[arg(short, long = "page")]
        pages: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from([
            "vitrine", "search", "--base", "https://skn.example", "interior", "--limit", "5",
        ])
        .unwrap();
        match cli.command {
            Commands::Search { base, query, limit, .. } => {
                assert_eq!(base, "https://skn.example");
                assert_eq!(query, "interior");
                assert_eq!(limit, Some(5));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_audit_pages() {
        let cli = Cli::try_parse_from([
            "vitrine", "audit", "-b", "http://127.0.0.1:5500", "-p", "index.html", "-p", "about.html",
        ])
        .unwrap();
        match cli.command {
            Commands::Audit { pages, .. } => assert_eq!(pages, vec!["index.html", "about.html"]),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from([
            "vitrine", "crawl", "--base", "https://skn.example", "--config", "vitrine.json",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("vitrine.json")));
    }

    #[test]
    fn test_search_requires_base() {
        assert!(Cli::try_parse_from(["vitrine", "search", "interior"]).is_err());
    }
}
