// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Subcommand implementations.

use super::display::*;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use vitrine::audit::{run_audit, AuditReport, PageAudit};
use vitrine::scoring::ranking::merge_ranked;
use vitrine::{
    persist_index, quick_search, restore_index, score, session_key, CrawlEvent, CrawlReport,
    Crawler, FileSessionStore, HttpFetcher, IndexStatus, PageFetcher, SearchConfig, SearchResult,
    SiteIndexCache,
};

fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} [{bar:40.cyan/dim}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("━━╸")
}

fn fetcher(base: &str, config: &SearchConfig) -> Result<HttpFetcher> {
    HttpFetcher::new(base, config).with_context(|| format!("cannot use {base} as a site base"))
}

/// Crawl with a progress bar on stderr.
async fn crawl_with_progress(fetcher: HttpFetcher, config: &SearchConfig, cache: &SiteIndexCache) -> CrawlReport {
    let base = fetcher.base().clone();
    let crawler = Crawler::new(fetcher, base, config.sitemap_path.clone());

    let pb = ProgressBar::new(0);
    pb.set_style(create_progress_style());
    pb.set_prefix("Crawling");
    pb.set_message("sitemap…");

    let report = crawler
        .crawl_with(cache, |event| match event {
            CrawlEvent::SitemapLoaded { pages } => {
                pb.set_length(pages as u64);
                pb.set_message("pages…");
            }
            CrawlEvent::PageIndexed { url } => {
                pb.set_message(url);
                pb.inc(1);
            }
            CrawlEvent::PageSkipped { url, reason } => {
                pb.println(format!("⚠️  skipped {}: {}", url, reason));
                pb.inc(1);
            }
        })
        .await;

    pb.finish_with_message(format!("indexed {} pages", report.indexed));
    report
}

pub async fn crawl(config: &SearchConfig, base: &str, save: Option<&Path>) -> Result<()> {
    let fetcher = fetcher(base, config)?;
    let key = session_key(&config.cache_key, &fetcher.base().origin().ascii_serialization());
    let cache = SiteIndexCache::new();

    let report = crawl_with_progress(fetcher, config, &cache).await;
    if let Some(reason) = &report.sitemap_error {
        eprintln!("⚠️  sitemap unusable ({}); index is empty", reason);
    }

    if let Some(dir) = save.filter(|_| report.sitemap_error.is_none()) {
        std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
        persist_index(&cache, &FileSessionStore::new(dir), &key);
        eprintln!("   snapshot {} written to {}", key, dir.display());
    }

    let index = cache.get();
    println!();
    section_top("Index");
    row(&format!(
        " {} listed │ {} indexed │ {} skipped",
        report.listed,
        themed(Color::Green, &[BOLD], &report.indexed.to_string()),
        report.skipped.len()
    ));
    section_mid("Pages");
    for record in index.iter() {
        let url = pad_right(&themed(Color::Cyan, &[], &truncate(&record.url, 36)), 38);
        row(&format!(" {}{}", url, truncate(&record.title, BOX_WIDTH - 40)));
    }
    if index.is_empty() {
        row(&dim(" (no pages)"));
    }
    section_bot();

    eprintln!();
    eprintln!("✅ Crawl complete");
    Ok(())
}

pub async fn search(
    config: &SearchConfig,
    base: &str,
    query: &str,
    cache_dir: Option<&Path>,
    json: bool,
) -> Result<()> {
    let fetcher = fetcher(base, config)?;
    let key = session_key(&config.cache_key, &fetcher.base().origin().ascii_serialization());
    let cache = SiteIndexCache::new();
    let store = cache_dir.map(FileSessionStore::new);

    let restored = store
        .as_ref()
        .is_some_and(|store| restore_index(&cache, store, &key));
    let mut sitemap_failed = false;
    if !restored {
        let report = crawl_with_progress(fetcher.clone(), config, &cache).await;
        sitemap_failed = report.sitemap_error.is_some();
        if let Some((store, dir)) = store.as_ref().zip(cache_dir).filter(|_| !sitemap_failed) {
            std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
            persist_index(&cache, store, &key);
        }
    }

    let index = cache.get();
    let limits = config.limits();
    let mut results = score(query, index.records(), &limits);
    if sitemap_failed {
        eprintln!("⚠️  sitemap unusable; searching the home page and its links");
        results = merge_ranked(results, home_page_results(&fetcher, query, config).await, limits.max_results);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        print_results(query, &results, index.len());
    }
    Ok(())
}

/// Quick scan of the site root, for when the sitemap gave nothing to crawl.
async fn home_page_results(fetcher: &HttpFetcher, query: &str, config: &SearchConfig) -> Vec<SearchResult> {
    match fetcher.fetch("").await {
        Ok(html) => quick_search(fetcher.base(), "index.html", &html, query, &config.limits()),
        Err(e) => {
            tracing::warn!(error = %e, "home page unavailable");
            Vec::new()
        }
    }
}

fn print_results(query: &str, results: &[SearchResult], indexed: usize) {
    println!();
    section_top(&format!("\"{}\"", truncate(query, 40)));
    row(&format!(
        " {} results from {} pages │ index {}",
        results.len(),
        indexed,
        status_label(IndexStatus::Ready)
    ));

    for (rank, result) in results.iter().enumerate() {
        section_mid(&format!("#{}", rank + 1));
        let title = pad_right(&themed(Color::Text, &[BOLD], &truncate(&result.title, 60)), 66);
        row(&format!(" {}{}", title, score_value(result.score)));
        row(&format!(" {}", themed(Color::Cyan, &[], &truncate(&result.url, BOX_WIDTH - 2))));
        for line in wrap(&result.snippet, BOX_WIDTH - 4) {
            row(&format!("   {}", dim(&line)));
        }
    }
    if results.is_empty() {
        row(&dim(" no matches"));
    }
    section_bot();
}

pub async fn audit(config: &SearchConfig, base: &str, pages: Vec<String>) -> Result<()> {
    let fetcher = fetcher(base, config)?;

    let pages = if pages.is_empty() {
        let crawler = Crawler::new(fetcher.clone(), fetcher.base().clone(), config.sitemap_path.clone());
        match crawler.sitemap_paths().await {
            Ok(paths) if !paths.is_empty() => paths,
            _ => {
                eprintln!("⚠️  no pages from the sitemap; auditing index.html only");
                vec!["index.html".to_string()]
            }
        }
    } else {
        pages
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("auditing {} pages…", pages.len()));
    let report = run_audit(&fetcher, &config.sitemap_path, &pages).await;
    pb.finish_and_clear();

    print_audit(base, &report);
    Ok(())
}

fn print_audit(base: &str, report: &AuditReport) {
    println!();
    double_header();
    title(&format!("Site Audit · {}", truncate(base, 60)));
    double_footer();

    section_top("Static Files");
    row(&format!(" {} robots.txt", check_mark(report.static_files.robots_txt)));
    row(&format!(" {} sitemap.xml", check_mark(report.static_files.sitemap_xml)));

    for page in &report.pages {
        print_page(page);
    }

    for (page, reason) in &report.unreachable {
        section_mid(&truncate(page, 60));
        row(&format!(" {} {}", check_mark(false), truncate(reason, BOX_WIDTH - 4)));
    }

    section_mid("Summary");
    row(&format!(" Pages audited        {}", report.pages.len()));
    row(&format!(" Average SEO          {}", percent_colored(report.average_seo_percent())));
    row(&format!(" Average performance  {}", percent_colored(report.average_perf_percent())));
    section_bot();
}

fn print_page(page: &PageAudit) {
    section_mid(&truncate(&page.page, 60));

    let seo = &page.seo;
    for (label, ok) in seo.checks() {
        let detail = match label {
            "Title" => seo.title.as_deref(),
            "Description" => seo.description.as_deref(),
            "Canonical" => seo.canonical.as_deref(),
            "H1" => seo.h1.as_deref(),
            _ => None,
        };
        let detail = match (ok, detail) {
            (true, Some(text)) => dim(&truncate(text, 50)),
            (true, None) => String::new(),
            (false, _) => themed(Color::Red, &[], "missing"),
        };
        row(&format!(" {} {} {}", check_mark(ok), pad_right(label, 14), detail));
    }

    let perf = &page.performance;
    row("");
    row(&format!(
        " {} {} {}/{} images {}",
        warn_mark(perf.lazy_ok()),
        pad_right("Lazy loading", 14),
        perf.lazy_images,
        perf.images,
        percent_colored(perf.lazy_percent())
    ));
    row(&format!(
        " {} {} {}/{} deferred, {} blocking",
        warn_mark(perf.scripts_ok()),
        pad_right("Scripts", 14),
        perf.deferred_scripts,
        perf.external_scripts,
        perf.blocking_scripts
    ));
    row(&format!(
        " {} {} {} external",
        warn_mark(perf.stylesheets_ok()),
        pad_right("Stylesheets", 14),
        perf.external_stylesheets
    ));
    row(&format!(
        " {} {} {}/{} with dimensions {}",
        warn_mark(perf.sizes_ok()),
        pad_right("Image sizes", 14),
        perf.sized_images,
        perf.images,
        percent_colored(perf.sized_percent())
    ));
}
