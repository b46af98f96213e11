// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::application::{CatalogCache, QuoteBrowser, QuoteImporter, RecordStore};
use crate::cli::args::{Args, Command, FilterArgs};
use crate::domain::RawRecord;
use crate::infrastructure::{open_store, Config, JsonFileStore, PageRenderer};
use crate::ports::{HtmlPresenter, TextPresenter};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting wisdomvault with arguments");

    let open_cache = || -> Result<CatalogCache<Box<dyn RecordStore>>> {
        let config = Config::load_or_default(args.config.as_deref())?;
        let store = open_store(&config.store, args.file.as_deref())?;
        Ok(CatalogCache::new(store))
    };

    match args.command {
        Command::Daily { date, json } => {
            let today = date.unwrap_or_else(today);
            let browser = open_browser(&mut open_cache()?, today)?;
            print_daily(&browser, json)
        }
        Command::List { filter, json } => {
            let browser = filtered_browser(&mut open_cache()?, &filter)?;
            print_list(&browser, json)
        }
        Command::Options { json } => {
            let browser = open_browser(&mut open_cache()?, today())?;
            if json {
                println!("{}", serde_json::to_string_pretty(browser.filter_options())?);
            } else {
                print!("{}", TextPresenter::new().render_options(browser.filter_options()));
            }
            Ok(())
        }
        Command::Html {
            filter,
            output,
            no_open,
        } => {
            let browser = filtered_browser(&mut open_cache()?, &filter)?;
            let html = HtmlPresenter::new().render(&browser);
            write_html(&html, output.as_deref(), no_open)
        }
        Command::Import { path } => import(&mut open_cache()?, &path),
        Command::InitConfig { path } => init_config(path.as_deref()),
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn open_browser<R: RecordStore>(cache: &mut CatalogCache<R>, today: NaiveDate) -> Result<QuoteBrowser> {
    let snapshot = cache.snapshot().context("Failed to load quotes")?;
    info!(generation = snapshot.generation, size = snapshot.catalog.len(), "Catalog ready");
    Ok(QuoteBrowser::new(snapshot, today))
}

fn filtered_browser<R: RecordStore>(
    cache: &mut CatalogCache<R>,
    filter: &FilterArgs,
) -> Result<QuoteBrowser> {
    let mut browser = open_browser(cache, today())?;
    browser.set_filter(filter.to_filter());
    Ok(browser)
}

fn print_daily(browser: &QuoteBrowser, json: bool) -> Result<()> {
    let daily = browser.daily_quote();
    if json {
        println!("{}", serde_json::to_string_pretty(&daily)?);
    } else {
        println!("Quote of the Day ({})\n", browser.today());
        println!("{}", TextPresenter::new().render_daily(daily));
    }
    Ok(())
}

fn print_list(browser: &QuoteBrowser, json: bool) -> Result<()> {
    let visible = browser.visible_records();
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        print!("{}", TextPresenter::new().render_list(&visible));
    }
    Ok(())
}

fn write_html(html: &str, output: Option<&Path>, no_open: bool) -> Result<()> {
    let mut renderer = PageRenderer::new();
    let path = match output {
        Some(path) => {
            infrastructure::renderer::write_page(path, html)?;
            path.to_path_buf()
        }
        None => renderer.create_temp_file(html)?,
    };
    info!(?path, "Wrote HTML page");

    if no_open {
        println!("{}", path.display());
        return Ok(());
    }
    renderer.open_in_browser(&path)
}

fn import<R: RecordStore>(cache: &mut CatalogCache<R>, path: &Path) -> Result<()> {
    let incoming: Vec<RawRecord> = JsonFileStore::new(path)
        .list_all()
        .with_context(|| format!("Failed to read import file {}", path.display()))?;
    info!(rows = incoming.len(), ?path, "Importing quotes");

    let report = QuoteImporter::new(cache).import(incoming)?;
    println!(
        "Synced! {} new quote(s) added ({} already present, {} without a quote).",
        report.added, report.skipped_duplicates, report.skipped_invalid
    );
    Ok(())
}

fn init_config(path: Option<&Path>) -> Result<()> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => Config::default_path().context("Could not determine config directory")?,
    };
    if path.exists() {
        anyhow::bail!("Config file already exists: {}", path.display());
    }
    Config::create_default(&path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
