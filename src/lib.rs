// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use application::{
    arrange_results, CompatMatch, DrugSearch, DrugStore, ListExporter, Resolution, ResultFilter,
    SavedList,
};
use domain::Tolerance;
use infrastructure::{Config, HttpCatalog, JsonFileStore, XlsxExporter};
use ports::TablePresenter;
use tracing::{debug, info};

use crate::cli::args::{Args, BaseSelector, Command, Selector};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting pharmatc with arguments");

    let config = resolve_config(&args)?;

    match args.command {
        Command::Search { selector, json } => handle_search(&config, &selector, json),
        Command::Match {
            base,
            tolerance,
            same_form,
            filter,
            json,
        } => handle_match(&config, &base, tolerance, same_form, filter, json),
        Command::Save { selector } => handle_save(&config, &selector),
        Command::List { filter, json } => handle_list(&config, filter, json),
        Command::Remove { id } => handle_remove(&config, id),
        Command::Export { output } => handle_export(&config, &output),
    }
}

/// Configuration file merged with command-line overrides.
pub fn resolve_config(args: &Args) -> Result<Config> {
    let mut config = Config::load_default()?;

    if let Some(url) = &args.api_url {
        debug!(%url, "Overriding backend base URL");
        config.api.base_url = url.clone();
    }
    if let Some(path) = &args.store {
        debug!(path = %path.display(), "Overriding drug store path");
        config.store.path = path.display().to_string();
    }

    Ok(config)
}

fn handle_search(config: &Config, selector: &Selector, json: bool) -> Result<()> {
    let (field, query) = selector.field_query().context("No search field given")?;

    let catalog = HttpCatalog::new(&config.api)?;
    let search = DrugSearch::new(&catalog);

    info!(%field, query, "Searching catalog");
    let drugs = search.search(field, query)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&drugs)?);
        return Ok(());
    }

    if drugs.is_empty() {
        println!("No drugs matched your {} search.", field);
        return Ok(());
    }

    print!("{}", TablePresenter::new().search_results(&drugs));
    println!("\n{} drug(s) found.", drugs.len());
    Ok(())
}

fn handle_match(
    config: &Config,
    base: &BaseSelector,
    tolerance: Tolerance,
    same_form: bool,
    filter: Option<String>,
    json: bool,
) -> Result<()> {
    let catalog = HttpCatalog::new(&config.api)?;
    let presenter = TablePresenter::new();

    // Resolve the base record, or take a bare --id at face value.
    let (base_id, base_record) = match base.id {
        Some(id) => (id, None),
        None => {
            let (field, query) = base.field_query().context("No base drug given")?;
            let search = DrugSearch::new(&catalog);
            match search.resolve(field, query)? {
                Resolution::NotFound => {
                    return Err(anyhow::anyhow!("No drug found for that {}", field));
                }
                Resolution::One(record) => (record.id, Some(record)),
                Resolution::Many(candidates) => {
                    print!("{}", presenter.search_results(&candidates));
                    return Err(anyhow::anyhow!(
                        "{} drugs match; narrow the query or pick one with --item-seq or --id",
                        candidates.len()
                    ));
                }
            }
        }
    };

    if let Some(record) = &base_record {
        print!("{}", presenter.drug_card(record));
        println!();
    }

    info!(base_id, %tolerance, "Requesting compatible drugs");
    let matcher = CompatMatch::new(&catalog);
    let results = matcher.find_compatible(base_id, tolerance)?;

    let mut store = JsonFileStore::open(config.resolved_store_path()?);
    let saved = store.load();

    let result_filter = ResultFilter {
        name: filter,
        same_form,
    };
    let arranged = arrange_results(&results, base_record.as_ref(), &result_filter, &saved);

    if json {
        println!("{}", serde_json::to_string_pretty(&arranged)?);
        return Ok(());
    }

    if arranged.is_empty() {
        println!("No compatible drugs at tolerance {}.", tolerance);
        return Ok(());
    }

    let saved_ids: HashSet<i64> = saved.iter().map(|d| d.id).collect();
    print!("{}", presenter.match_results(&arranged, &saved_ids));
    println!("\n{} compatible drug(s) at tolerance {}.", arranged.len(), tolerance);
    Ok(())
}

fn handle_save(config: &Config, selector: &Selector) -> Result<()> {
    let (field, query) = selector.field_query().context("No search field given")?;

    let catalog = HttpCatalog::new(&config.api)?;
    let search = DrugSearch::new(&catalog);

    info!(%field, query, "Resolving drug to save");
    let record = match search.resolve(field, query)? {
        Resolution::NotFound => {
            return Err(anyhow::anyhow!("No drug found for that {}", field));
        }
        Resolution::Many(candidates) => {
            print!("{}", TablePresenter::new().search_results(&candidates));
            return Err(anyhow::anyhow!(
                "{} drugs match; narrow the query or pick one with --item-seq",
                candidates.len()
            ));
        }
        Resolution::One(record) => record,
    };

    let mut list = SavedList::new(JsonFileStore::open(config.resolved_store_path()?));
    let name = record.item_name.clone();
    if list.add(record)? {
        println!("Saved {}.", name);
    } else {
        println!("{} is already in your list.", name);
    }
    Ok(())
}

fn handle_list(config: &Config, filter: Option<String>, json: bool) -> Result<()> {
    let mut list = SavedList::new(JsonFileStore::open(config.resolved_store_path()?));
    let drugs = list.filtered(filter.as_deref());

    if json {
        println!("{}", serde_json::to_string_pretty(&drugs)?);
        return Ok(());
    }

    if drugs.is_empty() {
        match filter {
            Some(needle) => println!("No saved drugs matching {:?}.", needle),
            None => println!("Your drug list is empty."),
        }
        return Ok(());
    }

    print!("{}", TablePresenter::new().saved_table(&drugs));
    println!("\n{} drug(s) in your list.", drugs.len());
    Ok(())
}

fn handle_remove(config: &Config, id: i64) -> Result<()> {
    let mut list = SavedList::new(JsonFileStore::open(config.resolved_store_path()?));

    match list.remove(id)? {
        Some(removed) => println!("Removed {}.", removed.item_name),
        None => println!("No drug with id {} in your list.", id),
    }
    Ok(())
}

fn handle_export(config: &Config, output: &Path) -> Result<()> {
    let mut list = SavedList::new(JsonFileStore::open(config.resolved_store_path()?));
    let drugs = list.all();

    let exporter = ListExporter::new(XlsxExporter::new());
    let rows = exporter.export(&drugs, output)?;

    info!(path = %output.display(), rows, "Wrote spreadsheet");
    println!("Exported {} drug(s) to {}.", rows, output.display());
    Ok(())
}
