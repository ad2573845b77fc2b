//! Command-line front end for the collection catalog.
//!
//! # Responsibility
//! - Compose `collection_core` at startup (config, logging, catalog open).
//! - Run form-level validation before handing input to the store.
//! - Persist after every mutation, mirroring the desktop flows.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use collection_core::{
    init_logging, seed_categories_if_missing, Catalog, CatalogConfig, ItemDraft, ItemId,
    DEFAULT_CATEGORIES,
};
use log::warn;
use std::error::Error;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "collection", version, about = "Personal collection catalog")]
struct Cli {
    /// Data directory holding items.json, type.json and name.json.
    /// Overrides `COLLECTION_HOME`.
    #[arg(long)]
    home: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// First run: seed default categories and record the collector name.
    Init {
        #[arg(long)]
        name: String,
    },
    /// Add one item to the collection.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        category: String,
        /// Date added to the collection (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        acquired: Option<NaiveDate>,
        /// Date of manufacture (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        manufactured: Option<NaiveDate>,
        #[arg(long)]
        description: String,
    },
    /// Replace the fields of the item with the given id.
    Edit {
        id: ItemId,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        acquired: Option<NaiveDate>,
        #[arg(long)]
        manufactured: Option<NaiveDate>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete the item shown at the given row (zero-based).
    Delete { row: usize },
    /// List items, optionally only one category.
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Register a new category.
    AddCategory { label: String },
    /// Show registered categories.
    Categories,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let mut config = CatalogConfig::from_env()?;
    if let Some(home) = cli.home {
        config = config.rooted_at(std::env::current_dir()?.join(home));
    }
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: logging disabled: {err}");
    }

    let paths = config.storage_paths();
    if let Command::Init { name } = &cli.command {
        if name.trim().is_empty() {
            return Err("Name is missing.".into());
        }
        seed_categories_if_missing(&paths, &DEFAULT_CATEGORIES)?;
        let mut catalog = Catalog::open(&paths)?;
        catalog.collector.set_and_persist(name.trim())?;
        println!("Welcome, {}.", name.trim());
        return Ok(());
    }

    let mut catalog = Catalog::open(&paths)?;
    if let Some(name) = catalog.collector.get() {
        println!("[{name}]");
    }
    let today = Local::now().date_naive();

    match cli.command {
        Command::Init { .. } => {}
        Command::Add {
            title,
            category,
            acquired,
            manufactured,
            description,
        } => {
            if !catalog.categories.contains(&category) {
                return Err(format!("Unknown item type `{category}`.").into());
            }
            let draft = ItemDraft::new(
                title,
                category,
                acquired.unwrap_or(today),
                manufactured.unwrap_or(today),
                description,
            );
            draft.validate(today)?;
            let id = catalog.items.create(draft).id();
            save_items(&catalog)?;
            println!("Added item {id}.");
        }
        Command::Edit {
            id,
            title,
            category,
            acquired,
            manufactured,
            description,
        } => {
            if let Some(category) = &category {
                if !catalog.categories.contains(category) {
                    return Err(format!("Unknown item type `{category}`.").into());
                }
            }
            let item = catalog
                .items
                .get_by_id_mut(id)
                .ok_or_else(|| format!("No item with id {id}."))?;
            let mut draft = item.to_draft();
            if let Some(title) = title {
                draft.title = title;
            }
            if let Some(category) = category {
                draft.category = category;
            }
            if let Some(acquired) = acquired {
                draft.acquired_date = acquired;
            }
            if let Some(manufactured) = manufactured {
                draft.manufactured_date = manufactured;
            }
            if let Some(description) = description {
                draft.description = description;
            }
            draft.validate(today)?;
            item.apply(draft);
            save_items(&catalog)?;
            println!("Updated item {id}.");
        }
        Command::Delete { row } => {
            let removed = catalog.items.delete_at(row)?;
            save_items(&catalog)?;
            println!("Deleted `{}`.", removed.title);
        }
        Command::List { category } => {
            let rows: Vec<_> = match &category {
                Some(category) => catalog.items.by_category(category).collect(),
                None => catalog.items.items().iter().collect(),
            };
            println!(
                "{:>4}  {:<24} {:<12} {:<10} {:<10} Description",
                "Id", "Title", "Item Type", "DOA", "DOM"
            );
            for item in rows {
                println!(
                    "{:>4}  {:<24} {:<12} {:<10} {:<10} {}",
                    item.id(),
                    item.title,
                    item.category,
                    item.acquired_date.format("%d/%m/%Y"),
                    item.manufactured_date.format("%d/%m/%Y"),
                    item.description
                );
            }
        }
        Command::AddCategory { label } => {
            if label.trim().is_empty() {
                return Err("Item type is missing.".into());
            }
            catalog.categories.add(label.trim())?;
            println!("Added item type `{}`.", label.trim());
        }
        Command::Categories => {
            for label in catalog.categories.labels() {
                println!("{label}");
            }
        }
    }
    Ok(())
}

fn save_items(catalog: &Catalog) -> Result<(), Box<dyn Error>> {
    catalog.items.save().map_err(|err| {
        warn!("event=cli_save module=cli status=error");
        Box::<dyn Error>::from(format!("the last change may not be saved: {err}"))
    })
}
