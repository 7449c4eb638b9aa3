//! Command handlers for CLI subcommands.

use std::path::Path;

use tracing::info;

use tally_api::{ApiConfig, AppState};
use tally_metrics::{build_radar, filter_tier, summarize, tier_progress};
use tally_models::{Catalog, ItemId, PriorityTier};
use tally_persistence::{load_catalog, FlagKind, FlagStore};

use crate::cli::Commands;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub fn execute(command: Commands, catalog_path: &Path, state_dir: &Path) -> Result<()> {
    match command {
        Commands::Status => cmd_status(catalog_path, state_dir),
        Commands::List { tier } => cmd_list(catalog_path, state_dir, tier.as_deref()),
        Commands::Check { item } => {
            cmd_set_flag(catalog_path, state_dir, FlagKind::Completed, &item, true)
        }
        Commands::Uncheck { item } => {
            cmd_set_flag(catalog_path, state_dir, FlagKind::Completed, &item, false)
        }
        Commands::Ignore { item } => {
            cmd_set_flag(catalog_path, state_dir, FlagKind::Ignored, &item, true)
        }
        Commands::Unignore { item } => {
            cmd_set_flag(catalog_path, state_dir, FlagKind::Ignored, &item, false)
        }
        Commands::Radar => cmd_radar(catalog_path, state_dir),
        Commands::Serve { host, port } => cmd_serve(catalog_path, state_dir, &host, port),
    }
}

fn open(catalog_path: &Path, state_dir: &Path) -> Result<(Catalog, FlagStore)> {
    let catalog = load_catalog(catalog_path)?;
    Ok((catalog, FlagStore::new(state_dir)))
}

fn cmd_status(catalog_path: &Path, state_dir: &Path) -> Result<()> {
    let (catalog, store) = open(catalog_path, state_dir)?;
    let snapshot = store.snapshot()?;

    let summary = summarize(&catalog, &snapshot);
    println!(
        "Progress: {}/{} ({:.1}%)",
        summary.completed,
        summary.out_of,
        summary.percent()
    );
    println!();

    for tier in PriorityTier::ALL {
        let progress = tier_progress(&catalog, tier, &snapshot);
        println!(
            "  {:<12} {}/{} ({:.1}%)",
            tier.label(),
            progress.completed,
            progress.out_of,
            progress.percent()
        );
    }

    Ok(())
}

fn cmd_list(catalog_path: &Path, state_dir: &Path, tier_arg: Option<&str>) -> Result<()> {
    let (catalog, store) = open(catalog_path, state_dir)?;
    let snapshot = store.snapshot()?;

    let sections = match tier_arg {
        Some(raw) => {
            let tier = PriorityTier::parse(raw)
                .ok_or_else(|| format!("Unknown tier: {}", raw))?;
            filter_tier(&catalog.sections, tier)
        }
        None => catalog.sections.clone(),
    };

    for section in &sections {
        println!("{}", section.title);
        for item in &section.checklist {
            let id = item.id();
            let marker = if snapshot.completion.is_set(&id) {
                "[x]"
            } else {
                "[ ]"
            };
            let ignored = if snapshot.ignore.is_set(&id) {
                " (ignored)"
            } else {
                ""
            };
            println!("  {} {} [{}]{}", marker, item.point, item.priority, ignored);
        }
        println!();
    }

    Ok(())
}

fn cmd_set_flag(
    catalog_path: &Path,
    state_dir: &Path,
    kind: FlagKind,
    item: &str,
    value: bool,
) -> Result<()> {
    let (catalog, store) = open(catalog_path, state_dir)?;

    // Accepts display text or an already-normalized id; normalization is
    // idempotent so both resolve to the same key.
    let id = ItemId::normalize(item);
    let found = catalog
        .find_item(&id)
        .ok_or_else(|| format!("Item not found: {}", item))?;

    store.set(kind, &id, value)?;
    info!(item = %id, flag = %kind, value, "flag updated");

    let action = match (kind, value) {
        (FlagKind::Completed, true) => "Checked",
        (FlagKind::Completed, false) => "Unchecked",
        (FlagKind::Ignored, true) => "Ignored",
        (FlagKind::Ignored, false) => "Restored",
    };
    println!("{} '{}' ({})", action, found.point, id);

    Ok(())
}

fn cmd_radar(catalog_path: &Path, state_dir: &Path) -> Result<()> {
    let (catalog, store) = open(catalog_path, state_dir)?;
    let snapshot = store.snapshot()?;

    let dataset = build_radar(&catalog.sections, &snapshot);
    println!("{}", serde_json::to_string_pretty(&dataset)?);

    Ok(())
}

fn cmd_serve(catalog_path: &Path, state_dir: &Path, host: &str, port: u16) -> Result<()> {
    let config = ApiConfig::new(host, port)
        .with_catalog_path(catalog_path)
        .with_state_dir(state_dir);
    let state = AppState::load(config.clone())?;

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(tally_api::serve(config, state))?;

    Ok(())
}
