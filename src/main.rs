//! CLI harness for the plugin browser core.
//!
//! Loads a record set from a JSON file (and optionally a config file),
//! then either prints the grouped view for a query or shows the
//! autocompletion for a partial input. Plain-text stand-in for the host
//! UI during development.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use plugin_shelf::browser::Browser;
use plugin_shelf::config::Config;
use plugin_shelf::logging;
use plugin_shelf::records::{JsonSource, RecordSource, RecordStore, StaticSource};
use plugin_shelf::suggest::accept_suggestion;

#[derive(Parser)]
#[command(
    name = "plugin-shelf",
    about = "Browse an installed-plugin record set from the command line"
)]
struct Cli {
    /// JSON file holding the record array
    #[arg(long)]
    records: String,

    /// Optional JSON config file (defaults apply when omitted or invalid)
    #[arg(long)]
    config: Option<String>,

    /// Filter query to evaluate
    #[arg(long, default_value = "")]
    query: String,

    /// Print the completion for this partial input instead of the list
    #[arg(long)]
    suggest: Option<String>,
}

fn main() -> Result<()> {
    let _guard = logging::init();
    let cli = Cli::parse();

    let records_path = expand(&cli.records);
    let records = JsonSource::new(records_path.clone())
        .load()
        .with_context(|| format!("loading records from '{}'", records_path.display()))?;

    let config = match &cli.config {
        Some(path) => Config::load_or_default(&expand(path)),
        None => Config::default(),
    };

    let store = RecordStore::with_source(Box::new(StaticSource::new("cli", records)));
    let mut browser = Browser::new(store, config);
    browser.log_uncategorized();

    if let Some(partial) = &cli.suggest {
        browser.set_query(partial);
        let tail = browser.suggest();
        if tail.is_empty() {
            println!("no completion for '{}'", partial);
        } else {
            println!("input:    {}", partial);
            println!("ghost:    {}", tail);
            println!("accepted: {}", accept_suggestion(partial, &tail));
        }
        return Ok(());
    }

    browser.set_query(&cli.query);
    let view = browser.grouped();
    println!(
        "{} of {} records match '{}'",
        view.record_count(),
        browser.store().len(),
        browser.query()
    );

    for group in &view.groups {
        println!();
        println!("[{}]", group.category);
        for record in &group.members {
            let mut line = format!("  {}", record.display_name);
            if !record.version.is_empty() {
                line.push_str(&format!(" ({})", record.version));
            }
            if let Some(authors) = record.authors.as_deref() {
                line.push_str(&format!(" by {}", authors));
            }
            println!("{}", line);
        }
    }

    Ok(())
}

fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}
