use anyhow::Result;
use clap::Args;
use colored::Colorize;
use voltlab_catalog::{Category, CatalogQuery};

use crate::style::{icons, Style, StyledText};

#[derive(Args, Debug, Default, Clone)]
#[command(about = "List placeable components, grouped by category")]
pub struct CatalogArgs {
    /// Only list components in this category (e.g. power, passive, sensors)
    #[arg(long, short)]
    pub category: Option<Category>,

    /// Case-insensitive search on component labels. Ignores --category.
    #[arg(long, short)]
    pub search: Option<String>,

    /// Print the matching definitions as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: CatalogArgs) -> Result<()> {
    let mut query = CatalogQuery::new();
    if let Some(category) = args.category {
        query = query.category(category);
    }
    if let Some(term) = &args.search {
        query = query.search(term);
    }
    let definitions = query.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    if definitions.is_empty() {
        eprintln!("{} No components match", icons::warning());
        return Ok(());
    }

    for category in Category::ALL {
        let mut entries = definitions
            .iter()
            .filter(|d| d.category == category)
            .peekable();
        if entries.peek().is_none() {
            continue;
        }

        println!("{}", category.as_str().with_style(Style::Cyan).bold());
        for definition in entries {
            let value = if definition.unit.is_empty() {
                String::new()
            } else {
                format!("{} {}", definition.default_value, definition.unit)
            };
            println!(
                "  {} {:<24} {:<16} {:<10} {}",
                icons::bullet(),
                definition.kind.as_str(),
                definition.label,
                value,
                definition.description.with_style(Style::Dimmed)
            );
        }
    }

    Ok(())
}
