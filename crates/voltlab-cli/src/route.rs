use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use serde_json::json;
use voltlab_catalog::ComponentKind;
use voltlab_engine::{smooth_path, Circuit, GridPoint, LabConfig, Router, SmoothingStyle};

use crate::style::{icons, parse_point};

#[derive(Args, Debug, Clone)]
#[command(about = "Route one wire between two cells and print the path")]
pub struct RouteArgs {
    /// Start cell as x,y
    #[arg(long, value_parser = parse_point)]
    pub from: GridPoint,

    /// End cell as x,y
    #[arg(long, value_parser = parse_point)]
    pub to: GridPoint,

    /// Occupy a cell with a part so the route must avoid it (repeatable)
    #[arg(long = "block", value_name = "X,Y", value_parser = parse_point)]
    pub blocks: Vec<GridPoint>,

    /// Lab configuration file (grid size, cell size, router budget)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the path and drawing commands as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: RouteArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => LabConfig::load(path)
            .with_context(|| format!("Failed to load lab config {}", path.display()))?,
        None => LabConfig::default(),
    };

    let mut circuit = Circuit::new(config.grid.width, config.grid.height);
    for &at in &args.blocks {
        circuit
            .place(at, ComponentKind::Resistor)
            .with_context(|| format!("Cannot block {at}"))?;
    }

    let router = Router::new(config.router.clone());
    let path = router.find_path(circuit.grid(), args.from, args.to);
    let drawable = smooth_path(&path, &SmoothingStyle::from(&config));

    if args.json {
        let output = json!({
            "path": path,
            "drawable": drawable,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let cells: Vec<String> = path.iter().map(ToString::to_string).collect();
    println!("{}", cells.join(" -> "));
    println!("{drawable}");
    eprintln!(
        "{} {} step(s), {} bend(s)",
        icons::success(),
        path.len().saturating_sub(1),
        drawable.curve_count()
    );

    Ok(())
}
