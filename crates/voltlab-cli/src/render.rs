use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use log::debug;
use voltlab_engine::LabConfig;
use voltlab_lab::{svg_export, SceneScript, Session};

use crate::style::{icons, Style, StyledText};

#[derive(Args, Debug, Default, Clone)]
#[command(about = "Replay a TOML scene script through an editor session and render it")]
pub struct RenderArgs {
    /// Scene script to replay
    #[arg(value_name = "SCRIPT", value_hint = clap::ValueHint::FilePath)]
    pub script: PathBuf,

    /// Where to write the SVG. Defaults to the script path with an .svg extension.
    #[arg(long, short, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Lab configuration file
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print the render snapshot as JSON instead of writing an SVG
    #[arg(long)]
    pub json: bool,

    /// Fail if any step of the script is rejected
    #[arg(long)]
    pub strict: bool,
}

pub fn execute(args: RenderArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => LabConfig::load(path)
            .with_context(|| format!("Failed to load lab config {}", path.display()))?,
        None => LabConfig::default(),
    };

    let script = SceneScript::load(&args.script)?;
    debug!(
        "Replaying {} step(s) from {}",
        script.steps.len(),
        args.script.display()
    );

    let mut session = Session::new(config);
    let report = script.apply(&mut session);

    for (index, reason) in &report.rejected {
        eprintln!(
            "{} step {}: {}",
            icons::warning(),
            index + 1,
            reason.with_style(Style::Yellow)
        );
    }
    if args.strict && !report.is_clean() {
        anyhow::bail!(
            "{} of {} step(s) were rejected",
            report.rejected.len(),
            script.steps.len()
        );
    }

    let snapshot = session.snapshot();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.script.with_extension("svg"));
    svg_export::save(&snapshot, &output)?;

    eprintln!(
        "{} {} ({} components, {} wires)",
        icons::success(),
        output.display().to_string().with_style(Style::Green).bold(),
        snapshot.components.len(),
        snapshot.wires.len()
    );

    Ok(())
}
