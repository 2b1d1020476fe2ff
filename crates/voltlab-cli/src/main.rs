use clap::{Parser, Subcommand};

mod catalog;
mod render;
mod route;
mod style;

#[derive(Parser)]
#[command(name = "voltlab")]
#[command(about = "Circuit Lab editing tools by Cirkitly", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the components that can be placed in the lab
    #[command(alias = "c")]
    Catalog(catalog::CatalogArgs),

    /// Replay a scene script and render the result
    #[command(alias = "r")]
    Render(render::RenderArgs),

    /// Route a single wire across the grid
    Route(route::RouteArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logger
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog(args) => catalog::execute(args),
        Commands::Render(args) => render::execute(args),
        Commands::Route(args) => route::execute(args),
    }
}
