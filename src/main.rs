use anyhow::Result;
use blogfeed::{
    cli::{self, Cli, Commands},
    config::SiteConfig,
};
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build(&config).map(|_| ()),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
