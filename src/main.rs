use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rotaview::cli::{
    Cli, Commands, ViewArgs, extract_run_output, parse_input, read_input, show_table,
};
use rotaview::config::{Config, init_config};
use rotaview::extract::Extraction;
use rotaview::fetch::fetch_transcript;
use rotaview::render::RenderOptions;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match &cli.command {
        Commands::Init => {
            if init_config(&cli.config)? {
                println!("Created {} with default settings", cli.config);
            } else {
                println!("Config file '{}' already exists.", cli.config);
            }
        }
        Commands::Extract { input } => {
            let extraction = parse_input(&read_input(input)?)?;
            println!("{}", serde_json::to_string_pretty(&extraction)?);
        }
        Commands::Show { input, view } => {
            let config = Config::load_or_default(&cli.config)?;
            let extraction = parse_input(&read_input(input)?)?;
            print_table(&extraction, view, &config)?;
        }
        Commands::Run { endpoint, view } => {
            let config = Config::load_or_default(&cli.config)?;
            let endpoint = endpoint.as_deref().unwrap_or_else(|| config.endpoint());
            let transcript = fetch_transcript(endpoint)?;
            let extraction = extract_run_output(&transcript);
            print_table(&extraction, view, &config)?;
        }
    }

    Ok(())
}

fn print_table(extraction: &Extraction, view: &ViewArgs, config: &Config) -> anyhow::Result<()> {
    let color = !view.no_color && std::io::stdout().is_terminal();
    let options = RenderOptions {
        highlight: color.then_some(config.thresholds),
    };
    print!("{}", show_table(extraction, view, config, &options)?);
    Ok(())
}
