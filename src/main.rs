use clap::Parser;
use notescan::application::{ParseNoteService, ResolveReferencesService};
use notescan::cli::{
    format_nodes, format_references, nodes_to_json, resolved_note_to_json, Cli, Commands,
};
use notescan::error::NotescanError;
use notescan::infrastructure::{Config, OutputFormat};
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(config: &Config) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn output_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat, NotescanError> {
    match flag {
        Some(value) => OutputFormat::from_str(value).map_err(NotescanError::Config),
        None => Ok(config.format),
    }
}

fn run(cli: Cli) -> Result<(), NotescanError> {
    let cwd = std::env::current_dir()?;
    let config = Config::discover(&cwd)?;
    init_logging(&config);

    match cli.command {
        Commands::Parse { file, format } => {
            let format = output_format(format.as_deref(), &config)?;
            let nodes = ParseNoteService::execute(file.as_deref())?;

            match format {
                OutputFormat::Text => print!("{}", format_nodes(&nodes)),
                OutputFormat::Json => println!("{}", nodes_to_json(&nodes)?),
            }
            Ok(())
        }
        Commands::Resolve { event, format } => {
            let format = output_format(format.as_deref(), &config)?;
            let note = ResolveReferencesService::execute(event.as_deref())?;

            match format {
                OutputFormat::Text => print!("{}", format_references(&note.references)),
                OutputFormat::Json => println!("{}", resolved_note_to_json(&note)?),
            }
            Ok(())
        }
        Commands::Config { key, list } => {
            if list {
                println!("format = {}", config.format);
                println!("log_level = {}", config.log_level);
            } else if let Some(k) = key {
                println!("{}", config.get(&k)?);
            } else {
                println!("Usage: notescan config [--list | <key>]");
                println!("Valid keys: format, log_level");
            }
            Ok(())
        }
    }
}
