//! CLI definitions and entry point

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

use crate::commands;
use nestgen::GeneratorConfig;
use nestgen::output::{ErrorReport, OutputMode};

/// nestgen - Generate Lua file-nesting rules from editor settings
#[derive(Parser, Debug)]
#[command(
    name = "nestgen",
    version,
    about = "Generate Lua file-nesting rules from editor settings",
    long_about = "Convert the editor's explorer.fileNesting.patterns setting into Lua patterns.\n\n\
                  Writes a Lua module exposing nesting_rules and a documentation page\n\
                  embedding the same table."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(flatten)]
    pub paths: PathArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Where to read from and write to
#[derive(Args, Debug, Default)]
pub struct PathArgs {
    /// Generator config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Settings file holding explorer.fileNesting.patterns
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Output path for the Lua rules module
    #[arg(long, global = true)]
    pub rules_out: Option<PathBuf>,

    /// Output path for the documentation page
    #[arg(long, global = true)]
    pub doc_out: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the rules module and documentation (default)
    Generate,

    /// Verify the generated files match the current settings
    Check,

    /// Print the serialized rules table to stdout
    Print,
}

impl PathArgs {
    /// Build the generator config: file first, then flag overrides
    pub fn resolve(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => GeneratorConfig::load(path)?,
            None => GeneratorConfig::default(),
        };
        if let Some(input) = &self.input {
            config.input_path.clone_from(input);
        }
        if let Some(rules) = &self.rules_out {
            config.output_rules_path.clone_from(rules);
        }
        if let Some(doc) = &self.doc_out {
            config.output_doc_path.clone_from(doc);
        }
        log::debug!("resolved config: {config:?}");
        Ok(config)
    }
}

/// Run the CLI
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let result = cli.paths.resolve().and_then(|config| match cli.command {
        None | Some(Command::Generate) => commands::generate(config, output_mode),
        Some(Command::Check) => commands::check(config, output_mode),
        Some(Command::Print) => commands::print(config),
    });

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            log::debug!("{err:?}");
            ErrorReport::new(&err).render(output_mode);
            ExitCode::FAILURE
        },
    }
}
