mod demo;

use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::{Diagnostic, Result};
use thiserror::Error;
use verba::grammar::{GrammarError, clean_for_cfg};
use verba::{
    CfgTool, Engine, EngineOptions, FunctionalVerbs, GrammarDefinition, PrintRuntime,
    VerbRegistry, render_error,
};

use demo::MusicVerbs;

/// Verba - compile verb call chains into actions
#[derive(Parser, Debug)]
#[command(name = "verba")]
#[command(about = "Parse, compile and run verb call chains", long_about = None)]
struct Cli {
    /// Refuse chains with more calls than this
    #[arg(long, global = true)]
    max_calls: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the parsed call chain as JSON
    Parse {
        /// Source text, or `-` to read stdin
        source: Option<String>,
    },
    /// Print the actions, one JSON object per line
    Compile {
        /// Source text, or `-` to read stdin
        source: Option<String>,
    },
    /// Execute the actions, printing each one
    Run {
        /// Source text, or `-` to read stdin
        source: Option<String>,
    },
    /// Print the grammar in the form constrained generators accept
    Grammar {
        /// TOML or YAML grammar definition (defaults to the built-in syntax)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print a CFG tool payload with this tool name instead
        #[arg(long, value_name = "NAME")]
        cfg_tool: Option<String>,

        /// Tool description used with --cfg-tool
        #[arg(long, default_value = "Emits a verb call chain")]
        description: String,

        /// Keep directives and blank lines
        #[arg(long, conflicts_with = "cfg_tool")]
        raw: bool,
    },
}

#[derive(Debug, Error, Diagnostic)]
enum CliError {
    #[error("cannot read source from stdin")]
    #[diagnostic(code(verba::stdin))]
    Stdin(#[source] io::Error),

    #[error("cannot load grammar")]
    #[diagnostic(code(verba::grammar))]
    Grammar(#[source] GrammarError),

    #[error("cannot encode output as JSON")]
    #[diagnostic(code(verba::json))]
    Json(#[source] serde_json::Error),

    /// Already rendered to stderr.
    #[error("aborting due to the previous error")]
    Reported,
}

fn read_source(source: Option<String>) -> Result<String, CliError> {
    match source.as_deref() {
        Some("-") | None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .map_err(CliError::Stdin)?;
            Ok(text)
        }
        Some(text) => Ok(text.to_string()),
    }
}

fn engine(max_calls: Option<usize>) -> Engine {
    let registry = VerbRegistry::builder()
        .verbs(MusicVerbs)
        .verbs(FunctionalVerbs)
        .build();
    Engine::builder()
        .verbs(registry)
        .options(EngineOptions { max_calls })
        .build()
}

fn report<T>(result: Result<T, verba::Error>) -> Result<T, CliError> {
    result.map_err(|e| {
        render_error(&e);
        CliError::Reported
    })
}

fn run(cli: Cli) -> Result<(), CliError> {
    let engine = engine(cli.max_calls);

    match cli.command {
        Command::Parse { source } => {
            let source = read_source(source)?;
            let chain = report(engine.parse(&source))?;
            let json = serde_json::to_string_pretty(&chain).map_err(CliError::Json)?;
            println!("{json}");
        }
        Command::Compile { source } => {
            let source = read_source(source)?;
            for action in report(engine.compile(&source))? {
                let json = serde_json::to_string(&action).map_err(CliError::Json)?;
                println!("{json}");
            }
        }
        Command::Run { source } => {
            let source = read_source(source)?;
            let executed = report(engine.execute(source.as_str(), &mut PrintRuntime::stdout()))?;
            tracing::debug!(executed, "done");
        }
        Command::Grammar {
            config,
            cfg_tool,
            description,
            raw,
        } => {
            let grammar = match config {
                Some(path) => GrammarDefinition::from_path(path).map_err(CliError::Grammar)?,
                None => GrammarDefinition::default_grammar(),
            };
            match cfg_tool {
                Some(name) => {
                    let tool = CfgTool::from_definition(name, description, &grammar);
                    let json =
                        serde_json::to_string_pretty(&tool.build_tool()).map_err(CliError::Json)?;
                    println!("{json}");
                }
                None if raw => print!("{}", grammar.render()),
                None => println!("{}", clean_for_cfg(&grammar.render())),
            }
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG to control the log level, default to WARN
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    run(cli)?;
    Ok(())
}
