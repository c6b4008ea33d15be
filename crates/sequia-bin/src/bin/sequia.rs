use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use sequia::{graph, RunLengthDFA};
use sequia_bin::input::read_sequences;
use sequia_bin::report::{self, Analyzer, DEMO_SEQUENCES, PDA_DEMO_SEQUENCES};
use sequia_re::PatternDetector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sequia", about = "Drought and flood pattern recognizers over sensor readings")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Format::Text, global = true)]
    format: Format,

    /// Trace every automaton step to stderr
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// Run the built-in example sequences
    Demo,
    /// Analyze sequences from the command line and/or a file (one per line)
    Check {
        sequences: Vec<String>,
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print the DFA as a Graphviz graph
    Dot,
    /// Print the DFA transition table as JSON
    Table,
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into())
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Command::Demo => {
            let mut analyzer = Analyzer::new(PatternDetector::standard()?);
            match cli.format {
                Format::Text => print!("{}", report::render_demo(&mut analyzer)),
                Format::Json => {
                    let analyses: Vec<_> = DEMO_SEQUENCES
                        .iter()
                        .chain(PDA_DEMO_SEQUENCES)
                        .map(|s| analyzer.analyze(s))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&analyses)?);
                }
            }
        }
        Command::Check { sequences, input } => {
            let sequences = read_sequences(sequences, input.as_deref()).with_context(|| {
                let path = input.as_ref().map(|p| p.display().to_string());
                format!("failed to read {}", path.unwrap_or_default())
            })?;
            let mut analyzer = Analyzer::new(PatternDetector::standard()?);
            let analyses: Vec<_> = sequences.iter().map(|s| analyzer.analyze(s)).collect();
            match cli.format {
                Format::Text => print!("{}", report::render_text(&analyses)),
                Format::Json => println!("{}", serde_json::to_string_pretty(&analyses)?),
            }
        }
        Command::Dot => {
            println!("{}", graph::to_dot(&graph::transition_graph()));
        }
        Command::Table => {
            println!("{}", serde_json::to_string_pretty(&RunLengthDFA::table())?);
        }
    }

    Ok(())
}
