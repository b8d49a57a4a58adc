//! Command-line interface for cfgml
//!
//! Usage:
//!   cfgml <input> [--pretty[=N]] [--declaration] [--format xml|json|tree]
//!
//! Parse and read failures are printed as `Error: <message>` on stdout and do
//! not change the exit status; only usage errors exit non-zero.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cfgml::{export, CfgError, Config, XmlOptions};

#[derive(Parser)]
#[command(name = "cfgml")]
#[command(version, about = "Translate a configuration file to XML", long_about = None)]
struct Cli {
    /// Configuration file to translate
    input: PathBuf,

    /// Indent nested elements (default 2 spaces)
    #[arg(
        long,
        value_name = "N",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "2"
    )]
    pretty: Option<usize>,

    /// Start the XML output with an <?xml ...?> declaration
    #[arg(long)]
    declaration: bool,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Xml)]
    format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Xml,
    Json,
    /// The intermediate labeled tree, as JSON
    Tree,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(e) => println!("Error: {}", e),
    }
}

fn run(cli: &Cli) -> Result<String, CfgError> {
    let config = Config::from_file(&cli.input)?;
    debug!(entries = config.document().items.len(), format = ?cli.format, "rendering");

    match cli.format {
        Format::Xml => {
            let options = XmlOptions {
                indent: cli.pretty,
                declaration: cli.declaration,
            };
            config.to_xml(&options)
        }
        Format::Json => config.to_json(),
        Format::Tree => export::export_tree_to_json(&config.to_tree()),
    }
}
