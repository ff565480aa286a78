//! docwire - Entry Point
//!
//! Prints the service registry a configuration resolves to.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `docwire` | Resolve the first default config file found, print as text |
//! | `docwire --config app.toml --format json` | Resolve a given file, print as JSON |

use clap::Parser;
use docwire::OutputFormat;

/// Command line interface for docwire
#[derive(Parser, Debug)]
#[command(name = "docwire")]
#[command(about = "docwire - document manager registry resolver")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Output format of the resolved registry
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    docwire::run(cli.config.as_deref(), cli.format)
}
