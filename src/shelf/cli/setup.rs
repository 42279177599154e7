use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shelf", bin_name = "shelf", version)]
#[command(about = "Browse, filter and rank a product catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Read products from a local JSON file instead of the configured endpoint
    #[arg(long, global = true, value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Force plain output without colors
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Brand, type, name and sort selections shared by the query commands.
#[derive(Args, Debug, Clone, Default)]
pub struct QueryArgs {
    /// Only products of this brand ("Todos" for all)
    #[arg(short, long)]
    pub brand: Option<String>,

    /// Only products of this type ("Todos" for all)
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub product_type: Option<String>,

    /// Only products whose name contains this text (case-insensitive)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Sort strategy: best-rated, lowest-price, highest-price, a-z, z-a
    #[arg(short, long)]
    pub sort: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the catalog (default)
    #[command(alias = "ls")]
    List {
        #[command(flatten)]
        query: QueryArgs,
    },

    /// Show the details of one listed product
    #[command(alias = "v")]
    Show {
        /// Tab index of the product, as printed by `list` with the same filters
        tab_index: u64,

        #[command(flatten)]
        query: QueryArgs,
    },

    /// Write the rendered catalog as HTML
    Export {
        #[command(flatten)]
        query: QueryArgs,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Interactive session: change selections and expand items line by line
    Browse,

    /// List known brands
    Brands,

    /// List known product types
    Types,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., conversion-rate)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
