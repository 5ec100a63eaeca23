//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Generate SEO head metadata for AcreageSale pages
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Override the site base URL used for canonical links
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Derive metadata from a URL slug
    #[command(visible_alias = "s")]
    Slug {
        /// URL path segment, e.g. `land-for-sale-in-iowa`
        slug: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Derive metadata for a property listing page
    #[command(visible_alias = "p")]
    Property {
        /// URL path segment, e.g. `10-acres-austin-tx`
        slug: String,

        #[command(flatten)]
        property: PropertyArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Derive metadata for a local business page
    #[command(visible_alias = "b")]
    Business {
        /// URL path segment, e.g. `austin-office`
        slug: String,

        /// Business name
        #[arg(long)]
        name: String,

        /// City served
        #[arg(long)]
        city: String,

        /// State served
        #[arg(long)]
        state: String,

        /// Custom meta description (generated when omitted)
        #[arg(long)]
        description: Option<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Derive metadata for many slugs, one per line
    Batch {
        /// File with one slug per line. Use `-` (default) to read from stdin.
        #[arg(value_name = "PATH", default_value = "-")]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Property listing attributes.
///
/// Flags override values loaded from `--data`.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct PropertyArgs {
    /// JSON file with listing attributes (`-` for stdin)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    /// Lot size in acres
    #[arg(long, value_parser = parse_finite)]
    pub acres: Option<f64>,

    /// Asking price in USD
    #[arg(long, value_parser = parse_finite)]
    pub price: Option<f64>,

    /// Postal code
    #[arg(long)]
    pub zip: Option<String>,

    #[arg(long, allow_hyphen_values = true, value_parser = parse_finite)]
    pub lat: Option<f64>,

    #[arg(long, allow_hyphen_values = true, value_parser = parse_finite)]
    pub lng: Option<f64>,

    /// Image URL (repeatable)
    #[arg(long = "image", value_name = "URL")]
    pub images: Vec<String>,
}

/// Parse a finite number; `NaN` and `inf` are rejected.
fn parse_finite(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("`{s}` is not a finite number")),
        Err(e) => Err(e.to_string()),
    }
}

/// Output format.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
    /// Metadata as JSON
    #[default]
    Json,
    /// Rendered `<head>` tags
    Head,
}

/// Shared output arguments
#[derive(clap::Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    pub format: Format,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

impl Commands {
    pub fn output(&self) -> &OutputArgs {
        match self {
            Self::Slug { output, .. }
            | Self::Property { output, .. }
            | Self::Business { output, .. }
            | Self::Batch { output, .. } => output,
        }
    }
}
