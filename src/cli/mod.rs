//! Command-line interface module.

mod args;
mod input;

pub use args::Cli;

use args::{Commands, Format, OutputArgs};

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::Path;

use acreage_seo::config::{CONFIG_FILE, SiteConfig};
use acreage_seo::seo::head::render_head;
use acreage_seo::seo::og::OgDefaults;
use acreage_seo::{LocationAttributes, SeoGenerator, SeoMetadata, debug, log};

/// Load configuration for this invocation, applying CLI overrides.
pub fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let cwd = std::env::current_dir().context("Failed to get current working directory")?;
    let name = cli.config.as_deref().unwrap_or(Path::new(CONFIG_FILE));
    let mut config = SiteConfig::load(name, &cwd, cli.config.is_some())?;

    if let Some(url) = &cli.site_url {
        config.site.url = url.clone();
        config.validate()?;
    }

    Ok(config)
}

/// Execute the selected command.
pub fn run(cli: &Cli, config: &SiteConfig) -> Result<()> {
    let generator = SeoGenerator::from_config(config);
    let og = OgDefaults::from_config(config);

    let pages: Vec<SeoMetadata> = match &cli.command {
        Commands::Slug { slug, .. } => vec![generator.generate_from_slug(slug)],
        Commands::Property { slug, property, .. } => {
            let attrs = input::property_attributes(property)?;
            if attrs.is_none() {
                debug!("seo"; "no listing attributes given, deriving from slug");
            }
            vec![generator.generate_for_property(slug, attrs.as_ref())]
        }
        Commands::Business {
            slug,
            name,
            city,
            state,
            description,
            ..
        } => {
            let location = LocationAttributes {
                name: name.clone(),
                city: city.clone(),
                state: state.clone(),
                description: description.clone(),
            };
            vec![generator.generate_for_local_business(slug, &location)]
        }
        Commands::Batch { input: path, .. } => {
            let slugs = input::read_slugs(path)?;
            log!("batch"; "{} slug{}", slugs.len(), if slugs.len() == 1 { "" } else { "s" });
            slugs
                .iter()
                .map(|slug| generator.generate_from_slug(slug))
                .collect()
        }
    };

    let batch = matches!(cli.command, Commands::Batch { .. });
    let out = cli.command.output();
    let formatted = format_pages(&pages, batch, out, &og)?;
    write_output(&formatted, out)
}

/// Format pages per `--format`. Batches become a JSON array; single pages a
/// JSON object.
fn format_pages(
    pages: &[SeoMetadata],
    batch: bool,
    args: &OutputArgs,
    og: &OgDefaults<'_>,
) -> Result<String> {
    match args.format {
        Format::Json => {
            let value = match pages {
                [single] if !batch => serde_json::to_value(single)?,
                _ => serde_json::to_value(pages)?,
            };
            let json = if args.pretty {
                serde_json::to_string_pretty(&value)?
            } else {
                serde_json::to_string(&value)?
            };
            Ok(json)
        }
        Format::Head => Ok(pages
            .iter()
            .map(|page| render_head(page, og))
            .collect::<Vec<_>>()
            .join("\n")
            .trim_end()
            .to_string()),
    }
}

fn write_output(formatted: &str, args: &OutputArgs) -> Result<()> {
    match &args.output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            writeln!(file, "{formatted}")?;
            log!("output"; "wrote {}", path.display());
        }
        None => println!("{formatted}"),
    }
    Ok(())
}
