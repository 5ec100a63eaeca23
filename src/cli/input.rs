//! Reading command input: slug lists and property attribute files.

use anyhow::{Context, Result};
use std::io::{self, Read};
use std::path::Path;

use super::args::PropertyArgs;
use acreage_seo::PropertyAttributes;

/// Read a whole file, or stdin when the path is `-`.
fn read_source(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut content = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        return Ok(content);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Read slugs, one per line.
pub fn read_slugs(path: &Path) -> Result<Vec<String>> {
    Ok(parse_slug_list(&read_source(path)?))
}

/// Split a slug list, skipping blank lines and `#` comments.
pub fn parse_slug_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

/// Assemble listing attributes from `--data` and individual flags.
///
/// Returns `None` when neither a data file nor any attribute flag is given,
/// so the slug-only derivation applies.
pub fn property_attributes(args: &PropertyArgs) -> Result<Option<PropertyAttributes>> {
    let mut attrs = match &args.data {
        Some(path) => {
            let content = read_source(path)?;
            serde_json::from_str::<PropertyAttributes>(&content)
                .with_context(|| format!("Invalid property data in {}", path.display()))?
        }
        None => PropertyAttributes::default(),
    };

    let has_flags = apply_flags(&mut attrs, args);
    if args.data.is_none() && !has_flags {
        return Ok(None);
    }
    Ok(Some(attrs))
}

/// Overlay flag values onto `attrs`. Returns whether any flag was set.
fn apply_flags(attrs: &mut PropertyAttributes, args: &PropertyArgs) -> bool {
    let mut any = false;

    fn set<T: Clone>(target: &mut Option<T>, value: &Option<T>, any: &mut bool) {
        if let Some(value) = value {
            *target = Some(value.clone());
            *any = true;
        }
    }

    set(&mut attrs.city, &args.city, &mut any);
    set(&mut attrs.state, &args.state, &mut any);
    set(&mut attrs.acres, &args.acres, &mut any);
    set(&mut attrs.price, &args.price, &mut any);
    set(&mut attrs.zip, &args.zip, &mut any);
    set(&mut attrs.latitude, &args.lat, &mut any);
    set(&mut attrs.longitude, &args.lng, &mut any);

    if !args.images.is_empty() {
        attrs.images = Some(args.images.clone());
        any = true;
    }

    any
}
