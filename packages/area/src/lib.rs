#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Area record loading and validation.
//!
//! Areas are plain TOML documents, one area per file. Every entry point in
//! this crate validates the record before returning it, so callers never
//! hand the scorer an area carrying NaN or infinite metric values.
//! Reference areas are embedded at compile time in [`registry`].

pub mod registry;

use std::path::Path;

use rent_score_area_models::{Area, InvalidValueError};
use thiserror::Error;

/// Errors that can occur while loading an area.
#[derive(Debug, Error)]
pub enum AreaError {
    /// Reading the area file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The area document is not valid TOML or does not match the schema.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A metric value is not a finite number.
    #[error("Invalid area '{area}': {source}")]
    InvalidValue {
        /// Name of the area.
        area: String,
        /// The rejected value.
        source: InvalidValueError,
    },

    /// No registered area has the requested id.
    #[error("Unknown area: {id}")]
    UnknownArea {
        /// The id that was looked up.
        id: String,
    },
}

/// Parses and validates a single area from a TOML document.
///
/// # Errors
///
/// Returns an error if the document does not deserialize into an [`Area`]
/// or if any metric value is not finite.
pub fn parse_area(toml_str: &str) -> Result<Area, AreaError> {
    let area: Area = toml::de::from_str(toml_str)?;
    area.validate().map_err(|source| AreaError::InvalidValue {
        area: area.name.clone(),
        source,
    })?;
    Ok(area)
}

/// Reads, parses, and validates an area TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or [`parse_area`] fails.
pub fn load_area(path: &Path) -> Result<Area, AreaError> {
    log::debug!("Loading area from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    let area = parse_area(&contents)?;
    log::info!("Loaded area '{}' from {}", area.name, path.display());
    Ok(area)
}

/// Resolves an area argument: a registered id first, then a file path.
///
/// # Errors
///
/// Returns [`AreaError::UnknownArea`] if `arg` is neither a registered id
/// nor an existing file, or any error from [`load_area`].
pub fn resolve_area(arg: &str) -> Result<Area, AreaError> {
    if let Some(area) = registry::find_area(arg)? {
        return Ok(area);
    }

    let path = Path::new(arg);
    if path.is_file() {
        return load_area(path);
    }

    Err(AreaError::UnknownArea {
        id: arg.to_string(),
    })
}
