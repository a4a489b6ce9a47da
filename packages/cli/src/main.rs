#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI for scoring areas on the renter desirability scale.
//!
//! ```text
//! rent_score score orlando us_cities
//! rent_score score ./areas/austin.toml --profile ./my_profile.toml --json
//! rent_score breakdown orlando
//! rent_score areas
//! rent_score profile
//! ```
//!
//! Areas and profiles are given either as a registered id or as a path to
//! a TOML file.

mod output;

use std::path::Path;

use clap::{Parser, Subcommand};
use rent_score_area::resolve_area;
use rent_score_scoring::registry::{DEFAULT_PROFILE_ID, find_profile};
use rent_score_scoring::{ScoringProfile, calculate_score, score_breakdown};

#[derive(Parser)]
#[command(
    name = "rent_score",
    about = "Score U.S. states and metros for renter desirability (0-10)"
)]
struct Cli {
    /// Scoring profile id or path to a profile TOML file
    #[arg(long, global = true, default_value = DEFAULT_PROFILE_ID)]
    profile: String,

    /// Emit JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the composite score of one or more areas
    Score {
        /// Area ids or paths to area TOML files
        #[arg(required = true)]
        areas: Vec<String>,
    },
    /// Show how each metric contributes to an area's score
    Breakdown {
        /// Area id or path to an area TOML file
        area: String,
    },
    /// List the registered reference areas
    Areas,
    /// Print the active profile's ranges and weights
    Profile,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { areas } => {
            let profile = resolve_profile(&cli.profile)?;
            let mut scores = Vec::with_capacity(areas.len());
            for arg in &areas {
                let area = resolve_area(arg)?;
                let score = calculate_score(&profile, &area)?;
                scores.push(output::AreaScore {
                    area: area.name,
                    score,
                });
            }
            output::print_scores(&scores, cli.json)?;
        }
        Commands::Breakdown { area } => {
            let profile = resolve_profile(&cli.profile)?;
            let area = resolve_area(&area)?;
            let breakdown = score_breakdown(&profile, &area)?;
            output::print_breakdown(&breakdown, cli.json)?;
        }
        Commands::Areas => {
            let areas = rent_score_area::registry::all_areas()?;
            output::print_areas(&areas, cli.json)?;
        }
        Commands::Profile => {
            let profile = resolve_profile(&cli.profile)?;
            output::print_profile(&profile);
        }
    }

    Ok(())
}

/// Resolves a profile argument: a registered id first, then a file path.
fn resolve_profile(arg: &str) -> Result<ScoringProfile, Box<dyn std::error::Error>> {
    if let Some(profile) = find_profile(arg)? {
        log::debug!("Using registered profile '{arg}'");
        return Ok(profile);
    }

    let path = Path::new(arg);
    if path.is_file() {
        return Ok(ScoringProfile::load(path)?);
    }

    Err(format!("Unknown profile '{arg}': not a registered id or a file").into())
}
