//! Text and JSON rendering for CLI results.

use rent_score_area_models::Area;
use rent_score_scoring::ScoringProfile;
use rent_score_scoring_models::ScoreBreakdown;
use serde::Serialize;

/// A single area's composite score, as printed by `score`.
#[derive(Debug, Serialize)]
pub struct AreaScore {
    pub area: String,
    pub score: f64,
}

pub fn print_scores(scores: &[AreaScore], json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(scores)?);
        return Ok(());
    }

    for AreaScore { area, score } in scores {
        println!("The composite score to rent in {area} is {score:.2} / 10");
    }
    Ok(())
}

pub fn print_breakdown(breakdown: &ScoreBreakdown, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(breakdown)?);
        return Ok(());
    }

    println!(
        "{} (profile '{}', total weight {})",
        breakdown.area_name, breakdown.profile_id, breakdown.total_weight
    );
    println!();
    println!(
        "  {:<28} {:>12} {:>10} {:>8} {:>12}",
        "Metric", "Raw", "Score", "Weight", "Contribution"
    );
    for row in &breakdown.metrics {
        println!(
            "  {:<28} {:>12.2} {:>10.2} {:>8.3} {:>12.3}",
            row.metric.as_ref(),
            row.raw_value,
            row.normalized,
            row.weight,
            row.contribution
        );
    }
    println!();
    println!("  Composite score: {:.2} / 10", breakdown.score);
    Ok(())
}

pub fn print_areas(areas: &[(&str, Area)], json: bool) -> Result<(), serde_json::Error> {
    if json {
        let areas: Vec<&Area> = areas.iter().map(|(_, area)| area).collect();
        println!("{}", serde_json::to_string_pretty(&areas)?);
        return Ok(());
    }

    if areas.is_empty() {
        println!("No registered areas.");
        return Ok(());
    }

    for (id, area) in areas {
        println!("  {id:<16} {} ({})", area.name, area.kind);
    }
    Ok(())
}

pub fn print_profile(profile: &ScoringProfile) {
    println!("{} ({})", profile.name(), profile.id());
    if let Some(description) = profile.description() {
        println!("  {description}");
    }
    println!();
    println!(
        "  {:<28} {:>10} {:>10} {:>8} {:>8}",
        "Metric", "Min", "Max", "Better", "Weight"
    );
    for weighted in profile.weighted_metrics() {
        let config = weighted.config;
        println!(
            "  {:<28} {:>10} {:>10} {:>8} {:>8}",
            config.metric().as_ref(),
            config.min(),
            config.max(),
            if config.lower_is_better() { "lower" } else { "higher" },
            weighted.weight
        );
    }
    println!();
    println!("  Total weight: {}", profile.total_weight());
}
