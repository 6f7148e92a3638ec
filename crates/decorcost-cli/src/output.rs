//! Output formatting module

use decorcost_app::app::EstimationOutcome;
use decorcost_domain::model::{Catalog, TierEstimate, VisionAnalysis};
use decorcost_types::{OutputFormat, Result, Tier};
use serde_json::json;

const RULE_WIDTH: usize = 70;

/// Whole amounts without decimals, fractional ones with two
fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}

fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent * 100.0)
}

fn truncate(name: &str, width: usize) -> String {
    name.chars().take(width).collect()
}

pub fn output_estimate(output_format: OutputFormat, outcome: &EstimationOutcome, currency: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(&outcome.report)?;
        println!("{}", content);
        return Ok(());
    }

    print_vision_summary(outcome.analysis());

    println!("\n{}", "=".repeat(RULE_WIDTH));
    println!("ESTIMATED COST BREAKDOWN");
    println!("{}", "=".repeat(RULE_WIDTH));
    println!(
        "Catalog: {} ({} entries, {} item(s) not in catalog)",
        outcome.catalog_source,
        outcome.catalog_size,
        outcome.unmapped_count()
    );

    for (tier, estimate) in outcome.estimate().tiers() {
        print_tier(tier, estimate, currency);
    }
    println!("\n{}", "=".repeat(RULE_WIDTH));

    Ok(())
}

fn print_vision_summary(analysis: &VisionAnalysis) {
    println!("\nVision Analysis");
    println!("===============");
    println!("Room type:       {}", analysis.room_type.as_deref().unwrap_or("Unknown"));
    println!("Style:           {}", analysis.style_guess.as_deref().unwrap_or("Unknown"));
    if let Some(ref guess) = analysis.quality_tier_guess {
        println!(
            "Quality tier:    {} (confidence {:.0}%)",
            guess.tier,
            guess.confidence * 100.0
        );
    }

    println!("\nComplexity flags:");
    for (name, set) in analysis.complexity_flags.named() {
        println!("- {}: {}", name, set);
    }

    if !analysis.cost_saving_points.is_empty() {
        println!("\nCost saving advice:");
        for point in &analysis.cost_saving_points {
            println!("* {}", point);
        }
    }

    if !analysis.buying_recommendations.is_empty() {
        println!("\nBuying recommendations:");
        for rec in &analysis.buying_recommendations {
            println!(
                "* {}: buy at {}. Tip: {}",
                if rec.item_category.is_empty() { "General" } else { rec.item_category.as_str() },
                if rec.store_suggestion.is_empty() { "N/A" } else { rec.store_suggestion.as_str() },
                rec.price_tip
            );
        }
    }
}

fn print_tier(tier: Tier, estimate: &TierEstimate, currency: &str) {
    println!("\n--- {} TIER ---", tier.as_str().to_uppercase());
    println!("{:<30} | {:<5} | {:<14} | {:<14}", "Item", "Qty", "Unit", "Total");
    println!("{}", "-".repeat(RULE_WIDTH));

    for item in &estimate.items {
        println!(
            "{:<30} | {:<5} | {} {:<10} | {} {:<10}",
            truncate(&item.name, 30),
            item.quantity,
            currency,
            format_amount(item.unit_price),
            currency,
            format_amount(item.cost)
        );
    }

    println!("{}", "-".repeat(RULE_WIDTH));
    let label_width = 48;
    println!("{:<label_width$} : {} {}", "Subtotal", currency, format_amount(estimate.subtotal));
    println!(
        "{:<label_width$} : {} {}",
        format!("Labor ({})", format_percent(estimate.labor_percent)),
        currency,
        estimate.labor
    );
    println!(
        "{:<label_width$} : {} {}",
        format!("Contingency ({})", format_percent(estimate.contingency_percent)),
        currency,
        estimate.contingency
    );
    println!("{:<label_width$} : {} {}", "TOTAL ESTIMATE", currency, format_amount(estimate.total));
}

pub fn output_resolutions(output_format: OutputFormat, resolutions: &[(&str, Option<&str>, bool)]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let rows: Vec<_> = resolutions
            .iter()
            .map(|(name, key, priced)| json!({"name": name, "catalog_key": key, "priced": priced}))
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:<30} | {:<24} | Priced", "Item", "Catalog key");
    println!("{}", "-".repeat(RULE_WIDTH));
    for (name, key, priced) in resolutions {
        println!(
            "{:<30} | {:<24} | {}",
            truncate(name, 30),
            key.unwrap_or("(none)"),
            if *priced { "yes" } else { "no" }
        );
    }
    Ok(())
}

pub fn output_catalog(output_format: OutputFormat, source: &str, catalog: &Catalog, currency: &str) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    println!("\nCatalog ({}, {} entries)", source, catalog.len());
    println!(
        "{:<24} | {:>14} | {:>14} | {:>14}",
        "Key",
        Tier::Economy.as_str(),
        Tier::Standard.as_str(),
        Tier::Premium.as_str()
    );
    println!("{}", "-".repeat(RULE_WIDTH + 4));
    for (key, entry) in catalog.sorted_entries() {
        let prices = Tier::ALL.map(|tier| format!("{} {}", currency, format_amount(entry.price(tier))));
        println!(
            "{:<24} | {:>14} | {:>14} | {:>14}",
            key, prices[0], prices[1], prices[2]
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(48000.0), "48000");
        assert_eq!(format_amount(3000.5), "3000.50");
        assert_eq!(format_amount(0.0), "0");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.15000000000000002), "15%");
        assert_eq!(format_percent(0.25), "25%");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Dining Table (Not in catalog)", 12), "Dining Table");
    }
}
