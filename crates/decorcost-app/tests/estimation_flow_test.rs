//! End-to-end estimation from saved vision output

use std::fs;
use std::path::PathBuf;

use decorcost_app::app::{estimate_from_response, estimate_from_vision_file, EstimationOptions};
use decorcost_app::config::Config;
use decorcost_domain::Catalog;
use decorcost_types::{Error, OutputFormat};
use tempfile::tempdir;

const VISION_RESPONSE: &str = r#"```json
{
  "room_type": "Conference Room",
  "style_guess": "Modern",
  "quality_tier_guess": {"tier": "mid", "confidence": 0.6},
  "items": [
    {"category": "furniture", "name": "Sofa", "quantity": 2, "confidence": 0.9},
    {"category": "construction", "name": "Door Closer Hardware", "quantity": 1},
    {"category": "furniture", "name": "Dining Table"}
  ],
  "complexity_flags": {
    "false_ceiling": true,
    "wall_paneling": true,
    "built_in_storage": false,
    "custom_carpentry": false
  },
  "cost_saving_points": ["Use a laminate table top"]
}
```"#;

fn write_vision(dir: &std::path::Path) -> PathBuf {
    let path = dir.join("vision.json");
    fs::write(&path, VISION_RESPONSE).unwrap();
    path
}

#[test]
fn test_estimate_with_bundled_catalog() {
    let dir = tempdir().unwrap();
    let vision = write_vision(dir.path());

    let outcome =
        estimate_from_vision_file(&vision, &Config::default(), &EstimationOptions::new()).unwrap();

    assert_eq!(outcome.catalog_source, "bundled");
    assert_eq!(outcome.unmapped_count(), 1);

    let economy = &outcome.estimate().economy;
    let names: Vec<_> = economy.items.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Sofa", "Door Closer Hardware", "Dining Table (Not in catalog)"]
    );
    // 2 x 20000 + 1 x 1200
    assert_eq!(economy.subtotal, 41200.0);
    assert!((economy.labor_percent - 0.15).abs() < 1e-9);
    assert_eq!(economy.labor, 6180);
    assert_eq!(economy.contingency, 4120);
    assert_eq!(economy.total, 41200.0 + 6180.0 + 4120.0);
}

#[test]
fn test_catalog_override_and_report() {
    let dir = tempdir().unwrap();
    let vision = write_vision(dir.path());

    let catalog = dir.path().join("prices.json");
    fs::write(&catalog, r#"{"sofa_3_seater": {"economy": 100, "standard": 200, "premium": 300}}"#)
        .unwrap();
    let output = dir.path().join("out").join("report.json");

    let options = EstimationOptions::new()
        .with_catalog(catalog.clone())
        .with_output(output.clone());
    let outcome = estimate_from_vision_file(&vision, &Config::default(), &options).unwrap();

    assert_eq!(outcome.catalog_size, 1);
    assert_eq!(outcome.catalog_source, catalog.display().to_string());
    assert_eq!(outcome.unmapped_count(), 2);
    assert_eq!(outcome.estimate().premium.subtotal, 600.0);

    let saved: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(saved["vision_analysis"]["room_type"], "Conference Room");
    assert_eq!(saved["cost_estimates"]["standard"]["subtotal"], 400.0);
}

#[test]
fn test_configured_catalog_missing_degrades() {
    let dir = tempdir().unwrap();
    let vision = write_vision(dir.path());
    let config = Config {
        catalog_path: Some(dir.path().join("missing.json")),
        ..Config::default()
    };

    let outcome = estimate_from_vision_file(&vision, &config, &EstimationOptions::new()).unwrap();
    assert_eq!(outcome.catalog_size, 0);
    assert_eq!(outcome.unmapped_count(), 3);
    for (_, tier) in outcome.estimate().tiers() {
        assert_eq!(tier.total, 0.0);
        assert_eq!(tier.items.len(), 3);
    }
}

#[test]
fn test_rejected_response() {
    let result = estimate_from_response(
        r#"{"error": "API_LIMIT_REACHED", "message": "Please wait 60s."}"#,
        &Catalog::empty(),
    );
    assert!(matches!(result, Err(Error::VisionRejected { .. })));
}

#[test]
fn test_config_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");

    assert_eq!(Config::load_from(&path).unwrap(), Config::default());

    let config = Config {
        catalog_path: Some(PathBuf::from("/srv/catalog.toml")),
        output_format: OutputFormat::Json,
        currency: "USD".to_string(),
    };
    config.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), config);
}
