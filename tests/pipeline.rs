//! End-to-end pipeline tests
//!
//! Exercises the public API from raw scenario text through to the simulated
//! concentration-time profile.

use approx::assert_relative_eq;
use pharmakin::prelude::*;

const SCENARIO: &str = "The initial plasma concentration was 95 mg/L. k = 0.18. \
                        Repeated dosing every 6 hours.";

#[test]
fn test_scenario_extraction() {
    let extracted = extract(SCENARIO);
    assert_eq!(extracted.c0, Some(95.0));
    assert_eq!(extracted.k, Some(0.18));
    assert_eq!(extracted.tau, Some(6.0));
}

#[test]
fn test_scenario_full_run() {
    let result = run(SCENARIO, &SimulationOptions::default()).unwrap();

    assert_eq!(result.times.len(), 49);
    assert_eq!(result.concentrations.len(), 49);
    assert_eq!(result.concentrations[0], 95.0);

    // Css = (95 / 6) / 0.18
    let css = result.steady_state.unwrap();
    assert_relative_eq!(css, (95.0 / 6.0) / 0.18, epsilon = 1e-10);
    assert_relative_eq!(css, 87.96, epsilon = 0.01);
}

#[test]
fn test_manual_parameters_match_run() {
    let params = DoseParameters::new(95.0, 0.18, 6.0).unwrap();
    let options = SimulationOptions::default();

    let direct = simulate(&params, &options);
    let piped = run(SCENARIO, &options).unwrap();

    assert_eq!(direct, piped);
}

#[test]
fn test_missing_parameter_reports_field() {
    let err = run("The dose was 95 mg, repeated every 6 hours.", &SimulationOptions::default())
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Missing parameter: elimination rate constant (k)"
    );
}

#[test]
fn test_result_serde_round_trip() {
    let result = run(SCENARIO, &SimulationOptions::default().with_horizon(12)).unwrap();

    let json = serde_json::to_string(&result).unwrap();
    let back: SimulationResult = serde_json::from_str(&json).unwrap();

    assert_eq!(result, back);
}

#[test]
fn test_custom_horizon() {
    let result = run(SCENARIO, &SimulationOptions::default().with_horizon(24)).unwrap();
    assert_eq!(result.len(), 25);
    assert_eq!(*result.times.last().unwrap(), 24.0);
}

#[test]
fn test_accumulation_toward_plateau() {
    // Mild elimination relative to the dosing rate: successive troughs rise
    // as doses accumulate.
    let result = run(SCENARIO, &SimulationOptions::default()).unwrap();

    let trough_1 = result.concentrations[5];
    let trough_2 = result.concentrations[11];
    let trough_3 = result.concentrations[17];

    assert!(trough_2 > trough_1);
    assert!(trough_3 > trough_2);
}
