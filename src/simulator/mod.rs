//! Multi-dose superposition simulation
//!
//! Predicts a plasma concentration-time profile for repeated fixed-interval
//! dosing of a one-compartment drug with first-order elimination. Each dose
//! administered by evaluation time `t` contributes an independent exponential
//! decay, and the total concentration is the linear superposition of those
//! contributions:
//!
//! ```text
//! C(t) = Σ_d  C0 · exp(-k · (t - d))      for dose times d = 0, τ, 2τ, … ≤ t
//! ```
//!
//! The steady-state concentration is the average-dosing-rate approximation
//! `Css = (C0 / τ) / k`, reported alongside the profile.
//!
//! # Usage
//!
//! ```rust
//! use pharmakin::simulator::{simulate, DoseParameters, SimulationOptions};
//!
//! let params = DoseParameters::new(95.0, 0.18, 6.0).unwrap();
//! let result = simulate(&params, &SimulationOptions::default());
//!
//! assert_eq!(result.concentrations[0], 95.0);
//! println!("Css ≈ {:.2} mg/L", result.steady_state.unwrap());
//! ```
//!
//! This is an illustrative model, not a pharmacologically validated one: no
//! absorption phase, no distribution compartments, no nonlinear elimination.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Slack when deciding whether a dose at `d` has been administered by time
/// `t`, covering accumulation error from repeated `d += tau` with
/// non-integer τ.
const DOSE_TIME_EPS: f64 = 1e-9;

/// Errors that can occur during dosing simulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// A dosing parameter is non-positive or non-finite
    #[error("Invalid parameter: {param} = {value}")]
    InvalidParameter { param: &'static str, value: f64 },

    /// Error while writing CSV output
    #[error("CSV error: {0}")]
    CsvError(String),
}

/// Validated dosing parameters for a one-compartment simulation
///
/// Construction fails fast on degenerate values: every field must be strictly
/// positive and finite, so downstream math can never emit NaN or negative
/// concentrations. The dosing interval τ is real-valued; dose times are
/// enumerated by explicit floating-point stepping, so τ is not restricted to
/// whole hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoseParameters {
    c0: f64,
    k: f64,
    tau: f64,
}

impl DoseParameters {
    /// Validate and build a parameter set
    ///
    /// # Arguments
    /// * `c0` - Initial plasma concentration after one dose (mg/L)
    /// * `k` - First-order elimination rate constant (1/hour)
    /// * `tau` - Dosing interval (hours)
    ///
    /// # Errors
    /// [`SimulationError::InvalidParameter`] naming the offending field when
    /// a value is non-positive, NaN, or infinite.
    pub fn new(c0: f64, k: f64, tau: f64) -> Result<Self, SimulationError> {
        for (param, value) in [("c0", c0), ("k", k), ("tau", tau)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SimulationError::InvalidParameter { param, value });
            }
        }
        Ok(Self { c0, k, tau })
    }

    /// Initial plasma concentration (mg/L)
    pub fn c0(&self) -> f64 {
        self.c0
    }

    /// Elimination rate constant (1/hour)
    pub fn k(&self) -> f64 {
        self.k
    }

    /// Dosing interval (hours)
    pub fn tau(&self) -> f64 {
        self.tau
    }

    /// Analytic steady-state concentration, `(C0 / τ) / k`
    pub fn steady_state(&self) -> f64 {
        (self.c0 / self.tau) / self.k
    }
}

/// Simulation configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOptions {
    /// Simulation horizon in whole hours (default: 48)
    ///
    /// The profile contains `horizon_hours + 1` points, one per hour from
    /// t = 0 to t = horizon_hours inclusive.
    pub horizon_hours: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self { horizon_hours: 48 }
    }
}

impl SimulationOptions {
    /// Set the simulation horizon in hours
    pub fn with_horizon(mut self, hours: usize) -> Self {
        self.horizon_hours = hours;
        self
    }
}

/// Simulated concentration-time profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Evaluation times, whole hours from 0 to the horizon inclusive
    pub times: Vec<f64>,
    /// Total plasma concentration at each time, aligned with `times`
    pub concentrations: Vec<f64>,
    /// Analytic steady-state concentration (absent when k ≤ 0)
    pub steady_state: Option<f64>,
}

impl SimulationResult {
    /// Number of timepoints in the profile
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the profile has no timepoints
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Maximum concentration over the simulated horizon
    pub fn cmax(&self) -> f64 {
        self.concentrations.iter().cloned().fold(0.0_f64, f64::max)
    }

    /// Concentration at the final timepoint
    pub fn trough(&self) -> f64 {
        self.concentrations.last().copied().unwrap_or(0.0)
    }

    /// Write the profile as a `time,concentration` CSV table
    ///
    /// # Errors
    /// [`SimulationError::CsvError`] if the underlying writer fails.
    pub fn write_csv<W: std::io::Write>(&self, writer: W) -> Result<(), SimulationError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);

        writer
            .write_record(["time", "concentration"])
            .map_err(|e| SimulationError::CsvError(e.to_string()))?;

        for (t, c) in self.times.iter().zip(self.concentrations.iter()) {
            writer
                .write_record([t.to_string(), c.to_string()])
                .map_err(|e| SimulationError::CsvError(e.to_string()))?;
        }

        writer
            .flush()
            .map_err(|e| SimulationError::CsvError(e.to_string()))?;
        Ok(())
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "╔══════════════════════════════════════╗")?;
        writeln!(f, "║          PK Simulation               ║")?;
        writeln!(f, "╠══════════════════════════════════════╣")?;
        writeln!(f, "║ Points:  {:<27} ║", self.len())?;
        writeln!(f, "║ Cmax:    {:<27.4} ║", self.cmax())?;
        writeln!(f, "║ Trough:  {:<27.4} ║", self.trough())?;
        if let Some(css) = self.steady_state {
            writeln!(f, "║ Css:     {:<27.4} ║", css)?;
        }
        writeln!(f, "╚══════════════════════════════════════╝")?;
        Ok(())
    }
}

/// Single-dose decay contribution at `t` hours post-dose
fn decay(c0: f64, k: f64, t: f64) -> f64 {
    c0 * (-k * t).exp()
}

/// Core superposition sum over the dosing schedule
///
/// This is **crate-internal** — callers go through [`simulate`], which only
/// accepts validated [`DoseParameters`]. Unlike the public path, this
/// tolerates `k <= 0` by omitting the steady-state value rather than
/// erroring, so the boundary behavior stays testable in isolation.
pub(crate) fn superpose(c0: f64, k: f64, tau: f64, horizon_hours: usize) -> SimulationResult {
    let mut times = Vec::with_capacity(horizon_hours + 1);
    let mut concentrations = Vec::with_capacity(horizon_hours + 1);

    for hour in 0..=horizon_hours {
        let t = hour as f64;

        // Doses administered by time t: 0, τ, 2τ, … ≤ t
        let mut total = 0.0;
        let mut dose_time = 0.0;
        while dose_time <= t + DOSE_TIME_EPS {
            total += decay(c0, k, (t - dose_time).max(0.0));
            dose_time += tau;
        }

        times.push(t);
        concentrations.push(total);
    }

    let steady_state = (k > 0.0).then(|| (c0 / tau) / k);

    SimulationResult {
        times,
        concentrations,
        steady_state,
    }
}

/// Simulate repeated fixed-interval dosing over a whole-hour horizon
///
/// Evaluates the superposition profile at each whole hour from t = 0 to
/// `options.horizon_hours` inclusive. The result always satisfies:
///
/// - `times.len() == concentrations.len() == horizon_hours + 1`
/// - `concentrations[0] == params.c0()` (only the t = 0 dose has been given)
/// - every concentration is non-negative
/// - `steady_state` is present (parameters are validated, so k > 0)
///
/// Pure function: identical arguments yield identical results.
pub fn simulate(params: &DoseParameters, options: &SimulationOptions) -> SimulationResult {
    superpose(params.c0(), params.k(), params.tau(), options.horizon_hours)
}
