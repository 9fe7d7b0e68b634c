//! Free-text parameter extraction
//!
//! Scans a plain-language dosing scenario for the three numbers the
//! simulator needs. Extraction is lexical: each parameter has one fixed
//! pattern, matched case-insensitively where the unit cue warrants it, and
//! the first (leftmost) occurrence wins.
//!
//! | Parameter | Cue | Example |
//! |-----------|-----|---------|
//! | C0 | integer followed by `mg` | `95 mg/L` |
//! | k | `k = <decimal>` | `k = 0.18` |
//! | τ | integer followed by `hour` | `every 6 hours` |
//!
//! Absence of a match is a valid state, not an error: [`extract`] always
//! succeeds and reports what it found via `Option` fields. Converting to a
//! validated [`DoseParameters`] is where missing fields become errors.
//!
//! ```rust
//! use pharmakin::extract::extract;
//!
//! let text = "The initial plasma concentration was 95 mg/L. k = 0.18. \
//!             Repeated dosing every 6 hours.";
//! let params = extract(text);
//!
//! assert_eq!(params.c0, Some(95.0));
//! assert_eq!(params.k, Some(0.18));
//! assert_eq!(params.tau, Some(6.0));
//! ```

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::error::PharmakinError;
use crate::simulator::DoseParameters;

/// Errors that can occur during parameter extraction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A required parameter was not found in the input text
    #[error("Missing parameter: {field}")]
    MissingParameter { field: Field },
}

/// Target field of a lexical pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// Initial plasma concentration (mg/L)
    C0,
    /// Elimination rate constant (1/hour)
    K,
    /// Dosing interval (hours)
    Tau,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::C0 => write!(f, "initial concentration (C0)"),
            Field::K => write!(f, "elimination rate constant (k)"),
            Field::Tau => write!(f, "dosing interval (tau)"),
        }
    }
}

/// One lexical matcher: a pattern and the field its first capture feeds
struct PatternSpec {
    field: Field,
    regex: Regex,
}

lazy_static! {
    /// Ordered pattern table, one matcher per extractable field
    static ref PATTERNS: Vec<PatternSpec> = vec![
        PatternSpec {
            field: Field::C0,
            regex: Regex::new(r"(\d+)\s*mg").expect("invalid C0 pattern"),
        },
        PatternSpec {
            field: Field::K,
            regex: Regex::new(r"(?i)k\s*=\s*([0-9]*\.?[0-9]+)").expect("invalid k pattern"),
        },
        PatternSpec {
            field: Field::Tau,
            regex: Regex::new(r"(?i)(\d+)\s*hour").expect("invalid tau pattern"),
        },
    ];
}

/// Parameters recovered from free text
///
/// A field is present only if its pattern matched; no range validation
/// happens at this layer. Use [`into_dose_parameters`](Self::into_dose_parameters)
/// to obtain a validated set the simulator accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedParameters {
    /// Initial plasma concentration (mg/L), if found
    pub c0: Option<f64>,
    /// Elimination rate constant (1/hour), if found
    pub k: Option<f64>,
    /// Dosing interval (hours), if found
    pub tau: Option<f64>,
}

impl ExtractedParameters {
    fn set(&mut self, field: Field, value: f64) {
        match field {
            Field::C0 => self.c0 = Some(value),
            Field::K => self.k = Some(value),
            Field::Tau => self.tau = Some(value),
        }
    }

    /// Value of a field, if its pattern matched
    pub fn get(&self, field: Field) -> Option<f64> {
        match field {
            Field::C0 => self.c0,
            Field::K => self.k,
            Field::Tau => self.tau,
        }
    }

    /// Whether all three parameters were found
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Fields whose patterns did not match, in table order
    pub fn missing(&self) -> Vec<Field> {
        [Field::C0, Field::K, Field::Tau]
            .into_iter()
            .filter(|&field| self.get(field).is_none())
            .collect()
    }

    /// Convert into validated [`DoseParameters`]
    ///
    /// # Errors
    /// [`ExtractError::MissingParameter`] naming the first absent field, or
    /// [`SimulationError::InvalidParameter`](crate::simulator::SimulationError::InvalidParameter)
    /// when a field was found but is non-positive.
    pub fn into_dose_parameters(self) -> Result<DoseParameters, PharmakinError> {
        let c0 = self
            .c0
            .ok_or(ExtractError::MissingParameter { field: Field::C0 })?;
        let k = self
            .k
            .ok_or(ExtractError::MissingParameter { field: Field::K })?;
        let tau = self
            .tau
            .ok_or(ExtractError::MissingParameter { field: Field::Tau })?;

        Ok(DoseParameters::new(c0, k, tau)?)
    }
}

/// Extract dosing parameters from free text
///
/// Pure function of the input: scans the pattern table against `text`, takes
/// the leftmost match for each field, and parses its first capture group as
/// a real number. Fields with no match stay `None`.
pub fn extract(text: &str) -> ExtractedParameters {
    let mut params = ExtractedParameters::default();

    for spec in PATTERNS.iter() {
        if let Some(caps) = spec.regex.captures(text) {
            if let Ok(value) = caps[1].parse::<f64>() {
                params.set(spec.field, value);
            }
        }
    }

    params
}
