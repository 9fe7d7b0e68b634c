pub mod error;
pub mod extract;
pub mod simulator;

pub use crate::extract::{extract, ExtractError, ExtractedParameters, Field};
pub use crate::simulator::{
    simulate, DoseParameters, SimulationError, SimulationOptions, SimulationResult,
};
pub use error::PharmakinError;

/// Run the full text-to-profile pipeline: extract, validate, simulate
///
/// Convenience wrapper chaining [`extract`] → [`ExtractedParameters::into_dose_parameters`]
/// → [`simulate`]. Either all three parameters are found and valid and a full
/// profile is returned, or the run aborts with an error naming the missing or
/// invalid parameter — no partial results.
///
/// # Example
///
/// ```rust
/// use pharmakin::{run, SimulationOptions};
///
/// let text = "The initial plasma concentration was 95 mg/L. k = 0.18. \
///             Repeated dosing every 6 hours.";
/// let result = run(text, &SimulationOptions::default()).unwrap();
///
/// assert_eq!(result.len(), 49);
/// ```
pub fn run(text: &str, options: &SimulationOptions) -> Result<SimulationResult, PharmakinError> {
    let params = extract::extract(text).into_dose_parameters()?;
    Ok(simulator::simulate(&params, options))
}

pub mod prelude {
    pub use crate::extract::{extract, ExtractedParameters, Field};
    pub use crate::simulator::{simulate, DoseParameters, SimulationOptions, SimulationResult};
    pub use crate::{run, PharmakinError};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_missing_parameter() {
        let err = run("no numbers here", &SimulationOptions::default()).unwrap_err();
        assert!(matches!(err, PharmakinError::Extract(_)));
    }

    #[test]
    fn test_run_invalid_parameter() {
        let err = run("95 mg, k = 0, every 6 hours", &SimulationOptions::default()).unwrap_err();
        assert!(matches!(err, PharmakinError::Simulation(_)));
    }
}
