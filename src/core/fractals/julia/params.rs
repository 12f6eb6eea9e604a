use crate::core::fractals::julia::errors::JuliaError;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;
pub const DEFAULT_ESCAPE_RADIUS_SQUARED: f64 = 4.0;
pub const DEFAULT_INTEREST_CUTOFF: u32 = 10;

/// Tuning of the Julia interest heuristic.
///
/// The defaults are empirical and must stay as they are: callers rely on the
/// same `c` being judged the same way everywhere.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InterestThresholds {
    max_iterations: u32,
    escape_radius_squared: f64,
    interest_cutoff: u32,
}

impl Default for InterestThresholds {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            escape_radius_squared: DEFAULT_ESCAPE_RADIUS_SQUARED,
            interest_cutoff: DEFAULT_INTEREST_CUTOFF,
        }
    }
}

impl InterestThresholds {
    pub fn new(
        max_iterations: u32,
        escape_radius_squared: f64,
        interest_cutoff: u32,
    ) -> Result<Self, JuliaError> {
        let mut thresholds = Self::default();
        thresholds.set_max_iterations(max_iterations)?;
        thresholds.set_escape_radius_squared(escape_radius_squared)?;
        thresholds.set_interest_cutoff(interest_cutoff);

        Ok(thresholds)
    }

    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    pub fn escape_radius_squared(&self) -> f64 {
        self.escape_radius_squared
    }

    /// Escapes at or before this step are boring.
    pub fn interest_cutoff(&self) -> u32 {
        self.interest_cutoff
    }

    pub fn set_max_iterations(&mut self, max_iterations: u32) -> Result<(), JuliaError> {
        if max_iterations == 0 {
            return Err(JuliaError::ZeroMaxIterations);
        }

        self.max_iterations = max_iterations;
        Ok(())
    }

    pub fn set_escape_radius_squared(&mut self, escape_radius_squared: f64) -> Result<(), JuliaError> {
        if !(escape_radius_squared.is_finite() && escape_radius_squared > 0.0) {
            return Err(JuliaError::InvalidEscapeRadius(escape_radius_squared));
        }

        self.escape_radius_squared = escape_radius_squared;
        Ok(())
    }

    pub fn set_interest_cutoff(&mut self, interest_cutoff: u32) {
        self.interest_cutoff = interest_cutoff
    }
}
