use log::{debug, info};
use rand::Rng;

use crate::core::actions::pick_julia_c::errors::PickError;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::julia::interest::{escape_iteration, is_interesting};
use crate::core::fractals::julia::params::InterestThresholds;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;

/// Region of the parameter plane that holds the whole Mandelbrot set.
pub fn default_search_region() -> ComplexRect {
    ComplexRect::new(Complex::new(-2.0, -1.5), Complex::new(1.0, 1.5))
        .expect("default search region is valid")
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaPick {
    pub c: Complex,
    /// 1-based attempt that produced `c`.
    pub attempts: u32,
    pub escape_iteration: Option<u32>,
}

/// Draws `c` uniformly from `region` until one passes the interest heuristic.
pub fn pick_julia_c<R: Rng + ?Sized>(
    rng: &mut R,
    region: ComplexRect,
    thresholds: &InterestThresholds,
    max_attempts: u32,
) -> Result<JuliaPick, PickError> {
    if max_attempts == 0 {
        return Err(PickError::ZeroAttempts);
    }

    for attempt in 1..=max_attempts {
        let c = region.point_at(rng.random::<f64>(), rng.random::<f64>());

        if is_interesting(c, thresholds) {
            info!("picked Julia constant {c} after {attempt} attempt(s)");

            return Ok(JuliaPick {
                c,
                attempts: attempt,
                escape_iteration: escape_iteration(c, thresholds),
            });
        }

        debug!("rejected {c}");
    }

    Err(PickError::Exhausted {
        attempts: max_attempts,
    })
}
