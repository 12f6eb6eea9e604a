use std::ops::ControlFlow;

use crate::core::data::complex::Complex;
use crate::core::fractals::julia::params::InterestThresholds;

/// Step (0-indexed) at which the orbit of zero under `z -> z² + c` first
/// leaves the escape radius, or `None` if it stays bounded for the whole
/// iteration budget.
#[must_use]
pub fn escape_iteration(c: Complex, thresholds: &InterestThresholds) -> Option<u32> {
    let escape_radius_squared = thresholds.escape_radius_squared();

    let orbit = (0..thresholds.max_iterations()).try_fold(Complex::ZERO, |z, iteration| {
        let z = z * z + c;

        if z.magnitude_squared() > escape_radius_squared {
            ControlFlow::Break(iteration)
        } else {
            ControlFlow::Continue(z)
        }
    });

    match orbit {
        ControlFlow::Break(iteration) => Some(iteration),
        ControlFlow::Continue(_) => None,
    }
}

/// Whether `c` is likely to give a Julia set with visible structure.
///
/// Parameters whose orbit escapes early sit far outside the Mandelbrot set
/// and give dust; slow or bounded orbits sit near its boundary.
#[must_use]
pub fn is_interesting(c: Complex, thresholds: &InterestThresholds) -> bool {
    match escape_iteration(c, thresholds) {
        Some(iteration) => iteration > thresholds.interest_cutoff(),
        None => true,
    }
}

/// [`is_interesting`] with the default thresholds.
#[must_use]
pub fn is_julia_c_interesting(cr: f64, ci: f64) -> bool {
    is_interesting(Complex::new(cr, ci), &InterestThresholds::default())
}
