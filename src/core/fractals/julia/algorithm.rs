use crate::core::actions::scan_interest::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::fractals::julia::interest::is_interesting;
use crate::core::fractals::julia::params::InterestThresholds;
use crate::core::util::pixel_to_complex_coords::{
    PixelToComplexCoordsError, pixel_to_complex_coords,
};

/// Classifies each grid cell's `c` with the Julia interest heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaInterestAlgorithm {
    pixel_rect: PixelRect,
    complex_rect: ComplexRect,
    thresholds: InterestThresholds,
}

impl FractalAlgorithm for JuliaInterestAlgorithm {
    type Success = bool;
    type Failure = PixelToComplexCoordsError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let c = pixel_to_complex_coords(pixel, self.pixel_rect, self.complex_rect)?;

        Ok(is_interesting(c, &self.thresholds))
    }

    fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }
}

impl JuliaInterestAlgorithm {
    #[must_use]
    pub fn new(
        pixel_rect: PixelRect,
        complex_rect: ComplexRect,
        thresholds: InterestThresholds,
    ) -> Self {
        Self {
            pixel_rect,
            complex_rect,
            thresholds,
        }
    }

    #[must_use]
    pub fn complex_rect(&self) -> ComplexRect {
        self.complex_rect
    }

    #[must_use]
    pub fn thresholds(&self) -> InterestThresholds {
        self.thresholds
    }
}
