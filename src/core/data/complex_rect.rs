use std::str::FromStr;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, thiserror::Error)]
pub enum ComplexRectError {
    #[error("complex rect size must be positive and finite: {width}x{height}")]
    InvalidSize { width: f64, height: f64 },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseComplexRectError {
    #[error("expected four comma separated numbers (x0,y0,x1,y1), got {0:?}")]
    WrongArity(String),
    #[error("invalid number {0:?}")]
    InvalidNumber(String),
    #[error(transparent)]
    Rect(#[from] ComplexRectError),
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ComplexRect {
    top_left: Complex,
    bottom_right: Complex,
}

impl ComplexRect {
    pub fn new(top_left: Complex, bottom_right: Complex) -> Result<Self, ComplexRectError> {
        let width = bottom_right.real - top_left.real;
        let height = bottom_right.imag - top_left.imag;

        // NaN fails both comparisons, so test for the positive case
        if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
            return Err(ComplexRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    #[must_use]
    pub fn top_left(&self) -> Complex {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Complex {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.real - self.top_left.real
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.imag - self.top_left.imag
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.top_left.real <= point.real
            && self.top_left.imag <= point.imag
            && self.bottom_right.real >= point.real
            && self.bottom_right.imag >= point.imag
    }

    /// Point at fractional position `(fx, fy)`, where `(0, 0)` is the top-left
    /// corner and `(1, 1)` the bottom-right.
    #[must_use]
    pub fn point_at(&self, fx: f64, fy: f64) -> Complex {
        Complex {
            real: self.top_left.real + fx * self.width(),
            imag: self.top_left.imag + fy * self.height(),
        }
    }
}

impl FromStr for ComplexRect {
    type Err = ParseComplexRectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s
            .split(',')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|_| ParseComplexRectError::InvalidNumber(part.trim().to_string()))
            })
            .collect::<Result<Vec<f64>, _>>()?;

        let &[x0, y0, x1, y1] = parts.as_slice() else {
            return Err(ParseComplexRectError::WrongArity(s.to_string()));
        };

        Ok(Self::new(Complex::new(x0, y0), Complex::new(x1, y1))?)
    }
}
