use log::debug;

use crate::core::actions::scan_interest::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InterestScanError {
    #[error("grid has {expected} cells but {actual} verdicts were given")]
    CellCountMismatch { expected: u64, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub total: usize,
    pub interesting: usize,
    pub boring: usize,
}

impl ScanSummary {
    #[must_use]
    pub fn interesting_fraction(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        self.interesting as f64 / self.total as f64
    }
}

/// Row-major interest verdicts for every cell of a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterestScan {
    pixel_rect: PixelRect,
    cells: Vec<bool>,
}

impl InterestScan {
    pub fn new(pixel_rect: PixelRect, cells: Vec<bool>) -> Result<Self, InterestScanError> {
        if cells.len() as u64 != pixel_rect.size() {
            return Err(InterestScanError::CellCountMismatch {
                expected: pixel_rect.size(),
                actual: cells.len(),
            });
        }

        Ok(Self { pixel_rect, cells })
    }

    /// Scans build their cells from `pixel_rect.points()`, one verdict each.
    pub(crate) fn from_scanned_cells(pixel_rect: PixelRect, cells: Vec<bool>) -> Self {
        debug_assert_eq!(cells.len() as u64, pixel_rect.size());

        Self { pixel_rect, cells }
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, point: Point) -> Option<bool> {
        if !self.pixel_rect.contains_point(point) {
            return None;
        }

        let column = (point.x - self.pixel_rect.top_left().x) as usize;
        let row = (point.y - self.pixel_rect.top_left().y) as usize;

        self.cells
            .get(row * self.pixel_rect.width() as usize + column)
            .copied()
    }

    #[must_use]
    pub fn summary(&self) -> ScanSummary {
        let interesting = self.cells.iter().filter(|&&cell| cell).count();

        ScanSummary {
            total: self.cells.len(),
            interesting,
            boring: self.cells.len() - interesting,
        }
    }
}

pub fn scan_interest<Alg>(pixel_rect: PixelRect, algorithm: &Alg) -> Result<InterestScan, Alg::Failure>
where
    Alg: FractalAlgorithm<Success = bool>,
{
    debug!(
        "scanning {}x{} cells sequentially",
        pixel_rect.width(),
        pixel_rect.height()
    );

    let cells = pixel_rect
        .points()
        .map(|pixel| algorithm.compute(pixel))
        .collect::<Result<Vec<bool>, _>>()?;

    Ok(InterestScan::from_scanned_cells(pixel_rect, cells))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;
    use crate::core::fractals::julia::algorithm::JuliaInterestAlgorithm;
    use crate::core::fractals::julia::params::InterestThresholds;
    use std::error::Error;

    #[derive(Debug, PartialEq)]
    struct StubError {}

    impl std::fmt::Display for StubError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "StubError")
        }
    }

    impl Error for StubError {}

    struct CheckerboardAlgorithm {
        pixel_rect: PixelRect,
    }

    impl FractalAlgorithm for CheckerboardAlgorithm {
        type Success = bool;
        type Failure = StubError;

        fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
            Ok((pixel.x + pixel.y) % 2 == 0)
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    struct FailingAlgorithm {
        pixel_rect: PixelRect,
    }

    impl FractalAlgorithm for FailingAlgorithm {
        type Success = bool;
        type Failure = StubError;

        fn compute(&self, _: Point) -> Result<Self::Success, Self::Failure> {
            Err(StubError {})
        }

        fn pixel_rect(&self) -> PixelRect {
            self.pixel_rect
        }
    }

    #[test]
    fn test_scan_visits_every_cell_row_major() {
        let pixel_rect = PixelRect::with_size(3, 2).unwrap();
        let algorithm = CheckerboardAlgorithm { pixel_rect };

        let scan = scan_interest(pixel_rect, &algorithm).unwrap();

        assert_eq!(scan.cells(), &[true, false, true, false, true, false]);
        assert_eq!(scan.get(Point { x: 1, y: 1 }), Some(true));
        assert_eq!(scan.get(Point { x: 3, y: 0 }), None);
    }

    #[test]
    fn test_scan_propagates_algorithm_failure() {
        let pixel_rect = PixelRect::with_size(3, 3).unwrap();
        let algorithm = FailingAlgorithm { pixel_rect };

        assert_eq!(scan_interest(pixel_rect, &algorithm), Err(StubError {}));
    }

    #[test]
    fn test_summary_counts() {
        let pixel_rect = PixelRect::with_size(2, 2).unwrap();
        let scan = InterestScan::new(pixel_rect, vec![true, false, false, false]).unwrap();
        let summary = scan.summary();

        assert_eq!(
            summary,
            ScanSummary {
                total: 4,
                interesting: 1,
                boring: 3
            }
        );
        assert_eq!(summary.interesting_fraction(), 0.25);
    }

    #[test]
    fn test_new_rejects_cell_count_that_disagrees_with_grid() {
        let pixel_rect = PixelRect::with_size(3, 2).unwrap();

        assert_eq!(
            InterestScan::new(pixel_rect, vec![true; 5]),
            Err(InterestScanError::CellCountMismatch {
                expected: 6,
                actual: 5
            })
        );
        assert_eq!(
            InterestScan::new(pixel_rect, vec![false; 7]),
            Err(InterestScanError::CellCountMismatch {
                expected: 6,
                actual: 7
            })
        );
        assert!(InterestScan::new(pixel_rect, vec![false; 6]).is_ok());
    }

    #[test]
    fn test_julia_scan_of_symmetric_region_is_mirror_symmetric_in_imag() {
        let pixel_rect = PixelRect::with_size(9, 9).unwrap();
        let complex_rect =
            ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        let algorithm =
            JuliaInterestAlgorithm::new(pixel_rect, complex_rect, InterestThresholds::default());

        let scan = scan_interest(pixel_rect, &algorithm).unwrap();

        for y in 0..9 {
            for x in 0..9 {
                assert_eq!(
                    scan.get(Point { x, y }),
                    scan.get(Point { x, y: 8 - y }),
                    "cell ({x}, {y})"
                );
            }
        }
        assert_eq!(scan.get(Point { x: 4, y: 4 }), Some(true));
        assert_eq!(scan.get(Point { x: 0, y: 0 }), Some(false));
    }
}
