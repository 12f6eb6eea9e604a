use log::debug;
use rayon::prelude::*;

use crate::core::actions::scan_interest::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::scan_interest::scan_interest::InterestScan;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Parallel [`scan_interest`](super::scan_interest::scan_interest) on rayon's
/// global pool, one task per row. Output order matches the sequential scan.
pub fn scan_interest_rayon<Alg>(
    pixel_rect: PixelRect,
    algorithm: &Alg,
) -> Result<InterestScan, Alg::Failure>
where
    Alg: FractalAlgorithm<Success = bool> + Sync,
    Alg::Failure: Send,
{
    debug!(
        "scanning {}x{} cells on {} rayon threads",
        pixel_rect.width(),
        pixel_rect.height(),
        rayon::current_num_threads()
    );

    let x_start = pixel_rect.top_left().x;
    let x_end = pixel_rect.bottom_right().x;

    let rows = (pixel_rect.top_left().y..=pixel_rect.bottom_right().y)
        .into_par_iter()
        .map(|y| {
            (x_start..=x_end)
                .map(|x| algorithm.compute(Point { x, y }))
                .collect::<Result<Vec<bool>, _>>()
        })
        .collect::<Result<Vec<Vec<bool>>, _>>()?;

    Ok(InterestScan::from_scanned_cells(pixel_rect, rows.concat()))
}
