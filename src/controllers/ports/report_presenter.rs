use crate::core::actions::pick_julia_c::pick_julia_c::JuliaPick;
use crate::core::actions::scan_interest::scan_interest::InterestScan;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::fractal_options::FractalOption;

/// Verdict of the interest heuristic for a single constant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterestVerdict {
    pub c: Complex,
    pub interesting: bool,
    pub escape_iteration: Option<u32>,
}

pub trait ReportPresenterPort {
    fn present_options(&mut self, options: &[FractalOption]) -> std::io::Result<()>;

    fn present_verdict(&mut self, verdict: &InterestVerdict) -> std::io::Result<()>;

    fn present_scan(&mut self, region: ComplexRect, scan: &InterestScan) -> std::io::Result<()>;

    fn present_pick(&mut self, pick: &JuliaPick) -> std::io::Result<()>;
}
