use std::io::Write;

use serde_json::{Value, json};

use crate::controllers::ports::report_presenter::{InterestVerdict, ReportPresenterPort};
use crate::core::actions::pick_julia_c::pick_julia_c::JuliaPick;
use crate::core::actions::scan_interest::scan_interest::InterestScan;
use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::fractal_options::FractalOption;

/// One pretty-printed JSON document per report, for UI selectors and scripts.
pub struct JsonPresenter<W: Write> {
    out: W,
}

impl<W: Write> JsonPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_value(&mut self, value: &Value) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, value)?;
        writeln!(self.out)
    }
}

fn complex_json(c: Complex) -> Value {
    json!({ "real": c.real, "imag": c.imag })
}

impl<W: Write> ReportPresenterPort for JsonPresenter<W> {
    fn present_options(&mut self, options: &[FractalOption]) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut self.out, options)?;
        writeln!(self.out)
    }

    fn present_verdict(&mut self, verdict: &InterestVerdict) -> std::io::Result<()> {
        self.write_value(&json!({
            "c": complex_json(verdict.c),
            "interesting": verdict.interesting,
            "escape_iteration": verdict.escape_iteration,
        }))
    }

    fn present_scan(&mut self, region: ComplexRect, scan: &InterestScan) -> std::io::Result<()> {
        let summary = scan.summary();

        self.write_value(&json!({
            "region": {
                "top_left": complex_json(region.top_left()),
                "bottom_right": complex_json(region.bottom_right()),
            },
            "width": scan.pixel_rect().width(),
            "height": scan.pixel_rect().height(),
            "total": summary.total,
            "interesting": summary.interesting,
            "boring": summary.boring,
        }))
    }

    fn present_pick(&mut self, pick: &JuliaPick) -> std::io::Result<()> {
        self.write_value(&json!({
            "c": complex_json(pick.c),
            "attempts": pick.attempts,
            "escape_iteration": pick.escape_iteration,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::fractals::fractal_options::{fractal_options, fractal_options_json};

    fn parsed(presenter: JsonPresenter<Vec<u8>>) -> Value {
        serde_json::from_slice(&presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_options_match_the_table_export() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter.present_options(fractal_options()).unwrap();

        let expected: Value = serde_json::from_str(&fractal_options_json().unwrap()).unwrap();

        assert_eq!(parsed(presenter), expected);
    }

    #[test]
    fn test_bounded_verdict_has_null_escape() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter
            .present_verdict(&InterestVerdict {
                c: Complex::ZERO,
                interesting: true,
                escape_iteration: None,
            })
            .unwrap();

        let value = parsed(presenter);

        assert_eq!(value["interesting"], true);
        assert!(value["escape_iteration"].is_null());
        assert_eq!(value["c"]["real"], 0.0);
    }

    #[test]
    fn test_scan_carries_summary() {
        let region = ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        let scan = InterestScan::new(
            PixelRect::with_size(2, 2).unwrap(),
            vec![true, false, false, false],
        )
        .unwrap();
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter.present_scan(region, &scan).unwrap();

        let value = parsed(presenter);

        assert_eq!(value["total"], 4);
        assert_eq!(value["interesting"], 1);
        assert_eq!(value["boring"], 3);
        assert_eq!(value["region"]["top_left"]["real"], -2.0);
    }

    #[test]
    fn test_pick_carries_attempts() {
        let mut presenter = JsonPresenter::new(Vec::new());
        presenter
            .present_pick(&JuliaPick {
                c: Complex::new(-0.75, 0.1),
                attempts: 4,
                escape_iteration: Some(32),
            })
            .unwrap();

        let value = parsed(presenter);

        assert_eq!(value["attempts"], 4);
        assert_eq!(value["escape_iteration"], 32);
    }
}
