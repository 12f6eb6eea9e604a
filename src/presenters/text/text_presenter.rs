use std::io::Write;

use crate::controllers::ports::report_presenter::{InterestVerdict, ReportPresenterPort};
use crate::core::actions::pick_julia_c::pick_julia_c::JuliaPick;
use crate::core::actions::scan_interest::scan_interest::InterestScan;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::fractals::fractal_options::FractalOption;

/// Human readable output, one fact per line.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn describe_escape(escape_iteration: Option<u32>) -> String {
    match escape_iteration {
        Some(iteration) => format!("escapes at step {iteration}"),
        None => "bounded".to_string(),
    }
}

impl<W: Write> ReportPresenterPort for TextPresenter<W> {
    fn present_options(&mut self, options: &[FractalOption]) -> std::io::Result<()> {
        for option in options {
            writeln!(self.out, "{:>2}  {}", option.value, option.label)?;
        }

        Ok(())
    }

    fn present_verdict(&mut self, verdict: &InterestVerdict) -> std::io::Result<()> {
        let label = if verdict.interesting {
            "interesting"
        } else {
            "boring"
        };

        writeln!(
            self.out,
            "c = {}: {} ({})",
            verdict.c,
            label,
            describe_escape(verdict.escape_iteration)
        )
    }

    fn present_scan(&mut self, region: ComplexRect, scan: &InterestScan) -> std::io::Result<()> {
        let summary = scan.summary();
        let top_left = region.top_left();
        let bottom_right = region.bottom_right();

        writeln!(
            self.out,
            "region [{}, {}] x [{}, {}] on a {}x{} grid",
            top_left.real,
            bottom_right.real,
            top_left.imag,
            bottom_right.imag,
            scan.pixel_rect().width(),
            scan.pixel_rect().height()
        )?;
        writeln!(
            self.out,
            "interesting: {} / {} ({:.1}%)",
            summary.interesting,
            summary.total,
            summary.interesting_fraction() * 100.0
        )?;
        writeln!(self.out, "boring: {}", summary.boring)
    }

    fn present_pick(&mut self, pick: &JuliaPick) -> std::io::Result<()> {
        writeln!(
            self.out,
            "c = {} ({}, attempt {})",
            pick.c,
            describe_escape(pick.escape_iteration),
            pick.attempts
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::fractals::fractal_options::fractal_options;

    fn output(presenter: TextPresenter<Vec<u8>>) -> String {
        String::from_utf8(presenter.into_inner()).unwrap()
    }

    #[test]
    fn test_options_are_listed_in_presentation_order() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.present_options(fractal_options()).unwrap();

        let text = output(presenter);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], " 1  Burning Ship");
        assert_eq!(lines[6], " 6  Julia Set (z^2)");
    }

    #[test]
    fn test_verdict_mentions_escape_step() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter
            .present_verdict(&InterestVerdict {
                c: Complex::new(-0.75, 0.1),
                interesting: true,
                escape_iteration: Some(32),
            })
            .unwrap();

        assert_eq!(
            output(presenter),
            "c = -0.75 + 0.1i: interesting (escapes at step 32)\n"
        );
    }

    #[test]
    fn test_scan_reports_counts() {
        let region = ComplexRect::new(Complex::new(-2.0, -1.0), Complex::new(1.0, 1.0)).unwrap();
        let scan = InterestScan::new(
            PixelRect::with_size(2, 2).unwrap(),
            vec![true, true, false, true],
        )
        .unwrap();
        let mut presenter = TextPresenter::new(Vec::new());
        presenter.present_scan(region, &scan).unwrap();

        assert_eq!(
            output(presenter),
            "region [-2, 1] x [-1, 1] on a 2x2 grid\ninteresting: 3 / 4 (75.0%)\nboring: 1\n"
        );
    }

    #[test]
    fn test_pick_reports_bounded_constant() {
        let mut presenter = TextPresenter::new(Vec::new());
        presenter
            .present_pick(&JuliaPick {
                c: Complex::new(0.0, -0.5),
                attempts: 3,
                escape_iteration: None,
            })
            .unwrap();

        assert_eq!(output(presenter), "c = 0 - 0.5i (bounded, attempt 3)\n");
    }
}
