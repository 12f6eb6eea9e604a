pub mod args;
pub mod controller;

use std::io::Write;

use log::debug;

use crate::controllers::cli::args::Cli;
use crate::controllers::cli::controller::CliController;
use crate::presenters::json::json_presenter::JsonPresenter;
use crate::presenters::text::text_presenter::TextPresenter;

/// Runs one parsed command line, writing reports to `out`.
pub fn run_cli<W: Write>(cli: Cli, out: W) -> Result<(), Box<dyn std::error::Error>> {
    let thresholds = cli.thresholds.to_thresholds()?;
    debug!("interest thresholds: {thresholds:?}");

    if cli.json {
        CliController::new(JsonPresenter::new(out), thresholds).run(cli.command)
    } else {
        CliController::new(TextPresenter::new(out), thresholds).run(cli.command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run(args: &[&str]) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        run_cli(cli, &mut out).unwrap();

        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_check_prints_text_verdict() {
        assert_eq!(
            run(&["fractal_scout", "check", "0", "0"]),
            "c = 0 + 0i: interesting (bounded)\n"
        );
    }

    #[test]
    fn test_json_flag_switches_presenter() {
        let out = run(&["fractal_scout", "--json", "check", "0.31", "0"]);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value["interesting"], false);
        assert_eq!(value["escape_iteration"], 10);
    }

    #[test]
    fn test_invalid_thresholds_fail_before_running() {
        let cli = Cli::try_parse_from(["fractal_scout", "options", "--escape-radius-squared=-1"])
            .unwrap();

        assert!(run_cli(cli, Vec::new()).is_err());
    }
}
