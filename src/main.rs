use clap::Parser;
use fractal_scout::{Cli, run_cli};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    run_cli(cli, std::io::stdout().lock())
}
