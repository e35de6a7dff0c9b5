mod cli;
mod fixtures;
mod generator;
mod logging;
mod runner;
mod util;

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = cli::parse();
    runner::run(cli)
}
