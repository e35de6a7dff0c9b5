use std::io;

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;

use crate::cli::Cli;
use crate::generator;

pub fn run(cli: Cli) -> Result<()> {
    let base = cli
        .base
        .map(|path| {
            Utf8PathBuf::from_path_buf(path)
                .map_err(|path| anyhow!("base path not valid UTF-8: {}", path.display()))
        })
        .transpose()?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    generator::generate(base.as_deref(), &mut out)?;
    Ok(())
}
