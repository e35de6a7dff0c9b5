use std::env;
use std::io::Write;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::{debug, info};

use crate::fixtures;
use crate::util::fs::{ensure_dir, write_file};

/// Folder created beneath the base directory.
pub const OUTPUT_DIR_NAME: &str = "test_preview_files";

const PREVIEWER: &str = "OfflineProjectManager";

fn separator() -> String {
    "-".repeat(50)
}

/// Absolute path of the output folder for `hint`, or for the current directory.
pub fn resolve_output_dir(hint: Option<&Utf8Path>) -> Result<Utf8PathBuf> {
    let base = match hint {
        Some(path) if path.is_absolute() => path.to_owned(),
        other => {
            let cwd = env::current_dir().context("determining current directory")?;
            let cwd = Utf8PathBuf::from_path_buf(cwd)
                .map_err(|_| anyhow!("current directory not valid UTF-8"))?;
            match other {
                Some(relative) => cwd.join(relative),
                None => cwd,
            }
        }
    };
    Ok(base.join(OUTPUT_DIR_NAME))
}

/// Write every fixture into the output folder, reporting each file to `out`.
///
/// Existing files are overwritten. The first I/O failure aborts the run;
/// fixtures after it are not attempted.
pub fn generate<W: Write>(hint: Option<&Utf8Path>, out: &mut W) -> Result<Utf8PathBuf> {
    let dir = resolve_output_dir(hint)?;
    let files = fixtures::all()?;
    ensure_dir(&dir)?;

    writeln!(out, "Creating test files in: {}", dir)?;
    writeln!(out, "{}", separator())?;

    for fixture in &files {
        let destination = dir.join(fixture.name);
        write_file(&destination, &fixture.content)?;
        debug!(file = fixture.name, bytes = fixture.content.len(), "fixture written");
        writeln!(out, "✅ Created: {}", destination)?;
    }

    writeln!(out, "{}", separator())?;
    out.write_all(summary(&dir).as_bytes())?;
    out.flush()?;

    info!(dir = %dir, count = files.len(), "preview fixtures ready");
    Ok(dir)
}

/// Closing instructions printed after the per-file lines.
pub fn summary(dir: &Utf8Path) -> String {
    format!(
        "\n🎉 Test files created successfully!\n\
         \n\
         To test preview functionality:\n\
         1. Open {PREVIEWER}\n\
         2. Create or open a project\n\
         3. Add folder: {dir}\n\
         4. Click on each file to test preview\n"
    )
}
