/// Filesystem helpers shared by the generator.
pub mod fs {
    use std::fs;

    use anyhow::{Context, Result};
    use camino::Utf8Path;

    /// Ensure a directory exists, creating it recursively if needed.
    pub fn ensure_dir(path: &Utf8Path) -> Result<()> {
        fs::create_dir_all(path).with_context(|| format!("creating directory {}", path))
    }

    /// Write `bytes` to `destination`, replacing any existing file.
    pub fn write_file(destination: &Utf8Path, bytes: &[u8]) -> Result<()> {
        fs::write(destination, bytes).with_context(|| format!("writing {}", destination))
    }
}
