use std::borrow::Cow;

use anyhow::{Result, anyhow};
use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "fixtures"]
struct Embedded;

/// Write and report order. Each name must exist under `fixtures/`.
pub const FIXTURE_NAMES: [&str; 10] = [
    "sample.txt",
    "sample.json",
    "sample.py",
    "Sample.cs",
    "sample.html",
    "sample.css",
    "README.md",
    "sample.xml",
    "sample.csv",
    "sample.sql",
];

/// One sample file: a name relative to the output directory and its literal bytes.
#[derive(Debug, Clone)]
pub struct FixtureFile {
    pub name: &'static str,
    pub content: Cow<'static, [u8]>,
}

pub fn get(name: &str) -> Option<FixtureFile> {
    let name = FIXTURE_NAMES.iter().copied().find(|known| *known == name)?;
    Embedded::get(name).map(|file| FixtureFile {
        name,
        content: file.data,
    })
}

/// Every fixture in table order.
pub fn all() -> Result<Vec<FixtureFile>> {
    FIXTURE_NAMES
        .iter()
        .map(|name| get(name).ok_or_else(|| anyhow!("embedded fixture `{}` missing", name)))
        .collect()
}
