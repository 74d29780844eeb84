use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
