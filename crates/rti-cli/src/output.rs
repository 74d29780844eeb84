use std::io::{self, Write};
use std::sync::OnceLock;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

static JSON_MODE: OnceLock<bool> = OnceLock::new();

pub fn init(json: bool) {
    let _ = JSON_MODE.set(json);
}

pub fn is_json() -> bool {
    JSON_MODE.get().copied().unwrap_or(false)
}

/// Pretty JSON on stdout, regardless of mode.
pub fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    println!("{s}");
    Ok(())
}

/// JSON in `--json` mode, otherwise whatever `human` writes.
pub fn emit<T, F>(value: &T, human: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&mut StandardStream) -> io::Result<()>,
{
    if is_json() {
        return print(value);
    }
    let mut out = stdout();
    human(&mut out)?;
    out.flush()?;
    Ok(())
}

/// Write `label` in `color`, then reset.
pub fn write_colored(out: &mut StandardStream, color: Color, label: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true))?;
    write!(out, "{label}")?;
    out.reset()
}

pub fn stdout() -> StandardStream {
    StandardStream::stdout(ColorChoice::Auto)
}
