use std::{
    fmt::Write,
    fs,
    path::Path,
};

use anyhow::Context;
use serde::de::DeserializeOwned;

/// Dump a directory tree into a single IDM expression.
///
/// Subdirectories and `.idm` files become nested outline headlines named
/// after the directory or the file stem, file contents are indented under
/// their headline. Other files are skipped. If pointed at a file, the file
/// is read as is.
pub fn directory_to_idm(path: impl AsRef<Path>) -> anyhow::Result<String> {
    let path = path.as_ref();
    if path.is_file() {
        return fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()));
    }

    let mut ret = String::new();
    // Sort so the output doesn't depend on filesystem iteration order.
    for e in walkdir::WalkDir::new(path).sort_by_file_name() {
        let e = e.with_context(|| format!("walking {}", path.display()))?;
        let depth = e.depth();
        if depth == 0 {
            // The root element, do not print out.
            continue;
        }
        let indent = "  ".repeat(depth - 1);

        if e.file_type().is_dir() {
            writeln!(ret, "{indent}{}", e.file_name().to_string_lossy())?;
            continue;
        }

        let file = Path::new(e.file_name());
        if file.extension().and_then(|a| a.to_str()) != Some("idm") {
            continue;
        }
        let Some(stem) = file.file_stem() else {
            continue;
        };
        writeln!(ret, "{indent}{}", stem.to_string_lossy())?;

        let body = fs::read_to_string(e.path())
            .with_context(|| format!("reading {}", e.path().display()))?;
        for line in body.lines() {
            if line.trim().is_empty() {
                writeln!(ret)?;
                continue;
            }
            // Turn tab indentation into spaces.
            let tabs = line.chars().take_while(|&c| c == '\t').count();
            writeln!(ret, "{indent}  {}{}", "  ".repeat(tabs), &line[tabs..])?;
        }
    }

    Ok(ret)
}

/// Load a value from an IDM file or a directory of IDM files.
pub fn load_idm<T: DeserializeOwned>(
    path: impl AsRef<Path>,
) -> anyhow::Result<T> {
    let path = path.as_ref();
    let text = directory_to_idm(path)?;
    idm::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}
