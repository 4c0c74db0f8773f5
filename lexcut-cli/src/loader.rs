//! File-based collaborators for the tokenizer
//!
//! Word lists are one entry per line ("run" or "run.v"); regex files are
//! one `NAME pattern` per line. `#` starts a comment in both. These simple
//! formats stand in for a real dictionary backend.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use lexcut_core::{AffixTable, WordSet};

/// Build a [`WordSet`] from a word-list file and an optional regex file.
pub fn load_dictionary(
    words_path: &Path,
    regex_path: Option<&Path>,
    walls: bool,
) -> Result<WordSet> {
    let mut dict = WordSet::new();

    let words = fs::read_to_string(words_path)
        .with_context(|| format!("reading word list {}", words_path.display()))?;
    for line in words.lines() {
        let entry = line.split('#').next().unwrap_or("").trim();
        if !entry.is_empty() {
            dict.add_word(entry);
        }
    }

    if let Some(path) = regex_path {
        let regexes = fs::read_to_string(path)
            .with_context(|| format!("reading regex file {}", path.display()))?;
        for (lineno, line) in regexes.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((name, pattern)) = line.split_once(char::is_whitespace) else {
                bail!("{}:{}: expected 'NAME pattern'", path.display(), lineno + 1);
            };
            dict.add_regex(name, pattern.trim())
                .with_context(|| format!("{}:{}: bad pattern", path.display(), lineno + 1))?;
            // A regex only fires if its name is an entry; declaring it in the
            // regex file is enough.
            dict.add_word(name);
        }
    }

    if walls {
        dict.with_walls(true, true);
    }
    Ok(dict)
}

/// Load an affix table: an explicit TOML file wins over the embedded
/// language tables.
pub fn load_affix(language: &str, affix_path: Option<&Path>) -> Result<Arc<AffixTable>> {
    match affix_path {
        Some(path) => {
            let doc = fs::read_to_string(path)
                .with_context(|| format!("reading affix table {}", path.display()))?;
            let table = AffixTable::from_toml_str(&doc)
                .with_context(|| format!("parsing affix table {}", path.display()))?;
            Ok(Arc::new(table))
        }
        None => Ok(AffixTable::for_language(language)
            .with_context(|| format!("loading embedded affix table '{language}'"))?),
    }
}
