//! Affix table: punctuation, unit, and affix classes plus tokenizer policy
//!
//! The table is loaded once from a TOML document and is read-only during
//! tokenization. Language-specific splitting behavior (e.g. the Hebrew
//! formative-letter rules) is carried as declarative policy data here, not as
//! code paths.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use serde::Deserialize;

use crate::error::AffixError;

/// List-valued affix classes.
///
/// `Quotes` and `Bullets` are character classes and have their own accessors
/// ([`AffixTable::quotes`], [`AffixTable::bullets`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AffixClass {
    /// Left punctuation, stripped greedily from the front
    Lpunc,
    /// Right punctuation, stripped from the back
    Rpunc,
    /// Unit suffixes, strippable only after a digit-initial word
    Units,
    /// Simple prefixes
    Pre,
    /// Simple suffixes (an empty entry is legal)
    Suf,
    /// Multi-prefix subwords, kept in descending length order
    Mpre,
    /// Subscripts appended to a candidate stem on dictionary validation
    StemSubscr,
}

/// Decoration marks reserved in emitted token strings.
#[derive(Debug, Clone)]
pub struct Marks {
    /// Separates a stem from an affix (`None` disables morpheme marking)
    pub infix: Option<char>,
    /// Separates a base word from its dictionary subscript
    pub subscript: char,
    /// Sentinel filler used to balance alternative columns
    pub empty_word: String,
}

impl Default for Marks {
    fn default() -> Self {
        Self {
            infix: Some('='),
            subscript: '.',
            empty_word: "=.zzz".to_string(),
        }
    }
}

/// Tunable bounds, configurable per affix table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Byte bound on any stored alternative
    pub max_word: usize,
    /// Maximum right-strip iterations per word
    pub max_strip: usize,
    /// Maximum subwords in one multi-prefix chain
    pub max_prefix_chain: usize,
    /// Maximum entries in the MPRE class
    pub max_mpre_class: usize,
    /// Maximum spell suggestions examined per word
    pub max_spell_guesses: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_word: 60,
            max_strip: 10,
            max_prefix_chain: 5,
            max_mpre_class: 16,
            max_spell_guesses: 60,
        }
    }
}

/// Declarative multi-prefix splitting policy.
///
/// The original Hebrew rules ("ו may appear only chain-initially", "a doubled
/// leading ו in the residual collapses to one") are expressed as data so the
/// splitting code stays language-agnostic.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct MultiPrefixPolicy {
    /// Subwords legal only as the first prefix of a chain
    pub chain_initial_only: Vec<String>,
    /// Subwords whose doubled occurrence at the head of the residual is
    /// collapsed to a single occurrence after a non-matching prefix; a single
    /// occurrence there rejects further chain growth
    pub collapse_leading_double: Vec<String>,
}

/// Read-only affix table.
#[derive(Debug, Clone)]
pub struct AffixTable {
    code: String,
    name: String,
    classes: HashMap<AffixClass, Vec<String>>,
    quotes: String,
    bullets: String,
    marks: Marks,
    limits: Limits,
    multi_prefix: MultiPrefixPolicy,
}

static EMPTY_CLASS: Vec<String> = Vec::new();

impl AffixTable {
    /// Parse and validate a TOML affix document.
    pub fn from_toml_str(doc: &str) -> Result<Self, AffixError> {
        let raw: RawConfig = toml::from_str(doc)?;
        raw.build()
    }

    /// Fetch an embedded affix table by language code or name.
    pub fn for_language(code: &str) -> Result<Arc<AffixTable>, AffixError> {
        static EMBEDDED: OnceLock<HashMap<&'static str, Arc<AffixTable>>> = OnceLock::new();
        let embedded = EMBEDDED.get_or_init(|| {
            let mut map = HashMap::new();
            for (keys, doc) in [
                (
                    &["en", "english"][..],
                    include_str!("../configs/affixes/english.toml"),
                ),
                (
                    &["he", "hebrew"][..],
                    include_str!("../configs/affixes/hebrew.toml"),
                ),
            ] {
                match AffixTable::from_toml_str(doc) {
                    Ok(table) => {
                        let table = Arc::new(table);
                        for key in keys {
                            map.insert(*key, Arc::clone(&table));
                        }
                    }
                    Err(e) => log::error!("embedded affix config {keys:?} is broken: {e}"),
                }
            }
            map
        });
        embedded
            .get(code)
            .cloned()
            .ok_or_else(|| AffixError::UnknownLanguage(code.to_string()))
    }

    /// ISO-ish language code ("en", "he").
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable language name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered entries of a list class. MPRE is in descending length order.
    pub fn class(&self, class: AffixClass) -> &[String] {
        self.classes.get(&class).unwrap_or(&EMPTY_CLASS)
    }

    /// Characters construed as quotation marks.
    pub fn quotes(&self) -> &str {
        &self.quotes
    }

    /// Characters construed as bullets.
    pub fn bullets(&self) -> &str {
        &self.bullets
    }

    pub fn marks(&self) -> &Marks {
        &self.marks
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    pub fn multi_prefix(&self) -> &MultiPrefixPolicy {
        &self.multi_prefix
    }
}

/// Raw TOML schema, normalized into [`AffixTable`] by `build`.
#[derive(Debug, Deserialize)]
struct RawConfig {
    metadata: RawMetadata,
    #[serde(default)]
    classes: RawClasses,
    #[serde(default)]
    marks: RawMarks,
    #[serde(default)]
    limits: Limits,
    #[serde(default)]
    multi_prefix: MultiPrefixPolicy,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    code: String,
    name: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawClasses {
    lpunc: Vec<String>,
    rpunc: Vec<String>,
    units: Vec<String>,
    pre: Vec<String>,
    suf: Vec<String>,
    mpre: Vec<String>,
    stemsubscr: Vec<String>,
    quotes: String,
    bullets: String,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawMarks {
    infix: String,
    subscript: String,
    empty_word: String,
}

impl Default for RawMarks {
    fn default() -> Self {
        Self {
            infix: "=".to_string(),
            subscript: ".".to_string(),
            empty_word: "=.zzz".to_string(),
        }
    }
}

impl RawConfig {
    fn build(self) -> Result<AffixTable, AffixError> {
        let marks = Marks {
            infix: single_char("marks.infix", &self.marks.infix, true)?,
            subscript: single_char("marks.subscript", &self.marks.subscript, false)?
                .ok_or_else(|| AffixError::Invalid("marks.subscript must not be empty".into()))?,
            empty_word: self.marks.empty_word,
        };
        if marks.empty_word.is_empty() {
            return Err(AffixError::Invalid("marks.empty_word must not be empty".into()));
        }

        if self.classes.mpre.len() > self.limits.max_mpre_class {
            return Err(AffixError::Invalid(format!(
                "mpre has {} entries, limit is {}",
                self.classes.mpre.len(),
                self.limits.max_mpre_class
            )));
        }
        for (label, entries) in [
            ("lpunc", &self.classes.lpunc),
            ("rpunc", &self.classes.rpunc),
            ("units", &self.classes.units),
            ("pre", &self.classes.pre),
            ("mpre", &self.classes.mpre),
        ] {
            if entries.iter().any(String::is_empty) {
                return Err(AffixError::Invalid(format!("{label} entries must not be empty")));
            }
        }

        // Longer subwords are tried first; the splitter depends on this order.
        let mut mpre = self.classes.mpre;
        mpre.sort_by(|a, b| b.len().cmp(&a.len()));

        let mut classes = HashMap::new();
        classes.insert(AffixClass::Lpunc, self.classes.lpunc);
        classes.insert(AffixClass::Rpunc, self.classes.rpunc);
        classes.insert(AffixClass::Units, self.classes.units);
        classes.insert(AffixClass::Pre, self.classes.pre);
        classes.insert(AffixClass::Suf, self.classes.suf);
        classes.insert(AffixClass::Mpre, mpre);
        classes.insert(AffixClass::StemSubscr, self.classes.stemsubscr);

        Ok(AffixTable {
            code: self.metadata.code,
            name: self.metadata.name,
            classes,
            quotes: self.classes.quotes,
            bullets: self.classes.bullets,
            marks,
            limits: self.limits,
            multi_prefix: self.multi_prefix,
        })
    }
}

fn single_char(field: &str, value: &str, allow_empty: bool) -> Result<Option<char>, AffixError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (None, _) if allow_empty => Ok(None),
        (None, _) => Err(AffixError::Invalid(format!("{field} must not be empty"))),
        (Some(c), None) => Ok(Some(c)),
        _ => Err(AffixError::Invalid(format!("{field} must be a single character"))),
    }
}
