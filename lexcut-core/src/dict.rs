//! Dictionary oracle facade
//!
//! The tokenizer needs two distinct probes and the distinction is
//! load-bearing: [`Dictionary::exact_lookup`] validates stems of affix
//! splits, while [`Dictionary::find`] additionally admits regex-named words
//! (so "1960" can stem "1960's" via a number regex). Collapsing the two
//! breaks contracted-word splits and capitalization handling.

use std::collections::{HashMap, HashSet};

use regex::Regex;

/// Synthetic token opening every sentence when the dictionary declares it.
pub const LEFT_WALL_WORD: &str = "LEFT-WALL";
/// Synthetic token closing every sentence when the dictionary declares it.
pub const RIGHT_WALL_WORD: &str = "RIGHT-WALL";
/// Dictionary entry standing in for words nothing else matched.
pub const UNKNOWN_WORD: &str = "UNKNOWN-WORD";

/// Read-only dictionary view consumed by the tokenizer.
///
/// Implementations are shared across threads; all methods take `&self`.
pub trait Dictionary: Send + Sync {
    /// Is `word` literally a dictionary entry (regexes ignored)?
    ///
    /// Subscript matching is symmetric: two subscripted words must match
    /// exactly; a subscripted entry matches an unsubscripted probe (and the
    /// reverse) once the subscript is removed.
    fn exact_lookup(&self, word: &str) -> bool;

    /// Name of the first defined regex matching `word`, if any.
    fn match_regex(&self, word: &str) -> Option<&str>;

    /// Does the dictionary expression of `word` carry `marker`?
    /// Used by downstream entity handling; tokenization itself never calls it.
    fn word_contains(&self, word: &str, marker: &str) -> bool {
        let _ = (word, marker);
        false
    }

    /// `exact_lookup(word)`, or `word` matches a regex whose name is itself
    /// an entry.
    fn find(&self, word: &str) -> bool {
        self.exact_lookup(word)
            || self
                .match_regex(word)
                .is_some_and(|name| self.exact_lookup(name))
    }

    /// Does the dictionary define a left wall?
    fn left_wall_defined(&self) -> bool {
        false
    }

    /// Does the dictionary define a right wall?
    fn right_wall_defined(&self) -> bool {
        false
    }

    /// Is [`UNKNOWN_WORD`] defined?
    fn unknown_word_defined(&self) -> bool {
        false
    }

    /// Should unknown words be synthesized downstream?
    fn use_unknown_word(&self) -> bool {
        false
    }
}

/// Hash-backed [`Dictionary`] implementation.
///
/// Backs the tests and the CLI; a real deployment may substitute any other
/// implementation of the trait.
#[derive(Debug, Default)]
pub struct WordSet {
    entries: HashSet<String>,
    /// Subscript-stripped forms of subscripted entries
    bases: HashSet<String>,
    regexes: Vec<(String, Regex)>,
    markers: HashMap<String, HashSet<String>>,
    subscript_mark: char,
    left_wall: bool,
    right_wall: bool,
    unknown_word: bool,
    use_unknown: bool,
}

impl WordSet {
    pub fn new() -> Self {
        Self {
            subscript_mark: '.',
            ..Self::default()
        }
    }

    /// Build from plain entries; walls undefined.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for w in words {
            set.add_word(w);
        }
        set
    }

    /// Add one entry, subscripted or not.
    pub fn add_word(&mut self, word: impl Into<String>) -> &mut Self {
        let word = word.into();
        if let Some(base) = strip_subscript(&word, self.subscript_mark) {
            self.bases.insert(base.to_string());
        }
        self.entries.insert(word);
        self
    }

    /// Register a named regex. Order of registration is match order.
    pub fn add_regex(
        &mut self,
        name: impl Into<String>,
        pattern: &str,
    ) -> Result<&mut Self, regex::Error> {
        self.regexes.push((name.into(), Regex::new(pattern)?));
        Ok(self)
    }

    /// Declare the walls. Wall words become entries.
    pub fn with_walls(&mut self, left: bool, right: bool) -> &mut Self {
        self.left_wall = left;
        self.right_wall = right;
        if left {
            self.add_word(LEFT_WALL_WORD);
        }
        if right {
            self.add_word(RIGHT_WALL_WORD);
        }
        self
    }

    /// Declare [`UNKNOWN_WORD`] handling.
    pub fn with_unknown_word(&mut self, defined: bool, used: bool) -> &mut Self {
        self.unknown_word = defined;
        self.use_unknown = used;
        if defined {
            self.add_word(UNKNOWN_WORD);
        }
        self
    }

    /// Attach an expression marker to a word (entity marking).
    pub fn add_marker(&mut self, word: impl Into<String>, marker: impl Into<String>) -> &mut Self {
        self.markers
            .entry(word.into())
            .or_default()
            .insert(marker.into());
        self
    }
}

impl Dictionary for WordSet {
    fn exact_lookup(&self, word: &str) -> bool {
        if self.entries.contains(word) {
            return true;
        }
        match strip_subscript(word, self.subscript_mark) {
            // Subscripted probe against an unsubscripted entry
            Some(base) => self.entries.contains(base),
            // Unsubscripted probe against a subscripted entry
            None => self.bases.contains(word),
        }
    }

    fn match_regex(&self, word: &str) -> Option<&str> {
        self.regexes
            .iter()
            .find(|(_, re)| re.is_match(word))
            .map(|(name, _)| name.as_str())
    }

    fn word_contains(&self, word: &str, marker: &str) -> bool {
        self.markers
            .get(word)
            .is_some_and(|set| set.contains(marker))
    }

    fn left_wall_defined(&self) -> bool {
        self.left_wall
    }

    fn right_wall_defined(&self) -> bool {
        self.right_wall
    }

    fn unknown_word_defined(&self) -> bool {
        self.unknown_word
    }

    fn use_unknown_word(&self) -> bool {
        self.use_unknown
    }
}

/// The subscript of a word is the last `mark` followed by a non-digit; the
/// returned slice is the word without it. `None` when there is no subscript.
pub fn strip_subscript(word: &str, mark: char) -> Option<&str> {
    let idx = word.rfind(mark)?;
    if idx == 0 {
        return None;
    }
    let rest = &word[idx + mark.len_utf8()..];
    match rest.chars().next() {
        Some(c) if !c.is_numeric() => Some(&word[..idx]),
        _ => None,
    }
}
