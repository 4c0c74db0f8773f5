//! Sentence data model
//!
//! A sentence is an ordered sequence of word positions, each carrying one or
//! more alternative tokenizations. Alternatives are committed in *emission
//! groups*: a contiguous range of positions produced from one input chunk,
//! all sharing one `unsplit_word` and one `post_quote` flag. Within a group
//! every position holds the same number of alternatives; shorter analyses
//! are padded with the empty-word sentinel so the columns line up.

use std::fmt;
use std::sync::Arc;

use crate::affix::{AffixTable, Marks};
use crate::chars;
use crate::dict::Dictionary;
use crate::intern::StringPool;
use crate::options::TokenizeOptions;

/// One slot of the sentence.
#[derive(Debug, Default, Clone)]
pub struct WordPosition {
    /// Candidate analyses for this position, column-aligned per group
    pub alternatives: Vec<Arc<str>>,
    /// Original orthographic form; set only on the first position of a group
    pub unsplit_word: Option<Arc<str>>,
    /// True iff any alternative here begins with an upper-case code point
    pub firstupper: bool,
}

/// Token decoration parameters, derived from the affix table and options.
#[derive(Debug, Clone)]
pub struct Decoration<'a> {
    infix: Option<char>,
    empty_word: &'a str,
    max_word: usize,
    mark_suffixes: bool,
}

impl<'a> Decoration<'a> {
    pub fn new(affix: &'a AffixTable, opts: &TokenizeOptions) -> Self {
        Self {
            infix: affix.marks().infix,
            empty_word: &affix.marks().empty_word,
            max_word: affix.limits().max_word,
            mark_suffixes: !opts.test_enabled("no-suffixes"),
        }
    }

    /// The balancing sentinel.
    pub fn empty_word(&self) -> &str {
        self.empty_word
    }

    /// Byte bound on stored alternatives.
    pub fn max_word(&self) -> usize {
        self.max_word
    }

    fn render(&self, kind: AffixKind, token: &str) -> String {
        match kind {
            AffixKind::Prefix => {
                let mut s = chars::truncate_at_boundary(token, self.max_word).to_string();
                if let Some(mark) = self.infix {
                    s.push(mark);
                }
                s
            }
            AffixKind::Stem => chars::truncate_at_boundary(token, self.max_word).to_string(),
            AffixKind::Suffix => {
                // A suffix opening with a non-alphabetic code point (e.g.
                // "'s") is stored verbatim, as are all suffixes when marking
                // is off.
                let markable = token.is_empty() || chars::first_is_alpha(token);
                match self.infix {
                    Some(mark) if markable && self.mark_suffixes => {
                        let mut s = String::with_capacity(token.len() + mark.len_utf8());
                        s.push(mark);
                        s.push_str(token);
                        chars::truncate_at_boundary(&s, self.max_word).to_string()
                    }
                    _ => chars::truncate_at_boundary(token, self.max_word).to_string(),
                }
            }
        }
    }
}

#[derive(Clone, Copy)]
enum AffixKind {
    Prefix,
    Stem,
    Suffix,
}

/// A tokenized sentence: word positions, quote flags, and the interning pool
/// that owns every stored string.
#[derive(Debug, Default)]
pub struct Sentence {
    words: Vec<WordPosition>,
    post_quote: Vec<bool>,
    /// First position of the emission group currently being built
    t_start: usize,
    /// Number of positions in that group so far
    t_count: usize,
    pool: StringPool,
    has_left_wall: bool,
    has_right_wall: bool,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed positions.
    pub fn len(&self) -> usize {
        self.t_start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All positions, including any uncommitted tail of the open group.
    pub fn words(&self) -> &[WordPosition] {
        &self.words
    }

    pub fn word(&self, index: usize) -> &WordPosition {
        &self.words[index]
    }

    /// Did quotation characters precede position `index`?
    /// Meaningful only on the first position of each emission group.
    pub fn post_quote(&self, index: usize) -> bool {
        self.post_quote.get(index).copied().unwrap_or(false)
    }

    /// Index of the first non-wall position.
    pub fn first_word_index(&self) -> usize {
        usize::from(self.has_left_wall)
    }

    pub fn has_left_wall(&self) -> bool {
        self.has_left_wall
    }

    pub fn has_right_wall(&self) -> bool {
        self.has_right_wall
    }

    /// True iff the sentence holds at least one non-wall position, or a
    /// right wall is present.
    pub fn has_content(&self) -> bool {
        self.len() > usize::from(self.has_left_wall) || self.has_right_wall
    }

    pub(crate) fn set_left_wall(&mut self) {
        self.has_left_wall = true;
    }

    pub(crate) fn set_right_wall(&mut self) {
        self.has_right_wall = true;
    }

    /// Accumulate one alternative analysis onto the open emission group.
    ///
    /// Adds the `prefixes`, `stems`, and `suffixes` tokens, in that order, to
    /// consecutive positions starting at the group head. Prefixes and
    /// suffixes are decorated with the infix mark; positions the analysis
    /// does not reach are padded with the empty-word sentinel so every
    /// column in the group keeps an identical alternative count.
    pub fn add_alternative(
        &mut self,
        prefixes: &[&str],
        stems: &[&str],
        suffixes: &[&str],
        decor: &Decoration<'_>,
    ) {
        let t_start = self.t_start;
        let mut t_count = self.t_count;
        let mut ai = 0usize;

        let groups = [
            (AffixKind::Prefix, prefixes),
            (AffixKind::Stem, stems),
            (AffixKind::Suffix, suffixes),
        ];
        for (kind, tokens) in groups {
            for token in tokens {
                debug_assert!(ai <= t_count, "alternative index beyond group width");
                if ai == 0 && token.is_empty() {
                    log::warn!("refusing empty string as a leading alternative token");
                    return;
                }

                if ai == t_count {
                    debug_assert_eq!(self.words.len(), t_start + t_count);
                    self.words.push(WordPosition::default());
                    t_count += 1;
                    if t_count > 1 {
                        // Balancing: the fresh position must reach the depth
                        // the group head already has, minus the cell this
                        // analysis is about to fill.
                        let depth = self.words[t_start].alternatives.len().saturating_sub(1);
                        let empty = self.pool.intern(decor.empty_word);
                        let added = t_start + t_count - 1;
                        self.words[added]
                            .alternatives
                            .extend(std::iter::repeat_with(|| Arc::clone(&empty)).take(depth));
                    }
                }

                let decorated = decor.render(kind, token);
                // Suffixes open with the infix mark and never trip this.
                if chars::first_is_upper(&decorated) {
                    self.words[t_start].firstupper = true;
                }
                log::trace!("alternative token: {decorated}");
                let interned = self.pool.intern(&decorated);
                self.words[t_start + ai].alternatives.push(interned);
                ai += 1;
            }
        }

        // Balancing: pad the positions this analysis did not reach.
        if ai < t_count {
            let empty = self.pool.intern(decor.empty_word);
            for pos in (t_start + ai)..(t_start + t_count) {
                self.words[pos].alternatives.push(Arc::clone(&empty));
            }
        }
        self.t_count = t_count;
    }

    /// Commit the open emission group for input chunk `unsplit`.
    ///
    /// Returns false (committing nothing) when no alternatives were added.
    pub fn issue_alternatives(&mut self, unsplit: &str, quote_found: bool) -> bool {
        if self.t_count == 0 {
            return false;
        }
        let t_start = self.t_start;
        let interned = self.pool.intern(unsplit);
        self.words[t_start].unsplit_word = Some(interned);
        self.post_quote.resize(self.words.len(), false);
        self.post_quote[t_start] = quote_found;
        self.t_start = self.words.len();
        self.t_count = 0;
        true
    }

    /// Issue `s` as a single-position, single-alternative word.
    pub fn issue_sentence_word(&mut self, s: &str, quote_found: bool, decor: &Decoration<'_>) {
        self.add_alternative(&[], &[s], &[], decor);
        let _ = self.issue_alternatives(s, quote_found);
    }

    /// Read-only audit: every committed alternative not found in the
    /// dictionary, in sentence order. The balancing sentinel is skipped and
    /// spell/regex tags are removed before probing.
    pub fn words_not_in_dictionary(
        &self,
        dict: &dyn Dictionary,
        affix: &AffixTable,
    ) -> Vec<Arc<str>> {
        let empty_word = &affix.marks().empty_word;
        let mut missing = Vec::new();
        for word in &self.words[..self.len()] {
            for alt in &word.alternatives {
                let raw: &str = alt;
                if raw == empty_word.as_str() {
                    continue;
                }
                let probe = raw
                    .strip_suffix("[~]")
                    .or_else(|| raw.strip_suffix("[!]"))
                    .unwrap_or(raw);
                if !dict.find(probe) {
                    missing.push(Arc::clone(alt));
                }
            }
        }
        missing
    }

    /// Does every committed alternative resolve in the dictionary?
    pub fn is_in_dictionary(&self, dict: &dyn Dictionary, affix: &AffixTable) -> bool {
        self.words_not_in_dictionary(dict, affix).is_empty()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words[..self.len()].iter().enumerate() {
            let alts: Vec<&str> = word.alternatives.iter().map(|a| a.as_ref()).collect();
            write!(f, "{i}: {}", alts.join("|"))?;
            if let Some(unsplit) = &word.unsplit_word {
                if unsplit.as_ref() != alts.first().copied().unwrap_or("") {
                    write!(f, "  <= {unsplit}")?;
                }
            }
            if self.post_quote(i) {
                write!(f, "  [post-quote]")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Undecorated surface form of a stored alternative: spell/regex tags and
/// infix marks removed. The balancing sentinel renders as the empty string.
pub fn surface_form(alt: &str, marks: &Marks) -> String {
    if alt == marks.empty_word {
        return String::new();
    }
    let mut s = alt
        .strip_suffix("[~]")
        .or_else(|| alt.strip_suffix("[!]"))
        .unwrap_or(alt);
    if let Some(mark) = marks.infix {
        if let Some(stripped) = s.strip_prefix(mark) {
            s = stripped;
        } else if let Some(stripped) = s.strip_suffix(mark) {
            s = stripped;
        }
    }
    s.to_string()
}
