//! Word separation
//!
//! Splits one whitespace-free input chunk into its candidate analyses:
//! punctuation and unit strips, suffix/prefix splits, multi-prefix chains,
//! capitalization variants, regex hits, and spell guesses. All analyses for
//! one chunk are accumulated onto a single emission group and committed
//! together.
//!
//! Typical splits this machinery exists for:
//!
//!   86mm       -> 86 + mm        (number plus measurement unit)
//!   Surprise!  -> Surprise + !   (punctuation pried off the end)
//!   you've     -> you + 've      (undone contraction)
//!   וכשהלכתי   -> וכש= + הלכתי   (formative-letter prefix chain)

use smallvec::SmallVec;

use crate::affix::{AffixClass, AffixTable};
use crate::chars;
use crate::dict::Dictionary;
use crate::options::TokenizeOptions;
use crate::sentence::{Decoration, Sentence};
use crate::spell::SpellChecker;

/// Inline capacity of the right-strip buffer; matches the default strip bound.
const STRIP_BUF: usize = 10;

pub(crate) struct WordSeparator<'a> {
    dict: &'a dyn Dictionary,
    affix: &'a AffixTable,
    spell: Option<&'a dyn SpellChecker>,
    opts: &'a TokenizeOptions,
    decor: Decoration<'a>,
}

impl<'a> WordSeparator<'a> {
    pub fn new(
        dict: &'a dyn Dictionary,
        affix: &'a AffixTable,
        spell: Option<&'a dyn SpellChecker>,
        opts: &'a TokenizeOptions,
    ) -> Self {
        let decor = Decoration::new(affix, opts);
        Self {
            dict,
            affix,
            spell,
            opts,
            decor,
        }
    }

    pub fn decoration(&self) -> &Decoration<'a> {
        &self.decor
    }

    /// Separate one chunk (`chunk` contains no whitespace and no quotes) and
    /// issue the resulting positions onto `sent`.
    pub fn separate_word(&self, sent: &mut Sentence, chunk: &str, quote_found: bool) {
        let max_word = self.affix.limits().max_word;
        let max_strip = self.affix.limits().max_strip;

        // Whole-word probe: a word or regex hit may still split further, so
        // this only decides whether punctuation stripping is attempted.
        let found_as_is = self.dict.find(chunk);
        log::debug!("initial probe: word='{chunk}' find={found_as_is}");

        let mut after_left: &str = chunk;
        let mut stripped: SmallVec<[&str; STRIP_BUF]> = SmallVec::new();
        let mut word: &str = chunk;
        if !found_as_is {
            after_left = self.strip_left(sent, chunk, quote_found);
            // The chunk may have consisted entirely of left punctuation,
            // all of it already issued.
            if after_left.is_empty() {
                return;
            }
            let (end, strips) = self.strip_right(after_left);
            stripped = strips;
            word = &after_left[..end];
        }

        // From here regex matches are handled separately: the stripped word
        // gets a fresh exact probe.
        let mut word_in_dict = self.dict.exact_lookup(word);
        log::debug!("after strip: word='{word}' exact={word_in_dict} n_stripped={}", stripped.len());
        if word_in_dict {
            sent.add_alternative(&[], &[word], &[], &self.decor);
        }

        let mut word_can_split = self.suffix_split(sent, word);

        let mut downcased: Option<String> = None;
        if (self.is_capitalizable(sent, sent.len()) || quote_found) && chars::first_is_upper(word) {
            let lc = chars::downcase(word, max_word);
            word_can_split |= self.suffix_split(sent, &lc);
            downcased = Some(lc);
        }

        word_can_split |= self.mprefix_split(sent, word);

        // A strip count at the bound usually means a long run of periods or
        // the like. Drop the strips and accept the whole remaining token as
        // an unknown word.
        if stripped.len() >= max_strip {
            stripped.clear();
            word = after_left;
            word_in_dict = true;
        }

        if chars::first_is_upper(word) {
            // Add the capitalized form itself only when a regex wants it;
            // anything else would smuggle in an unknown word.
            if !word_can_split && self.dict.match_regex(word).is_some() {
                sent.add_alternative(&[], &[word], &[], &self.decor);
            }
            if self.is_capitalizable(sent, sent.len()) || quote_found {
                let lc = chars::downcase(word, max_word);
                if self.dict.exact_lookup(&lc) {
                    sent.add_alternative(&[], &[lc.as_str()], &[], &self.decor);
                    word_in_dict = true;
                }
                downcased = Some(lc);
            }
        }

        word_in_dict |= word_can_split;

        // Regex fallback; under the parallel-regex test flag it runs even
        // for dictionary words and the hit carries a [!] tag.
        if !word_in_dict || self.opts.parallel_regex() {
            let probe: &str = if self.opts.parallel_regex() {
                // Prefer the downcased form so capitalized-word regexes do
                // not shadow the interesting match.
                downcased.as_deref().filter(|s| !s.is_empty()).unwrap_or(word)
            } else {
                word
            };
            if self.dict.match_regex(probe).is_some() {
                log::debug!("regex hit for '{probe}'");
                if self.opts.parallel_regex() {
                    let base = chars::truncate_at_boundary(probe, max_word.saturating_sub(3));
                    let tagged = format!("{base}[!]");
                    sent.add_alternative(&[], &[tagged.as_str()], &[], &self.decor);
                } else {
                    sent.add_alternative(&[], &[probe], &[], &self.decor);
                }
                word_in_dict = true;
            }
        }

        // Spell fallback, for words nothing recognized. Proper names are
        // exempted (first-letter-upper heuristic).
        let mut issued = false;
        if !word_in_dict && !chars::first_is_upper(word) && self.opts.use_spell_guess {
            if let Some(speller) = self.spell {
                issued = self.guess_misspelled_word(sent, word, quote_found, speller);
                log::debug!("spell suggest issued={issued}");
            }
        }

        if !issued {
            issued = sent.issue_alternatives(word, quote_found);
        }
        if !issued {
            // Nothing matched at all: accept the surface form and let the
            // expression builder decide what an unknown word means.
            sent.issue_sentence_word(word, quote_found, &self.decor);
        }

        // Strips were collected right-to-left; reissue them rightmost-last.
        for tok in stripped.iter().rev() {
            sent.issue_sentence_word(tok, false, &self.decor);
        }
    }

    /// Greedily strip LPUNC entries off the front, issuing each as its own
    /// position. Returns the remainder.
    fn strip_left<'s>(&self, sent: &mut Sentence, mut w: &'s str, quote_found: bool) -> &'s str {
        let lpunc = self.affix.class(AffixClass::Lpunc);
        loop {
            let mut matched = false;
            for p in lpunc {
                if w.starts_with(p.as_str()) {
                    log::debug!("left strip '{p}' from '{w}'");
                    sent.issue_sentence_word(p, quote_found, &self.decor);
                    w = &w[p.len()..];
                    matched = true;
                    break;
                }
            }
            if !matched {
                return w;
            }
        }
    }

    /// Strip RPUNC and UNITS entries off the back, up to the strip bound.
    ///
    /// Returns the byte length of the remaining word and the stripped tokens
    /// in encounter order (i.e. right-to-left). Unit strips are admissible
    /// only on digit-initial words, and never twice in a row without an
    /// intervening punctuation strip; that allows "12sq.ft." while stopping
    /// "12sqft" from shedding both units.
    fn strip_right(&self, w: &str) -> (usize, SmallVec<[&'a str; STRIP_BUF]>) {
        let rpunc = self.affix.class(AffixClass::Rpunc);
        let units = self.affix.class(AffixClass::Units);
        let max_strip = self.affix.limits().max_strip;
        let starts_with_number = chars::starts_with_digit(w);

        let mut stripped: SmallVec<[&'a str; STRIP_BUF]> = SmallVec::new();
        let mut end = w.len();
        let mut previous_is_unit = false;

        for _ in 0..max_strip {
            let remainder = &w[..end];
            if remainder.is_empty() {
                break;
            }
            // Any remaining valid word, numbers included, stops stripping.
            if self.dict.find(remainder) {
                break;
            }

            if let Some(t) = rpunc.iter().find(|t| remainder.ends_with(t.as_str())) {
                log::debug!("right strip punc '{t}' from '{remainder}'");
                previous_is_unit = false;
                stripped.push(t.as_str());
                end -= t.len();
                continue;
            }
            if !starts_with_number || previous_is_unit {
                break;
            }
            match units.iter().find(|t| remainder.ends_with(t.as_str())) {
                Some(t) => {
                    log::debug!("right strip unit '{t}' from '{remainder}'");
                    previous_is_unit = true;
                    stripped.push(t.as_str());
                    end -= t.len();
                }
                None => break,
            }
        }

        (end, stripped)
    }

    /// Split `word` into (prefix, stem, suffix) analyses against the PRE and
    /// SUF classes. Contracted words split here too ("1960's" -> "1960" +
    /// "'s", the stem admitted by regex). Returns true if anything split.
    fn suffix_split(&self, sent: &mut Sentence, word: &str) -> bool {
        let suffixes = self.affix.class(AffixClass::Suf);
        let prefixes = self.affix.class(AffixClass::Pre);
        let mut word_can_split = false;

        // One pass per suffix, then a final no-suffix pass for prefix-only
        // splits.
        for i in 0..=suffixes.len() {
            let suffix: Option<&str> = if i < suffixes.len() {
                let s = suffixes[i].as_str();
                // The empty suffix (legal in some affix tables, with real
                // morphological linkage) always matches.
                if word.len() < s.len() || !word.ends_with(s) {
                    continue;
                }
                Some(s)
            } else {
                None
            };

            if let Some(s) = suffix {
                let stem = &word[..word.len() - s.len()];
                // The first word of a contraction may match a regex, hence
                // find() and not exact_lookup().
                if self.dict.find(stem) {
                    word_can_split |= self.add_with_stem_subscript(sent, None, stem, Some(s));
                }
            }

            let suffix_len = suffix.map_or(0, str::len);
            for p in prefixes {
                let p = p.as_str();
                if !word.starts_with(p) || word.len() < p.len() + suffix_len {
                    continue;
                }
                let middle = &word[p.len()..word.len() - suffix_len];
                if self.dict.exact_lookup(middle) {
                    word_can_split |= self.add_with_stem_subscript(sent, Some(p), middle, suffix);
                }
            }
        }

        word_can_split
    }

    /// Add a (prefix, stem, suffix) analysis. When STEMSUBSCR is non-empty,
    /// the stem is admitted only if some subscripted form is an exact entry;
    /// the stored stem stays unsubscripted.
    fn add_with_stem_subscript(
        &self,
        sent: &mut Sentence,
        prefix: Option<&str>,
        stem: &str,
        suffix: Option<&str>,
    ) -> bool {
        let subscripts = self.affix.class(AffixClass::StemSubscr);
        let prefixes: &[&str] = prefix.as_slice();
        let suffixes: &[&str] = suffix.as_slice();

        if subscripts.is_empty() {
            sent.add_alternative(prefixes, &[stem], suffixes, &self.decor);
            // Without an infix mark this is not a morpheme split, and the
            // word may still be matched by a regex later (e.g. "1960's"
            // splitting to 1960 + 's).
            return self.affix.marks().infix.is_some();
        }

        let mut word_in_dict = false;
        for sub in subscripts {
            let probe = format!("{stem}{sub}");
            if self.dict.exact_lookup(&probe) {
                sent.add_alternative(prefixes, &[stem], suffixes, &self.decor);
                word_in_dict = true;
            }
        }
        word_in_dict
    }

    /// Split `word` into a chain of prefix subwords plus a residual, greedy
    /// longest-first over the MPRE class, emitting an analysis for every
    /// chain whose residual is in the dictionary (or empty).
    ///
    /// The language-specific guards come from the affix table's multi-prefix
    /// policy: some subwords are legal only chain-initially, and a doubled
    /// leading occurrence of such a subword in the residual collapses to one
    /// (a single occurrence there ends the chain).
    fn mprefix_split(&self, sent: &mut Sentence, word: &str) -> bool {
        let mpre = self.affix.class(AffixClass::Mpre);
        if mpre.is_empty() {
            return false;
        }
        let policy = self.affix.multi_prefix();
        let max_chain = self.affix.limits().max_prefix_chain;

        // Each subword may appear at most once per chain.
        let mut seen = vec![false; mpre.len()];
        let mut chain: Vec<&str> = Vec::new();
        let mut word_in_dict = false;
        let mut w: &str = word;

        'grow: loop {
            let mut matched = false;
            for (i, sub) in mpre.iter().enumerate() {
                let sub = sub.as_str();
                if seen[i] {
                    continue;
                }
                if !chain.is_empty() && policy.chain_initial_only.iter().any(|s| s == sub) {
                    continue;
                }
                if !w.starts_with(sub) {
                    continue;
                }

                let mut residual = &w[sub.len()..];
                let mut collapsed = false;
                for special in &policy.collapse_leading_double {
                    let sp = special.as_str();
                    if sub != sp && residual.starts_with(sp) {
                        if !residual[sp.len()..].starts_with(sp) {
                            // A lone occurrence after a different prefix is
                            // not prefix territory; stop growing.
                            break 'grow;
                        }
                        residual = &residual[sp.len()..];
                        collapsed = true;
                    }
                }

                seen[i] = true;
                chain.push(sub);
                if residual.is_empty() {
                    // The whole word is prefixes.
                    word_in_dict = true;
                    log::debug!("whole-word prefix chain: {word}");
                    sent.add_alternative(&chain, &[], &[], &self.decor);
                    break 'grow;
                }
                if self.dict.find(residual) {
                    word_in_dict = true;
                    log::debug!("prefix chain {chain:?} + '{residual}'");
                    sent.add_alternative(&chain, &[residual], &[], &self.decor);
                }
                w = residual;
                matched = true;
                if collapsed {
                    break 'grow;
                }
                break;
            }
            if !matched || chain.len() >= max_chain {
                break;
            }
        }

        word_in_dict
    }

    /// May the word at `pos` be capitalized by convention? True sentence-
    /// initially, after ":"/"." or a bullet, and right after a quote.
    fn is_capitalizable(&self, sent: &Sentence, pos: usize) -> bool {
        let first_word = usize::from(self.dict.left_wall_defined());
        if pos == first_word {
            return true;
        }
        if pos > 0 {
            if let Some(first_alt) = sent.word(pos - 1).alternatives.first() {
                if first_alt.as_ref() == ":" || first_alt.as_ref() == "." {
                    return true;
                }
                if chars::is_bullet_str(first_alt, self.affix) {
                    return true;
                }
            }
        }
        if pos < sent.len() && sent.post_quote(pos) {
            return true;
        }
        false
    }

    /// Ask the spell oracle about an unrecognized word. Suggestions with
    /// internal spaces become run-on splits across consecutive positions;
    /// plain suggestions found in the dictionary are added with a [~] tag.
    /// Issues the accumulated group itself when any guess lands.
    fn guess_misspelled_word(
        &self,
        sent: &mut Sentence,
        word: &str,
        quote_found: bool,
        speller: &dyn SpellChecker,
    ) -> bool {
        let max_word = self.affix.limits().max_word;
        let max_guesses = self.affix.limits().max_spell_guesses;

        // Spell-checkers produce noise on numbers.
        if chars::is_number(word) {
            return false;
        }
        // The checker knows a word our dictionary doesn't. Accept as such.
        if speller.test(word) {
            return false;
        }

        let mut num_guesses = 0usize;
        for suggestion in speller.suggest(word) {
            if suggestion.contains(' ') {
                // Run-on of two or more words.
                let parts: Vec<&str> = suggestion.split(' ').filter(|p| !p.is_empty()).collect();
                if !parts.is_empty() {
                    sent.add_alternative(&[], &parts, &[], &self.decor);
                    num_guesses += 1;
                }
            } else if self.dict.exact_lookup(&suggestion) {
                // [~] marks the alternative as a guess for downstream stages.
                let base = chars::truncate_at_boundary(&suggestion, max_word.saturating_sub(3));
                let tagged = format!("{base}[~]");
                sent.add_alternative(&[], &[tagged.as_str()], &[], &self.decor);
                num_guesses += 1;
            }
            if num_guesses > max_guesses {
                break;
            }
        }

        if num_guesses > 0 {
            sent.issue_alternatives(word, quote_found);
        }
        num_guesses > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dict::WordSet;

    fn english() -> std::sync::Arc<AffixTable> {
        AffixTable::for_language("en").unwrap()
    }

    fn separate(dict: &WordSet, affix: &AffixTable, chunk: &str) -> Sentence {
        let opts = TokenizeOptions::default();
        let sep = WordSeparator::new(dict, affix, None, &opts);
        let mut sent = Sentence::new();
        sep.separate_word(&mut sent, chunk, false);
        sent
    }

    fn alts(sent: &Sentence, pos: usize) -> Vec<String> {
        sent.word(pos)
            .alternatives
            .iter()
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_plain_word_single_position() {
        let dict = WordSet::from_words(["test"]);
        let sent = separate(&dict, &english(), "test");
        assert_eq!(sent.len(), 1);
        assert_eq!(alts(&sent, 0), ["test"]);
    }

    #[test]
    fn test_right_strip_stops_on_dict_hit() {
        // "etc." is an entry, so the trailing period must survive.
        let dict = WordSet::from_words(["etc."]);
        let sent = separate(&dict, &english(), "etc.");
        assert_eq!(sent.len(), 1);
        assert_eq!(alts(&sent, 0), ["etc."]);
    }

    #[test]
    fn test_unit_strip_requires_digit() {
        // "Delft" must not shed a "ft" unit.
        let dict = WordSet::new();
        let sent = separate(&dict, &english(), "Delft");
        assert_eq!(sent.len(), 1);
        assert_eq!(sent.word(0).alternatives[0].as_ref(), "Delft");
    }

    #[test]
    fn test_consecutive_units_blocked() {
        // Without an intervening punctuation strip only one unit comes off.
        let mut dict = WordSet::from_words(["NUMBERS"]);
        dict.add_regex("NUMBERS", r"^[0-9][0-9,.:]*$").unwrap();
        let sent = separate(&dict, &english(), "12sqft");
        // "ft" strips, then "sq" is blocked; "12sq" stays as the word.
        assert_eq!(sent.len(), 2);
        assert_eq!(sent.word(0).alternatives[0].as_ref(), "12sq");
        assert_eq!(sent.word(1).alternatives[0].as_ref(), "ft");
    }

    #[test]
    fn test_units_with_intervening_punctuation() {
        let mut dict = WordSet::from_words(["NUMBERS"]);
        dict.add_regex("NUMBERS", r"^[0-9][0-9,.:]*$").unwrap();
        let sent = separate(&dict, &english(), "12sq.ft.");
        let words: Vec<&str> = (0..sent.len())
            .map(|i| sent.word(i).alternatives[0].as_ref())
            .collect();
        assert_eq!(words, ["12", "sq", ".", "ft", "."]);
    }

    #[test]
    fn test_left_punctuation_issued_separately() {
        let dict = WordSet::from_words(["word"]);
        let sent = separate(&dict, &english(), "(word");
        assert_eq!(sent.len(), 2);
        assert_eq!(sent.word(0).alternatives[0].as_ref(), "(");
        assert_eq!(sent.word(1).alternatives[0].as_ref(), "word");
    }

    #[test]
    fn test_all_left_punctuation_chunk() {
        let dict = WordSet::new();
        let sent = separate(&dict, &english(), "([");
        assert_eq!(sent.len(), 2);
        assert_eq!(sent.word(0).alternatives[0].as_ref(), "(");
        assert_eq!(sent.word(1).alternatives[0].as_ref(), "[");
    }

    #[test]
    fn test_contraction_suffix_split() {
        let dict = WordSet::from_words(["you", "you've"]);
        let sent = separate(&dict, &english(), "you've");
        // In-dict as a whole, so no stripping; split still adds columns.
        assert_eq!(sent.len(), 2);
        assert!(alts(&sent, 0).contains(&"you've".to_string()));
        assert!(alts(&sent, 0).contains(&"you".to_string()));
        assert!(alts(&sent, 1).contains(&"'ve".to_string()));
    }

    #[test]
    fn test_regex_stem_for_contraction() {
        // "1960's": the stem is admitted through the number regex.
        let mut dict = WordSet::from_words(["NUMBERS"]);
        dict.add_regex("NUMBERS", r"^[0-9][0-9,.:]*$").unwrap();
        let sent = separate(&dict, &english(), "1960's");
        assert_eq!(sent.len(), 2);
        assert!(alts(&sent, 0).contains(&"1960".to_string()));
        assert!(alts(&sent, 1).contains(&"'s".to_string()));
    }

    #[test]
    fn test_stem_subscript_validation() {
        let doc = r#"
            [metadata]
            code = "xx"
            name = "Stems"

            [classes]
            suf = ["ing"]
            stemsubscr = [".="]
        "#;
        let affix = AffixTable::from_toml_str(doc).unwrap();
        // Only the subscripted stem form is an entry.
        let dict = WordSet::from_words(["play.="]);
        let sent = separate(&dict, &affix, "playing");
        assert_eq!(sent.len(), 2);
        // stored stem stays unsubscripted
        assert!(alts(&sent, 0).contains(&"play".to_string()));
        assert!(alts(&sent, 1).contains(&"=ing".to_string()));
    }

    #[test]
    fn test_stem_subscript_rejects_unvalidated() {
        let doc = r#"
            [metadata]
            code = "xx"
            name = "Stems"

            [classes]
            suf = ["ing"]
            stemsubscr = [".="]
        "#;
        let affix = AffixTable::from_toml_str(doc).unwrap();
        // The entry carries a different subscript: "play.=" matches neither
        // "play.v" (subscripted forms must match exactly) nor a bare entry.
        let dict = WordSet::from_words(["play.v"]);
        let sent = separate(&dict, &affix, "playing");
        assert_eq!(sent.len(), 1);
        assert_eq!(alts(&sent, 0), ["playing"]);
    }

    #[test]
    fn test_unknown_word_surface_form() {
        let dict = WordSet::new();
        let sent = separate(&dict, &english(), "qwzzk");
        assert_eq!(sent.len(), 1);
        assert_eq!(alts(&sent, 0), ["qwzzk"]);
        assert_eq!(sent.word(0).unsplit_word.as_deref(), Some("qwzzk"));
    }

    #[test]
    fn test_long_period_run_accepted_whole() {
        let dict = WordSet::new();
        let sent = separate(&dict, &english(), "x..............");
        // More strips than the bound: strips dropped, token kept whole.
        assert_eq!(sent.len(), 1);
        assert_eq!(alts(&sent, 0), ["x.............."]);
    }

    #[test]
    fn test_spell_guess_tagging() {
        use crate::spell::StaticSpeller;
        let dict = WordSet::from_words(["hello"]);
        let mut speller = StaticSpeller::new();
        speller.add_suggestions("helo", ["hello"]);
        let opts = TokenizeOptions::new().with_spell_guess(true);
        let affix = english();
        let sep = WordSeparator::new(&dict, &affix, Some(&speller as &dyn SpellChecker), &opts);
        let mut sent = Sentence::new();
        sep.separate_word(&mut sent, "helo", false);
        assert_eq!(sent.len(), 1);
        assert_eq!(alts(&sent, 0), ["hello[~]"]);
        assert_eq!(sent.word(0).unsplit_word.as_deref(), Some("helo"));
    }

    #[test]
    fn test_spell_runon_split() {
        use crate::spell::StaticSpeller;
        let dict = WordSet::from_words(["in", "fact"]);
        let mut speller = StaticSpeller::new();
        speller.add_suggestions("infact", ["in fact"]);
        let opts = TokenizeOptions::new().with_spell_guess(true);
        let affix = english();
        let sep = WordSeparator::new(&dict, &affix, Some(&speller as &dyn SpellChecker), &opts);
        let mut sent = Sentence::new();
        sep.separate_word(&mut sent, "infact", false);
        assert_eq!(sent.len(), 2);
        assert_eq!(alts(&sent, 0), ["in"]);
        assert_eq!(alts(&sent, 1), ["fact"]);
        assert_eq!(sent.word(0).unsplit_word.as_deref(), Some("infact"));
    }

    #[test]
    fn test_spell_skips_proper_names_and_numbers() {
        use crate::spell::StaticSpeller;
        let dict = WordSet::new();
        let mut speller = StaticSpeller::new();
        speller.add_suggestions("Qwzzk", ["quack"]);
        speller.add_suggestions("12345", ["1234"]);
        let opts = TokenizeOptions::new().with_spell_guess(true);
        let affix = english();
        let sep = WordSeparator::new(&dict, &affix, Some(&speller as &dyn SpellChecker), &opts);

        let mut sent = Sentence::new();
        sep.separate_word(&mut sent, "Qwzzk", false);
        assert_eq!(alts(&sent, 0), ["Qwzzk"]);

        let mut sent = Sentence::new();
        sep.separate_word(&mut sent, "12345", false);
        assert_eq!(alts(&sent, 0), ["12345"]);
    }

    #[test]
    fn test_parallel_regex_tagging() {
        let mut dict = WordSet::from_words(["test", "S-WORDS"]);
        dict.add_regex("S-WORDS", r"^.*s$").unwrap();
        let opts = TokenizeOptions::new().with_test_flag("parallel-regex");
        let affix = english();
        let sep = WordSeparator::new(&dict, &affix, None, &opts);
        let mut sent = Sentence::new();
        sep.separate_word(&mut sent, "tests", false);
        assert!(alts(&sent, 0).contains(&"tests[!]".to_string()));
    }

    #[test]
    fn test_no_suffixes_flag() {
        let doc = r#"
            [metadata]
            code = "xx"
            name = "Suffixy"

            [classes]
            suf = ["ing"]
        "#;
        let affix = AffixTable::from_toml_str(doc).unwrap();
        let dict = WordSet::from_words(["play"]);
        let opts = TokenizeOptions::new().with_test_flag("no-suffixes");
        let sep = WordSeparator::new(&dict, &affix, None, &opts);
        let mut sent = Sentence::new();
        sep.separate_word(&mut sent, "playing", false);
        assert_eq!(sent.len(), 2);
        assert!(alts(&sent, 1).contains(&"ing".to_string()));
    }

    #[test]
    fn test_mprefix_chain_alternatives() {
        let affix = AffixTable::for_language("he").unwrap();
        let dict = WordSet::from_words(["בבית", "בית"]);
        let sent = separate(&dict, &affix, "ובבית");
        // Two chains land: וב+בבית (width 2) and וב+ב+בית (width 3),
        // balanced to equal depth across three positions.
        assert_eq!(sent.len(), 3);
        assert!(alts(&sent, 0).contains(&"וב=".to_string()));
        assert!(alts(&sent, 1).contains(&"בבית".to_string()));
        assert!(alts(&sent, 1).contains(&"ב=".to_string()));
        assert!(alts(&sent, 2).contains(&"בית".to_string()));
        let depth = sent.word(0).alternatives.len();
        assert!((0..3).all(|i| sent.word(i).alternatives.len() == depth));
    }

    #[test]
    fn test_mprefix_whole_word_chain() {
        let affix = AffixTable::for_language("he").unwrap();
        let dict = WordSet::new();
        let sent = separate(&dict, &affix, "וב");
        // The longest subword consumes the entire token: prefix-only word.
        assert_eq!(sent.len(), 1);
        assert!(alts(&sent, 0).contains(&"וב=".to_string()));
    }

    #[test]
    fn test_mprefix_vav_collapse() {
        let affix = AffixTable::for_language("he").unwrap();
        // After a non-vav prefix, a doubled leading vav collapses to one.
        let dict = WordSet::from_words(["וסף"]);
        let sent = separate(&dict, &affix, "בווסף");
        assert!(sent.len() >= 2);
        assert!(alts(&sent, 0).contains(&"ב=".to_string()));
        assert!(alts(&sent, 1).contains(&"וסף".to_string()));
    }

    #[test]
    fn test_mprefix_single_vav_rejected() {
        let affix = AffixTable::for_language("he").unwrap();
        // A lone vav after a non-vav prefix is not prefix territory.
        let dict = WordSet::from_words(["וסף"]);
        let sent = separate(&dict, &affix, "בוסף");
        assert_eq!(sent.len(), 1);
        assert_eq!(alts(&sent, 0), ["בוסף"]);
    }
}
