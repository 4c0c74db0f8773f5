//! Sentence driver
//!
//! Walks the raw input, skipping whitespace and quotation characters (a
//! quote latches the post-quote flag for the next token), hands each
//! orthographic chunk to the word separator, and brackets the sentence with
//! wall tokens when the dictionary declares them.

use std::sync::Arc;

use crate::affix::AffixTable;
use crate::chars;
use crate::dict::{Dictionary, LEFT_WALL_WORD, RIGHT_WALL_WORD};
use crate::error::{Result, TokenizeError};
use crate::options::TokenizeOptions;
use crate::sentence::Sentence;
use crate::separator::WordSeparator;
use crate::spell::SpellChecker;

/// Sentence tokenizer. Holds shared read-only collaborators; each call to
/// [`Tokenizer::tokenize`] produces an independently owned [`Sentence`], so
/// one tokenizer may serve many threads.
pub struct Tokenizer {
    dict: Arc<dyn Dictionary>,
    affix: Arc<AffixTable>,
    spell: Option<Arc<dyn SpellChecker>>,
    opts: TokenizeOptions,
}

impl Tokenizer {
    pub fn builder() -> TokenizerBuilder {
        TokenizerBuilder::default()
    }

    pub fn options(&self) -> &TokenizeOptions {
        &self.opts
    }

    pub fn affix_table(&self) -> &AffixTable {
        &self.affix
    }

    pub fn dictionary(&self) -> &dyn Dictionary {
        self.dict.as_ref()
    }

    /// Tokenize a string. Quote marks are treated like blanks, except that
    /// the following token is flagged post-quote.
    pub fn tokenize(&self, text: &str) -> Sentence {
        // A NUL terminates the input, like the end of the string.
        let text = &text[..text.find('\0').unwrap_or(text.len())];

        let mut sent = Sentence::new();
        let separator = WordSeparator::new(
            self.dict.as_ref(),
            &self.affix,
            self.spell.as_deref(),
            &self.opts,
        );

        if self.dict.left_wall_defined() {
            sent.issue_sentence_word(LEFT_WALL_WORD, false, separator.decoration());
            sent.set_left_wall();
        }

        let mut rest = text;
        loop {
            // Skip whitespace and all quotation marks, latching the flag.
            let mut quote_found = false;
            let mut start = rest.len();
            for (i, c) in rest.char_indices() {
                if chars::is_quote(c, &self.affix) {
                    quote_found = true;
                } else if !chars::is_space(c) {
                    start = i;
                    break;
                }
            }
            if start >= rest.len() {
                break;
            }
            let tail = &rest[start..];

            // Scan to the end of the non-blank chunk.
            let end = tail
                .char_indices()
                .find(|&(_, c)| chars::is_space(c) || chars::is_quote(c, &self.affix))
                .map_or(tail.len(), |(i, _)| i);

            separator.separate_word(&mut sent, &tail[..end], quote_found);
            rest = &tail[end..];
        }

        if self.dict.right_wall_defined() {
            sent.issue_sentence_word(RIGHT_WALL_WORD, false, separator.decoration());
            sent.set_right_wall();
        }

        if self.opts.verbosity > 3 {
            log::debug!("sentence alternatives:\n{sent}");
        }
        sent
    }

    /// Tokenize raw bytes. The input must be valid UTF-8; a decode failure
    /// aborts the whole tokenization.
    pub fn tokenize_bytes(&self, bytes: &[u8]) -> Result<Sentence> {
        let text = std::str::from_utf8(bytes).map_err(|e| TokenizeError::Decode {
            offset: e.valid_up_to(),
            codeset: "UTF-8",
        })?;
        Ok(self.tokenize(text))
    }
}

/// Assembles a [`Tokenizer`] from its collaborators.
#[derive(Default)]
pub struct TokenizerBuilder {
    dict: Option<Arc<dyn Dictionary>>,
    affix: Option<Arc<AffixTable>>,
    spell: Option<Arc<dyn SpellChecker>>,
    opts: TokenizeOptions,
}

impl TokenizerBuilder {
    pub fn dictionary(mut self, dict: Arc<dyn Dictionary>) -> Self {
        self.dict = Some(dict);
        self
    }

    pub fn affix_table(mut self, affix: Arc<AffixTable>) -> Self {
        self.affix = Some(affix);
        self
    }

    /// Use the embedded affix table for a language code.
    pub fn language(mut self, code: &str) -> Result<Self> {
        self.affix = Some(AffixTable::for_language(code).map_err(TokenizeError::Affix)?);
        Ok(self)
    }

    pub fn spell_checker(mut self, spell: Arc<dyn SpellChecker>) -> Self {
        self.spell = Some(spell);
        self
    }

    pub fn options(mut self, opts: TokenizeOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Build the tokenizer. A dictionary is required; the affix table
    /// defaults to the embedded English one.
    pub fn build(self) -> Result<Tokenizer> {
        let dict = self
            .dict
            .ok_or_else(|| TokenizeError::Config("a dictionary is required".into()))?;
        let affix = match self.affix {
            Some(affix) => affix,
            None => AffixTable::for_language("en").map_err(TokenizeError::Affix)?,
        };
        Ok(Tokenizer {
            dict,
            affix,
            spell: self.spell,
            opts: self.opts,
        })
    }
}
