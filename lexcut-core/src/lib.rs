//! Sentence tokenization with parallel alternative analyses
//!
//! This crate converts a raw UTF-8 string into a sequence of word positions,
//! each carrying one or more alternative tokenizations: affix splits
//! ("you've" -> you + 've), punctuation separations ("Surprise!" ->
//! Surprise + !), number/unit splits ("86mm" -> 86 + mm), multi-prefix
//! chains, regex-matched forms, spell-correction guesses, and case
//! variants. Alternatives of one input chunk are committed together as an
//! *emission group* whose columns are balanced with an empty-word sentinel,
//! ready for a downstream grammatical expression builder.
//!
//! The tokenizer coordinates four read-only collaborators: an affix table
//! (loaded from TOML), a dictionary oracle, a regex matcher behind that
//! oracle, and an optional spellchecker.
//!
//! ```
//! use std::sync::Arc;
//! use lexcut_core::{Tokenizer, WordSet};
//!
//! let dict = WordSet::from_words(["this", "is", "a", "test"]);
//! let tokenizer = Tokenizer::builder()
//!     .dictionary(Arc::new(dict))
//!     .build()
//!     .unwrap();
//! let sentence = tokenizer.tokenize("this is a test");
//! assert_eq!(sentence.len(), 4);
//! ```

pub mod affix;
pub mod chars;
pub mod dict;
pub mod error;
pub mod intern;
pub mod options;
pub mod sentence;
pub mod spell;
pub mod tokenizer;

mod separator;

pub use affix::{AffixClass, AffixTable, Limits, Marks, MultiPrefixPolicy};
pub use dict::{
    strip_subscript, Dictionary, WordSet, LEFT_WALL_WORD, RIGHT_WALL_WORD, UNKNOWN_WORD,
};
pub use error::{AffixError, Result, TokenizeError};
pub use options::TokenizeOptions;
pub use sentence::{surface_form, Sentence, WordPosition};
pub use spell::{SpellChecker, StaticSpeller};
pub use tokenizer::{Tokenizer, TokenizerBuilder};
