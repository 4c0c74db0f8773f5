//! Tokenization options

use std::collections::HashSet;

/// Caller-facing knobs consumed by the tokenizer.
#[derive(Debug, Clone, Default)]
pub struct TokenizeOptions {
    /// Consult the spellcheck oracle for words nothing else matched
    pub use_spell_guess: bool,
    /// Render morphology decorations in output (CLI/Display concern)
    pub display_morphology: bool,
    /// Diagnostic chattiness; above 3 the driver dumps the alternatives matrix
    pub verbosity: u8,
    test_flags: HashSet<String>,
}

impl TokenizeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spell_guess(mut self, enabled: bool) -> Self {
        self.use_spell_guess = enabled;
        self
    }

    pub fn with_display_morphology(mut self, enabled: bool) -> Self {
        self.display_morphology = enabled;
        self
    }

    pub fn with_verbosity(mut self, level: u8) -> Self {
        self.verbosity = level;
        self
    }

    /// Enable a test flag. Recognized: "no-suffixes" (store suffixes
    /// verbatim), "parallel-regex"/"parallels-regex" (always try regex and
    /// tag the hit).
    pub fn with_test_flag(mut self, flag: impl Into<String>) -> Self {
        self.test_flags.insert(flag.into());
        self
    }

    pub fn test_enabled(&self, flag: &str) -> bool {
        self.test_flags.contains(flag)
    }

    /// Both spellings of the parallel-regex flag enable the same behavior.
    pub fn parallel_regex(&self) -> bool {
        self.test_enabled("parallel-regex") || self.test_enabled("parallels-regex")
    }
}
