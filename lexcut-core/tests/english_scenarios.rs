//! End-to-end tokenization scenarios against an English-style fixture

use std::sync::Arc;

use lexcut_core::{AffixTable, Tokenizer, WordSet};

fn english_dict() -> WordSet {
    let mut dict = WordSet::from_words([
        "this",
        "is",
        "a",
        "test",
        "surprise",
        "you",
        "have",
        "the",
        "he",
        "was",
        "very",
        "prosperous",
        "by",
        // regex names must themselves be entries
        "NUMBERS",
        "CAPITALIZED-WORDS",
        "DECADE-DATE",
    ]);
    dict.add_regex("NUMBERS", r"^[0-9][0-9.,:]*$").unwrap();
    dict.add_regex("DECADE-DATE", r"^[0-9]+s$").unwrap();
    dict.add_regex("CAPITALIZED-WORDS", r"^\p{Lu}\p{Ll}*$").unwrap();
    dict
}

fn tokenizer(dict: WordSet) -> Tokenizer {
    Tokenizer::builder()
        .dictionary(Arc::new(dict))
        .language("en")
        .unwrap()
        .build()
        .unwrap()
}

fn alts(sent: &lexcut_core::Sentence, pos: usize) -> Vec<String> {
    sent.word(pos)
        .alternatives
        .iter()
        .map(|a| a.to_string())
        .collect()
}

#[test]
fn test_plain_sentence() {
    let t = tokenizer(english_dict());
    let sent = t.tokenize("this is a test");
    assert_eq!(sent.len(), 4);
    for (i, expected) in ["this", "is", "a", "test"].iter().enumerate() {
        assert_eq!(alts(&sent, i), [*expected]);
        assert!(!sent.post_quote(i));
    }
}

#[test]
fn test_sentence_initial_capitalization() {
    let t = tokenizer(english_dict());
    let sent = t.tokenize("Surprise!");
    assert_eq!(sent.len(), 2);
    // The capitalized form comes from the regex path, the lowercase one from
    // the sentence-initial downcase probe.
    assert_eq!(alts(&sent, 0), ["Surprise", "surprise"]);
    assert_eq!(alts(&sent, 1), ["!"]);
    assert!(sent.word(0).firstupper);
}

#[test]
fn test_contraction() {
    let t = tokenizer(english_dict());
    let sent = t.tokenize("you've");
    assert_eq!(sent.len(), 2);
    assert_eq!(alts(&sent, 0), ["you"]);
    // Apostrophe-initial suffixes stay unmarked.
    assert_eq!(alts(&sent, 1), ["'ve"]);
    assert_eq!(sent.word(0).unsplit_word.as_deref(), Some("you've"));
    assert_eq!(sent.word(1).unsplit_word, None);
}

#[test]
fn test_number_unit_split() {
    let t = tokenizer(english_dict());
    let sent = t.tokenize("86mm");
    assert_eq!(sent.len(), 2);
    assert_eq!(alts(&sent, 0), ["86"]);
    assert_eq!(alts(&sent, 1), ["mm"]);
    // the unit is re-issued from the strip buffer as its own group
    assert_eq!(sent.word(1).unsplit_word.as_deref(), Some("mm"));
}

#[test]
fn test_decade_sentence_with_quote() {
    // The apostrophe is routed through QUOTES here, so "'50s," arrives as
    // "50s," with the post-quote flag latched.
    let affix_doc = r#"
        [metadata]
        code = "en"
        name = "English (apostrophe quoting)"

        [classes]
        lpunc = ["(", "[", "{", "``", "$"]
        rpunc = [")", "]", "}", "''", ",", ".", ":", ";", "?", "!", "%"]
        units = ["mm", "ft", "sq"]
        suf = ["'s", "'re", "'ve", "'ll", "'d", "'m", "n't"]
        quotes = "\"'«»„“”"
        bullets = "*•"
    "#;
    let affix = Arc::new(AffixTable::from_toml_str(affix_doc).unwrap());
    let t = Tokenizer::builder()
        .dictionary(Arc::new(english_dict()))
        .affix_table(affix)
        .build()
        .unwrap();

    let sent = t.tokenize("By the '50s, he was very prosperous.");
    let firsts: Vec<String> = (0..sent.len())
        .map(|i| sent.word(i).alternatives[0].to_string())
        .collect();
    assert_eq!(
        firsts,
        ["By", "the", "50s", ",", "he", "was", "very", "prosperous", "."]
    );
    // sentence-initial "By" gets its lowercase alternative
    assert_eq!(alts(&sent, 0), ["By", "by"]);
    // "50s" survives as a regex hit and carries the post-quote flag
    assert!(sent.post_quote(2));
    assert!(!sent.post_quote(1));
    assert!(!sent.post_quote(3));
}

#[test]
fn test_hebrew_prefix_chain_with_whole_word() {
    let dict = WordSet::from_words(["וכשהלכתי", "הלכתי"]);
    let t = Tokenizer::builder()
        .dictionary(Arc::new(dict))
        .language("he")
        .unwrap()
        .build()
        .unwrap();

    let sent = t.tokenize("וכשהלכתי");
    assert_eq!(sent.len(), 2);
    // whole-word alternative plus the prefix-chain split, balanced
    assert!(alts(&sent, 0).contains(&"וכשהלכתי".to_string()));
    assert!(alts(&sent, 0).contains(&"וכש=".to_string()));
    assert!(alts(&sent, 1).contains(&"הלכתי".to_string()));
    assert_eq!(
        sent.word(0).alternatives.len(),
        sent.word(1).alternatives.len()
    );
    assert_eq!(sent.word(0).unsplit_word.as_deref(), Some("וכשהלכתי"));
}

#[test]
fn test_capitalization_after_colon() {
    let t = tokenizer(english_dict());
    let sent = t.tokenize("test : Surprise");
    assert_eq!(sent.len(), 3);
    // ":" precedes, so the downcased form is admitted
    assert!(alts(&sent, 2).contains(&"surprise".to_string()));
}

#[test]
fn test_audit_reports_unknowns() {
    let t = tokenizer(english_dict());
    let sent = t.tokenize("this is qwzzk");
    let missing = sent.words_not_in_dictionary(t.dictionary(), t.affix_table());
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].as_ref(), "qwzzk");
    assert!(!sent.is_in_dictionary(t.dictionary(), t.affix_table()));

    let clean = t.tokenize("this is a test");
    assert!(clean.is_in_dictionary(t.dictionary(), t.affix_table()));
}
