//! Sentence rendering

use lexcut_core::{surface_form, Marks, Sentence};
use serde::Serialize;

/// One word position, flattened for JSON output.
#[derive(Debug, Serialize)]
pub struct PositionDto {
    pub alternatives: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsplit_word: Option<String>,
    pub firstupper: bool,
    pub post_quote: bool,
}

#[derive(Debug, Serialize)]
pub struct SentenceDto {
    pub words: Vec<PositionDto>,
}

impl SentenceDto {
    pub fn from_sentence(sent: &Sentence, marks: &Marks, morphology: bool) -> Self {
        let words = (0..sent.len())
            .map(|i| {
                let word = sent.word(i);
                let alternatives = word
                    .alternatives
                    .iter()
                    .map(|a| {
                        if morphology {
                            a.to_string()
                        } else {
                            surface_form(a, marks)
                        }
                    })
                    .collect();
                PositionDto {
                    alternatives,
                    unsplit_word: word.unsplit_word.as_ref().map(|w| w.to_string()),
                    firstupper: word.firstupper,
                    post_quote: sent.post_quote(i),
                }
            })
            .collect();
        Self { words }
    }
}

/// One sentence per line; alternatives of a position joined with `|`.
pub fn render_text(sent: &Sentence, marks: &Marks, morphology: bool) -> String {
    (0..sent.len())
        .map(|i| {
            sent.word(i)
                .alternatives
                .iter()
                .map(|a| {
                    if morphology {
                        a.to_string()
                    } else {
                        surface_form(a, marks)
                    }
                })
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join("|")
        })
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_json(sent: &Sentence, marks: &Marks, morphology: bool) -> serde_json::Result<String> {
    serde_json::to_string(&SentenceDto::from_sentence(sent, marks, morphology))
}
