//! Sentence boundary detection.
//!
//! Text is lexed into words, terminator runs, closing quotes, spaces, and line
//! breaks. A terminator run followed by whitespace (or the end of the text)
//! ends a sentence unless the word before it is a known abbreviation or a
//! single capital initial other than `I`. Line breaks always end a sentence.

use std::ops::Range;

use logos::Logos;

/// Lexed token kinds. Anything the lexer does not recognize becomes `Other`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    #[regex(r"[.!?…]+")]
    Terminator,

    #[regex(r#"["'\)\]”’»]"#)]
    Closer,

    #[regex(r"[\r\n]+")]
    LineBreak,

    #[regex(r"[ \t\x0B\x0C\u{00A0}\u{3000}]+")]
    Space,

    #[regex(r"[\p{L}\p{N}]+(['’.\-][\p{L}\p{N}]+)*")]
    Word,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Terminator,
    Closer,
    LineBreak,
    Space,
    Word,
    Other,
}

/// Abbreviations whose period never ends a sentence.
const TITLES: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "st", "mt", "vs", "e.g", "i.e", "rev", "gen", "capt", "sgt",
    "lt", "col",
];

/// Abbreviations that end a sentence unless a lower-case word follows.
const TRAILING: &[&str] = &["etc", "al", "approx", "inc", "ltd", "co", "jr", "sr"];

/// Splits raw text into trimmed, non-empty sentences in document order.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSegmenter;

impl SentenceSegmenter {
    /// Create a segmenter with English boundary rules.
    pub fn new() -> Self {
        Self
    }

    /// Split `text` into sentences.
    pub fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let tokens = lex(text);
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut i = 0;

        while i < tokens.len() {
            let (kind, span) = &tokens[i];
            match kind {
                Kind::LineBreak => {
                    push_trimmed(&mut sentences, &text[start..span.start]);
                    start = span.end;
                    i += 1;
                }
                Kind::Terminator => {
                    let mut end = span.end;
                    let mut next = i + 1;
                    while let Some((Kind::Closer, closer)) = tokens.get(next) {
                        end = closer.end;
                        next += 1;
                    }
                    let at_gap = matches!(
                        tokens.get(next),
                        None | Some((Kind::Space | Kind::LineBreak, _))
                    );
                    if at_gap && ends_sentence(text, &tokens, i, next) {
                        push_trimmed(&mut sentences, &text[start..end]);
                        start = end;
                    }
                    i = next;
                }
                _ => i += 1,
            }
        }

        push_trimmed(&mut sentences, &text[start..]);
        sentences
    }
}

fn lex(text: &str) -> Vec<(Kind, Range<usize>)> {
    let mut lexer = RawToken::lexer(text);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let kind = match result {
            Ok(RawToken::Terminator) => Kind::Terminator,
            Ok(RawToken::Closer) => Kind::Closer,
            Ok(RawToken::LineBreak) => Kind::LineBreak,
            Ok(RawToken::Space) => Kind::Space,
            Ok(RawToken::Word) => Kind::Word,
            Err(()) => Kind::Other,
        };
        tokens.push((kind, lexer.span()));
    }
    tokens
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}

/// Decide whether the terminator at `term` closes a sentence. `next` is the
/// index of the first token after the terminator and any closing quotes.
fn ends_sentence(text: &str, tokens: &[(Kind, Range<usize>)], term: usize, next: usize) -> bool {
    let mark = &text[tokens[term].1.clone()];
    let before = term
        .checked_sub(1)
        .and_then(|j| tokens.get(j))
        .filter(|(kind, _)| *kind == Kind::Word)
        .map(|(_, span)| &text[span.clone()]);
    let lowercase_follows = next_word(text, tokens, next)
        .and_then(|w| w.chars().next())
        .is_some_and(char::is_lowercase);

    if mark == "."
        && let Some(word) = before
    {
        let lower = word.to_lowercase();
        if TITLES.contains(&lower.as_str()) {
            return false;
        }
        let mut chars = word.chars();
        if let (Some(c), None) = (chars.next(), chars.next())
            && c.is_uppercase()
            && c != 'I'
        {
            return false;
        }
        if TRAILING.contains(&lower.as_str()) {
            return !lowercase_follows;
        }
    }

    let is_ellipsis = mark.contains('…') || (mark.len() > 1 && mark.chars().all(|c| c == '.'));
    !(is_ellipsis && lowercase_follows)
}

/// The first word after `from` on the same line, skipping spaces and quotes.
fn next_word<'a>(text: &'a str, tokens: &[(Kind, Range<usize>)], from: usize) -> Option<&'a str> {
    tokens[from.min(tokens.len())..]
        .iter()
        .find(|(kind, _)| !matches!(kind, Kind::Space | Kind::Closer))
        .filter(|(kind, _)| *kind == Kind::Word)
        .map(|(_, span)| &text[span.clone()])
}
