use crate::token::{vocabulary, Token};

/// Upper bound on the number of tokens produced for a single pattern.
///
/// Patterns hitting this bound are truncated and flagged in [`Tokenized`].
pub const MAX_TOKENS: usize = 256;

// ── Tokenized ─────────────────────────────────────────────────────────────

/// Result of tokenizing a pattern.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tokenized {
    /// Tokens in left-to-right pattern order.
    pub tokens: Vec<Token>,
    /// Byte offsets of characters that matched no vocabulary entry.
    pub skipped: Vec<usize>,
    /// `true` when a token beyond [`MAX_TOKENS`] was dropped.
    pub truncated: bool,
}

impl Tokenized {
    /// `true` when every character of the pattern produced a token.
    #[inline]
    pub fn is_fully_consumed(&self) -> bool {
        self.skipped.is_empty() && !self.truncated
    }

    /// Concatenated token patterns.
    pub fn to_pattern(&self) -> String {
        self.tokens.iter().map(|t| t.pattern).collect()
    }
}

// ── Tokenizer ─────────────────────────────────────────────────────────────

pub struct Tokenizer<'s> {
    src: &'s str,
    pos: usize,
    vocab: Vec<Token>,
}

impl<'s> Tokenizer<'s> {
    pub fn new(src: &'s str) -> Self {
        let mut vocab: Vec<Token> = vocabulary().collect();
        // Longest entries first so the first prefix hit is the longest one.
        // The sort is stable, keeping vocabulary order among equal lengths.
        vocab.sort_by(|a, b| b.pattern.len().cmp(&a.pattern.len()));
        Self { src, pos: 0, vocab }
    }

    pub fn tokenize(mut self) -> Tokenized {
        let mut out = Tokenized::default();
        while !self.rest().is_empty() {
            match self.next_token() {
                // Only a token that would not fit counts as truncation;
                // trailing unknown characters are still reported as skipped.
                Some(_) if out.tokens.len() == MAX_TOKENS => {
                    out.truncated = true;
                    break;
                }
                Some(tok) => out.tokens.push(tok),
                None => {
                    out.skipped.push(self.pos);
                    self.skip_char();
                }
            }
        }
        out
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn skip_char(&mut self) {
        if let Some(ch) = self.rest().chars().next() {
            self.pos += ch.len_utf8();
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        let rest = self.rest();
        let tok = self.vocab.iter().find(|t| rest.starts_with(t.pattern))?.clone();
        self.pos += tok.pattern.len();
        Some(tok)
    }
}

/// Tokenizes `pattern` into slots and suffix glyphs.
///
/// Never fails: an empty pattern yields no tokens, and characters outside the
/// vocabulary are skipped and reported in [`Tokenized::skipped`].
pub fn tokenize(pattern: &str) -> Tokenized {
    Tokenizer::new(pattern).tokenize()
}
