//! Pattern tokenizer and time decomposition for **timedial**.
//!
//! This crate has no runtime dependencies so pattern validation can be used
//! by tooling without pulling in text measurement or engine code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`token`] | `Token`, `SlotKind`, suffix glyph vocabulary |
//! | [`tokenizer`] | `Tokenizer`, `Tokenized`, `tokenize` entry point |
//! | [`decompose`] | `DisplayMode`, `TimeFields`, `decompose` |
//!
//! # Quick start
//!
//! ```rust
//! use timedial_format::{decompose, tokenize, DisplayMode};
//!
//! let out = tokenize("HH:mm:ss");
//! assert_eq!(out.tokens.len(), 5);
//!
//! let fields = decompose(3_723_000, DisplayMode::Duration);
//! let texts: Vec<String> = out.tokens.iter()
//!     .map(|t| fields.text_for(t, DisplayMode::Duration))
//!     .collect();
//! assert_eq!(texts.concat(), "01:02:03");
//! ```

pub mod decompose;
pub mod token;
pub mod tokenizer;

pub use decompose::{decompose, display_texts, DisplayMode, TimeFields};
pub use token::{SlotKind, Token, TokenKind, SUFFIX_GLYPHS};
pub use tokenizer::{tokenize, Tokenized, Tokenizer, MAX_TOKENS};

/// Pattern used when none is configured.
pub const DEFAULT_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";
