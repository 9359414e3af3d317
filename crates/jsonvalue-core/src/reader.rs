//! JSON Reader — converts text into a [`Value`] tree.
//!
//! A classic recursive-descent parser: one cursor is threaded through mutually
//! recursive `read_*` functions and every construct is chosen by a single byte
//! of lookahead, so no backtracking is ever needed.
//!
//! # Behavior worth knowing
//!
//! - **Trailing content is not validated.** Reading stops after the first
//!   complete value; use [`parse_prefix`] to learn how much input was consumed.
//! - **Duplicate keys**: the later occurrence wins.
//! - **Unknown escapes** (`\q`) are dropped silently: nothing is appended and
//!   the cursor moves past the escaped character.
//! - **`\uXXXX`** escapes decode independently. Surrogate pairs are only
//!   combined when [`ReaderConfig::join_surrogate_pairs`] is set; otherwise each
//!   half becomes U+FFFD.
//! - **Numbers** are scanned greedily (`-`, digits, `.`, digits, exponent) and
//!   converted with Rust's locale-independent `f64` parser.

use crate::error::{JsonError, Result};
use crate::unicode;
use crate::value::{Map, Value};

/// Default limit on array/object nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Reader options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Maximum container nesting; `None` disables the guard and lets deeply
    /// nested input recurse until the stack runs out.
    pub max_depth: Option<usize>,
    /// Combine `\uD83D\uDE00`-style pairs into one supplementary codepoint.
    pub join_surrogate_pairs: bool,
}

impl ReaderConfig {
    pub const fn unbounded() -> Self {
        Self {
            max_depth: None,
            join_surrogate_pairs: false,
        }
    }

    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub const fn with_surrogate_pairs(mut self, join: bool) -> Self {
        self.join_surrogate_pairs = join;
        self
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            join_surrogate_pairs: false,
        }
    }
}

/// Parse JSON text with the default [`ReaderConfig`].
///
/// Leading whitespace is skipped; anything after the first complete value is
/// ignored.
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, ReaderConfig::default())
}

/// Parse JSON text with explicit reader options.
pub fn parse_with(text: &str, config: ReaderConfig) -> Result<Value> {
    parse_prefix(text, config).map(|(value, _)| value)
}

/// Parse the first value in `text` and return it along with the number of
/// bytes consumed (not counting trailing whitespace).
pub fn parse_prefix(text: &str, config: ReaderConfig) -> Result<(Value, usize)> {
    let mut reader = Reader::new(text, config);
    let value = reader.read_value()?;
    Ok((value, reader.pos))
}

/// Cursor state shared by all `read_*` functions.
struct Reader<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    config: ReaderConfig,
}

impl<'a> Reader<'a> {
    fn new(text: &'a str, config: ReaderConfig) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            depth: 0,
            config,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\r' | b'\n' | b'\x0C') = self.peek() {
            self.pos += 1;
        }
    }

    fn unexpected_end(&self) -> JsonError {
        JsonError::UnexpectedEnd { offset: self.pos }
    }

    fn unexpected_character(&self) -> JsonError {
        self.unexpected_character_at(self.pos)
    }

    fn unexpected_character_at(&self, offset: usize) -> JsonError {
        let found = self
            .text
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        JsonError::UnexpectedCharacter { offset, found }
    }

    /// Skip whitespace, then require `byte` and step past it.
    fn expect(&mut self, byte: u8) -> Result<()> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.unexpected_end()),
            Some(b) if b == byte => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(self.unexpected_character()),
        }
    }

    fn enter_container(&mut self) -> Result<()> {
        self.depth += 1;
        match self.config.max_depth {
            Some(limit) if self.depth > limit => Err(JsonError::NestingTooDeep {
                offset: self.pos,
                limit,
            }),
            _ => Ok(()),
        }
    }

    fn leave_container(&mut self) {
        self.depth -= 1;
    }

    /// Dispatch on the first non-whitespace byte.
    fn read_value(&mut self) -> Result<Value> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(self.unexpected_end()),
            Some(b'{') => self.read_object(),
            Some(b'[') => self.read_array(),
            Some(b'"') => self.read_string().map(Value::String),
            Some(b'-' | b'0'..=b'9') => self.read_number(),
            Some(b't') => self.read_literal("true", Value::Bool(true)),
            Some(b'f') => self.read_literal("false", Value::Bool(false)),
            Some(b'n') => self.read_literal("null", Value::Null),
            Some(_) => Err(self.unexpected_character()),
        }
    }

    /// `{` already peeked. Zero members is checked before requiring a key.
    fn read_object(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.pos += 1;
        let mut members = Map::new();

        self.skip_whitespace();
        match self.peek() {
            None => return Err(self.unexpected_end()),
            Some(b'}') => {
                self.pos += 1;
                self.leave_container();
                return Ok(Value::Object(members));
            }
            Some(_) => {}
        }

        loop {
            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.unexpected_end()),
                Some(b'"') => {}
                Some(_) => return Err(self.unexpected_character()),
            }
            let key = self.read_string()?;
            self.expect(b':')?;
            let value = self.read_value()?;
            members.insert(key, value);

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.unexpected_end()),
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                Some(b',') => self.pos += 1,
                Some(_) => return Err(self.unexpected_character()),
            }
        }

        self.leave_container();
        Ok(Value::Object(members))
    }

    /// `[` already peeked.
    fn read_array(&mut self) -> Result<Value> {
        self.enter_container()?;
        self.pos += 1;
        let mut items = Vec::new();

        self.skip_whitespace();
        match self.peek() {
            None => return Err(self.unexpected_end()),
            Some(b']') => {
                self.pos += 1;
                self.leave_container();
                return Ok(Value::Array(items));
            }
            Some(_) => {}
        }

        loop {
            items.push(self.read_value()?);

            self.skip_whitespace();
            match self.peek() {
                None => return Err(self.unexpected_end()),
                Some(b']') => {
                    self.pos += 1;
                    break;
                }
                Some(b',') => self.pos += 1,
                Some(_) => return Err(self.unexpected_character()),
            }
        }

        self.leave_container();
        Ok(Value::Array(items))
    }

    /// Opening `"` already peeked. Unescaped runs are copied as whole slices,
    /// so multi-byte UTF-8 passes through untouched.
    fn read_string(&mut self) -> Result<String> {
        self.pos += 1;
        let mut out = String::new();
        let mut run_start = self.pos;

        loop {
            match self.peek() {
                None => return Err(self.unexpected_end()),
                Some(b'"') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    return Ok(out);
                }
                Some(b'\\') => {
                    out.push_str(&self.text[run_start..self.pos]);
                    self.pos += 1;
                    self.read_escape(&mut out)?;
                    run_start = self.pos;
                }
                Some(_) => self.pos += 1,
            }
        }
    }

    /// Cursor sits on the byte after `\`; leaves it after the whole escape.
    fn read_escape(&mut self, out: &mut String) -> Result<()> {
        let Some(escape) = self.peek() else {
            return Err(self.unexpected_end());
        };
        match escape {
            b'"' => out.push('"'),
            b'\\' => out.push('\\'),
            b'/' => out.push('/'),
            b'b' => out.push('\u{8}'),
            b'f' => out.push('\u{c}'),
            b'n' => out.push('\n'),
            b'r' => out.push('\r'),
            b't' => out.push('\t'),
            b'u' => {
                let codepoint = self.read_hex4(self.pos + 1)?;
                self.pos += 4;
                let codepoint = self.maybe_join_surrogate(codepoint);
                unicode::push_codepoint(out, codepoint);
            }
            _ => {
                // Unknown escape: dropped, but step over the full character.
                let width = self.text[self.pos..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                self.pos += width;
                return Ok(());
            }
        }
        self.pos += 1;
        Ok(())
    }

    /// Decode the four hex digits starting at `start`.
    fn read_hex4(&self, start: usize) -> Result<u32> {
        let Some(digits) = self.bytes.get(start..start + 4) else {
            return Err(JsonError::UnexpectedEnd {
                offset: self.bytes.len(),
            });
        };
        digits.iter().try_fold(0u32, |acc, &b| {
            let nibble = (b as char)
                .to_digit(16)
                .ok_or(JsonError::InvalidUnicodeEscape { offset: start - 2 })?;
            Ok((acc << 4) | nibble)
        })
    }

    /// Cursor sits on the last hex digit of a `\uXXXX` escape. When pair
    /// joining is on and a low-surrogate escape follows, consume it too.
    fn maybe_join_surrogate(&mut self, high: u32) -> u32 {
        if !self.config.join_surrogate_pairs || !unicode::is_high_surrogate(high) {
            return high;
        }
        let next = self.pos + 1;
        if self.bytes.get(next..next + 2) != Some(b"\\u") {
            return high;
        }
        match self.read_hex4(next + 2) {
            Ok(low) if unicode::is_low_surrogate(low) => {
                self.pos = next + 5;
                unicode::combine_surrogates(high, low)
            }
            _ => high,
        }
    }

    /// Greedy single forward scan, then a locale-independent `f64` parse.
    /// Scanned text that is not a valid number (`-`, `1e`) fails at its first
    /// character.
    fn read_number(&mut self) -> Result<Value> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        self.skip_digits();
        if self.peek() == Some(b'.') {
            self.pos += 1;
            self.skip_digits();
        }
        if let Some(b'e' | b'E') = self.peek() {
            self.pos += 1;
            if let Some(b'+' | b'-') = self.peek() {
                self.pos += 1;
            }
            self.skip_digits();
        }

        let literal = &self.text[start..self.pos];
        match literal.parse::<f64>() {
            Ok(n) => Ok(Value::Number(n)),
            Err(_) => Err(self.unexpected_character_at(start)),
        }
    }

    fn skip_digits(&mut self) {
        while let Some(b'0'..=b'9') = self.peek() {
            self.pos += 1;
        }
    }

    /// Exact literal match; partial matches such as `tru` fail at the literal's
    /// first character.
    fn read_literal(&mut self, literal: &str, value: Value) -> Result<Value> {
        if self.bytes[self.pos..].starts_with(literal.as_bytes()) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(self.unexpected_character())
        }
    }
}
