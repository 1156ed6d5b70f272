//! PDF object parser.
//!
//! Combines tokens from the lexer into objects (arrays, dictionaries, indirect
//! references, strings). [`ObjectParser`] wraps the grammar in a byte cursor
//! that the object stream decoder drives one top-level value at a time through
//! the [`ObjectGrammar`] trait.
//!
//! # Error Handling
//!
//! The combinator functions return nom's `IResult`. The cursor converts
//! failures into [`Error::ParseError`] carrying the byte offset into the
//! decoded content.

use crate::error::{Error, Result};
use crate::lexer::{Token, skip_whitespace, token};
use crate::object::{Object, ObjectRef};
use nom::IResult;
use nom::error::ErrorKind;
use std::collections::HashMap;

/// Default array/dictionary nesting limit (ISO 32000-1 Annex H).
pub const DEFAULT_MAX_NESTING: u32 = 100;

/// Byte-level object grammar, as seen by the object stream decoder.
///
/// Implementations own a read position over decoded stream content. All
/// methods advance that one shared position.
pub trait ObjectGrammar {
    /// Parse the next top-level value.
    ///
    /// Returns `Ok(None)` at end of content, which also covers a stray
    /// `endobj`/`endstream` keyword where a value should start.
    fn parse_next_value(&mut self) -> Result<Option<Object>>;

    /// Read one integer token.
    fn read_integer(&mut self) -> Result<i64>;

    /// The byte at the current position, without consuming it.
    fn peek_byte(&self) -> Option<u8>;

    /// True when the next token is an `endobj` or `endstream` keyword.
    fn at_object_marker(&self) -> bool;

    /// Skip whitespace and comments.
    fn skip_whitespace(&mut self);

    /// Skip to just past the next end-of-line marker (`\n`, `\r` or `\r\n`).
    fn skip_line(&mut self);

    /// True when no bytes remain.
    fn is_at_end(&self) -> bool;

    /// Current byte offset.
    fn position(&self) -> usize;
}

/// [`ObjectGrammar`] over an in-memory byte slice.
#[derive(Debug, Clone)]
pub struct ObjectParser<'a> {
    data: &'a [u8],
    pos: usize,
    max_nesting: u32,
}

impl<'a> ObjectParser<'a> {
    /// Create a parser positioned at the start of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }

    /// Limit array/dictionary nesting within one value.
    pub fn with_max_nesting(mut self, max_nesting: u32) -> Self {
        self.max_nesting = max_nesting;
        self
    }

    fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos.min(self.data.len())..]
    }

    fn advance_to(&mut self, rest: &'a [u8]) {
        self.pos = self.data.len() - rest.len();
    }

    fn to_error(&self, err: nom::Err<nom::error::Error<&[u8]>>) -> Error {
        match err {
            nom::Err::Incomplete(_) => Error::UnexpectedEof,
            nom::Err::Error(e) | nom::Err::Failure(e) => {
                let offset = self.data.len().saturating_sub(e.input.len());
                match e.code {
                    ErrorKind::TooLarge => Error::RecursionLimitExceeded(self.max_nesting),
                    ErrorKind::Eof => Error::ParseError {
                        offset,
                        reason: "unexpected end of content inside object".to_string(),
                    },
                    kind => Error::ParseError {
                        offset,
                        reason: format!("malformed object ({})", kind.description()),
                    },
                }
            },
        }
    }
}

impl ObjectGrammar for ObjectParser<'_> {
    fn parse_next_value(&mut self) -> Result<Option<Object>> {
        self.skip_whitespace();
        if self.is_at_end() {
            return Ok(None);
        }

        if self.at_object_marker() {
            log::debug!("Object marker at byte {} ends the content", self.pos);
            return Ok(None);
        }

        let (rest, obj) = parse_object_with_depth(self.remaining(), self.max_nesting)
            .map_err(|e| self.to_error(e))?;
        self.advance_to(rest);
        Ok(Some(obj))
    }

    fn read_integer(&mut self) -> Result<i64> {
        self.skip_whitespace();
        let start = self.pos;

        match token(self.remaining()) {
            Ok((rest, Token::Integer(i))) => {
                self.advance_to(rest);
                Ok(i)
            },
            Ok((_, other)) => Err(Error::ParseError {
                offset: start,
                reason: format!("expected integer, found {:?}", other),
            }),
            Err(_) if self.is_at_end() => Err(Error::UnexpectedEof),
            Err(_) => Err(Error::ParseError {
                offset: start,
                reason: "expected integer".to_string(),
            }),
        }
    }

    fn peek_byte(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    fn at_object_marker(&self) -> bool {
        matches!(
            token(self.remaining()),
            Ok((_, Token::ObjEnd | Token::StreamEnd))
        )
    }

    fn skip_whitespace(&mut self) {
        let rest = skip_whitespace(self.remaining());
        self.advance_to(rest);
    }

    fn skip_line(&mut self) {
        let rest = self.remaining();
        let eol = rest
            .iter()
            .position(|&c| c == b'\r' || c == b'\n')
            .unwrap_or(rest.len());

        let mut next = self.pos + eol;
        if self.data.get(next) == Some(&b'\r') {
            next += 1;
        }
        if self.data.get(next) == Some(&b'\n') {
            next += 1;
        }
        self.pos = next;
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    fn position(&self) -> usize {
        self.pos
    }
}

/// Decode escape sequences in a literal string body (ISO 32000-1, 7.3.4.2).
///
/// Handles `\n \r \t \b \f \( \) \\`, octal `\ddd` (one to three digits), and
/// line continuation (backslash before an end-of-line). A backslash before any
/// other character is dropped.
///
/// # Examples
///
/// ```
/// # use pdf_objstm::parser::decode_literal_string_escapes;
/// let decoded = decode_literal_string_escapes(b"Section \\247 71.01");
/// assert_eq!(decoded, b"Section \xa7 71.01");
/// ```
pub fn decode_literal_string_escapes(raw: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(raw.len());
    let mut bytes = raw.iter().copied().peekable();

    while let Some(c) = bytes.next() {
        if c != b'\\' {
            result.push(c);
            continue;
        }

        let Some(escaped) = bytes.next() else {
            break;
        };
        match escaped {
            b'n' => result.push(b'\n'),
            b'r' => result.push(b'\r'),
            b't' => result.push(b'\t'),
            b'b' => result.push(0x08),
            b'f' => result.push(0x0C),
            b'\n' => {},
            b'\r' => {
                bytes.next_if_eq(&b'\n');
            },
            b'0'..=b'7' => {
                let mut code = (escaped - b'0') as u32;
                for _ in 0..2 {
                    match bytes.next_if(|d| (b'0'..=b'7').contains(d)) {
                        Some(d) => code = code * 8 + (d - b'0') as u32,
                        None => break,
                    }
                }
                result.push((code & 0xFF) as u8);
            },
            other => result.push(other),
        }
    }

    result
}

/// Decode a hex string body to bytes.
///
/// Whitespace is ignored and an odd final digit is padded with 0.
///
/// # Example
///
/// ```
/// use pdf_objstm::parser::decode_hex;
///
/// assert_eq!(decode_hex(b"48 65 6C 6C 6F").unwrap(), b"Hello");
/// assert_eq!(decode_hex(b"901FA").unwrap(), vec![0x90, 0x1F, 0xA0]);
/// ```
///
/// # Errors
///
/// Returns `Err` if the input contains a non-hex, non-whitespace byte.
pub fn decode_hex(hex_bytes: &[u8]) -> Result<Vec<u8>> {
    if let Some(&c) = hex_bytes
        .iter()
        .find(|c| !c.is_ascii_hexdigit() && !c.is_ascii_whitespace())
    {
        return Err(Error::ParseError {
            offset: 0,
            reason: format!("invalid hex digit '{}'", c as char),
        });
    }
    Ok(pack_hex_digits(hex_bytes))
}

/// Pack hex digits pairwise into bytes, skipping anything else.
fn pack_hex_digits(hex_bytes: &[u8]) -> Vec<u8> {
    let nibbles: Vec<u8> = hex_bytes
        .iter()
        .filter_map(|&c| (c as char).to_digit(16).map(|d| d as u8))
        .collect();

    nibbles
        .chunks(2)
        .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
        .collect()
}

/// Parse one PDF object from the start of `input`.
///
/// Handles null, booleans, numbers, strings, names, arrays, dictionaries and
/// indirect references (`10 0 R`).
///
/// # Example
///
/// ```
/// use pdf_objstm::parser::parse_object;
///
/// let (remaining, obj) = parse_object(b"[ 1 2 /Name ] 42").unwrap();
/// assert_eq!(obj.as_array().map(|a| a.len()), Some(3));
/// assert_eq!(remaining, b" 42");
/// ```
pub fn parse_object(input: &[u8]) -> IResult<&[u8], Object> {
    parse_object_with_depth(input, DEFAULT_MAX_NESTING)
}

/// [`parse_object`] with an explicit nesting limit.
pub fn parse_object_with_depth(input: &[u8], max_nesting: u32) -> IResult<&[u8], Object> {
    let start = skip_whitespace(input);
    let (rest, tok) = token(start)?;

    match tok {
        Token::Null => Ok((rest, Object::Null)),
        Token::True => Ok((rest, Object::Boolean(true))),
        Token::False => Ok((rest, Object::Boolean(false))),
        Token::Integer(i) => Ok(parse_reference(i, rest).unwrap_or((rest, Object::Integer(i)))),
        Token::Real(r) => Ok((rest, Object::Real(r))),
        Token::LiteralString(raw) => Ok((rest, Object::String(decode_literal_string_escapes(raw)))),
        // the lexer admits only hex digits and whitespace here
        Token::HexString(raw) => Ok((rest, Object::String(pack_hex_digits(raw)))),
        Token::Name(name) => Ok((rest, Object::Name(name))),
        Token::ArrayStart | Token::DictStart if max_nesting == 0 => {
            Err(failure(start, ErrorKind::TooLarge))
        },
        Token::ArrayStart => parse_array(rest, max_nesting - 1),
        Token::DictStart => parse_dictionary(rest, max_nesting - 1),
        _ => Err(nom::Err::Error(nom::error::Error::new(start, ErrorKind::Tag))),
    }
}

fn failure(input: &[u8], kind: ErrorKind) -> nom::Err<nom::error::Error<&[u8]>> {
    nom::Err::Failure(nom::error::Error::new(input, kind))
}

/// Look ahead for `gen R` after an integer.
fn parse_reference(id: i64, input: &[u8]) -> Option<(&[u8], Object)> {
    let (input, gen) = match token(input) {
        Ok((rest, Token::Integer(gen))) => (rest, gen),
        _ => return None,
    };
    let (input, _) = match token(input) {
        Ok((rest, Token::R)) => (rest, ()),
        _ => return None,
    };
    let id = u32::try_from(id).ok()?;
    let gen = u16::try_from(gen).ok()?;
    Some((input, Object::Reference(ObjectRef::new(id, gen))))
}

/// Array elements after `[`, up to and including `]`.
fn parse_array(input: &[u8], max_nesting: u32) -> IResult<&[u8], Object> {
    let mut objects = Vec::new();
    let mut remaining = input;

    loop {
        let next = skip_whitespace(remaining);
        match next.first() {
            None => return Err(failure(next, ErrorKind::Eof)),
            Some(b']') => return Ok((&next[1..], Object::Array(objects))),
            Some(_) => {
                let (rest, obj) = parse_object_with_depth(next, max_nesting)?;
                objects.push(obj);
                remaining = rest;
            },
        }
    }
}

/// Dictionary entries after `<<`, up to and including `>>`. Keys must be names.
fn parse_dictionary(input: &[u8], max_nesting: u32) -> IResult<&[u8], Object> {
    let mut dict = HashMap::new();
    let mut remaining = input;

    loop {
        let next = skip_whitespace(remaining);
        if next.is_empty() {
            return Err(failure(next, ErrorKind::Eof));
        }
        if next.starts_with(b">>") {
            return Ok((&next[2..], Object::Dictionary(dict)));
        }

        let key = match token(next) {
            Ok((rest, Token::Name(key))) => {
                remaining = rest;
                key
            },
            _ => return Err(failure(next, ErrorKind::Tag)),
        };

        let value_start = skip_whitespace(remaining);
        if value_start.is_empty() {
            return Err(failure(value_start, ErrorKind::Eof));
        }
        let (rest, value) = parse_object_with_depth(value_start, max_nesting)?;
        dict.insert(key, value);
        remaining = rest;
    }
}
