//! PDF lexer (tokenizer).
//!
//! Turns raw bytes of decoded object stream content into tokens. The parser in
//! [`crate::parser`] combines tokens into objects.
//!
//! Whitespace (space, `\t`, `\r`, `\n`, `\0`, `\f`) and comments (`%` to end of
//! line) separate tokens and are skipped.

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit0, digit1, one_of},
    combinator::{map, opt, recognize, value},
    sequence::{delimited, pair, preceded, tuple},
};

/// Token types recognized by the lexer.
#[derive(Debug, PartialEq, Clone)]
pub enum Token<'a> {
    /// Integer number (e.g., 42, -123)
    Integer(i64),

    /// Real number (e.g., 3.14, -.5, 5.)
    Real(f64),

    /// Literal string bytes between the outer parentheses, escapes not yet decoded
    LiteralString(&'a [u8]),

    /// Hexadecimal string digits between `<` and `>`, whitespace included
    HexString(&'a [u8]),

    /// Name with `#XX` escapes decoded (e.g., "Type" from "/Type")
    Name(String),

    /// `true`
    True,

    /// `false`
    False,

    /// `null`
    Null,

    /// `[`
    ArrayStart,

    /// `]`
    ArrayEnd,

    /// `<<`
    DictStart,

    /// `>>`
    DictEnd,

    /// `obj`
    ObjStart,

    /// `endobj`
    ObjEnd,

    /// `stream`
    StreamStart,

    /// `endstream`
    StreamEnd,

    /// `R` (used in "10 0 R")
    R,
}

/// PDF whitespace characters (ISO 32000-1, Table 1).
pub fn is_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n' | 0x00 | 0x0C)
}

/// PDF delimiter characters (ISO 32000-1, Table 2).
pub fn is_delimiter(c: u8) -> bool {
    matches!(c, b'(' | b')' | b'<' | b'>' | b'[' | b']' | b'{' | b'}' | b'/' | b'%')
}

fn is_regular(c: u8) -> bool {
    !is_whitespace(c) && !is_delimiter(c)
}

/// Skip whitespace and comments, returning the remaining input.
pub fn skip_whitespace(mut input: &[u8]) -> &[u8] {
    loop {
        match input.first() {
            Some(&c) if is_whitespace(c) => input = &input[1..],
            Some(b'%') => {
                let eol = input
                    .iter()
                    .position(|&c| c == b'\r' || c == b'\n')
                    .unwrap_or(input.len());
                input = &input[eol..];
            },
            _ => return input,
        }
    }
}

/// Integer or real number. A leading sign and a bare leading or trailing
/// decimal point are allowed.
fn parse_number(input: &[u8]) -> IResult<&[u8], Token<'_>> {
    let (rest, text) = recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
    )))(input)?;

    let number_error = || nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Digit));
    // `1e5` or `12R` is one malformed word, not a number followed by a keyword
    if matches!(rest.first(), Some(&c) if is_regular(c)) {
        return Err(number_error());
    }
    let text = std::str::from_utf8(text).map_err(|_| number_error())?;

    if !text.contains('.') {
        if let Ok(i) = text.parse::<i64>() {
            return Ok((rest, Token::Integer(i)));
        }
        // out of i64 range, keep the magnitude as a real
    }
    let r = text.parse::<f64>().map_err(|_| number_error())?;
    Ok((rest, Token::Real(r)))
}

/// Literal string with balanced parentheses. Escapes are skipped over, not
/// decoded, so `\)` does not close the string.
fn parse_literal_string(input: &[u8]) -> IResult<&[u8], Token<'_>> {
    let (body, _) = char('(')(input)?;
    let mut depth = 1usize;
    let mut i = 0;

    while i < body.len() {
        match body[i] {
            b'\\' => i += 2,
            b'(' => {
                depth += 1;
                i += 1;
            },
            b')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((&body[i + 1..], Token::LiteralString(&body[..i])));
                }
                i += 1;
            },
            _ => i += 1,
        }
    }

    Err(nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Eof)))
}

fn parse_hex_string(input: &[u8]) -> IResult<&[u8], Token<'_>> {
    delimited(
        char('<'),
        map(
            take_while(|c: u8| c.is_ascii_hexdigit() || is_whitespace(c)),
            Token::HexString,
        ),
        char('>'),
    )(input)
}

/// Decode `#XX` escape sequences in PDF names (ISO 32000-1, 7.3.5).
///
/// Malformed escapes are kept literally.
///
/// # Examples
///
/// ```
/// # use pdf_objstm::lexer::decode_name_escapes;
/// assert_eq!(decode_name_escapes(b"A#20B#23C"), "A B#C");
/// assert_eq!(decode_name_escapes(b"Type"), "Type");
/// assert_eq!(decode_name_escapes(b"A#"), "A#");
/// ```
pub fn decode_name_escapes(raw: &[u8]) -> String {
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        let escaped = raw
            .get(i + 1..i + 3)
            .filter(|_| raw[i] == b'#')
            .and_then(|hex| std::str::from_utf8(hex).ok())
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());

        match escaped {
            Some(byte) => {
                bytes.push(byte);
                i += 3;
            },
            None => {
                bytes.push(raw[i]);
                i += 1;
            },
        }
    }

    // names are byte sequences; fall back to Latin-1 when they are not UTF-8
    String::from_utf8(bytes)
        .unwrap_or_else(|e| e.into_bytes().iter().map(|&b| b as char).collect())
}

fn parse_name(input: &[u8]) -> IResult<&[u8], Token<'_>> {
    preceded(
        char('/'),
        map(take_while(is_regular), |raw: &[u8]| Token::Name(decode_name_escapes(raw))),
    )(input)
}

fn parse_delimiter(input: &[u8]) -> IResult<&[u8], Token<'_>> {
    alt((
        value(Token::DictStart, tag(b"<<")),
        value(Token::DictEnd, tag(b">>")),
        value(Token::ArrayStart, tag(b"[")),
        value(Token::ArrayEnd, tag(b"]")),
    ))(input)
}

/// A bare word that is one of the reserved keywords. The whole run of regular
/// characters must match, so `nullx` is not `null`.
fn parse_keyword(input: &[u8]) -> IResult<&[u8], Token<'_>> {
    let (rest, word) = take_while1(is_regular)(input)?;
    let tok = match word {
        b"true" => Token::True,
        b"false" => Token::False,
        b"null" => Token::Null,
        b"obj" => Token::ObjStart,
        b"endobj" => Token::ObjEnd,
        b"stream" => Token::StreamStart,
        b"endstream" => Token::StreamEnd,
        b"R" => Token::R,
        _ => return Err(nom::Err::Error(nom::error::Error::new(input, nom::error::ErrorKind::Tag))),
    };
    Ok((rest, tok))
}

/// Parse a single token after skipping whitespace and comments.
///
/// # Errors
///
/// Returns `Err` at end of input or if the input does not start with a
/// valid token.
pub fn token(input: &[u8]) -> IResult<&[u8], Token<'_>> {
    let input = skip_whitespace(input);

    alt((
        parse_delimiter, // before hex strings: `<<` vs `<`
        parse_hex_string,
        parse_literal_string,
        parse_name,
        parse_number,
        parse_keyword,
    ))(input)
}
