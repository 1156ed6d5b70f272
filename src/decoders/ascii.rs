//! ASCIIHexDecode and ASCII85Decode.

use crate::decoders::StreamDecoder;
use crate::error::{Error, Result};

/// ASCIIHexDecode: pairs of hex digits, whitespace ignored, `>` ends the data.
///
/// An odd trailing digit is treated as if followed by `0`.
pub struct AsciiHexDecoder;

impl StreamDecoder for AsciiHexDecoder {
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let digits = input
            .iter()
            .copied()
            .take_while(|&c| c != b'>')
            .filter(|c| !is_pdf_whitespace(*c))
            .map(|c| {
                hex_value(c).ok_or_else(|| {
                    Error::Decode(format!("ASCIIHexDecode: invalid hex digit '{}'", c as char))
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(digits
            .chunks(2)
            .map(|pair| (pair[0] << 4) | pair.get(1).copied().unwrap_or(0))
            .collect())
    }

    fn name(&self) -> &str {
        "ASCIIHexDecode"
    }
}

/// ASCII85Decode: groups of five characters `!`..`u` encode four bytes,
/// `z` stands for four zero bytes, `~>` ends the data.
pub struct Ascii85Decoder;

impl StreamDecoder for Ascii85Decoder {
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::with_capacity(input.len() * 4 / 5);
        let mut group = [0u8; 5];
        let mut len = 0;

        for &c in input {
            match c {
                b'~' => break,
                b'z' if len == 0 => output.extend_from_slice(&[0; 4]),
                b'z' => {
                    return Err(Error::Decode(
                        "ASCII85Decode: 'z' inside a group".to_string(),
                    ));
                },
                b'!'..=b'u' => {
                    group[len] = c - b'!';
                    len += 1;
                    if len == 5 {
                        output.extend_from_slice(&group_value(&group)?.to_be_bytes());
                        len = 0;
                    }
                },
                c if is_pdf_whitespace(c) => {},
                c => {
                    return Err(Error::Decode(format!(
                        "ASCII85Decode: invalid character '{}'",
                        c as char
                    )));
                },
            }
        }

        match len {
            0 => {},
            1 => {
                return Err(Error::Decode(
                    "ASCII85Decode: final group has a single character".to_string(),
                ));
            },
            _ => {
                // pad the partial group with 'u' and keep len - 1 bytes
                group[len..].fill(84);
                let bytes = group_value(&group)?.to_be_bytes();
                output.extend_from_slice(&bytes[..len - 1]);
            },
        }

        Ok(output)
    }

    fn name(&self) -> &str {
        "ASCII85Decode"
    }
}

fn group_value(group: &[u8; 5]) -> Result<u32> {
    group
        .iter()
        .try_fold(0u32, |acc, &d| acc.checked_mul(85)?.checked_add(d as u32))
        .ok_or_else(|| Error::Decode("ASCII85Decode: group value overflow".to_string()))
}

fn hex_value(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}

fn is_pdf_whitespace(c: u8) -> bool {
    matches!(c, b' ' | b'\t' | b'\r' | b'\n' | 0x00 | 0x0C)
}
