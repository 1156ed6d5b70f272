//! Stream filters needed to reach the decoded content of an object stream.
//!
//! Object streams are almost always `/FlateDecode`; the ASCII encodings show up
//! in hand-written and test files. Filters are applied in `/Filter` order.

use crate::error::{Error, Result};
use crate::parser_config::ParserOptions;

mod ascii;
mod flate;

pub use ascii::{Ascii85Decoder, AsciiHexDecoder};
pub use flate::FlateDecoder;

/// A single PDF stream filter.
pub trait StreamDecoder {
    /// Decode the input data.
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Get the name of this decoder (e.g., "FlateDecode").
    fn name(&self) -> &str;
}

/// Look up the decoder for a `/Filter` name.
///
/// Both the full names and the inline-image abbreviations are accepted.
pub fn decoder_for(filter_name: &str) -> Result<Box<dyn StreamDecoder>> {
    match filter_name {
        "FlateDecode" | "Fl" => Ok(Box::new(FlateDecoder)),
        "ASCIIHexDecode" | "AHx" => Ok(Box::new(AsciiHexDecoder)),
        "ASCII85Decode" | "A85" => Ok(Box::new(Ascii85Decoder)),
        _ => Err(Error::UnsupportedFilter(filter_name.to_string())),
    }
}

/// Decode stream data through a filter pipeline with default limits.
pub fn decode_stream(data: &[u8], filters: &[String]) -> Result<Vec<u8>> {
    decode_stream_with_options(data, filters, None)
}

/// Decode stream data through a filter pipeline.
///
/// # Security
///
/// After every filter the output is checked against the decompression ratio
/// and size limits from `options` (defaults when `None`). A limit of 0
/// disables that check.
pub fn decode_stream_with_options(
    data: &[u8],
    filters: &[String],
    options: Option<&ParserOptions>,
) -> Result<Vec<u8>> {
    let defaults = ParserOptions::default();
    let options = options.unwrap_or(&defaults);
    let max_ratio = options.max_decompression_ratio as u64;
    let max_size = options.max_decompressed_size;

    let compressed_size = data.len().max(1) as u64;
    let mut current = data.to_vec();

    for filter_name in filters {
        let decoder = decoder_for(filter_name)?;
        current = decoder.decode(&current)?;
        log::debug!("{}: {} -> {} bytes", decoder.name(), data.len(), current.len());

        if max_ratio > 0 {
            let ratio = current.len() as u64 / compressed_size;
            if ratio > max_ratio {
                return Err(Error::Decode(format!(
                    "Decompression bomb detected: ratio {}:1 exceeds limit {}:1 (compressed: {} bytes, decompressed: {} bytes)",
                    ratio,
                    max_ratio,
                    data.len(),
                    current.len()
                )));
            }
        }

        if max_size > 0 && current.len() > max_size {
            return Err(Error::Decode(format!(
                "Decompression bomb detected: decompressed size {} bytes exceeds limit {} bytes",
                current.len(),
                max_size
            )));
        }
    }

    Ok(current)
}
