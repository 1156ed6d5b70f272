//! FlateDecode (zlib/deflate) implementation.
//!
//! Uses the flate2 crate. Truncated or slightly damaged streams are common in
//! the wild, so data recovered before a decompression error is kept.

use crate::decoders::StreamDecoder;
use crate::error::{Error, Result};
use flate2::read::{DeflateDecoder, ZlibDecoder};
use std::io::Read;

/// FlateDecode filter implementation.
pub struct FlateDecoder;

impl StreamDecoder for FlateDecoder {
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        let zlib_err = match ZlibDecoder::new(input).read_to_end(&mut output) {
            Ok(_) => return Ok(output),
            Err(e) if !output.is_empty() => {
                log::warn!(
                    "FlateDecode partial recovery: extracted {} bytes before corruption: {}",
                    output.len(),
                    e
                );
                return Ok(output);
            },
            Err(e) => e,
        };

        // Some producers omit or corrupt the two-byte zlib header
        log::info!("Zlib decode failed, trying raw deflate");
        for skip in [0usize, 2] {
            if input.len() <= skip {
                break;
            }
            output.clear();
            match DeflateDecoder::new(&input[skip..]).read_to_end(&mut output) {
                Ok(_) if !output.is_empty() => {
                    log::info!("Raw deflate recovery succeeded: {} bytes", output.len());
                    return Ok(output);
                },
                Err(_) if !output.is_empty() => {
                    log::warn!("Raw deflate partial recovery: {} bytes", output.len());
                    return Ok(output);
                },
                _ => {},
            }
        }

        Err(Error::Decode(format!(
            "FlateDecode decompression failed: {} (compressed size: {} bytes)",
            zlib_err,
            input.len()
        )))
    }

    fn name(&self) -> &str {
        "FlateDecode"
    }
}
