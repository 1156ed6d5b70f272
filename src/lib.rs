// Allow some clippy lints that are too pedantic for this project
#![allow(clippy::should_implement_trait)]
#![allow(clippy::match_like_matches_macro)]

//! # PDF Object Streams
//!
//! Decoder for PDF 1.5+ object streams (`/Type /ObjStm`), the compressed
//! containers that hold most indirect objects of modern PDF files.
//!
//! ## Features
//!
//! - **Sequential extraction**: values are read in order after the header
//!   table and given the header's object numbers, generation 0
//! - **Tolerant**: more objects than `/N` stops with a diagnostic, fewer is
//!   accepted, stray `endobj` markers are skipped
//! - **Strict mode**: count mismatches become errors via [`ParserOptions::strict`]
//! - **Filters**: FlateDecode, ASCIIHexDecode and ASCII85Decode, with
//!   decompression-bomb limits
//!
//! ## Quick Start
//!
//! ```
//! use pdf_objstm::object::Object;
//! use pdf_objstm::objstm::parse_object_stream;
//! use std::collections::HashMap;
//!
//! let mut dict = HashMap::new();
//! dict.insert("Type".to_string(), Object::Name("ObjStm".to_string()));
//! dict.insert("N".to_string(), Object::Integer(2));
//! dict.insert("First".to_string(), Object::Integer(9));
//! let stream = Object::Stream {
//!     dict,
//!     data: bytes::Bytes::from_static(b"10 0 11 3 42 /Test"),
//! };
//!
//! let contents = parse_object_stream(&stream)?;
//! assert_eq!(contents.get(10).and_then(|o| o.as_integer()), Some(42));
//! assert_eq!(contents.get(11).and_then(|o| o.as_name()), Some("Test"));
//! # Ok::<(), pdf_objstm::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`lexer`]: nom tokenizer for PDF syntax
//! - [`parser`]: object grammar and the [`ObjectGrammar`] cursor trait
//! - [`decoders`]: stream filters
//! - [`objstm`]: header table, extraction, and the single-use [`ObjectStreamParser`]

pub mod error;

// Core PDF syntax
pub mod lexer;
pub mod object;
pub mod parser;
pub mod parser_config;

// Stream filters
pub mod decoders;

// Object streams
pub mod objstm;

pub use error::{Error, Result};
pub use object::{Object, ObjectRef};
pub use objstm::{
    parse_object_stream, parse_object_stream_with_options, DecodedObject, Diagnostic,
    HeaderPair, HeaderTable, ObjectStreamContents, ObjectStreamParser, StreamDescriptor,
};
pub use parser::{ObjectGrammar, ObjectParser};
pub use parser_config::ParserOptions;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
