//! Object stream decoding (PDF 1.5+).
//!
//! Object streams (/Type /ObjStm) bundle many indirect objects into one
//! compressed stream. After the filters are applied the content looks like:
//!
//! ```text
//! 10 0 11 15 12 28     % N pairs: (object number, byte offset)
//! << /Type /Font >>    % object 10
//! [ 1 2 3 ]            % object 11
//! (text)               % object 12
//! ```
//!
//! `/N` (from the stream dictionary) says how many pairs the header holds.
//! Objects are read strictly in sequence after the header; the offsets are
//! consumed but not used for seeking. The i-th value parsed is given the i-th
//! header number and generation 0.
//!
//! Producers get `/N` wrong in both directions. Extra objects stop the decode
//! with a [`Diagnostic`], missing ones just shorten the result. Only grammar
//! errors abort.

use crate::error::{Error, Result};
use crate::object::{Object, ObjectRef};
use crate::parser::{ObjectGrammar, ObjectParser};
use crate::parser_config::ParserOptions;
use std::collections::HashMap;
use std::fmt;
use std::io::{Cursor, Read};

/// Metadata and content access for the stream being decoded.
pub trait StreamDescriptor {
    /// Integer entry of the stream dictionary.
    fn get_int(&self, key: &str) -> Option<i64>;

    /// Name entry of the stream dictionary.
    fn get_name(&self, key: &str) -> Option<&str>;

    /// Stream content with all filters applied.
    fn decoded_bytes(&self, options: &ParserOptions) -> Result<Vec<u8>>;
}

impl StreamDescriptor for Object {
    fn get_int(&self, key: &str) -> Option<i64> {
        self.as_dict()?.get(key)?.as_integer()
    }

    fn get_name(&self, key: &str) -> Option<&str> {
        self.as_dict()?.get(key)?.as_name()
    }

    fn decoded_bytes(&self, options: &ParserOptions) -> Result<Vec<u8>> {
        self.decode_stream_data(Some(options))
    }
}

/// One `(object number, offset)` entry of the header table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderPair {
    /// Object number assigned to the value at this position
    pub object_number: u64,
    /// Offset relative to `/First`; informational only
    pub offset: u64,
}

/// The header table, in stream order.
pub type HeaderTable = Vec<HeaderPair>;

/// A value from the stream together with its identity.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedObject {
    /// Object number from the header, generation always 0
    pub id: ObjectRef,
    /// The parsed value
    pub object: Object,
}

/// Non-fatal conditions found while decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The content holds more values than `/N`. Decoding stopped at the
    /// first unmatched value, which was discarded.
    MoreObjectsThanDeclared {
        /// `/N`
        declared: usize,
        /// Byte offset of the discarded value's end
        discarded_at: usize,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MoreObjectsThanDeclared { declared, discarded_at } => write!(
                f,
                "/ObjStm (object stream) has more objects than declared: /N {}, stopped at byte {}",
                declared, discarded_at
            ),
        }
    }
}

/// Result of decoding one object stream.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectStreamContents {
    declared: usize,
    objects: Vec<DecodedObject>,
    diagnostics: Vec<Diagnostic>,
}

impl ObjectStreamContents {
    /// Decoded objects in header order.
    pub fn objects(&self) -> &[DecodedObject] {
        &self.objects
    }

    /// Take ownership of the decoded objects.
    pub fn into_objects(self) -> Vec<DecodedObject> {
        self.objects
    }

    /// Non-fatal conditions recorded during decoding.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// `/N` as declared by the stream.
    pub fn declared(&self) -> usize {
        self.declared
    }

    /// Number of decoded objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// True if no objects were decoded.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// True if exactly `/N` objects were decoded.
    pub fn is_complete(&self) -> bool {
        self.objects.len() == self.declared
    }

    /// Look up a decoded object by object number.
    ///
    /// If a number repeats, the later object wins, as in [`into_map`](Self::into_map).
    pub fn get(&self, object_number: u32) -> Option<&Object> {
        self.objects
            .iter()
            .rev()
            .find(|d| d.id.id == object_number)
            .map(|d| &d.object)
    }

    /// Object numbers in header order.
    pub fn object_numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.objects.iter().map(|d| d.id.id)
    }

    /// Objects keyed by object number, for caching in the document model.
    ///
    /// If a number repeats, the later object wins.
    pub fn into_map(self) -> HashMap<u32, Object> {
        self.objects
            .into_iter()
            .map(|d| (d.id.id, d.object))
            .collect()
    }
}

/// Read `count` header pairs.
///
/// Nothing is consumed when `count` is 0.
///
/// # Errors
///
/// A missing or non-integer token, a negative value, or an object number that
/// does not fit a PDF object number is a structural error.
pub fn read_header<G: ObjectGrammar>(grammar: &mut G, count: usize) -> Result<HeaderTable> {
    let mut header = Vec::with_capacity(count.min(4096));

    for i in 0..count {
        let offset_before = grammar.position();
        let object_number = grammar.read_integer()?;
        let offset = grammar.read_integer()?;

        if object_number < 0 || object_number > u32::MAX as i64 || offset < 0 {
            return Err(Error::ParseError {
                offset: offset_before,
                reason: format!(
                    "invalid object stream header pair {}: ({}, {})",
                    i, object_number, offset
                ),
            });
        }

        header.push(HeaderPair {
            object_number: object_number as u64,
            offset: offset as u64,
        });
    }

    log::debug!("Object stream header: {} pairs", header.len());
    Ok(header)
}

/// Pull values from `grammar` until end of content and pair them with `header`.
///
/// # Errors
///
/// Grammar errors propagate. In strict mode a count mismatch is
/// [`Error::ObjectCountMismatch`].
pub fn extract_objects<G: ObjectGrammar>(
    grammar: &mut G,
    header: &[HeaderPair],
    options: &ParserOptions,
) -> Result<ObjectStreamContents> {
    let declared = header.len();
    let mut objects = Vec::with_capacity(declared);
    let mut diagnostics = Vec::new();

    while let Some(object) = grammar.parse_next_value()? {
        let Some(pair) = header.get(objects.len()) else {
            if options.strict {
                return Err(Error::ObjectCountMismatch {
                    declared,
                    found: declared + 1,
                });
            }
            let diagnostic = Diagnostic::MoreObjectsThanDeclared {
                declared,
                discarded_at: grammar.position(),
            };
            log::warn!("{}", diagnostic);
            diagnostics.push(diagnostic);
            break;
        };

        // header pairs are range-checked by read_header
        let id = ObjectRef::new(pair.object_number as u32, 0);
        log::debug!("Parsed {} from object stream: {}", id, object.type_name());
        objects.push(DecodedObject { id, object });

        // objects inside a stream carry no obj/endobj markers, but some producers write them
        if options.skip_endobj_markers {
            grammar.skip_whitespace();
            if grammar.peek_byte() == Some(b'e') && grammar.at_object_marker() {
                grammar.skip_line();
            }
        }
    }

    if options.strict && objects.len() < declared {
        return Err(Error::ObjectCountMismatch {
            declared,
            found: objects.len(),
        });
    }

    Ok(ObjectStreamContents {
        declared,
        objects,
        diagnostics,
    })
}

/// Single-use decoder for one object stream.
///
/// The parser owns the source reader. [`parse`](Self::parse) consumes the
/// parser, so the reader is released exactly once whichever way decoding ends.
///
/// # Example
///
/// ```
/// use pdf_objstm::objstm::ObjectStreamParser;
///
/// let content = b"5 0 9 10 << /A 1 >> << /B 2 >>";
/// let contents = ObjectStreamParser::new(2, &content[..]).parse()?;
///
/// let numbers: Vec<u32> = contents.object_numbers().collect();
/// assert_eq!(numbers, vec![5, 9]);
/// assert!(contents.diagnostics().is_empty());
/// # Ok::<(), pdf_objstm::error::Error>(())
/// ```
pub struct ObjectStreamParser<R: Read> {
    declared: usize,
    source: R,
    options: ParserOptions,
}

impl ObjectStreamParser<Cursor<Vec<u8>>> {
    /// Prepare a parser from an object stream's dictionary and content.
    pub fn from_stream<S: StreamDescriptor + ?Sized>(stream: &S) -> Result<Self> {
        Self::from_stream_with_options(stream, ParserOptions::default())
    }

    /// Like [`from_stream`](Self::from_stream) with explicit options.
    ///
    /// # Errors
    ///
    /// `InvalidPdf` if `/Type` is present but not `/ObjStm`, or `/N` is
    /// missing or negative. Filter failures propagate.
    pub fn from_stream_with_options<S: StreamDescriptor + ?Sized>(
        stream: &S,
        options: ParserOptions,
    ) -> Result<Self> {
        if let Some(type_name) = stream.get_name("Type") {
            if type_name != "ObjStm" {
                return Err(Error::InvalidPdf(format!(
                    "expected /Type /ObjStm, got /Type /{}",
                    type_name
                )));
            }
        }

        let n = stream
            .get_int("N")
            .ok_or_else(|| Error::InvalidPdf("object stream missing /N entry".to_string()))?;
        let declared = usize::try_from(n)
            .map_err(|_| Error::InvalidPdf(format!("invalid object stream /N value: {}", n)))?;

        let content = stream.decoded_bytes(&options)?;
        Ok(Self::new(declared, Cursor::new(content)).with_options(options))
    }
}

impl<R: Read> ObjectStreamParser<R> {
    /// Create a parser for `declared` objects whose decoded content is read from `source`.
    pub fn new(declared: usize, source: R) -> Self {
        Self {
            declared,
            source,
            options: ParserOptions::default(),
        }
    }

    /// Set decoding options.
    pub fn with_options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    /// Read the header table, then extract every object.
    ///
    /// # Errors
    ///
    /// `Io` if the source cannot be read, `InvalidPdf` if `/N` exceeds
    /// `max_declared_objects`, grammar errors from the header or objects.
    pub fn parse(self) -> Result<ObjectStreamContents> {
        // `source` lives until this function returns and is dropped on every path
        let Self {
            declared,
            mut source,
            options,
        } = self;

        if declared > options.max_declared_objects {
            return Err(Error::InvalidPdf(format!(
                "invalid object stream /N value: {} (limit {})",
                declared, options.max_declared_objects
            )));
        }

        let mut content = Vec::new();
        source.read_to_end(&mut content)?;

        let mut grammar = ObjectParser::new(&content).with_max_nesting(options.max_nesting);
        let header = read_header(&mut grammar, declared)?;
        extract_objects(&mut grammar, &header, &options)
    }
}

/// Decode an object stream object with default options.
pub fn parse_object_stream(stream_obj: &Object) -> Result<ObjectStreamContents> {
    parse_object_stream_with_options(stream_obj, ParserOptions::default())
}

/// Decode an object stream object.
pub fn parse_object_stream_with_options(
    stream_obj: &Object,
    options: ParserOptions,
) -> Result<ObjectStreamContents> {
    ObjectStreamParser::from_stream_with_options(stream_obj, options)?.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn decode(n: usize, content: &[u8]) -> Result<ObjectStreamContents> {
        ObjectStreamParser::new(n, content).parse()
    }

    fn numbers(contents: &ObjectStreamContents) -> Vec<u32> {
        contents.object_numbers().collect()
    }

    /// Reader that counts how often it is released.
    struct TrackedReader {
        inner: Cursor<Vec<u8>>,
        fail: bool,
        releases: Rc<Cell<usize>>,
    }

    impl TrackedReader {
        fn new(data: &[u8], releases: &Rc<Cell<usize>>) -> Self {
            Self {
                inner: Cursor::new(data.to_vec()),
                fail: false,
                releases: Rc::clone(releases),
            }
        }
    }

    impl Read for TrackedReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.fail {
                return Err(std::io::Error::new(std::io::ErrorKind::Other, "device unplugged"));
            }
            self.inner.read(buf)
        }
    }

    impl Drop for TrackedReader {
        fn drop(&mut self) {
            self.releases.set(self.releases.get() + 1);
        }
    }

    // ========================================================================
    // Header table
    // ========================================================================

    #[test]
    fn test_read_header() {
        let mut grammar = ObjectParser::new(b"10 0 11 15 12 28 <<>>");
        let header = read_header(&mut grammar, 3).unwrap();
        assert_eq!(
            header,
            vec![
                HeaderPair { object_number: 10, offset: 0 },
                HeaderPair { object_number: 11, offset: 15 },
                HeaderPair { object_number: 12, offset: 28 },
            ]
        );
        assert_eq!(grammar.position(), 16);
    }

    #[test]
    fn test_read_header_zero_consumes_nothing() {
        let mut grammar = ObjectParser::new(b"  10 0");
        assert!(read_header(&mut grammar, 0).unwrap().is_empty());
        assert_eq!(grammar.position(), 0);
    }

    #[test]
    fn test_read_header_malformed_integer() {
        let mut grammar = ObjectParser::new(b"10 0 /Oops 5");
        assert!(matches!(read_header(&mut grammar, 2), Err(Error::ParseError { .. })));
    }

    #[test]
    fn test_read_header_truncated() {
        let mut grammar = ObjectParser::new(b"10 0 11");
        assert!(matches!(read_header(&mut grammar, 2), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_read_header_negative_values() {
        let mut grammar = ObjectParser::new(b"10 -4");
        assert!(matches!(read_header(&mut grammar, 1), Err(Error::ParseError { .. })));

        let mut grammar = ObjectParser::new(b"-10 4");
        assert!(matches!(read_header(&mut grammar, 1), Err(Error::ParseError { .. })));
    }

    #[test]
    fn test_read_header_real_offset_is_malformed() {
        let mut grammar = ObjectParser::new(b"10 1.5");
        assert!(matches!(read_header(&mut grammar, 1), Err(Error::ParseError { .. })));
    }

    // ========================================================================
    // Extraction
    // ========================================================================

    #[test]
    fn test_two_dictionaries() {
        let contents = decode(2, b"5 0 9 10\n<< /Type /Font >>\n<< /Count 3 >>").unwrap();

        assert_eq!(contents.len(), 2);
        assert_eq!(contents.objects()[0].id, ObjectRef::new(5, 0));
        assert_eq!(contents.objects()[1].id, ObjectRef::new(9, 0));
        let font = contents.get(5).unwrap().as_dict().unwrap();
        assert_eq!(font.get("Type").unwrap().as_name(), Some("Font"));
        let count = contents.get(9).unwrap().as_dict().unwrap();
        assert_eq!(count.get("Count").unwrap().as_integer(), Some(3));
        assert!(contents.is_complete());
        assert!(contents.diagnostics().is_empty());
    }

    #[test]
    fn test_zero_declared() {
        let contents = decode(0, b"").unwrap();
        assert!(contents.is_empty());
        assert!(contents.diagnostics().is_empty());
        assert!(contents.is_complete());
    }

    #[test]
    fn test_more_objects_than_declared() {
        let contents = decode(1, b"7 0 (first) (second)").unwrap();

        assert_eq!(numbers(&contents), vec![7]);
        assert_eq!(contents.get(7).unwrap().as_string(), Some(&b"first"[..]));
        assert_eq!(contents.diagnostics().len(), 1);
        assert!(matches!(
            contents.diagnostics()[0],
            Diagnostic::MoreObjectsThanDeclared { declared: 1, .. }
        ));
        assert!(
            contents.diagnostics()[0]
                .to_string()
                .contains("more objects than declared: /N 1")
        );
    }

    #[test]
    fn test_overshoot_stops_at_first_extra_value() {
        // the malformed tail is never reached
        let contents = decode(1, b"7 0 1 2 )))").unwrap();
        assert_eq!(numbers(&contents), vec![7]);
        assert_eq!(contents.diagnostics().len(), 1);
    }

    #[test]
    fn test_zero_declared_with_content() {
        let contents = decode(0, b"<< /Orphan true >>").unwrap();
        assert!(contents.is_empty());
        assert_eq!(contents.diagnostics().len(), 1);
    }

    #[test]
    fn test_fewer_objects_than_declared() {
        let contents = decode(3, b"1 0 2 2 3 4 true false").unwrap();

        assert_eq!(numbers(&contents), vec![1, 2]);
        assert!(contents.diagnostics().is_empty());
        assert!(!contents.is_complete());
        assert_eq!(contents.declared(), 3);
    }

    #[test]
    fn test_generation_is_always_zero() {
        let contents = decode(3, b"4 0 8 2 15 4 1 2 3").unwrap();
        assert!(contents.objects().iter().all(|d| d.id.gen == 0));
    }

    #[test]
    fn test_association_is_positional() {
        // header numbers need not be sorted; values are paired by position
        let contents = decode(3, b"30 0 10 2 20 4 /C /A /B").unwrap();
        assert_eq!(numbers(&contents), vec![30, 10, 20]);
        assert_eq!(contents.get(30).unwrap().as_name(), Some("C"));
        assert_eq!(contents.get(10).unwrap().as_name(), Some("A"));
        assert_eq!(contents.get(20).unwrap().as_name(), Some("B"));
    }

    #[test]
    fn test_spurious_endobj_markers_are_skipped() {
        let contents =
            decode(3, b"1 0 2 20 3 40\n<< /A 1 >>\nendobj\n[1 2]endobj\n(tail)\nendobj\n").unwrap();

        assert_eq!(numbers(&contents), vec![1, 2, 3]);
        assert_eq!(contents.get(2).unwrap().as_array().unwrap().len(), 2);
        assert_eq!(contents.get(3).unwrap().as_string(), Some(&b"tail"[..]));
        assert!(contents.diagnostics().is_empty());
    }

    #[test]
    fn test_malformed_number_is_not_taken_for_a_marker() {
        let result = decode(2, b"1 0 2 5 1e5 7");
        assert!(matches!(result, Err(Error::ParseError { .. })));
    }

    #[test]
    fn test_bare_e_after_object_is_fatal() {
        let result = decode(2, b"1 0 2 5 /A e\n/B");
        assert!(matches!(result, Err(Error::ParseError { .. })));
    }

    #[test]
    fn test_repeated_object_number_later_wins() {
        let contents = decode(2, b"5 0 5 2 1 2").unwrap();
        assert_eq!(contents.len(), 2);
        assert_eq!(contents.get(5).unwrap().as_integer(), Some(2));
        assert_eq!(contents.into_map().get(&5).unwrap().as_integer(), Some(2));
    }

    #[test]
    fn test_endobj_marker_skipping_disabled() {
        let options = ParserOptions::default().with_skip_endobj_markers(false);
        let contents = ObjectStreamParser::new(2, &b"1 0 2 10 /A\nendobj\n/B"[..])
            .with_options(options)
            .parse()
            .unwrap();

        // the marker now reads as end of content
        assert_eq!(numbers(&contents), vec![1]);
    }

    #[test]
    fn test_references_inside_objects() {
        let contents = decode(2, b"3 0 4 12 [5 0 R 6 0 R] 7 0 R").unwrap();
        let kids = contents.get(3).unwrap().as_array().unwrap();
        assert_eq!(kids[1].as_reference(), Some(ObjectRef::new(6, 0)));
        assert_eq!(contents.get(4).unwrap().as_reference(), Some(ObjectRef::new(7, 0)));
    }

    #[test]
    fn test_malformed_value_is_fatal() {
        let result = decode(2, b"1 0 2 5 << /A 1 >> << /B");
        assert!(matches!(result, Err(Error::ParseError { .. })));
    }

    #[test]
    fn test_stream_keyword_in_content_is_fatal() {
        let result = decode(1, b"1 0 << /Length 3 >> stream\nabc\nendstream");
        // `stream` after the accepted dictionary is not a value
        assert!(matches!(result, Err(Error::ParseError { .. })));
    }

    #[test]
    fn test_strict_mode_rejects_count_mismatch() {
        let strict = ParserOptions::strict();

        let over = ObjectStreamParser::new(1, &b"1 0 true false"[..]).with_options(strict).parse();
        assert!(matches!(
            over,
            Err(Error::ObjectCountMismatch { declared: 1, found: 2 })
        ));

        let under = ObjectStreamParser::new(2, &b"1 0 2 5 true"[..]).with_options(strict).parse();
        assert!(matches!(
            under,
            Err(Error::ObjectCountMismatch { declared: 2, found: 1 })
        ));
    }

    #[test]
    fn test_declared_count_limit() {
        let options = ParserOptions::default().with_max_declared_objects(2);
        let result = ObjectStreamParser::new(3, &b"1 0 2 1 3 2 a b c"[..])
            .with_options(options)
            .parse();
        assert!(matches!(result, Err(Error::InvalidPdf(_))));
    }

    #[test]
    fn test_into_map() {
        let map = decode(2, b"10 0 11 3 42 /Test").unwrap().into_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&10).unwrap().as_integer(), Some(42));
        assert_eq!(map.get(&11).unwrap().as_name(), Some("Test"));
    }

    // ========================================================================
    // Source release
    // ========================================================================

    #[test]
    fn test_source_released_once_on_success() {
        let releases = Rc::new(Cell::new(0));
        let reader = TrackedReader::new(b"1 0 null", &releases);

        let contents = ObjectStreamParser::new(1, reader).parse().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_source_released_once_on_overshoot() {
        let releases = Rc::new(Cell::new(0));
        let reader = TrackedReader::new(b"1 0 null null", &releases);

        let contents = ObjectStreamParser::new(1, reader).parse().unwrap();
        assert_eq!(contents.diagnostics().len(), 1);
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_source_released_once_on_grammar_error() {
        let releases = Rc::new(Cell::new(0));
        let reader = TrackedReader::new(b"1 0 2 4 [1 2 >>", &releases);

        assert!(ObjectStreamParser::new(2, reader).parse().is_err());
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_source_released_once_on_io_error() {
        let releases = Rc::new(Cell::new(0));
        let mut reader = TrackedReader::new(b"1 0 null", &releases);
        reader.fail = true;

        assert!(matches!(ObjectStreamParser::new(1, reader).parse(), Err(Error::Io(_))));
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_source_released_when_parser_dropped_unused() {
        let releases = Rc::new(Cell::new(0));
        let parser = ObjectStreamParser::new(1, TrackedReader::new(b"", &releases));
        drop(parser);
        assert_eq!(releases.get(), 1);
    }

    // ========================================================================
    // Stream objects
    // ========================================================================

    fn stream(dict: &[(&str, Object)], data: &[u8]) -> Object {
        Object::Stream {
            dict: dict
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            data: bytes::Bytes::from(data.to_vec()),
        }
    }

    #[test]
    fn test_parse_object_stream_from_object() {
        let obj = stream(
            &[
                ("Type", Object::Name("ObjStm".to_string())),
                ("N", Object::Integer(2)),
                ("First", Object::Integer(9)),
            ],
            b"10 0 11 3 42 /Test",
        );

        let contents = parse_object_stream(&obj).unwrap();
        assert_eq!(contents.get(10).unwrap().as_integer(), Some(42));
        assert_eq!(contents.get(11).unwrap().as_name(), Some("Test"));
    }

    #[test]
    fn test_parse_object_stream_wrong_type() {
        let obj = stream(
            &[("Type", Object::Name("XRef".to_string())), ("N", Object::Integer(1))],
            b"1 0 null",
        );
        assert!(matches!(parse_object_stream(&obj), Err(Error::InvalidPdf(_))));
    }

    #[test]
    fn test_parse_object_stream_missing_type_is_accepted() {
        let obj = stream(&[("N", Object::Integer(1))], b"1 0 null");
        assert_eq!(parse_object_stream(&obj).unwrap().len(), 1);
    }

    #[test]
    fn test_parse_object_stream_missing_or_negative_n() {
        let missing = stream(&[("Type", Object::Name("ObjStm".to_string()))], b"1 0 null");
        assert!(matches!(parse_object_stream(&missing), Err(Error::InvalidPdf(_))));

        let negative = stream(&[("N", Object::Integer(-1))], b"1 0 null");
        assert!(matches!(parse_object_stream(&negative), Err(Error::InvalidPdf(_))));
    }

    #[test]
    fn test_parse_object_stream_not_a_stream() {
        let mut dict = HashMap::new();
        dict.insert("N".to_string(), Object::Integer(1));
        let result = parse_object_stream(&Object::Dictionary(dict));
        assert!(matches!(result, Err(Error::InvalidObjectType { .. })));

        assert!(matches!(
            parse_object_stream(&Object::Integer(42)),
            Err(Error::InvalidPdf(_))
        ));
    }
}
