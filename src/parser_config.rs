/// Options for how tolerant object stream decoding is.
///
/// The default is lenient: count mismatches between `/N` and the content are
/// reported as diagnostics and the partial result is returned. Strict mode turns
/// them into errors.
///
/// # Example
///
/// ```
/// use pdf_objstm::parser_config::ParserOptions;
///
/// let lenient = ParserOptions::default();
/// assert!(!lenient.strict);
///
/// let custom = ParserOptions::strict()
///     .with_skip_endobj_markers(false)
///     .with_max_declared_objects(10_000);
/// assert!(custom.strict);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Fail when the content holds more or fewer objects than `/N` declares.
    pub strict: bool,

    /// Skip a spurious `endobj` line after each object.
    ///
    /// Object streams must not contain `obj`/`endobj` markers, but some
    /// producers write them anyway.
    pub skip_endobj_markers: bool,

    /// Largest `/N` accepted before the stream is rejected as invalid.
    pub max_declared_objects: usize,

    /// Maximum array/dictionary nesting depth of a single object.
    pub max_nesting: u32,

    /// Maximum decompression ratio (decompressed:compressed). 0 disables the check.
    pub max_decompression_ratio: u32,

    /// Maximum decompressed stream size in bytes. 0 disables the check.
    pub max_decompressed_size: usize,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::lenient()
    }
}

impl ParserOptions {
    /// Strict mode: count mismatches are errors.
    pub fn strict() -> Self {
        Self {
            strict: true,
            skip_endobj_markers: true,
            max_declared_objects: 1_000_000,
            max_nesting: 100, // ISO 32000-1 Annex H
            max_decompression_ratio: 100,
            max_decompressed_size: 100 * 1024 * 1024, // 100 MB
        }
    }

    /// Lenient mode: count mismatches are diagnostics.
    pub fn lenient() -> Self {
        Self {
            strict: false,
            ..Self::strict()
        }
    }

    /// Enable or disable the `endobj` marker tolerance.
    pub fn with_skip_endobj_markers(mut self, skip: bool) -> Self {
        self.skip_endobj_markers = skip;
        self
    }

    /// Set the largest accepted `/N`.
    pub fn with_max_declared_objects(mut self, max: usize) -> Self {
        self.max_declared_objects = max;
        self
    }

    /// Set the nesting limit for arrays and dictionaries.
    pub fn with_max_nesting(mut self, depth: u32) -> Self {
        self.max_nesting = depth;
        self
    }

    /// Set the decompressed size limit.
    pub fn with_max_decompressed_size(mut self, bytes: usize) -> Self {
        self.max_decompressed_size = bytes;
        self
    }
}
