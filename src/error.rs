use alloc::string::String;

/// Coarse error classes.
///
/// Every [`TextureError`] belongs to exactly one of them; see
/// [`TextureError::kind`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed or truncated header or file.
    Validation,
    /// Unknown or unsupported pixel/compression format, or an invalid
    /// channel remap.
    Format,
    /// Declared image data doesn't fit into the file.
    Layout,
    /// A caller-supplied [`Limits`](crate::Limits) value was exceeded.
    Limit,
    /// The decoder was used without an opened file, or with an out-of-range
    /// surface index.
    Usage,
}

/// Errors from DDS/KTX2 decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TextureError {
    #[error("{prefix}file too short, expected at least {expected} bytes but got {actual}")]
    HeaderTooShort {
        /// `""` for the main header, `"DXT10 "` for the DDS extended header.
        prefix: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid file signature {0}")]
    InvalidSignature(String),

    #[error("unrecognized container signature {0}")]
    UnknownContainer(String),

    #[error("{what}, expected at least {expected} bytes but got {actual}")]
    SectionOutOfBounds {
        /// `"level index too short"` or `"key/value data out of bounds"`.
        what: &'static str,
        expected: u64,
        actual: usize,
    },

    #[error("unexpected end of data at offset {offset}")]
    UnexpectedEof { offset: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("invalid orientation {0}")]
    InvalidOrientation(String),

    #[error("unknown compression {0}")]
    UnknownCompression(String),

    #[error(
        "unknown {bits} bits per pixel format with a RGBA mask {{{r:#x}, {g:#x}, {b:#x}, {a:#x}}}"
    )]
    UnknownMaskFormat {
        bits: u32,
        r: u32,
        g: u32,
        b: u32,
        a: u32,
    },

    #[error("unknown {table} format ID {id}")]
    UnknownFormatId { table: &'static str, id: u32 },

    #[error("unsupported format {0}")]
    UnsupportedFormat(&'static str),

    #[error("unsupported channel mapping {0}")]
    UnsupportedSwizzle(String),

    #[error("unsupported swizzle {swizzle} for compressed format {format}")]
    CompressedSwizzle {
        swizzle: String,
        format: crate::CompressedPixelFormat,
    },

    #[error("{0} is not supported")]
    Supercompressed(&'static str),

    #[error("file too short, expected {expected} bytes for image {image} level {level} but got {actual}")]
    LevelOutOfBounds {
        image: u32,
        level: u32,
        expected: u64,
        actual: usize,
    },

    #[error("level {level} data too short, expected {expected} bytes but got {actual}")]
    LevelTooShort {
        level: u32,
        expected: u64,
        actual: u64,
    },

    #[error("dimensions too large: {width}x{height}x{depth}")]
    DimensionsTooLarge { width: u32, height: u32, depth: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("no file opened")]
    NotOpened,

    #[error("surface format {actual} can't be viewed as the requested pixel type")]
    PixelMismatch { actual: crate::FormatDescriptor },

    #[error("{what} index {index} out of range for {count} {what}s")]
    IndexOutOfRange {
        what: &'static str,
        index: u32,
        count: u32,
    },
}

impl TextureError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::HeaderTooShort { .. }
            | Self::InvalidSignature(_)
            | Self::UnknownContainer(_)
            | Self::SectionOutOfBounds { .. }
            | Self::UnexpectedEof { .. }
            | Self::InvalidHeader(_)
            | Self::InvalidOrientation(_)
            | Self::DimensionsTooLarge { .. } => ErrorKind::Validation,
            Self::UnknownCompression(_)
            | Self::UnknownMaskFormat { .. }
            | Self::UnknownFormatId { .. }
            | Self::UnsupportedFormat(_)
            | Self::UnsupportedSwizzle(_)
            | Self::CompressedSwizzle { .. }
            | Self::Supercompressed(_) => ErrorKind::Format,
            Self::LevelOutOfBounds { .. } | Self::LevelTooShort { .. } => ErrorKind::Layout,
            Self::LimitExceeded(_) => ErrorKind::Limit,
            Self::NotOpened | Self::IndexOutOfRange { .. } | Self::PixelMismatch { .. } => {
                ErrorKind::Usage
            }
        }
    }
}
