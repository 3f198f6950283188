//! Shared shape of the container format ID tables.

use crate::error::TextureError;
use crate::pixel::{CompressedPixelFormat, FormatDescriptor, PixelFormat};
use crate::swizzle::Swizzle;

/// What a container format ID stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum FormatMapping {
    /// Not a defined value.
    Unknown,
    /// Defined but has no equivalent here.
    Unsupported,
    Pixel(PixelFormat),
    /// Stored with red and blue exchanged.
    SwappedPixel(PixelFormat),
    Block(CompressedPixelFormat),
}

/// One slot of an ID table: the symbolic name and its mapping.
pub(crate) type FormatEntry = (&'static str, FormatMapping);

/// A format resolved from a container ID, plus the swizzle it implies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ResolvedFormat {
    pub format: FormatDescriptor,
    pub swizzle: Swizzle,
}

impl ResolvedFormat {
    pub(crate) fn plain(format: FormatDescriptor) -> Self {
        Self {
            format,
            swizzle: Swizzle::IDENTITY,
        }
    }
}

/// Turn a table slot into a format or the matching error.
pub(crate) fn resolve_entry(
    table: &'static str,
    id: u32,
    entry: Option<&FormatEntry>,
) -> Result<ResolvedFormat, TextureError> {
    let Some(&(name, mapping)) = entry else {
        return Err(TextureError::UnknownFormatId { table, id });
    };
    match mapping {
        FormatMapping::Unknown => Err(TextureError::UnknownFormatId { table, id }),
        FormatMapping::Unsupported => Err(TextureError::UnsupportedFormat(name)),
        FormatMapping::Pixel(pixel) => Ok(ResolvedFormat::plain(FormatDescriptor::Uncompressed(
            pixel,
        ))),
        FormatMapping::SwappedPixel(pixel) => Ok(ResolvedFormat {
            format: FormatDescriptor::Uncompressed(pixel),
            swizzle: Swizzle::BGRA,
        }),
        FormatMapping::Block(block) => {
            Ok(ResolvedFormat::plain(FormatDescriptor::Compressed(block)))
        }
    }
}
