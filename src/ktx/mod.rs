//! KTX2 container: Vulkan format IDs, per-level data regions and key/value
//! metadata.

mod format;
mod header;

pub use header::{KtxHeader, LevelIndex};
pub(crate) use header::IDENTIFIER;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::diagnostic::DiagnosticLog;
use crate::error::TextureError;
use crate::header::{ContainerHeader, ParsedContainer};
use crate::layout::{self, ImageLayout, LevelRegion};
use crate::orientation::Orientation;
use crate::swizzle::Swizzle;

pub(crate) const KEY_ORIENTATION: &str = "KTXorientation";
pub(crate) const KEY_SWIZZLE: &str = "KTXswizzle";
pub(crate) const KEY_CUBEMAP_INCOMPLETE: &str = "KTXcubemapIncomplete";

/// Parse a KTX2 file: header, format, metadata and the position of every
/// surface.
pub(crate) fn parse(data: &[u8], log: &mut DiagnosticLog) -> Result<ParsedContainer, TextureError> {
    let header = header::parse_header(data, log)?;

    match header.supercompression_scheme {
        0 => {}
        1 => return Err(TextureError::Supercompressed("BasisLZ supercompression")),
        2 => return Err(TextureError::Supercompressed("Zstandard supercompression")),
        3 => return Err(TextureError::Supercompressed("ZLIB supercompression")),
        other => {
            return Err(TextureError::InvalidHeader(format!(
                "unknown supercompression scheme {other}"
            )));
        }
    }
    if header.vk_format == format::VK_FORMAT_UNDEFINED {
        return Err(TextureError::Supercompressed(
            "Basis Universal or other VK_FORMAT_UNDEFINED data",
        ));
    }
    let format = format::resolve_vulkan(header.vk_format)?;

    let layout = image_layout(&header)?;
    layout.validate_levels()?;

    // Only the letters for the image's spatial axes matter.
    let orientation = match header.value_str(KEY_ORIENTATION) {
        None => Orientation::RIGHT_DOWN_IN,
        Some(value) => {
            let spatial = value
                .get(..value.len().min(layout.dimensions as usize))
                .unwrap_or(value);
            spatial.parse().unwrap_or_else(|_| {
                log.warn(format!(
                    "invalid {KEY_ORIENTATION} value {value:?}, assuming rdi"
                ));
                Orientation::RIGHT_DOWN_IN
            })
        }
    };

    let metadata_swizzle = match header.value(KEY_SWIZZLE) {
        None => Swizzle::IDENTITY,
        Some(value) => String::from_utf8_lossy(value).parse()?,
    };

    let cube_map_incomplete = header.value(KEY_CUBEMAP_INCOMPLETE).is_some();
    if cube_map_incomplete {
        log.info(String::from(
            "image is an incomplete cube map, importing its faces as a 2D array",
        ));
    }

    let regions: Vec<LevelRegion> = header.levels.iter().map(LevelIndex::region).collect();
    let ranges = layout::plan_leveled(&layout, format.format, &regions, data.len())?;

    Ok(ParsedContainer {
        header: ContainerHeader::Ktx(header),
        layout,
        format,
        metadata_swizzle,
        orientation,
        cube_map_incomplete,
        ranges,
    })
}

/// Derive the image shape from the header fields.
pub(crate) fn image_layout(header: &KtxHeader) -> Result<ImageLayout, TextureError> {
    let invalid = || {
        TextureError::InvalidHeader(format!(
            "invalid image size {}x{}x{}",
            header.pixel_width, header.pixel_height, header.pixel_depth
        ))
    };
    let dimensions = match (header.pixel_width, header.pixel_height, header.pixel_depth) {
        (0, _, _) | (_, 0, 1..) => return Err(invalid()),
        (_, 0, 0) => 1,
        (_, _, 0) => 2,
        _ => 3,
    };
    let faces = match header.face_count {
        1 => 1,
        6 if dimensions == 2 && header.pixel_width == header.pixel_height => 6,
        6 => {
            return Err(TextureError::InvalidHeader(format!(
                "cube map faces must be square 2D images, got {}x{}x{}",
                header.pixel_width, header.pixel_height, header.pixel_depth
            )));
        }
        other => {
            return Err(TextureError::InvalidHeader(format!(
                "expected 1 or 6 faces but got {other}"
            )));
        }
    };
    Ok(ImageLayout {
        width: header.pixel_width,
        height: header.pixel_height.max(1),
        depth: header.pixel_depth.max(1),
        dimensions,
        levels: header.levels.len() as u32,
        layers: header.layer_count,
        faces,
    })
}
