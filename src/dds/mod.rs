//! DDS container: legacy header with FourCC or channel masks, and the DXT10
//! extension with DXGI format IDs.

mod format;
mod header;

pub use header::{DdsHeader, DdsPixelFormat, Dxt10Header};
pub(crate) use header::MAGIC;

use alloc::format;

use crate::diagnostic::DiagnosticLog;
use crate::error::TextureError;
use crate::header::{ContainerHeader, ParsedContainer};
use crate::layout::{self, ImageLayout};
use crate::orientation::Orientation;
use crate::swizzle::Swizzle;
use header::{D3D10_RESOURCE_DIMENSION_TEXTURE1D, D3D10_RESOURCE_DIMENSION_TEXTURE3D};

/// Parse a DDS file: header, format and the position of every surface.
pub(crate) fn parse(data: &[u8], log: &mut DiagnosticLog) -> Result<ParsedContainer, TextureError> {
    let header = header::parse_header(data)?;
    let format = match &header.dxt10 {
        Some(dxt10) => format::resolve_dxgi(dxt10.dxgi_format)?,
        None => format::resolve_legacy(&header.pixel_format)?,
    };
    let (layout, cube_map_incomplete) = image_layout(&header, log)?;
    layout.validate_levels()?;
    let ranges = layout::plan_contiguous(&layout, format.format, header.data_offset(), data.len())?;

    Ok(ParsedContainer {
        header: ContainerHeader::Dds(header),
        layout,
        format,
        metadata_swizzle: Swizzle::IDENTITY,
        orientation: Orientation::RIGHT_DOWN_IN,
        cube_map_incomplete,
        ranges,
    })
}

/// Derive the image shape; the flag tells whether a legacy cube map was
/// missing faces and got turned into an array.
pub(crate) fn image_layout(
    header: &DdsHeader,
    log: &mut DiagnosticLog,
) -> Result<(ImageLayout, bool), TextureError> {
    let mut layout = ImageLayout {
        width: header.width,
        height: header.height,
        depth: 1,
        dimensions: 2,
        levels: header.level_count(),
        layers: 0,
        faces: 1,
    };
    let mut cube_map_incomplete = false;

    if header.is_volume() {
        layout.dimensions = 3;
        layout.depth = header.depth.max(1);
    }

    match &header.dxt10 {
        Some(dxt10) => {
            match dxt10.resource_dimension {
                D3D10_RESOURCE_DIMENSION_TEXTURE1D => {
                    layout.dimensions = 1;
                    layout.height = 1;
                }
                D3D10_RESOURCE_DIMENSION_TEXTURE3D => {}
                3 => layout.dimensions = 2,
                other => {
                    return Err(TextureError::InvalidHeader(format!(
                        "unsupported DXT10 resource dimension {other}"
                    )));
                }
            }
            if header.cube_face_count() == 6 {
                layout.faces = 6;
            }
            if dxt10.array_size > 1 {
                layout.layers = dxt10.array_size;
            }
        }
        None => match header.cube_face_count() {
            0 => {}
            6 => layout.faces = 6,
            present => {
                log.info(format!(
                    "cube map has only {present} faces, importing it as a 2D array"
                ));
                layout.layers = present;
                cube_map_incomplete = true;
            }
        },
    }

    if layout.width == 0 || layout.height == 0 {
        return Err(TextureError::InvalidHeader(format!(
            "invalid image size {}x{}x{}",
            layout.width, layout.height, layout.depth
        )));
    }
    Ok((layout, cube_map_incomplete))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;
    use crate::error::ErrorKind;

    fn header_bytes(width: u32, height: u32, caps2: u32, four_cc: &[u8; 4]) -> alloc::vec::Vec<u8> {
        let mut data = alloc::vec![0u8; 128];
        data[..4].copy_from_slice(b"DDS ");
        data[4..8].copy_from_slice(&124u32.to_le_bytes());
        data[0x0C..0x10].copy_from_slice(&height.to_le_bytes());
        data[0x10..0x14].copy_from_slice(&width.to_le_bytes());
        data[0x4C..0x50].copy_from_slice(&32u32.to_le_bytes());
        data[0x50..0x54].copy_from_slice(&header::DDPF_FOURCC.to_le_bytes());
        data[0x54..0x58].copy_from_slice(four_cc);
        data[0x70..0x74].copy_from_slice(&caps2.to_le_bytes());
        data
    }

    #[test]
    fn short_and_bad_signature() {
        let mut log = DiagnosticLog::default();
        let err = parse(&[0u8; 127], &mut log).unwrap_err();
        assert_eq!(
            err.to_string(),
            "file too short, expected at least 128 bytes but got 127"
        );
        let mut data = header_bytes(4, 4, 0, b"DXT1");
        data[..4].copy_from_slice(b"SSD ");
        let err = parse(&data, &mut log).unwrap_err();
        assert_eq!(err.to_string(), "invalid file signature SSD ");
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn dxt10_too_short() {
        let mut log = DiagnosticLog::default();
        let mut data = header_bytes(4, 4, 0, b"DX10");
        data.resize(147, 0);
        let err = parse(&data, &mut log).unwrap_err();
        assert_eq!(
            err.to_string(),
            "DXT10 file too short, expected at least 148 bytes but got 147"
        );
    }

    #[test]
    fn incomplete_cube_becomes_array() {
        let mut log = DiagnosticLog::new(false, true);
        // +X, +Y and -Z present.
        let data = header_bytes(4, 4, 0x200 | 0x400 | 0x1000 | 0x8000, b"DXT1");
        let header = header::parse_header(&data).unwrap();
        let (layout, incomplete) = image_layout(&header, &mut log).unwrap();
        assert!(incomplete);
        assert_eq!(layout.layers, 3);
        assert_eq!(layout.faces, 1);
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn complete_cube() {
        let mut log = DiagnosticLog::default();
        let data = header_bytes(4, 4, 0x200 | 0xfc00, b"DXT5");
        let header = header::parse_header(&data).unwrap();
        let (layout, incomplete) = image_layout(&header, &mut log).unwrap();
        assert!(!incomplete);
        assert!(layout.is_cube_map());
        assert!(!layout.is_array());
    }

    #[test]
    fn zero_size_rejected() {
        let mut log = DiagnosticLog::default();
        let data = header_bytes(0, 4, 0, b"DXT1");
        let err = parse(&data, &mut log).unwrap_err();
        assert_eq!(err.to_string(), "invalid header: invalid image size 0x4x1");
    }
}
