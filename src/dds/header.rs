//! DDS file header and the optional DXT10 extension.

use alloc::string::ToString;

use crate::cursor::Cursor;
use crate::error::TextureError;

pub(crate) const MAGIC: &[u8; 4] = b"DDS ";
/// Magic plus the 124-byte header.
pub(crate) const HEADER_LEN: usize = 128;
pub(crate) const DXT10_HEADER_LEN: usize = 20;

// Header flags
pub(crate) const DDSD_MIPMAPCOUNT: u32 = 0x0002_0000;
pub(crate) const DDSD_DEPTH: u32 = 0x0080_0000;

// Pixel format flags
pub(crate) const DDPF_FOURCC: u32 = 0x4;

// Caps2
pub(crate) const DDSCAPS2_CUBEMAP: u32 = 0x200;
pub(crate) const DDSCAPS2_CUBEMAP_ALLFACES: u32 = 0xfc00;
pub(crate) const DDSCAPS2_VOLUME: u32 = 0x0020_0000;

// DXT10
pub(crate) const D3D10_RESOURCE_DIMENSION_TEXTURE1D: u32 = 2;
pub(crate) const D3D10_RESOURCE_DIMENSION_TEXTURE3D: u32 = 4;
pub(crate) const D3D10_RESOURCE_MISC_TEXTURECUBE: u32 = 0x4;

pub(crate) const FOURCC_DX10: [u8; 4] = *b"DX10";

/// The 32-byte pixel format block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DdsPixelFormat {
    pub flags: u32,
    pub four_cc: [u8; 4],
    pub rgb_bit_count: u32,
    pub r_mask: u32,
    pub g_mask: u32,
    pub b_mask: u32,
    pub a_mask: u32,
}

/// Fixed DDS header, without the magic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DdsHeader {
    pub flags: u32,
    pub height: u32,
    pub width: u32,
    pub pitch_or_linear_size: u32,
    pub depth: u32,
    pub mip_map_count: u32,
    pub pixel_format: DdsPixelFormat,
    pub caps: u32,
    pub caps2: u32,
    /// DXT10 extension, present when the FourCC is `DX10`.
    pub dxt10: Option<Dxt10Header>,
}

/// DXT10 extended header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Dxt10Header {
    pub dxgi_format: u32,
    /// 2 for 1D, 3 for 2D, 4 for 3D textures.
    pub resource_dimension: u32,
    pub misc_flag: u32,
    pub array_size: u32,
    pub misc_flags2: u32,
}

impl DdsHeader {
    /// Offset of the first surface.
    pub fn data_offset(&self) -> usize {
        if self.dxt10.is_some() {
            HEADER_LEN + DXT10_HEADER_LEN
        } else {
            HEADER_LEN
        }
    }

    /// Mip count, treating a missing `DDSD_MIPMAPCOUNT` or a zero count as 1.
    pub fn level_count(&self) -> u32 {
        if self.flags & DDSD_MIPMAPCOUNT != 0 {
            self.mip_map_count.max(1)
        } else {
            1
        }
    }

    pub fn is_volume(&self) -> bool {
        match &self.dxt10 {
            Some(dxt10) => dxt10.resource_dimension == D3D10_RESOURCE_DIMENSION_TEXTURE3D,
            None => self.flags & DDSD_DEPTH != 0 || self.caps2 & DDSCAPS2_VOLUME != 0,
        }
    }

    /// Number of cube faces present, 0 for non-cube images.
    pub fn cube_face_count(&self) -> u32 {
        match &self.dxt10 {
            Some(dxt10) if dxt10.misc_flag & D3D10_RESOURCE_MISC_TEXTURECUBE != 0 => 6,
            Some(_) => 0,
            None if self.caps2 & DDSCAPS2_CUBEMAP != 0 => {
                (self.caps2 & DDSCAPS2_CUBEMAP_ALLFACES).count_ones()
            }
            None => 0,
        }
    }
}

/// Parse the DDS header and, if announced, the DXT10 header.
pub fn parse_header(data: &[u8]) -> Result<DdsHeader, TextureError> {
    if data.len() < HEADER_LEN {
        return Err(TextureError::HeaderTooShort {
            prefix: "",
            expected: HEADER_LEN,
            actual: data.len(),
        });
    }
    if &data[..4] != MAGIC {
        return Err(TextureError::InvalidSignature(
            data[..4].escape_ascii().to_string(),
        ));
    }

    // Skip magic and the header size field.
    let mut cursor = Cursor::at(data, 8)?;
    let flags = cursor.get_u32_le()?;
    let height = cursor.get_u32_le()?;
    let width = cursor.get_u32_le()?;
    let pitch_or_linear_size = cursor.get_u32_le()?;
    let depth = cursor.get_u32_le()?;
    let mip_map_count = cursor.get_u32_le()?;
    // 11 reserved words and the pixel format block size.
    cursor.skip(11 * 4 + 4)?;
    let pixel_format = DdsPixelFormat {
        flags: cursor.get_u32_le()?,
        four_cc: cursor.read_fixed_bytes()?,
        rgb_bit_count: cursor.get_u32_le()?,
        r_mask: cursor.get_u32_le()?,
        g_mask: cursor.get_u32_le()?,
        b_mask: cursor.get_u32_le()?,
        a_mask: cursor.get_u32_le()?,
    };
    let caps = cursor.get_u32_le()?;
    let caps2 = cursor.get_u32_le()?;
    debug_assert!(cursor.position() <= HEADER_LEN);

    let dxt10 = if pixel_format.flags & DDPF_FOURCC != 0 && pixel_format.four_cc == FOURCC_DX10 {
        let needed = HEADER_LEN + DXT10_HEADER_LEN;
        if data.len() < needed {
            return Err(TextureError::HeaderTooShort {
                prefix: "DXT10 ",
                expected: needed,
                actual: data.len(),
            });
        }
        let mut cursor = Cursor::at(data, HEADER_LEN)?;
        Some(Dxt10Header {
            dxgi_format: cursor.get_u32_le()?,
            resource_dimension: cursor.get_u32_le()?,
            misc_flag: cursor.get_u32_le()?,
            array_size: cursor.get_u32_le()?,
            misc_flags2: cursor.get_u32_le()?,
        })
    } else {
        None
    };

    Ok(DdsHeader {
        flags,
        height,
        width,
        pitch_or_linear_size,
        depth,
        mip_map_count,
        pixel_format,
        caps,
        caps2,
        dxt10,
    })
}
