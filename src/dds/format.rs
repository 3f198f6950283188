//! DDS format resolution: DXGI IDs, FourCC tags and legacy channel masks.

use alloc::string::ToString;

use super::header::DdsPixelFormat;
use super::header::DDPF_FOURCC;
use crate::error::TextureError;
use crate::format::{FormatEntry, FormatMapping, ResolvedFormat, resolve_entry};
use crate::pixel::{AstcBlock, AstcEncoding, CompressedPixelFormat, FormatDescriptor, PixelFormat};
use crate::swizzle::Swizzle;

use CompressedPixelFormat as C;
use FormatMapping::{Block, Pixel, SwappedPixel, Unknown, Unsupported};
use PixelFormat as P;

/// First of the nonstandard ASTC DXGI IDs: four slots per block size
/// (typeless, unorm, sRGB, unused).
const DXGI_ASTC_FIRST: u32 = 133;
const DXGI_ASTC_LAST: u32 = 187;

/// DXGI formats 0 to 115, indexed by ID.
#[rustfmt::skip]
static DXGI_FORMATS: [FormatEntry; 116] = [
    ("DXGI_FORMAT_UNKNOWN", Unknown),
    ("DXGI_FORMAT_R32G32B32A32_TYPELESS", Pixel(P::Rgba32Ui)),
    ("DXGI_FORMAT_R32G32B32A32_FLOAT", Pixel(P::Rgba32F)),
    ("DXGI_FORMAT_R32G32B32A32_UINT", Pixel(P::Rgba32Ui)),
    ("DXGI_FORMAT_R32G32B32A32_SINT", Pixel(P::Rgba32I)),
    ("DXGI_FORMAT_R32G32B32_TYPELESS", Pixel(P::Rgb32Ui)),
    ("DXGI_FORMAT_R32G32B32_FLOAT", Pixel(P::Rgb32F)),
    ("DXGI_FORMAT_R32G32B32_UINT", Pixel(P::Rgb32Ui)),
    ("DXGI_FORMAT_R32G32B32_SINT", Pixel(P::Rgb32I)),
    ("DXGI_FORMAT_R16G16B16A16_TYPELESS", Pixel(P::Rgba16Ui)),
    ("DXGI_FORMAT_R16G16B16A16_FLOAT", Pixel(P::Rgba16F)),
    ("DXGI_FORMAT_R16G16B16A16_UNORM", Pixel(P::Rgba16Unorm)),
    ("DXGI_FORMAT_R16G16B16A16_UINT", Pixel(P::Rgba16Ui)),
    ("DXGI_FORMAT_R16G16B16A16_SNORM", Pixel(P::Rgba16Snorm)),
    ("DXGI_FORMAT_R16G16B16A16_SINT", Pixel(P::Rgba16I)),
    ("DXGI_FORMAT_R32G32_TYPELESS", Pixel(P::Rg32Ui)),
    ("DXGI_FORMAT_R32G32_FLOAT", Pixel(P::Rg32F)),
    ("DXGI_FORMAT_R32G32_UINT", Pixel(P::Rg32Ui)),
    ("DXGI_FORMAT_R32G32_SINT", Pixel(P::Rg32I)),
    ("DXGI_FORMAT_R32G8X24_TYPELESS", Pixel(P::Depth32FStencil8Ui)),
    ("DXGI_FORMAT_D32_FLOAT_S8X24_UINT", Pixel(P::Depth32FStencil8Ui)),
    ("DXGI_FORMAT_R32_FLOAT_X8X24_TYPELESS", Pixel(P::Depth32FStencil8Ui)),
    ("DXGI_FORMAT_X32_TYPELESS_G8X24_UINT", Pixel(P::Depth32FStencil8Ui)),
    ("DXGI_FORMAT_R10G10B10A2_TYPELESS", Unsupported),
    ("DXGI_FORMAT_R10G10B10A2_UNORM", Unsupported),
    ("DXGI_FORMAT_R10G10B10A2_UINT", Unsupported),
    ("DXGI_FORMAT_R11G11B10_FLOAT", Unsupported),
    ("DXGI_FORMAT_R8G8B8A8_TYPELESS", Pixel(P::Rgba8Ui)),
    ("DXGI_FORMAT_R8G8B8A8_UNORM", Pixel(P::Rgba8Unorm)),
    ("DXGI_FORMAT_R8G8B8A8_UNORM_SRGB", Pixel(P::Rgba8Srgb)),
    ("DXGI_FORMAT_R8G8B8A8_UINT", Pixel(P::Rgba8Ui)),
    ("DXGI_FORMAT_R8G8B8A8_SNORM", Pixel(P::Rgba8Snorm)),
    ("DXGI_FORMAT_R8G8B8A8_SINT", Pixel(P::Rgba8I)),
    ("DXGI_FORMAT_R16G16_TYPELESS", Pixel(P::Rg16Ui)),
    ("DXGI_FORMAT_R16G16_FLOAT", Pixel(P::Rg16F)),
    ("DXGI_FORMAT_R16G16_UNORM", Pixel(P::Rg16Unorm)),
    ("DXGI_FORMAT_R16G16_UINT", Pixel(P::Rg16Ui)),
    ("DXGI_FORMAT_R16G16_SNORM", Pixel(P::Rg16Snorm)),
    ("DXGI_FORMAT_R16G16_SINT", Pixel(P::Rg16I)),
    ("DXGI_FORMAT_R32_TYPELESS", Pixel(P::R32Ui)),
    ("DXGI_FORMAT_D32_FLOAT", Pixel(P::Depth32F)),
    ("DXGI_FORMAT_R32_FLOAT", Pixel(P::R32F)),
    ("DXGI_FORMAT_R32_UINT", Pixel(P::R32Ui)),
    ("DXGI_FORMAT_R32_SINT", Pixel(P::R32I)),
    ("DXGI_FORMAT_R24G8_TYPELESS", Pixel(P::Depth24UnormStencil8Ui)),
    ("DXGI_FORMAT_D24_UNORM_S8_UINT", Pixel(P::Depth24UnormStencil8Ui)),
    ("DXGI_FORMAT_R24_UNORM_X8_TYPELESS", Pixel(P::Depth24UnormStencil8Ui)),
    ("DXGI_FORMAT_X24_TYPELESS_G8_UINT", Pixel(P::Depth24UnormStencil8Ui)),
    ("DXGI_FORMAT_R8G8_TYPELESS", Pixel(P::Rg8Ui)),
    ("DXGI_FORMAT_R8G8_UNORM", Pixel(P::Rg8Unorm)),
    ("DXGI_FORMAT_R8G8_UINT", Pixel(P::Rg8Ui)),
    ("DXGI_FORMAT_R8G8_SNORM", Pixel(P::Rg8Snorm)),
    ("DXGI_FORMAT_R8G8_SINT", Pixel(P::Rg8I)),
    ("DXGI_FORMAT_R16_TYPELESS", Pixel(P::R16Ui)),
    ("DXGI_FORMAT_R16_FLOAT", Pixel(P::R16F)),
    ("DXGI_FORMAT_D16_UNORM", Pixel(P::Depth16Unorm)),
    ("DXGI_FORMAT_R16_UNORM", Pixel(P::R16Unorm)),
    ("DXGI_FORMAT_R16_UINT", Pixel(P::R16Ui)),
    ("DXGI_FORMAT_R16_SNORM", Pixel(P::R16Snorm)),
    ("DXGI_FORMAT_R16_SINT", Pixel(P::R16I)),
    ("DXGI_FORMAT_R8_TYPELESS", Pixel(P::R8Ui)),
    ("DXGI_FORMAT_R8_UNORM", Pixel(P::R8Unorm)),
    ("DXGI_FORMAT_R8_UINT", Pixel(P::R8Ui)),
    ("DXGI_FORMAT_R8_SNORM", Pixel(P::R8Snorm)),
    ("DXGI_FORMAT_R8_SINT", Pixel(P::R8I)),
    ("DXGI_FORMAT_A8_UNORM", Pixel(P::R8Unorm)),
    ("DXGI_FORMAT_R1_UNORM", Unsupported),
    ("DXGI_FORMAT_R9G9B9E5_SHAREDEXP", Unsupported),
    ("DXGI_FORMAT_R8G8_B8G8_UNORM", Unsupported),
    ("DXGI_FORMAT_G8R8_G8B8_UNORM", Unsupported),
    ("DXGI_FORMAT_BC1_TYPELESS", Block(C::Bc1RgbaUnorm)),
    ("DXGI_FORMAT_BC1_UNORM", Block(C::Bc1RgbaUnorm)),
    ("DXGI_FORMAT_BC1_UNORM_SRGB", Block(C::Bc1RgbaSrgb)),
    ("DXGI_FORMAT_BC2_TYPELESS", Block(C::Bc2RgbaUnorm)),
    ("DXGI_FORMAT_BC2_UNORM", Block(C::Bc2RgbaUnorm)),
    ("DXGI_FORMAT_BC2_UNORM_SRGB", Block(C::Bc2RgbaSrgb)),
    ("DXGI_FORMAT_BC3_TYPELESS", Block(C::Bc3RgbaUnorm)),
    ("DXGI_FORMAT_BC3_UNORM", Block(C::Bc3RgbaUnorm)),
    ("DXGI_FORMAT_BC3_UNORM_SRGB", Block(C::Bc3RgbaSrgb)),
    ("DXGI_FORMAT_BC4_TYPELESS", Block(C::Bc4RUnorm)),
    ("DXGI_FORMAT_BC4_UNORM", Block(C::Bc4RUnorm)),
    ("DXGI_FORMAT_BC4_SNORM", Block(C::Bc4RSnorm)),
    ("DXGI_FORMAT_BC5_TYPELESS", Block(C::Bc5RgUnorm)),
    ("DXGI_FORMAT_BC5_UNORM", Block(C::Bc5RgUnorm)),
    ("DXGI_FORMAT_BC5_SNORM", Block(C::Bc5RgSnorm)),
    ("DXGI_FORMAT_B5G6R5_UNORM", Unsupported),
    ("DXGI_FORMAT_B5G5R5A1_UNORM", Unsupported),
    ("DXGI_FORMAT_B8G8R8A8_UNORM", SwappedPixel(P::Rgba8Unorm)),
    ("DXGI_FORMAT_B8G8R8X8_UNORM", SwappedPixel(P::Rgba8Unorm)),
    ("DXGI_FORMAT_R10G10B10_XR_BIAS_A2_UNORM", Unsupported),
    ("DXGI_FORMAT_B8G8R8A8_TYPELESS", SwappedPixel(P::Rgba8Unorm)),
    ("DXGI_FORMAT_B8G8R8A8_UNORM_SRGB", SwappedPixel(P::Rgba8Srgb)),
    ("DXGI_FORMAT_B8G8R8X8_TYPELESS", SwappedPixel(P::Rgba8Unorm)),
    ("DXGI_FORMAT_B8G8R8X8_UNORM_SRGB", SwappedPixel(P::Rgba8Srgb)),
    ("DXGI_FORMAT_BC6H_TYPELESS", Block(C::Bc6hRgbUfloat)),
    ("DXGI_FORMAT_BC6H_UF16", Block(C::Bc6hRgbUfloat)),
    ("DXGI_FORMAT_BC6H_SF16", Block(C::Bc6hRgbSfloat)),
    ("DXGI_FORMAT_BC7_TYPELESS", Block(C::Bc7RgbaUnorm)),
    ("DXGI_FORMAT_BC7_UNORM", Block(C::Bc7RgbaUnorm)),
    ("DXGI_FORMAT_BC7_UNORM_SRGB", Block(C::Bc7RgbaSrgb)),
    ("DXGI_FORMAT_AYUV", Unsupported),
    ("DXGI_FORMAT_Y410", Unsupported),
    ("DXGI_FORMAT_Y416", Unsupported),
    ("DXGI_FORMAT_NV12", Unsupported),
    ("DXGI_FORMAT_P010", Unsupported),
    ("DXGI_FORMAT_P016", Unsupported),
    ("DXGI_FORMAT_420_OPAQUE", Unsupported),
    ("DXGI_FORMAT_YUY2", Unsupported),
    ("DXGI_FORMAT_Y210", Unsupported),
    ("DXGI_FORMAT_Y216", Unsupported),
    ("DXGI_FORMAT_NV11", Unsupported),
    ("DXGI_FORMAT_AI44", Unsupported),
    ("DXGI_FORMAT_IA44", Unsupported),
    ("DXGI_FORMAT_P8", Unsupported),
    ("DXGI_FORMAT_A8P8", Unsupported),
    ("DXGI_FORMAT_B4G4R4A4_UNORM", Unsupported),
];

/// Resolve a DXT10 `dxgiFormat` value.
pub(crate) fn resolve_dxgi(id: u32) -> Result<ResolvedFormat, TextureError> {
    if (DXGI_ASTC_FIRST..=DXGI_ASTC_LAST).contains(&id) {
        let offset = (id - DXGI_ASTC_FIRST) as usize;
        let block = AstcBlock::FOOTPRINTS_2D[offset / 4];
        let encoding = match offset % 4 {
            0 | 1 => AstcEncoding::Unorm,
            2 => AstcEncoding::Srgb,
            _ => return Err(TextureError::UnknownFormatId { table: "DXGI", id }),
        };
        return Ok(ResolvedFormat::plain(FormatDescriptor::Compressed(
            C::Astc(block, encoding),
        )));
    }
    resolve_entry("DXGI", id, DXGI_FORMATS.get(id as usize))
}

/// Resolve a legacy FourCC compression tag.
pub(crate) fn resolve_four_cc(four_cc: [u8; 4]) -> Result<ResolvedFormat, TextureError> {
    let format = match &four_cc {
        b"DXT1" => FormatDescriptor::Compressed(C::Bc1RgbaUnorm),
        b"DXT3" => FormatDescriptor::Compressed(C::Bc2RgbaUnorm),
        b"DXT5" => FormatDescriptor::Compressed(C::Bc3RgbaUnorm),
        b"ATI1" | b"BC4U" => FormatDescriptor::Compressed(C::Bc4RUnorm),
        b"BC4S" => FormatDescriptor::Compressed(C::Bc4RSnorm),
        b"ATI2" | b"BC5U" => FormatDescriptor::Compressed(C::Bc5RgUnorm),
        b"BC5S" => FormatDescriptor::Compressed(C::Bc5RgSnorm),
        // D3DFMT values stored in the FourCC field.
        _ => match u32::from_le_bytes(four_cc) {
            36 => FormatDescriptor::Uncompressed(P::Rgba16Unorm),
            110 => FormatDescriptor::Uncompressed(P::Rgba16Snorm),
            111 => FormatDescriptor::Uncompressed(P::R16F),
            112 => FormatDescriptor::Uncompressed(P::Rg16F),
            113 => FormatDescriptor::Uncompressed(P::Rgba16F),
            114 => FormatDescriptor::Uncompressed(P::R32F),
            115 => FormatDescriptor::Uncompressed(P::Rg32F),
            116 => FormatDescriptor::Uncompressed(P::Rgba32F),
            _ => {
                return Err(TextureError::UnknownCompression(
                    four_cc.escape_ascii().to_string(),
                ));
            }
        },
    };
    Ok(ResolvedFormat::plain(format))
}

/// Legacy channel mask layouts in match priority order.
struct MaskFormat {
    bits: u32,
    masks: [u32; 4],
    format: PixelFormat,
    swizzle: Swizzle,
}

#[rustfmt::skip]
static MASK_FORMATS: [MaskFormat; 7] = [
    MaskFormat { bits: 32, masks: [0xff, 0xff00, 0xff0000, 0xff000000], format: P::Rgba8Unorm, swizzle: Swizzle::IDENTITY },
    MaskFormat { bits: 32, masks: [0xff0000, 0xff00, 0xff, 0xff000000], format: P::Rgba8Unorm, swizzle: Swizzle::BGRA },
    MaskFormat { bits: 32, masks: [0xff, 0xff00, 0xff0000, 0], format: P::Rgba8Unorm, swizzle: Swizzle::IDENTITY },
    MaskFormat { bits: 32, masks: [0xff0000, 0xff00, 0xff, 0], format: P::Rgba8Unorm, swizzle: Swizzle::BGRA },
    MaskFormat { bits: 24, masks: [0xff, 0xff00, 0xff0000, 0], format: P::Rgb8Unorm, swizzle: Swizzle::IDENTITY },
    MaskFormat { bits: 24, masks: [0xff0000, 0xff00, 0xff, 0], format: P::Rgb8Unorm, swizzle: Swizzle::BGRA },
    MaskFormat { bits: 8, masks: [0xff, 0, 0, 0], format: P::R8Unorm, swizzle: Swizzle::IDENTITY },
];

/// Classify an uncompressed legacy pixel format by its bit count and masks.
pub(crate) fn resolve_masks(pf: &DdsPixelFormat) -> Result<ResolvedFormat, TextureError> {
    let masks = [pf.r_mask, pf.g_mask, pf.b_mask, pf.a_mask];
    MASK_FORMATS
        .iter()
        .find(|m| m.bits == pf.rgb_bit_count && m.masks == masks)
        .map(|m| ResolvedFormat {
            format: FormatDescriptor::Uncompressed(m.format),
            swizzle: m.swizzle,
        })
        .ok_or(TextureError::UnknownMaskFormat {
            bits: pf.rgb_bit_count,
            r: pf.r_mask,
            g: pf.g_mask,
            b: pf.b_mask,
            a: pf.a_mask,
        })
}

/// Pick the resolution path for a parsed pixel format block.
pub(crate) fn resolve_legacy(pf: &DdsPixelFormat) -> Result<ResolvedFormat, TextureError> {
    if pf.flags & DDPF_FOURCC != 0 {
        resolve_four_cc(pf.four_cc)
    } else {
        resolve_masks(pf)
    }
}
