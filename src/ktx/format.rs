//! Vulkan format IDs as used in the KTX2 `vkFormat` field.

use crate::error::TextureError;
use crate::format::{FormatEntry, FormatMapping, ResolvedFormat, resolve_entry};
use crate::pixel::{AstcBlock, AstcEncoding, CompressedPixelFormat, PixelFormat};

use CompressedPixelFormat as C;
use FormatMapping::{Block, Pixel, SwappedPixel, Unsupported};
use PixelFormat as P;

/// `VK_FORMAT_UNDEFINED`, used by Basis Universal payloads.
pub(crate) const VK_FORMAT_UNDEFINED: u32 = 0;

/// Contiguous range of extension format IDs.
struct ExtensionBlock {
    first: u32,
    formats: &'static [FormatEntry],
}

/// Core formats 0 to 184, indexed by ID.
#[rustfmt::skip]
static CORE_FORMATS: [FormatEntry; 185] = [
    ("VK_FORMAT_UNDEFINED", Unsupported),
    ("VK_FORMAT_R4G4_UNORM_PACK8", Unsupported),
    ("VK_FORMAT_R4G4B4A4_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_B4G4R4A4_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_R5G6B5_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_B5G6R5_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_R5G5B5A1_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_B5G5R5A1_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_A1R5G5B5_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_R8_UNORM", Pixel(P::R8Unorm)),
    ("VK_FORMAT_R8_SNORM", Pixel(P::R8Snorm)),
    ("VK_FORMAT_R8_USCALED", Unsupported),
    ("VK_FORMAT_R8_SSCALED", Unsupported),
    ("VK_FORMAT_R8_UINT", Pixel(P::R8Ui)),
    ("VK_FORMAT_R8_SINT", Pixel(P::R8I)),
    ("VK_FORMAT_R8_SRGB", Pixel(P::R8Srgb)),
    ("VK_FORMAT_R8G8_UNORM", Pixel(P::Rg8Unorm)),
    ("VK_FORMAT_R8G8_SNORM", Pixel(P::Rg8Snorm)),
    ("VK_FORMAT_R8G8_USCALED", Unsupported),
    ("VK_FORMAT_R8G8_SSCALED", Unsupported),
    ("VK_FORMAT_R8G8_UINT", Pixel(P::Rg8Ui)),
    ("VK_FORMAT_R8G8_SINT", Pixel(P::Rg8I)),
    ("VK_FORMAT_R8G8_SRGB", Pixel(P::Rg8Srgb)),
    ("VK_FORMAT_R8G8B8_UNORM", Pixel(P::Rgb8Unorm)),
    ("VK_FORMAT_R8G8B8_SNORM", Pixel(P::Rgb8Snorm)),
    ("VK_FORMAT_R8G8B8_USCALED", Unsupported),
    ("VK_FORMAT_R8G8B8_SSCALED", Unsupported),
    ("VK_FORMAT_R8G8B8_UINT", Pixel(P::Rgb8Ui)),
    ("VK_FORMAT_R8G8B8_SINT", Pixel(P::Rgb8I)),
    ("VK_FORMAT_R8G8B8_SRGB", Pixel(P::Rgb8Srgb)),
    ("VK_FORMAT_B8G8R8_UNORM", SwappedPixel(P::Rgb8Unorm)),
    ("VK_FORMAT_B8G8R8_SNORM", SwappedPixel(P::Rgb8Snorm)),
    ("VK_FORMAT_B8G8R8_USCALED", Unsupported),
    ("VK_FORMAT_B8G8R8_SSCALED", Unsupported),
    ("VK_FORMAT_B8G8R8_UINT", SwappedPixel(P::Rgb8Ui)),
    ("VK_FORMAT_B8G8R8_SINT", SwappedPixel(P::Rgb8I)),
    ("VK_FORMAT_B8G8R8_SRGB", SwappedPixel(P::Rgb8Srgb)),
    ("VK_FORMAT_R8G8B8A8_UNORM", Pixel(P::Rgba8Unorm)),
    ("VK_FORMAT_R8G8B8A8_SNORM", Pixel(P::Rgba8Snorm)),
    ("VK_FORMAT_R8G8B8A8_USCALED", Unsupported),
    ("VK_FORMAT_R8G8B8A8_SSCALED", Unsupported),
    ("VK_FORMAT_R8G8B8A8_UINT", Pixel(P::Rgba8Ui)),
    ("VK_FORMAT_R8G8B8A8_SINT", Pixel(P::Rgba8I)),
    ("VK_FORMAT_R8G8B8A8_SRGB", Pixel(P::Rgba8Srgb)),
    ("VK_FORMAT_B8G8R8A8_UNORM", SwappedPixel(P::Rgba8Unorm)),
    ("VK_FORMAT_B8G8R8A8_SNORM", SwappedPixel(P::Rgba8Snorm)),
    ("VK_FORMAT_B8G8R8A8_USCALED", Unsupported),
    ("VK_FORMAT_B8G8R8A8_SSCALED", Unsupported),
    ("VK_FORMAT_B8G8R8A8_UINT", SwappedPixel(P::Rgba8Ui)),
    ("VK_FORMAT_B8G8R8A8_SINT", SwappedPixel(P::Rgba8I)),
    ("VK_FORMAT_B8G8R8A8_SRGB", SwappedPixel(P::Rgba8Srgb)),
    ("VK_FORMAT_A8B8G8R8_UNORM_PACK32", Unsupported),
    ("VK_FORMAT_A8B8G8R8_SNORM_PACK32", Unsupported),
    ("VK_FORMAT_A8B8G8R8_USCALED_PACK32", Unsupported),
    ("VK_FORMAT_A8B8G8R8_SSCALED_PACK32", Unsupported),
    ("VK_FORMAT_A8B8G8R8_UINT_PACK32", Unsupported),
    ("VK_FORMAT_A8B8G8R8_SINT_PACK32", Unsupported),
    ("VK_FORMAT_A8B8G8R8_SRGB_PACK32", Unsupported),
    ("VK_FORMAT_A2R10G10B10_UNORM_PACK32", Unsupported),
    ("VK_FORMAT_A2R10G10B10_SNORM_PACK32", Unsupported),
    ("VK_FORMAT_A2R10G10B10_USCALED_PACK32", Unsupported),
    ("VK_FORMAT_A2R10G10B10_SSCALED_PACK32", Unsupported),
    ("VK_FORMAT_A2R10G10B10_UINT_PACK32", Unsupported),
    ("VK_FORMAT_A2R10G10B10_SINT_PACK32", Unsupported),
    ("VK_FORMAT_A2B10G10R10_UNORM_PACK32", Unsupported),
    ("VK_FORMAT_A2B10G10R10_SNORM_PACK32", Unsupported),
    ("VK_FORMAT_A2B10G10R10_USCALED_PACK32", Unsupported),
    ("VK_FORMAT_A2B10G10R10_SSCALED_PACK32", Unsupported),
    ("VK_FORMAT_A2B10G10R10_UINT_PACK32", Unsupported),
    ("VK_FORMAT_A2B10G10R10_SINT_PACK32", Unsupported),
    ("VK_FORMAT_R16_UNORM", Pixel(P::R16Unorm)),
    ("VK_FORMAT_R16_SNORM", Pixel(P::R16Snorm)),
    ("VK_FORMAT_R16_USCALED", Unsupported),
    ("VK_FORMAT_R16_SSCALED", Unsupported),
    ("VK_FORMAT_R16_UINT", Pixel(P::R16Ui)),
    ("VK_FORMAT_R16_SINT", Pixel(P::R16I)),
    ("VK_FORMAT_R16_SFLOAT", Pixel(P::R16F)),
    ("VK_FORMAT_R16G16_UNORM", Pixel(P::Rg16Unorm)),
    ("VK_FORMAT_R16G16_SNORM", Pixel(P::Rg16Snorm)),
    ("VK_FORMAT_R16G16_USCALED", Unsupported),
    ("VK_FORMAT_R16G16_SSCALED", Unsupported),
    ("VK_FORMAT_R16G16_UINT", Pixel(P::Rg16Ui)),
    ("VK_FORMAT_R16G16_SINT", Pixel(P::Rg16I)),
    ("VK_FORMAT_R16G16_SFLOAT", Pixel(P::Rg16F)),
    ("VK_FORMAT_R16G16B16_UNORM", Pixel(P::Rgb16Unorm)),
    ("VK_FORMAT_R16G16B16_SNORM", Pixel(P::Rgb16Snorm)),
    ("VK_FORMAT_R16G16B16_USCALED", Unsupported),
    ("VK_FORMAT_R16G16B16_SSCALED", Unsupported),
    ("VK_FORMAT_R16G16B16_UINT", Pixel(P::Rgb16Ui)),
    ("VK_FORMAT_R16G16B16_SINT", Pixel(P::Rgb16I)),
    ("VK_FORMAT_R16G16B16_SFLOAT", Pixel(P::Rgb16F)),
    ("VK_FORMAT_R16G16B16A16_UNORM", Pixel(P::Rgba16Unorm)),
    ("VK_FORMAT_R16G16B16A16_SNORM", Pixel(P::Rgba16Snorm)),
    ("VK_FORMAT_R16G16B16A16_USCALED", Unsupported),
    ("VK_FORMAT_R16G16B16A16_SSCALED", Unsupported),
    ("VK_FORMAT_R16G16B16A16_UINT", Pixel(P::Rgba16Ui)),
    ("VK_FORMAT_R16G16B16A16_SINT", Pixel(P::Rgba16I)),
    ("VK_FORMAT_R16G16B16A16_SFLOAT", Pixel(P::Rgba16F)),
    ("VK_FORMAT_R32_UINT", Pixel(P::R32Ui)),
    ("VK_FORMAT_R32_SINT", Pixel(P::R32I)),
    ("VK_FORMAT_R32_SFLOAT", Pixel(P::R32F)),
    ("VK_FORMAT_R32G32_UINT", Pixel(P::Rg32Ui)),
    ("VK_FORMAT_R32G32_SINT", Pixel(P::Rg32I)),
    ("VK_FORMAT_R32G32_SFLOAT", Pixel(P::Rg32F)),
    ("VK_FORMAT_R32G32B32_UINT", Pixel(P::Rgb32Ui)),
    ("VK_FORMAT_R32G32B32_SINT", Pixel(P::Rgb32I)),
    ("VK_FORMAT_R32G32B32_SFLOAT", Pixel(P::Rgb32F)),
    ("VK_FORMAT_R32G32B32A32_UINT", Pixel(P::Rgba32Ui)),
    ("VK_FORMAT_R32G32B32A32_SINT", Pixel(P::Rgba32I)),
    ("VK_FORMAT_R32G32B32A32_SFLOAT", Pixel(P::Rgba32F)),
    ("VK_FORMAT_R64_UINT", Unsupported),
    ("VK_FORMAT_R64_SINT", Unsupported),
    ("VK_FORMAT_R64_SFLOAT", Unsupported),
    ("VK_FORMAT_R64G64_UINT", Unsupported),
    ("VK_FORMAT_R64G64_SINT", Unsupported),
    ("VK_FORMAT_R64G64_SFLOAT", Unsupported),
    ("VK_FORMAT_R64G64B64_UINT", Unsupported),
    ("VK_FORMAT_R64G64B64_SINT", Unsupported),
    ("VK_FORMAT_R64G64B64_SFLOAT", Unsupported),
    ("VK_FORMAT_R64G64B64A64_UINT", Unsupported),
    ("VK_FORMAT_R64G64B64A64_SINT", Unsupported),
    ("VK_FORMAT_R64G64B64A64_SFLOAT", Unsupported),
    ("VK_FORMAT_B10G11R11_UFLOAT_PACK32", Unsupported),
    ("VK_FORMAT_E5B9G9R9_UFLOAT_PACK32", Unsupported),
    ("VK_FORMAT_D16_UNORM", Pixel(P::Depth16Unorm)),
    ("VK_FORMAT_X8_D24_UNORM_PACK32", Pixel(P::Depth24Unorm)),
    ("VK_FORMAT_D32_SFLOAT", Pixel(P::Depth32F)),
    ("VK_FORMAT_S8_UINT", Pixel(P::Stencil8Ui)),
    ("VK_FORMAT_D16_UNORM_S8_UINT", Pixel(P::Depth16UnormStencil8Ui)),
    ("VK_FORMAT_D24_UNORM_S8_UINT", Pixel(P::Depth24UnormStencil8Ui)),
    ("VK_FORMAT_D32_SFLOAT_S8_UINT", Pixel(P::Depth32FStencil8Ui)),
    ("VK_FORMAT_BC1_RGB_UNORM_BLOCK", Block(C::Bc1RgbUnorm)),
    ("VK_FORMAT_BC1_RGB_SRGB_BLOCK", Block(C::Bc1RgbSrgb)),
    ("VK_FORMAT_BC1_RGBA_UNORM_BLOCK", Block(C::Bc1RgbaUnorm)),
    ("VK_FORMAT_BC1_RGBA_SRGB_BLOCK", Block(C::Bc1RgbaSrgb)),
    ("VK_FORMAT_BC2_UNORM_BLOCK", Block(C::Bc2RgbaUnorm)),
    ("VK_FORMAT_BC2_SRGB_BLOCK", Block(C::Bc2RgbaSrgb)),
    ("VK_FORMAT_BC3_UNORM_BLOCK", Block(C::Bc3RgbaUnorm)),
    ("VK_FORMAT_BC3_SRGB_BLOCK", Block(C::Bc3RgbaSrgb)),
    ("VK_FORMAT_BC4_UNORM_BLOCK", Block(C::Bc4RUnorm)),
    ("VK_FORMAT_BC4_SNORM_BLOCK", Block(C::Bc4RSnorm)),
    ("VK_FORMAT_BC5_UNORM_BLOCK", Block(C::Bc5RgUnorm)),
    ("VK_FORMAT_BC5_SNORM_BLOCK", Block(C::Bc5RgSnorm)),
    ("VK_FORMAT_BC6H_UFLOAT_BLOCK", Block(C::Bc6hRgbUfloat)),
    ("VK_FORMAT_BC6H_SFLOAT_BLOCK", Block(C::Bc6hRgbSfloat)),
    ("VK_FORMAT_BC7_UNORM_BLOCK", Block(C::Bc7RgbaUnorm)),
    ("VK_FORMAT_BC7_SRGB_BLOCK", Block(C::Bc7RgbaSrgb)),
    ("VK_FORMAT_ETC2_R8G8B8_UNORM_BLOCK", Block(C::Etc2Rgb8Unorm)),
    ("VK_FORMAT_ETC2_R8G8B8_SRGB_BLOCK", Block(C::Etc2Rgb8Srgb)),
    ("VK_FORMAT_ETC2_R8G8B8A1_UNORM_BLOCK", Block(C::Etc2Rgb8A1Unorm)),
    ("VK_FORMAT_ETC2_R8G8B8A1_SRGB_BLOCK", Block(C::Etc2Rgb8A1Srgb)),
    ("VK_FORMAT_ETC2_R8G8B8A8_UNORM_BLOCK", Block(C::Etc2Rgba8Unorm)),
    ("VK_FORMAT_ETC2_R8G8B8A8_SRGB_BLOCK", Block(C::Etc2Rgba8Srgb)),
    ("VK_FORMAT_EAC_R11_UNORM_BLOCK", Block(C::EacR11Unorm)),
    ("VK_FORMAT_EAC_R11_SNORM_BLOCK", Block(C::EacR11Snorm)),
    ("VK_FORMAT_EAC_R11G11_UNORM_BLOCK", Block(C::EacRg11Unorm)),
    ("VK_FORMAT_EAC_R11G11_SNORM_BLOCK", Block(C::EacRg11Snorm)),
    ("VK_FORMAT_ASTC_4x4_UNORM_BLOCK", Block(C::Astc(AstcBlock::B4x4, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_4x4_SRGB_BLOCK", Block(C::Astc(AstcBlock::B4x4, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_5x4_UNORM_BLOCK", Block(C::Astc(AstcBlock::B5x4, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_5x4_SRGB_BLOCK", Block(C::Astc(AstcBlock::B5x4, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_5x5_UNORM_BLOCK", Block(C::Astc(AstcBlock::B5x5, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_5x5_SRGB_BLOCK", Block(C::Astc(AstcBlock::B5x5, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_6x5_UNORM_BLOCK", Block(C::Astc(AstcBlock::B6x5, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_6x5_SRGB_BLOCK", Block(C::Astc(AstcBlock::B6x5, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_6x6_UNORM_BLOCK", Block(C::Astc(AstcBlock::B6x6, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_6x6_SRGB_BLOCK", Block(C::Astc(AstcBlock::B6x6, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_8x5_UNORM_BLOCK", Block(C::Astc(AstcBlock::B8x5, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_8x5_SRGB_BLOCK", Block(C::Astc(AstcBlock::B8x5, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_8x6_UNORM_BLOCK", Block(C::Astc(AstcBlock::B8x6, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_8x6_SRGB_BLOCK", Block(C::Astc(AstcBlock::B8x6, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_8x8_UNORM_BLOCK", Block(C::Astc(AstcBlock::B8x8, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_8x8_SRGB_BLOCK", Block(C::Astc(AstcBlock::B8x8, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_10x5_UNORM_BLOCK", Block(C::Astc(AstcBlock::B10x5, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_10x5_SRGB_BLOCK", Block(C::Astc(AstcBlock::B10x5, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_10x6_UNORM_BLOCK", Block(C::Astc(AstcBlock::B10x6, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_10x6_SRGB_BLOCK", Block(C::Astc(AstcBlock::B10x6, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_10x8_UNORM_BLOCK", Block(C::Astc(AstcBlock::B10x8, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_10x8_SRGB_BLOCK", Block(C::Astc(AstcBlock::B10x8, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_10x10_UNORM_BLOCK", Block(C::Astc(AstcBlock::B10x10, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_10x10_SRGB_BLOCK", Block(C::Astc(AstcBlock::B10x10, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_12x10_UNORM_BLOCK", Block(C::Astc(AstcBlock::B12x10, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_12x10_SRGB_BLOCK", Block(C::Astc(AstcBlock::B12x10, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_12x12_UNORM_BLOCK", Block(C::Astc(AstcBlock::B12x12, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_12x12_SRGB_BLOCK", Block(C::Astc(AstcBlock::B12x12, AstcEncoding::Srgb))),
];

#[rustfmt::skip]
static PVRTC_FORMATS: [FormatEntry; 8] = [
    ("VK_FORMAT_PVRTC1_2BPP_UNORM_BLOCK_IMG", Block(C::PvrtcRgba2bppUnorm)),
    ("VK_FORMAT_PVRTC1_4BPP_UNORM_BLOCK_IMG", Block(C::PvrtcRgba4bppUnorm)),
    ("VK_FORMAT_PVRTC2_2BPP_UNORM_BLOCK_IMG", Block(C::Pvrtc2Rgba2bppUnorm)),
    ("VK_FORMAT_PVRTC2_4BPP_UNORM_BLOCK_IMG", Block(C::Pvrtc2Rgba4bppUnorm)),
    ("VK_FORMAT_PVRTC1_2BPP_SRGB_BLOCK_IMG", Block(C::PvrtcRgba2bppSrgb)),
    ("VK_FORMAT_PVRTC1_4BPP_SRGB_BLOCK_IMG", Block(C::PvrtcRgba4bppSrgb)),
    ("VK_FORMAT_PVRTC2_2BPP_SRGB_BLOCK_IMG", Block(C::Pvrtc2Rgba2bppSrgb)),
    ("VK_FORMAT_PVRTC2_4BPP_SRGB_BLOCK_IMG", Block(C::Pvrtc2Rgba4bppSrgb)),
];

#[rustfmt::skip]
static ASTC_HDR_FORMATS: [FormatEntry; 14] = [
    ("VK_FORMAT_ASTC_4x4_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B4x4, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_5x4_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B5x4, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_5x5_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B5x5, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_6x5_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B6x5, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_6x6_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B6x6, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_8x5_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B8x5, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_8x6_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B8x6, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_8x8_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B8x8, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_10x5_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B10x5, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_10x6_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B10x6, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_10x8_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B10x8, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_10x10_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B10x10, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_12x10_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B12x10, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_12x12_SFLOAT_BLOCK", Block(C::Astc(AstcBlock::B12x12, AstcEncoding::Float))),
];

#[rustfmt::skip]
static YCBCR_FORMATS: [FormatEntry; 34] = [
    ("VK_FORMAT_G8B8G8R8_422_UNORM", Unsupported),
    ("VK_FORMAT_B8G8R8G8_422_UNORM", Unsupported),
    ("VK_FORMAT_G8_B8_R8_3PLANE_420_UNORM", Unsupported),
    ("VK_FORMAT_G8_B8R8_2PLANE_420_UNORM", Unsupported),
    ("VK_FORMAT_G8_B8_R8_3PLANE_422_UNORM", Unsupported),
    ("VK_FORMAT_G8_B8R8_2PLANE_422_UNORM", Unsupported),
    ("VK_FORMAT_G8_B8_R8_3PLANE_444_UNORM", Unsupported),
    ("VK_FORMAT_R10X6_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_R10X6G10X6_UNORM_2PACK16", Unsupported),
    ("VK_FORMAT_R10X6G10X6B10X6A10X6_UNORM_4PACK16", Unsupported),
    ("VK_FORMAT_G10X6B10X6G10X6R10X6_422_UNORM_4PACK16", Unsupported),
    ("VK_FORMAT_B10X6G10X6R10X6G10X6_422_UNORM_4PACK16", Unsupported),
    ("VK_FORMAT_G10X6_B10X6_R10X6_3PLANE_420_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G10X6_B10X6R10X6_2PLANE_420_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G10X6_B10X6_R10X6_3PLANE_422_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G10X6_B10X6R10X6_2PLANE_422_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G10X6_B10X6_R10X6_3PLANE_444_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_R12X4_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_R12X4G12X4_UNORM_2PACK16", Unsupported),
    ("VK_FORMAT_R12X4G12X4B12X4A12X4_UNORM_4PACK16", Unsupported),
    ("VK_FORMAT_G12X4B12X4G12X4R12X4_422_UNORM_4PACK16", Unsupported),
    ("VK_FORMAT_B12X4G12X4R12X4G12X4_422_UNORM_4PACK16", Unsupported),
    ("VK_FORMAT_G12X4_B12X4_R12X4_3PLANE_420_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G12X4_B12X4R12X4_2PLANE_420_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G12X4_B12X4_R12X4_3PLANE_422_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G12X4_B12X4R12X4_2PLANE_422_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G12X4_B12X4_R12X4_3PLANE_444_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G16B16G16R16_422_UNORM", Unsupported),
    ("VK_FORMAT_B16G16R16G16_422_UNORM", Unsupported),
    ("VK_FORMAT_G16_B16_R16_3PLANE_420_UNORM", Unsupported),
    ("VK_FORMAT_G16_B16R16_2PLANE_420_UNORM", Unsupported),
    ("VK_FORMAT_G16_B16_R16_3PLANE_422_UNORM", Unsupported),
    ("VK_FORMAT_G16_B16R16_2PLANE_422_UNORM", Unsupported),
    ("VK_FORMAT_G16_B16_R16_3PLANE_444_UNORM", Unsupported),
];

#[rustfmt::skip]
static ASTC_3D_FORMATS: [FormatEntry; 30] = [
    ("VK_FORMAT_ASTC_3x3x3_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B3x3x3, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_3x3x3_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B3x3x3, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_3x3x3_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B3x3x3, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_4x3x3_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B4x3x3, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_4x3x3_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B4x3x3, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_4x3x3_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B4x3x3, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_4x4x3_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B4x4x3, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_4x4x3_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B4x4x3, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_4x4x3_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B4x4x3, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_4x4x4_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B4x4x4, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_4x4x4_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B4x4x4, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_4x4x4_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B4x4x4, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_5x4x4_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B5x4x4, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_5x4x4_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B5x4x4, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_5x4x4_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B5x4x4, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_5x5x4_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B5x5x4, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_5x5x4_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B5x5x4, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_5x5x4_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B5x5x4, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_5x5x5_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B5x5x5, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_5x5x5_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B5x5x5, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_5x5x5_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B5x5x5, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_6x5x5_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B6x5x5, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_6x5x5_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B6x5x5, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_6x5x5_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B6x5x5, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_6x6x5_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B6x6x5, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_6x6x5_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B6x6x5, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_6x6x5_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B6x6x5, AstcEncoding::Float))),
    ("VK_FORMAT_ASTC_6x6x6_UNORM_BLOCK_EXT", Block(C::Astc(AstcBlock::B6x6x6, AstcEncoding::Unorm))),
    ("VK_FORMAT_ASTC_6x6x6_SRGB_BLOCK_EXT", Block(C::Astc(AstcBlock::B6x6x6, AstcEncoding::Srgb))),
    ("VK_FORMAT_ASTC_6x6x6_SFLOAT_BLOCK_EXT", Block(C::Astc(AstcBlock::B6x6x6, AstcEncoding::Float))),
];

#[rustfmt::skip]
static PLANE_444_FORMATS: [FormatEntry; 4] = [
    ("VK_FORMAT_G8_B8R8_2PLANE_444_UNORM", Unsupported),
    ("VK_FORMAT_G10X6_B10X6R10X6_2PLANE_444_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G12X4_B12X4R12X4_2PLANE_444_UNORM_3PACK16", Unsupported),
    ("VK_FORMAT_G16_B16R16_2PLANE_444_UNORM", Unsupported),
];

#[rustfmt::skip]
static PACK_4444_FORMATS: [FormatEntry; 2] = [
    ("VK_FORMAT_A4R4G4B4_UNORM_PACK16", Unsupported),
    ("VK_FORMAT_A4B4G4R4_UNORM_PACK16", Unsupported),
];

/// Extension ranges, sorted by first ID.
static EXTENSION_BLOCKS: [ExtensionBlock; 6] = [
    ExtensionBlock {
        first: 1_000_054_000,
        formats: &PVRTC_FORMATS,
    },
    ExtensionBlock {
        first: 1_000_066_000,
        formats: &ASTC_HDR_FORMATS,
    },
    ExtensionBlock {
        first: 1_000_156_000,
        formats: &YCBCR_FORMATS,
    },
    ExtensionBlock {
        first: 1_000_288_000,
        formats: &ASTC_3D_FORMATS,
    },
    ExtensionBlock {
        first: 1_000_330_000,
        formats: &PLANE_444_FORMATS,
    },
    ExtensionBlock {
        first: 1_000_340_000,
        formats: &PACK_4444_FORMATS,
    },
];

/// Resolve a `vkFormat` value.
pub(crate) fn resolve_vulkan(id: u32) -> Result<ResolvedFormat, TextureError> {
    resolve_entry("Vulkan", id, lookup(id))
}

fn lookup(id: u32) -> Option<&'static FormatEntry> {
    if let Some(entry) = CORE_FORMATS.get(id as usize) {
        return Some(entry);
    }
    let index = EXTENSION_BLOCKS.partition_point(|block| block.first <= id);
    let block = EXTENSION_BLOCKS.get(index.checked_sub(1)?)?;
    block.formats.get((id - block.first) as usize)
}
