use core::fmt;

/// Uncompressed pixel format.
///
/// Multi-byte components are stored little-endian, exactly as they appear in
/// the container.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PixelFormat {
    R8Unorm,
    Rg8Unorm,
    Rgb8Unorm,
    Rgba8Unorm,
    R8Snorm,
    Rg8Snorm,
    Rgb8Snorm,
    Rgba8Snorm,
    R8Srgb,
    Rg8Srgb,
    Rgb8Srgb,
    Rgba8Srgb,
    R8Ui,
    Rg8Ui,
    Rgb8Ui,
    Rgba8Ui,
    R8I,
    Rg8I,
    Rgb8I,
    Rgba8I,

    R16Unorm,
    Rg16Unorm,
    Rgb16Unorm,
    Rgba16Unorm,
    R16Snorm,
    Rg16Snorm,
    Rgb16Snorm,
    Rgba16Snorm,
    R16Ui,
    Rg16Ui,
    Rgb16Ui,
    Rgba16Ui,
    R16I,
    Rg16I,
    Rgb16I,
    Rgba16I,
    R16F,
    Rg16F,
    Rgb16F,
    Rgba16F,

    R32Ui,
    Rg32Ui,
    Rgb32Ui,
    Rgba32Ui,
    R32I,
    Rg32I,
    Rgb32I,
    Rgba32I,
    R32F,
    Rg32F,
    Rgb32F,
    Rgba32F,

    Depth16Unorm,
    /// 24-bit depth in a 32-bit word, upper 8 bits unused.
    Depth24Unorm,
    Depth32F,
    Stencil8Ui,
    Depth16UnormStencil8Ui,
    Depth24UnormStencil8Ui,
    Depth32FStencil8Ui,
}

impl PixelFormat {
    /// Number of channels.
    pub fn channel_count(self) -> u32 {
        use PixelFormat::*;
        match self {
            R8Unorm | R8Snorm | R8Srgb | R8Ui | R8I | R16Unorm | R16Snorm | R16Ui | R16I
            | R16F | R32Ui | R32I | R32F => 1,
            Rg8Unorm | Rg8Snorm | Rg8Srgb | Rg8Ui | Rg8I | Rg16Unorm | Rg16Snorm | Rg16Ui
            | Rg16I | Rg16F | Rg32Ui | Rg32I | Rg32F => 2,
            Rgb8Unorm | Rgb8Snorm | Rgb8Srgb | Rgb8Ui | Rgb8I | Rgb16Unorm | Rgb16Snorm
            | Rgb16Ui | Rgb16I | Rgb16F | Rgb32Ui | Rgb32I | Rgb32F => 3,
            Rgba8Unorm | Rgba8Snorm | Rgba8Srgb | Rgba8Ui | Rgba8I | Rgba16Unorm
            | Rgba16Snorm | Rgba16Ui | Rgba16I | Rgba16F | Rgba32Ui | Rgba32I | Rgba32F => 4,
            Depth16Unorm | Depth24Unorm | Depth32F | Stencil8Ui => 1,
            Depth16UnormStencil8Ui | Depth24UnormStencil8Ui | Depth32FStencil8Ui => 2,
        }
    }

    /// Bytes per pixel.
    pub fn bytes_per_pixel(self) -> u32 {
        use PixelFormat::*;
        match self {
            Stencil8Ui => 1,
            Depth16Unorm => 2,
            Depth24Unorm | Depth32F | Depth16UnormStencil8Ui | Depth24UnormStencil8Ui => 4,
            Depth32FStencil8Ui => 8,
            _ => self.channel_count() * self.component_bytes(),
        }
    }

    /// Size of one color component. Meaningless for the combined
    /// depth/stencil formats, which report their depth component size.
    pub fn component_bytes(self) -> u32 {
        use PixelFormat::*;
        match self {
            R8Unorm | Rg8Unorm | Rgb8Unorm | Rgba8Unorm | R8Snorm | Rg8Snorm | Rgb8Snorm
            | Rgba8Snorm | R8Srgb | Rg8Srgb | Rgb8Srgb | Rgba8Srgb | R8Ui | Rg8Ui | Rgb8Ui
            | Rgba8Ui | R8I | Rg8I | Rgb8I | Rgba8I | Stencil8Ui => 1,
            R16Unorm | Rg16Unorm | Rgb16Unorm | Rgba16Unorm | R16Snorm | Rg16Snorm
            | Rgb16Snorm | Rgba16Snorm | R16Ui | Rg16Ui | Rgb16Ui | Rgba16Ui | R16I | Rg16I
            | Rgb16I | Rgba16I | R16F | Rg16F | Rgb16F | Rgba16F | Depth16Unorm
            | Depth16UnormStencil8Ui => 2,
            _ => 4,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// ASTC block footprint, 2D and 3D.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AstcBlock {
    B4x4,
    B5x4,
    B5x5,
    B6x5,
    B6x6,
    B8x5,
    B8x6,
    B8x8,
    B10x5,
    B10x6,
    B10x8,
    B10x10,
    B12x10,
    B12x12,
    B3x3x3,
    B4x3x3,
    B4x4x3,
    B4x4x4,
    B5x4x4,
    B5x5x4,
    B5x5x5,
    B6x5x5,
    B6x6x5,
    B6x6x6,
}

impl AstcBlock {
    /// All 2D footprints in ascending order, matching both the Vulkan and
    /// DXGI enumeration order.
    pub(crate) const FOOTPRINTS_2D: [AstcBlock; 14] = [
        Self::B4x4,
        Self::B5x4,
        Self::B5x5,
        Self::B6x5,
        Self::B6x6,
        Self::B8x5,
        Self::B8x6,
        Self::B8x8,
        Self::B10x5,
        Self::B10x6,
        Self::B10x8,
        Self::B10x10,
        Self::B12x10,
        Self::B12x12,
    ];

    /// All 3D footprints in ascending order.
    pub(crate) const FOOTPRINTS_3D: [AstcBlock; 10] = [
        Self::B3x3x3,
        Self::B4x3x3,
        Self::B4x4x3,
        Self::B4x4x4,
        Self::B5x4x4,
        Self::B5x5x4,
        Self::B5x5x5,
        Self::B6x5x5,
        Self::B6x6x5,
        Self::B6x6x6,
    ];

    /// Block size in pixels, `[x, y, z]`.
    pub fn size(self) -> [u32; 3] {
        match self {
            Self::B4x4 => [4, 4, 1],
            Self::B5x4 => [5, 4, 1],
            Self::B5x5 => [5, 5, 1],
            Self::B6x5 => [6, 5, 1],
            Self::B6x6 => [6, 6, 1],
            Self::B8x5 => [8, 5, 1],
            Self::B8x6 => [8, 6, 1],
            Self::B8x8 => [8, 8, 1],
            Self::B10x5 => [10, 5, 1],
            Self::B10x6 => [10, 6, 1],
            Self::B10x8 => [10, 8, 1],
            Self::B10x10 => [10, 10, 1],
            Self::B12x10 => [12, 10, 1],
            Self::B12x12 => [12, 12, 1],
            Self::B3x3x3 => [3, 3, 3],
            Self::B4x3x3 => [4, 3, 3],
            Self::B4x4x3 => [4, 4, 3],
            Self::B4x4x4 => [4, 4, 4],
            Self::B5x4x4 => [5, 4, 4],
            Self::B5x5x4 => [5, 5, 4],
            Self::B5x5x5 => [5, 5, 5],
            Self::B6x5x5 => [6, 5, 5],
            Self::B6x6x5 => [6, 6, 5],
            Self::B6x6x6 => [6, 6, 6],
        }
    }
}

/// How ASTC endpoints are interpreted.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AstcEncoding {
    Unorm,
    Srgb,
    /// HDR.
    Float,
}

/// Block-compressed pixel format. The payload is never decoded, only its
/// layout is known.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompressedPixelFormat {
    Bc1RgbUnorm,
    Bc1RgbSrgb,
    Bc1RgbaUnorm,
    Bc1RgbaSrgb,
    Bc2RgbaUnorm,
    Bc2RgbaSrgb,
    Bc3RgbaUnorm,
    Bc3RgbaSrgb,
    Bc4RUnorm,
    Bc4RSnorm,
    Bc5RgUnorm,
    Bc5RgSnorm,
    Bc6hRgbUfloat,
    Bc6hRgbSfloat,
    Bc7RgbaUnorm,
    Bc7RgbaSrgb,
    EacR11Unorm,
    EacR11Snorm,
    EacRg11Unorm,
    EacRg11Snorm,
    Etc2Rgb8Unorm,
    Etc2Rgb8Srgb,
    Etc2Rgb8A1Unorm,
    Etc2Rgb8A1Srgb,
    Etc2Rgba8Unorm,
    Etc2Rgba8Srgb,
    Astc(AstcBlock, AstcEncoding),
    PvrtcRgba2bppUnorm,
    PvrtcRgba2bppSrgb,
    PvrtcRgba4bppUnorm,
    PvrtcRgba4bppSrgb,
    Pvrtc2Rgba2bppUnorm,
    Pvrtc2Rgba2bppSrgb,
    Pvrtc2Rgba4bppUnorm,
    Pvrtc2Rgba4bppSrgb,
}

impl CompressedPixelFormat {
    /// Block size in pixels, `[x, y, z]`.
    pub fn block_size(self) -> [u32; 3] {
        use CompressedPixelFormat::*;
        match self {
            Astc(block, _) => block.size(),
            PvrtcRgba2bppUnorm | PvrtcRgba2bppSrgb | Pvrtc2Rgba2bppUnorm | Pvrtc2Rgba2bppSrgb => {
                [8, 4, 1]
            }
            _ => [4, 4, 1],
        }
    }

    /// Bytes per block.
    pub fn block_bytes(self) -> u32 {
        use CompressedPixelFormat::*;
        match self {
            Bc1RgbUnorm | Bc1RgbSrgb | Bc1RgbaUnorm | Bc1RgbaSrgb | Bc4RUnorm | Bc4RSnorm
            | EacR11Unorm | EacR11Snorm | Etc2Rgb8Unorm | Etc2Rgb8Srgb | Etc2Rgb8A1Unorm
            | Etc2Rgb8A1Srgb | PvrtcRgba2bppUnorm | PvrtcRgba2bppSrgb | PvrtcRgba4bppUnorm
            | PvrtcRgba4bppSrgb | Pvrtc2Rgba2bppUnorm | Pvrtc2Rgba2bppSrgb
            | Pvrtc2Rgba4bppUnorm | Pvrtc2Rgba4bppSrgb => 8,
            _ => 16,
        }
    }

    /// Number of channels the decoded data would have.
    pub fn channel_count(self) -> u32 {
        use CompressedPixelFormat::*;
        match self {
            Bc4RUnorm | Bc4RSnorm | EacR11Unorm | EacR11Snorm => 1,
            Bc5RgUnorm | Bc5RgSnorm | EacRg11Unorm | EacRg11Snorm => 2,
            Bc1RgbUnorm | Bc1RgbSrgb | Bc6hRgbUfloat | Bc6hRgbSfloat | Etc2Rgb8Unorm
            | Etc2Rgb8Srgb => 3,
            _ => 4,
        }
    }

    /// Whether the block footprint spans more than one slice.
    pub fn is_3d_block(self) -> bool {
        self.block_size()[2] > 1
    }

    /// Whether the block contents can be flipped along Y without decoding.
    pub fn supports_y_flip(self) -> bool {
        use CompressedPixelFormat::*;
        matches!(
            self,
            Bc1RgbUnorm
                | Bc1RgbSrgb
                | Bc1RgbaUnorm
                | Bc1RgbaSrgb
                | Bc2RgbaUnorm
                | Bc2RgbaSrgb
                | Bc3RgbaUnorm
                | Bc3RgbaSrgb
                | Bc4RUnorm
                | Bc4RSnorm
                | Bc5RgUnorm
                | Bc5RgSnorm
        )
    }
}

impl fmt::Display for CompressedPixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Astc(block, encoding) => {
                let [x, y, z] = block.size();
                f.write_fmt(format_args!("Astc{x}x{y}"))?;
                if z > 1 {
                    f.write_fmt(format_args!("x{z}"))?;
                }
                f.write_str(match encoding {
                    AstcEncoding::Unorm => "RgbaUnorm",
                    AstcEncoding::Srgb => "RgbaSrgb",
                    AstcEncoding::Float => "RgbaF",
                })
            }
            other => fmt::Debug::fmt(other, f),
        }
    }
}

/// Resolved pixel format of a container: either uncompressed or a block
/// format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatDescriptor {
    Uncompressed(PixelFormat),
    Compressed(CompressedPixelFormat),
}

impl FormatDescriptor {
    pub fn is_compressed(self) -> bool {
        matches!(self, Self::Compressed(_))
    }

    pub fn channel_count(self) -> u32 {
        match self {
            Self::Uncompressed(format) => format.channel_count(),
            Self::Compressed(format) => format.channel_count(),
        }
    }

    /// Block footprint; `[1, 1, 1]` for uncompressed formats.
    pub fn block_size(self) -> [u32; 3] {
        match self {
            Self::Uncompressed(_) => [1, 1, 1],
            Self::Compressed(format) => format.block_size(),
        }
    }

    /// Bytes per block; bytes per pixel for uncompressed formats.
    pub fn block_bytes(self) -> u32 {
        match self {
            Self::Uncompressed(format) => format.bytes_per_pixel(),
            Self::Compressed(format) => format.block_bytes(),
        }
    }
}

impl fmt::Display for FormatDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uncompressed(format) => fmt::Display::fmt(format, f),
            Self::Compressed(format) => fmt::Display::fmt(format, f),
        }
    }
}

/// Typed pixel that a [`SurfaceView`](crate::SurfaceView) can be viewed as.
#[cfg(feature = "rgb")]
pub trait DecodePixel: Copy + 'static {
    /// Whether surfaces of `format` can be reinterpreted as `Self`.
    fn accepts(format: PixelFormat) -> bool;
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGB8 {
    fn accepts(format: PixelFormat) -> bool {
        matches!(
            format,
            PixelFormat::Rgb8Unorm | PixelFormat::Rgb8Srgb | PixelFormat::Rgb8Ui
        )
    }
}

#[cfg(feature = "rgb")]
impl DecodePixel for rgb::RGBA8 {
    fn accepts(format: PixelFormat) -> bool {
        matches!(
            format,
            PixelFormat::Rgba8Unorm | PixelFormat::Rgba8Srgb | PixelFormat::Rgba8Ui
        )
    }
}
