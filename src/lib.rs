//! # zentexture
//!
//! DDS and KTX2 GPU texture container decoder.
//!
//! Parses the container, resolves its pixel format to a [`FormatDescriptor`],
//! works out the mip level, array layer and cube face layout, and hands out
//! each surface as a byte view. Surfaces are normalized to X right, Y up,
//! Z backward and to RGB channel order. Block-compressed data is never
//! decompressed.
//!
//! ## Zero-Copy Decoding
//!
//! A surface that needs no flip and no channel swap is a slice of the input
//! buffer. Transformed surfaces are computed on first access and cached
//! until the decoder is closed.
//!
//! ## Supported Containers
//!
//! - **DDS** with legacy FourCC or channel-mask pixel formats, and the DXT10
//!   extension with DXGI format IDs (1D/2D/3D, arrays, cube maps)
//! - **KTX2** with Vulkan format IDs and `KTXorientation`, `KTXswizzle` and
//!   `KTXcubemapIncomplete` metadata
//!
//! ## Non-Goals
//!
//! - Encoding
//! - Decompressing BC/ETC/ASTC/PVRTC blocks
//! - Supercompression (BasisLZ, Zstandard, ZLIB) and Basis Universal
//! - Color space conversion
//!
//! ## Usage
//!
//! ```no_run
//! use zentexture::{DecodeConfig, ImageInfo, TextureDecoder};
//!
//! let data: &[u8] = &[]; // your DDS/KTX2 bytes
//!
//! // Inspect without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {}", info.layout.width, info.layout.height, info.format);
//!
//! let mut decoder = TextureDecoder::with_config(DecodeConfig::new().with_verbose(true));
//! let descriptor = decoder.open(data)?;
//! let levels = descriptor.layout.levels;
//! for level in 0..levels {
//!     let surface = decoder.surface(0, 0, level)?;
//!     println!("level {level}: {} bytes", surface.data().len());
//! }
//! for message in decoder.diagnostics() {
//!     println!("{:?}: {}", message.severity, message.message);
//! }
//! # Ok::<(), zentexture::TextureError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod cursor;
mod decode;
mod diagnostic;
mod error;
mod flip;
mod format;
mod header;
mod info;
mod layout;
mod limits;
mod orientation;
mod pixel;
mod swizzle;

pub mod dds;
pub mod ktx;

// Re-exports
pub use decode::{DecodeConfig, ImageDescriptor, ImageFlags, SurfaceView, TextureDecoder};
pub use diagnostic::{Diagnostic, Severity};
pub use error::{ErrorKind, TextureError};
pub use header::{Container, ContainerHeader};
pub use info::ImageInfo;
pub use layout::{ImageLayout, surface_bytes};
pub use limits::Limits;
pub use orientation::{FlipPlan, Orientation};
#[cfg(feature = "rgb")]
pub use pixel::DecodePixel;
pub use pixel::{AstcBlock, AstcEncoding, CompressedPixelFormat, FormatDescriptor, PixelFormat};
pub use swizzle::Swizzle;
