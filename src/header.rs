use alloc::string::ToString;
use alloc::vec::Vec;

use crate::dds::DdsHeader;
use crate::error::TextureError;
use crate::format::ResolvedFormat;
use crate::ktx::KtxHeader;
use crate::layout::{ImageLayout, SurfaceRange};
use crate::orientation::Orientation;
use crate::swizzle::Swizzle;

/// Parsed header of either container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContainerHeader {
    Dds(DdsHeader),
    Ktx(KtxHeader),
}

impl ContainerHeader {
    pub fn container(&self) -> Container {
        match self {
            Self::Dds(_) => Container::Dds,
            Self::Ktx(_) => Container::Ktx2,
        }
    }
}

/// Container kind, detected from the file signature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    Dds,
    Ktx2,
}

impl Container {
    /// Detect the container from its leading bytes.
    pub fn detect(data: &[u8]) -> Option<Self> {
        if data.starts_with(crate::dds::MAGIC) {
            Some(Self::Dds)
        } else if data.starts_with(&crate::ktx::IDENTIFIER) {
            Some(Self::Ktx2)
        } else {
            None
        }
    }

    /// Pick the parser for `data`.
    ///
    /// Input too short to hold a full signature goes to the container whose
    /// signature it starts, DDS when it matches neither, so the parser reports
    /// the missing bytes.
    pub(crate) fn sniff(data: &[u8]) -> Result<Self, TextureError> {
        if let Some(container) = Self::detect(data) {
            return Ok(container);
        }
        if !data.is_empty() && crate::ktx::IDENTIFIER.starts_with(data) {
            return Ok(Self::Ktx2);
        }
        if data.len() < crate::dds::MAGIC.len() {
            return Ok(Self::Dds);
        }
        let end = data.len().min(crate::ktx::IDENTIFIER.len());
        Err(TextureError::UnknownContainer(
            data[..end].escape_ascii().to_string(),
        ))
    }
}

/// Everything a container parser determines up front.
#[derive(Clone, Debug)]
pub(crate) struct ParsedContainer {
    pub header: ContainerHeader,
    pub layout: ImageLayout,
    pub format: ResolvedFormat,
    /// Remap requested by file metadata, applied after the implied one.
    pub metadata_swizzle: Swizzle,
    /// Orientation the data is stored in, per metadata or container default.
    pub orientation: Orientation,
    pub cube_map_incomplete: bool,
    pub ranges: Vec<SurfaceRange>,
}
