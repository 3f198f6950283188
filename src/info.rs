use crate::decode::ImageFlags;
use crate::diagnostic::DiagnosticLog;
use crate::error::TextureError;
use crate::header::Container;
use crate::layout::ImageLayout;
use crate::pixel::FormatDescriptor;
use crate::{dds, ktx};

/// Basic facts about a texture file, without opening a decoder.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    pub container: Container,
    pub layout: ImageLayout,
    pub format: FormatDescriptor,
    pub flags: ImageFlags,
}

impl ImageInfo {
    /// Read the basic facts of a DDS or KTX2 file.
    ///
    /// Validates the same way [`TextureDecoder::open`](crate::TextureDecoder::open)
    /// does, but discards warnings and decides no flips or swizzles.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TextureError> {
        let container = Container::sniff(data)?;
        let mut log = DiagnosticLog::new(true, false);
        let parsed = match container {
            Container::Dds => dds::parse(data, &mut log)?,
            Container::Ktx2 => ktx::parse(data, &mut log)?,
        };
        Ok(Self {
            container,
            layout: parsed.layout,
            format: parsed.format.format,
            flags: ImageFlags::for_layout(&parsed.layout),
        })
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn rejects_unknown_container() {
        let err = ImageInfo::from_bytes(b"\x89PNG\r\n\x1a\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "unrecognized container signature \\x89PNG\\r\\n\\x1a\\n"
        );
    }

    #[test]
    fn empty_input() {
        let err = ImageInfo::from_bytes(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "file too short, expected at least 128 bytes but got 0"
        );
    }

    #[test]
    fn truncated_ktx_identifier() {
        let err = ImageInfo::from_bytes(&crate::ktx::IDENTIFIER[..11]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "file too short, expected at least 80 bytes but got 11"
        );
    }
}
