//! Source orientation and the decision which axes to flip.
//!
//! Decoded surfaces are always returned with X pointing right, Y up and Z
//! backward (out of the screen), `"ruo"` in KTX2 notation.

use alloc::format;
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::diagnostic::DiagnosticLog;
use crate::error::TextureError;
use crate::pixel::FormatDescriptor;

/// Direction of each axis in the stored data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Orientation {
    /// `r` when X grows to the right, `l` when to the left.
    pub right: bool,
    /// `u` when Y grows upwards, `d` when downwards.
    pub up: bool,
    /// `o` when Z grows out of the screen, `i` when into it.
    pub out: bool,
}

impl Orientation {
    /// Right, up, out. What decoded surfaces are normalized to.
    pub const CANONICAL: Orientation = Orientation {
        right: true,
        up: true,
        out: true,
    };

    /// Right, down, in. KTX2 default, and what DDS files are assumed to be.
    pub const RIGHT_DOWN_IN: Orientation = Orientation {
        right: true,
        up: false,
        out: false,
    };
}

impl Default for Orientation {
    fn default() -> Self {
        Self::RIGHT_DOWN_IN
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.right { "r" } else { "l" })?;
        f.write_str(if self.up { "u" } else { "d" })?;
        f.write_str(if self.out { "o" } else { "i" })
    }
}

impl FromStr for Orientation {
    type Err = TextureError;

    /// Parse one to three axis letters. Axes that aren't given are assumed
    /// canonical, so `"rd"` describes a 2D image stored top-down.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.is_empty() || bytes.len() > 3 {
            return Err(TextureError::InvalidOrientation(s.escape_default().to_string()));
        }
        let mut orientation = Self::CANONICAL;
        for (axis, &c) in bytes.iter().enumerate() {
            let positive = match (axis, c) {
                (0, b'r') | (1, b'u') | (2, b'o') => true,
                (0, b'l') | (1, b'd') | (2, b'i') => false,
                _ => {
                    return Err(TextureError::InvalidOrientation(
                        s.escape_default().to_string(),
                    ));
                }
            };
            match axis {
                0 => orientation.right = positive,
                1 => orientation.up = positive,
                _ => orientation.out = positive,
            }
        }
        Ok(orientation)
    }
}

/// Axes that get flipped on every surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlipPlan {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl FlipPlan {
    pub fn is_empty(self) -> bool {
        !(self.x || self.y || self.z)
    }
}

/// Decide which flips to perform for an image with `dimensions` spatial
/// axes stored in `source` orientation.
///
/// Flips that can't be done on the format are dropped with a warning;
/// nothing here is fatal.
pub(crate) fn plan_flips(
    source: Orientation,
    dimensions: u32,
    format: FormatDescriptor,
    height: u32,
    log: &mut DiagnosticLog,
) -> FlipPlan {
    let mut plan = FlipPlan {
        x: source.right != Orientation::CANONICAL.right,
        y: dimensions >= 2 && source.up != Orientation::CANONICAL.up,
        z: dimensions >= 3 && source.out != Orientation::CANONICAL.out,
    };

    if let FormatDescriptor::Compressed(compressed) = format {
        if plan.y {
            if !compressed.supports_y_flip() {
                log.warn(format!(
                    "Y-flipping {compressed} isn't implemented, the image will be upside down"
                ));
                plan.y = false;
            } else if height % compressed.block_size()[1] != 0 {
                log.warn(format!(
                    "Y-flipping a compressed image with height {height} that isn't whole blocks, the data will be shifted"
                ));
            }
        }
        if plan.x {
            log.warn(format!(
                "X-flipping {compressed} isn't implemented, the image will be mirrored"
            ));
            plan.x = false;
        }
        if plan.z && compressed.is_3d_block() {
            log.warn(format!(
                "Z-flipping {compressed} isn't implemented, the image will be back to front"
            ));
            plan.z = false;
        }
    }

    if !plan.is_empty() {
        let mut axes = String::new();
        for (flip, name) in [(plan.x, "X"), (plan.y, "Y"), (plan.z, "Z")] {
            if flip {
                if !axes.is_empty() {
                    axes.push_str(" and ");
                }
                axes.push_str(name);
            }
        }
        log.info(format!("image will be flipped along {axes}"));
    }
    plan
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::pixel::{AstcBlock, AstcEncoding, CompressedPixelFormat, PixelFormat};
    use rstest::rstest;

    #[rstest]
    #[case("ruo", true, true, true)]
    #[case("rdi", true, false, false)]
    #[case("rd", true, false, true)]
    #[case("l", false, true, true)]
    #[case("ldo", false, false, true)]
    fn parse(#[case] text: &str, #[case] right: bool, #[case] up: bool, #[case] out: bool) {
        let o: Orientation = text.parse().unwrap();
        assert_eq!(o, Orientation { right, up, out });
    }

    #[rstest]
    #[case("")]
    #[case("dru")]
    #[case("ruox")]
    #[case("rx")]
    fn parse_invalid(#[case] text: &str) {
        assert!(text.parse::<Orientation>().is_err());
    }

    #[test]
    fn display_roundtrips_default() {
        assert_eq!(Orientation::default().to_string(), "rdi");
        assert_eq!(Orientation::CANONICAL.to_string(), "ruo");
    }

    #[test]
    fn uncompressed_flips_every_axis() {
        let mut log = DiagnosticLog::new(false, false);
        let format = FormatDescriptor::Uncompressed(PixelFormat::Rgba8Unorm);
        let plan = plan_flips("ldi".parse().unwrap(), 3, format, 3, &mut log);
        assert_eq!(plan, FlipPlan { x: true, y: true, z: true });
        assert!(log.entries().is_empty());
    }

    #[test]
    fn only_spatial_axes_count() {
        let mut log = DiagnosticLog::new(false, false);
        let format = FormatDescriptor::Uncompressed(PixelFormat::R8Unorm);
        let plan = plan_flips(Orientation::RIGHT_DOWN_IN, 1, format, 1, &mut log);
        assert!(plan.is_empty());
        let plan = plan_flips(Orientation::RIGHT_DOWN_IN, 2, format, 1, &mut log);
        assert_eq!(plan, FlipPlan { x: false, y: true, z: false });
    }

    #[test]
    fn bc_height_not_whole_blocks_warns() {
        let mut log = DiagnosticLog::new(false, false);
        let format = FormatDescriptor::Compressed(CompressedPixelFormat::Bc3RgbaUnorm);
        let plan = plan_flips(Orientation::RIGHT_DOWN_IN, 2, format, 6, &mut log);
        assert!(plan.y);
        assert_eq!(log.entries().len(), 1);
        assert_eq!(log.entries()[0].severity, Severity::Warning);
        assert!(log.entries()[0].message.contains("shifted"));
    }

    #[test]
    fn unflippable_compressed_axes_are_skipped() {
        let mut log = DiagnosticLog::new(false, false);
        let format = FormatDescriptor::Compressed(CompressedPixelFormat::Bc7RgbaUnorm);
        let plan = plan_flips("ldi".parse().unwrap(), 3, format, 4, &mut log);
        assert_eq!(plan, FlipPlan { x: false, y: false, z: true });
        assert_eq!(log.entries().len(), 2);

        let mut log = DiagnosticLog::new(false, false);
        let format = FormatDescriptor::Compressed(CompressedPixelFormat::Astc(
            AstcBlock::B4x4x4,
            AstcEncoding::Unorm,
        ));
        let plan = plan_flips("rui".parse().unwrap(), 3, format, 4, &mut log);
        assert!(plan.is_empty());
        assert_eq!(log.entries().len(), 1);
    }

    #[test]
    fn quiet_suppresses_flip_warnings() {
        let mut log = DiagnosticLog::new(true, false);
        let format = FormatDescriptor::Compressed(CompressedPixelFormat::Etc2Rgb8Unorm);
        let plan = plan_flips(Orientation::RIGHT_DOWN_IN, 2, format, 4, &mut log);
        assert!(plan.is_empty());
        assert!(log.entries().is_empty());
    }

    #[test]
    fn verbose_reports_flipped_axes() {
        let mut log = DiagnosticLog::new(false, true);
        let format = FormatDescriptor::Uncompressed(PixelFormat::Rgb8Unorm);
        plan_flips("ldo".parse().unwrap(), 2, format, 2, &mut log);
        assert_eq!(log.entries()[0].message, "image will be flipped along X and Y");
    }
}
