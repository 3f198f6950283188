//! Channel remapping.
//!
//! A [`Swizzle`] names, for each output channel, which source channel (or
//! constant) it is taken from, in the KTX2 `KTXswizzle` notation: `r`, `g`,
//! `b`, `a`, `0` or `1`. Only the identity and the red/blue exchange can be
//! applied; everything else is rejected when a file is opened.

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::diagnostic::DiagnosticLog;
use crate::error::TextureError;
use crate::pixel::FormatDescriptor;

/// Per-channel source mapping, always four entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Swizzle([u8; 4]);

impl Swizzle {
    pub const IDENTITY: Swizzle = Swizzle(*b"rgba");
    /// Red and blue exchanged. Parsed from both `"bgr"` and `"bgra"`.
    pub const BGRA: Swizzle = Swizzle(*b"bgra");

    /// The raw four-character mapping.
    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Whether the first `channels` outputs come from their own channel.
    pub fn is_identity_for(self, channels: u32) -> bool {
        let n = channels.min(4) as usize;
        self.0[..n] == Self::IDENTITY.0[..n]
    }

    fn is_red_blue_swap_for(self, channels: u32) -> bool {
        let n = channels.min(4) as usize;
        self.0[..n] == Self::BGRA.0[..n]
    }

    /// Mapping equivalent to applying `self` first and `then` afterwards.
    pub fn then(self, then: Swizzle) -> Swizzle {
        let mut out = [0u8; 4];
        for (slot, &source) in out.iter_mut().zip(then.0.iter()) {
            *slot = match channel_index(source) {
                Some(i) => self.0[i],
                None => source,
            };
        }
        Swizzle(out)
    }
}

impl Default for Swizzle {
    fn default() -> Self {
        Self::IDENTITY
    }
}

fn channel_index(c: u8) -> Option<usize> {
    match c {
        b'r' => Some(0),
        b'g' => Some(1),
        b'b' => Some(2),
        b'a' => Some(3),
        _ => None,
    }
}

impl fmt::Display for Swizzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &c in &self.0 {
            fmt::Write::write_char(f, char::from(c))?;
        }
        Ok(())
    }
}

impl FromStr for Swizzle {
    type Err = TextureError;

    /// Parse one to four channel characters; missing trailing entries keep
    /// their own channel, so `"bgr"` equals `"bgra"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.is_empty()
            || bytes.len() > 4
            || !bytes.iter().all(|c| b"rgba01".contains(c))
        {
            return Err(TextureError::UnsupportedSwizzle(s.escape_default().to_string()));
        }
        let mut map = Self::IDENTITY.0;
        map[..bytes.len()].copy_from_slice(bytes);
        Ok(Swizzle(map))
    }
}

/// What has to happen to the bytes of every surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SwizzleAction {
    None,
    /// Exchange the first and third component of every pixel.
    SwapRedBlue {
        channels: u32,
        component_bytes: u32,
    },
}

/// Validate the combined swizzle against the format and decide the action.
pub(crate) fn resolve(
    swizzle: Swizzle,
    format: FormatDescriptor,
) -> Result<SwizzleAction, TextureError> {
    let pixel = match format {
        FormatDescriptor::Compressed(_) if swizzle == Swizzle::IDENTITY => {
            return Ok(SwizzleAction::None);
        }
        // Block data is never remapped, constant components included.
        FormatDescriptor::Compressed(compressed) => {
            return Err(TextureError::CompressedSwizzle {
                swizzle: swizzle.to_string(),
                format: compressed,
            });
        }
        FormatDescriptor::Uncompressed(pixel) => pixel,
    };
    let channels = pixel.channel_count();
    if swizzle.is_identity_for(channels) {
        return Ok(SwizzleAction::None);
    }
    if (channels == 3 || channels == 4) && swizzle.is_red_blue_swap_for(channels) {
        return Ok(SwizzleAction::SwapRedBlue {
            channels,
            component_bytes: pixel.component_bytes(),
        });
    }
    Err(TextureError::UnsupportedSwizzle(swizzle.to_string()))
}

impl SwizzleAction {
    /// Swap channels of every pixel in `data`, announcing the conversion on
    /// `log`.
    pub(crate) fn apply_in_place(self, data: &mut [u8], log: &mut DiagnosticLog) {
        let SwizzleAction::SwapRedBlue {
            channels,
            component_bytes,
        } = self
        else {
            return;
        };
        log.info(if channels == 3 {
            String::from("converting from BGR to RGB")
        } else {
            String::from("converting from BGRA to RGBA")
        });
        let c = component_bytes as usize;
        let pixel = channels as usize * c;
        for px in data.chunks_exact_mut(pixel) {
            let (red, rest) = px.split_at_mut(c);
            red.swap_with_slice(&mut rest[c..2 * c]);
        }
    }
}
