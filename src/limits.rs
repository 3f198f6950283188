use crate::error::TextureError;
use crate::layout::{ImageLayout, SurfaceRange};

/// Resource limits checked when a file is opened.
///
/// All fields default to `None` (no limit).
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    pub max_depth: Option<u64>,
    /// Maximum array layer count.
    pub max_layers: Option<u64>,
    /// Maximum size of one flipped or channel-swapped surface copy.
    pub max_surface_bytes: Option<u64>,
}

impl Limits {
    /// Check the base size and layer count. Returns Ok(()) or LimitExceeded error.
    pub(crate) fn check(&self, layout: &ImageLayout) -> Result<(), TextureError> {
        let checks = [
            ("width", layout.width, self.max_width),
            ("height", layout.height, self.max_height),
            ("depth", layout.depth, self.max_depth),
            ("layer count", layout.layers, self.max_layers),
        ];
        for (what, value, max) in checks {
            if let Some(max) = max {
                if u64::from(value) > max {
                    return Err(TextureError::LimitExceeded(alloc::format!(
                        "{what} {value} exceeds limit {max}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Refuse to copy a surface larger than `max_surface_bytes`.
    pub(crate) fn check_surface(&self, range: SurfaceRange) -> Result<(), TextureError> {
        match self.max_surface_bytes {
            Some(max) if range.len as u64 > max => Err(TextureError::LimitExceeded(
                alloc::format!("surface copy of {} bytes exceeds limit {max}", range.len),
            )),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn per_axis_limits() {
        let layout = ImageLayout {
            width: 64,
            height: 32,
            depth: 1,
            dimensions: 2,
            levels: 1,
            layers: 5,
            faces: 1,
        };
        assert!(Limits::default().check(&layout).is_ok());
        let limits = Limits {
            max_height: Some(16),
            ..Default::default()
        };
        assert_eq!(
            limits.check(&layout).unwrap_err().to_string(),
            "limit exceeded: height 32 exceeds limit 16"
        );
        let limits = Limits {
            max_layers: Some(4),
            ..Default::default()
        };
        assert!(limits.check(&layout).is_err());
    }

    #[test]
    fn surface_copy_limit() {
        let limits = Limits {
            max_surface_bytes: Some(100),
            ..Default::default()
        };
        let range = |len| SurfaceRange { offset: 128, len };
        assert!(limits.check_surface(range(100)).is_ok());
        assert_eq!(
            limits.check_surface(range(101)).unwrap_err().to_string(),
            "limit exceeded: surface copy of 101 bytes exceeds limit 100"
        );
        assert!(Limits::default().check_surface(range(usize::MAX)).is_ok());
    }
}
