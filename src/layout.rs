//! Mip, array and cube layout arithmetic, and where every surface lives in
//! the file.

use alloc::format;
use alloc::vec;
use alloc::vec::Vec;

use crate::error::TextureError;
use crate::pixel::FormatDescriptor;

/// Shape of an image: base size, level count, array layers and cube faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageLayout {
    pub width: u32,
    /// 1 for 1D images.
    pub height: u32,
    /// 1 for 1D and 2D images.
    pub depth: u32,
    /// Spatial dimension count: 1, 2 or 3.
    pub dimensions: u32,
    /// Mip level count, at least 1.
    pub levels: u32,
    /// Array layer count; 0 when the image isn't an array.
    pub layers: u32,
    /// 6 for cube maps, 1 otherwise.
    pub faces: u32,
}

impl ImageLayout {
    /// Layers to iterate over, treating a non-array image as one layer.
    pub fn layer_count(&self) -> u32 {
        self.layers.max(1)
    }

    pub fn is_array(&self) -> bool {
        self.layers > 0
    }

    pub fn is_cube_map(&self) -> bool {
        self.faces == 6
    }

    /// Number of (layer, face) pairs.
    pub fn image_count(&self) -> u64 {
        u64::from(self.layer_count()) * u64::from(self.faces)
    }

    /// Number of (layer, face, level) surfaces.
    pub fn surface_count(&self) -> usize {
        (self.image_count() * u64::from(self.levels)) as usize
    }

    /// Size of mip `level`: each spatial axis halved `level` times, never
    /// below 1.
    pub fn level_size(&self, level: u32) -> [u32; 3] {
        let shrink = |dim: u32| (dim.checked_shr(level).unwrap_or(0)).max(1);
        [
            shrink(self.width),
            if self.dimensions >= 2 {
                shrink(self.height)
            } else {
                1
            },
            if self.dimensions >= 3 {
                shrink(self.depth)
            } else {
                1
            },
        ]
    }

    /// Length of the full mip chain for the base size.
    pub fn max_levels(&self) -> u32 {
        let largest = self.width.max(self.height).max(self.depth).max(1);
        32 - largest.leading_zeros()
    }

    /// Position of a surface in per-surface tables.
    pub(crate) fn surface_index(&self, layer: u32, face: u32, level: u32) -> usize {
        (layer as usize * self.faces as usize + face as usize) * self.levels as usize
            + level as usize
    }

    /// Reject level counts beyond the full mip chain.
    pub(crate) fn validate_levels(&self) -> Result<(), TextureError> {
        let max = self.max_levels();
        if self.levels > max {
            return Err(TextureError::InvalidHeader(format!(
                "expected at most {max} levels for a {}x{}x{} image but got {}",
                self.width, self.height, self.depth, self.levels
            )));
        }
        Ok(())
    }
}

/// Bytes one surface of `size` takes in `format`.
pub fn surface_bytes(format: FormatDescriptor, size: [u32; 3]) -> Result<u64, TextureError> {
    let [bw, bh, bd] = format.block_size();
    u64::from(size[0].div_ceil(bw))
        .checked_mul(u64::from(size[1].div_ceil(bh)))
        .and_then(|n| n.checked_mul(u64::from(size[2].div_ceil(bd))))
        .and_then(|n| n.checked_mul(u64::from(format.block_bytes())))
        .ok_or(TextureError::DimensionsTooLarge {
            width: size[0],
            height: size[1],
            depth: size[2],
        })
}

/// Byte range of one surface inside the source buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct SurfaceRange {
    pub offset: usize,
    pub len: usize,
}

impl SurfaceRange {
    pub(crate) fn slice<'d>(&self, data: &'d [u8]) -> &'d [u8] {
        &data[self.offset..self.offset + self.len]
    }
}

/// Region of a KTX2 file holding all surfaces of one mip level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelRegion {
    pub offset: u64,
    pub length: u64,
}

fn out_of_bounds(
    layout: &ImageLayout,
    layer: u32,
    face: u32,
    level: u32,
    end: u64,
    file_len: usize,
) -> TextureError {
    TextureError::LevelOutOfBounds {
        image: layer * layout.faces + face,
        level,
        expected: end,
        actual: file_len,
    }
}

/// Place surfaces contiguously after `data_start`: layers outer, faces
/// middle, levels inner.
pub(crate) fn plan_contiguous(
    layout: &ImageLayout,
    format: FormatDescriptor,
    data_start: usize,
    file_len: usize,
) -> Result<Vec<SurfaceRange>, TextureError> {
    let level_bytes = (0..layout.levels)
        .map(|level| surface_bytes(format, layout.level_size(level)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut ranges = Vec::with_capacity(layout.surface_count().min(file_len));
    let mut offset = data_start as u64;
    for layer in 0..layout.layer_count() {
        for face in 0..layout.faces {
            for (level, &len) in (0u32..).zip(level_bytes.iter()) {
                let end = offset.saturating_add(len);
                if end > file_len as u64 {
                    return Err(out_of_bounds(layout, layer, face, level, end, file_len));
                }
                ranges.push(SurfaceRange {
                    offset: offset as usize,
                    len: len as usize,
                });
                offset = end;
            }
        }
    }
    Ok(ranges)
}

/// Place surfaces inside per-level regions: within a level, layers outer
/// and faces inner, each surface holding all its depth slices.
pub(crate) fn plan_leveled(
    layout: &ImageLayout,
    format: FormatDescriptor,
    regions: &[LevelRegion],
    file_len: usize,
) -> Result<Vec<SurfaceRange>, TextureError> {
    // Each surface takes at least one byte, so `found` never outgrows the file.
    let mut found = Vec::new();
    for (level, region) in (0u32..).zip(regions.iter()) {
        let len = surface_bytes(format, layout.level_size(level))?;
        let required = len.saturating_mul(layout.image_count());
        if region.length < required {
            return Err(TextureError::LevelTooShort {
                level,
                expected: required,
                actual: region.length,
            });
        }
        let mut offset = region.offset;
        for layer in 0..layout.layer_count() {
            for face in 0..layout.faces {
                let end = offset.saturating_add(len);
                if end > file_len as u64 {
                    return Err(out_of_bounds(layout, layer, face, level, end, file_len));
                }
                found.push((
                    layout.surface_index(layer, face, level),
                    SurfaceRange {
                        offset: offset as usize,
                        len: len as usize,
                    },
                ));
                offset = end;
            }
        }
    }

    let mut ranges = vec![SurfaceRange::default(); layout.surface_count()];
    for (index, range) in found {
        ranges[index] = range;
    }
    Ok(ranges)
}
