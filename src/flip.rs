//! In-place axis flips of a single surface.
//!
//! Uncompressed data is flipped per pixel. Block-compressed data is flipped
//! per block along Z, and along Y only for the BC1 to BC5 family, where
//! the rows inside each block can be reordered without decoding.

use crate::orientation::FlipPlan;
use crate::pixel::{CompressedPixelFormat, FormatDescriptor};

/// Flip one surface of `size` pixels stored in `format`.
///
/// `data` must hold exactly the surface. Axes the format can't flip must
/// already be cleared from `plan`.
pub(crate) fn flip_surface(
    data: &mut [u8],
    format: FormatDescriptor,
    size: [u32; 3],
    plan: FlipPlan,
) {
    let [bw, bh, bd] = format.block_size();
    let unit = format.block_bytes() as usize;
    let columns = size[0].div_ceil(bw) as usize;
    let rows = size[1].div_ceil(bh) as usize;
    let slices = size[2].div_ceil(bd) as usize;
    let row_bytes = columns * unit;
    let slice_bytes = rows * row_bytes;
    if slice_bytes == 0 || data.len() < slice_bytes * slices {
        return;
    }
    let data = &mut data[..slice_bytes * slices];

    if plan.x {
        for row in data.chunks_exact_mut(row_bytes) {
            reverse_units(row, unit);
        }
    }
    if plan.y {
        for slice in data.chunks_exact_mut(slice_bytes) {
            reverse_units(slice, row_bytes);
        }
        if let FormatDescriptor::Compressed(compressed) = format {
            for block in data.chunks_exact_mut(unit) {
                flip_block_y(compressed, block);
            }
        }
    }
    if plan.z {
        reverse_units(data, slice_bytes);
    }
}

/// Reverse the order of `unit`-sized chunks of `data`.
fn reverse_units(data: &mut [u8], unit: usize) {
    let count = data.len() / unit;
    for i in 0..count / 2 {
        let (head, tail) = data.split_at_mut((count - 1 - i) * unit);
        head[i * unit..(i + 1) * unit].swap_with_slice(&mut tail[..unit]);
    }
}

fn flip_block_y(format: CompressedPixelFormat, block: &mut [u8]) {
    use CompressedPixelFormat::*;
    match format {
        Bc1RgbUnorm | Bc1RgbSrgb | Bc1RgbaUnorm | Bc1RgbaSrgb => flip_bc1(block),
        Bc2RgbaUnorm | Bc2RgbaSrgb => {
            let (alpha, color) = block.split_at_mut(8);
            reverse_units(alpha, 2);
            flip_bc1(color);
        }
        Bc3RgbaUnorm | Bc3RgbaSrgb => {
            let (alpha, color) = block.split_at_mut(8);
            flip_bc4(alpha);
            flip_bc1(color);
        }
        Bc4RUnorm | Bc4RSnorm => flip_bc4(block),
        Bc5RgUnorm | Bc5RgSnorm => {
            let (red, green) = block.split_at_mut(8);
            flip_bc4(red);
            flip_bc4(green);
        }
        _ => {}
    }
}

/// Two RGB565 endpoints followed by one byte of 2-bit indices per row.
fn flip_bc1(block: &mut [u8]) {
    block[4..8].reverse();
}

/// Two 8-bit endpoints followed by 48 bits of 3-bit indices, 12 bits per
/// row, little-endian.
fn flip_bc4(block: &mut [u8]) {
    let indices = block[2..8]
        .iter()
        .enumerate()
        .fold(0u64, |acc, (i, &b)| acc | u64::from(b) << (8 * i));
    let flipped = (0..4).fold(0u64, |acc, row| {
        acc | ((indices >> (12 * row)) & 0xfff) << (12 * (3 - row))
    });
    for (i, b) in block[2..8].iter_mut().enumerate() {
        *b = (flipped >> (8 * i)) as u8;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::PixelFormat;

    const RGB8: FormatDescriptor = FormatDescriptor::Uncompressed(PixelFormat::Rgb8Unorm);

    #[test]
    fn flip_rows() {
        let mut data = *b"abcdefghijkl";
        let plan = FlipPlan {
            y: true,
            ..Default::default()
        };
        flip_surface(&mut data, RGB8, [2, 2, 1], plan);
        assert_eq!(&data, b"ghijklabcdef");
    }

    #[test]
    fn flip_columns_keeps_pixels_intact() {
        let mut data = *b"abcdefghijkl";
        let plan = FlipPlan {
            x: true,
            ..Default::default()
        };
        flip_surface(&mut data, RGB8, [2, 2, 1], plan);
        assert_eq!(&data, b"defabcjklghi");
    }

    #[test]
    fn flip_slices() {
        let format = FormatDescriptor::Uncompressed(PixelFormat::R8Unorm);
        let mut data = [1, 2, 3, 4, 5, 6];
        let plan = FlipPlan {
            z: true,
            ..Default::default()
        };
        flip_surface(&mut data, format, [2, 1, 3], plan);
        assert_eq!(data, [5, 6, 3, 4, 1, 2]);
    }

    #[test]
    fn reverse_odd_count() {
        let mut data = [1, 2, 3, 4, 5];
        reverse_units(&mut data, 1);
        assert_eq!(data, [5, 4, 3, 2, 1]);
    }

    #[test]
    fn bc1_blocks() {
        let format = FormatDescriptor::Compressed(CompressedPixelFormat::Bc1RgbaUnorm);
        // Two block rows of one block each.
        let mut data = [
            1, 2, 3, 4, 0x10, 0x11, 0x12, 0x13, //
            5, 6, 7, 8, 0x20, 0x21, 0x22, 0x23,
        ];
        let plan = FlipPlan {
            y: true,
            ..Default::default()
        };
        flip_surface(&mut data, format, [4, 8, 1], plan);
        assert_eq!(
            data,
            [
                5, 6, 7, 8, 0x23, 0x22, 0x21, 0x20, //
                1, 2, 3, 4, 0x13, 0x12, 0x11, 0x10,
            ]
        );
    }

    #[test]
    fn bc2_alpha_rows() {
        let mut block = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, //
            9, 9, 9, 9, 0xa, 0xb, 0xc, 0xd,
        ];
        flip_block_y(CompressedPixelFormat::Bc2RgbaSrgb, &mut block);
        assert_eq!(
            block,
            [
                0x07, 0x08, 0x05, 0x06, 0x03, 0x04, 0x01, 0x02, //
                9, 9, 9, 9, 0xd, 0xc, 0xb, 0xa,
            ]
        );
    }

    #[test]
    fn bc4_index_rows() {
        // Rows 0..3 of indices are 0x321, 0x654, 0x987, 0xcba.
        let indices: u64 = 0xcba_987_654_321;
        let mut block = [0u8; 8];
        block[0] = 0xff;
        block[1] = 0x00;
        for i in 0..6 {
            block[2 + i] = (indices >> (8 * i)) as u8;
        }
        flip_bc4(&mut block);
        let flipped = block[2..8]
            .iter()
            .enumerate()
            .fold(0u64, |acc, (i, &b)| acc | u64::from(b) << (8 * i));
        assert_eq!(flipped, 0x321_654_987_cba);
        assert_eq!(block[..2], [0xff, 0x00]);
    }

    #[test]
    fn bc5_flips_both_channels() {
        let mut block = [0u8; 16];
        block[2] = 0xff;
        block[3] = 0x0f;
        block[10] = 0x21;
        flip_block_y(CompressedPixelFormat::Bc5RgUnorm, &mut block);
        // Row 0 (0xfff) moves to row 3, bits 36..48 = bytes 6..8.
        assert_eq!(block[2..8], [0, 0, 0, 0, 0xf0, 0xff]);
        assert_eq!(block[14..16], [0x10, 0x02]);
    }

    #[test]
    fn compressed_z_flip_moves_whole_slices() {
        let format = FormatDescriptor::Compressed(CompressedPixelFormat::Bc4RUnorm);
        let mut data = [[1u8; 8], [2u8; 8]].concat();
        let plan = FlipPlan {
            z: true,
            ..Default::default()
        };
        flip_surface(&mut data, format, [4, 4, 2], plan);
        assert_eq!(data, [[2u8; 8], [1u8; 8]].concat());
    }
}
