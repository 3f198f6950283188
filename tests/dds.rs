use rstest::rstest;
use zentexture::*;

const DDSD_MIPMAPCOUNT: u32 = 0x2_0000;
const DDSD_DEPTH: u32 = 0x80_0000;
const DDPF_FOURCC: u32 = 0x4;
const DDPF_RGB: u32 = 0x40;
const CUBEMAP_ALL_FACES: u32 = 0x200 | 0xfc00;

/// In-memory DDS writer for tests.
#[derive(Clone, Default)]
struct Dds {
    width: u32,
    height: u32,
    depth: u32,
    levels: u32,
    pf_flags: u32,
    four_cc: [u8; 4],
    bits: u32,
    masks: [u32; 4],
    caps2: u32,
    /// dxgiFormat, resourceDimension, miscFlag, arraySize
    dxt10: Option<[u32; 4]>,
}

impl Dds {
    fn four_cc(width: u32, height: u32, tag: &[u8; 4]) -> Self {
        Self {
            width,
            height,
            pf_flags: DDPF_FOURCC,
            four_cc: *tag,
            ..Self::default()
        }
    }

    fn masks(width: u32, height: u32, bits: u32, masks: [u32; 4]) -> Self {
        Self {
            width,
            height,
            pf_flags: DDPF_RGB,
            bits,
            masks,
            ..Self::default()
        }
    }

    fn dxgi(width: u32, height: u32, format: u32, dimension: u32, misc: u32, array: u32) -> Self {
        Self {
            dxt10: Some([format, dimension, misc, array]),
            ..Self::four_cc(width, height, b"DX10")
        }
    }

    fn write(&self, payload: &[u8]) -> Vec<u8> {
        let mut flags = 0x1 | 0x2 | 0x4 | 0x1000;
        if self.levels > 0 {
            flags |= DDSD_MIPMAPCOUNT;
        }
        if self.depth > 0 {
            flags |= DDSD_DEPTH;
        }
        let mut words = [0u32; 31];
        words[0] = 124;
        words[1] = flags;
        words[2] = self.height;
        words[3] = self.width;
        words[5] = self.depth;
        words[6] = self.levels;
        words[18] = 32;
        words[19] = self.pf_flags;
        words[20] = u32::from_le_bytes(self.four_cc);
        words[21] = self.bits;
        words[22..26].copy_from_slice(&self.masks);
        words[26] = 0x1000;
        words[27] = self.caps2;

        let mut out = b"DDS ".to_vec();
        for w in words {
            out.extend_from_slice(&w.to_le_bytes());
        }
        if let Some([format, dimension, misc, array]) = self.dxt10 {
            for w in [format, dimension, misc, array, 0] {
                out.extend_from_slice(&w.to_le_bytes());
            }
        }
        out.extend_from_slice(payload);
        out
    }
}

const BGR_MASKS: [u32; 4] = [0xff0000, 0xff00, 0xff, 0];

/// 3x2 BGR8: top row blue, green, red; bottom row white, grey, black.
fn bgr_3x2() -> Vec<u8> {
    #[rustfmt::skip]
    let payload = [
        255, 0, 0,   0, 255, 0,   0, 0, 255,
        255, 255, 255,   128, 128, 128,   0, 0, 0,
    ];
    Dds::masks(3, 2, 24, BGR_MASKS).write(&payload)
}

fn messages(decoder: &TextureDecoder<'_>, text: &str) -> usize {
    decoder
        .diagnostics()
        .iter()
        .filter(|d| d.message == text)
        .count()
}

#[test]
fn legacy_bgr8_converted_to_rgb() {
    let data = bgr_3x2();
    let mut decoder = TextureDecoder::with_config(DecodeConfig::new().with_verbose(true));
    let descriptor = decoder.open(&data[..]).unwrap();
    assert_eq!(descriptor.container, Container::Dds);
    assert_eq!(
        descriptor.format,
        FormatDescriptor::Uncompressed(PixelFormat::Rgb8Unorm)
    );
    assert_eq!(descriptor.swizzle, Swizzle::BGRA);
    assert_eq!(descriptor.flips, FlipPlan { x: false, y: true, z: false });

    let surface = decoder.surface(0, 0, 0).unwrap();
    assert!(!surface.is_borrowed());
    assert_eq!((surface.width, surface.height, surface.depth), (3, 2, 1));
    // Rows swapped to bottom-up, channels to RGB.
    #[rustfmt::skip]
    let expected = [
        255, 255, 255,   128, 128, 128,   0, 0, 0,
        0, 0, 255,   0, 255, 0,   255, 0, 0,
    ];
    assert_eq!(surface.data(), &expected);

    // Served from the cache the second time.
    let again = decoder.surface(0, 0, 0).unwrap().data().to_vec();
    assert_eq!(again, expected);
    assert_eq!(messages(&decoder, "converting from BGR to RGB"), 1);
    assert_eq!(messages(&decoder, "image will be flipped along Y"), 1);
}

#[test]
fn legacy_bgr8_quiet_by_default() {
    let data = bgr_3x2();
    let mut decoder = TextureDecoder::new();
    decoder.open(&data[..]).unwrap();
    decoder.surface(0, 0, 0).unwrap();
    assert!(decoder.diagnostics().is_empty());
}

#[test]
fn reopen_same_bytes() {
    let data = bgr_3x2();
    let mut decoder = TextureDecoder::with_config(DecodeConfig::new().with_verbose(true));
    decoder.open(&data[..]).unwrap();
    let first = decoder.surface(0, 0, 0).unwrap().data().to_vec();
    decoder.open(data.clone()).unwrap();
    let second = decoder.surface(0, 0, 0).unwrap().data().to_vec();
    assert_eq!(first, second);
    // The log restarts on every open.
    assert_eq!(messages(&decoder, "converting from BGR to RGB"), 1);
    decoder.close();
    assert!(matches!(decoder.surface(0, 0, 0), Err(TextureError::NotOpened)));
}

#[test]
fn failed_open_closes_previous_file() {
    let data = bgr_3x2();
    let mut decoder = TextureDecoder::new();
    decoder.open(&data[..]).unwrap();
    assert!(decoder.open(&data[..100]).is_err());
    assert!(!decoder.is_opened());
}

#[test]
fn canonical_orientation_borrows_input() {
    let payload: Vec<u8> = (0..16).collect();
    let data = Dds::masks(2, 2, 32, [0xff, 0xff00, 0xff0000, 0xff000000]).write(&payload);
    let config = DecodeConfig::new().with_assume_orientation(Orientation::CANONICAL);
    let mut decoder = TextureDecoder::with_config(config);
    let descriptor = decoder.open(&data[..]).unwrap();
    assert!(descriptor.flips.is_empty());
    let surface = decoder.surface(0, 0, 0).unwrap();
    assert!(surface.is_borrowed());
    assert_eq!(surface.data(), &payload[..]);
}

#[rstest]
#[case(&b""[..])]
#[case(&b"DDS"[..])]
#[case(&b"DDS \x7c"[..])]
#[case(&b"ab"[..])]
fn truncated_header(#[case] data: &[u8]) {
    let err = TextureDecoder::new().open(data).unwrap_err();
    assert_eq!(
        err.to_string(),
        format!(
            "file too short, expected at least 128 bytes but got {}",
            data.len()
        )
    );
    assert!(!matches!(err, TextureError::UnknownContainer(_)));
}

#[test]
fn one_byte_short() {
    let mut data = bgr_3x2();
    data.pop();
    let err = TextureDecoder::new().open(&data[..]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "file too short, expected 146 bytes for image 0 level 0 but got 145"
    );
    assert_eq!(err.kind(), ErrorKind::Layout);
}

#[rstest]
#[case(Dds::four_cc(4, 4, b"DXT4"), "unknown compression DXT4")]
#[case(
    Dds::masks(4, 4, 64, BGR_MASKS),
    "unknown 64 bits per pixel format with a RGBA mask {0xff0000, 0xff00, 0xff, 0x0}"
)]
#[case(Dds::dxgi(4, 4, 100, 3, 0, 1), "unsupported format DXGI_FORMAT_AYUV")]
#[case(Dds::dxgi(4, 4, 132, 3, 0, 1), "unknown DXGI format ID 132")]
fn format_errors(#[case] dds: Dds, #[case] message: &str) {
    let data = dds.write(&[0; 256]);
    let err = TextureDecoder::new().open(&data[..]).unwrap_err();
    assert_eq!(err.to_string(), message);
    assert_eq!(err.kind(), ErrorKind::Format);
}

#[rstest]
#[case(*b"DXT1", CompressedPixelFormat::Bc1RgbaUnorm)]
#[case(*b"DXT3", CompressedPixelFormat::Bc2RgbaUnorm)]
#[case(*b"DXT5", CompressedPixelFormat::Bc3RgbaUnorm)]
#[case(*b"ATI1", CompressedPixelFormat::Bc4RUnorm)]
#[case(*b"BC5S", CompressedPixelFormat::Bc5RgSnorm)]
fn four_cc_formats(#[case] tag: [u8; 4], #[case] expected: CompressedPixelFormat) {
    let data = Dds::four_cc(4, 4, &tag).write(&[0; 16]);
    let info = ImageInfo::from_bytes(&data).unwrap();
    assert_eq!(info.format, FormatDescriptor::Compressed(expected));
}

#[test]
fn dxt1_block_flip() {
    // 4x8: two blocks stacked vertically.
    let top = [1, 2, 3, 4, 0x00, 0x55, 0xaa, 0xff];
    let bottom = [5, 6, 7, 8, 0x01, 0x02, 0x03, 0x04];
    let data = Dds::four_cc(4, 8, b"DXT1").write(&[top, bottom].concat());
    let mut decoder = TextureDecoder::new();
    decoder.open(&data[..]).unwrap();
    let surface = decoder.surface(0, 0, 0).unwrap();
    assert_eq!(
        surface.data(),
        &[5, 6, 7, 8, 0x04, 0x03, 0x02, 0x01, 1, 2, 3, 4, 0xff, 0xaa, 0x55, 0x00]
    );
    assert!(decoder.diagnostics().is_empty());
}

#[test]
fn dxt3_partial_block_height_warns() {
    // 4x6 still takes two block rows.
    let data = Dds::four_cc(4, 6, b"DXT3").write(&[0; 32]);
    let mut decoder = TextureDecoder::new();
    let descriptor = decoder.open(&data[..]).unwrap();
    assert!(descriptor.flips.y);
    assert_eq!(decoder.diagnostics().len(), 1);
    assert_eq!(decoder.diagnostics()[0].severity, Severity::Warning);
    assert!(decoder.diagnostics()[0].message.ends_with("the data will be shifted"));

    let mut quiet = TextureDecoder::with_config(DecodeConfig::new().with_quiet(true));
    quiet.open(&data[..]).unwrap();
    assert!(quiet.diagnostics().is_empty());
}

#[test]
fn bc7_skips_y_flip() {
    let data = Dds::dxgi(4, 4, 98, 3, 0, 1).write(&[7; 16]);
    let mut decoder = TextureDecoder::new();
    let descriptor = decoder.open(&data[..]).unwrap();
    assert!(descriptor.flips.is_empty());
    assert_eq!(decoder.diagnostics().len(), 1);
    assert!(decoder.surface(0, 0, 0).unwrap().is_borrowed());
}

#[test]
fn mip_chain_layout() {
    // 4x2 R8, three levels: 8 + 2 + 1 bytes.
    let dds = Dds {
        levels: 3,
        ..Dds::masks(4, 2, 8, [0xff, 0, 0, 0])
    };
    let payload: Vec<u8> = (0..11).collect();
    let data = dds.write(&payload);
    let config = DecodeConfig::new().with_assume_orientation(Orientation::CANONICAL);
    let mut decoder = TextureDecoder::with_config(config);
    decoder.open(&data[..]).unwrap();
    for (level, size, bytes) in [
        (0, (4, 2), &payload[..8]),
        (1, (2, 1), &payload[8..10]),
        (2, (1, 1), &payload[10..]),
    ] {
        let surface = decoder.surface(0, 0, level).unwrap();
        assert_eq!((surface.width, surface.height), size);
        assert_eq!(surface.data(), bytes);
    }
    assert!(matches!(
        decoder.surface(0, 0, 3),
        Err(TextureError::IndexOutOfRange { what: "level", index: 3, count: 3 })
    ));
}

#[test]
fn too_many_levels() {
    let dds = Dds {
        levels: 4,
        ..Dds::masks(4, 2, 8, [0xff, 0, 0, 0])
    };
    let err = TextureDecoder::new().open(dds.write(&[0; 64])).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
}

#[test]
fn dxt10_cube_array() {
    // Two layers of six 1x1 RGBA8 faces.
    let payload: Vec<u8> = (0..48).collect();
    let data = Dds::dxgi(1, 1, 28, 3, 0x4, 2).write(&payload);
    let config = DecodeConfig::new().with_assume_orientation(Orientation::CANONICAL);
    let mut decoder = TextureDecoder::with_config(config);
    let descriptor = decoder.open(&data[..]).unwrap();
    assert_eq!(descriptor.flags, ImageFlags::ARRAY | ImageFlags::CUBE_MAP);
    assert_eq!(descriptor.layout.layers, 2);
    assert_eq!(descriptor.layout.faces, 6);
    assert_eq!(decoder.surface(1, 3, 0).unwrap().data(), &[36, 37, 38, 39]);
    assert!(decoder.surface(2, 0, 0).is_err());
}

#[test]
fn legacy_cube_map() {
    let dds = Dds {
        caps2: CUBEMAP_ALL_FACES,
        ..Dds::four_cc(4, 4, b"DXT5")
    };
    let info = ImageInfo::from_bytes(&dds.write(&[0; 96])).unwrap();
    assert_eq!(info.flags, ImageFlags::CUBE_MAP);
    assert_eq!(info.layout.image_count(), 6);
}

#[test]
fn incomplete_legacy_cube_map() {
    let dds = Dds {
        caps2: 0x200 | 0x400 | 0x800,
        ..Dds::four_cc(4, 4, b"DXT1")
    };
    let mut decoder = TextureDecoder::with_config(DecodeConfig::new().with_verbose(true));
    let descriptor = decoder.open(dds.write(&[0; 16])).unwrap();
    assert!(descriptor.cube_map_incomplete);
    assert_eq!(descriptor.flags, ImageFlags::ARRAY);
    assert_eq!(descriptor.layout.layers, 2);
    assert_eq!(
        messages(&decoder, "cube map has only 2 faces, importing it as a 2D array"),
        1
    );
}

#[test]
fn volume_flips_y_and_z() {
    // 1x2x2 R8: slice 0 rows [0, 1], slice 1 rows [2, 3].
    let dds = Dds {
        depth: 2,
        caps2: 0x20_0000,
        ..Dds::masks(1, 2, 8, [0xff, 0, 0, 0])
    };
    let mut decoder = TextureDecoder::new();
    let descriptor = decoder.open(dds.write(&[0, 1, 2, 3])).unwrap();
    assert_eq!(descriptor.layout.dimensions, 3);
    assert_eq!(descriptor.flips, FlipPlan { x: false, y: true, z: true });
    let surface = decoder.surface(0, 0, 0).unwrap();
    assert_eq!(surface.depth, 2);
    assert_eq!(surface.data(), &[3, 2, 1, 0]);
}

#[test]
fn dxt10_1d_texture() {
    let data = Dds::dxgi(4, 1, 61, 2, 0, 1).write(&[1, 2, 3, 4]);
    let mut decoder = TextureDecoder::new();
    let descriptor = decoder.open(&data[..]).unwrap();
    assert_eq!(descriptor.layout.dimensions, 1);
    // Only X is considered for 1D images, and "r" is canonical.
    assert!(descriptor.flips.is_empty());
    assert_eq!(decoder.surface(0, 0, 0).unwrap().data(), &[1, 2, 3, 4]);
}

#[test]
fn swizzle_override() {
    let data = Dds::masks(1, 1, 32, [0xff, 0xff00, 0xff0000, 0xff000000]).write(&[1, 2, 3, 4]);
    let config = DecodeConfig::new().with_swizzle_override("bgra".parse().unwrap());
    let mut decoder = TextureDecoder::with_config(config);
    decoder.open(&data[..]).unwrap();
    assert_eq!(decoder.surface(0, 0, 0).unwrap().data(), &[3, 2, 1, 4]);

    // A BGR source swapped back by the override needs no work at all.
    let data = Dds::masks(1, 1, 24, BGR_MASKS).write(&[1, 2, 3]);
    let config = DecodeConfig::new()
        .with_swizzle_override(Swizzle::BGRA)
        .with_assume_orientation(Orientation::CANONICAL);
    let mut decoder = TextureDecoder::with_config(config);
    decoder.open(&data[..]).unwrap();
    assert!(decoder.surface(0, 0, 0).unwrap().is_borrowed());
}

#[test]
fn swizzle_on_compressed_rejected() {
    let data = Dds::four_cc(4, 4, b"DXT1").write(&[0; 8]);
    let config = DecodeConfig::new().with_swizzle_override(Swizzle::BGRA);
    let err = TextureDecoder::with_config(config).open(&data[..]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unsupported swizzle bgra for compressed format Bc1RgbaUnorm"
    );
}

#[test]
fn limits() {
    let data = bgr_3x2();
    let config = DecodeConfig::new().with_limits(Limits {
        max_width: Some(2),
        ..Limits::default()
    });
    let err = TextureDecoder::with_config(config).open(&data[..]).unwrap_err();
    assert_eq!(err.to_string(), "limit exceeded: width 3 exceeds limit 2");
    assert_eq!(err.kind(), ErrorKind::Limit);

    let config = DecodeConfig::new().with_limits(Limits {
        max_surface_bytes: Some(8),
        ..Limits::default()
    });
    let mut decoder = TextureDecoder::with_config(config);
    decoder.open(&data[..]).unwrap();
    let err = decoder.surface(0, 0, 0).unwrap_err();
    assert_eq!(
        err.to_string(),
        "limit exceeded: surface copy of 18 bytes exceeds limit 8"
    );
}

#[test]
fn header_accessor() {
    let data = Dds::dxgi(4, 4, 71, 3, 0, 1).write(&[0; 8]);
    let mut decoder = TextureDecoder::new();
    decoder.open(&data[..]).unwrap();
    let ContainerHeader::Dds(header) = decoder.header().unwrap() else {
        panic!("expected a DDS header");
    };
    assert_eq!(header.dxt10.map(|h| h.dxgi_format), Some(71));
    assert_eq!(header.data_offset(), 148);
}

#[cfg(feature = "imgref")]
#[test]
fn typed_views() {
    let data = bgr_3x2();
    let mut decoder = TextureDecoder::new();
    decoder.open(&data[..]).unwrap();
    let surface = decoder.surface(0, 0, 0).unwrap();
    let img = surface.as_imgref::<rgb::RGB8>().unwrap();
    assert_eq!((img.width(), img.height()), (3, 2));
    assert_eq!(img.buf()[0], rgb::RGB8::new(255, 255, 255));
    assert!(matches!(
        surface.as_pixels::<rgb::RGBA8>(),
        Err(TextureError::PixelMismatch { .. })
    ));
}
