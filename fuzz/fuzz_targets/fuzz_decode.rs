#![no_main]
use libfuzzer_sys::fuzz_target;
use zentexture::{Container, DecodeConfig, ImageInfo, Limits, TextureDecoder};

fn decode_all(data: &[u8], config: DecodeConfig) {
    let mut decoder = TextureDecoder::with_config(config);
    let Ok(descriptor) = decoder.open(data) else {
        return;
    };
    let layout = descriptor.layout;
    for layer in 0..layout.layer_count() {
        for face in 0..layout.faces {
            for level in 0..layout.levels {
                let _ = decoder.surface(layer, face, level);
            }
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let limits = Limits {
        max_width: Some(1 << 14),
        max_height: Some(1 << 14),
        max_depth: Some(1 << 10),
        max_layers: Some(1 << 10),
        max_surface_bytes: Some(1 << 26),
    };

    // Auto-detect: must never panic
    let _ = ImageInfo::from_bytes(data);
    decode_all(data, DecodeConfig::new().with_limits(limits.clone()));

    // Force each container: must never panic
    for container in [Container::Dds, Container::Ktx2] {
        decode_all(
            data,
            DecodeConfig::new()
                .with_container(container)
                .with_verbose(true)
                .with_limits(limits.clone()),
        );
    }
});
