use alloc::borrow::Cow;
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::diagnostic::{Diagnostic, DiagnosticLog};
use crate::error::TextureError;
use crate::flip::flip_surface;
use crate::header::{Container, ContainerHeader, ParsedContainer};
use crate::layout::{ImageLayout, SurfaceRange};
use crate::limits::Limits;
use crate::orientation::{FlipPlan, Orientation, plan_flips};
use crate::pixel::FormatDescriptor;
use crate::swizzle::{self, Swizzle, SwizzleAction};
use crate::{dds, ktx};

bitflags::bitflags! {
    /// Image type flags.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ImageFlags: u8 {
        /// Layers are exposed as an extra dimension.
        const ARRAY = 0x1;
        /// Six faces per layer, ordered +X, -X, +Y, -Y, +Z, -Z.
        const CUBE_MAP = 0x2;
    }
}

impl ImageFlags {
    pub(crate) fn for_layout(layout: &ImageLayout) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::ARRAY, layout.is_array());
        flags.set(Self::CUBE_MAP, layout.is_cube_map());
        flags
    }
}

// ── DecodeConfig ─────────────────────────────────────────────────────

/// Decoding options.
#[derive(Clone, Debug)]
pub struct DecodeConfig {
    container: Option<Container>,
    assume_orientation: Option<Orientation>,
    swizzle_override: Option<Swizzle>,
    quiet: bool,
    verbose: bool,
    limits: Option<Limits>,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeConfig {
    /// Detect the container, trust file metadata, warn but don't chat.
    pub fn new() -> Self {
        Self {
            container: None,
            assume_orientation: None,
            swizzle_override: None,
            quiet: false,
            verbose: false,
            limits: None,
        }
    }

    /// Parse every file as `container` instead of detecting it from the
    /// signature.
    pub fn with_container(mut self, container: Container) -> Self {
        self.container = Some(container);
        self
    }

    /// Ignore orientation metadata and assume the data is stored this way.
    /// Passing [`Orientation::CANONICAL`] disables all flipping.
    pub fn with_assume_orientation(mut self, orientation: Orientation) -> Self {
        self.assume_orientation = Some(orientation);
        self
    }

    /// Replace the swizzle from file metadata. Format-implied swizzles still
    /// apply first.
    pub fn with_swizzle_override(mut self, swizzle: Swizzle) -> Self {
        self.swizzle_override = Some(swizzle);
        self
    }

    /// Suppress warnings.
    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Report conversions and other informational messages.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = Some(limits);
        self
    }
}

// ── ImageDescriptor ──────────────────────────────────────────────────

/// Description of an opened image and the decisions taken for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub container: Container,
    pub layout: ImageLayout,
    pub format: FormatDescriptor,
    pub flags: ImageFlags,
    /// Orientation the data was assumed to be stored in.
    pub orientation: Orientation,
    /// Flips applied to every surface.
    pub flips: FlipPlan,
    /// Channel remap applied to every surface, after composing the
    /// format-implied swizzle with the requested one.
    pub swizzle: Swizzle,
    /// Set for cube maps with missing faces, which are exposed as a 2D array.
    pub cube_map_incomplete: bool,
}

impl ImageDescriptor {
    /// Number of logical images. Every layer of a 3D array is its own
    /// image; anything else is one image whose layers and faces form an
    /// extra dimension.
    pub fn logical_image_count(&self) -> u32 {
        if self.layout.dimensions == 3 && self.layout.is_array() {
            self.layout.layers
        } else {
            1
        }
    }
}

// ── SurfaceView ──────────────────────────────────────────────────────

/// One (layer, face, level) surface.
#[derive(Clone, Copy, Debug)]
pub struct SurfaceView<'s> {
    data: &'s [u8],
    borrowed: bool,
    pub format: FormatDescriptor,
    pub width: u32,
    pub height: u32,
    pub depth: u32,
}

impl<'s> SurfaceView<'s> {
    /// Surface bytes: pixels, or blocks in row-major order.
    pub fn data(&self) -> &'s [u8] {
        self.data
    }

    /// Whether the bytes come straight from the source buffer, with no
    /// flip or swizzle applied.
    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    /// Reinterpret pixel data as typed pixel slice.
    ///
    /// Returns [`TextureError::PixelMismatch`] if the format doesn't match `P`.
    #[cfg(feature = "rgb")]
    pub fn as_pixels<P: crate::DecodePixel>(&self) -> Result<&'s [P], TextureError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        match self.format {
            FormatDescriptor::Uncompressed(format) if P::accepts(format) => {
                Ok(self.data.as_pixels())
            }
            actual => Err(TextureError::PixelMismatch { actual }),
        }
    }

    /// Zero-copy view of a single-slice surface as an [`imgref::ImgRef`].
    ///
    /// Returns [`TextureError::PixelMismatch`] if the format doesn't match `P`.
    #[cfg(feature = "imgref")]
    pub fn as_imgref<P: crate::DecodePixel>(&self) -> Result<imgref::ImgRef<'s, P>, TextureError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let pixels: &[P] = self.as_pixels()?;
        let plane = self.width as usize * self.height as usize;
        Ok(imgref::ImgRef::new(
            &pixels[..plane.min(pixels.len())],
            self.width as usize,
            self.height as usize,
        ))
    }

    /// Copy a single-slice surface into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec<P: crate::DecodePixel>(&self) -> Result<imgref::ImgVec<P>, TextureError>
    where
        [u8]: rgb::AsPixels<P>,
    {
        let img = self.as_imgref::<P>()?;
        Ok(imgref::ImgVec::new(
            img.buf().to_vec(),
            img.width(),
            img.height(),
        ))
    }
}

// ── TextureDecoder ───────────────────────────────────────────────────

struct Session<'a> {
    source: Cow<'a, [u8]>,
    header: ContainerHeader,
    descriptor: ImageDescriptor,
    swizzle: SwizzleAction,
    ranges: Vec<SurfaceRange>,
    /// Transformed surfaces, indexed like `ranges`.
    cache: Vec<Option<Vec<u8>>>,
}

impl<'a> Session<'a> {
    fn open(
        source: Cow<'a, [u8]>,
        config: &DecodeConfig,
        log: &mut DiagnosticLog,
    ) -> Result<Self, TextureError> {
        let container = match config.container {
            Some(container) => container,
            None => Container::sniff(&source)?,
        };
        let parsed = match container {
            Container::Dds => dds::parse(&source, log)?,
            Container::Ktx2 => ktx::parse(&source, log)?,
        };
        let ParsedContainer {
            header,
            layout,
            format,
            metadata_swizzle,
            orientation,
            cube_map_incomplete,
            ranges,
        } = parsed;

        if let Some(limits) = &config.limits {
            limits.check(&layout)?;
        }

        let orientation = config.assume_orientation.unwrap_or(orientation);
        let flips = plan_flips(
            orientation,
            layout.dimensions,
            format.format,
            layout.height,
            log,
        );

        let requested = config.swizzle_override.unwrap_or(metadata_swizzle);
        let combined = format.swizzle.then(requested);
        let swizzle = swizzle::resolve(combined, format.format)?;

        let flags = ImageFlags::for_layout(&layout);

        Ok(Self {
            cache: vec![None; ranges.len()],
            source,
            header,
            descriptor: ImageDescriptor {
                container,
                layout,
                format: format.format,
                flags,
                orientation,
                flips,
                swizzle: combined,
                cube_map_incomplete,
            },
            swizzle,
            ranges,
        })
    }

    fn needs_transform(&self) -> bool {
        !self.descriptor.flips.is_empty() || self.swizzle != SwizzleAction::None
    }
}

/// DDS and KTX2 decoder.
///
/// Holds at most one opened file. Opening parses and validates everything
/// up front; surfaces are produced on request, and any flipped or swizzled
/// surface is computed once and cached until the file is closed.
///
/// ```
/// use zentexture::TextureDecoder;
///
/// let data: &[u8] = &[]; // DDS or KTX2 bytes
/// let mut decoder = TextureDecoder::new();
/// if decoder.open(data).is_ok() {
///     let level0 = decoder.surface(0, 0, 0)?;
///     println!("{}x{} {}", level0.width, level0.height, level0.format);
/// }
/// # Ok::<(), zentexture::TextureError>(())
/// ```
pub struct TextureDecoder<'a> {
    config: DecodeConfig,
    log: DiagnosticLog,
    session: Option<Session<'a>>,
}

impl Default for TextureDecoder<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> TextureDecoder<'a> {
    pub fn new() -> Self {
        Self::with_config(DecodeConfig::new())
    }

    pub fn with_config(config: DecodeConfig) -> Self {
        Self {
            log: DiagnosticLog::new(config.quiet, config.verbose),
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &DecodeConfig {
        &self.config
    }

    /// Open a file held in `data`, borrowed or owned.
    ///
    /// Any previously opened file is closed first, also when opening fails.
    pub fn open(
        &mut self,
        data: impl Into<Cow<'a, [u8]>>,
    ) -> Result<&ImageDescriptor, TextureError> {
        self.close();
        self.log.clear();
        let session = Session::open(data.into(), &self.config, &mut self.log)?;
        Ok(&self.session.insert(session).descriptor)
    }

    /// Drop the opened file and all cached surfaces.
    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn is_opened(&self) -> bool {
        self.session.is_some()
    }

    pub fn descriptor(&self) -> Result<&ImageDescriptor, TextureError> {
        Ok(&self.session()?.descriptor)
    }

    /// Raw header of the opened file.
    pub fn header(&self) -> Result<&ContainerHeader, TextureError> {
        Ok(&self.session()?.header)
    }

    /// Warnings and verbose messages since the last `open` or
    /// [`clear_diagnostics`](Self::clear_diagnostics).
    pub fn diagnostics(&self) -> &[Diagnostic] {
        self.log.entries()
    }

    pub fn clear_diagnostics(&mut self) {
        self.log.clear();
    }

    /// Get one surface, flipped to X right, Y up, Z backward and with
    /// channels in RGB order.
    pub fn surface(
        &mut self,
        layer: u32,
        face: u32,
        level: u32,
    ) -> Result<SurfaceView<'_>, TextureError> {
        let session = self.session.as_mut().ok_or(TextureError::NotOpened)?;
        let layout = session.descriptor.layout;
        for (what, index, count) in [
            ("layer", layer, layout.layer_count()),
            ("face", face, layout.faces),
            ("level", level, layout.levels),
        ] {
            if index >= count {
                return Err(TextureError::IndexOutOfRange { what, index, count });
            }
        }

        let index = layout.surface_index(layer, face, level);
        let range = session.ranges[index];
        let [width, height, depth] = layout.level_size(level);
        let format = session.descriptor.format;

        if session.needs_transform() && session.cache[index].is_none() {
            if let Some(limits) = &self.config.limits {
                limits.check_surface(range)?;
            }
            let mut bytes = range.slice(&session.source).to_vec();
            flip_surface(
                &mut bytes,
                format,
                [width, height, depth],
                session.descriptor.flips,
            );
            session.swizzle.apply_in_place(&mut bytes, &mut self.log);
            session.cache[index] = Some(bytes);
        }

        let (data, borrowed) = match &session.cache[index] {
            Some(bytes) => (bytes.as_slice(), false),
            None => (range.slice(&session.source), true),
        };
        Ok(SurfaceView {
            data,
            borrowed,
            format,
            width,
            height,
            depth,
        })
    }

    fn session(&self) -> Result<&Session<'a>, TextureError> {
        self.session.as_ref().ok_or(TextureError::NotOpened)
    }
}
