use log::debug;

use crate::{
    chunks::{idat, iend, ihdr, PngStream, FRAMING_LENGTH, SIGNATURE},
    EncodeError, Format,
};

/// PNG caps chunk lengths at 2^31 - 1.
const MAX_CHUNK_LENGTH: u64 = i32::MAX as u64;

/// Byte accounting for one image, derived from the per-row emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Layout {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) format: Format,
    /// Filter byte plus pixel bytes of one row; also the stored block LEN.
    pub(crate) scanline_length: u16,
    pub(crate) idat_length: u32,
}
impl Layout {
    pub(crate) fn new(width: u32, height: u32, format: Format) -> Result<Self, EncodeError> {
        let too_large = EncodeError::ImageTooLarge {
            width,
            height,
            format,
        };
        let scanline_length = 1 + format.bytes_per_pixel() as u64 * width as u64;
        let scanline_length = u16::try_from(scanline_length).map_err(|_| too_large.clone())?;
        let idat_length = idat::ZLIB_HEADER.len() as u64
            + height as u64 * (idat::BLOCK_HEADER_LENGTH + scanline_length as u64)
            + idat::ADLER_LENGTH;
        if idat_length > MAX_CHUNK_LENGTH {
            return Err(too_large);
        }
        Ok(Self {
            width,
            height,
            format,
            scanline_length,
            idat_length: idat_length as u32,
        })
    }

    pub(crate) fn file_length(&self) -> usize {
        SIGNATURE.len()
            + (FRAMING_LENGTH + ihdr::LENGTH as usize)
            + (FRAMING_LENGTH + self.idat_length as usize)
            + FRAMING_LENGTH
    }
}

/// Encodes packed `0xAARRGGBB` pixels, row-major, as an uncompressed PNG.
///
/// The only failure besides oversized dimensions is a pixel count that does
/// not match `width * height`. Nothing is written in either case.
pub fn encode(
    pixels: &[u32],
    width: u32,
    height: u32,
    format: Format,
) -> Result<Vec<u8>, EncodeError> {
    let expected = width as u64 * height as u64;
    if pixels.len() as u64 != expected {
        debug!(
            "rejecting {width}x{height} image: {} pixels supplied",
            pixels.len()
        );
        return Err(EncodeError::InvalidDataSize {
            expected,
            actual: pixels.len(),
        });
    }
    let layout = Layout::new(width, height, format).map_err(|e| {
        debug!("rejecting {width}x{height} {format} image: too large");
        e
    })?;

    let mut stream = PngStream::new(layout.file_length());
    ihdr::append(&mut stream, width, height, format);
    idat::append(&mut stream, &layout, pixels);
    iend::append(&mut stream);
    let bytes = stream.finish();
    debug!(
        "encoded {width}x{height} {format} image into {} bytes",
        bytes.len()
    );
    Ok(bytes)
}

/// 32-bit ARGB pixels to a 24-bit RGB PNG.
pub fn encode_rgb(pixels: &[u32], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    encode(pixels, width, height, Format::Rgb)
}

/// 32-bit ARGB pixels to a 32-bit RGBA PNG.
pub fn encode_rgba(pixels: &[u32], width: u32, height: u32) -> Result<Vec<u8>, EncodeError> {
    encode(pixels, width, height, Format::Rgba)
}
