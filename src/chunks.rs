use log::trace;

use crate::crc::{self, Crc32};

pub(crate) const SIGNATURE: &[u8; 8] = b"\x89PNG\x0d\x0a\x1a\x0a";

/// Bytes a chunk adds around its payload: length, tag and CRC.
pub(crate) const FRAMING_LENGTH: usize = 12;

/// Output buffer for one PNG file.
///
/// Every byte pushed between [`PngStream::start_chunk`] and
/// [`PngStream::end_chunk`] is folded into the chunk CRC.
pub(crate) struct PngStream {
    bytes: Vec<u8>,
    crc: Crc32,
}

impl PngStream {
    pub(crate) fn new(capacity: usize) -> Self {
        let mut bytes = Vec::with_capacity(capacity);
        bytes.extend(SIGNATURE);
        Self {
            bytes,
            crc: Crc32::new(),
        }
    }

    pub(crate) fn start_chunk(&mut self, header: &[u8; 4], length: u32) {
        trace!(
            "{} chunk, {length} bytes",
            String::from_utf8_lossy(header)
        );
        self.bytes.extend(length.to_be_bytes());
        self.crc.reset(crc::SEED);
        self.extend(header);
    }

    pub(crate) fn end_chunk(&mut self) {
        let crc = self.crc.finalize();
        trace!("chunk crc {crc:#010x}");
        self.bytes.extend(crc.to_be_bytes());
    }

    #[inline(always)]
    pub(crate) fn push(&mut self, byte: u8) {
        self.bytes.push(byte);
        self.crc.update(byte);
    }

    pub(crate) fn extend(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.push(b);
        }
    }

    pub(crate) fn push_be_u32(&mut self, value: u32) {
        self.extend(&value.to_be_bytes());
    }

    pub(crate) fn push_le_u16(&mut self, value: u16) {
        self.extend(&value.to_le_bytes());
    }

    pub(crate) fn finish(self) -> Vec<u8> {
        self.bytes
    }
}

pub(crate) mod ihdr {
    use super::PngStream;
    use crate::Format;

    pub(crate) const HEADER: &[u8; 4] = b"IHDR";
    pub(crate) const LENGTH: u32 = 13;

    pub(crate) fn append(stream: &mut PngStream, width: u32, height: u32, format: Format) {
        stream.start_chunk(HEADER, LENGTH);
        stream.push_be_u32(width);
        stream.push_be_u32(height);
        stream.extend(&[
            8, // bit depth
            format.color_type(),
            0, // compression method
            0, // filter method
            0, // interlace method
        ]);
        stream.end_chunk();
    }
}

pub(crate) mod idat {
    use super::PngStream;
    use crate::{adler::Adler32, png::Layout, Pixel};

    pub(crate) const HEADER: &[u8; 4] = b"IDAT";

    /// zlib CMF/FLG: deflate, 32K window, no preset dictionary.
    pub(crate) const ZLIB_HEADER: [u8; 2] = [0x78, 0x01];
    /// BFINAL flag byte, then LEN and NLEN.
    pub(crate) const BLOCK_HEADER_LENGTH: u64 = 5;
    pub(crate) const ADLER_LENGTH: u64 = 4;

    /// No-filter scanlines, one stored deflate block per row.
    pub(crate) fn append(stream: &mut PngStream, layout: &Layout, pixels: &[u32]) {
        let width = layout.width as usize;
        let scanline_length = layout.scanline_length;
        let mut adler = Adler32::new();

        stream.start_chunk(HEADER, layout.idat_length);
        stream.extend(&ZLIB_HEADER);
        for y in 0..layout.height as usize {
            let is_last = y + 1 == layout.height as usize;
            stream.push(is_last as u8);
            stream.push_le_u16(scanline_length);
            stream.push_le_u16(!scanline_length);

            let mut write = |b: u8| {
                stream.push(b);
                adler.update(b);
            };
            write(0); // filter type: none
            for &color in &pixels[y * width..(y + 1) * width] {
                layout.format.write_samples(Pixel::from(color), &mut write);
            }
        }
        stream.push_be_u32(adler.result());
        stream.end_chunk();
    }
}

pub(crate) mod iend {
    use super::PngStream;

    pub(crate) const HEADER: &[u8; 4] = b"IEND";

    pub(crate) fn append(stream: &mut PngStream) {
        stream.start_chunk(HEADER, 0);
        stream.end_chunk();
    }
}
