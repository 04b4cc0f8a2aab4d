//! CRC-32 as used by PNG chunk trailers (reflected polynomial `0xedb88320`).

use std::marker::PhantomData;

/// Register value a chunk checksum starts from.
pub const SEED: u32 = 0xffffffff;

/// A lookup strategy for folding one byte into a CRC-32 register.
///
/// Every implementation must produce the same register values; they only
/// differ in table size and lookups per byte.
pub trait CrcTable {
    fn fold(register: u32, byte: u8) -> u32;
}

/// Half-byte table: 16 entries, two lookups per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct NibbleTable;

impl NibbleTable {
    const TABLE: [u32; 16] = [
        0x00000000, 0x1db71064, 0x3b6e20c8, 0x26d930ac, 0x76dc4190, 0x6b6b51f4, 0x4db26158,
        0x5005713c, 0xedb88320, 0xf00f9344, 0xd6d6a3e8, 0xcb61b38c, 0x9b64c2b0, 0x86d3d2d4,
        0xa00ae278, 0xbdbdf21c,
    ];
}

impl CrcTable for NibbleTable {
    #[inline(always)]
    fn fold(register: u32, byte: u8) -> u32 {
        let low = (register ^ byte as u32) & 0xf;
        let register = Self::TABLE[low as usize] ^ (register >> 4);
        let high = (register ^ (byte >> 4) as u32) & 0xf;
        Self::TABLE[high as usize] ^ (register >> 4)
    }
}

/// Classic full-byte table: 256 entries, one lookup per byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteTable;

impl ByteTable {
    const TABLE: [u32; 256] = {
        let mut table = [0; 256];
        let mut n = 0;
        while n < 256 {
            let mut c = n as u32;
            let mut i = 0;
            while i < 8 {
                if c & 1 != 0 {
                    c = 0xedb88320 ^ (c >> 1);
                } else {
                    c >>= 1;
                }
                i += 1;
            }
            table[n] = c;
            n += 1;
        }
        table
    };
}

impl CrcTable for ByteTable {
    #[inline(always)]
    fn fold(register: u32, byte: u8) -> u32 {
        let index = (register ^ byte as u32) & 0xff;
        Self::TABLE[index as usize] ^ (register >> 8)
    }
}

/// Running CRC-32 register.
///
/// The register is not finalized in place: call [`Crc32::finalize`] to get the
/// value written into a chunk trailer, and [`Crc32::reset`] before the next chunk.
#[derive(Debug, Clone, Copy)]
pub struct Crc32<S = NibbleTable> {
    register: u32,
    _strategy: PhantomData<S>,
}

impl<S: CrcTable> Crc32<S> {
    pub fn new() -> Self {
        Self {
            register: SEED,
            _strategy: PhantomData,
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.register = seed;
    }

    #[inline(always)]
    pub fn update(&mut self, byte: u8) {
        self.register = S::fold(self.register, byte);
    }

    pub fn update_slice(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.update(b);
        }
    }

    /// Raw register, before the final inversion.
    pub fn value(&self) -> u32 {
        self.register
    }

    pub fn finalize(&self) -> u32 {
        self.register ^ 0xffffffff
    }
}

impl<S: CrcTable> Default for Crc32<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// One-shot CRC-32 of `data`.
pub fn checksum(data: &[u8]) -> u32 {
    let mut crc = Crc32::<NibbleTable>::new();
    crc.update_slice(data);
    crc.finalize()
}
