//! Adler-32, the zlib trailer checksum over uncompressed data.

const MODULUS: u32 = 65521;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adler32 {
    value1: u32,
    value2: u32,
}

impl Adler32 {
    pub fn new() -> Self {
        Self {
            value1: 1,
            value2: 0,
        }
    }

    #[inline(always)]
    pub fn update(&mut self, byte: u8) {
        self.value1 = (self.value1 + byte as u32) % MODULUS;
        self.value2 = (self.value2 + self.value1) % MODULUS;
    }

    pub fn update_slice(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.update(b);
        }
    }

    pub fn result(&self) -> u32 {
        (self.value2 << 16) | self.value1
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}

pub fn checksum(data: &[u8]) -> u32 {
    let mut adler = Adler32::new();
    adler.update_slice(data);
    adler.result()
}
