pub mod adler;
mod chunks;
pub mod crc;
mod error;
mod pixel;
mod png;

pub use error::EncodeError;
pub use pixel::{Format, Pixel};
pub use png::{encode, encode_rgb, encode_rgba};
