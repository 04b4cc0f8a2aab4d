use crate::Format;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("invalid data size: expected {expected} pixels, got {actual}")]
    InvalidDataSize { expected: u64, actual: usize },
    #[error("a {width}x{height} {format} image does not fit in a single stored IDAT chunk")]
    ImageTooLarge {
        width: u32,
        height: u32,
        format: Format,
    },
}
