pub mod dictionary;
pub mod error;
pub mod lzw;

pub use dictionary::Dictionary;
pub use error::CompressorError;
pub use lzw::LZW;

/// Text to code-sequence transform and its inverse.
///
/// Text is a slice of UTF-16 code units. Implementations own no mutable
/// state between calls.
pub trait Compressor: Send + Sync {
    fn compress(&self, text: &[u16]) -> Result<Vec<u32>, CompressorError>;
    fn decompress(&self, codes: &[u32]) -> Result<Vec<u16>, CompressorError>;
}
