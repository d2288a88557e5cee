/*!
Encoding conversion support.
*/
use thiserror::Error;

pub mod utf16;
pub mod utf8;

pub use self::utf16::Utf16ToUniIter;
pub use self::utf8::Utf8ToUniIter;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeUtf16Error {
    #[error("invalid unit at offset {0}")]
    InvalidAt(usize),
    #[error("incomplete surrogate pair")]
    Incomplete,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum DecodeUtf8Error {
    #[error("invalid unit at offset {0}")]
    InvalidAt(usize),
    #[error("incomplete multi-byte sequence")]
    Incomplete,
}
