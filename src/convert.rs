/*!
Strict conversion between UTF-16 and UTF-8 text.

Both directions run the same two-phase protocol: a *measure* pass computes
the exact output size under strict validation, then a *fill* pass transcodes
into a buffer allocated to exactly that size.  The two passes must agree; a
disagreement is reported as an error rather than papered over.  Ill-formed
input always fails the conversion -- nothing is replaced with U+FFFD,
dropped, or truncated.
*/
use thiserror::Error;
use tracing::{debug, trace};

use crate::encoding::conv::{DecodeUtf16Error, DecodeUtf8Error};
use crate::encoding::TranscodeTo;
use crate::util::{TrapErrExt, Utf16EncodeExt, Utf8EncodeExt};

/**
Failure code reported by the conversion step that failed.

`InvalidUnit` and `Incomplete` come out of the measure pass, which sees any
ill-formed input first.  `LengthMismatch` means the fill pass disagreed with
the measure pass over a buffer that was sized once; that is not an input
problem, and retrying will not help.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ErrorCode {
    #[error("invalid unit at offset {offset}")]
    InvalidUnit { offset: usize },
    #[error("input ends with an incomplete sequence")]
    Incomplete,
    #[error("filled {actual} units where {expected} were measured")]
    LengthMismatch { expected: usize, actual: usize },
}

/**
The single error type reported by all conversion entry points.

The underlying failure code is available through [`code`](Self::code);
callers decide whether to log, retry, or abort.
*/
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
#[error("unicode conversion failed: {code}")]
pub struct ConversionError {
    code: ErrorCode,
}

impl ConversionError {
    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

impl From<DecodeUtf16Error> for ErrorCode {
    fn from(v: DecodeUtf16Error) -> Self {
        match v {
            DecodeUtf16Error::InvalidAt(at) => ErrorCode::InvalidUnit { offset: at },
            DecodeUtf16Error::Incomplete => ErrorCode::Incomplete,
        }
    }
}

impl From<DecodeUtf8Error> for ErrorCode {
    fn from(v: DecodeUtf8Error) -> Self {
        match v {
            DecodeUtf8Error::InvalidAt(at) => ErrorCode::InvalidUnit { offset: at },
            DecodeUtf8Error::Incomplete => ErrorCode::Incomplete,
        }
    }
}

fn fail(code: ErrorCode) -> ConversionError {
    debug!(%code, "conversion failed");
    ConversionError { code }
}

/**
Returns the exact number of UTF-8 bytes needed to represent `input`.

This is the measure pass of [`utf16_to_utf8`], exposed on its own.  It is
pure and idempotent: measuring the same input twice yields the same length.

# Failure

Fails if `input` contains an unpaired or reversed surrogate.
*/
pub fn utf8_length(input: &[u16]) -> Result<usize, ConversionError> {
    let mut len = 0;
    for cp in input.transcode() {
        let cp = cp.map_err(|err| fail(err.into()))?;
        len += cp.len_utf8();
    }
    Ok(len)
}

/**
Returns the exact number of UTF-16 code units needed to represent `input`.

This is the measure pass of [`utf8_to_utf16`], exposed on its own.  Code
points above U+FFFF count as two units, since they are stored as a
surrogate pair.

# Failure

Fails if `input` is not well-formed UTF-8: overlong forms, stray or missing
continuation bytes, encoded surrogates, and values above U+10FFFF are all
rejected.
*/
pub fn utf16_length(input: &[u8]) -> Result<usize, ConversionError> {
    let mut len = 0;
    for cp in input.transcode() {
        let cp = cp.map_err(|err| fail(err.into()))?;
        len += cp.len_utf16();
    }
    Ok(len)
}

/**
Converts UTF-16 text to UTF-8.

An empty input returns an empty buffer without touching the codec.
Otherwise the input is measured, a buffer of exactly the measured size is
allocated, and the input is transcoded into it under the same strict
validation.  The output is freshly allocated and exclusively owned by the
caller; `input` is never mutated.

# Failure

Fails with [`ConversionError`] if `input` contains an unpaired surrogate,
or if the fill pass produces a different number of bytes than was measured.
*/
pub fn utf16_to_utf8(input: &[u16]) -> Result<Vec<u8>, ConversionError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    trace!(units = input.len(), "converting utf-16 to utf-8");

    let expected = utf8_length(input)?;

    let mut out = vec![0u8; expected];
    let mut err = Ok(());
    let mut filled = 0;
    for unit in input.transcode().trap_err(&mut err).encode_utf8() {
        if filled < out.len() {
            out[filled] = unit;
        }
        filled += 1;
    }
    err.map_err(|err| fail(err.into()))?;
    if filled != expected {
        return Err(fail(ErrorCode::LengthMismatch {
            expected,
            actual: filled,
        }));
    }

    trace!(bytes = out.len(), "utf-16 to utf-8 conversion done");
    Ok(out)
}

/**
Converts UTF-8 text to UTF-16.

An empty input returns an empty buffer without touching the codec.
Otherwise the input is measured, a buffer of exactly the measured code-unit
count is allocated, and the input is decoded into it under the same strict
validation.  Code points above U+FFFF are written as a high surrogate
followed by a low surrogate.  The output is freshly allocated and
exclusively owned by the caller; `input` is never mutated.

# Failure

Fails with [`ConversionError`] if `input` is not well-formed UTF-8, or if
the fill pass produces a different number of code units than was measured.
*/
pub fn utf8_to_utf16(input: &[u8]) -> Result<Vec<u16>, ConversionError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    trace!(bytes = input.len(), "converting utf-8 to utf-16");

    let expected = utf16_length(input)?;

    let mut out = vec![0u16; expected];
    let mut err = Ok(());
    let mut filled = 0;
    for unit in input.transcode().trap_err(&mut err).encode_utf16() {
        if filled < out.len() {
            out[filled] = unit;
        }
        filled += 1;
    }
    err.map_err(|err| fail(err.into()))?;
    if filled != expected {
        return Err(fail(ErrorCode::LengthMismatch {
            expected,
            actual: filled,
        }));
    }

    trace!(units = out.len(), "utf-8 to utf-16 conversion done");
    Ok(out)
}

/**
Converts UTF-16 text to an owned Rust string.

Equivalent to [`utf16_to_utf8`] followed by a no-cost `String` wrap: the
fill pass only ever produces well-formed UTF-8.
*/
pub fn utf16_to_string(input: &[u16]) -> Result<String, ConversionError> {
    let bytes = utf16_to_utf8(input)?;

    // The fill pass only emits units produced by encoding valid scalar
    // values, so the buffer is well-formed UTF-8.
    Ok(unsafe { String::from_utf8_unchecked(bytes) })
}

/**
Converts a Rust string to UTF-16.

This cannot fail: `&str` is well-formed UTF-8 by construction, so every
code point has an exact UTF-16 representation.
*/
pub fn string_to_utf16(input: &str) -> Vec<u16> {
    input.chars().encode_utf16().collect()
}
