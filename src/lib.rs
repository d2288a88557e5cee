/*!
This crate converts Unicode text between its UTF-16 and UTF-8 encoded forms.

Conversion is strict in both directions: ill-formed input -- unpaired
surrogates in UTF-16; overlong forms, encoded surrogates, stray or missing
continuation bytes, and out-of-range values in UTF-8 -- fails the whole
conversion instead of being replaced with U+FFFD or silently dropped.  In a
file-format or wire-protocol setting, substitution would corrupt data with
no observable signal; failing closed is the point.

Each converter runs in two phases: it first measures the exact output size,
then allocates once and fills the buffer under the same validation rules.
The measure phase of each direction is also available on its own.

# Quick Reference

| Conversion | Function |
| ---: | --- |
| UTF-16 → UTF-8 | [`utf16_to_utf8`] |
| UTF-8 → UTF-16 | [`utf8_to_utf16`] |
| UTF-16 → `String` | [`utf16_to_string`] |
| `&str` → UTF-16 | [`string_to_utf16`] |
| UTF-8 size of UTF-16 text | [`utf8_length`] |
| UTF-16 size of UTF-8 text | [`utf16_length`] |

All failures surface as [`ConversionError`], which carries the failure
code of the step that failed.
*/

pub mod encoding;

mod convert;
mod util;

pub use self::convert::{
    string_to_utf16, utf16_length, utf16_to_string, utf16_to_utf8, utf8_length, utf8_to_utf16,
    ConversionError, ErrorCode,
};
pub use self::encoding::conv::{DecodeUtf16Error, DecodeUtf8Error};
