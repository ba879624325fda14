//! Utility module with legible's errors.

/// An erroneous color format.
///
/// Parsing rejects malformed colors eagerly, so an invalid string surfaces as
/// an error at the parsing boundary instead of propagating through the
/// luminance math as not-a-number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`.
    /// Named colors and functional notation, e.g., `rgb(0 0 0)`, are not
    /// recognized either.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal number as coordinate.
    /// For example, `#efg` has a malformed third coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => f.write_str("color format should start with `#` but does not"),
            UnexpectedCharacters => f.write_str(
                "color format should be `#` followed by 3 or 6 hexadecimal digits but is not",
            ),
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}
