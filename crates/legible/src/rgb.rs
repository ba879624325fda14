use crate::core::{parse, to_contrast_ratio, to_luminance};
use crate::error::ColorFormatError;
use crate::Float;

/// A 24-bit RGB color with gamma-corrected sRGB coordinates.
///
/// Every color has exactly three coordinates in `0..=255`, in red, green,
/// blue order. Colors parse from hashed hexadecimal notation, in shorthand
/// (`#fff`) or full (`#ffffff`) form, and display in the full form.
///
/// ```
/// # use legible::Rgb;
/// # use legible::error::ColorFormatError;
/// let gray: Rgb = "#767676".parse()?;
/// assert_eq!(gray.as_ref(), &[0x76_u8, 0x76, 0x76]);
/// assert_eq!(gray.to_string(), "#767676");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new RGB color from its coordinates.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Access this color's coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Determine the relative luminance of this color.
    ///
    /// This method computes [WCAG 2.1's relative
    /// luminance](https://www.w3.org/TR/WCAG21/#dfn-relative-luminance): it
    /// normalizes the coordinates to unit range, linearizes them with the
    /// sRGB EOTF, and weights them by the human eye's sensitivity to each
    /// primary. The result ranges from 0 for black to 1 for white.
    ///
    /// ```
    /// # use legible::Rgb;
    /// assert_eq!(Rgb::new(0, 0, 0).luminance(), 0.0);
    /// ```
    pub fn luminance(&self) -> Float {
        let [r, g, b] = self.0;
        to_luminance(&[
            r as Float / 255.0,
            g as Float / 255.0,
            b as Float / 255.0,
        ])
    }

    /// Determine the contrast ratio between this color and the other color.
    ///
    /// This method computes WCAG 2.1's contrast ratio between the two colors'
    /// relative luminances. The ratio ranges from 1, for two colors with the
    /// same luminance, to 21, for black against white. It is symmetric, so
    /// which color is text and which is background does not matter.
    ///
    /// Callers compare the result against the applicable WCAG threshold
    /// themselves, usually 4.5 for body text and 3 for large text.
    ///
    /// ```
    /// # use legible::Rgb;
    /// let black = Rgb::new(0, 0, 0);
    /// let white = Rgb::new(255, 255, 255);
    /// let ratio = black.contrast_against(&white);
    /// assert!((ratio - 21.0).abs() < 1e-9);
    /// assert_eq!(white.contrast_against(&white), 1.0);
    /// ```
    pub fn contrast_against(&self, other: &Self) -> Float {
        to_contrast_ratio(self.luminance(), other.luminance())
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Rgb::new(value[0], value[1], value[2])
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    /// Access the coordinate with the given index.
    ///
    /// # Panics
    ///
    /// This method panics if `2 < index`.
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl std::str::FromStr for Rgb {
    type Err = ColorFormatError;

    /// Parse the string as hashed hexadecimal notation.
    ///
    /// This method trims leading and trailing white space before parsing. It
    /// accepts shorthand notation and expands each of its digits, so `#fff`
    /// parses as `#ffffff`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        f.write_fmt(format_args!("#{:02x}{:02x}{:02x}", r, g, b))
    }
}

// ====================================================================================================================
