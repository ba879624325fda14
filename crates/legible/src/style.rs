//! Style sources and the text contrast check.

use crate::error::ColorFormatError;
use crate::rgb::Rgb;
use crate::Float;

/// A trait to abstract over sources of resolved style properties.
///
/// Accessibility test suites pull colors out of all kinds of places, DOM
/// snapshots, theme tables, fixture records. This trait keeps things simple
/// by only requiring two accessors, both of which must return colors already
/// resolved to hashed hexadecimal notation. Resolving named colors,
/// functional notation, CSS variables, or inherited values is the caller's
/// job.
pub trait TextStyle {
    /// The text color as a hashed hexadecimal string.
    fn color(&self) -> &str;

    /// The background color as a hashed hexadecimal string.
    fn background_color(&self) -> &str;
}

/// A plain record of resolved style properties.
///
/// This is the simplest possible [`TextStyle`] implementation, for callers
/// that carry colors around as strings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Style {
    /// The text color.
    pub color: String,
    /// The background color.
    pub background_color: String,
}

impl TextStyle for Style {
    fn color(&self) -> &str {
        &self.color
    }

    fn background_color(&self) -> &str {
        &self.background_color
    }
}

/// Determine the contrast ratio between an element's text and its background.
///
/// This function reads the text color from `text` and the background color
/// from `background`, or from `text` itself when `background` is `None`. The
/// self-default models checks where one element carries both properties,
/// e.g., a color swatch that is also the text element. It then computes the
/// WCAG 2.1 contrast ratio between the two colors, a number in `1.0..=21.0`.
///
/// Callers compare the result against the threshold applicable to their text
/// size and weight, usually 4.5 for body text and 3 for large text.
///
/// ```
/// # use legible::error::ColorFormatError;
/// # use legible::{text_contrast, Style};
/// let label = Style {
///     color: "#000000".to_string(),
///     background_color: "#ffffff".to_string(),
/// };
/// let ratio = text_contrast(&label, None)?;
/// assert!(ratio > 4.5);
/// # Ok::<(), ColorFormatError>(())
/// ```
///
/// # Errors
///
/// This function fails eagerly with a [`ColorFormatError`] if either color is
/// not valid hashed hexadecimal notation.
pub fn text_contrast(
    text: &dyn TextStyle,
    background: Option<&dyn TextStyle>,
) -> Result<Float, ColorFormatError> {
    let foreground: Rgb = text.color().parse()?;
    let background: Rgb = background.unwrap_or(text).background_color().parse()?;

    Ok(foreground.contrast_against(&background))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{text_contrast, Style, TextStyle};
    use crate::assert_close_enough;
    use crate::error::ColorFormatError;

    fn style(color: &str, background_color: &str) -> Style {
        Style {
            color: color.to_string(),
            background_color: background_color.to_string(),
        }
    }

    #[test]
    fn test_text_contrast() -> Result<(), ColorFormatError> {
        assert_close_enough!(text_contrast(&style("#000000", "#ffffff"), None)?, 21.0);
        assert_close_enough!(text_contrast(&style("#ffffff", "#ffffff"), None)?, 1.0);
        assert_close_enough!(text_contrast(&style("#fff", "#000000"), None)?, 21.0);

        let ratio = text_contrast(&style("#767676", "#ffffff"), None)?;
        assert!(
            (4.5..4.6).contains(&ratio),
            "#767676 on #ffffff should be ~4.54 but is {}",
            ratio
        );

        Ok(())
    }

    #[test]
    fn test_default_background() -> Result<(), ColorFormatError> {
        let swatch = style("#336699", "#ffcc00");

        assert_close_enough!(
            text_contrast(&swatch, None)?,
            text_contrast(&swatch, Some(&swatch))?
        );

        Ok(())
    }

    #[test]
    fn test_separate_background() -> Result<(), ColorFormatError> {
        // The background argument contributes only its background color.
        let text = style("#000000", "#ff0000");
        let panel = style("#00ff00", "#ffffff");

        assert_close_enough!(text_contrast(&text, Some(&panel))?, 21.0);

        Ok(())
    }

    #[test]
    fn test_invalid_colors() {
        assert_eq!(
            text_contrast(&style("black", "#ffffff"), None),
            Err(ColorFormatError::UnknownFormat)
        );
        assert_eq!(
            text_contrast(&style("#000000", "#ffff"), None),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            text_contrast(&style("#00000g", "#ffffff"), None),
            Err(ColorFormatError::MalformedHex)
        );
    }

    #[test]
    fn test_other_style_sources() -> Result<(), ColorFormatError> {
        struct DarkOnLight;

        impl TextStyle for DarkOnLight {
            fn color(&self) -> &str {
                "#111"
            }

            fn background_color(&self) -> &str {
                "#eee"
            }
        }

        let ratio = text_contrast(&DarkOnLight, None)?;
        assert!(
            (1.0..=21.0).contains(&ratio),
            "contrast ratio should be in 1..=21 but is {}",
            ratio
        );

        Ok(())
    }
}
