use crate::error::ColorFormatError;

/// A color notation this crate can detect.
///
/// Hashed hexadecimal is the only supported notation for now. Named colors
/// and functional notation would become further variants with their own
/// parsing functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Notation {
    Hashed,
}

/// Detect the notation of the given color string, if any.
fn detect(s: &str) -> Option<Notation> {
    s.starts_with('#').then_some(Notation::Hashed)
}

/// Parse a 24-bit color in hashed hexadecimal format. If successful, this
/// function returns the three coordinates as unsigned bytes. It transparently
/// expands single-digit coordinates, so `#fff` denotes the same color as
/// `#ffffff`.
fn parse_hashed(s: &str) -> Result<[u8; 3], ColorFormatError> {
    if !s.starts_with('#') {
        return Err(ColorFormatError::UnknownFormat);
    } else if s.len() != 4 && s.len() != 7 {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_coordinate(s: &str, index: usize) -> Result<u8, ColorFormatError> {
        let digits = s.len() / 3;
        let t = s
            .get(1 + digits * index..1 + digits * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)?;

        Ok(if digits == 1 { 16 * n + n } else { n })
    }

    let c1 = parse_coordinate(s, 0)?;
    let c2 = parse_coordinate(s, 1)?;
    let c3 = parse_coordinate(s, 2)?;
    Ok([c1, c2, c3])
}

/// Parse the string into the three coordinates of a 24-bit color.
///
/// This function recognizes the three and six digit hashed hexadecimal
/// formats for colors. Before detecting the notation, it trims leading and
/// trailing white space and converts ASCII letters to lowercase.
pub(crate) fn parse(s: &str) -> Result<[u8; 3], ColorFormatError> {
    let lowercase = s.trim().to_ascii_lowercase(); // Keep around for fn scope
    let s = lowercase.as_str();

    match detect(s) {
        Some(Notation::Hashed) => parse_hashed(s),
        None => Err(ColorFormatError::UnknownFormat),
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{parse, parse_hashed, ColorFormatError};

    #[test]
    fn test_parse_hashed() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#123")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("#112233")?, [0x11_u8, 0x22, 0x33]);
        assert_eq!(parse_hashed("fff"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(
            parse_hashed("#ff"),
            Err(ColorFormatError::UnexpectedCharacters)
        );
        assert_eq!(
            parse_hashed("#💩00"),
            Err(ColorFormatError::UnexpectedCharacters)
        );

        let result = parse_hashed("#0g0");
        assert!(matches!(result, Err(ColorFormatError::MalformedHex)));

        let result = parse_hashed("#00g");
        assert!(matches!(result, Err(ColorFormatError::MalformedHex)));

        Ok(())
    }

    #[test]
    fn test_shorthand_expansion() -> Result<(), ColorFormatError> {
        assert_eq!(parse_hashed("#fff")?, parse_hashed("#ffffff")?);
        assert_eq!(parse_hashed("#a5c")?, parse_hashed("#aa55cc")?);
        Ok(())
    }

    #[test]
    fn test_parse() -> Result<(), ColorFormatError> {
        assert_eq!(parse("#0000ff")?, [0x00_u8, 0x00, 0xff]);
        assert_eq!(parse("   #FFFFFF   ")?, [0xff_u8, 0xff, 0xff]);
        assert_eq!(parse("rgb(0, 0, 0)"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse("white"), Err(ColorFormatError::UnknownFormat));
        assert_eq!(parse(""), Err(ColorFormatError::UnknownFormat));

        Ok(())
    }
}
