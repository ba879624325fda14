use crate::Float;

/// The coefficients weighting linear sRGB coordinates for computing relative
/// luminance. WCAG fixes them; they encode the relative sensitivity of human
/// vision to each primary and must not be altered.
const SRGB_LUMINANCE: &[Float; 3] = &[0.2126, 0.7152, 0.0722];

/// The offset WCAG adds to both luminances to account for ambient light.
const AMBIENT_LIGHT: Float = 0.05;

/// Compute the relative luminance for the given sRGB coordinates.
///
/// Per [WCAG 2.1](https://www.w3.org/TR/WCAG21/#dfn-relative-luminance), each
/// gamma-corrected coordinate is linearized with the sRGB EOTF before being
/// weighted. The result has unit range for coordinates with unit range.
pub(crate) fn to_luminance(coordinates: &[Float; 3]) -> Float {
    #[inline]
    fn linearize(value: Float) -> Float {
        if value <= 0.04045 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }

    let [w1, w2, w3] = *SRGB_LUMINANCE;
    let [r, g, b] = *coordinates;

    linearize(r).mul_add(w1, linearize(g).mul_add(w2, linearize(b) * w3))
}

/// Compute the contrast ratio between two relative luminances.
///
/// This function implements WCAG 2.1's `(L1 + 0.05) / (L2 + 0.05)`, with `L1`
/// the lighter and `L2` the darker of the two luminances. It determines which
/// is which itself, so the arguments are interchangeable. For luminances with
/// unit range, the result is in `1.0..=21.0`, with 1 for identical luminances
/// and 21 for black against white.
pub(crate) fn to_contrast_ratio(lum1: Float, lum2: Float) -> Float {
    let (lighter, darker) = if lum1 < lum2 { (lum2, lum1) } else { (lum1, lum2) };
    (lighter + AMBIENT_LIGHT) / (darker + AMBIENT_LIGHT)
}
