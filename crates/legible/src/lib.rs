//! # Legible
//!
//! Legible computes [WCAG 2.1 contrast
//! ratios](https://www.w3.org/TR/WCAG21/#dfn-contrast-ratio) between text and
//! background colors, for use in accessibility test assertions.
//!
//! The crate's two abstractions are:
//!
//!   * [`Rgb`] implements **24-bit sRGB colors**. It parses hashed
//!     hexadecimal notation, in shorthand (`#fff`) or full (`#ffffff`) form,
//!     and exposes [`Rgb::luminance`] and [`Rgb::contrast_against`].
//!   * [`text_contrast`] implements the **contrast check** over two
//!     [`TextStyle`] sources, reading the first one's text color and the
//!     second one's background color, with the second defaulting to the
//!     first.
//!
//! Everything is pure and stateless: strings become RGB coordinates, RGB
//! coordinates become relative luminances, and two luminances become one
//! ratio in `1.0..=21.0`. Invocations are independent and may run concurrently
//! without coordination.
//!
//! ```
//! # use legible::error::ColorFormatError;
//! # use legible::{text_contrast, Style};
//! let quiet_gray = Style {
//!     color: "#767676".to_string(),
//!     background_color: "#ffffff".to_string(),
//! };
//! let ratio = text_contrast(&quiet_gray, None)?;
//! assert!(ratio >= 4.5, "body text needs 4.5:1");
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! Legible deliberately stops at the numeric pipeline. Selecting elements,
//! resolving computed or inherited CSS values down to literal hex strings,
//! and classifying text as body or large are the calling test suite's
//! responsibility, as is the comparison against the 3:1 or 4.5:1 threshold.
//! Malformed color strings fail eagerly with a
//! [`ColorFormatError`](error::ColorFormatError) rather than leaking
//! not-a-number results.
//!
//! The **`f64`** feature, enabled by default, selects the eponymous type as
//! floating point type [`Float`] and `u64` as [`Bits`] instead of `f32` as
//! [`Float`] and `u32` as [`Bits`].

/// The floating point type in use.
#[cfg(feature = "f64")]
pub type Float = f64;
/// The floating point type in use.
#[cfg(not(feature = "f64"))]
pub type Float = f32;

/// [`Float`]'s bits.
#[cfg(feature = "f64")]
pub type Bits = u64;
/// [`Float`]'s bits.
#[cfg(not(feature = "f64"))]
pub type Bits = u32;

mod core;
pub mod error;
mod rgb;
mod style;

#[doc(hidden)]
pub use core::to_eq_bits;

pub use rgb::Rgb;
pub use style::{text_contrast, Style, TextStyle};
