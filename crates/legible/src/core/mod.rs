mod contrast;
mod equality;
mod math;
mod string;

// contrast
pub(crate) use contrast::{to_contrast_ratio, to_luminance};

// equality
pub use equality::to_eq_bits;

// math
pub(crate) use math::FloatExt;

// string
pub(crate) use string::parse;
