use super::*;

mod sqrt;
mod reciprocal;
mod mul_add;

pub use mul_add::fma;
