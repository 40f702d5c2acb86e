pub mod formatting;
pub mod path;

pub use formatting::{format_reais, parse_decimal, round2};
