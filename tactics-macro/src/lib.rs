use std::{error::Error, fmt};

pub use sc2_tactics_proc_macro::{variant_checkers, FromStr};

/// Returned by `FromStr` implementations generated with `#[derive(FromStr)]`
/// when the string matches no variant.
#[derive(Debug, PartialEq)]
pub struct ParseEnumError;

impl fmt::Display for ParseEnumError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "failed to parse enum")
	}
}

impl Error for ParseEnumError {}
