//! Grids of pixels, bytes and visibility states used to describe the map.

use crate::geometry::Size;
use ndarray::Array2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub type PixelMap = Array2<Pixel>;
pub type ByteMap = Array2<u8>;
pub type VisibilityMap = Array2<Visibility>;

/// Map filled with the same pixel.
pub fn filled(size: Size, pixel: Pixel) -> PixelMap {
	Array2::from_elem((size.x, size.y), pixel)
}

#[variant_checkers]
#[derive(Debug, FromPrimitive, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Pixel {
	Empty,
	Set,
}
impl Default for Pixel {
	fn default() -> Self {
		Pixel::Empty
	}
}
impl From<bool> for Pixel {
	#[inline]
	fn from(set: bool) -> Self {
		if set {
			Pixel::Set
		} else {
			Pixel::Empty
		}
	}
}

/// Visibility state of a tile, as reported by map state of observation.
#[variant_checkers]
#[derive(Debug, FromPrimitive, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Visibility {
	Hidden,
	Fogged,
	Visible,
	FullHidden,
}
impl Default for Visibility {
	fn default() -> Self {
		Visibility::Hidden
	}
}
