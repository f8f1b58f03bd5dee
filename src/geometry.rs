//! Points, tiles and map dimensions.

use std::{
	hash::{Hash, Hasher},
	iter::Sum,
	ops::{Add, Div, Mul, Sub},
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer tile coordinate. Can be negative or past the map edge,
/// such tiles are treated as blocked by [`Grid`](crate::grid::Grid).
pub type Tile = (isize, isize);

/// Orthogonal and diagonal offsets around a tile.
pub const NEIGHBOURS8: [Tile; 8] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (-1, -1), (1, -1), (-1, 1)];

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Size {
	pub x: usize,
	pub y: usize,
}
impl Size {
	pub fn new(x: usize, y: usize) -> Self {
		Self { x, y }
	}
	/// Converts tile to array index if it lies inside.
	#[inline]
	pub fn index(self, (x, y): Tile) -> Option<(usize, usize)> {
		if x < 0 || y < 0 || x as usize >= self.x || y as usize >= self.y {
			None
		} else {
			Some((x as usize, y as usize))
		}
	}
	#[inline]
	pub fn contains(self, tile: Tile) -> bool {
		self.index(tile).is_some()
	}
	pub fn area(self) -> usize {
		self.x * self.y
	}
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
	pub x0: usize,
	pub y0: usize,
	pub x1: usize,
	pub y1: usize,
}
impl Rect {
	pub fn new(x0: usize, y0: usize, x1: usize, y1: usize) -> Self {
		Self { x0, y0, x1, y1 }
	}
	/// Checks if tile is inside, `x1` and `y1` are exclusive.
	pub fn contains(&self, (x, y): Tile) -> bool {
		x >= self.x0 as isize && y >= self.y0 as isize && x < self.x1 as isize && y < self.y1 as isize
	}
	pub fn center(&self) -> Point2 {
		Point2::new(
			(self.x0 + (self.x1 - self.x0) / 2) as f32,
			(self.y0 + (self.y1 - self.y0) / 2) as f32,
		)
	}
}

/// Point on 2D plane in world coordinates.
#[derive(Debug, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point2 {
	pub x: f32,
	pub y: f32,
}
impl Point2 {
	pub fn new(x: f32, y: f32) -> Self {
		Self { x, y }
	}
	/// Returns new point with given offset.
	pub fn offset(self, x: f32, y: f32) -> Self {
		Self {
			x: self.x + x,
			y: self.y + y,
		}
	}
	pub fn floor(self) -> Self {
		Self {
			x: self.x.floor(),
			y: self.y.floor(),
		}
	}
	/// Tile which contains this point.
	#[inline]
	pub fn tile(self) -> Tile {
		(self.x.floor() as isize, self.y.floor() as isize)
	}
	/// Centre of the given tile.
	pub fn from_tile((x, y): Tile) -> Self {
		Self::new(x as f32 + 0.5, y as f32 + 0.5)
	}
	/// Returns point moved from `self` towards `other` by `offset`.
	pub fn towards(self, other: Self, offset: f32) -> Self {
		let dx = other.x - self.x;
		let dy = other.y - self.y;
		let len = (dx * dx + dy * dy).sqrt();
		if len < f32::EPSILON {
			return self;
		}
		self.offset(dx / len * offset, dy / len * offset)
	}
}
impl PartialEq for Point2 {
	fn eq(&self, other: &Self) -> bool {
		self.x == other.x && self.y == other.y
	}
}
impl Eq for Point2 {}
impl Hash for Point2 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.x.to_bits().hash(state);
		self.y.to_bits().hash(state);
	}
}
impl From<Tile> for Point2 {
	#[inline]
	fn from(tile: Tile) -> Self {
		Self::from_tile(tile)
	}
}
impl From<(f32, f32)> for Point2 {
	#[inline]
	fn from((x, y): (f32, f32)) -> Self {
		Self { x, y }
	}
}
impl From<&Point2> for Point2 {
	#[inline]
	fn from(p: &Point2) -> Self {
		*p
	}
}
impl Add for Point2 {
	type Output = Self;

	fn add(self, other: Self) -> Self {
		Self {
			x: self.x + other.x,
			y: self.y + other.y,
		}
	}
}
impl Sub for Point2 {
	type Output = Self;

	fn sub(self, other: Self) -> Self {
		Self {
			x: self.x - other.x,
			y: self.y - other.y,
		}
	}
}
impl Add<f32> for Point2 {
	type Output = Self;

	fn add(self, other: f32) -> Self {
		Self {
			x: self.x + other,
			y: self.y + other,
		}
	}
}
impl Sub<f32> for Point2 {
	type Output = Self;

	fn sub(self, other: f32) -> Self {
		Self {
			x: self.x - other,
			y: self.y - other,
		}
	}
}
impl Div<f32> for Point2 {
	type Output = Self;

	fn div(self, other: f32) -> Self {
		Self {
			x: self.x / other,
			y: self.y / other,
		}
	}
}
impl Mul<f32> for Point2 {
	type Output = Self;

	fn mul(self, other: f32) -> Self {
		Self {
			x: self.x * other,
			y: self.y * other,
		}
	}
}
impl Sum for Point2 {
	fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
		iter.fold(Default::default(), Add::add)
	}
}

/// Tile and its 4 orthogonal neighbours, tile itself comes first.
pub fn with_neighbours4((x, y): Tile) -> [Tile; 5] {
	[(x, y), (x + 1, y), (x - 1, y), (x, y + 1), (x, y - 1)]
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn tile_floors_negative_coordinates() {
		assert_eq!(Point2::new(10.5, 3.0).tile(), (10, 3));
		assert_eq!(Point2::new(-0.5, 0.2).tile(), (-1, 0));
	}

	#[test]
	fn size_index_rejects_out_of_bounds() {
		let size = Size::new(4, 3);
		assert_eq!(size.index((3, 2)), Some((3, 2)));
		assert_eq!(size.index((4, 0)), None);
		assert_eq!(size.index((0, -1)), None);
	}

	#[test]
	fn towards_keeps_distance() {
		let p = Point2::new(0.0, 0.0).towards(Point2::new(10.0, 0.0), 3.0);
		assert_eq!(p, Point2::new(3.0, 0.0));
		let same = Point2::new(1.0, 1.0);
		assert_eq!(same.towards(same, 5.0), same);
	}
}
