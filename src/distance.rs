//! Traits for comparing distance between points and units.

use crate::{geometry::Point2, unit::Unit};
use std::cmp::Ordering;

/// Basic trait for comparing distance.
pub trait Distance: Sized {
	/// Calculates squared euclidean distance from `self` to `other`.
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32;

	/// Calculates euclidean distance from `self` to `other`.
	#[inline]
	fn distance<P: Into<Point2>>(self, other: P) -> f32 {
		self.distance_squared(other).sqrt()
	}
	/// Checks if distance between `self` and `other` is less than given `distance`.
	#[inline]
	fn is_closer<P: Into<Point2>>(self, distance: f32, other: P) -> bool {
		self.distance_squared(other) < distance * distance
	}
	/// Checks if distance between `self` and `other` is greater than given `distance`.
	#[inline]
	fn is_further<P: Into<Point2>>(self, distance: f32, other: P) -> bool {
		self.distance_squared(other) > distance * distance
	}
}

impl Distance for Point2 {
	#[inline]
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32 {
		let other = other.into();
		let dx = self.x - other.x;
		let dy = self.y - other.y;
		dx * dx + dy * dy
	}
}
impl Distance for &Point2 {
	#[inline]
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32 {
		(*self).distance_squared(other)
	}
}
impl Distance for &Unit {
	#[inline]
	fn distance_squared<P: Into<Point2>>(self, other: P) -> f32 {
		self.position.distance_squared(other)
	}
}
impl From<&Unit> for Point2 {
	#[inline]
	fn from(u: &Unit) -> Self {
		u.position
	}
}

#[inline]
fn cmp_by<T, P>(target: P) -> impl Fn(&T, &T) -> Ordering
where
	T: Distance + Copy,
	P: Into<Point2> + Copy,
{
	let f = move |u: &T| u.distance_squared(target);
	move |a, b| f(a).partial_cmp(&f(b)).unwrap_or(Ordering::Equal)
}

/// Helper trait for iterators of items implementing [`Distance`].
pub trait DistanceIterator<T>
where
	Self: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
	/// Returns closest to `target` item in iterator.
	fn closest<P: Into<Point2> + Copy>(self, target: P) -> Option<T> {
		self.min_by(cmp_by(target))
	}
	/// Returns furthest to `target` item in iterator.
	fn furthest<P: Into<Point2> + Copy>(self, target: P) -> Option<T> {
		self.max_by(cmp_by(target))
	}
}
impl<I, T> DistanceIterator<T> for I
where
	I: Iterator<Item = T> + Sized,
	T: Distance + Copy,
{
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn closer_is_strict() {
		let a = Point2::new(0.0, 0.0);
		assert!(a.is_closer(3.01, Point2::new(3.0, 0.0)));
		assert!(!a.is_closer(3.0, Point2::new(3.0, 0.0)));
		assert!(a.is_further(2.0, Point2::new(3.0, 0.0)));
	}

	#[test]
	fn closest_point() {
		let points = [Point2::new(5.0, 5.0), Point2::new(1.0, 1.0), Point2::new(9.0, 0.0)];
		assert_eq!(points.iter().closest(Point2::new(0.0, 0.0)), Some(&points[1]));
		assert_eq!(points.iter().furthest(Point2::new(0.0, 0.0)), Some(&points[2]));
	}
}
