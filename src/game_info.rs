//! Constant information about map, populated once at game start.

use crate::{
	bot::Rs,
	geometry::{Point2, Rect, Size},
	pixel_map::{filled, ByteMap, Pixel, PixelMap},
};
use ndarray::Array2;

/// Structure where all map information stored.
#[derive(Debug, Default, Clone)]
pub struct GameInfo {
	/// Map name bot playing on.
	pub map_name: String,
	/// Full size of the map.
	pub map_size: Size,
	/// Grid with information about pathable tiles on that map.
	pub pathing_grid: PixelMap,
	/// Grid with information about terrain height on that map.
	pub terrain_height: Rs<ByteMap>,
	/// Grid with information about buildable tiles on that map.
	pub placement_grid: PixelMap,
	/// Usually maps have some unplayable area around it, where units can't exist.
	/// This rectangle is only playble area on that map.
	pub playable_area: Rect,
	/// All starting locations of opponents.
	pub start_locations: Vec<Point2>,
	/// Center of the map.
	pub map_center: Point2,
}
impl GameInfo {
	/// Builds map information from raw grids, all of them must be indexed by `[(x, y)]`
	/// and have the shape of `map_size`.
	pub fn new(
		map_name: impl Into<String>,
		map_size: Size,
		pathing_grid: PixelMap,
		placement_grid: PixelMap,
		terrain_height: ByteMap,
		playable_area: Rect,
		start_locations: Vec<Point2>,
	) -> Self {
		Self {
			map_name: map_name.into(),
			map_size,
			pathing_grid,
			terrain_height: Rs::new(terrain_height),
			placement_grid,
			map_center: playable_area.center(),
			playable_area,
			start_locations,
		}
	}
	/// Open map without obstacles: every tile is pathable and buildable on height `height`.
	pub fn flat(map_name: impl Into<String>, map_size: Size, height: u8, start_locations: Vec<Point2>) -> Self {
		Self::new(
			map_name,
			map_size,
			filled(map_size, Pixel::Set),
			filled(map_size, Pixel::Set),
			Array2::from_elem((map_size.x, map_size.y), height),
			Rect::new(0, 0, map_size.x, map_size.y),
			start_locations,
		)
	}
	/// Checks that every grid matches the map size.
	pub fn is_consistent(&self) -> bool {
		let shape = [self.map_size.x, self.map_size.y];
		self.pathing_grid.shape() == shape
			&& self.placement_grid.shape() == shape
			&& self.terrain_height.shape() == shape
	}
}
