//! Tile grid: static terrain plus per-step occupancy, visibility and danger.

use crate::{
	bot::{Rs, Rw},
	footprint::Footprint,
	game_info::GameInfo,
	geometry::{Point2, Rect, Size, Tile},
	pixel_map::{filled, ByteMap, Pixel, PixelMap, Visibility, VisibilityMap},
};
use ndarray::Array2;

/// Grid shared between bot and path map builder.
pub type SharedGrid = Rw<Grid>;

/// Terrain and occupancy of every map tile.
///
/// Static layers are taken from [`GameInfo`] once, dynamic ones are reset by
/// [`renew`](Self::renew) every step and then narrowed down by stamping footprints.
/// Tiles outside of the map are never pathable, buildable or visible.
#[derive(Debug, Clone, Default)]
pub struct Grid {
	size: Size,
	playable_area: Rect,
	height: Rs<ByteMap>,
	cliffs: PixelMap,
	pathable: PixelMap,
	buildable: PixelMap,
	visibility: VisibilityMap,
	danger: PixelMap,
	generation: u64,
	reaper_exists: bool,
}

impl Grid {
	pub fn new(game_info: &GameInfo) -> Self {
		let size = game_info.map_size;
		Self {
			size,
			playable_area: game_info.playable_area,
			height: Rs::clone(&game_info.terrain_height),
			cliffs: find_cliffs(game_info),
			pathable: game_info.pathing_grid.clone(),
			buildable: game_info.placement_grid.clone(),
			visibility: Array2::default((size.x, size.y)),
			danger: filled(size, Pixel::Empty),
			generation: 0,
			reaper_exists: false,
		}
	}

	/// Resets pathable and buildable layers to map baseline, clears danger
	/// and installs current visibility. Returns new generation.
	pub fn renew(&mut self, game_info: &GameInfo, visibility: &VisibilityMap) -> u64 {
		self.pathable.assign(&game_info.pathing_grid);
		self.buildable.assign(&game_info.placement_grid);
		self.danger.fill(Pixel::Empty);
		if visibility.dim() == self.visibility.dim() {
			self.visibility.assign(visibility);
		} else {
			warn!(
				"Visibility map of shape {:?} doesn't fit the grid {:?}, treating map as hidden",
				visibility.dim(),
				self.visibility.dim()
			);
			self.visibility.fill(Visibility::Hidden);
		}
		self.generation += 1;
		self.generation
	}

	#[inline]
	pub fn size(&self) -> Size {
		self.size
	}
	/// Incremented by each [`renew`](Self::renew).
	#[inline]
	pub fn generation(&self) -> u64 {
		self.generation
	}
	#[inline]
	pub fn reaper_exists(&self) -> bool {
		self.reaper_exists
	}
	pub fn set_reaper_exists(&mut self, exists: bool) {
		self.reaper_exists = exists;
	}

	pub fn is_pathable(&self, tile: Tile) -> bool {
		self.size.index(tile).map_or(false, |i| self.pathable[i].is_set())
	}
	pub fn is_buildable(&self, tile: Tile) -> bool {
		self.size.index(tile).map_or(false, |i| self.buildable[i].is_set())
	}
	/// Air units can fly over any tile of playable area.
	pub fn is_pathable_air(&self, tile: Tile) -> bool {
		self.size.contains(tile) && self.playable_area.contains(tile)
	}
	pub fn is_visible(&self, tile: Tile) -> bool {
		self.size
			.index(tile)
			.map_or(false, |i| self.visibility[i].is_visible())
	}
	pub fn visibility(&self, tile: Tile) -> Visibility {
		self.size
			.index(tile)
			.map_or(Visibility::Hidden, |i| self.visibility[i])
	}
	pub fn is_danger(&self, tile: Tile) -> bool {
		self.size.index(tile).map_or(false, |i| self.danger[i].is_set())
	}
	/// Terrain height, `0` outside of the map.
	pub fn height_at(&self, tile: Tile) -> u8 {
		self.size.index(tile).map_or(0, |i| self.height[i])
	}

	pub fn set_pathable(&mut self, tile: Tile, pathable: bool) {
		if let Some(i) = self.size.index(tile) {
			self.pathable[i] = pathable.into();
		}
	}
	pub fn set_buildable(&mut self, tile: Tile, buildable: bool) {
		if let Some(i) = self.size.index(tile) {
			self.buildable[i] = buildable.into();
		}
	}

	/// Marks tiles covered by footprint as occupied.
	pub fn stamp(&mut self, footprint: &Footprint) {
		for tile in footprint.tiles() {
			self.set_buildable(tile, false);
			if footprint.blocks_pathing {
				self.set_pathable(tile, false);
			}
		}
	}

	/// Marks tiles whose centre lies within `radius` of `center` as dangerous.
	pub fn mark_danger(&mut self, center: Point2, radius: f32) {
		if radius <= 0.0 {
			return;
		}
		let (x0, y0) = (center - radius).tile();
		let (x1, y1) = (center + radius).tile();
		let r2 = radius * radius;
		for (x, y) in iproduct!(x0..=x1, y0..=y1) {
			if let Some(i) = self.size.index((x, y)) {
				let p = Point2::from_tile((x, y));
				let (dx, dy) = (p.x - center.x, p.y - center.y);
				if dx * dx + dy * dy <= r2 {
					self.danger[i] = Pixel::Set;
				}
			}
		}
	}

	/// Copies everything path computation needs, so the lock can be released right after.
	pub fn snapshot(&self) -> GridSnapshot {
		GridSnapshot {
			generation: self.generation,
			size: self.size,
			pathable: self.pathable.clone(),
			danger: self.danger.clone(),
			cliffs: self.cliffs.clone(),
			reaper_exists: self.reaper_exists,
		}
	}
}

/// Immutable copy of the grid taken by path map builder.
#[derive(Debug, Clone, Default)]
pub struct GridSnapshot {
	pub generation: u64,
	pub size: Size,
	pub pathable: PixelMap,
	pub danger: PixelMap,
	/// Unpathable tiles reapers can jump over.
	pub cliffs: PixelMap,
	pub reaper_exists: bool,
}
impl GridSnapshot {
	pub fn is_pathable(&self, tile: Tile) -> bool {
		self.size.index(tile).map_or(false, |i| self.pathable[i].is_set())
	}
	pub fn is_cliff(&self, tile: Tile) -> bool {
		self.size.index(tile).map_or(false, |i| self.cliffs[i].is_set())
	}
	pub fn is_danger(&self, tile: Tile) -> bool {
		self.size.index(tile).map_or(false, |i| self.danger[i].is_set())
	}
}

// Unpathable tile next to pathable ground of at least two different levels.
fn find_cliffs(game_info: &GameInfo) -> PixelMap {
	const WINDOW: isize = 2;

	let size = game_info.map_size;
	let mut cliffs = filled(size, Pixel::Empty);
	if !game_info.is_consistent() {
		return cliffs;
	}
	let pathing = &game_info.pathing_grid;
	let height = &game_info.terrain_height;
	let area = game_info.playable_area;

	for (x, y) in iproduct!(0..size.x as isize, 0..size.y as isize) {
		if !area.contains((x, y)) || pathing[(x as usize, y as usize)].is_set() {
			continue;
		}
		let mut levels = iproduct!(-WINDOW..=WINDOW, -WINDOW..=WINDOW)
			.filter_map(|(dx, dy)| size.index((x + dx, y + dy)))
			.filter(|&i| pathing[i].is_set())
			.map(|i| height[i]);
		if let Some(first) = levels.next() {
			if levels.any(|h| h != first) {
				cliffs[(x as usize, y as usize)] = Pixel::Set;
			}
		}
	}
	cliffs
}
