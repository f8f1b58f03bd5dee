//! Distance and next-step maps computed on background thread.
//!
//! [`PathMapBuilder`] wakes up when bot renews the grid (or once per cadence),
//! copies the grid under read lock and computes every requested [`PathMap`]
//! with Dijkstra's algorithm over 8-connected tiles. Finished set is published
//! as a whole, so readers never see maps of mixed generations.

use crate::{
	bot::{Locked, Rs},
	geometry::{Point2, Size, Tile, NEIGHBOURS8},
	grid::{GridSnapshot, SharedGrid},
	settings::PathSettings,
	SC2Result,
};
use ndarray::Array2;
use parking_lot::{Condvar, Mutex, RwLock};
use rustc_hash::FxHashMap;
use sc2_tactics_macro::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
	cmp::Ordering,
	collections::BinaryHeap,
	f32::consts::SQRT_2,
	thread::{self, JoinHandle},
	time::{Duration, Instant},
};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// How far from origin to look for a passable tile when origin itself is blocked.
const MAX_ORIGIN_OFFSET: isize = 8;

/// Kind of path map.
#[variant_checkers]
#[derive(Debug, FromStr, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PathMapKind {
	/// Ground units over pathable tiles.
	Ground,
	/// Same as ground, but dangerous tiles are avoided.
	GroundSafe,
	/// Reapers, which also jump over cliffs.
	Reaper,
	/// Reapers avoiding dangerous tiles.
	ReaperSafe,
}
impl PathMapKind {
	pub fn avoids_danger(self) -> bool {
		matches!(self, PathMapKind::GroundSafe | PathMapKind::ReaperSafe)
	}
	pub fn jumps_cliffs(self) -> bool {
		matches!(self, PathMapKind::Reaper | PathMapKind::ReaperSafe)
	}
}

/// Point path map is computed from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Origin {
	/// Bot's start location.
	Home,
	/// Opponent's start location.
	Enemy,
	/// Expansion with given index in [`expansions`](crate::bot::Bot::expansions).
	Expansion(usize),
}

/// Positions of every [`Origin`] on the map.
#[derive(Debug, Clone, Default)]
pub struct PathOrigins {
	pub home: Point2,
	pub enemy: Point2,
	pub expansions: Vec<Point2>,
}
impl PathOrigins {
	pub fn resolve(&self, origin: Origin) -> Option<Point2> {
		match origin {
			Origin::Home => Some(self.home),
			Origin::Enemy => Some(self.enemy),
			Origin::Expansion(i) => self.expansions.get(i).copied(),
		}
	}
}

#[derive(Copy, Clone, PartialEq)]
struct State {
	cost: f32,
	tile: Tile,
}
impl Eq for State {}
// Reversed, so `BinaryHeap` pops the cheapest state first.
impl Ord for State {
	fn cmp(&self, other: &Self) -> Ordering {
		other
			.cost
			.partial_cmp(&self.cost)
			.unwrap_or(Ordering::Equal)
			.then_with(|| self.tile.cmp(&other.tile))
	}
}
impl PartialOrd for State {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

/// Distance from origin and next step towards it for every reachable tile.
#[derive(Debug, Clone)]
pub struct PathMap {
	pub kind: PathMapKind,
	/// Tile where all paths end, closest passable tile to requested origin.
	pub origin: Option<Tile>,
	size: Size,
	distance: Array2<f32>,
	next: Array2<Option<Tile>>,
}
impl PathMap {
	/// Computes map of given kind on grid snapshot.
	/// Orthogonal step costs `1`, diagonal `√2`, diagonal moves can't cut corners.
	pub fn compute(snapshot: &GridSnapshot, kind: PathMapKind, origin: Point2, danger_penalty: f32) -> Self {
		let size = snapshot.size;
		let passable = |tile: Tile| snapshot.is_pathable(tile) || (kind.jumps_cliffs() && snapshot.is_cliff(tile));

		let mut distance = Array2::from_elem((size.x, size.y), f32::INFINITY);
		let mut next = Array2::from_elem((size.x, size.y), None);

		let start = closest_passable(origin, &passable);
		let mut heap = BinaryHeap::new();
		if let Some(start) = start.and_then(|tile| size.index(tile).map(|i| (tile, i))) {
			distance[start.1] = 0.0;
			heap.push(State {
				cost: 0.0,
				tile: start.0,
			});
		}

		while let Some(State { cost, tile }) = heap.pop() {
			let (x, y) = tile;
			let current = match size.index(tile) {
				Some(i) => distance[i],
				None => continue,
			};
			if cost > current {
				continue;
			}
			for &(dx, dy) in &NEIGHBOURS8 {
				let neighbour = (x + dx, y + dy);
				let index = match size.index(neighbour) {
					Some(i) if passable(neighbour) => i,
					_ => continue,
				};
				let diagonal = dx != 0 && dy != 0;
				if diagonal && !(passable((x + dx, y)) && passable((x, y + dy))) {
					continue;
				}
				let mut step = if diagonal { SQRT_2 } else { 1.0 };
				if kind.avoids_danger() && snapshot.is_danger(neighbour) {
					step += danger_penalty;
				}
				let new_cost = cost + step;
				if new_cost < distance[index] {
					distance[index] = new_cost;
					next[index] = Some(tile);
					heap.push(State {
						cost: new_cost,
						tile: neighbour,
					});
				}
			}
		}

		Self {
			kind,
			origin: start,
			size,
			distance,
			next,
		}
	}

	/// Path cost from tile to origin, `None` if origin is unreachable.
	pub fn distance(&self, tile: Tile) -> Option<f32> {
		self.size
			.index(tile)
			.map(|i| self.distance[i])
			.filter(|d| d.is_finite())
	}
	/// Next tile on the way to origin, `None` for origin itself and unreachable tiles.
	pub fn next_step(&self, tile: Tile) -> Option<Tile> {
		self.size.index(tile).and_then(|i| self.next[i])
	}
	/// Tiles from given one to origin, both included. Empty if origin is unreachable.
	pub fn path(&self, from: Tile) -> Vec<Tile> {
		if self.distance(from).is_none() {
			return Vec::new();
		}
		let mut path = vec![from];
		let mut current = from;
		while let Some(next) = self.next_step(current) {
			if path.len() > self.size.area() {
				break;
			}
			path.push(next);
			current = next;
		}
		path
	}
	pub fn reachable(&self, tile: Tile) -> bool {
		self.distance(tile).is_some()
	}
}

fn closest_passable<F: Fn(Tile) -> bool>(origin: Point2, passable: F) -> Option<Tile> {
	let (x, y) = origin.tile();
	(0..=MAX_ORIGIN_OFFSET).find_map(|r| {
		iproduct!(-r..=r, -r..=r)
			.filter(|(dx, dy)| dx.abs() == r || dy.abs() == r)
			.map(|(dx, dy)| (x + dx, y + dy))
			.filter(|&tile| passable(tile))
			.min_by(|a, b| {
				let da = Point2::from_tile(*a) - origin;
				let db = Point2::from_tile(*b) - origin;
				(da.x * da.x + da.y * da.y)
					.partial_cmp(&(db.x * db.x + db.y * db.y))
					.unwrap_or(Ordering::Equal)
			})
	})
}

/// Complete set of maps computed from one grid generation.
#[derive(Debug, Clone, Default)]
pub struct PathMaps {
	/// Grid generation maps were computed from, `0` if nothing was computed yet.
	pub generation: u64,
	maps: FxHashMap<(PathMapKind, Origin), PathMap>,
}
impl PathMaps {
	pub fn get(&self, kind: PathMapKind, origin: Origin) -> Option<&PathMap> {
		self.maps.get(&(kind, origin))
	}
	pub fn distance(&self, kind: PathMapKind, origin: Origin, tile: Tile) -> Option<f32> {
		self.get(kind, origin)?.distance(tile)
	}
	pub fn next_step(&self, kind: PathMapKind, origin: Origin, tile: Tile) -> Option<Tile> {
		self.get(kind, origin)?.next_step(tile)
	}
	pub fn path(&self, kind: PathMapKind, origin: Origin, tile: Tile) -> Vec<Tile> {
		self.get(kind, origin).map_or_else(Vec::new, |map| map.path(tile))
	}
	pub fn keys(&self) -> impl Iterator<Item = &(PathMapKind, Origin)> {
		self.maps.keys()
	}
	pub fn len(&self) -> usize {
		self.maps.len()
	}
	pub fn is_empty(&self) -> bool {
		self.maps.is_empty()
	}
}

/// Latest published [`PathMaps`].
#[derive(Debug, Default)]
pub struct PublishedMaps(RwLock<Rs<PathMaps>>);
impl PublishedMaps {
	/// Replaces current maps unless they're computed from a newer grid.
	pub fn publish(&self, maps: PathMaps) -> bool {
		let mut current = self.0.write();
		if maps.generation < current.generation {
			return false;
		}
		*current = Rs::new(maps);
		true
	}
	pub fn load(&self) -> Rs<PathMaps> {
		Rs::clone(&self.0.read())
	}
}

#[derive(Debug, Default)]
struct SignalState {
	stopped: bool,
	generation: u64,
	cycles: u64,
}

/// Handle used to wake up and stop path map builder.
#[derive(Debug, Clone, Default)]
pub struct StopSignal(Rs<(Mutex<SignalState>, Condvar)>);
impl StopSignal {
	pub fn new() -> Self {
		Default::default()
	}
	/// Asks builder to stop, it exits before computing next map.
	pub fn stop(&self) {
		let (state, condvar) = &*self.0;
		state.lock().stopped = true;
		condvar.notify_all();
	}
	pub fn is_stopped(&self) -> bool {
		self.0 .0.lock().stopped
	}
	/// Number of build cycles started, each one after its grid snapshot was taken.
	pub fn cycles(&self) -> u64 {
		self.0 .0.lock().cycles
	}
	fn begin_cycle(&self) {
		self.0 .0.lock().cycles += 1;
	}
	/// Tells builder grid was renewed.
	pub fn notify(&self, generation: u64) {
		let (state, condvar) = &*self.0;
		{
			let mut state = state.lock();
			if generation > state.generation {
				state.generation = generation;
			}
		}
		condvar.notify_all();
	}
	/// Blocks until grid generation becomes newer than `seen`, builder is stopped or timeout elapses.
	/// Returns `false` if stopped.
	fn wait(&self, seen: u64, timeout: Duration) -> bool {
		let (state, condvar) = &*self.0;
		let deadline = Instant::now() + timeout;
		let mut state = state.lock();
		while !state.stopped && state.generation <= seen {
			if condvar.wait_until(&mut state, deadline).timed_out() {
				break;
			}
		}
		!state.stopped
	}
}

/// Computes path maps on its own thread.
pub struct PathMapBuilder {
	grid: SharedGrid,
	origins: PathOrigins,
	targets: Vec<(PathMapKind, Origin)>,
	settings: PathSettings,
	signal: StopSignal,
	published: Rs<PublishedMaps>,
}
impl PathMapBuilder {
	pub fn new(
		grid: SharedGrid,
		origins: PathOrigins,
		settings: PathSettings,
		signal: StopSignal,
		published: Rs<PublishedMaps>,
	) -> Self {
		let targets = settings.all_targets(origins.expansions.len());
		Self {
			grid,
			origins,
			targets,
			settings,
			signal,
			published,
		}
	}

	/// Computes every map once. Returns `None` if builder was stopped meanwhile.
	pub fn build(&self) -> Option<PathMaps> {
		let timer = Instant::now();
		let snapshot = self.grid.lock_read().snapshot();
		self.signal.begin_cycle();

		let jobs = self
			.targets
			.iter()
			.filter(|(kind, _)| !kind.jumps_cliffs() || snapshot.reaper_exists)
			.filter_map(|&(kind, origin)| Some((kind, origin, self.origins.resolve(origin)?)))
			.collect::<Vec<_>>();

		let compute = |&(kind, origin, position): &(PathMapKind, Origin, Point2)| {
			if self.signal.is_stopped() {
				return None;
			}
			let map = PathMap::compute(&snapshot, kind, position, self.settings.danger_penalty);
			Some(((kind, origin), map))
		};
		#[cfg(feature = "rayon")]
		let maps = jobs.par_iter().map(compute).collect::<Option<FxHashMap<_, _>>>()?;
		#[cfg(not(feature = "rayon"))]
		let maps = jobs.iter().map(compute).collect::<Option<FxHashMap<_, _>>>()?;

		debug!(
			"Computed {} path maps for grid generation {} in {:?}",
			maps.len(),
			snapshot.generation,
			timer.elapsed()
		);
		Some(PathMaps {
			generation: snapshot.generation,
			maps,
		})
	}

	/// Rebuilds maps until stopped.
	pub fn run(self) {
		info!("Path map builder started with {} targets", self.targets.len());
		let mut seen = None;
		loop {
			let generation = self.grid.lock_read().generation();
			if seen != Some(generation) {
				match self.build() {
					Some(maps) => {
						seen = Some(maps.generation);
						if !self.published.publish(maps) {
							debug!("Path maps for outdated generation {} dropped", generation);
						}
					}
					None => break,
				}
			}
			if !self.signal.wait(seen.unwrap_or_default(), self.settings.cadence) {
				break;
			}
		}
		info!("Path map builder stopped");
	}

	/// Starts [`run`](Self::run) on a new thread.
	pub fn spawn(self) -> SC2Result<JoinHandle<()>> {
		Ok(thread::Builder::new()
			.name("path-maps".to_string())
			.spawn(move || self.run())?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		bot::Rw,
		footprint::Footprint,
		game_info::GameInfo,
		grid::Grid,
		pixel_map::Visibility,
	};

	fn snapshot_with(size: usize, walls: &[Tile], danger: &[(Point2, f32)]) -> GridSnapshot {
		let info = GameInfo::flat("Test", Size::new(size, size), 10, vec![]);
		let mut grid = Grid::new(&info);
		grid.renew(&info, &Array2::from_elem((size, size), Visibility::Visible));
		grid.stamp(&Footprint::new((0, 0), walls.to_vec(), true));
		for &(center, radius) in danger {
			grid.mark_danger(center, radius);
		}
		grid.snapshot()
	}

	#[test]
	fn distances_on_open_grid() {
		let snapshot = snapshot_with(10, &[], &[]);
		let map = PathMap::compute(&snapshot, PathMapKind::Ground, Point2::new(0.5, 0.5), 0.0);
		assert_eq!(map.origin, Some((0, 0)));
		assert_eq!(map.distance((0, 0)), Some(0.0));
		assert_eq!(map.distance((3, 0)), Some(3.0));
		assert!((map.distance((2, 2)).unwrap() - 2.0 * SQRT_2).abs() < 1e-5);
		assert_eq!(map.next_step((1, 1)), Some((0, 0)));
		assert_eq!(map.next_step((0, 0)), None);
		assert_eq!(map.distance((10, 0)), None);
		let path = map.path((3, 3));
		assert_eq!(path.first(), Some(&(3, 3)));
		assert_eq!(path.last(), Some(&(0, 0)));
		assert_eq!(path.len(), 4);
	}

	#[test]
	fn walls_are_bypassed_without_cutting_corners() {
		// Vertical wall at x = 2 with gap at y = 4.
		let walls = (0..4).map(|y| (2, y)).collect::<Vec<_>>();
		let snapshot = snapshot_with(5, &walls, &[]);
		let map = PathMap::compute(&snapshot, PathMapKind::Ground, Point2::new(0.5, 0.5), 0.0);
		assert!(map.distance((3, 0)).unwrap() > 6.0);
		assert_eq!(map.distance((2, 1)), None);
		assert!(map.path((3, 0)).iter().all(|t| !walls.contains(t)));
		// (1,3) -> (2,4) would cut the corner of (2,3).
		assert_ne!(map.next_step((2, 4)), Some((1, 3)));
	}

	#[test]
	fn enclosed_tiles_unreachable() {
		let walls = vec![(3, 2), (2, 3), (4, 3), (3, 4), (2, 2), (4, 4), (2, 4), (4, 2)];
		let snapshot = snapshot_with(8, &walls, &[]);
		let map = PathMap::compute(&snapshot, PathMapKind::Ground, Point2::new(0.5, 0.5), 0.0);
		assert_eq!(map.distance((3, 3)), None);
		assert!(map.path((3, 3)).is_empty());
	}

	#[test]
	fn blocked_origin_moves_to_closest_passable() {
		let walls = vec![(5, 5)];
		let snapshot = snapshot_with(10, &walls, &[]);
		let map = PathMap::compute(&snapshot, PathMapKind::Ground, Point2::new(5.5, 5.5), 0.0);
		let origin = map.origin.unwrap();
		assert_ne!(origin, (5, 5));
		assert_eq!(map.distance(origin), Some(0.0));
	}

	#[test]
	fn safe_maps_avoid_danger() {
		let snapshot = snapshot_with(12, &[], &[(Point2::new(6.0, 1.0), 2.0)]);
		let origin = Point2::new(0.5, 1.5);
		let plain = PathMap::compute(&snapshot, PathMapKind::Ground, origin, 20.0);
		let safe = PathMap::compute(&snapshot, PathMapKind::GroundSafe, origin, 20.0);
		assert_eq!(plain.distance((11, 1)), Some(11.0));
		let safe_path = safe.path((11, 1));
		assert!(safe_path.iter().all(|&t| !snapshot.is_danger(t) || t == (11, 1)));
		assert!(safe.distance((11, 1)).unwrap() > 11.0);
	}

	#[test]
	fn publication_is_monotonic() {
		let published = PublishedMaps::default();
		assert!(published.publish(PathMaps {
			generation: 5,
			..Default::default()
		}));
		assert!(!published.publish(PathMaps {
			generation: 3,
			..Default::default()
		}));
		assert_eq!(published.load().generation, 5);
		assert!(published.publish(PathMaps {
			generation: 5,
			..Default::default()
		}));
	}

	#[test]
	fn reaper_maps_only_with_reaper() {
		let info = GameInfo::flat("Test", Size::new(16, 16), 10, vec![]);
		let grid: SharedGrid = Rw::new(RwLock::new(Grid::new(&info)));
		let settings = PathSettings::default()
			.with_targets(vec![
				(PathMapKind::Ground, Origin::Home),
				(PathMapKind::Reaper, Origin::Home),
				(PathMapKind::Ground, Origin::Expansion(3)),
			])
			.with_expansion_maps(false);
		let builder = PathMapBuilder::new(
			Rs::clone(&grid),
			PathOrigins {
				home: Point2::new(2.5, 2.5),
				enemy: Point2::new(12.5, 12.5),
				expansions: vec![],
			},
			settings,
			StopSignal::new(),
			Default::default(),
		);
		let maps = builder.build().unwrap();
		assert_eq!(maps.len(), 1);
		assert!(maps.get(PathMapKind::Reaper, Origin::Home).is_none());

		grid.lock_write().set_reaper_exists(true);
		let maps = builder.build().unwrap();
		assert_eq!(maps.len(), 2);
		assert!(maps.get(PathMapKind::Reaper, Origin::Home).is_some());
	}

	#[test]
	fn stopped_builder_returns_nothing() {
		let info = GameInfo::flat("Test", Size::new(16, 16), 10, vec![]);
		let signal = StopSignal::new();
		let builder = PathMapBuilder::new(
			Rw::new(RwLock::new(Grid::new(&info))),
			Default::default(),
			Default::default(),
			signal.clone(),
			Default::default(),
		);
		assert_eq!(builder.build().map(|maps| maps.generation), Some(0));
		assert_eq!(signal.cycles(), 1);
		signal.stop();
		assert!(builder.build().is_none());
		assert!(!signal.wait(0, Duration::from_secs(5)));
	}

	#[test]
	fn kinds_parse() {
		assert_eq!("ground_safe".parse::<PathMapKind>(), Ok(PathMapKind::GroundSafe));
		assert_eq!("ReaperSafe".parse::<PathMapKind>(), Ok(PathMapKind::ReaperSafe));
		assert_eq!("reaper".parse::<PathMapKind>(), Ok(PathMapKind::Reaper));
		assert!("air".parse::<PathMapKind>().is_err());
	}
}
