//! Tiles occupied by structures, resources and neutral obstacles.

use crate::{geometry::Tile, ids::UnitTypeId, unit::Unit};
use std::collections::HashMap;

/// Shape of a structure on the grid: offsets relative to `origin`.
///
/// Stamping always makes covered tiles unbuildable,
/// pathing is blocked only if `blocks_pathing` is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Footprint {
	pub origin: Tile,
	pub offsets: Vec<Tile>,
	pub blocks_pathing: bool,
}
impl Footprint {
	pub fn new(origin: Tile, offsets: Vec<Tile>, blocks_pathing: bool) -> Self {
		Self {
			origin,
			offsets,
			blocks_pathing,
		}
	}
	/// Absolute tiles covered by footprint.
	pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
		let (x, y) = self.origin;
		self.offsets.iter().map(move |(dx, dy)| (x + dx, y + dy))
	}
}

/// Shapes of neutral obstacles.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ObstacleShape {
	/// 2x2 rocks which only prevent building.
	UnbuildableRocks,
	/// Small 2x2 breakable rocks.
	Rocks2x2,
	/// Rectangle of given width and height centred on unit position.
	Rect(isize, isize),
	/// Band from bottom left to upper right corner.
	DiagonalBLUR,
	/// Band from upper left to bottom right corner.
	DiagonalULBR,
}
impl ObstacleShape {
	fn offsets(self) -> Vec<Tile> {
		match self {
			ObstacleShape::UnbuildableRocks | ObstacleShape::Rocks2x2 => square(0, 2),
			ObstacleShape::Rect(w, h) => iproduct!(-w / 2..w - w / 2, -h / 2..h - h / 2).collect(),
			ObstacleShape::DiagonalBLUR => diagonal(1),
			ObstacleShape::DiagonalULBR => diagonal(-1),
		}
	}
	/// Footprint anchor relative to tile of unit position.
	fn shift(self) -> Tile {
		match self {
			ObstacleShape::UnbuildableRocks | ObstacleShape::Rocks2x2 => (-1, -1),
			_ => (0, 0),
		}
	}
	pub fn blocks_pathing(self) -> bool {
		!matches!(self, ObstacleShape::UnbuildableRocks)
	}
}

const DIAGONAL_HALF_LENGTH: isize = 4;
const DIAGONAL_HALF_WIDTH: isize = 1;

fn square(from: isize, to: isize) -> Vec<Tile> {
	iproduct!(from..to, from..to).collect()
}

// Three tiles wide band along the diagonal, `direction` is slope sign.
fn diagonal(direction: isize) -> Vec<Tile> {
	iproduct!(
		-DIAGONAL_HALF_LENGTH..DIAGONAL_HALF_LENGTH,
		-DIAGONAL_HALF_WIDTH..=DIAGONAL_HALF_WIDTH
	)
	.map(|(i, w)| (i + w, i * direction))
	.collect()
}

lazy_static! {
	/// Shapes of neutral obstacles by type.
	pub static ref DESTRUCTIBLE_SIZE: HashMap<UnitTypeId, ObstacleShape> = hashmap! {
		UnitTypeId::UnbuildableRocksDestructible => ObstacleShape::UnbuildableRocks,
		UnitTypeId::UnbuildableBricksDestructible => ObstacleShape::UnbuildableRocks,
		UnitTypeId::UnbuildablePlatesDestructible => ObstacleShape::UnbuildableRocks,
		UnitTypeId::Rocks2x2NonConjoined => ObstacleShape::Rocks2x2,
		UnitTypeId::DestructibleRockEx14x4 => ObstacleShape::Rect(4, 4),
		UnitTypeId::DestructibleRockEx14x2Horizontal => ObstacleShape::Rect(4, 2),
		UnitTypeId::DestructibleRockEx12x4Vertical => ObstacleShape::Rect(2, 4),
		UnitTypeId::DestructibleRockEx16x2Horizontal => ObstacleShape::Rect(6, 2),
		UnitTypeId::DestructibleRockEx12x6Vertical => ObstacleShape::Rect(2, 6),
		UnitTypeId::DestructibleRock6x6 => ObstacleShape::Rect(6, 6),
		UnitTypeId::DestructibleRockEx16x6 => ObstacleShape::Rect(6, 6),
		UnitTypeId::DestructibleDebris6x6 => ObstacleShape::Rect(6, 6),
		UnitTypeId::DestructibleCityDebris6x6 => ObstacleShape::Rect(6, 6),
		UnitTypeId::DestructibleRockEx1HorizontalHuge => ObstacleShape::Rect(12, 4),
		UnitTypeId::DestructibleRockEx1VerticalHuge => ObstacleShape::Rect(4, 12),
		UnitTypeId::DestructibleRockEx1DiagonalHugeBLUR => ObstacleShape::DiagonalBLUR,
		UnitTypeId::DestructibleRampDiagonalHugeBLUR => ObstacleShape::DiagonalBLUR,
		UnitTypeId::DestructibleDebrisRampDiagonalHugeBLUR => ObstacleShape::DiagonalBLUR,
		UnitTypeId::DestructibleCityDebrisHugeDiagonalBLUR => ObstacleShape::DiagonalBLUR,
		UnitTypeId::DestructibleRockEx1DiagonalHugeULBR => ObstacleShape::DiagonalULBR,
		UnitTypeId::DestructibleRampDiagonalHugeULBR => ObstacleShape::DiagonalULBR,
		UnitTypeId::DestructibleDebrisRampDiagonalHugeULBR => ObstacleShape::DiagonalULBR,
	};
}

/// Returns footprint of structure or neutral obstacle, `None` if unit doesn't occupy tiles.
///
/// Own and enemy structures are classified by radius:
/// - `<= 1` - too small to occupy tiles
/// - `1.125..=1.25` - 2x2 (supply depot, pylon, ...)
/// - `1.25..2.75` - 3x3 (barracks, gateway, ...)
/// - `2.75` - 5x5 (townhalls)
///
/// Neutral units are classified by type: minerals are 2x1,
/// other obstacles are looked up in [`DESTRUCTIBLE_SIZE`].
pub fn classify(unit: &Unit) -> Option<Footprint> {
	if unit.is_flying {
		return None;
	}
	let (x, y) = unit.position.tile();

	if unit.is_neutral() {
		if unit.is_mineral() {
			return Some(Footprint::new((x - 1, y - 1), vec![(0, 0), (1, 0)], true));
		}
		let shape = DESTRUCTIBLE_SIZE.get(&unit.type_id)?;
		let (sx, sy) = shape.shift();
		return Some(Footprint::new((x + sx, y + sy), shape.offsets(), shape.blocks_pathing()));
	}

	if !unit.is_structure() {
		return None;
	}
	let blocks_pathing = unit.type_id != UnitTypeId::SupplyDepotLowered;
	let r = unit.radius;
	let (origin, offsets) = if r <= 1.0 {
		return None;
	} else if (1.125..=1.25).contains(&r) {
		((x - 1, y - 1), square(0, 2))
	} else if r > 1.25 && r < 2.75 {
		((x, y), square(-1, 2))
	} else if (r - 2.75).abs() < f32::EPSILON {
		((x, y), square(-2, 3))
	} else {
		warn!(
			"Unknown footprint of {:?} (tag: {}) with radius {}",
			unit.type_id, unit.tag, r
		);
		return None;
	};
	trace!("{:?} (tag: {}) occupies {} tiles", unit.type_id, unit.tag, offsets.len());
	Some(Footprint::new(origin, offsets, blocks_pathing))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		bot::Rs,
		game_state::{Alliance, RawUnit},
		geometry::Point2,
		unit::tests::test_data,
	};
	use itertools::Itertools;

	fn raw_unit(type_id: UnitTypeId, alliance: Alliance, x: f32, y: f32, radius: f32) -> Unit {
		let data = test_data();
		Unit::from_raw(
			Rs::clone(&data),
			RawUnit::new(1, type_id, alliance, Point2::new(x, y)).with_radius(radius),
		)
	}

	fn sorted_tiles(footprint: &Footprint) -> Vec<Tile> {
		footprint.tiles().sorted().collect()
	}

	#[test]
	fn mineral_is_two_by_one() {
		let mineral = raw_unit(UnitTypeId::MineralField, Alliance::Neutral, 10.0, 10.0, 1.0);
		let footprint = classify(&mineral).unwrap();
		assert!(footprint.blocks_pathing);
		assert_eq!(sorted_tiles(&footprint), vec![(9, 9), (10, 9)]);
	}

	#[test]
	fn structures_by_radius() {
		let depot = raw_unit(UnitTypeId::SupplyDepot, Alliance::Own, 10.0, 10.0, 1.125);
		assert_eq!(
			sorted_tiles(&classify(&depot).unwrap()),
			vec![(9, 9), (9, 10), (10, 9), (10, 10)]
		);

		let barracks = raw_unit(UnitTypeId::Barracks, Alliance::Enemy, 20.5, 20.5, 1.8125);
		let footprint = classify(&barracks).unwrap();
		assert_eq!(footprint.tiles().count(), 9);
		assert_eq!(footprint.tiles().min(), Some((19, 19)));
		assert_eq!(footprint.tiles().max(), Some((21, 21)));

		let townhall = raw_unit(UnitTypeId::Barracks, Alliance::Own, 30.5, 30.5, 2.75);
		let footprint = classify(&townhall).unwrap();
		assert_eq!(footprint.tiles().count(), 25);
		assert_eq!(footprint.tiles().min(), Some((28, 28)));

		assert!(classify(&raw_unit(UnitTypeId::Barracks, Alliance::Own, 5.0, 5.0, 0.5)).is_none());
		assert!(classify(&raw_unit(UnitTypeId::Barracks, Alliance::Own, 5.0, 5.0, 3.5)).is_none());
		assert!(classify(&raw_unit(UnitTypeId::Marine, Alliance::Own, 5.0, 5.0, 1.2)).is_none());
	}

	#[test]
	fn lowered_depot_keeps_path() {
		let depot = raw_unit(UnitTypeId::SupplyDepotLowered, Alliance::Own, 10.0, 10.0, 1.125);
		let footprint = classify(&depot).unwrap();
		assert!(!footprint.blocks_pathing);
		assert_eq!(footprint.tiles().count(), 4);
	}

	#[test]
	fn destructible_shapes() {
		let rocks = raw_unit(UnitTypeId::UnbuildableRocksDestructible, Alliance::Neutral, 10.0, 10.0, 1.0);
		let footprint = classify(&rocks).unwrap();
		assert!(!footprint.blocks_pathing);
		assert_eq!(footprint.origin, (9, 9));
		assert_eq!(footprint.tiles().count(), 4);

		let big = raw_unit(UnitTypeId::DestructibleRock6x6, Alliance::Neutral, 20.0, 20.0, 3.0);
		let footprint = classify(&big).unwrap();
		assert!(footprint.blocks_pathing);
		assert_eq!(footprint.tiles().count(), 36);
		assert_eq!(footprint.tiles().min(), Some((17, 17)));
		assert_eq!(footprint.tiles().max(), Some((22, 22)));

		let huge = raw_unit(UnitTypeId::DestructibleRockEx1HorizontalHuge, Alliance::Neutral, 20.0, 20.0, 6.0);
		assert_eq!(classify(&huge).unwrap().tiles().count(), 48);

		let diagonal = raw_unit(UnitTypeId::DestructibleRockEx1DiagonalHugeBLUR, Alliance::Neutral, 20.0, 20.0, 5.0);
		let tiles = classify(&diagonal).unwrap().tiles().collect::<Vec<_>>();
		assert!(tiles.contains(&(23, 23)));
		assert!(tiles.contains(&(16, 16)));
		assert!(!tiles.contains(&(16, 23)));

		let tower = raw_unit(UnitTypeId::XelNagaTower, Alliance::Neutral, 20.0, 20.0, 1.0);
		assert!(classify(&tower).is_none());
	}
}
