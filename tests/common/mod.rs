#![allow(dead_code)]

use ndarray::Array2;
use sc2_tactics::{
	game_data::{Attribute, GameData, TargetType, UnitTypeData, Weapon},
	game_info::GameInfo,
	game_state::{Alliance, AvailableAbilities, Observation, RawUnit},
	geometry::{Point2, Size},
	ids::UnitTypeId,
	pixel_map::{Visibility, VisibilityMap},
	AbilitySource, GameSource, SC2Result,
};
use std::collections::VecDeque;

pub const MAP_SIZE: usize = 64;

fn unit_data(id: UnitTypeId, food: f32, attributes: Vec<Attribute>, weapons: Vec<Weapon>) -> UnitTypeData {
	UnitTypeData {
		id,
		name: format!("{:?}", id),
		food_required: food,
		attributes,
		weapons,
		..Default::default()
	}
}

pub fn game_data() -> GameData {
	use Attribute::*;
	use TargetType::*;

	GameData::from_units(vec![
		UnitTypeData {
			mineral_cost: 400,
			..unit_data(UnitTypeId::CommandCenter, 0.0, vec![Armored, Structure], vec![])
		},
		unit_data(UnitTypeId::Barracks, 0.0, vec![Armored, Structure], vec![]),
		unit_data(UnitTypeId::SupplyDepot, 0.0, vec![Armored, Structure], vec![]),
		unit_data(UnitTypeId::SupplyDepotLowered, 0.0, vec![Armored, Structure], vec![]),
		unit_data(
			UnitTypeId::PhotonCannon,
			0.0,
			vec![Armored, Structure],
			vec![Weapon::new(Any, 7.0)],
		),
		UnitTypeData {
			mineral_cost: 50,
			..unit_data(UnitTypeId::Marine, 1.0, vec![Light, Biological], vec![Weapon::new(Any, 5.0)])
		},
		unit_data(
			UnitTypeId::Marauder,
			2.0,
			vec![Armored, Biological],
			vec![Weapon::new(Ground, 4.0)],
		),
		unit_data(
			UnitTypeId::Reaper,
			1.0,
			vec![Light, Biological],
			vec![Weapon::new(Ground, 5.0)],
		),
		unit_data(
			UnitTypeId::Zergling,
			0.5,
			vec![Light, Biological],
			vec![Weapon::new(Ground, 0.1)],
		),
		unit_data(
			UnitTypeId::SCV,
			1.0,
			vec![Light, Biological, Mechanical],
			vec![Weapon::new(Ground, 0.1)],
		),
		unit_data(
			UnitTypeId::Probe,
			1.0,
			vec![Light, Mechanical],
			vec![Weapon::new(Ground, 0.1)],
		),
	])
}

pub fn game_info_sized(size: usize) -> GameInfo {
	GameInfo::flat(
		"Test Map",
		Size::new(size, size),
		10,
		vec![Point2::new(size as f32 - 9.5, size as f32 - 9.5)],
	)
}
pub fn game_info() -> GameInfo {
	game_info_sized(MAP_SIZE)
}

pub fn visibility(size: usize, visibility: Visibility) -> VisibilityMap {
	Array2::from_elem((size, size), visibility)
}

pub fn own(tag: u64, type_id: UnitTypeId, x: f32, y: f32) -> RawUnit {
	RawUnit::new(tag, type_id, Alliance::Own, Point2::new(x, y))
}
pub fn enemy(tag: u64, type_id: UnitTypeId, x: f32, y: f32) -> RawUnit {
	RawUnit::new(tag, type_id, Alliance::Enemy, Point2::new(x, y))
}
pub fn neutral(tag: u64, type_id: UnitTypeId, x: f32, y: f32) -> RawUnit {
	RawUnit::new(tag, type_id, Alliance::Neutral, Point2::new(x, y))
}
/// Bot's command center, present in every observation built by [`observation`].
pub fn home() -> RawUnit {
	own(1, UnitTypeId::CommandCenter, 10.5, 10.5).with_radius(2.75)
}

pub fn observation(game_loop: u32, units: Vec<RawUnit>, vision: Visibility) -> Observation {
	observation_sized(MAP_SIZE, game_loop, units, vision)
}
pub fn observation_sized(size: usize, game_loop: u32, units: Vec<RawUnit>, vision: Visibility) -> Observation {
	let mut observation = Observation {
		game_loop,
		..Default::default()
	};
	observation.raw.units = std::iter::once(home()).chain(units).collect();
	observation.raw.visibility = visibility(size, vision);
	observation
}

/// Game played from prepared observations.
pub struct FakeGame {
	pub info: GameInfo,
	pub data: GameData,
	pub frames: VecDeque<Observation>,
	pub fail_next: bool,
	pub fail_data: bool,
}
impl FakeGame {
	pub fn new(first: Observation) -> Self {
		Self::with_info(game_info(), first)
	}
	pub fn with_info(info: GameInfo, first: Observation) -> Self {
		Self {
			info,
			data: game_data(),
			frames: vec![first].into(),
			fail_next: false,
			fail_data: false,
		}
	}
	pub fn push(&mut self, observation: Observation) {
		self.frames.push_back(observation);
	}
}
impl GameSource for FakeGame {
	fn game_info(&mut self) -> SC2Result<GameInfo> {
		Ok(self.info.clone())
	}
	fn game_data(&mut self) -> SC2Result<GameData> {
		if self.fail_data {
			return Err("game data is not available".into());
		}
		Ok(self.data.clone())
	}
	fn observation(&mut self) -> SC2Result<Observation> {
		if self.fail_next {
			self.fail_next = false;
			return Err("connection lost".into());
		}
		self.frames.pop_front().ok_or_else(|| "no more observations".into())
	}
}

/// Answers ability queries with prepared lists.
#[derive(Default)]
pub struct FakeAbilities {
	pub available: Vec<AvailableAbilities>,
	pub ignoring_cost: Vec<AvailableAbilities>,
	pub fail_ignoring_cost: bool,
	pub queried: Vec<(Vec<u64>, bool)>,
}
impl AbilitySource for FakeAbilities {
	fn available_abilities(
		&mut self,
		tags: &[u64],
		ignore_resource_requirements: bool,
	) -> SC2Result<Vec<AvailableAbilities>> {
		self.queried.push((tags.to_vec(), ignore_resource_requirements));
		if ignore_resource_requirements {
			if self.fail_ignoring_cost {
				return Err("query timed out".into());
			}
			Ok(self.ignoring_cost.clone())
		} else {
			Ok(self.available.clone())
		}
	}
}
