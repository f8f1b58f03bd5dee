//! Information about unit types provided by game data request.
#![allow(missing_docs)]

use crate::ids::UnitTypeId;
use rustc_hash::FxHashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// All the data about unit types stored here.
/// Can be accessed through [`game_data`](crate::bot::Bot::game_data) field.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameData {
	/// Information about units mapped to `UnitTypeId`s.
	pub units: FxHashMap<UnitTypeId, UnitTypeData>,
}
impl GameData {
	/// Collects data of unit types, later entries with the same id override earlier ones.
	pub fn from_units<I: IntoIterator<Item = UnitTypeData>>(units: I) -> Self {
		Self {
			units: units.into_iter().map(|data| (data.id, data)).collect(),
		}
	}
}

/// Cost of an item in resources, supply and time.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cost {
	pub minerals: u32,
	pub vespene: u32,
	pub supply: f32,
	pub time: f32,
}

/// Differents attributes of units.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Attribute {
	Light,
	Armored,
	Biological,
	Mechanical,
	Robotic,
	Psionic,
	Massive,
	Structure,
	Hover,
	Heroic,
	Summoned,
}

/// Possible target of unit's weapon.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TargetType {
	Ground,
	Air,
	Any,
}
impl TargetType {
	pub fn hits_ground(self) -> bool {
		!self.is_air()
	}
	pub fn hits_air(self) -> bool {
		!self.is_ground()
	}
}

/// Weapon's characteristic.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weapon {
	/// Possible targets.
	pub target: TargetType,
	/// Usual damage.
	pub damage: u32,
	/// Number of attacks per use.
	pub attacks: u32,
	/// Maximum range.
	pub range: f32,
	/// Cooldown (in seconds * game speed).
	pub speed: f32,
}
impl Weapon {
	/// Weapon with given target and range, other fields set to 1.
	pub fn new(target: TargetType, range: f32) -> Self {
		Self {
			target,
			damage: 1,
			attacks: 1,
			range,
			speed: 1.0,
		}
	}
}

/// Information about specific unit type.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitTypeData {
	pub id: UnitTypeId,
	pub name: String,
	pub mineral_cost: u32,
	pub vespene_cost: u32,
	pub food_required: f32,
	pub food_provided: f32,
	pub build_time: f32,
	/// Unit contains vespene (i.e. is vespene geyser).
	pub has_vespene: bool,
	/// Unit contains minerals (i.e. is mineral field).
	pub has_minerals: bool,
	pub sight_range: f32,
	pub attributes: Vec<Attribute>,
	pub movement_speed: f32,
	pub armor: i32,
	pub weapons: Vec<Weapon>,
}
impl UnitTypeData {
	pub fn cost(&self) -> Cost {
		Cost {
			minerals: self.mineral_cost,
			vespene: self.vespene_cost,
			supply: self.food_required,
			time: self.build_time,
		}
	}
	pub fn is_structure(&self) -> bool {
		self.attributes.contains(&Attribute::Structure)
	}
	/// Maximum range of weapons able to hit ground targets, `0` if there's none.
	pub fn ground_range(&self) -> f32 {
		max_range(self.weapons.iter().filter(|w| w.target.hits_ground()))
	}
	/// Maximum range of weapons able to hit air targets, `0` if there's none.
	pub fn air_range(&self) -> f32 {
		max_range(self.weapons.iter().filter(|w| w.target.hits_air()))
	}
}

fn max_range<'a>(weapons: impl Iterator<Item = &'a Weapon>) -> f32 {
	weapons.map(|w| w.range).fold(0.0, f32::max)
}
