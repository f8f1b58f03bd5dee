//! Information about current state of the game, received each step.

use crate::{
	geometry::Point2,
	ids::{AbilityId, UnitTypeId},
	pixel_map::VisibilityMap,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Clone)]
pub struct Observation {
	pub game_loop: u32,
	pub common: Common,
	pub raw: RawData,
}

#[derive(Debug, Default, Clone)]
pub struct RawData {
	/// Every unit the bot can see or remember, in the order reported by the game.
	pub units: Vec<RawUnit>,
	pub visibility: VisibilityMap,
	pub dead_units: Vec<u64>,
}

#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Alliance {
	Own,
	Ally,
	Neutral,
	Enemy,
}
impl Alliance {
	/// Same as [`is_own`](Self::is_own).
	#[inline]
	pub fn is_mine(self) -> bool {
		self.is_own()
	}
}
impl Default for Alliance {
	fn default() -> Self {
		Alliance::Neutral
	}
}

/// How unit is displayed.
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DisplayType {
	/// Fully visible.
	Visible,
	/// Dimmed version of unit left behind after entering fog of war.
	Snapshot,
	/// Fully hidden.
	Hidden,
	/// Building that hasn't started construction.
	Placeholder,
}
impl Default for DisplayType {
	fn default() -> Self {
		DisplayType::Visible
	}
}

/// Order given to unit.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitOrder {
	pub ability: AbilityId,
	pub target_pos: Option<Point2>,
	pub target_tag: Option<u64>,
	/// Progress of train or research, from `0` to `1`.
	pub progress: f32,
}
impl UnitOrder {
	pub fn new(ability: AbilityId) -> Self {
		Self {
			ability,
			target_pos: None,
			target_tag: None,
			progress: 0.0,
		}
	}
}

/// Unit record exactly as received from the game.
/// Turned into [`Unit`](crate::unit::Unit) while bot processes the step.
#[derive(Debug, Default, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RawUnit {
	pub tag: u64,
	pub type_id: UnitTypeId,
	pub alliance: Alliance,
	pub display_type: DisplayType,
	pub owner: u32,
	pub position: Point2,
	pub facing: f32,
	pub radius: f32,
	pub build_progress: f32,
	pub is_flying: bool,
	pub is_burrowed: bool,
	pub is_hallucination: bool,
	pub health: Option<u32>,
	pub health_max: Option<u32>,
	pub shield: Option<u32>,
	pub shield_max: Option<u32>,
	pub energy: Option<u32>,
	pub mineral_contents: Option<u32>,
	pub vespene_contents: Option<u32>,
	pub orders: Vec<UnitOrder>,
}
impl RawUnit {
	/// Fully built visible unit with given identity, other fields are defaults.
	pub fn new(tag: u64, type_id: UnitTypeId, alliance: Alliance, position: Point2) -> Self {
		Self {
			tag,
			type_id,
			alliance,
			position,
			build_progress: 1.0,
			..Default::default()
		}
	}
	pub fn with_radius(mut self, radius: f32) -> Self {
		self.radius = radius;
		self
	}
	pub fn with_build_progress(mut self, build_progress: f32) -> Self {
		self.build_progress = build_progress;
		self
	}
	pub fn with_display_type(mut self, display_type: DisplayType) -> Self {
		self.display_type = display_type;
		self
	}
	pub fn flying(mut self) -> Self {
		self.is_flying = true;
		self
	}
	pub fn with_orders(mut self, orders: Vec<UnitOrder>) -> Self {
		self.orders = orders;
		self
	}
}

/// Abilities of one unit returned by [`AbilitySource`](crate::AbilitySource).
#[derive(Debug, Default, Clone)]
pub struct AvailableAbilities {
	pub tag: u64,
	pub abilities: Vec<AbilityId>,
}
impl AvailableAbilities {
	pub fn new(tag: u64, abilities: Vec<AbilityId>) -> Self {
		Self { tag, abilities }
	}
}

#[derive(Debug, Default, Clone)]
pub struct Common {
	pub player_id: u32,
	pub minerals: u32,
	pub vespene: u32,
	pub food_cap: u32,
	pub food_used: u32,
	pub food_army: u32,
	pub food_workers: u32,
	pub idle_worker_count: u32,
	pub army_count: u32,
}
