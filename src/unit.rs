//! Stuff for convenient interaction with [`Unit`]s.
#![allow(missing_docs)]

use crate::{
	bot::{Locked, Rs, Rw},
	game_data::{Attribute, GameData, UnitTypeData},
	game_state::{Alliance, DisplayType, RawUnit, UnitOrder},
	geometry::Point2,
	ids::{AbilityId, UnitTypeId},
};
use rustc_hash::{FxHashMap, FxHashSet};

/// Abilities available to one unit on current step.
#[derive(Debug, Default, Clone)]
pub struct UnitAbilities {
	/// Abilities unit can use right now.
	pub available: FxHashSet<AbilityId>,
	/// Abilities unit could use if bot had enough resources.
	pub ignoring_cost: FxHashSet<AbilityId>,
}

#[derive(Default, Clone)]
pub(crate) struct DataForUnit {
	pub game_data: Rs<GameData>,
	pub abilities_units: Rw<FxHashMap<u64, UnitAbilities>>,
}

pub(crate) type SharedUnitData = Rs<DataForUnit>;

/// Unit structure contains raw data received from the game
/// and helper methods for it's analysis.
#[derive(Clone)]
pub struct Unit {
	data: SharedUnitData,

	/// How unit is displayed (i.e. visibility of unit).
	pub display_type: DisplayType,
	/// Unit is owned, enemy or just neutral.
	pub alliance: Alliance,
	/// Unique and constant for each unit tag. Used to find exactly the same unit in bunch of [`Units`].
	///
	/// [`Units`]: crate::units::Units
	pub tag: u64,
	/// The type of unit.
	pub type_id: UnitTypeId,
	/// Player id of the owner.
	pub owner: u32,
	/// Position on 2D grid.
	pub position: Point2,
	/// Unit rotation angle (i.e. the direction unit is facing).
	pub facing: f32,
	/// Radius of the unit.
	pub radius: f32,
	/// The progress of building construction. Value from `0` to `1`.
	pub build_progress: f32,
	pub is_flying: bool,
	pub is_burrowed: bool,
	/// Is hallucination created by protoss sentry.
	pub is_hallucination: bool,

	/// Current health of unit.
	///
	/// Note: Not populated for snapshots.
	pub health: Option<u32>,
	pub health_max: Option<u32>,
	pub shield: Option<u32>,
	pub shield_max: Option<u32>,
	pub energy: Option<u32>,
	/// Amount of minerals left in mineral field.
	pub mineral_contents: Option<u32>,
	/// Amount of vespene gas left in vespene geyser.
	pub vespene_contents: Option<u32>,
	/// Current orders of unit.
	///
	/// Note: Not populated for enemies and snapshots.
	pub orders: Vec<UnitOrder>,
}

impl Unit {
	pub(crate) fn from_raw(data: SharedUnitData, u: RawUnit) -> Self {
		Self {
			data,
			display_type: u.display_type,
			alliance: u.alliance,
			tag: u.tag,
			type_id: u.type_id,
			owner: u.owner,
			position: u.position,
			facing: u.facing,
			radius: u.radius,
			build_progress: u.build_progress,
			is_flying: u.is_flying,
			is_burrowed: u.is_burrowed,
			is_hallucination: u.is_hallucination,
			health: u.health,
			health_max: u.health_max,
			shield: u.shield,
			shield_max: u.shield_max,
			energy: u.energy,
			mineral_contents: u.mineral_contents,
			vespene_contents: u.vespene_contents,
			orders: u.orders,
		}
	}

	/// Data of unit's type, `None` if game data doesn't know this type.
	pub fn type_data(&self) -> Option<&UnitTypeData> {
		self.data.game_data.units.get(&self.type_id)
	}
	pub fn is_worker(&self) -> bool {
		self.type_id.is_worker()
	}
	pub fn is_townhall(&self) -> bool {
		self.type_id.is_townhall()
	}
	pub fn is_mineral(&self) -> bool {
		self.type_id.is_mineral_field()
	}
	pub fn is_geyser(&self) -> bool {
		self.type_id.is_vespene_geyser()
	}
	/// Static defense, bunkers, batteries and planetary fortresses.
	pub fn is_defensive(&self) -> bool {
		self.type_id.is_defensive()
	}
	pub fn is_ready(&self) -> bool {
		self.build_progress == 1.0
	}
	pub fn attributes(&self) -> &[Attribute] {
		match self.type_data() {
			Some(data) => &data.attributes,
			None => &[],
		}
	}
	pub fn has_attribute(&self, attribute: Attribute) -> bool {
		self.attributes().contains(&attribute)
	}
	pub fn is_structure(&self) -> bool {
		self.has_attribute(Attribute::Structure)
	}

	pub fn is_visible(&self) -> bool {
		self.display_type.is_visible()
	}
	pub fn is_snapshot(&self) -> bool {
		self.display_type.is_snapshot()
	}
	pub fn is_hidden(&self) -> bool {
		self.display_type.is_hidden()
	}
	pub fn is_placeholder(&self) -> bool {
		self.display_type.is_placeholder()
	}
	pub fn is_mine(&self) -> bool {
		self.alliance.is_mine()
	}
	pub fn is_enemy(&self) -> bool {
		self.alliance.is_enemy()
	}
	pub fn is_neutral(&self) -> bool {
		self.alliance.is_neutral()
	}
	pub fn is_ally(&self) -> bool {
		self.alliance.is_ally()
	}

	/// Supply used by unit, `0` for structures and unknown types.
	pub fn supply_cost(&self) -> f32 {
		self.type_data().map_or(0.0, |data| data.food_required)
	}
	/// Range of unit's ground weapon, `0` if it can't attack ground.
	pub fn ground_range(&self) -> f32 {
		self.type_data().map_or(0.0, |data| data.ground_range())
	}
	/// Range of unit's air weapon, `0` if it can't attack air.
	pub fn air_range(&self) -> f32 {
		self.type_data().map_or(0.0, |data| data.air_range())
	}
	/// The biggest of ground and air ranges, used to decide which units fight together.
	pub fn engagement_range(&self) -> f32 {
		self.ground_range().max(self.air_range())
	}
	pub fn can_attack_ground(&self) -> bool {
		self.type_data()
			.map_or(false, |data| data.weapons.iter().any(|w| w.target.hits_ground()))
	}
	pub fn can_attack_air(&self) -> bool {
		self.type_data()
			.map_or(false, |data| data.weapons.iter().any(|w| w.target.hits_air()))
	}

	/// Abilities available for unit on current step.
	pub fn abilities(&self) -> Option<UnitAbilities> {
		self.data.abilities_units.lock_read().get(&self.tag).cloned()
	}
	/// Checks if unit can use given ability right now.
	pub fn has_ability(&self, ability: AbilityId) -> bool {
		self.data
			.abilities_units
			.lock_read()
			.get(&self.tag)
			.map_or(false, |abilities| abilities.available.contains(&ability))
	}
	/// Checks if unit would be able to use given ability if bot had enough resources.
	pub fn has_ability_ignoring_cost(&self, ability: AbilityId) -> bool {
		self.data
			.abilities_units
			.lock_read()
			.get(&self.tag)
			.map_or(false, |abilities| abilities.ignoring_cost.contains(&ability))
	}
}

impl std::fmt::Debug for Unit {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Unit")
			.field("tag", &self.tag)
			.field("type_id", &self.type_id)
			.field("alliance", &self.alliance)
			.field("display_type", &self.display_type)
			.field("position", &self.position)
			.finish()
	}
}
