//! [`Bot`] struct and it's helpers.

use crate::{
	clusters::{is_cluster_candidate, Clusters},
	expansions::{find_expansions, resource_center, Expansion},
	footprint::classify,
	game_data::{Cost, GameData},
	game_info::GameInfo,
	game_state::{Alliance, DisplayType, Observation},
	geometry::{with_neighbours4, Point2},
	grid::{Grid, SharedGrid},
	ids::{AbilityId, UnitTypeId},
	path_maps::{PathMapBuilder, PathMaps, PathOrigins, PublishedMaps, StopSignal},
	settings::Settings,
	unit::{DataForUnit, SharedUnitData, Unit, UnitAbilities},
	units::{AllUnits, Enemies, Units},
	AbilitySource, GameSource, SC2Result,
};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use rustc_hash::FxHashMap;
use std::{sync::Arc, thread::JoinHandle};

pub type Rs<T> = Arc<T>;
pub type Rw<T> = Arc<RwLock<T>>;
pub type Reader<'a, T> = RwLockReadGuard<'a, T>;
pub type Writer<'a, T> = RwLockWriteGuard<'a, T>;

/// Scoped access to shared data, guard is released when dropped.
pub trait Locked<T> {
	fn lock_read(&self) -> Reader<T>;
	fn lock_write(&self) -> Writer<T>;
}
impl<T> Locked<T> for Rw<T> {
	#[inline]
	fn lock_read(&self) -> Reader<T> {
		self.read()
	}
	#[inline]
	fn lock_write(&self) -> Writer<T> {
		self.write()
	}
}

/// Result of [`step`](Bot::step).
#[variant_checkers]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
	/// State was rebuilt from new observation.
	Completed,
	/// Observation wasn't received or bot isn't launched, state of previous step kept untouched.
	Abandoned,
}

type UnitCallback = Box<dyn FnMut(&Unit)>;

/// Main bot struct.
///
/// Created with [`start`](Self::start) (or [`new`](Self::new) + [`launch`](Self::launch)) and then fed with [`step`](Self::step) each game step.
/// Stops the path map builder when dropped.
pub struct Bot {
	/// Information about map.
	pub game_info: GameInfo,
	/// Constant information about unit types.
	pub game_data: Rs<GameData>,
	/// Observation of the last completed step, without units (they're in [`units`](Self::units)).
	pub state: Observation,
	/// Options the bot was started with.
	pub settings: Settings,
	data_for_unit: SharedUnitData,
	abilities_units: Rw<FxHashMap<u64, UnitAbilities>>,
	grid: SharedGrid,
	/// Structured collection of units.
	pub units: AllUnits,
	/// Opponent's units including remembered ones, and clusters of them.
	pub enemies: Enemies,
	orders: FxHashMap<AbilityId, usize>,
	/// Game loop of the last completed step.
	pub game_loop: u32,
	/// In-game time in seconds.
	pub time: f32,
	/// Amount of minerals bot has.
	pub minerals: u32,
	/// Amount of gas bot has.
	pub vespene: u32,
	/// Amount of supply used by army.
	pub supply_army: u32,
	/// Amount of supply used by workers.
	pub supply_workers: u32,
	/// The supply limit.
	pub supply_cap: u32,
	/// Total supply used.
	pub supply_used: u32,
	/// Amount of free supply.
	pub supply_left: u32,
	/// Bot has at least one reaper.
	pub reaper_exists: bool,
	/// Bot's starting location.
	pub start_location: Point2,
	/// Opponent's starting location.
	pub enemy_start: Point2,
	/// Bot's resource center on start location.
	pub start_center: Point2,
	/// Opponents's resource center on start location.
	pub enemy_start_center: Point2,
	/// All expansions stored in (location, resource center) pairs.
	pub expansions: Vec<Expansion>,
	path_maps: Rs<PublishedMaps>,
	stop_signal: StopSignal,
	path_builder: Option<JoinHandle<()>>,
	on_unit_created: Option<UnitCallback>,
	launched: bool,
}

impl Bot {
	/// Bot which isn't connected to a game yet.
	///
	/// Register callbacks here and then [`launch`](Self::launch) it,
	/// or use [`start`](Self::start) when no callbacks needed.
	pub fn new(settings: Settings) -> Self {
		let game_data = Rs::<GameData>::default();
		let abilities_units = Rw::<FxHashMap<u64, UnitAbilities>>::default();
		let data_for_unit = Rs::new(DataForUnit {
			game_data: Rs::clone(&game_data),
			abilities_units: Rs::clone(&abilities_units),
		});
		Self {
			game_info: Default::default(),
			game_data,
			state: Default::default(),
			settings,
			data_for_unit,
			abilities_units,
			grid: Default::default(),
			units: Default::default(),
			enemies: Default::default(),
			orders: Default::default(),
			game_loop: 0,
			time: 0.0,
			minerals: 0,
			vespene: 0,
			supply_army: 0,
			supply_workers: 0,
			supply_cap: 0,
			supply_used: 0,
			supply_left: 0,
			reaper_exists: false,
			start_location: Default::default(),
			enemy_start: Default::default(),
			start_center: Default::default(),
			enemy_start_center: Default::default(),
			expansions: Default::default(),
			path_maps: Default::default(),
			stop_signal: StopSignal::new(),
			path_builder: None,
			on_unit_created: None,
			launched: false,
		}
	}

	/// Creates bot and [`launch`](Self::launch)es it.
	pub fn start<S, A>(source: &mut S, abilities: &mut A, settings: Settings) -> SC2Result<Self>
	where
		S: GameSource,
		A: AbilitySource,
	{
		let mut bot = Self::new(settings);
		bot.launch(source, abilities)?;
		Ok(bot)
	}

	/// Requests static data and first observation, finds start locations and expansions,
	/// queries abilities of start units and launches path map builder (unless disabled in settings).
	///
	/// Units of the first observation are reported to [`on_unit_created`](Self::on_unit_created)
	/// callback, if it's already registered.
	pub fn launch<S: GameSource, A: AbilitySource>(&mut self, source: &mut S, abilities: &mut A) -> SC2Result<()> {
		if self.launched {
			return Err("Bot is already launched".into());
		}
		let game_info = source.game_info()?;
		if !game_info.is_consistent() {
			return Err(format!("Grids of map {:?} don't match its size", game_info.map_name).into());
		}
		let game_data = Rs::new(source.game_data()?);
		let observation = source.observation()?;

		*self.grid.lock_write() = Grid::new(&game_info);
		self.data_for_unit = Rs::new(DataForUnit {
			game_data: Rs::clone(&game_data),
			abilities_units: Rs::clone(&self.abilities_units),
		});
		self.game_info = game_info;
		self.game_data = game_data;
		self.launched = true;

		self.prepare_step(observation);
		self.prepare_start();
		self.update_abilities(abilities);

		if self.settings.path.enabled {
			let origins = PathOrigins {
				home: self.start_location,
				enemy: self.enemy_start,
				expansions: self.expansions.iter().map(|(location, _)| *location).collect(),
			};
			let builder = PathMapBuilder::new(
				Rs::clone(&self.grid),
				origins,
				self.settings.path.clone(),
				self.stop_signal.clone(),
				Rs::clone(&self.path_maps),
			);
			self.path_builder = Some(builder.spawn()?);
		}
		Ok(())
	}

	fn prepare_start(&mut self) {
		self.start_location = match self.units.my.townhalls.first() {
			Some(townhall) => townhall.position,
			None => match self.units.my.all.center() {
				Some(center) => center,
				None => {
					warn!("Bot has no units on start, using map center as start location");
					self.game_info.map_center
				}
			},
		};
		self.enemy_start = match self.game_info.start_locations.first() {
			Some(location) => *location,
			None => {
				warn!("Map has no start locations for opponent, mirroring own start");
				self.game_info.map_center * 2.0 - self.start_location
			}
		};

		let resources = &self.units.resources;
		self.start_center = resource_center(resources, self.start_location);
		self.enemy_start_center = resource_center(resources, self.enemy_start);
		self.expansions = find_expansions(resources, &self.game_info, self.start_location, self.enemy_start);
		debug!(
			"Start location {:?}, enemy start {:?}, {} expansions found",
			self.start_location,
			self.enemy_start,
			self.expansions.len()
		);
	}

	/// Processes one game step.
	///
	/// Never fails: if observation can't be received the step is abandoned
	/// and state of the previous step stays as it was.
	pub fn step<S: GameSource, A: AbilitySource>(&mut self, source: &mut S, abilities: &mut A) -> StepOutcome {
		if !self.launched {
			warn!("Step requested before bot is launched");
			return StepOutcome::Abandoned;
		}
		let observation = match source.observation() {
			Ok(observation) => observation,
			Err(e) => {
				error!("Can't get observation: {}", e);
				return StepOutcome::Abandoned;
			}
		};
		self.prepare_step(observation);
		self.update_abilities(abilities);
		StepOutcome::Completed
	}

	fn prepare_step(&mut self, mut observation: Observation) {
		let raw_units = std::mem::take(&mut observation.raw.units);
		let previous_all = std::mem::take(&mut self.units.all);
		let previous_enemies = std::mem::take(&mut self.enemies.all);
		self.units.clear();

		let mut created = Vec::new();
		let generation = {
			let mut grid = self.grid.lock_write();
			let generation = grid.renew(&self.game_info, &observation.raw.visibility);

			for raw in raw_units {
				let u = Unit::from_raw(Rs::clone(&self.data_for_unit), raw);

				match u.alliance {
					Alliance::Own => {
						if !previous_all.contains_tag(u.tag) {
							created.push(u.tag);
						}
						self.units.my.push(u.clone());
					}
					Alliance::Enemy => self.units.enemy.push(u.clone()),
					Alliance::Neutral => {
						if u.is_mineral() {
							self.units.mineral_fields.push(u.clone());
							self.units.resources.push(u.clone());
						} else if u.is_geyser() {
							self.units.vespene_geysers.push(u.clone());
							self.units.resources.push(u.clone());
						} else {
							self.units.destructables.push(u.clone());
						}
					}
					Alliance::Ally => warn!("Allied unit {} of type {:?} isn't supported", u.tag, u.type_id),
				}

				if !u.is_flying && (u.is_structure() || u.is_neutral()) {
					if let Some(footprint) = classify(&u) {
						grid.stamp(&footprint);
					}
				}
				if u.is_enemy() && u.is_visible() && u.is_ready() && !u.is_worker() && u.can_attack_ground() {
					grid.mark_danger(
						u.position,
						u.ground_range() + u.radius + self.settings.danger_margin,
					);
				}

				self.units.all.push(u);
			}

			self.reaper_exists = !self.units.my.units.of_type(UnitTypeId::Reaper).is_empty();
			grid.set_reaper_exists(self.reaper_exists);
			generation
		};
		self.stop_signal.notify(generation);

		if let Some(callback) = self.on_unit_created.as_mut() {
			for tag in &created {
				if let Some(u) = self.units.all.get(*tag) {
					callback(u);
				}
			}
		}

		let mut enemies = self.units.enemy.all.clone();
		enemies.extend(self.remembered_enemies(&previous_enemies));
		self.units.my.group_by_type();
		self.units.enemy.group_by_type();
		self.enemies = Enemies {
			all_ready: enemies.ready(),
			visible: enemies.visible(),
			by_type: enemies.iter().collect(),
			clusters: std::mem::take(&mut self.enemies.clusters),
			all: enemies,
		};
		if self.settings.clusters_each_step {
			self.find_clusters();
		}

		self.update_counters(observation);
	}

	/// Enemies from previous step which are gone from current observation,
	/// but could still stand in the fog nearby. Returned as snapshots.
	fn remembered_enemies(&self, previous: &Units) -> Vec<Unit> {
		let grid = self.grid.lock_read();
		previous
			.iter()
			.filter(|u| !self.units.all.contains_tag(u.tag))
			.filter_map(|u| {
				let tile = u.position.tile();
				let height = grid.height_at(tile);
				let hidden = with_neighbours4(tile)
					.iter()
					.any(|&t| !grid.is_visible(t) && grid.height_at(t) == height && grid.is_pathable(t));
				if hidden {
					let mut u = u.clone();
					u.display_type = DisplayType::Snapshot;
					Some(u)
				} else {
					trace!("Enemy {} of type {:?} was scouted, forgetting it", u.tag, u.type_id);
					None
				}
			})
			.collect()
	}

	fn update_counters(&mut self, observation: Observation) {
		self.game_loop = observation.game_loop;
		self.time = (observation.game_loop as f32) / 22.4;
		let common = &observation.common;
		self.minerals = common.minerals;
		self.vespene = common.vespene;
		self.supply_army = common.food_army;
		self.supply_workers = common.food_workers;
		self.supply_cap = common.food_cap;
		self.supply_used = common.food_used;
		self.supply_left = self.supply_cap.saturating_sub(self.supply_used);

		let mut orders = FxHashMap::default();
		self.units.my.all.iter().for_each(|u| {
			u.orders.iter().for_each(|order| {
				*orders.entry(order.ability).or_default() += 1;
			})
		});
		self.orders = orders;
		self.state = observation;
	}

	fn update_abilities<A: AbilitySource>(&mut self, source: &mut A) {
		let tags = self.units.my.all.tags().copied().collect::<Vec<u64>>();
		let mut merged = FxHashMap::<u64, UnitAbilities>::default();
		if !tags.is_empty() {
			for ignore_cost in [false, true] {
				let list = match source.available_abilities(&tags, ignore_cost) {
					Ok(list) => list,
					Err(e) => {
						error!("Can't get available abilities (ignoring cost: {}): {}", ignore_cost, e);
						continue;
					}
				};
				for entry in list {
					if !self.units.all.contains_tag(entry.tag) {
						warn!("Received abilities of unknown unit {}", entry.tag);
						continue;
					}
					let abilities = merged.entry(entry.tag).or_default();
					if ignore_cost {
						abilities.ignoring_cost.extend(entry.abilities);
					} else {
						abilities.available.extend(entry.abilities);
					}
				}
			}
		}
		*self.abilities_units.lock_write() = merged;
	}

	/// Groups ready fighting enemies into [`clusters`](Enemies::clusters).
	/// Called every step unless [`clusters_each_step`](Settings::clusters_each_step) is off.
	pub fn find_clusters(&mut self) {
		let candidates = self.enemies.all_ready.iter().filter(|u| is_cluster_candidate(u));
		self.enemies.clusters = Clusters::find(candidates, self.settings.cluster_margin);
	}

	/// Registers function called once for every new bot's unit.
	/// Units present on start are reported only if it's registered before [`launch`](Self::launch).
	pub fn on_unit_created<F: FnMut(&Unit) + 'static>(&mut self, callback: F) {
		self.on_unit_created = Some(Box::new(callback));
	}

	/// Latest path maps, empty until builder finishes first cycle.
	pub fn path_maps(&self) -> Rs<PathMaps> {
		self.path_maps.load()
	}
	/// Read access to the grid. Don't keep the guard for long, it blocks next step.
	pub fn grid(&self) -> Reader<Grid> {
		self.grid.lock_read()
	}
	/// Grid handle shared with path map builder.
	pub fn shared_grid(&self) -> SharedGrid {
		Rs::clone(&self.grid)
	}
	/// Handle to stop path map builder.
	pub fn stop_signal(&self) -> StopSignal {
		self.stop_signal.clone()
	}
	/// Number of bot's units executing given ability.
	pub fn ordered(&self, ability: AbilityId) -> usize {
		self.orders.get(&ability).copied().unwrap_or(0)
	}
	/// Cost of unit as reported by the game, zero for unknown types.
	pub fn get_unit_cost(&self, unit: UnitTypeId) -> Cost {
		self.game_data
			.units
			.get(&unit)
			.map(|data| data.cost())
			.unwrap_or_default()
	}
	/// Checks if bot has enough resources and supply to build given unit type.
	pub fn can_afford(&self, unit: UnitTypeId, check_supply: bool) -> bool {
		let cost = self.get_unit_cost(unit);
		if self.minerals < cost.minerals || self.vespene < cost.vespene {
			return false;
		}
		if check_supply && (self.supply_left as f32) < cost.supply {
			return false;
		}
		true
	}

	/// Stops path map builder and waits for it to finish.
	pub fn stop(&mut self) {
		self.stop_signal.stop();
		if let Some(handle) = self.path_builder.take() {
			if handle.join().is_err() {
				error!("Path map builder panicked");
			}
		}
	}
}

impl Drop for Bot {
	fn drop(&mut self) {
		self.stop();
	}
}
