// #![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Spatial and tactical core for StarCraft II bots.
//!
//! Each step [`Bot`](bot::Bot) turns a raw [`Observation`](game_state::Observation)
//! into typed unit collections, a tile [`Grid`](grid::Grid) with occupancy of structures,
//! rocks and minerals, and groups of enemy units ([`Clusters`](clusters::Clusters)).
//! Distance maps over the grid are computed on a background thread by
//! [`PathMapBuilder`](path_maps::PathMapBuilder).
//!
//! Talking to the game itself is not part of this crate, it's done through
//! [`GameSource`] and [`AbilitySource`] implemented by the caller.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate lazy_static;
#[macro_use]
pub extern crate sc2_tactics_macro;
#[macro_use]
extern crate itertools;
#[macro_use]
extern crate maplit;
#[macro_use]
extern crate log;

/// The most frequent used items and various traits here.
/// Prefered usage: `use sc2_tactics::prelude::*;`.
pub mod prelude {
	pub use crate::{
		bot::{Bot, StepOutcome},
		clusters::{Cluster, Clusters},
		distance::*,
		geometry::{Point2, Tile},
		ids::*,
		path_maps::{Origin, PathMapKind, PathMaps, StopSignal},
		settings::{PathSettings, Settings},
		unit::Unit,
		units::Units,
		AbilitySource, GameSource, SC2Result,
	};
}

pub mod bot;
pub mod clusters;
pub mod distance;
pub mod expansions;
pub mod footprint;
pub mod game_data;
pub mod game_info;
pub mod game_state;
pub mod geometry;
pub mod grid;
pub mod ids;
pub mod path_maps;
pub mod pixel_map;
pub mod settings;
pub mod unit;
pub mod units;
pub mod utils;

use game_data::GameData;
use game_info::GameInfo;
use game_state::{AvailableAbilities, Observation};
use std::error::Error;

/// Result returned by every call to outer world.
pub type SC2Result<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Supplier of game information, usually a connection to the game.
pub trait GameSource {
	/// Static map information, requested once at start.
	fn game_info(&mut self) -> SC2Result<GameInfo>;
	/// Constant data about unit types, requested once at start.
	fn game_data(&mut self) -> SC2Result<GameData>;
	/// Current state of the game, requested every step.
	fn observation(&mut self) -> SC2Result<Observation>;
}

/// Answers which abilities units can use right now.
pub trait AbilitySource {
	/// Returns abilities for each of given `tags`.
	/// With `ignore_resource_requirements` abilities which bot can't afford are included too.
	fn available_abilities(
		&mut self,
		tags: &[u64],
		ignore_resource_requirements: bool,
	) -> SC2Result<Vec<AvailableAbilities>>;
}
