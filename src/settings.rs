//! Options used to configure bot and path map builder.

use crate::{
	clusters::CLUSTER_MARGIN,
	path_maps::{Origin, PathMapKind},
};
use itertools::Itertools;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Options of per-step state processing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Settings {
	/// Gap added to engagement range when grouping enemies into clusters. [Default: `2`]
	pub cluster_margin: f32,
	/// Recompute enemy clusters each step. [Default: `true`]
	pub clusters_each_step: bool,
	/// Gap added to enemy's ground range when marking dangerous tiles. [Default: `1`]
	pub danger_margin: f32,
	/// Options of background path map computation.
	pub path: PathSettings,
}
impl Default for Settings {
	fn default() -> Self {
		Self {
			cluster_margin: CLUSTER_MARGIN,
			clusters_each_step: true,
			danger_margin: 1.0,
			path: Default::default(),
		}
	}
}
impl Settings {
	pub fn with_cluster_margin(mut self, margin: f32) -> Self {
		self.cluster_margin = margin;
		self
	}
	pub fn with_clusters_each_step(mut self, enabled: bool) -> Self {
		self.clusters_each_step = enabled;
		self
	}
	pub fn with_danger_margin(mut self, margin: f32) -> Self {
		self.danger_margin = margin;
		self
	}
	pub fn with_path(mut self, path: PathSettings) -> Self {
		self.path = path;
		self
	}
}

/// Options of [`PathMapBuilder`](crate::path_maps::PathMapBuilder).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathSettings {
	/// Start background thread at all. [Default: `true`]
	pub enabled: bool,
	/// Maximum time between two rebuilds when grid doesn't change. [Default: `1s`]
	pub cadence: Duration,
	/// Extra cost of stepping on a dangerous tile for safe maps. [Default: `20`]
	pub danger_penalty: f32,
	/// Maps computed each cycle. [Default: every kind from home and ground from enemy start]
	pub targets: Vec<(PathMapKind, Origin)>,
	/// Also compute ground map from every expansion. [Default: `true`]
	pub expansion_maps: bool,
}
impl Default for PathSettings {
	fn default() -> Self {
		Self {
			enabled: true,
			cadence: Duration::from_secs(1),
			danger_penalty: 20.0,
			targets: vec![
				(PathMapKind::Ground, Origin::Home),
				(PathMapKind::GroundSafe, Origin::Home),
				(PathMapKind::Reaper, Origin::Home),
				(PathMapKind::ReaperSafe, Origin::Home),
				(PathMapKind::Ground, Origin::Enemy),
			],
			expansion_maps: true,
		}
	}
}
impl PathSettings {
	pub fn disabled() -> Self {
		Self {
			enabled: false,
			..Default::default()
		}
	}
	pub fn with_cadence(mut self, cadence: Duration) -> Self {
		self.cadence = cadence;
		self
	}
	pub fn with_danger_penalty(mut self, penalty: f32) -> Self {
		self.danger_penalty = penalty;
		self
	}
	pub fn with_targets(mut self, targets: Vec<(PathMapKind, Origin)>) -> Self {
		self.targets = targets;
		self
	}
	pub fn with_expansion_maps(mut self, enabled: bool) -> Self {
		self.expansion_maps = enabled;
		self
	}
	/// Every map to compute, given number of known expansions.
	pub fn all_targets(&self, expansions: usize) -> Vec<(PathMapKind, Origin)> {
		let mut targets = self.targets.clone();
		if self.expansion_maps {
			targets.extend((0..expansions).map(|i| (PathMapKind::Ground, Origin::Expansion(i))));
		}
		targets.into_iter().unique().collect()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let settings = Settings::default();
		assert_eq!(settings.cluster_margin, 2.0);
		assert!(settings.clusters_each_step);
		assert!(settings.path.enabled);
		assert_eq!(settings.path.cadence, Duration::from_secs(1));
		assert_eq!(settings.path.targets.len(), 5);
	}

	#[test]
	fn expansion_targets_appended() {
		let path = PathSettings::default().with_targets(vec![
			(PathMapKind::Ground, Origin::Home),
			(PathMapKind::Ground, Origin::Expansion(1)),
		]);
		assert_eq!(
			path.all_targets(3),
			vec![
				(PathMapKind::Ground, Origin::Home),
				(PathMapKind::Ground, Origin::Expansion(1)),
				(PathMapKind::Ground, Origin::Expansion(0)),
				(PathMapKind::Ground, Origin::Expansion(2)),
			]
		);
		assert_eq!(path.with_expansion_maps(false).all_targets(3).len(), 2);
	}
}
