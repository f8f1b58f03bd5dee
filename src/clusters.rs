//! Grouping of enemy army into clusters of units able to support each other.

use crate::{distance::Distance, geometry::Point2, unit::Unit, units::Units};
use rustc_hash::FxHashMap;

/// Default gap added to the engagement range when checking if two units are neighbours.
pub const CLUSTER_MARGIN: f32 = 2.0;

/// Checks if unit takes part in fights: workers and non-defensive structures don't.
pub fn is_cluster_candidate(u: &Unit) -> bool {
	!u.is_worker() && (u.is_defensive() || !u.is_structure())
}

/// Units connected by engagement range and their total supply.
#[derive(Default, Clone)]
pub struct Cluster {
	pub units: Units,
	/// Sum of supply cost of units in cluster.
	pub food: f32,
}
impl Cluster {
	fn absorb(&mut self, u: &Unit) {
		self.food += u.supply_cost();
		self.units.push(u.clone());
	}
	pub fn len(&self) -> usize {
		self.units.len()
	}
	pub fn is_empty(&self) -> bool {
		self.units.is_empty()
	}
	pub fn contains(&self, tag: u64) -> bool {
		self.units.contains_tag(tag)
	}
	/// Mean position of units.
	pub fn center(&self) -> Option<Point2> {
		self.units.center()
	}
}

/// Partition of candidate units into clusters.
/// Every candidate belongs to exactly one cluster.
#[derive(Default, Clone)]
pub struct Clusters {
	list: Vec<Cluster>,
	membership: FxHashMap<u64, usize>,
}
impl Clusters {
	/// Splits units into connected components, where two units are connected if
	/// distance between them is less than the bigger of their engagement ranges plus `margin`.
	pub fn find<'a, I>(candidates: I, margin: f32) -> Self
	where
		I: IntoIterator<Item = &'a Unit>,
	{
		let units = candidates.into_iter().collect::<Vec<_>>();
		let ranges = units.iter().map(|u| u.engagement_range()).collect::<Vec<_>>();

		let mut neighbours = vec![Vec::new(); units.len()];
		for i in 0..units.len() {
			for j in i + 1..units.len() {
				if units[i].is_closer(ranges[i].max(ranges[j]) + margin, units[j]) {
					neighbours[i].push(j);
					neighbours[j].push(i);
				}
			}
		}

		let mut list = Vec::<Cluster>::new();
		let mut membership = FxHashMap::default();
		let mut assigned = vec![false; units.len()];
		let mut stack = Vec::new();

		for start in 0..units.len() {
			if assigned[start] {
				continue;
			}
			let index = list.len();
			let mut cluster = Cluster::default();
			assigned[start] = true;
			stack.push(start);
			while let Some(i) = stack.pop() {
				cluster.absorb(units[i]);
				membership.insert(units[i].tag, index);
				for &n in &neighbours[i] {
					if !assigned[n] {
						assigned[n] = true;
						stack.push(n);
					}
				}
			}
			list.push(cluster);
		}

		Self { list, membership }
	}

	pub fn len(&self) -> usize {
		self.list.len()
	}
	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}
	pub fn iter(&self) -> std::slice::Iter<Cluster> {
		self.list.iter()
	}
	pub fn get(&self, index: usize) -> Option<&Cluster> {
		self.list.get(index)
	}
	/// Index of cluster unit with given tag belongs to.
	pub fn index_of(&self, tag: u64) -> Option<usize> {
		self.membership.get(&tag).copied()
	}
	/// Cluster unit with given tag belongs to.
	pub fn cluster_of(&self, tag: u64) -> Option<&Cluster> {
		self.index_of(tag).and_then(|i| self.list.get(i))
	}
	/// Cluster with the biggest supply.
	pub fn largest(&self) -> Option<&Cluster> {
		self.list
			.iter()
			.max_by(|a, b| a.food.partial_cmp(&b.food).unwrap_or(std::cmp::Ordering::Equal))
	}
}
impl<'a> IntoIterator for &'a Clusters {
	type Item = &'a Cluster;
	type IntoIter = std::slice::Iter<'a, Cluster>;

	fn into_iter(self) -> Self::IntoIter {
		self.list.iter()
	}
}
