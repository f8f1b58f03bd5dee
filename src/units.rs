//! Data structures for storing units, fast filtering and finding ones that needed.
#![allow(missing_docs)]

use crate::{clusters::Clusters, distance::Distance, geometry::Point2, ids::UnitTypeId, unit::Unit};
use indexmap::{
	map::{IntoIter, Iter, Keys, Values, ValuesMut},
	IndexMap,
};
use rustc_hash::{FxHashMap, FxHasher};
use std::{
	cmp::Ordering,
	hash::BuildHasherDefault,
	iter::{FromIterator, Sum},
	ops::Index,
};

type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Structured collection of units.
#[derive(Default, Clone)]
pub struct AllUnits {
	/// All units visible this step, indexed by tag.
	pub all: Units,
	/// Bot's units and structures.
	pub my: PlayerUnits,
	/// Visible opponent's units and structures.
	pub enemy: PlayerUnits,
	pub mineral_fields: Units,
	pub vespene_geysers: Units,
	/// Mineral fields and vespene geysers.
	pub resources: Units,
	/// Rocks and other neutral obstacles.
	pub destructables: Units,
}
impl AllUnits {
	pub(crate) fn clear(&mut self) {
		self.all.clear();
		self.my.clear();
		self.enemy.clear();
		self.mineral_fields.clear();
		self.vespene_geysers.clear();
		self.resources.clear();
		self.destructables.clear();
	}
}

#[derive(Default, Clone)]
pub struct PlayerUnits {
	pub all: Units,
	pub units: Units,
	pub structures: Units,
	pub townhalls: Units,
	pub workers: Units,
	/// [`all`](Self::all) grouped by type.
	pub by_type: UnitsByTypes,
}
impl PlayerUnits {
	pub(crate) fn clear(&mut self) {
		self.all.clear();
		self.units.clear();
		self.structures.clear();
		self.townhalls.clear();
		self.workers.clear();
		self.by_type = Default::default();
	}
	pub(crate) fn group_by_type(&mut self) {
		self.by_type = self.all.iter().collect();
	}
	pub(crate) fn push(&mut self, u: Unit) {
		if u.is_structure() {
			if u.is_townhall() {
				self.townhalls.push(u.clone());
			}
			self.structures.push(u.clone());
		} else {
			if u.is_worker() {
				self.workers.push(u.clone());
			}
			self.units.push(u.clone());
		}
		self.all.push(u);
	}
}

/// Views of opponent's units, including remembered ones.
#[derive(Default, Clone)]
pub struct Enemies {
	/// Visible units and snapshots of units that went out of vision.
	pub all: Units,
	/// Finished units from [`all`](Self::all).
	pub all_ready: Units,
	/// Units visible on current step.
	pub visible: Units,
	/// [`all`](Self::all) grouped by type.
	pub by_type: UnitsByTypes,
	/// Groups of fighting units, see [`Clusters`].
	pub clusters: Clusters,
}

/// Units grouped by their type.
#[derive(Default, Clone)]
pub struct UnitsByTypes(FxHashMap<UnitTypeId, Units>);
impl UnitsByTypes {
	/// Units of given type, empty if there's none.
	pub fn get(&self, type_id: UnitTypeId) -> Units {
		self.0.get(&type_id).cloned().unwrap_or_default()
	}
	pub fn count(&self, type_id: UnitTypeId) -> usize {
		self.0.get(&type_id).map_or(0, |units| units.len())
	}
	pub fn types(&self) -> impl Iterator<Item = UnitTypeId> + '_ {
		self.0.keys().copied()
	}
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<'a> FromIterator<&'a Unit> for UnitsByTypes {
	fn from_iter<I: IntoIterator<Item = &'a Unit>>(iter: I) -> Self {
		let mut groups = FxHashMap::<UnitTypeId, Units>::default();
		for u in iter {
			groups.entry(u.type_id).or_default().push(u.clone());
		}
		Self(groups)
	}
}

/// Collection of units keyed by tag. Keeps insertion order.
#[derive(Default, Clone)]
pub struct Units(FxIndexMap<u64, Unit>);
impl Units {
	#[inline]
	pub fn new() -> Self {
		Units(FxIndexMap::default())
	}

	#[inline]
	pub fn first(&self) -> Option<&Unit> {
		self.0.values().next()
	}

	#[inline]
	pub fn push(&mut self, u: Unit) -> Option<Unit> {
		self.0.insert(u.tag, u)
	}

	#[inline]
	pub fn remove(&mut self, tag: u64) -> Option<Unit> {
		self.0.shift_remove(&tag)
	}

	#[inline]
	pub fn iter(&self) -> Values<u64, Unit> {
		self.0.values()
	}

	#[inline]
	pub fn iter_mut(&mut self) -> ValuesMut<u64, Unit> {
		self.0.values_mut()
	}

	#[inline]
	pub fn pairs(&self) -> Iter<u64, Unit> {
		self.0.iter()
	}

	#[inline]
	pub fn tags(&self) -> Keys<u64, Unit> {
		self.0.keys()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[inline]
	pub fn clear(&mut self) {
		self.0.clear()
	}

	#[inline]
	pub fn contains_tag(&self, tag: u64) -> bool {
		self.0.contains_key(&tag)
	}

	pub fn get(&self, tag: u64) -> Option<&Unit> {
		self.0.get(&tag)
	}
	pub fn get_mut(&mut self, tag: u64) -> Option<&mut Unit> {
		self.0.get_mut(&tag)
	}
	pub fn find_tags<'a, T: IntoIterator<Item = &'a u64>>(&self, tags: T) -> Self {
		tags.into_iter()
			.filter_map(|tag| self.0.get(tag).cloned())
			.collect()
	}
	pub fn of_type(&self, type_id: UnitTypeId) -> Self {
		self.filter(|u| u.type_id == type_id)
	}
	pub fn center(&self) -> Option<Point2> {
		if self.is_empty() {
			None
		} else {
			Some(self.sum(|u| u.position) / self.len() as f32)
		}
	}
	pub fn closest<P: Into<Point2> + Copy>(&self, target: P) -> Option<&Unit> {
		self.partial_min(|u| u.distance_squared(target))
	}
	pub fn furthest<P: Into<Point2> + Copy>(&self, target: P) -> Option<&Unit> {
		self.partial_max(|u| u.distance_squared(target))
	}
	pub fn closer<P: Into<Point2> + Copy>(&self, distance: f32, target: P) -> Units {
		self.filter(|u| u.is_closer(distance, target))
	}
	pub fn further<P: Into<Point2> + Copy>(&self, distance: f32, target: P) -> Units {
		self.filter(|u| u.is_further(distance, target))
	}

	pub fn filter<F>(&self, f: F) -> Self
	where
		F: Fn(&&Unit) -> bool,
	{
		Self(self.iter().filter(f).map(|u| (u.tag, u.clone())).collect())
	}
	pub fn ground(&self) -> Self {
		self.filter(|u| !u.is_flying)
	}
	pub fn flying(&self) -> Self {
		self.filter(|u| u.is_flying)
	}
	pub fn ready(&self) -> Self {
		self.filter(|u| u.is_ready())
	}
	pub fn not_ready(&self) -> Self {
		self.filter(|u| !u.is_ready())
	}
	pub fn visible(&self) -> Self {
		self.filter(|u| u.is_visible())
	}
	pub fn sum<T, F>(&self, f: F) -> T
	where
		T: Sum,
		F: Fn(&Unit) -> T,
	{
		self.iter().map(f).sum::<T>()
	}
	pub fn partial_min<T, F>(&self, f: F) -> Option<&Unit>
	where
		T: PartialOrd,
		F: Fn(&Unit) -> T,
	{
		self.iter()
			.min_by(|u1, u2| f(u1).partial_cmp(&f(u2)).unwrap_or(Ordering::Equal))
	}
	pub fn partial_max<T, F>(&self, f: F) -> Option<&Unit>
	where
		T: PartialOrd,
		F: Fn(&Unit) -> T,
	{
		self.iter()
			.max_by(|u1, u2| f(u1).partial_cmp(&f(u2)).unwrap_or(Ordering::Equal))
	}
}
impl FromIterator<Unit> for Units {
	#[inline]
	fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
		Self(iter.into_iter().map(|u| (u.tag, u)).collect())
	}
}
impl IntoIterator for Units {
	type Item = (u64, Unit);
	type IntoIter = IntoIter<u64, Unit>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}
impl<'a> IntoIterator for &'a Units {
	type Item = &'a Unit;
	type IntoIter = Values<'a, u64, Unit>;

	#[inline]
	fn into_iter(self) -> Self::IntoIter {
		self.0.values()
	}
}
impl Index<u64> for Units {
	type Output = Unit;

	#[inline]
	fn index(&self, tag: u64) -> &Self::Output {
		&self.0[&tag]
	}
}
impl Extend<Unit> for Units {
	#[inline]
	fn extend<T: IntoIterator<Item = Unit>>(&mut self, iter: T) {
		self.0.extend(iter.into_iter().map(|u| (u.tag, u)));
	}
}
