//! Discovery of expansion locations from resource positions.

use crate::{
	distance::Distance,
	game_info::GameInfo,
	geometry::Point2,
	unit::Unit,
	units::Units,
	utils::{dbscan, range_query},
};

/// Squared distance between resources of the same base.
const RESOURCE_SPREAD: f32 = 72.25; // 8.5
const OFFSET: isize = 7;
const TOWNHALL_HALF_SIZE: isize = 2;

/// Expansion location and center of it's resources (including location itself).
pub type Expansion = (Point2, Point2);

/// Mean of resources around `location` and `location` itself.
pub fn resource_center(resources: &Units, location: Point2) -> Point2 {
	let near = resources.closer(11.0, location);
	(near.sum(|r| r.position) + location) / (near.len() + 1) as f32
}

fn is_placeable(game_info: &GameInfo, pos: Point2) -> bool {
	let (x, y) = pos.tile();
	iproduct!(
		-TOWNHALL_HALF_SIZE..=TOWNHALL_HALF_SIZE,
		-TOWNHALL_HALF_SIZE..=TOWNHALL_HALF_SIZE
	)
	.all(|(dx, dy)| {
		game_info
			.map_size
			.index((x + dx, y + dy))
			.map_or(false, |i| game_info.placement_grid[i].is_set())
	})
}

/// Finds expansions by grouping resources and picking a placeable point
/// not too close to any of them. Start locations are used as is.
pub fn find_expansions(
	resources: &Units,
	game_info: &GameInfo,
	start_location: Point2,
	enemy_start: Point2,
) -> Vec<Expansion> {
	let start_center = resource_center(resources, start_location);
	let enemy_start_center = resource_center(resources, enemy_start);

	let positions = resources.iter().map(|r| (r.position, r.tag)).collect::<Vec<_>>();
	let resource_groups = dbscan(
		&positions,
		range_query(
			&positions,
			|(p1, _), (p2, _)| p1.distance_squared(*p2),
			RESOURCE_SPREAD,
		),
		4,
	)
	.0;

	let offsets = iproduct!((-OFFSET..=OFFSET), (-OFFSET..=OFFSET))
		.filter(|(x, y)| x * x + y * y <= 64)
		.collect::<Vec<(isize, isize)>>();

	resource_groups
		.iter()
		.filter_map(|group| {
			let group_resources = resources.find_tags(group.iter().map(|(_, tag)| tag));
			let center = group_resources.center()?.floor() + 0.5;

			if center.is_closer(4.0, start_center) {
				return Some((start_location, start_center));
			}
			if center.is_closer(4.0, enemy_start_center) {
				return Some((enemy_start, enemy_start_center));
			}

			let location = offsets
				.iter()
				.filter_map(|(x, y)| {
					let pos = center.offset(*x as f32, *y as f32);
					if !is_placeable(game_info, pos) {
						return None;
					}
					let mut distance_sum = 0_f32;
					let far_enough = |r: &Unit| {
						let dist = pos.distance_squared(r);
						distance_sum += dist;
						dist > if r.is_geyser() { 49.0 } else { 36.0 }
					};
					if group_resources.iter().all(far_enough) {
						Some((pos, distance_sum))
					} else {
						None
					}
				})
				.min_by(|(_, d1), (_, d2)| d1.partial_cmp(d2).unwrap_or(std::cmp::Ordering::Equal));

			match location {
				Some((location, _)) => Some((location, resource_center(&group_resources, location))),
				None => {
					warn!("Can't find position for expansion near {:?}", center);
					None
				}
			}
		})
		.collect()
}
