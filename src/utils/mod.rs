//! Clustering helpers.

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Density-based clustering of points.
///
/// `range_query` returns neighbours of a point (the point itself may be included),
/// points with fewer than `min_points` neighbours which aren't reachable from
/// any dense point end up in noise.
///
/// Returns clusters in order of discovery and the noise.
pub fn dbscan<P, F>(data: &[P], range_query: F, min_points: usize) -> (Vec<Vec<P>>, FxHashSet<P>)
where
	P: Eq + Hash + Clone,
	F: Fn(&P) -> Vec<P>,
{
	let mut clusters = Vec::<Vec<P>>::new();
	let mut noise = FxHashSet::<P>::default();
	let mut solved = FxHashSet::<P>::default();

	for p in data {
		if solved.contains(p) {
			continue;
		}
		let neighbors = range_query(p);
		if neighbors.len() < min_points {
			noise.insert(p.clone());
			solved.insert(p.clone());
			continue;
		}

		let mut cluster = vec![p.clone()];
		solved.insert(p.clone());
		let mut seeds = neighbors;
		while let Some(q) = seeds.pop() {
			if noise.remove(&q) {
				cluster.push(q);
			} else if solved.insert(q.clone()) {
				let neighbors = range_query(&q);
				if neighbors.len() >= min_points {
					seeds.extend(neighbors.into_iter().filter(|n| !solved.contains(n)));
				}
				cluster.push(q);
			}
		}
		clusters.push(cluster);
	}
	(clusters, noise)
}

/// Builds range query for [`dbscan`]: neighbours are points within `epsilon` by given `distance`.
pub fn range_query<'r, P, D: 'r, F: 'r>(data: &'r [P], distance: F, epsilon: D) -> impl Fn(&P) -> Vec<P> + 'r
where
	P: Clone,
	D: PartialOrd,
	F: Fn(&P, &P) -> D,
{
	move |q: &P| {
		data.iter()
			.filter(|p| distance(q, p) <= epsilon)
			.cloned()
			.collect::<Vec<P>>()
	}
}
