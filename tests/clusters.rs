mod common;

use common::*;
use itertools::Itertools;
use sc2_tactics::{game_state::RawUnit, pixel_map::Visibility, prelude::*};

fn bot_with_enemies(size: usize, enemies: Vec<RawUnit>) -> Bot {
	let mut game = FakeGame::with_info(
		game_info_sized(size),
		observation_sized(size, 0, enemies, Visibility::Visible),
	);
	Bot::start(
		&mut game,
		&mut FakeAbilities::default(),
		Settings::default().with_path(PathSettings::disabled()),
	)
	.unwrap()
}

fn partition(clusters: &Clusters) -> Vec<Vec<u64>> {
	clusters
		.iter()
		.map(|c| c.units.tags().copied().sorted().collect::<Vec<_>>())
		.sorted()
		.collect()
}

#[test]
fn units_split_by_range() {
	// Marauders have range 4, so 3 apart are neighbours and 97 apart aren't.
	let bot = bot_with_enemies(
		128,
		vec![
			enemy(10, UnitTypeId::Marauder, 0.5, 64.5),
			enemy(11, UnitTypeId::Marauder, 3.5, 64.5),
			enemy(12, UnitTypeId::Marauder, 100.5, 64.5),
		],
	);
	let clusters = &bot.enemies.clusters;

	assert_eq!(partition(clusters), vec![vec![10, 11], vec![12]]);
	assert_eq!(clusters.cluster_of(10).map(|c| c.food), Some(4.0));
	assert_eq!(clusters.index_of(10), clusters.index_of(11));
	assert_ne!(clusters.index_of(10), clusters.index_of(12));
	assert_eq!(clusters.largest().map(|c| c.len()), Some(2));
}

#[test]
fn chain_of_neighbours_is_one_cluster() {
	let enemies = (0..6)
		.map(|i| enemy(10 + i, UnitTypeId::Zergling, 5.5 + 2.0 * i as f32, 40.5))
		.collect();
	let bot = bot_with_enemies(MAP_SIZE, enemies);

	assert_eq!(bot.enemies.clusters.len(), 1);
	assert_eq!(bot.enemies.clusters.cluster_of(15).map(|c| c.food), Some(3.0));
}

#[test]
fn workers_and_production_are_not_candidates() {
	let bot = bot_with_enemies(
		MAP_SIZE,
		vec![
			enemy(10, UnitTypeId::Marine, 30.5, 30.5),
			enemy(11, UnitTypeId::Probe, 31.5, 30.5),
			enemy(12, UnitTypeId::Barracks, 34.5, 34.5).with_radius(1.8125),
			enemy(13, UnitTypeId::PhotonCannon, 40.5, 40.5).with_radius(1.125),
			enemy(14, UnitTypeId::Marine, 50.5, 50.5).with_build_progress(0.3),
		],
	);
	let clusters = &bot.enemies.clusters;

	assert!(clusters.cluster_of(11).is_none());
	assert!(clusters.cluster_of(12).is_none());
	assert!(clusters.cluster_of(14).is_none());
	// Marine at distance ~14.1 with ranges 5 and 7: not connected.
	assert_eq!(partition(clusters), vec![vec![10], vec![13]]);
}

#[test]
fn every_candidate_in_exactly_one_cluster() {
	let enemies = (0..40)
		.map(|i| {
			let (x, y) = ((i * 7) % 50, (i * 13) % 50);
			enemy(100 + i, UnitTypeId::Marauder, x as f32 + 5.5, y as f32 + 5.5)
		})
		.collect();
	let bot = bot_with_enemies(MAP_SIZE, enemies);
	let clusters = &bot.enemies.clusters;

	let members = clusters.iter().flat_map(|c| c.units.tags().copied()).collect::<Vec<_>>();
	assert_eq!(members.len(), 40);
	assert_eq!(members.iter().unique().count(), 40);

	// Units closer than range plus margin always share a cluster.
	for a in bot.enemies.all_ready.iter() {
		for b in bot.enemies.all_ready.iter() {
			if a.is_closer(6.0, b) {
				assert_eq!(clusters.index_of(a.tag), clusters.index_of(b.tag));
			}
		}
	}
}

#[test]
fn clustering_is_idempotent() {
	let enemies = (0..20)
		.map(|i| enemy(100 + i, UnitTypeId::Marine, (i * 3 % 60) as f32 + 1.5, (i * 11 % 60) as f32 + 1.5))
		.collect();
	let mut bot = bot_with_enemies(MAP_SIZE, enemies);
	let first = partition(&bot.enemies.clusters);
	bot.find_clusters();
	assert_eq!(partition(&bot.enemies.clusters), first);
}

#[test]
fn clusters_can_be_computed_on_demand() {
	let mut game = FakeGame::new(observation(
		0,
		vec![enemy(10, UnitTypeId::Marine, 30.5, 30.5)],
		Visibility::Visible,
	));
	let settings = Settings::default()
		.with_clusters_each_step(false)
		.with_path(PathSettings::disabled());
	let mut bot = Bot::start(&mut game, &mut FakeAbilities::default(), settings).unwrap();

	assert!(bot.enemies.clusters.is_empty());
	bot.find_clusters();
	assert_eq!(bot.enemies.clusters.len(), 1);
}
