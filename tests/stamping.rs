mod common;

use common::*;
use itertools::iproduct;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};
use sc2_tactics::{game_state::RawUnit, grid::Grid, pixel_map::Visibility, prelude::*};

fn obstacles() -> Vec<RawUnit> {
	let mut units = vec![
		own(2, UnitTypeId::Barracks, 20.5, 20.5).with_radius(1.8125),
		own(3, UnitTypeId::SupplyDepot, 22.0, 24.0).with_radius(1.125),
		own(4, UnitTypeId::SupplyDepotLowered, 24.0, 24.0).with_radius(1.125),
		own(5, UnitTypeId::Barracks, 30.5, 20.5).with_radius(1.8125).flying(),
		enemy(6, UnitTypeId::PhotonCannon, 40.0, 40.0).with_radius(1.125),
		neutral(7, UnitTypeId::DestructibleRockEx14x4, 45.0, 20.0),
		neutral(8, UnitTypeId::DestructibleRampDiagonalHugeBLUR, 30.0, 45.0),
		neutral(9, UnitTypeId::UnbuildablePlatesDestructible, 26.0, 24.0),
		neutral(10, UnitTypeId::XelNagaTower, 50.5, 50.5),
	];
	units.extend((0..8).map(|i| neutral(20 + i, UnitTypeId::MineralField, 12.0 + 2.0 * i as f32, 35.5)));
	units
}

fn layers(grid: &Grid) -> Vec<(bool, bool)> {
	iproduct!(0..MAP_SIZE as isize, 0..MAP_SIZE as isize)
		.map(|tile| (grid.is_pathable(tile), grid.is_buildable(tile)))
		.collect()
}

#[test]
fn stamping_does_not_depend_on_order() {
	let mut game = FakeGame::new(observation(0, obstacles(), Visibility::Visible));
	let mut bot = Bot::start(
		&mut game,
		&mut FakeAbilities::default(),
		Settings::default().with_path(PathSettings::disabled()),
	)
	.unwrap();
	let expected = layers(&bot.grid());

	let mut rng = StdRng::seed_from_u64(7);
	for step in 1..=10 {
		let mut units = obstacles();
		units.shuffle(&mut rng);
		game.push(observation(step, units, Visibility::Visible));
		assert!(bot.step(&mut game, &mut FakeAbilities::default()).is_completed());
		assert_eq!(layers(&bot.grid()), expected);
	}
}

#[test]
fn renewal_clears_removed_structures() {
	let mut game = FakeGame::new(observation(0, obstacles(), Visibility::Visible));
	let mut bot = Bot::start(
		&mut game,
		&mut FakeAbilities::default(),
		Settings::default().with_path(PathSettings::disabled()),
	)
	.unwrap();
	assert!(!bot.grid().is_pathable((20, 20)));
	assert!(!bot.grid().is_buildable((24, 24)));
	assert!(bot.grid().is_pathable((24, 24)));
	assert!(bot.grid().is_pathable((30, 20)));
	assert!(!bot.grid().is_pathable((12, 34)));

	game.push(observation(1, vec![], Visibility::Visible));
	bot.step(&mut game, &mut FakeAbilities::default());
	let grid = bot.grid();
	assert!(grid.is_pathable((20, 20)));
	assert!(grid.is_buildable((24, 24)));
	assert!(grid.is_pathable((12, 34)));
	assert!(!grid.is_pathable((-1, 5)));
	assert!(!grid.is_buildable((5, MAP_SIZE as isize)));
}
