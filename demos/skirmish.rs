//! Runs the bot on a generated map: enemy army walks towards bot's base,
//! clusters and path maps are printed on the way.
//!
//! `cargo run --example skirmish -- --enemies 60 --kind ground-safe`

#[macro_use]
extern crate log;

use clap::Parser;
use rand::prelude::*;
use sc2_tactics::{
	game_data::{Attribute, GameData, TargetType, UnitTypeData, Weapon},
	game_info::GameInfo,
	game_state::{Alliance, AvailableAbilities, Observation, RawUnit},
	geometry::Size,
	pixel_map::Visibility,
	prelude::*,
};
use std::{thread, time::Duration};

#[derive(Parser)]
#[clap(version, author)]
struct Args {
	/// Width and height of the map
	#[clap(long, default_value = "96")]
	size: usize,
	/// Number of enemy units
	#[clap(short, long, default_value = "40")]
	enemies: usize,
	/// Number of game steps to play
	#[clap(short, long, default_value = "30")]
	steps: u32,
	/// Path map used to print the route from enemy base
	#[clap(short, long, default_value = "ground")]
	kind: PathMapKind,
	/// Gap added to engagement range when grouping enemies
	#[clap(short, long, default_value = "2")]
	margin: f32,
	/// Seed of random generator
	#[clap(long, default_value = "0")]
	seed: u64,
}

fn game_data() -> GameData {
	let unit = |id: UnitTypeId, food: f32, attributes: Vec<Attribute>, target: TargetType, range: f32| UnitTypeData {
		id,
		name: format!("{:?}", id),
		food_required: food,
		attributes,
		weapons: vec![Weapon::new(target, range)],
		..Default::default()
	};
	GameData::from_units(vec![
		UnitTypeData {
			id: UnitTypeId::CommandCenter,
			attributes: vec![Attribute::Armored, Attribute::Structure],
			..Default::default()
		},
		unit(UnitTypeId::Marine, 1.0, vec![Attribute::Light], TargetType::Any, 5.0),
		unit(UnitTypeId::Reaper, 1.0, vec![Attribute::Light], TargetType::Ground, 5.0),
		unit(UnitTypeId::Zergling, 0.5, vec![Attribute::Light], TargetType::Ground, 0.1),
		unit(UnitTypeId::Roach, 2.0, vec![Attribute::Armored], TargetType::Ground, 4.0),
		unit(UnitTypeId::Hydralisk, 2.0, vec![Attribute::Light], TargetType::Any, 5.0),
	])
}

/// Enemy army marching from the opposite corner.
struct Skirmish {
	info: GameInfo,
	rng: StdRng,
	home: Point2,
	enemies: Vec<RawUnit>,
	game_loop: u32,
}
impl Skirmish {
	fn new(args: &Args) -> Self {
		let size = args.size as f32;
		let home = Point2::new(10.5, 10.5);
		let enemy_start = Point2::new(size - 9.5, size - 9.5);
		let mut rng = StdRng::seed_from_u64(args.seed);
		let types = [UnitTypeId::Zergling, UnitTypeId::Roach, UnitTypeId::Hydralisk];
		let enemies = (0..args.enemies)
			.map(|i| {
				let pos = enemy_start.offset(rng.gen_range(-12.0..0.0), rng.gen_range(-12.0..0.0));
				let type_id = *types.choose(&mut rng).unwrap_or(&UnitTypeId::Zergling);
				RawUnit::new(1000 + i as u64, type_id, Alliance::Enemy, pos).with_radius(0.5)
			})
			.collect();
		Self {
			info: GameInfo::flat("Skirmish", Size::new(args.size, args.size), 10, vec![enemy_start]),
			rng,
			home,
			enemies,
			game_loop: 0,
		}
	}
}
impl GameSource for Skirmish {
	fn game_info(&mut self) -> SC2Result<GameInfo> {
		Ok(self.info.clone())
	}
	fn game_data(&mut self) -> SC2Result<GameData> {
		Ok(game_data())
	}
	fn observation(&mut self) -> SC2Result<Observation> {
		self.game_loop += 22;
		let home = self.home;
		for u in &mut self.enemies {
			let speed = self.rng.gen_range(0.5..2.0);
			u.position = u.position.towards(home, speed);
		}

		let size = self.info.map_size;
		let mut observation = Observation {
			game_loop: self.game_loop,
			..Default::default()
		};
		observation.raw.visibility = ndarray::Array2::from_shape_fn((size.x, size.y), |(x, y)| {
			if Point2::from((x as isize, y as isize)).is_closer(20.0, home) {
				Visibility::Visible
			} else {
				Visibility::Fogged
			}
		});
		observation.raw.units = std::iter::once(
			RawUnit::new(1, UnitTypeId::CommandCenter, Alliance::Own, home).with_radius(2.75),
		)
		.chain(std::iter::once(
			RawUnit::new(2, UnitTypeId::Reaper, Alliance::Own, home.offset(5.0, 0.0)).with_radius(0.375),
		))
		.chain(self.enemies.iter().filter(|u| u.position.is_closer(20.0, home)).cloned())
		.collect();
		observation.common.food_cap = 15;
		observation.common.food_used = 2;
		Ok(observation)
	}
}

struct NoAbilities;
impl AbilitySource for NoAbilities {
	fn available_abilities(&mut self, _tags: &[u64], _ignore_cost: bool) -> SC2Result<Vec<AvailableAbilities>> {
		Ok(Vec::new())
	}
}

fn main() -> SC2Result<()> {
	env_logger::init();
	let args = Args::parse();

	let mut game = Skirmish::new(&args);
	let settings = Settings::default()
		.with_cluster_margin(args.margin)
		.with_path(PathSettings::default().with_cadence(Duration::from_millis(100)));
	let mut bot = Bot::start(&mut game, &mut NoAbilities, settings)?;
	info!(
		"Started at {:?}, enemy start {:?}, map {}x{}",
		bot.start_location, bot.enemy_start, args.size, args.size
	);

	for _ in 0..args.steps {
		if bot.step(&mut game, &mut NoAbilities).is_abandoned() {
			continue;
		}
		let clusters = &bot.enemies.clusters;
		println!(
			"loop {:>5}: {:>3} enemies known ({:>3} visible), {} clusters, largest {:.1} food",
			bot.game_loop,
			bot.enemies.all.len(),
			bot.enemies.visible.len(),
			clusters.len(),
			clusters.largest().map_or(0.0, |c| c.food),
		);
		thread::sleep(Duration::from_millis(20));
	}

	let maps = bot.path_maps();
	let path = maps.path(args.kind, Origin::Home, bot.enemy_start.tile());
	match maps.distance(args.kind, Origin::Home, bot.enemy_start.tile()) {
		Some(distance) => println!(
			"{:?} path from enemy start: {} tiles, cost {:.1} (maps of generation {})",
			args.kind,
			path.len(),
			distance,
			maps.generation
		),
		None => println!("No {:?} path from enemy start (maps of generation {})", args.kind, maps.generation),
	}
	bot.stop();
	Ok(())
}
