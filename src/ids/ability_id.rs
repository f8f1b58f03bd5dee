use sc2_tactics_macro::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, FromPrimitive, ToPrimitive, FromStr, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[enum_from_str(use_primitives)]
pub enum AbilityId {
	Null = 0,
	Smart = 1,
	StopStop = 4,
	Move = 16,
	Patrol = 17,
	HoldPosition = 18,
	Attack = 23,
	EffectCalldownMULE = 171,
	HarvestGather = 298,
	HarvestReturn = 299,
	TerranBuildCommandCenter = 318,
	TerranBuildSupplyDepot = 319,
	TerranBuildRefinery = 320,
	TerranBuildBarracks = 321,
	TerranBuildEngineeringBay = 322,
	TerranBuildMissileTurret = 323,
	TerranBuildBunker = 324,
	TerranBuildFactory = 328,
	TerranBuildStarport = 329,
	EffectScan = 399,
	CommandCenterTrainSCV = 524,
	MorphSupplyDepotLower = 556,
	MorphSupplyDepotRaise = 558,
	BarracksTrainMarine = 560,
	BarracksTrainReaper = 561,
	BarracksTrainMarauder = 563,
	ProtossBuildNexus = 880,
	ProtossBuildPylon = 881,
	ProtossBuildGateway = 883,
	ProtossBuildPhotonCannon = 887,
	GatewayTrainZealot = 916,
	NexusTrainProbe = 1006,
	LarvaTrainDrone = 1342,
	LarvaTrainZergling = 1343,
	ZergBuildHatchery = 1152,
	ZergBuildSpawningPool = 1155,
	ZergBuildSpineCrawler = 1166,
	ZergBuildSporeCrawler = 1167,
	EffectKD8Charge = 2588,
	EffectStim = 3675,
	EffectBlink = 3687,
}
