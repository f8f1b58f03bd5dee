use sc2_tactics_macro::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, FromPrimitive, ToPrimitive, FromStr, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[enum_from_str(use_primitives)]
pub enum UnitTypeId {
	NotAUnit = 0,
	// Protoss
	Colossus = 4,
	Nexus = 59,
	Pylon = 60,
	Assimilator = 61,
	Gateway = 62,
	Forge = 63,
	PhotonCannon = 66,
	CyberneticsCore = 72,
	Zealot = 73,
	Stalker = 74,
	HighTemplar = 75,
	DarkTemplar = 76,
	Sentry = 77,
	Phoenix = 78,
	Carrier = 79,
	VoidRay = 80,
	Observer = 82,
	Immortal = 83,
	Probe = 84,
	WarpGate = 133,
	Archon = 141,
	Adept = 311,
	Oracle = 495,
	Tempest = 496,
	ShieldBattery = 1910,
	// Terran
	SiegeTankSieged = 32,
	SiegeTank = 33,
	VikingFighter = 35,
	CommandCenterFlying = 36,
	CommandCenter = 18,
	SupplyDepot = 19,
	Refinery = 20,
	Barracks = 21,
	EngineeringBay = 22,
	MissileTurret = 23,
	Bunker = 24,
	Factory = 27,
	Starport = 28,
	AutoTurret = 31,
	BarracksFlying = 46,
	SupplyDepotLowered = 47,
	Marine = 48,
	Reaper = 49,
	Ghost = 50,
	Marauder = 51,
	Thor = 52,
	Hellion = 53,
	Medivac = 54,
	Banshee = 55,
	Raven = 56,
	Battlecruiser = 57,
	SCV = 45,
	PlanetaryFortress = 130,
	OrbitalCommand = 132,
	OrbitalCommandFlying = 134,
	MULE = 268,
	HellionTank = 484,
	Cyclone = 692,
	// Zerg
	Baneling = 9,
	Hatchery = 86,
	Extractor = 88,
	SpawningPool = 89,
	SpineCrawler = 98,
	SporeCrawler = 99,
	Lair = 100,
	Hive = 101,
	Egg = 103,
	Drone = 104,
	Zergling = 105,
	Overlord = 106,
	Hydralisk = 107,
	Mutalisk = 108,
	Ultralisk = 109,
	Roach = 110,
	Queen = 126,
	Larva = 151,
	Broodling = 289,
	LurkerMP = 502,
	LurkerMPBurrowed = 503,
	Ravager = 688,
	// Neutral
	RichMineralField = 146,
	RichMineralField750 = 147,
	XelNagaTower = 149,
	MineralField = 341,
	VespeneGeyser = 342,
	SpacePlatformGeyser = 343,
	RichVespeneGeyser = 344,
	DestructibleDebris6x6 = 365,
	DestructibleRock6x6 = 371,
	DestructibleDebrisRampDiagonalHugeULBR = 376,
	DestructibleDebrisRampDiagonalHugeBLUR = 377,
	UnbuildableRocksDestructible = 472,
	UnbuildableBricksDestructible = 473,
	UnbuildablePlatesDestructible = 474,
	MineralField750 = 483,
	ProtossVespeneGeyser = 608,
	DestructibleCityDebris6x6 = 628,
	DestructibleCityDebrisHugeDiagonalBLUR = 630,
	DestructibleRockEx14x4 = 638,
	DestructibleRockEx16x6 = 639,
	DestructibleRockEx1DiagonalHugeULBR = 640,
	DestructibleRockEx1DiagonalHugeBLUR = 641,
	DestructibleRockEx1VerticalHuge = 642,
	DestructibleRockEx1HorizontalHuge = 643,
	LabMineralField = 665,
	LabMineralField750 = 666,
	DestructibleRampDiagonalHugeBLUR = 486,
	DestructibleRampDiagonalHugeULBR = 485,
	DestructibleRockEx12x4Vertical = 647,
	DestructibleRockEx14x2Horizontal = 648,
	DestructibleRockEx12x6Vertical = 651,
	DestructibleRockEx16x2Horizontal = 652,
	Rocks2x2NonConjoined = 1948,
	PurifierVespeneGeyser = 880,
	ShakurasVespeneGeyser = 881,
	PurifierRichMineralField = 884,
	PurifierRichMineralField750 = 885,
	PurifierMineralField = 886,
	PurifierMineralField750 = 887,
	BattleStationMineralField = 888,
	BattleStationMineralField750 = 889,
	MineralField450 = 1996,
	MineralFieldOpaque = 1997,
	MineralFieldOpaque900 = 1998,
}
impl Default for UnitTypeId {
	fn default() -> Self {
		UnitTypeId::NotAUnit
	}
}
