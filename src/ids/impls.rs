use super::UnitTypeId;

impl UnitTypeId {
	#[inline]
	pub fn is_worker(self) -> bool {
		matches!(self, UnitTypeId::SCV | UnitTypeId::Drone | UnitTypeId::Probe | UnitTypeId::MULE)
	}
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_townhall(self) -> bool {
		matches!(
			self,
			UnitTypeId::CommandCenter
			| UnitTypeId::OrbitalCommand
			| UnitTypeId::PlanetaryFortress
			| UnitTypeId::CommandCenterFlying
			| UnitTypeId::OrbitalCommandFlying
			| UnitTypeId::Hatchery
			| UnitTypeId::Lair
			| UnitTypeId::Hive
			| UnitTypeId::Nexus
		)
	}
	/// Static defense and other structures which are able to fight.
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_defensive(self) -> bool {
		matches!(
			self,
			UnitTypeId::PhotonCannon
			| UnitTypeId::ShieldBattery
			| UnitTypeId::Bunker
			| UnitTypeId::MissileTurret
			| UnitTypeId::PlanetaryFortress
			| UnitTypeId::AutoTurret
			| UnitTypeId::SpineCrawler
			| UnitTypeId::SporeCrawler
		)
	}
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_mineral_field(self) -> bool {
		matches!(
			self,
			UnitTypeId::RichMineralField
			| UnitTypeId::RichMineralField750
			| UnitTypeId::MineralField
			| UnitTypeId::MineralField450
			| UnitTypeId::MineralField750
			| UnitTypeId::LabMineralField
			| UnitTypeId::LabMineralField750
			| UnitTypeId::PurifierRichMineralField
			| UnitTypeId::PurifierRichMineralField750
			| UnitTypeId::PurifierMineralField
			| UnitTypeId::PurifierMineralField750
			| UnitTypeId::BattleStationMineralField
			| UnitTypeId::BattleStationMineralField750
			| UnitTypeId::MineralFieldOpaque
			| UnitTypeId::MineralFieldOpaque900
		)
	}
	#[rustfmt::skip::macros(matches)]
	#[inline]
	pub fn is_vespene_geyser(self) -> bool {
		matches!(
			self,
			UnitTypeId::VespeneGeyser
			| UnitTypeId::SpacePlatformGeyser
			| UnitTypeId::RichVespeneGeyser
			| UnitTypeId::ProtossVespeneGeyser
			| UnitTypeId::PurifierVespeneGeyser
			| UnitTypeId::ShakurasVespeneGeyser
		)
	}
}
