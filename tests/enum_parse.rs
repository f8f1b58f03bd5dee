#[macro_use]
extern crate sc2_tactics_macro;
#[macro_use]
extern crate num_derive;

use sc2_tactics::prelude::*;
use sc2_tactics_macro::ParseEnumError;

#[derive(Debug, PartialEq, FromPrimitive, FromStr)]
#[enum_from_str(use_primitives)]
enum MyEnum {
	Variant0,
	Variant1 = -1001,
	Variant2,
	Variant3 = 2002,
	LongVariantName,
}

#[variant_checkers]
#[derive(Debug, Clone, Copy, PartialEq, FromStr)]
enum Formation {
	Line,
	WedgeLeft,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn check_enum_err() {
		assert_eq!("Variant4".parse::<MyEnum>(), Err(ParseEnumError));
		assert!("MyEnum::Variant1".parse::<MyEnum>().is_err());
		assert_eq!("4".parse::<MyEnum>(), Err(ParseEnumError));
		assert_eq!("0".parse::<Formation>(), Err(ParseEnumError));
	}
	#[test]
	fn check_enum_ok() {
		assert_eq!("Variant1".parse::<MyEnum>(), Ok(MyEnum::Variant1));
		assert_eq!("Variant2".parse::<MyEnum>(), Ok(MyEnum::Variant2));
		assert_eq!("long_variant_name".parse::<MyEnum>(), Ok(MyEnum::LongVariantName));
		assert_eq!("long-variant-name".parse::<MyEnum>(), Ok(MyEnum::LongVariantName));
	}
	#[test]
	fn check_enum_primitives() {
		assert_eq!("0".parse::<MyEnum>(), Ok(MyEnum::Variant0));
		assert_eq!("-1000".parse::<MyEnum>(), Ok(MyEnum::Variant2));
		assert_eq!("2002".parse::<MyEnum>(), Ok(MyEnum::Variant3));
	}
	#[test]
	fn check_variant_checkers() {
		let formation = "wedge_left".parse::<Formation>().unwrap();
		assert!(formation.is_wedge_left());
		assert!(!formation.is_line());
	}
	#[test]
	fn check_library_enums() {
		assert_eq!("ground-safe".parse::<PathMapKind>(), Ok(PathMapKind::GroundSafe));
		assert_eq!("Marine".parse::<UnitTypeId>(), Ok(UnitTypeId::Marine));
		assert_eq!("48".parse::<UnitTypeId>(), Ok(UnitTypeId::Marine));
		assert_eq!("effect_stim".parse::<AbilityId>(), Ok(AbilityId::EffectStim));
	}
}
