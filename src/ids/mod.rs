//! Ids of units and abilities, values match `stableid.json`.
//! Only the ids the tactical core and its callers care about are listed.
#![allow(missing_docs)]

mod ability_id;
mod unit_typeid;

pub use ability_id::AbilityId;
pub use unit_typeid::UnitTypeId;

mod impls;
