//! # Category Schema Registry
//!
//! Fixed mapping from a company's unit type to the structural contract its
//! machinery records must satisfy. The tables live in `catalog` as `static`
//! data, so the registry is built at compile time and shared read-only for
//! the life of the process.
//!
//! A schema is either a flat field list or, for the dyeing category, a
//! discriminated union: the legal field set depends on the nested
//! `DyeingMachineType` value, which is itself a closed enumeration.

mod catalog;

use common::model::unit_type::UnitType;

/// One field of a machinery schema.
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub required: bool,
    pub kind: FieldKind,
}

/// The legal shape of a single machinery field.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Any string.
    Text,
    /// Any JSON number.
    Number,
    /// String drawn from a closed set.
    Enum(&'static [&'static str]),
    /// Array of strings, each drawn from a closed set.
    EnumArray(&'static [&'static str]),
    /// Either a plain JSON number, or a string member of the set which is
    /// coerced to a number during normalization (knitting diameter, cylinder
    /// track).
    NumberOrEnum(&'static [&'static str]),
    /// Array of `NumberOrEnum` elements (knitting gauge).
    NumberOrEnumArray(&'static [&'static str]),
    /// Integral and strictly positive.
    PositiveInt,
    /// The machine-count quantity field. Positive integer; when the rule is
    /// optional and the field is absent, normalization inserts a default of 1.
    MachineCount,
}

/// One arm of a discriminated schema: which discriminator values select it
/// and which field rules then apply.
#[derive(Debug, Clone, Copy)]
pub struct SchemaVariant {
    pub tags: &'static [&'static str],
    pub fields: &'static [FieldRule],
}

/// Validation contract for one unit type.
#[derive(Debug, Clone, Copy)]
pub enum MachinerySchema {
    /// Flat object schema. An empty rule list means the category has no
    /// machinery constraints (the service-center categories).
    Fields(&'static [FieldRule]),
    /// Schema selection branches on a nested discriminator field before any
    /// field rules apply.
    Discriminated {
        tag: &'static str,
        variants: &'static [SchemaVariant],
    },
}

impl MachinerySchema {
    /// The closed set of legal discriminator values, for error reporting.
    pub fn tag_values(&self) -> Vec<&'static str> {
        match self {
            MachinerySchema::Fields(_) => Vec::new(),
            MachinerySchema::Discriminated { variants, .. } => variants
                .iter()
                .flat_map(|v| v.tags.iter().copied())
                .collect(),
        }
    }
}

/// Looks up the machinery schema registered for a unit type.
///
/// Total over the closed `UnitType` enum; `None` is part of the contract for
/// callers that treat an unregistered category as "no machinery constraints
/// apply", even though every current variant has an entry.
pub fn machinery_schema(unit: UnitType) -> Option<&'static MachinerySchema> {
    Some(catalog::schema_for(unit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_unit_type_has_a_schema() {
        for unit in UnitType::ALL {
            assert!(
                machinery_schema(unit).is_some(),
                "no schema registered for {}",
                unit.as_str()
            );
        }
    }

    #[test]
    fn dyeing_is_discriminated_on_machine_sub_type() {
        let schema = machinery_schema(UnitType::DyeingUnit).unwrap();
        match schema {
            MachinerySchema::Discriminated { tag, variants } => {
                assert_eq!(*tag, "DyeingMachineType");
                assert_eq!(variants.len(), 2);
                let tags = schema.tag_values();
                assert!(tags.contains(&"Jigger"));
                assert!(tags.contains(&"Soft FLow"));
            }
            MachinerySchema::Fields(_) => panic!("dyeing schema must be discriminated"),
        }
    }

    #[test]
    fn service_center_categories_have_empty_schemas() {
        for unit in [
            UnitType::CheckingUnit,
            UnitType::IroningPackingUnit,
            UnitType::KajaButtonUnit,
            UnitType::MultiNeedleDoubleChainUnit,
            UnitType::OilRemovingMendingCenter,
            UnitType::PatternMakingCenter,
            UnitType::FilmScreenMakingCenter,
        ] {
            match machinery_schema(unit).unwrap() {
                MachinerySchema::Fields(rules) => assert!(rules.is_empty()),
                MachinerySchema::Discriminated { .. } => {
                    panic!("{} should have an empty schema", unit.as_str())
                }
            }
        }
    }
}
