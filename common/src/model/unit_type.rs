use serde::{Deserialize, Serialize};

/// Manufacturing category of a textile company.
///
/// The category decides which machinery schema applies to the company's
/// equipment records, so the set is closed: every variant has exactly one
/// registered schema on the backend (some of them empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    YarnSpinning,
    YarnProcessing,
    WeavingUnit,
    KnittingUnit,
    DyeingUnit,
    FabricProcessingUnit,
    FabricFinishingUnit,
    WashingUnit,
    CuttingUnit,
    ComputerizedEmbroideryUnit,
    ManualEmbroideryUnit,
    FusingUnit,
    PrintingUnit,
    StitchingUnit,
    CheckingUnit,
    IroningPackingUnit,
    KajaButtonUnit,
    MultiNeedleDoubleChainUnit,
    OilRemovingMendingCenter,
    PatternMakingCenter,
    FilmScreenMakingCenter,
}

impl UnitType {
    pub const ALL: [UnitType; 21] = [
        UnitType::YarnSpinning,
        UnitType::YarnProcessing,
        UnitType::WeavingUnit,
        UnitType::KnittingUnit,
        UnitType::DyeingUnit,
        UnitType::FabricProcessingUnit,
        UnitType::FabricFinishingUnit,
        UnitType::WashingUnit,
        UnitType::CuttingUnit,
        UnitType::ComputerizedEmbroideryUnit,
        UnitType::ManualEmbroideryUnit,
        UnitType::FusingUnit,
        UnitType::PrintingUnit,
        UnitType::StitchingUnit,
        UnitType::CheckingUnit,
        UnitType::IroningPackingUnit,
        UnitType::KajaButtonUnit,
        UnitType::MultiNeedleDoubleChainUnit,
        UnitType::OilRemovingMendingCenter,
        UnitType::PatternMakingCenter,
        UnitType::FilmScreenMakingCenter,
    ];

    /// Wire name of the variant, identical to its serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitType::YarnSpinning => "YARN_SPINNING",
            UnitType::YarnProcessing => "YARN_PROCESSING",
            UnitType::WeavingUnit => "WEAVING_UNIT",
            UnitType::KnittingUnit => "KNITTING_UNIT",
            UnitType::DyeingUnit => "DYEING_UNIT",
            UnitType::FabricProcessingUnit => "FABRIC_PROCESSING_UNIT",
            UnitType::FabricFinishingUnit => "FABRIC_FINISHING_UNIT",
            UnitType::WashingUnit => "WASHING_UNIT",
            UnitType::CuttingUnit => "CUTTING_UNIT",
            UnitType::ComputerizedEmbroideryUnit => "COMPUTERIZED_EMBROIDERY_UNIT",
            UnitType::ManualEmbroideryUnit => "MANUAL_EMBROIDERY_UNIT",
            UnitType::FusingUnit => "FUSING_UNIT",
            UnitType::PrintingUnit => "PRINTING_UNIT",
            UnitType::StitchingUnit => "STITCHING_UNIT",
            UnitType::CheckingUnit => "CHECKING_UNIT",
            UnitType::IroningPackingUnit => "IRONING_PACKING_UNIT",
            UnitType::KajaButtonUnit => "KAJA_BUTTON_UNIT",
            UnitType::MultiNeedleDoubleChainUnit => "MULTI_NEEDLE_DOUBLE_CHAIN_UNIT",
            UnitType::OilRemovingMendingCenter => "OIL_REMOVING_MENDING_CENTER",
            UnitType::PatternMakingCenter => "PATTERN_MAKING_CENTER",
            UnitType::FilmScreenMakingCenter => "FILM_SCREEN_MAKING_CENTER",
        }
    }

    /// Parses a wire name back into the enum. Returns `None` for anything
    /// outside the closed set.
    pub fn parse(s: &str) -> Option<UnitType> {
        UnitType::ALL.iter().copied().find(|u| u.as_str() == s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips_every_variant() {
        for unit in UnitType::ALL {
            assert_eq!(UnitType::parse(unit.as_str()), Some(unit));
        }
        assert_eq!(UnitType::parse("SOCK_UNIT"), None);
    }

    #[test]
    fn serde_names_match_as_str() {
        for unit in UnitType::ALL {
            let json = serde_json::to_string(&unit).unwrap();
            assert_eq!(json, format!("\"{}\"", unit.as_str()));
        }
    }
}
