//! Static schema tables, one per manufacturing category.
//!
//! Field names and enumerated value sets follow the public onboarding form
//! contract, including its irregular spellings ("Soft FLow", "open width",
//! "Cone-Winging"); changing them here would break previously validated
//! payloads.

use super::{FieldKind, FieldRule, MachinerySchema, SchemaVariant};
use common::model::unit_type::UnitType;

const fn req(name: &'static str, kind: FieldKind) -> FieldRule {
    FieldRule {
        name,
        required: true,
        kind,
    }
}

const fn opt(name: &'static str, kind: FieldKind) -> FieldRule {
    FieldRule {
        name,
        required: false,
        kind,
    }
}

const YARN_TYPES: &[&str] = &["Cotton", "Viscose/Spun", "Polyester/Filament"];
const FABRIC_TYPES: &[&str] = &["Tubular", "open width"];

static YARN_SPINNING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "machineType",
        FieldKind::Enum(&["Yarn Dyeing", "Cone-Winging", "Yarn Twisting"]),
    ),
    req("typeOfYarn", FieldKind::Enum(YARN_TYPES)),
    req("noOfMachines", FieldKind::MachineCount),
]);

static YARN_PROCESSING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "typeOfYarnProcessingMachine",
        FieldKind::Enum(&["Yarn Dyeing", "Yarn Twisting", "Cone-Winding"]),
    ),
    req("noOfHeads", FieldKind::PositiveInt),
    req("typeOfYarn", FieldKind::Enum(YARN_TYPES)),
    req("noOfMachines", FieldKind::MachineCount),
]);

static WEAVING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "machineType",
        FieldKind::Enum(&[
            "Hand Loom",
            "Rapier Loom",
            "Air Jet Loom",
            "Hand Loom - Jacquard",
            "Automatic Jacquard",
            "Projectile Loom",
            "Water Jet Loom",
            "Other",
        ]),
    ),
    req("typeOfYarn", FieldKind::Enum(YARN_TYPES)),
    req("noOfMachines", FieldKind::MachineCount),
]);

static KNITTING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "diameter",
        FieldKind::NumberOrEnum(&[
            "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19", "20",
            "21", "22", "23", "24", "25", "26", "27", "28", "29", "30", "32", "34", "36", "38",
            "40", "42", "44",
        ]),
    ),
    req(
        "gauge",
        FieldKind::NumberOrEnumArray(&[
            "5", "7", "9", "12", "14", "16", "18", "20", "24", "28", "30", "32", "34", "36", "40",
            "44", "48", "52", "56", "60",
        ]),
    ),
    req(
        "machineType",
        FieldKind::Enum(&[
            "Single Jersey",
            "Double Jersey - Rib",
            "Double Jersey - Interlock",
            "3 Thread Fleece",
            "Wrapper",
            "Terry",
            "Seamless",
            "Garment Length",
        ]),
    ),
    opt(
        "specialFeatures",
        FieldKind::EnumArray(&[
            "Single Feeder",
            "Auto-striper",
            "Full Jacquard",
            "Mini Jacquard",
            "Wrapper",
            "Pointel Mini Jacquard",
            "Pointel Jacquard",
            "Denim Knit",
            "Double Side Terry",
            "Matress",
            "Polar Fleece",
            "Poly Fleece",
            "Quilt Design",
            "Spacer",
            "Sweater",
        ]),
    ),
    req(
        "machineCylinderTrack",
        FieldKind::NumberOrEnum(&["1", "2", "3", "4", "5", "6", "7"]),
    ),
    req("takedownRollerType", FieldKind::Enum(FABRIC_TYPES)),
    // The knitting form uses lowercase yarn names, unlike the other units.
    req(
        "typeOfYarn",
        FieldKind::EnumArray(&["cotton", "viscose/Spun", "polyester/filament"]),
    ),
    req(
        "machineBrand",
        FieldKind::Enum(&[
            "Mayer & Cie",
            "Unitex",
            "Year China",
            "Terrot",
            "Lakshmi Terrot",
            "CMS",
            "Falmac",
            "FUKURAHA",
            "FUKUHAMA",
            "Buiyuan",
            "Liski",
            "Pailung",
            "Santoni",
            "Smart",
            "Vilike",
            "Other",
        ]),
    ),
    req("noOfMachines", FieldKind::MachineCount),
]);

// Jigger machines may be loaded either way, so typeOfFabric is optional for
// them and required for every other dyeing machine sub-type.
static DYEING: MachinerySchema = MachinerySchema::Discriminated {
    tag: "DyeingMachineType",
    variants: &[
        SchemaVariant {
            tags: &["Jigger"],
            fields: &[
                opt("minimumCapacity", FieldKind::Number),
                opt("maximumCapacity", FieldKind::Number),
                opt("typeOfFabric", FieldKind::Enum(FABRIC_TYPES)),
                opt("Maker", FieldKind::Text),
                req("noOfMachines", FieldKind::MachineCount),
            ],
        },
        SchemaVariant {
            tags: &["Soft FLow", "Jet", "Winch", "Beam", "Air Flow", "Pad Stream"],
            fields: &[
                opt("minimumCapacity", FieldKind::Number),
                opt("maximumCapacity", FieldKind::Number),
                req("typeOfFabric", FieldKind::Enum(FABRIC_TYPES)),
                opt("Maker", FieldKind::Text),
                req("noOfMachines", FieldKind::MachineCount),
            ],
        },
    ],
};

static FABRIC_PROCESSING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "machineType",
        FieldKind::Enum(&[
            "Stenter",
            "Dryer",
            "Heat-setting",
            "Fabric Slitting",
            "Napping or Raising",
            "Raising",
            "Padding",
            "Mercerizing - Knit",
            "Peaching",
            "Sueding",
            "Embossing",
            "Calendring",
            "Mercherizing - Woven",
        ]),
    ),
    req("typeOfFabric", FieldKind::Enum(FABRIC_TYPES)),
    req("maxWidthOfFabric", FieldKind::PositiveInt),
    req("machineBrand", FieldKind::Text),
    req("noOfMachines", FieldKind::MachineCount),
]);

static FABRIC_FINISHING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "machineType",
        FieldKind::Enum(&["Compacting", "Steaming", "Calendring"]),
    ),
    req("typeOfFabric", FieldKind::Enum(FABRIC_TYPES)),
    req("maxWidthOfFabric", FieldKind::PositiveInt),
    req("machineBrand", FieldKind::Text),
    req("noOfMachines", FieldKind::MachineCount),
]);

static WASHING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "machineType",
        FieldKind::Enum(&["Washing Machine", "Tumble Dryer", "Hydro Machine"]),
    ),
    req("noOfMachines", FieldKind::MachineCount),
]);

static CUTTING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "machineType",
        FieldKind::Enum(&[
            "Hand Cutting",
            "Straight Knife",
            "Band Knife",
            "Automatic Cutting",
        ]),
    ),
    opt("noOfMachines", FieldKind::MachineCount),
]);

const EMBROIDERY_FIELDS: &[FieldRule] = &[
    req(
        "machineType",
        FieldKind::Enum(&[
            "Chenley",
            "With Sequence",
            "Without Sequence",
            "Tufft",
            "Schiffli M/c",
        ]),
    ),
    req("noOfHeads", FieldKind::PositiveInt),
    req("machineBrand", FieldKind::Text),
    opt("model", FieldKind::Text),
    req("noOfMachines", FieldKind::MachineCount),
];

static COMPUTERIZED_EMBROIDERY: MachinerySchema = MachinerySchema::Fields(EMBROIDERY_FIELDS);
static MANUAL_EMBROIDERY: MachinerySchema = MachinerySchema::Fields(EMBROIDERY_FIELDS);

static FUSING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "machineType",
        FieldKind::Enum(&[
            "Roller",
            "Curing Machine",
            "Single Flat bed",
            "Double Flat Bed",
            "Four Side Flat Bed",
        ]),
    ),
    opt("bedSizeLength", FieldKind::PositiveInt),
    opt("bedSizeBreath", FieldKind::PositiveInt),
    opt("noOfMachines", FieldKind::MachineCount),
]);

static PRINTING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "PrintingMachineType",
        FieldKind::Enum(&[
            "Wooden Table",
            "Manual M/c",
            "Automatic M/c",
            "Glass Table",
            "Rotary M/c",
            "Sublimation Print",
            "Heat Transfers",
            "Emboss Print",
            "Digital Sticker Print (DTF)",
            "Digital Print (DTG)",
            "Burnout",
        ]),
    ),
    req("PalletSize", FieldKind::PositiveInt),
]);

static STITCHING: MachinerySchema = MachinerySchema::Fields(&[
    req(
        "machineType",
        FieldKind::Enum(&[
            "Single Needle (singer)",
            "Double Needle",
            "Overlock",
            "Flatlock",
            "Feed of the arm",
            "Edge Cutter",
            "Chain Stitch",
            "Others",
        ]),
    ),
    opt("noOfMachines", FieldKind::MachineCount),
]);

// Service-center categories record no structured machinery data at all.
static EMPTY: MachinerySchema = MachinerySchema::Fields(&[]);

pub(super) fn schema_for(unit: UnitType) -> &'static MachinerySchema {
    match unit {
        UnitType::YarnSpinning => &YARN_SPINNING,
        UnitType::YarnProcessing => &YARN_PROCESSING,
        UnitType::WeavingUnit => &WEAVING,
        UnitType::KnittingUnit => &KNITTING,
        UnitType::DyeingUnit => &DYEING,
        UnitType::FabricProcessingUnit => &FABRIC_PROCESSING,
        UnitType::FabricFinishingUnit => &FABRIC_FINISHING,
        UnitType::WashingUnit => &WASHING,
        UnitType::CuttingUnit => &CUTTING,
        UnitType::ComputerizedEmbroideryUnit => &COMPUTERIZED_EMBROIDERY,
        UnitType::ManualEmbroideryUnit => &MANUAL_EMBROIDERY,
        UnitType::FusingUnit => &FUSING,
        UnitType::PrintingUnit => &PRINTING,
        UnitType::StitchingUnit => &STITCHING,
        UnitType::CheckingUnit
        | UnitType::IroningPackingUnit
        | UnitType::KajaButtonUnit
        | UnitType::MultiNeedleDoubleChainUnit
        | UnitType::OilRemovingMendingCenter
        | UnitType::PatternMakingCenter
        | UnitType::FilmScreenMakingCenter => &EMPTY,
    }
}
