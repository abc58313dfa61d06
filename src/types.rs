use crate::constants::{localization::*, *};
use indexmap::IndexMap;
use log::Level;
use serde::Serialize;
use smallvec::SmallVec;
use std::{
    fmt, io,
    path::{Path, PathBuf},
};
use strum_macros::{Display, EnumIs};
use thiserror::Error;

/// Display names, keyed by item id.
pub type NameTable = IndexMap<String, String>;
/// Slot counts overriding the ones written in descriptions, keyed by item id.
pub type SlotTable = IndexMap<String, i32>;
/// Card name decorations, keyed by card id.
pub type AffixTable = IndexMap<String, Affix>;

/// Parsed records, in the order they first appear in the description table.
pub type Items = IndexMap<String, Record>;
pub type Classes = SmallVec<[String; 4]>;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIs,
    Display,
    Serialize,
)]
/// Kind of an in-game object. Serialized with the labels used by the game client.
pub enum Category {
    #[strum(serialize = "アイテム")]
    #[serde(rename = "アイテム")]
    Item,
    #[strum(serialize = "武器")]
    #[serde(rename = "武器")]
    Weapon,
    #[strum(serialize = "防具")]
    #[serde(rename = "防具")]
    Armor,
    #[strum(serialize = "カード")]
    #[serde(rename = "カード")]
    Card,
    #[strum(serialize = "シャドウ")]
    #[serde(rename = "シャドウ")]
    Shadow,
    #[strum(serialize = "エンチャント")]
    #[serde(rename = "エンチャント")]
    Enchant,
    #[strum(serialize = "衣装")]
    #[serde(rename = "衣装")]
    Costume,
    #[strum(serialize = "弾薬")]
    #[serde(rename = "弾薬")]
    Ammunition,
    #[strum(serialize = "ペット系")]
    #[serde(rename = "ペット系")]
    Pet,
}

impl Category {
    /// Categories whose slot count may be overridden by the slot table.
    #[must_use]
    pub const fn has_slots(self) -> bool {
        matches!(
            self,
            Self::Shadow | Self::Weapon | Self::Armor | Self::Costume
        )
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIs,
    Display,
    Serialize,
)]
/// Equipment location a card can be compounded into.
pub enum Gear {
    #[strum(serialize = "兜")]
    #[serde(rename = "兜")]
    Headgear,
    #[strum(serialize = "鎧")]
    #[serde(rename = "鎧")]
    Armor,
    #[strum(serialize = "武器")]
    #[serde(rename = "武器")]
    Weapon,
    #[strum(serialize = "盾")]
    #[serde(rename = "盾")]
    Shield,
    #[strum(serialize = "肩にかける物")]
    #[serde(rename = "肩にかける物")]
    Garment,
    #[strum(serialize = "靴")]
    #[serde(rename = "靴")]
    Shoes,
    #[strum(serialize = "アクセサリー")]
    #[serde(rename = "アクセサリー")]
    Accessory,
    #[strum(serialize = "全ての部位")]
    #[serde(rename = "全ての部位")]
    All,
}

impl Gear {
    /// Resolves a location label, accepting the alternative garment spellings.
    #[must_use]
    pub fn resolve(value: &str) -> Option<Self> {
        Some(match value {
            "兜" => Self::Headgear,
            "鎧" => Self::Armor,
            "武器" => Self::Weapon,
            "盾" => Self::Shield,
            "肩にかける物" | "肩にかけるもの" | "肩に掛けるもの" => {
                Self::Garment
            }
            "靴" => Self::Shoes,
            "アクセサリー" => Self::Accessory,
            "全ての部位" => Self::All,
            _ => return None,
        })
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Affix {
    pub prefix: String,
    pub postfix: String,
}

impl Affix {
    #[must_use]
    pub fn prefix(text: &str) -> Self {
        Self {
            prefix: text.to_owned(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn postfix(text: &str) -> Self {
        Self {
            postfix: text.to_owned(),
            ..Default::default()
        }
    }
}

/// Auxiliary lookup tables consumed by [`crate::read::ItemReader`].
#[derive(Debug, Default, Clone)]
pub struct Tables {
    pub names: NameTable,
    pub slots: SlotTable,
    pub affixes: AffixTable,
}

/// A classified object. Serializes to a flat map: the base fields first, then the category's own fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: u32,
    pub name: String,
    pub description: Vec<String>,
    pub category: Category,
    #[serde(flatten)]
    pub attributes: Attributes,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Attributes {
    Item(ItemAttributes),
    Card(CardAttributes),
    Enchant(EnchantAttributes),
    Weapon(WeaponAttributes),
    /// Shared by armors, shadow gear and costumes.
    Armor(ArmorAttributes),
    Ammunition(AmmunitionAttributes),
    Pet(PetAttributes),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemAttributes {
    pub weight: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAttributes {
    pub weight: f64,
    pub location: Option<Gear>,
    pub prefix: String,
    pub postfix: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnchantAttributes {}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeaponAttributes {
    #[serde(rename = "type")]
    pub series: String,
    pub attack: i32,
    pub weight: f64,
    pub weapon_level: i32,
    pub required_level: i32,
    pub equippable: Classes,
    pub magic_attack: i32,
    pub slot: i32,
    pub elemental: String,
    pub refining: String,
    pub destruction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArmorAttributes {
    #[serde(rename = "type")]
    pub series: String,
    pub position: String,
    pub defense: i32,
    pub magic_defense: i32,
    pub weight: f64,
    pub required_level: i32,
    pub equippable: Classes,
    pub slot: i32,
    pub elemental: String,
    pub refining: String,
    pub destruction: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AmmunitionAttributes {
    #[serde(rename = "type")]
    pub series: String,
    pub weight: f64,
    pub attack: i32,
    pub magic_attack: i32,
    pub elemental: String,
    pub required_level: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PetAttributes {
    pub weight: f64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equippable: Option<String>,
}

/// Why a single record couldn't be built. Never aborts the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("parameter `{0}` is missing")]
    MissingParameter(&'static str),
    #[error("parameter `{parameter}` has non-numeric value `{value}`")]
    InvalidNumber {
        parameter: &'static str,
        value: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, EnumIs)]
pub enum DiagnosticKind {
    /// The id has no entry in the name table.
    NameNotFound,
    /// The name or the weight is `-`: the entry was removed from the game.
    MissingItem,
    /// No category matched. Holds the parsed parameters.
    NotSupported(Vec<String>),
    /// A card was built, but its equipment location is unknown.
    UnresolvedLocation,
    Malformed(RecordError),
    InvalidId,
}

/// Something noteworthy that happened to a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub id: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    #[must_use]
    pub fn new(id: &str, kind: DiagnosticKind) -> Self {
        Self {
            id: id.to_owned(),
            kind,
        }
    }

    /// Whether the record was dropped. Only unresolved card locations keep it.
    #[must_use]
    pub fn is_dropped(&self) -> bool {
        !self.kind.is_unresolved_location()
    }

    #[must_use]
    pub fn level(&self) -> Level {
        match self.kind {
            DiagnosticKind::NameNotFound
            | DiagnosticKind::MissingItem
            | DiagnosticKind::UnresolvedLocation => Level::Debug,
            DiagnosticKind::NotSupported(_)
            | DiagnosticKind::Malformed(_)
            | DiagnosticKind::InvalidId => Level::Warn,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = &self.id;

        match &self.kind {
            DiagnosticKind::NameNotFound => {
                write!(f, "{NAME_NOT_FOUND_MSG} [{id}]")
            }
            DiagnosticKind::MissingItem => {
                write!(f, "{MISSING_ITEM_MSG} [{id}]")
            }
            DiagnosticKind::NotSupported(params) => {
                write!(f, "{NOT_SUPPORTED_MSG} [{id}] {params:?}")
            }
            DiagnosticKind::UnresolvedLocation => {
                write!(f, "{UNRESOLVED_LOCATION_MSG} [{id}]")
            }
            DiagnosticKind::Malformed(err) => {
                write!(f, "{MALFORMED_MSG} [{id}]: {err}")
            }
            DiagnosticKind::InvalidId => write!(f, "{INVALID_ID_MSG} [{id}]"),
        }
    }
}

/// Result of reading a description table.
#[derive(Debug, Default, Clone)]
pub struct Output {
    pub items: Items,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{}: IO error occurred: {}", .0.display(), .1)]
    Io(PathBuf, io::Error),
    #[error("{}: required file not found", .0.display())]
    MissingFile(PathBuf),
    #[error("Serializing JSON data failed with: {0}")]
    Json(#[from] serde_json::Error),
}

/// Locations of the client tables a conversion reads.
#[derive(Debug, Clone)]
pub struct SourceFiles {
    pub description: PathBuf,
    pub names: PathBuf,
    pub slots: PathBuf,
    pub card_prefixes: PathBuf,
    pub card_postfixes: PathBuf,
}

impl SourceFiles {
    /// Uses the client's own file names inside `dir`.
    #[must_use]
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir: &Path = dir.as_ref();

        Self {
            description: dir.join(DESCRIPTION_FILE),
            names: dir.join(NAMES_FILE),
            slots: dir.join(SLOTS_FILE),
            card_prefixes: dir.join(CARD_PREFIX_FILE),
            card_postfixes: dir.join(CARD_POSTFIX_FILE),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        [
            &self.card_postfixes,
            &self.card_prefixes,
            &self.description,
            &self.names,
            &self.slots,
        ]
        .into_iter()
        .map(PathBuf::as_path)
    }
}
