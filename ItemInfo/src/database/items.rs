//! Item templates and their properties

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{lenient_number, number_from_value};
use crate::ids;

/// Item templates keyed by id, in snapshot order.
pub type ItemTable = IndexMap<String, TemplateItem>;

/// One entry of the item template table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateItem {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_name", default)]
    pub name: String,
    /// Parent category id; empty for the tree root
    #[serde(rename = "_parent", default)]
    pub parent: String,
    /// `"Item"` for real templates, `"Node"` for category nodes
    #[serde(rename = "_type", default)]
    pub kind: String,
    #[serde(rename = "_props", default)]
    pub props: ItemProps,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TemplateItem {
    /// Whether this template is a concrete item rather than a category node
    pub fn is_item(&self) -> bool {
        self.kind == "Item"
    }

    /// Grid footprint (width × height)
    pub fn slot_count(&self) -> f64 {
        self.props.width.unwrap_or(1.0) * self.props.height.unwrap_or(1.0)
    }

    /// Maximum stack size, never below one
    pub fn stack_size(&self) -> f64 {
        self.props.stack_max_size.unwrap_or(1.0).max(1.0)
    }

    pub fn weight(&self) -> f64 {
        self.props.weight.unwrap_or(0.0)
    }
}

/// Typed view over an item's `_props`.
///
/// Each field is read on its own from the raw map, so one malformed value
/// only blanks that field. Writing emits the raw map unchanged apart from
/// `BackgroundColor`, the only prop the enrichment pass changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ItemProps {
    pub name: Option<String>,
    pub short_name: Option<String>,
    pub description: Option<String>,
    pub background_color: Option<String>,
    pub quest_item: Option<bool>,

    // Physical
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub stack_max_size: Option<f64>,
    /// Resource capacity (fuel, water filter, ...)
    pub resource: Option<f64>,

    // Armor
    pub armor_class: Option<f64>,
    pub armor_material: Option<String>,
    pub max_durability: Option<f64>,

    // Ammo
    pub penetration_power: Option<f64>,
    pub damage: Option<f64>,
    pub ammo_type: Option<String>,
    pub buckshot_bullets: Option<f64>,

    // Attachments
    pub ergonomics: Option<f64>,
    pub recoil: Option<f64>,
    pub loudness: Option<f64>,
    pub accuracy: Option<f64>,

    // Headsets
    pub distortion: Option<f64>,
    pub compressor_gain: Option<f64>,
    pub compressor_threshold: Option<f64>,
    pub ambient_volume: Option<f64>,
    pub resonance: Option<f64>,
    pub cutoff_freq: Option<f64>,

    // Containers and mod slots
    pub grids: Option<Vec<Grid>>,
    pub slots: Option<Vec<ItemSlot>>,
    pub stack_slots: Option<Vec<ItemSlot>>,

    /// `_props` exactly as loaded
    pub raw: Map<String, Value>,
}

const BACKGROUND_COLOR: &str = "BackgroundColor";

fn number(raw: &Map<String, Value>, key: &str) -> Option<f64> {
    raw.get(key).and_then(number_from_value)
}

fn text(raw: &Map<String, Value>, key: &str) -> Option<String> {
    raw.get(key).and_then(Value::as_str).map(str::to_string)
}

fn parsed<T: DeserializeOwned>(raw: &Map<String, Value>, key: &str) -> Option<T> {
    raw.get(key).and_then(|value| T::deserialize(value).ok())
}

impl From<Map<String, Value>> for ItemProps {
    fn from(raw: Map<String, Value>) -> Self {
        Self {
            name: text(&raw, "Name"),
            short_name: text(&raw, "ShortName"),
            description: text(&raw, "Description"),
            background_color: text(&raw, BACKGROUND_COLOR),
            quest_item: raw.get("QuestItem").and_then(Value::as_bool),
            width: number(&raw, "Width"),
            height: number(&raw, "Height"),
            weight: number(&raw, "Weight"),
            stack_max_size: number(&raw, "StackMaxSize"),
            resource: number(&raw, "Resource"),
            armor_class: number(&raw, "armorClass"),
            armor_material: text(&raw, "ArmorMaterial"),
            max_durability: number(&raw, "MaxDurability"),
            penetration_power: number(&raw, "PenetrationPower"),
            damage: number(&raw, "Damage"),
            ammo_type: text(&raw, "ammoType"),
            buckshot_bullets: number(&raw, "buckshotBullets"),
            ergonomics: number(&raw, "Ergonomics"),
            recoil: number(&raw, "Recoil"),
            loudness: number(&raw, "Loudness"),
            accuracy: number(&raw, "Accuracy"),
            distortion: number(&raw, "Distortion"),
            compressor_gain: number(&raw, "CompressorGain"),
            compressor_threshold: number(&raw, "CompressorTreshold"),
            ambient_volume: number(&raw, "AmbientVolume"),
            resonance: number(&raw, "Resonance"),
            cutoff_freq: number(&raw, "CutoffFreq"),
            grids: parsed(&raw, "Grids"),
            slots: parsed(&raw, "Slots"),
            stack_slots: parsed(&raw, "StackSlots"),
            raw,
        }
    }
}

impl From<ItemProps> for Map<String, Value> {
    fn from(props: ItemProps) -> Self {
        let mut raw = props.raw;
        if let Some(color) = props.background_color {
            raw.insert(BACKGROUND_COLOR.to_string(), Value::String(color));
        }
        raw
    }
}

/// A container grid
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Grid {
    #[serde(rename = "_props", default)]
    pub props: GridProps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GridProps {
    #[serde(rename = "cellsH", default, deserialize_with = "lenient_number")]
    pub cells_h: Option<f64>,
    #[serde(rename = "cellsV", default, deserialize_with = "lenient_number")]
    pub cells_v: Option<f64>,
}

impl Grid {
    pub fn cells(&self) -> f64 {
        self.props.cells_h.unwrap_or(0.0) * self.props.cells_v.unwrap_or(0.0)
    }
}

/// A mod slot or stack slot
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemSlot {
    #[serde(rename = "_name", default)]
    pub name: String,
    #[serde(rename = "_props", default)]
    pub props: SlotProps,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotProps {
    #[serde(default)]
    pub filters: Vec<SlotFilter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlotFilter {
    /// Built-in armor plate template
    #[serde(rename = "Plate", default)]
    pub plate: Option<String>,
    #[serde(rename = "Filter", default)]
    pub filter: Vec<String>,
}

impl ItemSlot {
    /// First template id accepted by the slot
    pub fn first_filter(&self) -> Option<&str> {
        self.props
            .filters
            .first()
            .and_then(|f| f.filter.first())
            .map(String::as_str)
    }

    /// Built-in plate of the slot
    pub fn plate(&self) -> Option<&str> {
        self.props.filters.first().and_then(|f| f.plate.as_deref())
    }
}

/// Category an item is classified under for tiering and tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemClass {
    Key,
    Ammo,
    AmmoBox,
    Headwear,
    Armor,
    Vest,
    Silencer,
    FlashHider,
    PistolGrip,
    ForeGrip,
    Bipod,
    Magazine,
    Generic,
}

impl ItemClass {
    /// Classify an item by its parent (keys: its grandparent).
    pub fn of(item: &TemplateItem, items: &ItemTable) -> Self {
        let parent = item.parent.as_str();
        let grandparent = items.get(parent).map(|p| p.parent.as_str());

        if grandparent == Some(ids::KEY) {
            return Self::Key;
        }

        match parent {
            ids::AMMO => Self::Ammo,
            ids::AMMO_BOX => Self::AmmoBox,
            ids::HEADWEAR => Self::Headwear,
            ids::ARMOR => Self::Armor,
            ids::VEST => Self::Vest,
            ids::SILENCER => Self::Silencer,
            ids::FLASH_HIDER => Self::FlashHider,
            ids::PISTOL_GRIP => Self::PistolGrip,
            ids::FORE_GRIP => Self::ForeGrip,
            ids::BIPOD => Self::Bipod,
            ids::MAGAZINE => Self::Magazine,
            _ => Self::Generic,
        }
    }

    /// Whether plate-carrier style armor tags apply
    pub fn is_armored_gear(self) -> bool {
        matches!(self, Self::Headwear | Self::Armor | Self::Vest)
    }
}

/// Walk the parent chain of `id`, nearest ancestor first.
///
/// Stops at the first missing parent and never visits more templates than
/// the table holds, so a malformed (cyclic) tree still terminates.
pub fn ancestors<'a>(items: &'a ItemTable, id: &str) -> Vec<&'a str> {
    let mut chain = Vec::new();
    let mut current = items.get(id);

    while let Some(item) = current {
        if item.parent.is_empty() || chain.len() >= items.len() {
            break;
        }
        chain.push(item.parent.as_str());
        current = items.get(&item.parent);
    }

    chain
}
