//! Fragments added to item names and short names

use std::collections::HashMap;

use crate::database::{ArmorMaterial, ItemClass, ItemProps, ItemTable, TemplateItem};
use crate::text::{number, round_half_up, round_with_precision};

/// Slot names carrying the built-in protection of armored gear
const HELMET_TOP_SLOT: &str = "Helmet_top";
const SOFT_ARMOR_FRONT_SLOT: &str = "Soft_armor_front";
const FRONT_PLATE_SLOT: &str = "Front_plate";
const SIDE_PLATE_SLOT: &str = "Right_side_plate";

/// ` {<code>}`
pub fn tier_code(code: &str) -> String {
    format!(" {{{code}}}")
}

/// ` (<damage × pellets>/<penetration>)`
pub fn bullet_stats(ammo: &ItemProps) -> String {
    let pellets = if ammo.ammo_type.as_deref() == Some("buckshot") {
        ammo.buckshot_bullets.unwrap_or(1.0)
    } else {
        1.0
    };
    format!(
        " ({}/{})",
        number(ammo.damage.unwrap_or(0.0) * pellets),
        number(ammo.penetration_power.unwrap_or(0.0))
    )
}

/// Inner grid capacity of a container against its own footprint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerCapacity {
    pub cells: f64,
    pub footprint: f64,
}

impl ContainerCapacity {
    /// `None` for items without grids
    pub fn of(item: &TemplateItem) -> Option<Self> {
        let grids = item.props.grids.as_ref().filter(|g| !g.is_empty())?;
        Some(Self {
            cells: grids.iter().map(|g| g.cells()).sum(),
            footprint: item.slot_count(),
        })
    }

    /// Cells gained per cell occupied, two decimals
    pub fn efficiency(&self) -> f64 {
        round_with_precision(self.cells / self.footprint, 2)
    }

    pub fn size(&self) -> &'static str {
        match self.cells {
            c if c >= 50.0 => "XL",
            c if c >= 30.0 => "L",
            c if c >= 15.0 => "M",
            c if c >= 8.0 => "S",
            _ => "XS",
        }
    }

    /// `[<size>] `
    pub fn name_prefix(&self) -> String {
        format!("[{}] ", self.size())
    }

    /// ` [<cells>, x<efficiency>]`
    pub fn name_suffix(&self) -> String {
        format!(" [{}, x{}]", number(self.cells), number(self.efficiency()))
    }

    /// `[<size>, <cells>, x<efficiency>] `
    pub fn short_name_prefix(&self) -> String {
        format!(
            "[{}, {}, x{}] ",
            self.size(),
            number(self.cells),
            number(self.efficiency())
        )
    }
}

/// Protection of an armor piece with a known material
#[derive(Debug, Clone, Copy)]
pub struct ArmorRating<'a> {
    pub class: f64,
    pub max_durability: f64,
    pub material_name: &'a str,
    pub material: &'a ArmorMaterial,
}

impl<'a> ArmorRating<'a> {
    /// Rating of an item with a positive armor class.
    ///
    /// `None` when the item has no class or its material is unknown.
    pub fn of(props: &'a ItemProps, materials: &'a HashMap<String, ArmorMaterial>) -> Option<Self> {
        let class = props.armor_class.filter(|c| *c > 0.0)?;
        let material_name = props.armor_material.as_deref()?;
        let Some(material) = materials.get(material_name) else {
            tracing::debug!("Unknown armor material {}", material_name);
            return None;
        };
        Some(Self {
            class,
            max_durability: props.max_durability.unwrap_or(0.0),
            material_name,
            material,
        })
    }

    pub fn effective_durability(&self) -> f64 {
        round_half_up(self.material.effective_durability(self.max_durability))
    }

    /// `[L<class>: <effective durability>] `
    pub fn name_prefix(&self) -> String {
        format!(
            "[L{}: {}] ",
            number(self.class),
            number(self.effective_durability())
        )
    }

    /// ` (<material>)`
    pub fn name_suffix(&self) -> String {
        format!(" ({})", self.material_name)
    }
}

/// Built-in protection of helmets, armor and vests
#[derive(Debug, Clone, Copy, Default)]
pub struct GearPlates<'a> {
    /// Top (helmet) or front soft armor insert
    pub insert: Option<ArmorRating<'a>>,
    pub front_plate: bool,
    pub side_plate: bool,
}

impl<'a> GearPlates<'a> {
    /// Inspect the mod slots of an armored gear item
    pub fn of(
        item: &'a TemplateItem,
        class: ItemClass,
        items: &'a ItemTable,
        materials: &'a HashMap<String, ArmorMaterial>,
    ) -> Self {
        let mut plates = Self::default();
        let body_armor = matches!(class, ItemClass::Armor | ItemClass::Vest);

        for slot in item.props.slots.iter().flatten() {
            let is_insert = (slot.name == HELMET_TOP_SLOT && class == ItemClass::Headwear)
                || (slot.name == SOFT_ARMOR_FRONT_SLOT && body_armor);

            if is_insert {
                plates.insert = slot
                    .plate()
                    .and_then(|plate| items.get(plate))
                    .and_then(|plate| ArmorRating::of(&plate.props, materials));
            } else if body_armor && slot.name == FRONT_PLATE_SLOT {
                plates.front_plate = true;
            } else if body_armor && slot.name == SIDE_PLATE_SLOT {
                plates.side_plate = true;
            }
        }

        plates
    }

    /// `L<class>[+][+][: <durability>]`, empty when nothing was found
    pub fn label(&self) -> String {
        let mut label = String::new();
        if let Some(insert) = &self.insert {
            label.push_str(&format!("L{}", number(insert.class)));
        }
        if self.front_plate {
            label.push('+');
        }
        if self.side_plate {
            label.push('+');
        }
        if let Some(insert) = &self.insert {
            label.push_str(&format!(": {}", number(insert.effective_durability())));
        }
        label
    }

    /// `[<label>] ` and ` [<material>]`, when there is anything to show
    pub fn tags(&self) -> Option<(String, String)> {
        let label = self.label();
        if label.is_empty() {
            return None;
        }
        let material = self.insert.map(|i| i.material_name).unwrap_or_default();
        Some((format!("[{label}] "), format!(" [{material}]")))
    }
}

/// Stat tag of a weapon attachment, such as `[E: 5|R: -3] `
pub fn attachment_tag(class: ItemClass, props: &ItemProps) -> Option<String> {
    let stat = |value: Option<f64>| number(value.unwrap_or(0.0));

    let info = match class {
        ItemClass::Silencer => format!(
            "L: {}|E: {}|R: {}",
            stat(props.loudness),
            stat(props.ergonomics),
            stat(props.recoil)
        ),
        ItemClass::FlashHider => format!(
            "R: {}|E: {}|A: {}",
            stat(props.recoil),
            stat(props.ergonomics),
            stat(props.accuracy)
        ),
        ItemClass::PistolGrip | ItemClass::Magazine => format!("E: {}", stat(props.ergonomics)),
        ItemClass::ForeGrip | ItemClass::Bipod => {
            format!("E: {}|R: {}", stat(props.ergonomics), stat(props.recoil))
        }
        _ => return None,
    };

    Some(format!("[{info}] "))
}
