//! Stat lines placed in item descriptions

use crate::context::Context;
use crate::database::ItemProps;
use crate::locale::Phrase;
use crate::pricing::SlotValue;
use crate::text::tags::{ArmorRating, ContainerCapacity};
use crate::text::{number, round_half_up, round_with_precision};

/// One priced line: a unit price, its slot densities and where it comes from
#[derive(Debug, Clone, Copy)]
pub struct PriceLine<'a> {
    pub price: f64,
    pub value: SlotValue,
    /// `Flea` or a trader name
    pub source: &'a str,
}

impl PriceLine<'_> {
    /// `<price> ₽ [<per slot> ₽/s] {<per kg> ₽/s/kg} (<source>)`
    pub fn render(&self, ctx: &Context<'_>) -> String {
        format!(
            "{} ₽ [{} ₽/s] {{{} ₽/s/kg}} ({})\n",
            ctx.price(self.price),
            ctx.price(self.value.per_slot),
            ctx.price(self.value.per_slot_per_kg),
            self.source
        )
    }
}

/// Description prefix: an optional flea line, the trader line, a blank line
pub fn price_block(ctx: &Context<'_>, flea: Option<PriceLine<'_>>, trader: PriceLine<'_>) -> String {
    let mut block = flea.map(|line| line.render(ctx)).unwrap_or_default();
    block.push_str(&trader.render(ctx));
    block.push('\n');
    block
}

/// Effective durability, material factor and repair degradation of an armor piece
pub fn armor_block(ctx: &Context<'_>, rating: &ArmorRating<'_>, with_class: bool) -> String {
    let class = if with_class {
        format!("{}: {} | ", ctx.phrase(Phrase::ArmorClass), number(rating.class))
    } else {
        String::new()
    };
    let material = rating.material;

    format!(
        "{}{}: {} ({}: {} x {}: {}) | {}: {}% - {}%\n\n",
        class,
        ctx.phrase(Phrase::EffectiveDurability),
        number(rating.effective_durability()),
        ctx.phrase(Phrase::Max),
        number(round_half_up(rating.max_durability)),
        ctx.names.material_name(rating.material_name),
        number(round_with_precision(1.0 / material.destructibility, 1)),
        ctx.phrase(Phrase::RepairDegradation),
        number(round_half_up(material.min_repair_degradation * 100.0)),
        number(round_half_up(material.max_repair_degradation * 100.0))
    )
}

/// `Slot efficiency: ×<efficiency> (<cells>/<footprint>)`
pub fn slot_efficiency_block(ctx: &Context<'_>, capacity: &ContainerCapacity) -> String {
    format!(
        "{}: ×{} ({}/{})\n\n",
        ctx.phrase(Phrase::SlotEfficiency),
        number(capacity.efficiency()),
        number(capacity.cells),
        number(capacity.footprint)
    )
}

/// Acoustic profile of a headset; `None` for anything without distortion stats
pub fn headset_block(ctx: &Context<'_>, props: &ItemProps) -> Option<String> {
    let distortion = props.distortion?;
    let stat = |value: Option<f64>| value.unwrap_or(0.0);
    let gain = stat(props.compressor_gain);
    let threshold = stat(props.compressor_threshold);

    Some(format!(
        "{}: {}dB | {}: {} +{}dB × {} {}dB ≈ ×{} {} | {}: {}@{}Hz | {}: {}%\n\n",
        ctx.phrase(Phrase::AmbientVolume),
        number(stat(props.ambient_volume)),
        ctx.phrase(Phrase::Compressor),
        ctx.phrase(Phrase::Gain),
        number(gain),
        ctx.phrase(Phrase::Threshold),
        number(threshold),
        number((gain * threshold / 100.0).abs()),
        ctx.phrase(Phrase::Boost),
        ctx.phrase(Phrase::ResonanceFilter),
        number(stat(props.resonance)),
        number(stat(props.cutoff_freq)),
        ctx.phrase(Phrase::Distortion),
        number(round_half_up(distortion * 100.0))
    ))
}
