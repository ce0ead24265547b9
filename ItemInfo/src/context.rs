//! Read-only view shared by the text generators

use crate::database::Database;
use crate::locale::{I18n, Names, Phrase, Translations};
use crate::pricing::PriceResolver;
use crate::text::{format_price, round_half_up};

/// Everything a generator needs to render one item's text
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub db: &'a Database,
    pub names: Names<'a>,
    pub i18n: I18n<'a>,
    pub prices: PriceResolver<'a>,
    pub group_digits: bool,
}

impl<'a> Context<'a> {
    pub fn new(db: &'a Database, lang: &'a str, translations: &'a Translations, group_digits: bool) -> Self {
        let names = Names::new(db, lang);
        Self {
            db,
            names,
            i18n: translations.for_language(lang),
            prices: PriceResolver::new(db, names),
            group_digits,
        }
    }

    pub fn phrase(&self, phrase: Phrase) -> &'a str {
        self.i18n.get(phrase)
    }

    /// A value rounded and formatted as a price
    pub fn price(&self, value: f64) -> String {
        format_price(round_half_up(value), self.group_digits)
    }

    /// `<trader> lv<level>`
    pub fn trader_level(&self, trader_id: &str, level: u32) -> String {
        format!(
            "{} {}{}",
            self.names.trader_name(trader_id),
            self.phrase(Phrase::Lv),
            level
        )
    }

    /// `<area> lv<level>`
    pub fn area_level(&self, area_type: i64, level: u32) -> String {
        format!(
            "{} {}{}",
            self.names.area_name(area_type),
            self.phrase(Phrase::Lv),
            level
        )
    }
}
