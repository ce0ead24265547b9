//! Localized display names for generated text

use super::{ItemField, LocaleKey};
use crate::database::Database;

/// Read-only name lookups in one language.
///
/// Every lookup falls back to the default locale; item names then fall back
/// to the template's built-in value.
#[derive(Debug, Clone, Copy)]
pub struct Names<'a> {
    db: &'a Database,
    lang: &'a str,
}

impl<'a> Names<'a> {
    pub fn new(db: &'a Database, lang: &'a str) -> Self {
        Self { db, lang }
    }

    pub fn lang(&self) -> &'a str {
        self.lang
    }

    fn item_field(&self, id: &str, field: ItemField) -> &'a str {
        let props = self.db.items.get(id).map(|item| &item.props);
        self.db
            .locales
            .item_text(self.lang, id, field, props)
            .unwrap_or_default()
    }

    pub fn item_name(&self, id: &str) -> &'a str {
        self.item_field(id, ItemField::Name)
    }

    pub fn item_short_name(&self, id: &str) -> &'a str {
        self.item_field(id, ItemField::ShortName)
    }

    /// Trader nickname, or the trader's own nickname when no locale has one
    pub fn trader_name(&self, trader_id: &str) -> &'a str {
        self.db
            .locales
            .lookup(self.lang, LocaleKey::TraderNickname(trader_id))
            .or_else(|| self.db.trader(trader_id).map(|t| t.base.nickname.as_str()))
            .unwrap_or_default()
    }

    pub fn quest_name<'b>(&self, quest_id: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.db
            .locales
            .lookup(self.lang, LocaleKey::QuestName(quest_id))
            .unwrap_or(quest_id)
    }

    pub fn area_name(&self, area_type: i64) -> String {
        self.db
            .locales
            .lookup(self.lang, LocaleKey::HideoutArea(area_type))
            .map_or_else(|| LocaleKey::HideoutArea(area_type).to_string(), str::to_string)
    }

    pub fn material_name<'b>(&self, material: &'b str) -> &'b str
    where
        'a: 'b,
    {
        self.db
            .locales
            .lookup(self.lang, LocaleKey::ArmorMaterial(material))
            .unwrap_or(material)
    }

    /// Render a duration in seconds as `<h><HOURS> <m><Min>`
    pub fn duration(&self, seconds: f64) -> String {
        let hours = (seconds / 3600.0).trunc();
        let minutes = crate::text::round_half_up((seconds - hours * 3600.0) / 60.0);
        let hours_unit = self.db.locales.lookup(self.lang, LocaleKey::Raw("HOURS")).unwrap_or("h");
        let minutes_unit = self.db.locales.lookup(self.lang, LocaleKey::Raw("Min")).unwrap_or("min");
        format!("{hours}{hours_unit} {minutes}{minutes_unit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::{LocaleDict, LocaleStore};

    fn db() -> Database {
        let mut locales = LocaleStore::default();
        locales.insert(
            "en".to_string(),
            LocaleDict::from([
                ("t Nickname".to_string(), "Prapor".to_string()),
                ("hideout_area_10_name".to_string(), "Workbench".to_string()),
                ("HOURS".to_string(), "h".to_string()),
                ("Min".to_string(), "min".to_string()),
            ]),
        );
        locales.insert(
            "ru".to_string(),
            LocaleDict::from([("t Nickname".to_string(), "Прапор".to_string())]),
        );
        Database {
            locales,
            ..Database::default()
        }
    }

    #[test]
    fn test_fallback_chain() {
        let db = db();
        let ru = Names::new(&db, "ru");
        assert_eq!(ru.trader_name("t"), "Прапор");
        assert_eq!(ru.area_name(10), "Workbench");
        assert_eq!(ru.quest_name("q"), "q");
        assert_eq!(ru.item_name("missing"), "");
        assert_eq!(ru.material_name("Aramid"), "Aramid");
    }

    #[test]
    fn test_duration() {
        let db = db();
        let names = Names::new(&db, "en");
        assert_eq!(names.duration(145_000.0), "40h 17min");
        assert_eq!(names.duration(90.0), "0h 2min");
    }
}
