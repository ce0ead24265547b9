//! Titled sections and description suffix order

use std::fmt;

/// Section headings, never localized
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionTitle {
    BarterFor,
    BarterWith,
    Production,
    Quests,
    Hideout,
    Crafting,
}

impl fmt::Display for SectionTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BarterFor => "BARTER FOR",
            Self::BarterWith => "BARTER WITH",
            Self::Production => "PRODUCTION",
            Self::Quests => "QUESTS",
            Self::Hideout => "HIDEOUT",
            Self::Crafting => "CRAFTING",
        })
    }
}

/// `TITLE\n---------\n<body>\n`, or nothing for an empty body
pub fn section(title: SectionTitle, body: &str) -> String {
    if body.len() > 1 {
        format!("{title}\n---------\n{body}\n")
    } else {
        String::new()
    }
}

/// Everything appended to a description, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptionSuffix {
    pub headset: String,
    pub armor: String,
    pub slot_efficiency: String,
    pub quests: String,
    pub hideout: String,
    pub barter_for: String,
    pub production: String,
    pub crafting: String,
    pub barter_with: String,
}

impl DescriptionSuffix {
    /// Two newlines followed by every block in order
    pub fn render(&self) -> String {
        [
            "\n\n",
            &self.headset,
            &self.armor,
            &self.slot_efficiency,
            &self.quests,
            &self.hideout,
            &self.barter_for,
            &self.production,
            &self.crafting,
            &self.barter_with,
        ]
        .concat()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_section_skips_empty_body() {
        assert_eq!(section(SectionTitle::Quests, ""), "");
        assert_eq!(section(SectionTitle::Quests, "\n"), "");
        assert_eq!(
            section(SectionTitle::Hideout, "Need ×1 > Lavatory lv1\n"),
            "HIDEOUT\n---------\nNeed ×1 > Lavatory lv1\n\n"
        );
    }

    #[test]
    fn test_suffix_order() {
        let suffix = DescriptionSuffix {
            headset: "h".into(),
            armor: "a".into(),
            quests: "q".into(),
            barter_with: "w".into(),
            ..Default::default()
        };
        assert_eq!(suffix.render(), "\n\nhaqw");
        assert_eq!(DescriptionSuffix::default().render(), "\n\n");
    }
}
