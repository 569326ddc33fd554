use std::fmt;
use std::str::FromStr;

// the closed set of categories the landing page knows about
//
// the declared order here is the order everything is rendered in, both the
// selector options and the card grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkinType {
    Dry,
    Oily,
    Combination,
    Sensitive,
}

impl SkinType {
    pub const ALL: [SkinType; 4] = [
        SkinType::Dry,
        SkinType::Oily,
        SkinType::Combination,
        SkinType::Sensitive,
    ];

    /// The human-readable label, also used as the selector option value.
    pub fn label(self) -> &'static str {
        match self {
            SkinType::Dry => "Dry",
            SkinType::Oily => "Oily",
            SkinType::Combination => "Combination",
            SkinType::Sensitive => "Sensitive",
        }
    }

    /// The lowercased label, used as the route segment.
    pub fn slug(self) -> &'static str {
        match self {
            SkinType::Dry => "dry",
            SkinType::Oily => "oily",
            SkinType::Combination => "combination",
            SkinType::Sensitive => "sensitive",
        }
    }

    pub fn path(self) -> String {
        format!("/skin-type/{}", self.slug())
    }

    pub fn entry(self) -> &'static SkinTypeEntry {
        // SKIN_TYPES is declared in the same order as ALL
        &SKIN_TYPES[self as usize]
    }
}

// Display writes the slug so that the enum can sit directly in a route
impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for SkinType {
    type Err = anyhow::Error;

    // case-insensitive after trimming whitespace, so the label ("Combination"),
    // the slug ("combination") and " COMBINATION " all parse
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        SkinType::ALL
            .into_iter()
            .find(|t| t.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| anyhow::Error::msg(format!("unknown skin type: {s:?}")))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkinTypeEntry {
    pub skin_type: SkinType,
    pub description: &'static str,
    pub emoji: &'static str,
}

impl SkinTypeEntry {
    pub fn label(&self) -> &'static str {
        self.skin_type.label()
    }

    pub fn link(&self) -> String {
        self.skin_type.path()
    }

    /// Text of the selector option for this entry.
    pub fn option_label(&self) -> String {
        format!("{} {}", self.label(), self.emoji)
    }
}

pub static SKIN_TYPES: [SkinTypeEntry; 4] = [
    SkinTypeEntry {
        skin_type: SkinType::Dry,
        description: "Discover products that hydrate and nourish dry skin.",
        emoji: "🌵",
    },
    SkinTypeEntry {
        skin_type: SkinType::Oily,
        description: "Find solutions to control excess oil and achieve a matte finish.",
        emoji: "🛢️",
    },
    SkinTypeEntry {
        skin_type: SkinType::Combination,
        description: "Balance your skin with products designed for combination skin types.",
        emoji: "⚖️",
    },
    SkinTypeEntry {
        skin_type: SkinType::Sensitive,
        description: "Gentle and soothing products for sensitive skin.",
        emoji: "🌼",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_follow_declared_order() {
        let order: Vec<SkinType> = SKIN_TYPES.iter().map(|e| e.skin_type).collect();
        assert_eq!(order, SkinType::ALL.to_vec());

        for t in SkinType::ALL {
            assert_eq!(t.entry().skin_type, t);
        }
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in SKIN_TYPES.iter().enumerate() {
            for b in SKIN_TYPES.iter().skip(i + 1) {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn links_are_lowercased_labels() {
        for entry in SKIN_TYPES.iter() {
            assert_eq!(
                entry.link(),
                format!("/skin-type/{}", entry.label().to_lowercase())
            );
        }

        assert_eq!(SkinType::Dry.path(), "/skin-type/dry");
        assert_eq!(SkinType::Oily.path(), "/skin-type/oily");
        assert_eq!(SkinType::Combination.path(), "/skin-type/combination");
        assert_eq!(SkinType::Sensitive.path(), "/skin-type/sensitive");
    }

    #[test]
    fn option_label_is_type_then_emoji() {
        assert_eq!(SkinType::Dry.entry().option_label(), "Dry 🌵");
        assert_eq!(SkinType::Oily.entry().option_label(), "Oily 🛢️");
        assert_eq!(SkinType::Combination.entry().option_label(), "Combination ⚖️");
        assert_eq!(SkinType::Sensitive.entry().option_label(), "Sensitive 🌼");
    }

    #[test]
    fn parses_labels_and_slugs() {
        for t in SkinType::ALL {
            assert_eq!(t.label().parse::<SkinType>().unwrap(), t);
            assert_eq!(t.slug().parse::<SkinType>().unwrap(), t);
            assert_eq!(t.to_string().parse::<SkinType>().unwrap(), t);
        }

        assert_eq!(" OILY ".parse::<SkinType>().unwrap(), SkinType::Oily);
        assert_eq!("cOmBiNaTiOn\n".parse::<SkinType>().unwrap(), SkinType::Combination);
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("".parse::<SkinType>().is_err());
        assert!("normal".parse::<SkinType>().is_err());
        assert!("/skin-type/dry".parse::<SkinType>().is_err());
    }
}
