// branding shown in the header and footer
//
// this is compile-time configuration; the page has no runtime settings
pub struct Site {
    pub brand: &'static str,
    pub brand_accent: &'static str,
    pub tagline: &'static str,
    pub owner: &'static str,
    pub copyright_year: u16,
}

pub const SITE: Site = Site {
    brand: "Fix",
    brand_accent: "sk.in",
    tagline: "Healthy skin, happy you.",
    owner: "GlowCare",
    copyright_year: 2023,
};

impl Site {
    pub fn title(&self) -> String {
        format!("{}{}", self.brand, self.brand_accent)
    }

    pub fn copyright(&self) -> String {
        format!(
            "\u{a9} {} {}. All rights reserved.",
            self.copyright_year, self.owner
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_text() {
        assert_eq!(SITE.copyright(), "© 2023 GlowCare. All rights reserved.");
    }

    #[test]
    fn title_joins_brand_and_accent() {
        assert_eq!(SITE.title(), "Fixsk.in");
    }
}
