use serde::Deserialize;

const SITE_CONTENT_JSON: &str = include_str!("../config/site.json");

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NavLink {
    pub label: String,
    /// Id of the section the link scrolls to.
    pub target: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Skill {
    pub name: String,
    pub percent: u8,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FilterTag {
    pub label: String,
    pub tag: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PortfolioItem {
    pub title: String,
    pub category: String,
    pub summary: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub tagline: String,
    pub nav: Vec<NavLink>,
    pub about: String,
    pub skills: Vec<Skill>,
    pub filters: Vec<FilterTag>,
    pub portfolio: Vec<PortfolioItem>,
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// Content bundled into the binary at build time.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(SITE_CONTENT_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::ALL_FILTER;

    #[test]
    fn bundled_content_parses() {
        let content = SiteContent::bundled().expect("bundled content is valid JSON");

        assert!(!content.nav.is_empty());
        assert!(!content.testimonials.is_empty());
        assert!(content.skills.iter().all(|skill| skill.percent <= 100));
    }

    #[test]
    fn every_item_category_has_a_filter_button() {
        let content = SiteContent::bundled().expect("bundled content is valid JSON");

        assert!(content.filters.iter().any(|filter| filter.tag == ALL_FILTER));
        for item in &content.portfolio {
            assert!(
                content.filters.iter().any(|filter| filter.tag == item.category),
                "no filter for category {}",
                item.category
            );
        }
    }
}
