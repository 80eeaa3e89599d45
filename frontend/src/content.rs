//! Literal page content. Every page is a `static` that is never mutated.

pub mod big_data_analytics;
pub mod manufacturing;

/// Symbolic glyph keys, rendered through Font Awesome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ChartLine,
    Database,
    Brain,
    Bolt,
    ShieldHalved,
    Cloud,
    Gears,
    Industry,
    Clock,
    Wrench,
    Leaf,
    Truck,
    ChartPie,
    MagnifyingGlass,
    Users,
    Microchip,
    Layers,
}

impl Icon {
    pub const fn key(self) -> &'static str {
        match self {
            Icon::ChartLine => "chart-line",
            Icon::Database => "database",
            Icon::Brain => "brain",
            Icon::Bolt => "bolt",
            Icon::ShieldHalved => "shield-halved",
            Icon::Cloud => "cloud",
            Icon::Gears => "gears",
            Icon::Industry => "industry",
            Icon::Clock => "clock",
            Icon::Wrench => "wrench",
            Icon::Leaf => "leaf",
            Icon::Truck => "truck",
            Icon::ChartPie => "chart-pie",
            Icon::MagnifyingGlass => "magnifying-glass",
            Icon::Users => "users",
            Icon::Microchip => "microchip",
            Icon::Layers => "layer-group",
        }
    }

    pub fn class(self) -> String {
        format!("fas fa-{}", self.key())
    }
}

/// One stat, feature or use case. Which of the three it is depends only on
/// the grid it is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardItem {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
}

impl CardItem {
    pub const fn new(title: &'static str, description: &'static str, icon: Icon) -> Self {
        Self { title, description, icon }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    pub title: &'static str,
    pub subtitle: &'static str,
    /// Path of the banner image under `/assets`.
    pub background: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallToAction {
    pub heading: &'static str,
    pub body: &'static str,
    pub label: &'static str,
    pub contact: &'static str,
}

impl CallToAction {
    pub fn href(&self) -> String {
        format!("mailto:{}", self.contact)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    /// Path segment under `/solutions/`.
    pub slug: &'static str,
    pub nav_label: &'static str,
    pub hero: Hero,
    pub stats: &'static [CardItem],
    pub features_heading: &'static str,
    pub features: &'static [CardItem],
    pub use_cases_heading: &'static str,
    pub use_cases: &'static [CardItem],
    pub call_to_action: CallToAction,
}

/// Registered content pages, in navigation order.
pub static PAGES: &[&PageContent] = &[
    &big_data_analytics::PAGE,
    &manufacturing::PAGE,
];

pub fn find(slug: &str) -> Option<&'static PageContent> {
    PAGES.iter().copied().find(|page| page.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique_and_url_safe() {
        let mut seen = HashSet::new();
        for page in PAGES {
            assert!(seen.insert(page.slug), "duplicate slug {}", page.slug);
            assert!(
                page.slug
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "slug {} is not url safe",
                page.slug
            );
        }
    }

    #[test]
    fn test_find_returns_registered_page() {
        let page = find("manufacturing").unwrap();
        assert_eq!(page.hero.title, "Manufacturing");
        assert!(std::ptr::eq(page, &manufacturing::PAGE));
    }

    #[test]
    fn test_find_unknown_slug() {
        assert!(find("quantum-computing").is_none());
        assert!(find("").is_none());
        assert!(find("Manufacturing").is_none());
    }

    #[test]
    fn test_icon_class_uses_font_awesome_prefix() {
        assert_eq!(Icon::ChartLine.class(), "fas fa-chart-line");
        assert_eq!(Icon::Layers.key(), "layer-group");
    }

    #[test]
    fn test_call_to_action_links_to_contact_address() {
        for page in PAGES {
            let href = page.call_to_action.href();
            assert!(href.starts_with("mailto:"));
            assert!(href.ends_with(page.call_to_action.contact));
        }
    }

    #[test]
    fn test_big_data_stats_lead_with_insight_and_volume() {
        let stats = big_data_analytics::PAGE.stats;
        assert_eq!(
            stats[0],
            CardItem::new("90%", "Faster Insight Discovery", Icon::ChartLine)
        );
        assert_eq!(
            stats[1],
            CardItem::new("100TB+", "Data Processed Daily", Icon::Database)
        );
    }
}
