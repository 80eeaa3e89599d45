//! Section tree for content pages.
//!
//! `sections` is the whole content page renderer minus the markup. The Yew
//! component only turns each `Section` into HTML, so ordering and card
//! mapping are covered by plain unit tests.

use crate::content::{CallToAction, CardItem, Hero, PageContent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Stats,
    Features,
    UseCases,
    CallToAction,
}

impl SectionKind {
    pub const ORDER: [SectionKind; 5] = [
        SectionKind::Hero,
        SectionKind::Stats,
        SectionKind::Features,
        SectionKind::UseCases,
        SectionKind::CallToAction,
    ];

    pub fn class(self) -> &'static str {
        match self {
            SectionKind::Hero => "page-hero",
            SectionKind::Stats => "stats-section",
            SectionKind::Features => "features-section",
            SectionKind::UseCases => "use-cases-section",
            SectionKind::CallToAction => "cta-section",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Section<'a> {
    Hero(&'a Hero),
    Grid {
        kind: SectionKind,
        heading: Option<&'a str>,
        cards: &'a [CardItem],
    },
    CallToAction(&'a CallToAction),
}

impl<'a> Section<'a> {
    pub fn kind(&self) -> SectionKind {
        match self {
            Section::Hero(_) => SectionKind::Hero,
            Section::Grid { kind, .. } => *kind,
            Section::CallToAction(_) => SectionKind::CallToAction,
        }
    }

    /// Cards in display order. Banners have none.
    pub fn cards(&self) -> &'a [CardItem] {
        match self {
            Section::Grid { cards, .. } => *cards,
            _ => &[],
        }
    }
}

pub fn sections(page: &PageContent) -> [Section<'_>; 5] {
    [
        Section::Hero(&page.hero),
        Section::Grid {
            kind: SectionKind::Stats,
            heading: None,
            cards: page.stats,
        },
        Section::Grid {
            kind: SectionKind::Features,
            heading: Some(page.features_heading),
            cards: page.features,
        },
        Section::Grid {
            kind: SectionKind::UseCases,
            heading: Some(page.use_cases_heading),
            cards: page.use_cases,
        },
        Section::CallToAction(&page.call_to_action),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{big_data_analytics, Icon, PAGES};

    const TWO_STATS: &[CardItem] = &[
        CardItem::new("90%", "Faster Insight Discovery", Icon::ChartLine),
        CardItem::new("100TB+", "Data Processed Daily", Icon::Database),
    ];

    fn page_with(stats: &'static [CardItem], features: &'static [CardItem]) -> PageContent {
        PageContent {
            slug: "test-page",
            nav_label: "Test",
            hero: Hero {
                title: "Test Page",
                subtitle: "Subtitle",
                background: "/assets/test.jpg",
            },
            stats,
            features_heading: "Features",
            features,
            use_cases_heading: "Use Cases",
            use_cases: &[],
            call_to_action: CallToAction {
                heading: "Call us",
                body: "We answer.",
                label: "Contact",
                contact: "test@example.com",
            },
        }
    }

    #[test]
    fn test_every_page_has_five_sections_in_order() {
        for page in PAGES {
            let kinds: Vec<SectionKind> = sections(page).iter().map(Section::kind).collect();
            assert_eq!(kinds, SectionKind::ORDER);
        }
    }

    #[test]
    fn test_cards_follow_source_order() {
        let page = &big_data_analytics::PAGE;
        let tree = sections(page);
        let expected = [page.stats, page.features, page.use_cases];
        for (section, source) in tree[1..4].iter().zip(expected) {
            let cards = section.cards();
            assert_eq!(cards.len(), source.len());
            for (i, card) in cards.iter().enumerate() {
                assert_eq!(card.title, source[i].title);
                assert_eq!(card.description, source[i].description);
                assert_eq!(card.icon, source[i].icon);
            }
        }
    }

    #[test]
    fn test_two_stats_render_two_cards() {
        let page = page_with(TWO_STATS, &[]);
        let tree = sections(&page);
        let stats = tree[1].cards();
        assert_eq!(tree[1].kind(), SectionKind::Stats);
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].title, "90%");
        assert_eq!(stats[0].description, "Faster Insight Discovery");
        assert_eq!(stats[0].icon.key(), "chart-line");
        assert_eq!(stats[1].title, "100TB+");
        assert_eq!(stats[1].description, "Data Processed Daily");
        assert_eq!(stats[1].icon.key(), "database");
    }

    #[test]
    fn test_empty_sequence_keeps_section() {
        let page = page_with(&[], &[]);
        let tree = sections(&page);
        assert_eq!(tree.len(), 5);
        assert_eq!(tree[2].kind(), SectionKind::Features);
        assert!(tree[2].cards().is_empty());
        assert_eq!(
            tree[3],
            Section::Grid {
                kind: SectionKind::UseCases,
                heading: Some("Use Cases"),
                cards: &[],
            }
        );
    }

    #[test]
    fn test_duplicate_cards_are_kept() {
        const REPEATED: &[CardItem] = &[
            CardItem::new("Same", "Card", Icon::Bolt),
            CardItem::new("Same", "Card", Icon::Bolt),
        ];
        let page = page_with(&[], REPEATED);
        assert_eq!(sections(&page)[2].cards().len(), 2);
    }

    #[test]
    fn test_sections_are_idempotent() {
        for page in PAGES {
            assert_eq!(sections(page), sections(page));
        }
    }

    #[test]
    fn test_banners_carry_page_constants() {
        let page = &big_data_analytics::PAGE;
        let tree = sections(page);
        assert_eq!(tree[0], Section::Hero(&page.hero));
        assert_eq!(tree[4], Section::CallToAction(&page.call_to_action));
        assert!(tree[0].cards().is_empty());
        assert!(tree[4].cards().is_empty());
    }
}
