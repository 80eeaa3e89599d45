use super::{CallToAction, CardItem, Hero, Icon, PageContent};
use crate::config::CONTACT_EMAIL;

const STATS: &[CardItem] = &[
    CardItem::new("35%", "Less Unplanned Downtime", Icon::Wrench),
    CardItem::new("20%", "Higher Throughput", Icon::Industry),
    CardItem::new("15%", "Lower Energy Costs", Icon::Leaf),
    CardItem::new("500+", "Connected Production Lines", Icon::Microchip),
];

const FEATURES: &[CardItem] = &[
    CardItem::new(
        "Predictive Maintenance",
        "Sensor data and failure models warn you about worn equipment before it stops the line.",
        Icon::Wrench,
    ),
    CardItem::new(
        "Production Monitoring",
        "Live dashboards for every machine, shift and plant, from a single control room.",
        Icon::ChartLine,
    ),
    CardItem::new(
        "Process Automation",
        "Close the loop between quality measurements and machine settings automatically.",
        Icon::Gears,
    ),
    CardItem::new(
        "Edge Connectivity",
        "Collect data from PLCs and IoT devices on the shop floor, even on unreliable networks.",
        Icon::Microchip,
    ),
];

const USE_CASES: &[CardItem] = &[
    CardItem::new(
        "Quality Control",
        "Catch defects early with vision inspection and statistical process control.",
        Icon::MagnifyingGlass,
    ),
    CardItem::new(
        "Energy Management",
        "Track consumption per line and shift heavy loads to off-peak hours.",
        Icon::Leaf,
    ),
    CardItem::new(
        "Inventory Planning",
        "Match raw material orders to actual production schedules and supplier lead times.",
        Icon::Truck,
    ),
    CardItem::new(
        "Workforce Scheduling",
        "Plan shifts around demand forecasts and the skills each line needs.",
        Icon::Users,
    ),
];

pub static PAGE: PageContent = PageContent {
    slug: "manufacturing",
    nav_label: "Manufacturing",
    hero: Hero {
        title: "Manufacturing",
        subtitle: "Smarter factories through connected machines, live production data and predictive insight.",
        background: "/assets/manufacturing-hero.jpg",
    },
    stats: STATS,
    features_heading: "Built for the Factory Floor",
    features: FEATURES,
    use_cases_heading: "Applications Across the Plant",
    use_cases: USE_CASES,
    call_to_action: CallToAction {
        heading: "Modernize Your Operations",
        body: "See how connected analytics can raise output and cut costs on your lines.",
        label: "Get in Touch",
        contact: CONTACT_EMAIL,
    },
};
