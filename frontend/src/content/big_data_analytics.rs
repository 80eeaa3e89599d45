use super::{CallToAction, CardItem, Hero, Icon, PageContent};
use crate::config::CONTACT_EMAIL;

const STATS: &[CardItem] = &[
    CardItem::new("90%", "Faster Insight Discovery", Icon::ChartLine),
    CardItem::new("100TB+", "Data Processed Daily", Icon::Database),
    CardItem::new("24/7", "Real-Time Monitoring", Icon::Clock),
    CardItem::new("99.9%", "Platform Uptime", Icon::ShieldHalved),
];

const FEATURES: &[CardItem] = &[
    CardItem::new(
        "Real-Time Processing",
        "Stream and analyze events the moment they arrive, without waiting for nightly batch jobs.",
        Icon::Bolt,
    ),
    CardItem::new(
        "Predictive Models",
        "Machine learning pipelines that forecast demand, churn and risk from your historical data.",
        Icon::Brain,
    ),
    CardItem::new(
        "Unified Data Lake",
        "Bring structured and unstructured sources together in one governed, queryable store.",
        Icon::Layers,
    ),
    CardItem::new(
        "Elastic Cloud Scale",
        "Compute that grows with your workload and scales back down when the job is done.",
        Icon::Cloud,
    ),
    CardItem::new(
        "Interactive Dashboards",
        "Self-service visualizations that let every team explore the numbers behind their decisions.",
        Icon::ChartPie,
    ),
    CardItem::new(
        "Enterprise Security",
        "Role-based access, encryption at rest and in transit, and a full audit trail.",
        Icon::ShieldHalved,
    ),
];

const USE_CASES: &[CardItem] = &[
    CardItem::new(
        "Customer Analytics",
        "Segment audiences and personalize offers based on behavior across every channel.",
        Icon::Users,
    ),
    CardItem::new(
        "Fraud Detection",
        "Flag anomalous transactions in milliseconds before they turn into losses.",
        Icon::MagnifyingGlass,
    ),
    CardItem::new(
        "Supply Chain Optimization",
        "Forecast inventory needs and reroute shipments as conditions change.",
        Icon::Truck,
    ),
];

pub static PAGE: PageContent = PageContent {
    slug: "big-data-analytics",
    nav_label: "Big Data",
    hero: Hero {
        title: "Big Data Analytics",
        subtitle: "Turn massive, fast-moving datasets into decisions your teams can act on today.",
        background: "/assets/big-data-hero.jpg",
    },
    stats: STATS,
    features_heading: "Analytics Without Limits",
    features: FEATURES,
    use_cases_heading: "Where Our Customers Use It",
    use_cases: USE_CASES,
    call_to_action: CallToAction {
        heading: "Ready to Unlock Your Data?",
        body: "Talk to our analytics team about a platform sized to your data and your goals.",
        label: "Contact Our Team",
        contact: CONTACT_EMAIL,
    },
};
