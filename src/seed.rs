//! Built-in demo catalogs
//!
//! Four flags driving hero and promo content across the banking,
//! marketplace and devops verticals.

use flagpost_content::{ContentCatalog, ContentEntry, FlagMapping};
use flagpost_flags::{Flag, FlagCatalog, Variation};

pub const HERO_BANNER_VARIANT: &str = "hero-banner-variant";
pub const PROMO_CAMPAIGN: &str = "promo-campaign";
pub const PRODUCT_RECOMMENDATION: &str = "product-recommendation";
pub const ONBOARDING_FLOW: &str = "onboarding-flow";

pub fn demo_flags() -> Vec<Flag> {
    vec![
        Flag::boolean(HERO_BANNER_VARIANT, "Hero Banner Variant"),
        Flag::new(
            PROMO_CAMPAIGN,
            "Promotional Campaign",
            vec![
                Variation::string("default", "default"),
                Variation::string("summer-sale", "summer"),
                Variation::string("holiday-special", "holiday"),
            ],
        ),
        Flag::new(
            PRODUCT_RECOMMENDATION,
            "Product Recommendation Engine",
            vec![
                Variation::string("basic", "basic"),
                Variation::string("ai-powered", "ai"),
            ],
        ),
        Flag::new(
            ONBOARDING_FLOW,
            "User Onboarding Flow",
            vec![
                Variation::string("standard", "standard"),
                Variation::string("simplified", "simplified"),
                Variation::string("gamified", "gamified"),
            ],
        ),
    ]
}

pub fn demo_entries() -> Vec<ContentEntry> {
    vec![
        ContentEntry::new("hero-control")
            .with_title("Scale feature management with confidence")
            .with_description(
                "A feature management platform that empowers all teams to deliver and control software.",
            )
            .with_cta("Start free trial", "/signup")
            .with_image(
                "https://images.unsplash.com/photo-1551434678-e076c223a692?w=800&h=400&fit=crop",
                "Team collaboration",
            ),
        ContentEntry::new("hero-treatment")
            .with_title("Ship faster with progressive delivery")
            .with_description(
                "Deploy code safely, release features strategically, and measure impact.",
            )
            .with_cta("See how it works", "/demo")
            .with_image(
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800&h=400&fit=crop",
                "Progressive delivery",
            ),
        ContentEntry::new("promo-default")
            .with_title("Try feature flags for free")
            .with_description("Get started with our 14-day trial")
            .with_cta("Start trial", "/trial"),
        ContentEntry::new("promo-summer")
            .with_title("Summer Special: 25% off Enterprise")
            .with_description("Limited time offer - Save on annual Enterprise plans")
            .with_cta("Claim offer", "/summer-sale"),
        ContentEntry::new("promo-holiday")
            .with_title("Holiday Bundle: Platform + Professional Services")
            .with_description("Complete setup and optimization package")
            .with_cta("Learn more", "/holiday-bundle"),
        ContentEntry::new("bank-hero-standard")
            .with_title("Welcome to ToggleBank")
            .with_description("Your trusted partner in digital banking solutions")
            .with_cta("Open Account", "/open-account"),
        ContentEntry::new("bank-hero-premium")
            .with_title("Exclusive Premium Banking Experience")
            .with_description("Personalized wealth management and premium perks")
            .with_cta("Explore Premium", "/premium"),
        ContentEntry::new("marketplace-hero-basic")
            .with_title("Galaxy Marketplace")
            .with_description("Discover amazing products from sellers worldwide")
            .with_cta("Start Shopping", "/browse"),
        ContentEntry::new("marketplace-hero-ai")
            .with_title("AI-Powered Shopping Experience")
            .with_description("Get personalized recommendations tailored just for you")
            .with_cta("Discover Now", "/ai-browse"),
        ContentEntry::new("devops-hero-standard")
            .with_title("Release Portal")
            .with_description("Streamline your deployment workflow")
            .with_cta("View Releases", "/releases"),
        ContentEntry::new("devops-hero-advanced")
            .with_title("Advanced Release Intelligence")
            .with_description("AI-powered insights and automated rollback protection")
            .with_cta("Enable Intelligence", "/ai-releases"),
    ]
}

pub fn demo_mappings() -> Vec<FlagMapping> {
    vec![
        FlagMapping::new(HERO_BANNER_VARIANT)
            .with_variation(0, "control", "hero-control")
            .with_variation(1, "treatment", "hero-treatment"),
        FlagMapping::new(PROMO_CAMPAIGN)
            .with_variation(0, "default", "promo-default")
            .with_variation(1, "summer-sale", "promo-summer")
            .with_variation(2, "holiday-special", "promo-holiday"),
        FlagMapping::new(PRODUCT_RECOMMENDATION)
            .with_variation(0, "basic", "marketplace-hero-basic")
            .with_variation(1, "ai-powered", "marketplace-hero-ai"),
        FlagMapping::new(ONBOARDING_FLOW)
            .with_variation(0, "standard", "bank-hero-standard")
            .with_variation(1, "simplified", "bank-hero-premium")
            .with_variation(2, "gamified", "devops-hero-advanced"),
    ]
}

pub fn demo_flag_catalog() -> flagpost_flags::Result<FlagCatalog> {
    FlagCatalog::new(demo_flags())
}

pub fn demo_content_catalog() -> flagpost_content::Result<ContentCatalog> {
    ContentCatalog::new(demo_entries(), demo_mappings())
}
