//! Shared test utilities.
//!
//! Every module tests against the same fixture site: a dashboard-style
//! export with a published home page, three menu items, hero stats and
//! cookie consent switched on. Tests that need a variation layer a JSON
//! overlay on top with [`config_with`], which goes through the real
//! load path (stock defaults → fixture → overlay → validate).
//!
//! ```rust
//! let config = config_with(json!({ "maintenanceMode": true }));
//! assert!(config.maintenance_mode());
//! ```

use crate::config::{SiteConfig, resolve_config, stock_defaults_value};
use serde_json::Value;

/// The fixture site, as the dashboard would export it.
pub const SAMPLE_SITE_JSON: &str = r##"{
    "themeName": "Glassmorphism",
    "appName": "Test Site",
    "appAuthor": "John Doe",
    "appDescription": "A comprehensive description of your amazing app and what it offers.",
    "tagline": "Your amazing tagline here",
    "menuItems": [
        { "href": "/", "label": "Home" },
        { "href": "/about", "label": "About" },
        { "href": "/contact", "label": "Contact" }
    ],
    "heroTitle": "Welcome to Our Amazing Site",
    "heroSubtitle": "Building the future, one step at a time",
    "heroDescription": "We create innovative solutions that help businesses grow.",
    "heroBadge": "New Launch",
    "heroCTA": "Get Started",
    "heroCTALink": "/contact",
    "heroStats": [
        { "label": "Active Users", "value": "10,000+" },
        { "label": "Projects Completed", "value": "500+" },
        { "label": "Customer Satisfaction", "value": "99%" }
    ],
    "enableHeroAnimation": true,
    "heroImageUrl": "https://images.example.com/hero.jpg",
    "footerText": "© 2024 Test Company. All rights reserved.",
    "primaryColor": "#10b981",
    "seoTitle": "Test Site - Building Amazing Things",
    "seoDescription": "We create innovative solutions. Join thousands of satisfied customers today.",
    "cookieConsentEnabled": true,
    "gdprBannerEnabled": false,
    "pages": {
        "home": {
            "page_name": "home",
            "page_title": "Home",
            "page_description": "Welcome to your new website",
            "sections": [
                { "id": "welcome-section", "content": "<div class=\"welcome\"><h1>Welcome</h1><p>This is your homepage.</p></div>" }
            ],
            "is_published": true
        }
    }
}"##;

/// The fixture site with no overrides.
pub fn sample_config() -> SiteConfig {
    config_with(Value::Null)
}

/// The fixture site with `overlay` merged on top.
pub fn config_with(overlay: Value) -> SiteConfig {
    let sample: Value = serde_json::from_str(SAMPLE_SITE_JSON).unwrap();
    resolve_config(stock_defaults_value(), [sample, overlay])
        .unwrap_or_else(|err| panic!("fixture config failed to resolve: {err}"))
}

/// Page keys in document order.
pub fn page_keys(config: &SiteConfig) -> Vec<&str> {
    config.pages().map(|(key, _)| key).collect()
}
