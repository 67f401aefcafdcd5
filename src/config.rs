//! Site configuration.
//!
//! A site is described by one configuration document, usually the `site.json`
//! exported by the dashboard. TOML is accepted as well, which is handier for
//! hand-maintained sites. Field names follow the export format: camelCase at
//! the site level, snake_case inside page entries.
//!
//! ## Layering
//!
//! Documents are layered on top of the stock defaults, and on top of each
//! other when several `--config` files are given:
//!
//! ```text
//! stock defaults          ← always present (see `stock_config_json`)
//! site.json               ← dashboard export
//! site.local.toml         ← local overrides, e.g. maintenanceMode = true
//! ```
//!
//! Objects merge key by key, arrays and scalars replace, and `null` means
//! "not set here" so the lower layer shows through. Pages merge per key, so
//! an overlay can flip `is_published` on one page without restating it.
//!
//! ## Fail-open Fields
//!
//! Optional fields that are present but malformed (a number where a URL was
//! expected, a string where a list was expected) are logged and treated as
//! absent. Lists are checked entry by entry: a bad menu item, section or
//! redirect rule is dropped and its neighbours kept. Unknown keys are logged
//! and ignored. Only the handful of checks in
//! [`SiteConfig::validate`] reject a config outright.
//!
//! ## Derived Values
//!
//! `secondaryColor` is never stored from the primary color: it is either an
//! explicit override or computed by [`SiteConfig::secondary_color`] on every
//! read, so editing `primaryColor` can't leave a stale inverse behind.

use crate::colors;
use crate::routing::DEFAULT_REDIRECT_STATUS;
use crate::themes::ThemeName;
use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Page key mapped to the site root.
pub const HOME_PAGE: &str = "home";

pub const DEFAULT_SITEMAP_PRIORITY: f64 = 0.5;
pub const DEFAULT_SITEMAP_CHANGEFREQ: &str = "monthly";
pub const DEFAULT_MAINTENANCE_MESSAGE: &str =
    "We are currently performing scheduled maintenance. Please check back soon.";

/// Literal token in `footerText` replaced by the current year.
pub const FOOTER_YEAR_TOKEN: &str = "2024";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format: {0} (expected .json or .toml)")]
    UnsupportedFormat(String),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// The whole site: branding, hero, policy flags, theme and pages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(deserialize_with = "lenient")]
    pub theme_name: Option<String>,

    pub app_name: String,
    #[serde(deserialize_with = "lenient")]
    pub app_author: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub app_description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub tagline: String,
    #[serde(deserialize_with = "lenient_list")]
    pub menu_items: Vec<MenuItem>,

    pub hero_title: String,
    #[serde(deserialize_with = "lenient")]
    pub hero_subtitle: Option<String>,
    pub hero_description: String,
    #[serde(deserialize_with = "lenient")]
    pub hero_badge: Option<String>,
    #[serde(rename = "heroCTA", deserialize_with = "lenient")]
    pub hero_cta: Option<String>,
    #[serde(rename = "heroCTALink", deserialize_with = "lenient")]
    pub hero_cta_link: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub hero_stats: Vec<HeroStat>,
    #[serde(deserialize_with = "lenient")]
    pub enable_hero_animation: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub hero_background_image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hero_image_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub hero_video_url: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub footer_text: String,
    #[serde(deserialize_with = "lenient")]
    pub primary_color: String,
    /// Explicit override; see [`SiteConfig::secondary_color`].
    #[serde(deserialize_with = "lenient")]
    pub secondary_color: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub og_image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub favicon: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub seo_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub seo_description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub seo_keywords: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub project_phase: Option<ProjectPhase>,
    #[serde(deserialize_with = "lenient")]
    pub app_category: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub industry: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub project_tags: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub expected_launch_date: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub actual_launch_date: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub maintenance_mode: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub maintenance_message: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub sitemap_enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub robots_txt_custom: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub redirect_rules: Vec<RedirectRule>,
    #[serde(deserialize_with = "lenient")]
    pub canonical_domain: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub cookie_consent_enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub gdpr_banner_enabled: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub privacy_policy_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub terms_of_service_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub notify_on_deploy_failure: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub notify_on_deploy_success: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub notification_email: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub content_language: Option<String>,
    #[serde(deserialize_with = "lenient_list")]
    pub social_media_links: Vec<SocialLink>,

    pub pages: Pages,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_name: None,
            app_name: "My Site".to_string(),
            app_author: None,
            app_description: None,
            tagline: String::new(),
            menu_items: vec![MenuItem {
                href: "/".to_string(),
                label: "Home".to_string(),
            }],
            hero_title: "Welcome".to_string(),
            hero_subtitle: None,
            hero_description: "Your new website is ready.".to_string(),
            hero_badge: None,
            hero_cta: None,
            hero_cta_link: None,
            hero_stats: Vec::new(),
            enable_hero_animation: None,
            hero_background_image: None,
            hero_image_url: None,
            hero_video_url: None,
            footer_text: "© 2024. All rights reserved.".to_string(),
            primary_color: colors::NEUTRAL_COLOR.to_string(),
            secondary_color: None,
            og_image: None,
            favicon: None,
            seo_title: None,
            seo_description: None,
            seo_keywords: None,
            project_phase: None,
            app_category: None,
            industry: None,
            project_tags: Vec::new(),
            expected_launch_date: None,
            actual_launch_date: None,
            maintenance_mode: None,
            maintenance_message: None,
            sitemap_enabled: None,
            robots_txt_custom: None,
            redirect_rules: Vec::new(),
            canonical_domain: None,
            cookie_consent_enabled: None,
            gdpr_banner_enabled: None,
            privacy_policy_url: None,
            terms_of_service_url: None,
            notify_on_deploy_failure: None,
            notify_on_deploy_success: None,
            notification_email: None,
            content_language: None,
            social_media_links: Vec::new(),
            pages: Pages::default(),
        }
    }
}

impl SiteConfig {
    /// The secondary brand color: the explicit override if one is set,
    /// otherwise the inverse of `primaryColor`. Computed on every call.
    pub fn secondary_color(&self) -> String {
        match non_empty(self.secondary_color.as_deref()) {
            Some(explicit) => explicit.to_string(),
            None => colors::invert_or_neutral(&self.primary_color),
        }
    }

    /// The theme selected by `themeName`, with alias and default handling.
    pub fn theme(&self) -> ThemeName {
        ThemeName::resolve(self.theme_name.as_deref())
    }

    pub fn page(&self, key: &str) -> Option<&PageEntry> {
        self.pages.get(key)
    }

    /// Pages in document order.
    pub fn pages(&self) -> impl Iterator<Item = (&str, &PageEntry)> {
        self.pages.iter()
    }

    pub fn maintenance_mode(&self) -> bool {
        self.maintenance_mode == Some(true)
    }

    /// Sitemap generation is on unless explicitly disabled.
    pub fn sitemap_enabled(&self) -> bool {
        self.sitemap_enabled != Some(false)
    }

    pub fn cookie_consent_enabled(&self) -> bool {
        self.cookie_consent_enabled == Some(true)
    }

    pub fn gdpr_banner_enabled(&self) -> bool {
        self.gdpr_banner_enabled == Some(true)
    }

    pub fn maintenance_message(&self) -> &str {
        non_empty(self.maintenance_message.as_deref()).unwrap_or(DEFAULT_MAINTENANCE_MESSAGE)
    }

    /// Footer text with the first year token replaced by `year`.
    pub fn footer_text_for_year(&self, year: i32) -> String {
        self.footer_text
            .replacen(FOOTER_YEAR_TOKEN, &year.to_string(), 1)
    }

    /// Check the few constraints that make a config unusable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("appName", &self.app_name),
            ("heroTitle", &self.hero_title),
            ("heroDescription", &self.hero_description),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!("{field} must not be empty")));
            }
        }

        for (index, rule) in self.redirect_rules.iter().enumerate() {
            if !is_route_target(&rule.from) || !is_route_target(&rule.to) {
                return Err(ConfigError::Validation(format!(
                    "redirectRules[{index}]: from/to must start with '/' or a URL scheme (got {:?} -> {:?})",
                    rule.from, rule.to
                )));
            }
        }

        for (key, page) in self.pages() {
            if let Some(priority) = page.sitemap_priority {
                if !(0.0..=1.0).contains(&priority) {
                    return Err(ConfigError::Validation(format!(
                        "pages.{key}.sitemap_priority must be between 0 and 1 (got {priority})"
                    )));
                }
            }
            let mut seen = std::collections::HashSet::new();
            for section in &page.sections {
                if !seen.insert(section.id.as_str()) {
                    return Err(ConfigError::Validation(format!(
                        "pages.{key}: duplicate section id {:?}",
                        section.id
                    )));
                }
            }
        }
        Ok(())
    }
}

fn is_route_target(target: &str) -> bool {
    target.starts_with('/') || target.contains("://")
}

/// `Some(s)` only when `s` is present and not blank.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.trim().is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub href: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

/// A configured redirect. `status` falls back to 301 when absent or zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RedirectRule {
    pub from: String,
    pub to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl RedirectRule {
    /// The configured status, or 301 when it is missing or zero.
    pub fn effective_status(&self) -> u16 {
        match self.status {
            Some(status) if status != 0 => status,
            _ => DEFAULT_REDIRECT_STATUS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectPhase {
    Planning,
    Development,
    Testing,
    Staging,
    Production,
    Maintenance,
}

/// One block of page body content. `content` is raw, author-provided HTML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub id: String,
    pub content: String,
}

/// A page of the site, keyed by its page key in [`SiteConfig::pages`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageEntry {
    #[serde(deserialize_with = "lenient")]
    pub page_name: String,
    #[serde(deserialize_with = "lenient")]
    pub page_title: String,
    #[serde(deserialize_with = "lenient")]
    pub page_description: String,
    #[serde(deserialize_with = "lenient_list")]
    pub sections: Vec<ContentSection>,
    #[serde(deserialize_with = "lenient")]
    pub is_published: bool,

    #[serde(deserialize_with = "lenient")]
    pub meta_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub meta_description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub meta_keywords: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub og_title: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub og_description: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub og_image: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub canonical_url: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub page_slug: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub is_featured: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub sitemap_priority: Option<f64>,
    #[serde(deserialize_with = "lenient")]
    pub sitemap_changefreq: Option<String>,

    #[serde(deserialize_with = "lenient")]
    pub noindex: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub nofollow: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub is_hidden: Option<bool>,
    #[serde(deserialize_with = "lenient")]
    pub requires_auth: Option<bool>,
    #[serde(deserialize_with = "lenient_list")]
    pub allowed_roles: Vec<String>,
}

impl PageEntry {
    /// URL segment for this page: `page_slug` if set, else the page key.
    pub fn slug<'a>(&'a self, key: &'a str) -> &'a str {
        non_empty(self.page_slug.as_deref())
            .map(|s| s.trim_matches('/'))
            .unwrap_or(key)
    }

    /// Absolute URL path: `/` for the home page, `/{slug}` otherwise.
    pub fn url_path(&self, key: &str) -> String {
        if key == HOME_PAGE {
            "/".to_string()
        } else {
            format!("/{}", self.slug(key))
        }
    }

    pub fn sitemap_priority(&self) -> f64 {
        self.sitemap_priority.unwrap_or(DEFAULT_SITEMAP_PRIORITY)
    }

    pub fn sitemap_changefreq(&self) -> &str {
        non_empty(self.sitemap_changefreq.as_deref()).unwrap_or(DEFAULT_SITEMAP_CHANGEFREQ)
    }

    pub fn noindex(&self) -> bool {
        self.noindex == Some(true)
    }

    pub fn nofollow(&self) -> bool {
        self.nofollow == Some(true)
    }

    pub fn is_hidden(&self) -> bool {
        self.is_hidden == Some(true)
    }

    pub fn requires_auth(&self) -> bool {
        self.requires_auth == Some(true)
    }

    /// Listed in `sitemap.xml`: published, indexable and not hidden.
    pub fn in_sitemap(&self) -> bool {
        self.is_published && !self.noindex() && !self.is_hidden()
    }
}

// =============================================================================
// Ordered page map
// =============================================================================

/// Pages keyed by page key, in document order.
///
/// Order matters: navigation-less pages are still emitted to the sitemap and
/// the build report in the order the author wrote them.
#[derive(Debug, Clone, Default)]
pub struct Pages(Vec<(String, PageEntry)>);

impl Pages {
    pub fn get(&self, key: &str) -> Option<&PageEntry> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut PageEntry> {
        self.0.iter_mut().find(|(k, _)| k == key).map(|(_, p)| p)
    }

    /// Insert or replace a page. Replacing keeps the original position.
    pub fn insert(&mut self, key: impl Into<String>, page: PageEntry) {
        let key = key.into();
        match self.get_mut(&key) {
            Some(existing) => *existing = page,
            None => self.0.push((key, page)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &PageEntry)> {
        self.0.iter().map(|(k, p)| (k.as_str(), p))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Pages {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, page) in &self.0 {
            map.serialize_entry(key, page)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Pages {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PagesVisitor;

        impl<'de> Visitor<'de> for PagesVisitor {
            type Value = Pages;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of page key to page entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Pages, A::Error> {
                let mut pages = Pages::default();
                while let Some((key, value)) = access.next_entry::<String, Value>()? {
                    match PageEntry::deserialize(&value) {
                        Ok(page) => pages.insert(key, page),
                        Err(err) => {
                            tracing::warn!(page = %key, %err, "ignoring malformed page");
                        }
                    }
                }
                Ok(pages)
            }
        }

        deserializer.deserialize_map(PagesVisitor)
    }
}

/// Deserialize a field, falling back to its default when the value is
/// malformed. `null` reads as the default without a warning.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(from_value_or_warn(value).unwrap_or_default())
}

/// Deserialize a list item by item, dropping malformed entries and keeping
/// the rest in order. A non-list value reads as empty.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.into_iter().filter_map(from_value_or_warn).collect()),
        other => {
            tracing::warn!(value = %other, "ignoring malformed config list");
            Ok(Vec::new())
        }
    }
}

fn from_value_or_warn<T: DeserializeOwned>(value: Value) -> Option<T> {
    match T::deserialize(&value) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            tracing::warn!(%err, value = %value, "ignoring malformed config value");
            None
        }
    }
}

// =============================================================================
// Loading, layering, and validation
// =============================================================================

/// The stock defaults as a JSON value, the base layer for every load.
pub fn stock_defaults_value() -> Value {
    serde_json::to_value(SiteConfig::default()).unwrap_or(Value::Null)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Objects are merged key-by-key; keys keep their first-seen position.
/// - `null` in the overlay leaves the base value untouched.
/// - Any other overlay value replaces the base value entirely.
pub fn merge_values(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(slot) => {
                        let base_val = std::mem::take(slot);
                        *slot = merge_values(base_val, overlay_val);
                    }
                    None => {
                        base_map.insert(key, overlay_val);
                    }
                }
            }
            Value::Object(base_map)
        }
        (base, Value::Null) => base,
        (_, overlay) => overlay,
    }
}

/// Read one config document as a raw JSON value. The format is chosen by
/// file extension.
pub fn load_raw_config(path: &Path) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Ok(serde_json::from_str(&content)?),
        Some("toml") => {
            let table: toml::Value = toml::from_str(&content)?;
            Ok(serde_json::to_value(table)?)
        }
        _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Merge overlays onto `base` in order, then deserialize and validate.
pub fn resolve_config(
    base: Value,
    overlays: impl IntoIterator<Item = Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = overlays.into_iter().fold(base, merge_values);
    let config: SiteConfig = serde_ignored::deserialize(merged, |path| {
        tracing::warn!(key = %path, "ignoring unknown config key");
    })?;
    config.validate()?;
    Ok(config)
}

/// Load and layer config files over the stock defaults.
///
/// Later paths override earlier ones.
pub fn load_config<P: AsRef<Path>>(paths: &[P]) -> Result<SiteConfig, ConfigError> {
    let overlays = paths
        .iter()
        .map(|p| load_raw_config(p.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    resolve_config(stock_defaults_value(), overlays)
}

/// A documented starter `site.json`, printed by the `gen-config` command.
pub fn stock_config_json() -> &'static str {
    r##"{
  "themeName": "Glassmorphism",

  "appName": "My Site",
  "appAuthor": "Jane Doe",
  "appDescription": "A short description of what the site offers.",
  "tagline": "Your tagline here",
  "menuItems": [
    { "href": "/", "label": "Home" },
    { "href": "/about", "label": "About" }
  ],

  "heroTitle": "Welcome",
  "heroSubtitle": "Building the future, one step at a time",
  "heroDescription": "Your new website is ready.",
  "heroBadge": "New",
  "heroCTA": "Get Started",
  "heroCTALink": "/about",
  "heroStats": [
    { "label": "Active Users", "value": "10,000+" },
    { "label": "Customer Satisfaction", "value": "99%" }
  ],
  "enableHeroAnimation": true,

  "footerText": "© 2024 My Company. All rights reserved.",
  "primaryColor": "#10b981",

  "seoTitle": "My Site - Building Amazing Things",
  "seoDescription": "A short description for search engines.",

  "maintenanceMode": false,
  "sitemapEnabled": true,
  "cookieConsentEnabled": true,
  "gdprBannerEnabled": false,
  "redirectRules": [
    { "from": "/old-blog/*", "to": "/blog/*", "status": 301 }
  ],

  "pages": {
    "home": {
      "page_name": "home",
      "page_title": "Home",
      "page_description": "Welcome to your new website",
      "sections": [
        { "id": "welcome", "content": "<h2>Welcome</h2><p>Edit this section in your site config.</p>" }
      ],
      "is_published": true,
      "sitemap_priority": 1.0,
      "sitemap_changefreq": "weekly"
    },
    "about": {
      "page_name": "about",
      "page_title": "About",
      "page_description": "Who we are",
      "sections": [],
      "is_published": true
    }
  }
}
"##
}
