//! Theme selection and page rendering.
//!
//! Every theme renders the same content. [`Projection::build`] flattens a
//! [`SiteConfig`] (plus the page being rendered) into one normalized shape,
//! and each theme turns that shape into markup through the [`Theme`] trait.
//! Themes never read the config directly.
//!
//! ```text
//! SiteConfig ──► Projection ──► ThemeName::renderer().render() ──► body
//!                                                                   │
//! render_page: <head> meta + inline CSS + body + consent banners ◄──┘
//! ```
//!
//! ## Trusted Section HTML
//!
//! `ContentSection::content` is author-provided HTML from the site config
//! and is inserted unescaped. Every other string from the config goes
//! through maud's escaping.

mod banners;
mod classic;
mod enterprise;
mod glassmorphism;
mod green_tech;
mod minimal;
mod parts;
mod soft_modern;

pub use banners::consent_banners;

use crate::colors;
use crate::config::{
    ContentSection, HOME_PAGE, HeroStat, MenuItem, SiteConfig, SocialLink, non_empty,
};
use crate::seo::{
    MetaDirective, MetaOptions, SeoOverrides, build_meta_tags, maintenance_meta, not_found_meta,
    render_head,
};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const STYLE_CSS: &str = include_str!("../../static/style.css");
const CONSENT_JS: &str = include_str!("../../static/consent.js");

/// Where empty-state placeholders send the site owner.
pub const DASHBOARD_PATH: &str = "/hub/projects/config";

/// The built-in visual themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeName {
    #[default]
    Glassmorphism,
    Classic,
    Enterprise,
    SoftModern,
    MinimalLight,
    MinimalDark,
    GreenTech,
}

impl ThemeName {
    pub const ALL: [ThemeName; 7] = [
        ThemeName::Glassmorphism,
        ThemeName::Classic,
        ThemeName::Enterprise,
        ThemeName::SoftModern,
        ThemeName::MinimalLight,
        ThemeName::MinimalDark,
        ThemeName::GreenTech,
    ];

    /// Resolve a configured `themeName`.
    ///
    /// Ids match exactly (case-sensitive). `Modern` is the legacy name of
    /// Glassmorphism. Anything else, including no value, falls back to
    /// Glassmorphism.
    pub fn resolve(name: Option<&str>) -> Self {
        let Some(name) = name else {
            return Self::default();
        };
        if name == "Modern" {
            return ThemeName::Glassmorphism;
        }
        Self::ALL
            .into_iter()
            .find(|theme| theme.id() == name)
            .unwrap_or_else(|| {
                tracing::warn!(theme = name, "unknown theme, using Glassmorphism");
                Self::default()
            })
    }

    pub fn id(self) -> &'static str {
        match self {
            ThemeName::Glassmorphism => "Glassmorphism",
            ThemeName::Classic => "Classic",
            ThemeName::Enterprise => "Enterprise",
            ThemeName::SoftModern => "SoftModern",
            ThemeName::MinimalLight => "MinimalLight",
            ThemeName::MinimalDark => "MinimalDark",
            ThemeName::GreenTech => "GreenTech",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ThemeName::Glassmorphism => "Glassmorphism",
            ThemeName::Classic => "Classic",
            ThemeName::Enterprise => "Enterprise",
            ThemeName::SoftModern => "Soft Modern",
            ThemeName::MinimalLight => "Minimal Light",
            ThemeName::MinimalDark => "Minimal Dark",
            ThemeName::GreenTech => "Green Tech",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ThemeName::Glassmorphism => "Modern glassmorphic design",
            ThemeName::Classic => "Traditional editorial layout",
            ThemeName::Enterprise => "Professional SaaS interface",
            ThemeName::SoftModern => "Soft gradients and modern UI",
            ThemeName::MinimalLight => "Clean and minimal light theme",
            ThemeName::MinimalDark => "Clean and minimal dark theme",
            ThemeName::GreenTech => "Eco-friendly tech aesthetic",
        }
    }

    /// CSS class put on `<body>`; `style.css` scopes theme rules under it.
    pub fn css_class(self) -> &'static str {
        match self {
            ThemeName::Glassmorphism => "theme-glassmorphism",
            ThemeName::Classic => "theme-classic",
            ThemeName::Enterprise => "theme-enterprise",
            ThemeName::SoftModern => "theme-soft-modern",
            ThemeName::MinimalLight => "theme-minimal-light",
            ThemeName::MinimalDark => "theme-minimal-dark",
            ThemeName::GreenTech => "theme-green-tech",
        }
    }

    pub fn renderer(self) -> &'static dyn Theme {
        match self {
            ThemeName::Glassmorphism => &glassmorphism::Glassmorphism,
            ThemeName::Classic => &classic::Classic,
            ThemeName::Enterprise => &enterprise::Enterprise,
            ThemeName::SoftModern => &soft_modern::SoftModern,
            ThemeName::MinimalLight => &minimal::MinimalLight,
            ThemeName::MinimalDark => &minimal::MinimalDark,
            ThemeName::GreenTech => &green_tech::GreenTech,
        }
    }
}

/// A theme turns a [`Projection`] into the page body.
pub trait Theme: Sync {
    fn render(&self, page: &Projection<'_>) -> Markup;
}

/// Hero block content. Only present on the home page.
#[derive(Debug, Clone)]
pub struct Hero<'a> {
    pub badge: Option<&'a str>,
    pub title: &'a str,
    pub subtitle: Option<&'a str>,
    pub description: &'a str,
    pub cta_label: &'a str,
    pub cta_link: &'a str,
    pub image_url: Option<&'a str>,
    pub video_url: Option<&'a str>,
    pub animated: bool,
}

/// Title block shown in place of the hero on non-home pages.
#[derive(Debug, Clone)]
pub struct PageHeading<'a> {
    pub title: &'a str,
    pub description: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsentSettings<'a> {
    pub cookie_banner: bool,
    pub gdpr_banner: bool,
    pub privacy_policy_url: Option<&'a str>,
}

/// The normalized content every theme renders.
#[derive(Debug, Clone)]
pub struct Projection<'a> {
    pub theme: ThemeName,
    pub app_name: &'a str,
    pub tagline: Option<&'a str>,
    pub description: Option<&'a str>,
    pub primary: String,
    pub secondary: String,
    /// Primary color mixed towards white, for soft backgrounds.
    pub pastel: String,
    pub nav: &'a [MenuItem],
    pub hero: Option<Hero<'a>>,
    pub heading: Option<PageHeading<'a>>,
    pub stats: &'a [HeroStat],
    pub footer_text: String,
    pub sections: &'a [ContentSection],
    pub social: &'a [SocialLink],
    pub terms_url: Option<&'a str>,
    pub consent: ConsentSettings<'a>,
}

impl<'a> Projection<'a> {
    /// Project `site` for the page at `page_key`. The home page gets the
    /// hero, every other page gets a heading from its title. A key with no
    /// page entry projects with no sections.
    pub fn build(site: &'a SiteConfig, page_key: &str, year: i32) -> Self {
        let page = site.page(page_key);
        let sections = page.map(|p| p.sections.as_slice()).unwrap_or(&[]);

        let (hero, heading) = if page_key == HOME_PAGE {
            let hero = Hero {
                badge: non_empty(site.hero_badge.as_deref()),
                title: &site.hero_title,
                subtitle: non_empty(site.hero_subtitle.as_deref()),
                description: &site.hero_description,
                cta_label: non_empty(site.hero_cta.as_deref()).unwrap_or("Get Started"),
                cta_link: non_empty(site.hero_cta_link.as_deref()).unwrap_or("#"),
                image_url: non_empty(site.hero_image_url.as_deref()),
                video_url: non_empty(site.hero_video_url.as_deref()),
                animated: site.enable_hero_animation == Some(true),
            };
            (Some(hero), None)
        } else {
            let heading = page.map(|p| PageHeading {
                title: &p.page_title,
                description: non_empty(Some(p.page_description.as_str())),
            });
            (None, heading)
        };

        let rgb = colors::parse_or_neutral(&site.primary_color);

        Self {
            theme: site.theme(),
            app_name: &site.app_name,
            tagline: non_empty(Some(site.tagline.as_str())),
            description: non_empty(site.app_description.as_deref()),
            primary: colors::rgb_to_hex(f64::from(rgb.r), f64::from(rgb.g), f64::from(rgb.b)),
            secondary: site.secondary_color(),
            pastel: colors::to_pastel(rgb),
            nav: &site.menu_items,
            hero,
            heading,
            stats: &site.hero_stats,
            footer_text: site.footer_text_for_year(year),
            sections,
            social: &site.social_media_links,
            terms_url: non_empty(site.terms_of_service_url.as_deref()),
            consent: ConsentSettings {
                cookie_banner: site.cookie_consent_enabled(),
                gdpr_banner: site.gdpr_banner_enabled(),
                privacy_policy_url: non_empty(site.privacy_policy_url.as_deref()),
            },
        }
    }

    /// The `:root` custom properties `style.css` reads colors from.
    pub fn color_css(&self) -> String {
        format!(
            ":root {{\n    --color-primary: {};\n    --color-secondary: {};\n    --color-primary-soft: {};\n    --color-primary-glow: {};\n    --color-pastel: {};\n}}",
            self.primary,
            self.secondary,
            colors::with_alpha(&self.primary, "22"),
            colors::with_alpha(&self.primary, "40"),
            self.pastel,
        )
    }
}

/// Render the full HTML document for a configured page.
pub fn render_page(site: &SiteConfig, page_key: &str, year: i32) -> Markup {
    let projection = Projection::build(site, page_key, year);
    let overrides = match site.page(page_key) {
        Some(page) => SeoOverrides::for_page(site, page_key, page),
        None => SeoOverrides::default(),
    };
    let meta = build_meta_tags(site, &overrides, MetaOptions::default());
    let body = projection.theme.renderer().render(&projection);
    document(site, &projection, &meta, body)
}

/// The maintenance page. Always renderable, whatever the page config.
pub fn render_maintenance(site: &SiteConfig, year: i32) -> Markup {
    let projection = Projection::build(site, "maintenance", year);
    let body = html! {
        main.maintenance {
            div.maintenance-card {
                h1 { "Under Maintenance" }
                p.maintenance-message { (site.maintenance_message()) }
                a.button href="/" { "Return Home" }
            }
        }
    };
    document(site, &projection, &maintenance_meta(site), body)
}

/// The 404 page, rendered in the site's theme colors.
pub fn render_not_found(site: &SiteConfig, year: i32) -> Markup {
    let projection = Projection::build(site, "404", year);
    let body = html! {
        main.not-found {
            div.maintenance-card {
                h1 { "Page Not Found" }
                p { "The page you are looking for does not exist." }
                a.button href="/" { "Return Home" }
            }
        }
    };
    document(site, &projection, &not_found_meta(site), body)
}

fn document(
    site: &SiteConfig,
    projection: &Projection<'_>,
    meta: &[MetaDirective],
    body: Markup,
) -> Markup {
    let lang = non_empty(site.content_language.as_deref()).unwrap_or("en");
    let css = format!("{}\n\n{}", projection.color_css(), STYLE_CSS);
    let has_banner = projection.consent.cookie_banner || projection.consent.gdpr_banner;

    html! {
        (DOCTYPE)
        html lang=(lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                (render_head(meta))
                style { (PreEscaped(css)) }
            }
            body class=(projection.theme.css_class()) {
                (body)
                (consent_banners(&projection.consent))
                @if has_banner {
                    script { (PreEscaped(CONSENT_JS)) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use serde_json::json;

    #[test]
    fn resolve_exact_ids() {
        for theme in ThemeName::ALL {
            assert_eq!(ThemeName::resolve(Some(theme.id())), theme);
        }
    }

    #[test]
    fn resolve_legacy_alias() {
        assert_eq!(
            ThemeName::resolve(Some("Modern")),
            ThemeName::Glassmorphism
        );
    }

    #[test]
    fn resolve_falls_back_to_glassmorphism() {
        assert_eq!(ThemeName::resolve(None), ThemeName::Glassmorphism);
        assert_eq!(ThemeName::resolve(Some("")), ThemeName::Glassmorphism);
        assert_eq!(
            ThemeName::resolve(Some("Brutalist")),
            ThemeName::Glassmorphism
        );
    }

    #[test]
    fn resolve_is_case_sensitive() {
        assert_eq!(
            ThemeName::resolve(Some("classic")),
            ThemeName::Glassmorphism
        );
        assert_eq!(ThemeName::resolve(Some("Classic")), ThemeName::Classic);
    }

    #[test]
    fn projection_home_has_hero() {
        let site = sample_config();
        let p = Projection::build(&site, "home", 2030);
        let hero = p.hero.as_ref().unwrap();
        assert_eq!(hero.title, "Welcome to Our Amazing Site");
        assert_eq!(hero.cta_label, "Get Started");
        assert_eq!(hero.cta_link, "/contact");
        assert_eq!(hero.badge, Some("New Launch"));
        assert!(p.heading.is_none());
        assert_eq!(p.sections.len(), 1);
        assert_eq!(p.stats.len(), 3);
        assert_eq!(p.footer_text, "© 2030 Test Company. All rights reserved.");
        assert!(p.consent.cookie_banner);
        assert!(!p.consent.gdpr_banner);
    }

    #[test]
    fn projection_subpage_has_heading() {
        let site = config_with(json!({
            "pages": { "about": { "page_title": "About", "page_description": "Who we are", "is_published": true } }
        }));
        let p = Projection::build(&site, "about", 2030);
        assert!(p.hero.is_none());
        let heading = p.heading.unwrap();
        assert_eq!(heading.title, "About");
        assert_eq!(heading.description, Some("Who we are"));
        assert!(p.sections.is_empty());
    }

    #[test]
    fn projection_cta_defaults() {
        let site = config_with(json!({ "heroCTA": "", "heroCTALink": " " }));
        let p = Projection::build(&site, "home", 2030);
        let hero = p.hero.unwrap();
        assert_eq!(hero.cta_label, "Get Started");
        assert_eq!(hero.cta_link, "#");
    }

    #[test]
    fn projection_colors_are_derived() {
        let site = sample_config();
        let p = Projection::build(&site, "home", 2030);
        assert_eq!(p.primary, "#10b981");
        assert_eq!(p.secondary, "#ef467e");
        assert_eq!(p.pastel, "rgb(183, 234, 217)");
        let css = p.color_css();
        assert!(css.contains("--color-primary: #10b981;"));
        assert!(css.contains("--color-primary-soft: #10b98122;"));
    }

    #[test]
    fn projection_invalid_primary_uses_neutral() {
        let site = config_with(json!({ "primaryColor": "green" }));
        let p = Projection::build(&site, "home", 2030);
        assert_eq!(p.primary, "#10b981");
        assert_eq!(p.secondary, "#ef467e");
    }

    #[test]
    fn every_theme_renders_sections_unescaped() {
        let site = sample_config();
        for theme in ThemeName::ALL {
            let mut p = Projection::build(&site, "home", 2030);
            p.theme = theme;
            let html = theme.renderer().render(&p).into_string();
            assert!(
                html.contains(r#"<div class="welcome"><h1>Welcome</h1>"#),
                "{} did not insert section HTML",
                theme.id()
            );
            assert!(html.contains("Welcome to Our Amazing Site"));
            assert!(html.contains("© 2030 Test Company"));
        }
    }

    #[test]
    fn every_theme_renders_an_empty_state() {
        let site = config_with(json!({ "pages": { "home": { "sections": [] } } }));
        for theme in ThemeName::ALL {
            let mut p = Projection::build(&site, "home", 2030);
            p.theme = theme;
            let html = theme.renderer().render(&p).into_string();
            assert!(
                html.contains("empty-state") && html.contains(DASHBOARD_PATH),
                "{} has no empty state",
                theme.id()
            );
        }
    }

    #[test]
    fn theme_specific_empty_state_copy() {
        let site = config_with(json!({ "pages": { "home": { "sections": [] } } }));
        let p = Projection::build(&site, "home", 2030);
        let glass = ThemeName::Glassmorphism.renderer().render(&p).into_string();
        assert!(glass.contains("No content yet"));
        let classic = ThemeName::Classic.renderer().render(&p).into_string();
        assert!(classic.contains("No Articles Published"));
    }

    #[test]
    fn config_strings_are_escaped() {
        let site = config_with(json!({
            "heroTitle": "<script>alert(1)</script>",
            "menuItems": [{ "href": "/x\" onclick=\"y", "label": "<b>" }]
        }));
        for theme in ThemeName::ALL {
            let mut p = Projection::build(&site, "home", 2030);
            p.theme = theme;
            let html = theme.renderer().render(&p).into_string();
            assert!(!html.contains("<script>alert(1)</script>"), "{}", theme.id());
            assert!(html.contains("&lt;script&gt;"), "{}", theme.id());
            assert!(!html.contains("<b>"), "{}", theme.id());
        }
    }

    #[test]
    fn render_page_is_full_document() {
        let site = sample_config();
        let html = render_page(&site, "home", 2030).into_string();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(r#"<html lang="en">"#));
        assert!(html.contains("<title>Test Site – Your amazing tagline here</title>"));
        assert!(html.contains(r#"<body class="theme-glassmorphism">"#));
        assert!(html.contains("--color-primary: #10b981;"));
        assert!(html.contains(r#"id="cookie-consent""#));
        assert!(html.contains("cookie-consent-changed"));
    }

    #[test]
    fn render_page_without_banners_has_no_script() {
        let site = config_with(json!({ "cookieConsentEnabled": false }));
        let html = render_page(&site, "home", 2030).into_string();
        assert!(!html.contains(r#"id="cookie-consent""#));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn render_page_uses_content_language() {
        let site = config_with(json!({ "contentLanguage": "de" }));
        let html = render_page(&site, "home", 2030).into_string();
        assert!(html.contains(r#"<html lang="de">"#));
    }

    #[test]
    fn render_page_selected_theme() {
        let site = config_with(json!({ "themeName": "MinimalDark" }));
        let html = render_page(&site, "home", 2030).into_string();
        assert!(html.contains(r#"<body class="theme-minimal-dark">"#));
    }

    #[test]
    fn maintenance_page_message() {
        let site = config_with(json!({ "maintenanceMode": true }));
        let html = render_maintenance(&site, 2030).into_string();
        assert!(html.contains("Under Maintenance"));
        assert!(html.contains(crate::config::DEFAULT_MAINTENANCE_MESSAGE));
        assert!(html.contains("<title>Maintenance - Test Site</title>"));
        assert!(html.contains(r#"content="noindex, nofollow""#));

        let site = config_with(json!({ "maintenanceMessage": "Back <soon>" }));
        let html = render_maintenance(&site, 2030).into_string();
        assert!(html.contains("Back &lt;soon&gt;"));
    }

    #[test]
    fn not_found_page() {
        let site = sample_config();
        let html = render_not_found(&site, 2030).into_string();
        assert!(html.contains("Page Not Found"));
        assert!(html.contains("<title>Page Not Found - Test Site</title>"));
    }
}
