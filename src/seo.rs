//! `<head>` metadata assembly.
//!
//! [`build_meta_tags`] turns page overrides plus site defaults into an
//! ordered list of [`MetaDirective`]s. Each field resolves through a fallback
//! chain where the first non-empty value wins:
//!
//! ```text
//! title        page override → seoTitle       → appName
//! description  page override → seoDescription → heroDescription
//! og:title     page og_title → resolved title
//! og:image     page og_image → ogImage          (omitted if neither)
//! keywords     page keywords → seoKeywords      (omitted if neither)
//! ```
//!
//! The order of the output is fixed so rendered heads can be compared
//! verbatim:
//!
//! ```text
//! title, description, robots, [keywords],
//! og:type, og:site_name, og:title, og:description,
//! twitter:card, twitter:title, twitter:description, theme-color,
//! [og:image, twitter:image], [canonical], [icon], [content-language]
//! ```

use crate::config::{HOME_PAGE, PageEntry, SiteConfig, non_empty};
use maud::{Markup, html};

/// One element of the document head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetaDirective {
    Title(String),
    Name { name: &'static str, content: String },
    Property { property: &'static str, content: String },
    Link { rel: &'static str, href: String },
    HttpEquiv { http_equiv: &'static str, content: String },
}

impl MetaDirective {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        MetaDirective::Name {
            name,
            content: content.into(),
        }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        MetaDirective::Property {
            property,
            content: content.into(),
        }
    }

    /// Short identifier used in reports and tests: `title`, `og:image`,
    /// `link:canonical`, ...
    pub fn key(&self) -> String {
        match self {
            MetaDirective::Title(_) => "title".to_string(),
            MetaDirective::Name { name, .. } => (*name).to_string(),
            MetaDirective::Property { property, .. } => (*property).to_string(),
            MetaDirective::Link { rel, .. } => format!("link:{rel}"),
            MetaDirective::HttpEquiv { http_equiv, .. } => (*http_equiv).to_string(),
        }
    }

    /// The value carried by the directive (content, href, or title text).
    pub fn value(&self) -> &str {
        match self {
            MetaDirective::Title(text) => text,
            MetaDirective::Name { content, .. }
            | MetaDirective::Property { content, .. }
            | MetaDirective::HttpEquiv { content, .. } => content,
            MetaDirective::Link { href, .. } => href,
        }
    }

    pub fn to_markup(&self) -> Markup {
        match self {
            MetaDirective::Title(text) => html! { title { (text) } },
            MetaDirective::Name { name, content } => html! { meta name=(name) content=(content); },
            MetaDirective::Property { property, content } => {
                html! { meta property=(property) content=(content); }
            }
            MetaDirective::Link { rel, href } => html! { link rel=(rel) href=(href); },
            MetaDirective::HttpEquiv {
                http_equiv,
                content,
            } => html! { meta http-equiv=(http_equiv) content=(content); },
        }
    }
}

/// Page-level values that take precedence over the site defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeoOverrides {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_title: Option<String>,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
    pub noindex: bool,
    pub nofollow: bool,
}

impl SeoOverrides {
    /// Overrides for a configured page.
    ///
    /// The home page titles itself `"{appName} – {tagline}"` and prefers the
    /// hero copy for its description and og:title. Other pages use
    /// `"{page_title} – {appName}"` and their own description.
    pub fn for_page(site: &SiteConfig, key: &str, page: &PageEntry) -> Self {
        let owned = |value: Option<&str>| non_empty(value).map(str::to_string);

        let (title, description, og_title) = if key == HOME_PAGE {
            let title = match non_empty(Some(site.tagline.as_str())) {
                Some(tagline) => format!("{} – {}", site.app_name, tagline),
                None => site.app_name.clone(),
            };
            (
                owned(page.meta_title.as_deref()).unwrap_or(title),
                owned(page.meta_description.as_deref())
                    .or_else(|| owned(Some(site.hero_description.as_str())))
                    .or_else(|| owned(Some(site.tagline.as_str()))),
                owned(page.og_title.as_deref()).or_else(|| owned(Some(site.hero_title.as_str()))),
            )
        } else {
            (
                owned(page.meta_title.as_deref())
                    .unwrap_or_else(|| format!("{} – {}", page.page_title, site.app_name)),
                owned(page.meta_description.as_deref())
                    .or_else(|| owned(Some(page.page_description.as_str()))),
                owned(page.og_title.as_deref()).or_else(|| owned(Some(page.page_title.as_str()))),
            )
        };

        Self {
            title: Some(title),
            description,
            keywords: owned(page.meta_keywords.as_deref()),
            og_title,
            og_description: owned(page.og_description.as_deref()),
            og_image: owned(page.og_image.as_deref()),
            canonical_url: owned(page.canonical_url.as_deref()),
            noindex: page.noindex(),
            nofollow: page.nofollow(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    pub fn as_str(self) -> &'static str {
        match self {
            OgType::Website => "website",
            OgType::Article => "article",
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MetaOptions {
    pub og_type: OgType,
}

/// `"{index|noindex},{follow|nofollow}"`.
pub fn robots_directive(noindex: bool, nofollow: bool) -> String {
    format!(
        "{},{}",
        if noindex { "noindex" } else { "index" },
        if nofollow { "nofollow" } else { "follow" }
    )
}

/// Assemble the ordered head directives for one page.
pub fn build_meta_tags(
    site: &SiteConfig,
    overrides: &SeoOverrides,
    options: MetaOptions,
) -> Vec<MetaDirective> {
    let first = |candidates: &[Option<&str>]| -> Option<String> {
        candidates
            .iter()
            .find_map(|c| non_empty(*c))
            .map(str::to_string)
    };

    let title = first(&[
        overrides.title.as_deref(),
        site.seo_title.as_deref(),
        Some(site.app_name.as_str()),
    ])
    .unwrap_or_default();
    let description = first(&[
        overrides.description.as_deref(),
        site.seo_description.as_deref(),
        Some(site.hero_description.as_str()),
    ])
    .unwrap_or_default();
    let og_title = first(&[overrides.og_title.as_deref()]).unwrap_or_else(|| title.clone());
    let og_description =
        first(&[overrides.og_description.as_deref()]).unwrap_or_else(|| description.clone());
    let og_image = first(&[overrides.og_image.as_deref(), site.og_image.as_deref()]);
    let keywords = first(&[overrides.keywords.as_deref(), site.seo_keywords.as_deref()]);

    let mut tags = vec![
        MetaDirective::Title(title),
        MetaDirective::name("description", description),
        MetaDirective::name(
            "robots",
            robots_directive(overrides.noindex, overrides.nofollow),
        ),
    ];
    if let Some(keywords) = keywords {
        tags.push(MetaDirective::name("keywords", keywords));
    }
    tags.extend([
        MetaDirective::property("og:type", options.og_type.as_str()),
        MetaDirective::property("og:site_name", site.app_name.clone()),
        MetaDirective::property("og:title", og_title.clone()),
        MetaDirective::property("og:description", og_description.clone()),
        MetaDirective::name("twitter:card", "summary_large_image"),
        MetaDirective::name("twitter:title", og_title),
        MetaDirective::name("twitter:description", og_description),
        MetaDirective::name("theme-color", site.primary_color.clone()),
    ]);
    if let Some(image) = og_image {
        tags.push(MetaDirective::property("og:image", image.clone()));
        tags.push(MetaDirective::name("twitter:image", image));
    }
    if let Some(canonical) = first(&[overrides.canonical_url.as_deref()]) {
        tags.push(MetaDirective::Link {
            rel: "canonical",
            href: canonical,
        });
    }
    if let Some(favicon) = first(&[site.favicon.as_deref()]) {
        tags.push(MetaDirective::Link {
            rel: "icon",
            href: favicon,
        });
    }
    if let Some(language) = first(&[site.content_language.as_deref()]) {
        tags.push(MetaDirective::HttpEquiv {
            http_equiv: "content-language",
            content: language,
        });
    }
    tags
}

/// Head directives for the maintenance page. Never indexed.
pub fn maintenance_meta(site: &SiteConfig) -> Vec<MetaDirective> {
    vec![
        MetaDirective::Title(format!("Maintenance - {}", site.app_name)),
        MetaDirective::name("robots", "noindex, nofollow"),
    ]
}

/// Head directives for the not-found page.
pub fn not_found_meta(site: &SiteConfig) -> Vec<MetaDirective> {
    vec![
        MetaDirective::Title(format!("Page Not Found - {}", site.app_name)),
        MetaDirective::name("robots", "noindex, nofollow"),
    ]
}

/// Render directives in order.
pub fn render_head(directives: &[MetaDirective]) -> Markup {
    html! {
        @for directive in directives {
            (directive.to_markup())
        }
    }
}
