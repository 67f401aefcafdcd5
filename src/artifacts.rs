//! Crawler-facing text artifacts: `robots.txt` and `sitemap.xml`.
//!
//! Both are plain string builders. The domain written into them is the
//! configured `canonicalDomain` when there is one, otherwise the origin the
//! request (or build) was made against.

use crate::config::{HOME_PAGE, SiteConfig, non_empty};
use chrono::NaiveDate;
use std::borrow::Cow;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArtifactError {
    #[error("Sitemap not enabled")]
    SitemapDisabled,
}

/// Canonical domain if set, else `origin`, without a trailing slash.
pub fn site_domain<'a>(site: &'a SiteConfig, origin: &'a str) -> &'a str {
    non_empty(site.canonical_domain.as_deref())
        .unwrap_or(origin)
        .trim_end_matches('/')
}

pub fn build_robots_txt(site: &SiteConfig, origin: &str) -> String {
    if let Some(custom) = non_empty(site.robots_txt_custom.as_deref()) {
        return custom.to_string();
    }

    let rule = if site.maintenance_mode() {
        "Disallow: /"
    } else {
        "Allow: /"
    };
    let mut body = format!("User-agent: *\n{rule}");
    if site.sitemap_enabled() {
        body.push_str(&format!(
            "\n\nSitemap: {}/sitemap.xml",
            site_domain(site, origin)
        ));
    }
    body
}

/// One `<url>` entry per published, indexable, visible page, in the order
/// pages are configured. `lastmod` is `today` for every entry.
pub fn build_sitemap_xml(
    site: &SiteConfig,
    origin: &str,
    today: NaiveDate,
) -> Result<String, ArtifactError> {
    if !site.sitemap_enabled() {
        return Err(ArtifactError::SitemapDisabled);
    }

    let domain = site_domain(site, origin);
    let lastmod = today.format("%Y-%m-%d").to_string();

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">",
    );
    for (key, page) in site.pages().filter(|(_, page)| page.in_sitemap()) {
        let loc = if key == HOME_PAGE {
            domain.to_string()
        } else {
            format!("{domain}/{}", page.slug(key))
        };
        xml.push_str("\n  <url>\n    <loc>");
        xml.push_str(&escape_xml(&loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&lastmod);
        xml.push_str("</lastmod>\n    <changefreq>");
        xml.push_str(&escape_xml(page.sitemap_changefreq()));
        xml.push_str("</changefreq>\n    <priority>");
        xml.push_str(&page.sitemap_priority().to_string());
        xml.push_str("</priority>\n  </url>");
    }
    xml.push_str("\n</urlset>");
    Ok(xml)
}

fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
