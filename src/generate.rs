//! Static site generation.
//!
//! Renders every servable route of a [`SiteConfig`] to files so the site can
//! be hosted from any static file server.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                 # home page
//! ├── about/index.html           # one directory per published page (slug or key)
//! ├── maintenance/index.html     # always written
//! ├── 404.html
//! ├── robots.txt
//! └── sitemap.xml                # unless sitemapEnabled is false
//! ```
//!
//! ## What Static Output Cannot Do
//!
//! A file server can't run the request pipeline, so two policies are applied
//! at build time instead:
//!
//! - **Maintenance mode**: every page file gets the maintenance page body.
//! - **Auth pages**: pages with `requires_auth` are skipped; they are only
//!   reachable through `serve`, which has roles to check.
//!
//! Everything else (unpublished pages, sitemap filtering) matches `serve`.

use crate::artifacts::{self, ArtifactError};
use crate::config::{HOME_PAGE, SiteConfig};
use crate::routing::MAINTENANCE_PATH;
use crate::themes;
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("pages {first:?} and {second:?} both map to {path}")]
    DuplicateRoute {
        path: String,
        first: String,
        second: String,
    },
    #[error("page {key:?} has an invalid slug {slug:?}")]
    InvalidSlug { key: String, slug: String },
}

/// Why a configured page produced no file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Unpublished,
    RequiresAuth,
}

impl SkipReason {
    pub fn as_str(self) -> &'static str {
        match self {
            SkipReason::Unpublished => "unpublished",
            SkipReason::RequiresAuth => "requires auth",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub key: String,
    /// URL path the page is served under, e.g. `/about`.
    pub url_path: String,
    /// File written, relative to the output directory.
    pub file: PathBuf,
}

/// Summary of a build, consumed by `output::format_build_output`.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub output_dir: PathBuf,
    pub pages: Vec<GeneratedPage>,
    pub skipped: Vec<(String, SkipReason)>,
    pub sitemap_written: bool,
    pub maintenance_mode: bool,
}

/// Render the site into `output_dir`.
///
/// `origin` is used for robots/sitemap URLs when no `canonicalDomain` is
/// configured. `today` stamps sitemap `lastmod` and the footer year.
pub fn generate(
    site: &SiteConfig,
    output_dir: &Path,
    origin: &str,
    today: NaiveDate,
) -> Result<BuildReport, GenerateError> {
    let year = today.year();
    let mut report = BuildReport {
        output_dir: output_dir.to_path_buf(),
        maintenance_mode: site.maintenance_mode(),
        ..BuildReport::default()
    };

    let routes = plan_routes(site, &mut report.skipped)?;

    fs::create_dir_all(output_dir)?;

    let maintenance_html = themes::render_maintenance(site, year).into_string();
    for (key, url_path) in routes {
        let file = route_file(&url_path);
        let html = if site.maintenance_mode() {
            maintenance_html.clone()
        } else {
            themes::render_page(site, &key, year).into_string()
        };
        write_file(output_dir, &file, &html)?;
        report.pages.push(GeneratedPage {
            key,
            url_path,
            file,
        });
    }

    write_file(output_dir, &route_file(MAINTENANCE_PATH), &maintenance_html)?;
    write_file(
        output_dir,
        Path::new("404.html"),
        &themes::render_not_found(site, year).into_string(),
    )?;
    write_file(
        output_dir,
        Path::new("robots.txt"),
        &artifacts::build_robots_txt(site, origin),
    )?;

    match artifacts::build_sitemap_xml(site, origin, today) {
        Ok(xml) => {
            write_file(output_dir, Path::new("sitemap.xml"), &xml)?;
            report.sitemap_written = true;
        }
        Err(ArtifactError::SitemapDisabled) => {
            // A sitemap from an earlier build would still be served.
            let stale = output_dir.join("sitemap.xml");
            if stale.exists() {
                fs::remove_file(&stale)?;
                tracing::debug!(path = %stale.display(), "removed stale sitemap");
            }
        }
    }

    Ok(report)
}

/// Published, public pages and the URL path each is served under.
///
/// Rejects slugs that would escape the output directory and routes claimed
/// twice (including the reserved `/maintenance`).
pub fn plan_routes(
    site: &SiteConfig,
    skipped: &mut Vec<(String, SkipReason)>,
) -> Result<Vec<(String, String)>, GenerateError> {
    let mut claimed: HashMap<String, String> = HashMap::new();
    claimed.insert(MAINTENANCE_PATH.to_string(), "maintenance page".to_string());

    let mut routes = Vec::new();
    for (key, page) in site.pages() {
        if !page.is_published {
            skipped.push((key.to_string(), SkipReason::Unpublished));
            continue;
        }
        if page.requires_auth() {
            skipped.push((key.to_string(), SkipReason::RequiresAuth));
            continue;
        }

        let slug = page.slug(key);
        if key != HOME_PAGE && !is_valid_slug(slug) {
            return Err(GenerateError::InvalidSlug {
                key: key.to_string(),
                slug: slug.to_string(),
            });
        }

        let url_path = page.url_path(key);
        if let Some(first) = claimed.get(&url_path) {
            return Err(GenerateError::DuplicateRoute {
                path: url_path,
                first: first.clone(),
                second: key.to_string(),
            });
        }
        claimed.insert(url_path.clone(), key.to_string());
        routes.push((key.to_string(), url_path));
    }
    Ok(routes)
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('/')
            .all(|segment| !segment.is_empty() && segment != "." && segment != "..")
        && !slug.contains('\\')
}

/// `/` → `index.html`, `/about` → `about/index.html`.
fn route_file(url_path: &str) -> PathBuf {
    let trimmed = url_path.trim_matches('/');
    if trimmed.is_empty() {
        PathBuf::from("index.html")
    } else {
        Path::new(trimmed).join("index.html")
    }
}

fn write_file(output_dir: &Path, relative: &Path, contents: &str) -> std::io::Result<()> {
    let path = output_dir.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents)?;
    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use serde_json::json;
    use tempfile::TempDir;

    const ORIGIN: &str = "http://localhost:3000";

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2031, 6, 1).unwrap()
    }

    fn multi_page_site() -> SiteConfig {
        config_with(json!({
            "pages": {
                "about": { "page_title": "About", "is_published": true },
                "pricing": { "page_title": "Pricing", "is_published": true, "page_slug": "plans" },
                "draft": { "page_title": "Draft", "is_published": false },
                "admin": { "page_title": "Admin", "is_published": true, "requires_auth": true }
            }
        }))
    }

    #[test]
    fn route_files() {
        assert_eq!(route_file("/"), PathBuf::from("index.html"));
        assert_eq!(route_file("/about"), PathBuf::from("about/index.html"));
        assert_eq!(
            route_file("/docs/intro/"),
            PathBuf::from("docs/intro/index.html")
        );
    }

    #[test]
    fn slug_validation() {
        assert!(is_valid_slug("about"));
        assert!(is_valid_slug("docs/intro"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("../etc"));
        assert!(!is_valid_slug("a//b"));
        assert!(!is_valid_slug("a\\b"));
    }

    #[test]
    fn plan_skips_unpublished_and_auth_pages() {
        let site = multi_page_site();
        let mut skipped = Vec::new();
        let routes = plan_routes(&site, &mut skipped).unwrap();
        assert_eq!(
            routes,
            vec![
                ("home".to_string(), "/".to_string()),
                ("about".to_string(), "/about".to_string()),
                ("pricing".to_string(), "/plans".to_string()),
            ]
        );
        assert_eq!(
            skipped,
            vec![
                ("draft".to_string(), SkipReason::Unpublished),
                ("admin".to_string(), SkipReason::RequiresAuth),
            ]
        );
    }

    #[test]
    fn plan_rejects_duplicate_routes() {
        let site = config_with(json!({
            "pages": {
                "about": { "is_published": true },
                "team": { "is_published": true, "page_slug": "about" }
            }
        }));
        let err = plan_routes(&site, &mut Vec::new()).unwrap_err();
        assert!(matches!(err, GenerateError::DuplicateRoute { .. }));
        assert!(err.to_string().contains("/about"));
    }

    #[test]
    fn plan_rejects_reserved_maintenance_route() {
        let site = config_with(json!({
            "pages": { "maintenance": { "is_published": true } }
        }));
        assert!(matches!(
            plan_routes(&site, &mut Vec::new()),
            Err(GenerateError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn plan_rejects_escaping_slug() {
        let site = config_with(json!({
            "pages": { "evil": { "is_published": true, "page_slug": "../../outside" } }
        }));
        assert!(matches!(
            plan_routes(&site, &mut Vec::new()),
            Err(GenerateError::InvalidSlug { .. })
        ));
    }

    #[test]
    fn generate_writes_full_tree() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("dist");
        let site = multi_page_site();

        let report = generate(&site, &out, ORIGIN, today()).unwrap();

        for file in [
            "index.html",
            "about/index.html",
            "plans/index.html",
            "maintenance/index.html",
            "404.html",
            "robots.txt",
            "sitemap.xml",
        ] {
            assert!(out.join(file).exists(), "missing {file}");
        }
        assert!(!out.join("draft").exists());
        assert!(!out.join("admin").exists());
        assert_eq!(report.pages.len(), 3);
        assert_eq!(report.skipped.len(), 2);
        assert!(report.sitemap_written);

        let about = fs::read_to_string(out.join("about/index.html")).unwrap();
        assert!(about.contains("<title>About – Test Site</title>"));
        let home = fs::read_to_string(out.join("index.html")).unwrap();
        assert!(home.contains("© 2031 Test Company"));
        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>http://localhost:3000/plans</loc>"));
        assert!(sitemap.contains("<lastmod>2031-06-01</lastmod>"));
    }

    #[test]
    fn generate_in_maintenance_mode() {
        let tmp = TempDir::new().unwrap();
        let site = config_with(json!({ "maintenanceMode": true }));

        let report = generate(&site, tmp.path(), ORIGIN, today()).unwrap();

        assert!(report.maintenance_mode);
        let home = fs::read_to_string(tmp.path().join("index.html")).unwrap();
        assert!(home.contains("Under Maintenance"));
        let robots = fs::read_to_string(tmp.path().join("robots.txt")).unwrap();
        assert!(robots.contains("Disallow: /"));
    }

    #[test]
    fn generate_without_sitemap_removes_stale_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("sitemap.xml"), "old").unwrap();
        let site = config_with(json!({ "sitemapEnabled": false }));

        let report = generate(&site, tmp.path(), ORIGIN, today()).unwrap();

        assert!(!report.sitemap_written);
        assert!(!tmp.path().join("sitemap.xml").exists());
        let robots = fs::read_to_string(tmp.path().join("robots.txt")).unwrap();
        assert!(!robots.contains("Sitemap:"));
    }
}
