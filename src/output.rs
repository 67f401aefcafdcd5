//! CLI output formatting for the `check` and `build` commands.
//!
//! # Information-First Display
//!
//! Output is organized around pages, not files. Each page leads with its
//! positional index and title, followed by `→` and where it ends up (a route
//! for `check`, a file for `build`). Anything that keeps a page from being
//! public is shown as an indented status line under it.
//!
//! Every formatter is pure and returns lines; the `print_*` wrappers write
//! them to stdout. Tests assert on the lines directly.
//!
//! # Output Format
//!
//! ## Check
//!
//! ```text
//! Test Site (Glassmorphism)
//!
//! Pages
//! 001 Home → /
//! 002 About Us → /about
//!     Requires auth: admin, editor
//! 003 Draft → /draft
//!     Unpublished
//!
//! Redirects
//!     /old → /new (301)
//!     /legacy/* → / (302)
//!
//! Flags
//!     sitemap: on
//!     maintenance: off
//!     cookie banner: on
//!     gdpr banner: off
//! ```
//!
//! ## Build
//!
//! ```text
//! 001 Home → index.html
//! 002 About Us → about/index.html
//! Skipped
//!     draft (unpublished)
//! Built 2 pages into dist (sitemap written)
//! ```

use crate::config::SiteConfig;
use crate::generate::BuildReport;

// ============================================================================
// Helpers
// ============================================================================

/// Zero-padded positional index: `1` → `001`.
fn format_index(index: usize) -> String {
    format!("{:0>3}", index)
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

/// Header line for a page: index plus the best available title.
fn page_header(position: usize, key: &str, title: &str) -> String {
    let title = if title.trim().is_empty() { key } else { title };
    format!("{} {}", format_index(position), title)
}

// ============================================================================
// Check
// ============================================================================

/// Format the resolved config as a page and route inventory.
pub fn format_check_output(site: &SiteConfig) -> Vec<String> {
    let mut lines = vec![format!(
        "{} ({})",
        site.app_name,
        site.theme().display_name()
    )];

    lines.push(String::new());
    lines.push("Pages".to_string());
    if site.pages.is_empty() {
        lines.push("    (none)".to_string());
    }
    for (i, (key, page)) in site.pages().enumerate() {
        lines.push(format!(
            "{} \u{2192} {}",
            page_header(i + 1, key, &page.page_title),
            page.url_path(key)
        ));
        if !page.is_published {
            lines.push("    Unpublished".to_string());
        }
        if page.requires_auth() {
            if page.allowed_roles.is_empty() {
                lines.push("    Requires auth".to_string());
            } else {
                lines.push(format!(
                    "    Requires auth: {}",
                    page.allowed_roles.join(", ")
                ));
            }
        }
        if page.is_hidden() {
            lines.push("    Hidden from sitemap".to_string());
        }
        if page.noindex() {
            lines.push("    noindex".to_string());
        }
    }

    if !site.redirect_rules.is_empty() {
        lines.push(String::new());
        lines.push("Redirects".to_string());
        for rule in &site.redirect_rules {
            lines.push(format!(
                "    {} \u{2192} {} ({})",
                rule.from,
                rule.to,
                rule.effective_status()
            ));
        }
    }

    lines.push(String::new());
    lines.push("Flags".to_string());
    lines.push(format!("    sitemap: {}", on_off(site.sitemap_enabled())));
    lines.push(format!("    maintenance: {}", on_off(site.maintenance_mode())));
    lines.push(format!(
        "    cookie banner: {}",
        on_off(site.cookie_consent_enabled())
    ));
    lines.push(format!(
        "    gdpr banner: {}",
        on_off(site.gdpr_banner_enabled())
    ));

    lines
}

/// Print check output to stdout.
pub fn print_check_output(site: &SiteConfig) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

// ============================================================================
// Build
// ============================================================================

/// Format the result of a static build.
///
/// Pages are listed in build order with the file each was written to.
pub fn format_build_output(site: &SiteConfig, report: &BuildReport) -> Vec<String> {
    let mut lines = Vec::new();

    for (i, page) in report.pages.iter().enumerate() {
        let title = site
            .page(&page.key)
            .map(|p| p.page_title.as_str())
            .unwrap_or_default();
        lines.push(format!(
            "{} \u{2192} {}",
            page_header(i + 1, &page.key, title),
            page.file.display()
        ));
    }

    if !report.skipped.is_empty() {
        lines.push("Skipped".to_string());
        for (key, reason) in &report.skipped {
            lines.push(format!("    {} ({})", key, reason.as_str()));
        }
    }

    if report.maintenance_mode {
        lines.push("Maintenance mode: every page shows the maintenance notice".to_string());
    }

    let noun = if report.pages.len() == 1 {
        "page"
    } else {
        "pages"
    };
    let sitemap = if report.sitemap_written {
        "sitemap written"
    } else {
        "sitemap disabled"
    };
    lines.push(format!(
        "Built {} {} into {} ({})",
        report.pages.len(),
        noun,
        report.output_dir.display(),
        sitemap
    ));

    lines
}

/// Print build output to stdout.
pub fn print_build_output(site: &SiteConfig, report: &BuildReport) {
    for line in format_build_output(site, report) {
        println!("{}", line);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{GeneratedPage, SkipReason};
    use crate::test_helpers::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::path::PathBuf;

    // =========================================================================
    // Helper tests
    // =========================================================================

    #[test]
    fn format_index_single_digit() {
        assert_eq!(format_index(1), "001");
    }

    #[test]
    fn format_index_triple_digit() {
        assert_eq!(format_index(100), "100");
    }

    #[test]
    fn page_header_falls_back_to_key() {
        assert_eq!(page_header(2, "about", "  "), "002 about");
        assert_eq!(page_header(2, "about", "About Us"), "002 About Us");
    }

    // =========================================================================
    // Check
    // =========================================================================

    fn check_site() -> SiteConfig {
        config_with(json!({
            "pages": {
                "about": {
                    "page_name": "About",
                    "page_title": "About Us",
                    "page_description": "Who we are",
                    "sections": [],
                    "is_published": true,
                    "requires_auth": true,
                    "allowed_roles": ["admin", "editor"]
                },
                "draft": {
                    "page_name": "Draft",
                    "page_title": "Draft",
                    "page_description": "",
                    "sections": [],
                    "is_published": false
                }
            },
            "redirectRules": [
                { "from": "/old", "to": "/new" },
                { "from": "/legacy/*", "to": "/", "status": 302 }
            ]
        }))
    }

    #[test]
    fn check_lists_pages_with_routes_and_status() {
        let lines = format_check_output(&check_site());
        assert_eq!(lines[0], "Test Site (Glassmorphism)");

        let pages: Vec<&str> = lines
            .iter()
            .skip_while(|l| *l != "Pages")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .map(String::as_str)
            .collect();
        assert_eq!(
            pages,
            vec![
                "001 Home \u{2192} /",
                "002 About Us \u{2192} /about",
                "    Requires auth: admin, editor",
                "003 Draft \u{2192} /draft",
                "    Unpublished",
            ]
        );
    }

    #[test]
    fn check_shows_redirect_status_with_default() {
        let lines = format_check_output(&check_site());
        assert!(lines.contains(&"    /old \u{2192} /new (301)".to_string()));
        assert!(lines.contains(&"    /legacy/* \u{2192} / (302)".to_string()));
    }

    #[test]
    fn check_omits_redirects_section_when_empty() {
        let lines = format_check_output(&sample_config());
        assert!(!lines.contains(&"Redirects".to_string()));
    }

    #[test]
    fn check_shows_flags() {
        let lines = format_check_output(&sample_config());
        let flags: Vec<&str> = lines
            .iter()
            .skip_while(|l| *l != "Flags")
            .skip(1)
            .map(String::as_str)
            .collect();
        assert_eq!(
            flags,
            vec![
                "    sitemap: on",
                "    maintenance: off",
                "    cookie banner: on",
                "    gdpr banner: off",
            ]
        );
    }

    // =========================================================================
    // Build
    // =========================================================================

    fn report() -> BuildReport {
        BuildReport {
            output_dir: PathBuf::from("dist"),
            pages: vec![
                GeneratedPage {
                    key: "home".to_string(),
                    url_path: "/".to_string(),
                    file: PathBuf::from("index.html"),
                },
                GeneratedPage {
                    key: "about".to_string(),
                    url_path: "/about".to_string(),
                    file: PathBuf::from("about").join("index.html"),
                },
            ],
            skipped: vec![("draft".to_string(), SkipReason::Unpublished)],
            sitemap_written: true,
            maintenance_mode: false,
        }
    }

    #[test]
    fn build_lists_files_skips_and_summary() {
        let lines = format_build_output(&check_site(), &report());
        let about_file = PathBuf::from("about").join("index.html");
        assert_eq!(
            lines,
            vec![
                "001 Home \u{2192} index.html".to_string(),
                format!("002 About Us \u{2192} {}", about_file.display()),
                "Skipped".to_string(),
                "    draft (unpublished)".to_string(),
                "Built 2 pages into dist (sitemap written)".to_string(),
            ]
        );
    }

    #[test]
    fn build_notes_maintenance_and_disabled_sitemap() {
        let mut report = report();
        report.pages.truncate(1);
        report.skipped.clear();
        report.sitemap_written = false;
        report.maintenance_mode = true;

        let lines = format_build_output(&sample_config(), &report);
        assert_eq!(
            lines,
            vec![
                "001 Home \u{2192} index.html".to_string(),
                "Maintenance mode: every page shows the maintenance notice".to_string(),
                "Built 1 page into dist (sitemap disabled)".to_string(),
            ]
        );
    }
}
