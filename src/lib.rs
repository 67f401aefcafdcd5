//! # Landing Forge
//!
//! A configuration-driven generator for themed marketing sites. One
//! `site.json` describes the brand, hero, pages, SEO fields and site policy;
//! Landing Forge turns it into HTML for one of seven visual themes, plus the
//! `robots.txt` and `sitemap.xml` a search engine expects.
//!
//! # Architecture
//!
//! ```text
//! site.json ──load──▶ SiteConfig ──┬──▶ build  (static files in dist/)
//!                                  └──▶ serve  (request pipeline over HTTP)
//! ```
//!
//! Both outputs go through the same pure rendering functions. A page render
//! is `SiteConfig + page key + year → Markup`, so tests exercise every theme
//! and policy without touching the filesystem or a socket.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | Layered `site.json` loading (stock defaults → files), validation, typed accessors |
//! | [`colors`] | Hex parsing, inversion and pastel tints for the brand palette |
//! | [`themes`] | Theme registry, the shared render projection, and the seven Maud themes |
//! | [`seo`] | Per-page SEO overrides and the ordered head meta tags |
//! | [`consent`] | Cookie and GDPR consent state, storage and change events |
//! | [`routing`] | Maintenance mode, role checks and redirect rules |
//! | [`artifacts`] | `robots.txt` and `sitemap.xml` |
//! | [`generate`] | Static build into an output directory |
//! | [`serve`] | Preview server running the full request pipeline |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! Themes are Maud `html!` functions rather than template files. Malformed
//! markup is a compile error, interpolation is escaped by default, and the
//! binary ships with no template directory. Section HTML is the one place raw
//! markup is passed through: it is authored content from the site owner.
//!
//! ## Config Layering
//!
//! ```text
//! stock defaults  ←  site.json  ←  site.local.json  ←  ...
//! ```
//!
//! Later files override earlier ones key by key, so a local overlay can flip
//! `maintenanceMode` without repeating the whole site. Unknown keys are
//! warned about rather than rejected: configs are exported by a dashboard
//! that may be newer than this binary.
//!
//! ## One Pipeline, Two Hosts
//!
//! The preview server runs maintenance, authorization and redirects per
//! request. A static host can't, so [`generate`] applies the same policy at
//! build time: maintenance mode renders the notice into every page and
//! auth-gated pages are left out.

pub mod artifacts;
pub mod colors;
pub mod config;
pub mod consent;
pub mod generate;
pub mod output;
pub mod routing;
pub mod seo;
pub mod serve;
pub mod themes;

#[cfg(test)]
pub(crate) mod test_helpers;
