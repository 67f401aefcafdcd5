//! Preview server.
//!
//! Serves the site straight from the config, running the full request
//! pipeline that a static export can only approximate:
//!
//! ```text
//! /robots.txt, /sitemap.xml   answered first, even in maintenance mode
//! maintenance gate            302 → /maintenance
//! /maintenance                always reachable
//! redirect rules              first match wins
//! page lookup                 unknown or unpublished → 404
//! auth gate                   no roles → 401, wrong roles → 403
//! render
//! ```
//!
//! Roles come from the `X-User-Roles` request header, comma separated. The
//! server trusts it, so it is meant to sit behind a proxy that authenticates
//! users and sets the header.
//!
//! [`handle_request`] is pure; [`serve`] is the blocking tiny_http loop
//! around it. Requests are handled one at a time.

use crate::artifacts::{self, ArtifactError};
use crate::config::SiteConfig;
use crate::routing::{MAINTENANCE_PATH, RoutingPolicy};
use crate::themes;
use chrono::{Datelike, Local, NaiveDate};
use thiserror::Error;
use tiny_http::{Header, Response, Server, StatusCode};

pub const ROLES_HEADER: &str = "X-User-Roles";
pub const ARTIFACT_CACHE_CONTROL: &str = "public, max-age=3600";

const HTML: &str = "text/html; charset=utf-8";
const PLAIN: &str = "text/plain; charset=utf-8";
const XML: &str = "application/xml";

#[derive(Error, Debug)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// A response, independent of the HTTP library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub content_type: &'static str,
    pub headers: Vec<(&'static str, String)>,
    pub body: String,
}

impl Reply {
    fn new(status: u16, content_type: &'static str, body: String) -> Self {
        Self {
            status,
            content_type,
            headers: Vec::new(),
            body,
        }
    }

    fn html(status: u16, body: String) -> Self {
        Self::new(status, HTML, body)
    }

    fn redirect(location: String, status: u16) -> Self {
        let mut reply = Self::new(status, PLAIN, format!("Redirecting to {location}"));
        reply.headers.push(("Location", location));
        reply
    }

    fn with_header(mut self, name: &'static str, value: &str) -> Self {
        self.headers.push((name, value.to_string()));
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Split an `X-User-Roles` value. A missing or blank header means the
/// request is unauthenticated.
pub fn parse_roles(header: Option<&str>) -> Option<Vec<String>> {
    let roles: Vec<String> = header?
        .split(',')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect();
    (!roles.is_empty()).then_some(roles)
}

/// Run one request through the pipeline.
///
/// `url` may carry a query string; it is ignored. `roles` is `None` for an
/// unauthenticated request.
pub fn handle_request(
    site: &SiteConfig,
    url: &str,
    roles: Option<&[String]>,
    origin: &str,
    today: NaiveDate,
) -> Reply {
    let path = normalize_path(url);
    let year = today.year();
    let policy = RoutingPolicy::new(site);

    match path {
        "/robots.txt" => {
            return Reply::new(200, PLAIN, artifacts::build_robots_txt(site, origin))
                .with_header("Cache-Control", ARTIFACT_CACHE_CONTROL);
        }
        "/sitemap.xml" => {
            return match artifacts::build_sitemap_xml(site, origin, today) {
                Ok(xml) => {
                    Reply::new(200, XML, xml).with_header("Cache-Control", ARTIFACT_CACHE_CONTROL)
                }
                Err(err @ ArtifactError::SitemapDisabled) => Reply::new(404, PLAIN, err.to_string()),
            };
        }
        _ => {}
    }

    if let Some(redirect) = policy.check_maintenance_mode(path) {
        return Reply::redirect(redirect.location, redirect.status);
    }
    if path == MAINTENANCE_PATH {
        return Reply::html(200, themes::render_maintenance(site, year).into_string());
    }
    if let Some(redirect) = policy.apply_redirect_rules(path) {
        return Reply::redirect(redirect.location, redirect.status);
    }

    let Some(key) = page_key_for_path(site, path) else {
        return not_found(site, year);
    };

    if policy.requires_authentication(key) {
        let Some(roles) = roles else {
            return Reply::new(401, PLAIN, "Authentication required".to_string());
        };
        if !policy.has_required_role(key, roles) {
            return Reply::new(403, PLAIN, "Forbidden".to_string());
        }
    }

    Reply::html(200, themes::render_page(site, key, year).into_string())
}

/// The published page served at `path`, if any.
pub fn page_key_for_path<'a>(site: &'a SiteConfig, path: &str) -> Option<&'a str> {
    site.pages()
        .find(|(key, page)| page.is_published && page.url_path(key) == path)
        .map(|(key, _)| key)
}

/// Drop the query string and fragment and any trailing slash (except root).
fn normalize_path(url: &str) -> &str {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn not_found(site: &SiteConfig, year: i32) -> Reply {
    Reply::html(404, themes::render_not_found(site, year).into_string())
}

/// Serve `site` on `addr` until the process is stopped.
pub fn serve(site: &SiteConfig, addr: &str, origin: &str) -> Result<(), ServeError> {
    let server = Server::http(addr).map_err(|source| ServeError::Bind {
        addr: addr.to_string(),
        source,
    })?;
    tracing::info!(%addr, %origin, theme = site.theme().id(), "serving");

    for request in server.incoming_requests() {
        let roles_header = request
            .headers()
            .iter()
            .find(|h| h.field.equiv(ROLES_HEADER))
            .map(|h| h.value.as_str().to_string());
        let roles = parse_roles(roles_header.as_deref());
        let today = Local::now().date_naive();

        let reply = handle_request(site, request.url(), roles.as_deref(), origin, today);
        tracing::info!(
            method = %request.method(),
            url = request.url(),
            status = reply.status,
            "request"
        );

        if let Err(err) = request.respond(to_response(reply)) {
            tracing::warn!(%err, "failed to send response");
        }
    }
    Ok(())
}

fn to_response(reply: Reply) -> Response<std::io::Cursor<Vec<u8>>> {
    let headers = std::iter::once(("Content-Type", reply.content_type.to_string()))
        .chain(reply.headers)
        .filter_map(|(name, value)| {
            let header = Header::from_bytes(name.as_bytes(), value.as_bytes()).ok();
            if header.is_none() {
                tracing::warn!(name, value = %value, "dropping invalid header");
            }
            header
        })
        .collect();
    let body = reply.body.into_bytes();
    let length = body.len();
    Response::new(
        StatusCode(reply.status),
        headers,
        std::io::Cursor::new(body),
        Some(length),
        None,
    )
}
