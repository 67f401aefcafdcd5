//! Request gating: maintenance mode, per-page auth, and redirect rules.
//!
//! [`RoutingPolicy`] borrows the site config it decides against. None of
//! its checks fail: "no redirect" and "no gate" are ordinary outcomes and
//! the caller carries on rendering.

use crate::config::SiteConfig;

pub const MAINTENANCE_PATH: &str = "/maintenance";

/// Status used when a redirect rule does not set one.
pub const DEFAULT_REDIRECT_STATUS: u16 = 301;

/// Status for the maintenance gate. Temporary, so crawlers keep the
/// original URLs.
pub const MAINTENANCE_REDIRECT_STATUS: u16 = 302;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub location: String,
    pub status: u16,
}

#[derive(Debug, Clone, Copy)]
pub struct RoutingPolicy<'a> {
    site: &'a SiteConfig,
}

impl<'a> RoutingPolicy<'a> {
    pub fn new(site: &'a SiteConfig) -> Self {
        Self { site }
    }

    /// Redirect to the maintenance page while maintenance mode is on. The
    /// maintenance page itself is always let through.
    pub fn check_maintenance_mode(&self, path: &str) -> Option<Redirect> {
        if path == MAINTENANCE_PATH || !self.site.maintenance_mode() {
            return None;
        }
        Some(Redirect {
            location: MAINTENANCE_PATH.to_string(),
            status: MAINTENANCE_REDIRECT_STATUS,
        })
    }

    pub fn requires_authentication(&self, page_key: &str) -> bool {
        self.site
            .page(page_key)
            .is_some_and(|page| page.requires_auth())
    }

    /// Whether a user holding `user_roles` may view the page.
    ///
    /// Pages without auth admit everyone. Auth pages with no allowed-roles
    /// list admit any authenticated user. Otherwise one shared role is
    /// enough.
    pub fn has_required_role<S: AsRef<str>>(&self, page_key: &str, user_roles: &[S]) -> bool {
        let Some(page) = self.site.page(page_key) else {
            return true;
        };
        if !page.requires_auth() || page.allowed_roles.is_empty() {
            return true;
        }
        user_roles
            .iter()
            .any(|role| page.allowed_roles.iter().any(|allowed| allowed == role.as_ref()))
    }

    /// First matching redirect rule, in configured order.
    ///
    /// `from` matches exactly, or as a prefix when it ends in `/*`. When both
    /// `from` and `to` end in `/*` the rest of the path is carried over:
    ///
    /// ```text
    /// /old/* -> /new/*     /old/page1  =>  /new/page1
    /// /legacy/* -> /home   /legacy/x   =>  /home
    /// ```
    pub fn apply_redirect_rules(&self, path: &str) -> Option<Redirect> {
        let rule = self.site.redirect_rules.iter().find(|rule| {
            rule.from == path
                || rule
                    .from
                    .strip_suffix("/*")
                    .is_some_and(|base| path.starts_with(base))
        })?;

        let location = match (rule.from.strip_suffix("/*"), rule.to.strip_suffix("/*")) {
            (Some(base_from), Some(base_to)) if path.starts_with(base_from) => {
                format!("{base_to}{}", &path[base_from.len()..])
            }
            _ => rule.to.clone(),
        };
        let status = rule.effective_status();

        tracing::debug!(from = %path, to = %location, status, "redirect rule matched");
        Some(Redirect { location, status })
    }
}
