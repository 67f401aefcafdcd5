//! Markup fragments shared between themes.

use super::{DASHBOARD_PATH, Hero, PageHeading, Projection};
use crate::config::{ContentSection, HeroStat, MenuItem};
use maud::{Markup, PreEscaped, html};

/// Placeholder copy for a page with no sections.
pub struct EmptyState {
    pub title: &'static str,
    pub body: &'static str,
    pub link_label: &'static str,
}

pub const DEFAULT_EMPTY_STATE: EmptyState = EmptyState {
    title: "No Content Published",
    body: "Start building your app by adding content sections.",
    link_label: "Open Dashboard",
};

pub fn empty_state(copy: &EmptyState) -> Markup {
    html! {
        div.empty-state {
            p.empty-state-title { (copy.title) }
            p.empty-state-body { (copy.body) }
            a.button.empty-state-link href=(DASHBOARD_PATH) { (copy.link_label) }
        }
    }
}

/// Sections in order, each in its own `<article>`. Falls back to the
/// theme's empty state.
pub fn sections(sections: &[ContentSection], empty: &EmptyState) -> Markup {
    html! {
        @if sections.is_empty() {
            (empty_state(empty))
        } @else {
            div.sections {
                @for section in sections {
                    article.section id=(section.id) {
                        (PreEscaped(&section.content))
                    }
                }
            }
        }
    }
}

pub fn nav_links(items: &[MenuItem]) -> Markup {
    html! {
        ul.nav-links {
            @for item in items {
                li { a href=(item.href) { (item.label) } }
            }
        }
    }
}

pub fn brand(name: &str) -> Markup {
    html! {
        a.brand href="/" { (name) }
    }
}

pub fn stats(stats: &[HeroStat]) -> Markup {
    html! {
        @if !stats.is_empty() {
            dl.stats {
                @for stat in stats {
                    div.stat {
                        dt { (stat.label) }
                        dd { (stat.value) }
                    }
                }
            }
        }
    }
}

pub fn cta(hero: &Hero<'_>) -> Markup {
    html! {
        a.button.cta href=(hero.cta_link) { (hero.cta_label) }
    }
}

/// Hero image or video, when one is configured. Video wins.
pub fn hero_media(hero: &Hero<'_>) -> Markup {
    html! {
        @if let Some(video) = hero.video_url {
            div.hero-media {
                video src=(video) autoplay muted playsinline {}
            }
        } @else if let Some(image) = hero.image_url {
            div.hero-media {
                img src=(image) alt=(hero.title) loading="lazy";
            }
        }
    }
}

/// Badge, title, subtitle and description in the usual order.
pub fn hero_copy(hero: &Hero<'_>) -> Markup {
    html! {
        @if let Some(badge) = hero.badge {
            span.badge { (badge) }
        }
        h1.hero-title { (hero.title) }
        @if let Some(subtitle) = hero.subtitle {
            p.hero-subtitle { (subtitle) }
        }
        p.hero-description { (hero.description) }
    }
}

pub fn heading(heading: &PageHeading<'_>) -> Markup {
    html! {
        section.page-heading {
            h1 { (heading.title) }
            @if let Some(description) = heading.description {
                p { (description) }
            }
        }
    }
}

/// Footer text plus policy and social links.
pub fn footer_meta(page: &Projection<'_>) -> Markup {
    html! {
        p.footer-text { (page.footer_text) }
        @if page.consent.privacy_policy_url.is_some() || page.terms_url.is_some() || !page.social.is_empty() {
            ul.footer-links {
                @if let Some(url) = page.consent.privacy_policy_url {
                    li { a href=(url) { "Privacy Policy" } }
                }
                @if let Some(url) = page.terms_url {
                    li { a href=(url) { "Terms of Service" } }
                }
                @for link in page.social {
                    li { a href=(link.url) rel="noopener" { (link.platform) } }
                }
            }
        }
    }
}

/// `class` value for the hero block.
pub fn hero_class(hero: &Hero<'_>) -> &'static str {
    if hero.animated { "hero animated" } else { "hero" }
}
