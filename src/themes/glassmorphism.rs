//! Frosted-glass panels over a gradient backdrop. The default theme.

use super::parts::{self, EmptyState};
use super::{Projection, Theme};
use maud::{Markup, html};

const EMPTY: EmptyState = EmptyState {
    title: "No content yet",
    body: "Start editing your page to see it come to life.",
    link_label: "Open Dashboard",
};

pub struct Glassmorphism;

impl Theme for Glassmorphism {
    fn render(&self, page: &Projection<'_>) -> Markup {
        html! {
            div.backdrop aria-hidden="true" {}
            div.glass-shell {
                header.site-header {
                    (parts::brand(page.app_name))
                    nav.site-nav { (parts::nav_links(page.nav)) }
                }
                main {
                    @if let Some(hero) = &page.hero {
                        section class=(parts::hero_class(hero)) {
                            div.hero-copy {
                                (parts::hero_copy(hero))
                                div.hero-actions { (parts::cta(hero)) }
                                (parts::stats(page.stats))
                            }
                            (parts::hero_media(hero))
                        }
                    }
                    @if let Some(heading) = &page.heading {
                        (parts::heading(heading))
                    }
                    section.content {
                        (parts::sections(page.sections, &EMPTY))
                    }
                }
            }
            footer.site-footer {
                div.footer-brand {
                    h3 { (page.app_name) }
                    @if let Some(description) = page.description {
                        p { (description) }
                    }
                }
                nav.footer-nav {
                    p.footer-nav-title { "Links" }
                    (parts::nav_links(page.nav))
                }
                div.footer-bottom { (parts::footer_meta(page)) }
            }
        }
    }
}
