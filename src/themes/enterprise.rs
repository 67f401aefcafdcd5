//! SaaS product layout: sticky top bar, split hero, metrics band.

use super::parts::{self, EmptyState};
use super::{Projection, Theme};
use maud::{Markup, html};

const EMPTY: EmptyState = EmptyState {
    title: "No Content Published",
    body: "Start building your professional site by adding content sections.",
    link_label: "Open Dashboard",
};

pub struct Enterprise;

impl Theme for Enterprise {
    fn render(&self, page: &Projection<'_>) -> Markup {
        html! {
            header.site-header.sticky {
                div.container {
                    (parts::brand(page.app_name))
                    nav.site-nav { (parts::nav_links(page.nav)) }
                    @if let Some(hero) = &page.hero {
                        (parts::cta(hero))
                    }
                }
            }
            main {
                @if let Some(hero) = &page.hero {
                    section class=(parts::hero_class(hero)) {
                        div.container.split {
                            div.hero-copy {
                                (parts::hero_copy(hero))
                                div.hero-actions {
                                    (parts::cta(hero))
                                }
                            }
                            (parts::hero_media(hero))
                        }
                    }
                    @if !page.stats.is_empty() {
                        section.metrics-band {
                            div.container { (parts::stats(page.stats)) }
                        }
                    }
                }
                @if let Some(heading) = &page.heading {
                    div.container { (parts::heading(heading)) }
                }
                section.content {
                    div.container { (parts::sections(page.sections, &EMPTY)) }
                }
            }
            footer.site-footer {
                div.container.footer-grid {
                    div.footer-brand {
                        (parts::brand(page.app_name))
                        @if let Some(description) = page.description {
                            p { (description) }
                        }
                    }
                    nav.footer-nav { (parts::nav_links(page.nav)) }
                }
                div.container.footer-bottom { (parts::footer_meta(page)) }
            }
        }
    }
}
