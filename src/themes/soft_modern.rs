//! Pastel tones, rounded cards, soft shadows.
//!
//! The page background is the primary color blended towards white
//! (`Projection::pastel`), set inline so it tracks the configured color.

use super::parts::{self, EmptyState};
use super::{Projection, Theme};
use maud::{Markup, html};

const EMPTY: EmptyState = EmptyState {
    title: "Nothing here yet",
    body: "Add a content section and it will show up right here.",
    link_label: "Open Dashboard",
};

pub struct SoftModern;

impl Theme for SoftModern {
    fn render(&self, page: &Projection<'_>) -> Markup {
        html! {
            div.soft-page style={ "background-color: " (page.pastel) ";" } {
                header.site-header.card {
                    (parts::brand(page.app_name))
                    nav.site-nav { (parts::nav_links(page.nav)) }
                }
                main {
                    @if let Some(hero) = &page.hero {
                        section class=(parts::hero_class(hero)) {
                            div.card.hero-card {
                                (parts::hero_copy(hero))
                                div.hero-actions { (parts::cta(hero)) }
                            }
                            (parts::hero_media(hero))
                        }
                        @if !page.stats.is_empty() {
                            div.stat-cards {
                                @for stat in page.stats {
                                    div.card.stat-card {
                                        span.stat-value { (stat.value) }
                                        span.stat-label { (stat.label) }
                                    }
                                }
                            }
                        }
                    }
                    @if let Some(heading) = &page.heading {
                        div.card { (parts::heading(heading)) }
                    }
                    section.content.card {
                        (parts::sections(page.sections, &EMPTY))
                    }
                }
                footer.site-footer.card {
                    (parts::footer_meta(page))
                }
            }
        }
    }
}
