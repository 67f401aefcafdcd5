//! Editorial layout: masthead, serif type, ruled columns.

use super::parts::{self, EmptyState};
use super::{Projection, Theme};
use maud::{Markup, html};

const EMPTY: EmptyState = EmptyState {
    title: "No Articles Published",
    body: "Begin editing your publication to populate this section with content.",
    link_label: "Editorial Dashboard",
};

pub struct Classic;

impl Theme for Classic {
    fn render(&self, page: &Projection<'_>) -> Markup {
        html! {
            header.masthead {
                @if let Some(tagline) = page.tagline {
                    p.masthead-tagline { (tagline) }
                }
                (parts::brand(page.app_name))
                nav.site-nav { (parts::nav_links(page.nav)) }
            }
            main.paper {
                @if let Some(hero) = &page.hero {
                    section class=(parts::hero_class(hero)) {
                        (parts::hero_copy(hero))
                        (parts::hero_media(hero))
                        div.hero-actions { (parts::cta(hero)) }
                    }
                    @if !page.stats.is_empty() {
                        aside.by-the-numbers {
                            h2 { "By the Numbers" }
                            (parts::stats(page.stats))
                        }
                    }
                }
                @if let Some(heading) = &page.heading {
                    (parts::heading(heading))
                }
                section.content.columns {
                    (parts::sections(page.sections, &EMPTY))
                }
            }
            footer.site-footer {
                hr;
                p.footer-brand { (page.app_name) }
                (parts::footer_meta(page))
            }
        }
    }
}
