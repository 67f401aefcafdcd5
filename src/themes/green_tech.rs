//! Eco-tech look: leaf-green accents, feature grid, stat tiles.

use super::parts::{self, DEFAULT_EMPTY_STATE};
use super::{Projection, Theme};
use maud::{Markup, html};

pub struct GreenTech;

impl Theme for GreenTech {
    fn render(&self, page: &Projection<'_>) -> Markup {
        html! {
            header.site-header {
                div.container {
                    (parts::brand(page.app_name))
                    nav.site-nav { (parts::nav_links(page.nav)) }
                }
            }
            main {
                @if let Some(hero) = &page.hero {
                    section class=(parts::hero_class(hero)) {
                        div.container {
                            (parts::hero_copy(hero))
                            div.hero-actions { (parts::cta(hero)) }
                            @if !page.stats.is_empty() {
                                div.stat-tiles {
                                    @for stat in page.stats {
                                        div.stat-tile {
                                            strong { (stat.value) }
                                            span { (stat.label) }
                                        }
                                    }
                                }
                            }
                            (parts::hero_media(hero))
                        }
                    }
                }
                @if let Some(heading) = &page.heading {
                    div.container { (parts::heading(heading)) }
                }
                section.content {
                    div.container.feature-grid {
                        (parts::sections(page.sections, &DEFAULT_EMPTY_STATE))
                    }
                }
            }
            footer.site-footer {
                div.container {
                    p.footer-brand { (page.app_name) }
                    @if let Some(tagline) = page.tagline {
                        p.footer-tagline { (tagline) }
                    }
                    (parts::footer_meta(page))
                }
            }
        }
    }
}
