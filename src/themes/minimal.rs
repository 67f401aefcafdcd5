//! Minimal light and dark themes. Same structure, different palettes;
//! the palette lives in `style.css` under the body class.

use super::parts::{self, DEFAULT_EMPTY_STATE};
use super::{Projection, Theme};
use maud::{Markup, html};

pub struct MinimalLight;

pub struct MinimalDark;

impl Theme for MinimalLight {
    fn render(&self, page: &Projection<'_>) -> Markup {
        minimal(page)
    }
}

impl Theme for MinimalDark {
    fn render(&self, page: &Projection<'_>) -> Markup {
        minimal(page)
    }
}

fn minimal(page: &Projection<'_>) -> Markup {
    html! {
        div.narrow {
            header.site-header {
                (parts::brand(page.app_name))
                nav.site-nav { (parts::nav_links(page.nav)) }
            }
            main {
                @if let Some(hero) = &page.hero {
                    section class=(parts::hero_class(hero)) {
                        (parts::hero_copy(hero))
                        (parts::cta(hero))
                        (parts::stats(page.stats))
                    }
                }
                @if let Some(heading) = &page.heading {
                    (parts::heading(heading))
                }
                section.content {
                    (parts::sections(page.sections, &DEFAULT_EMPTY_STATE))
                }
            }
            footer.site-footer {
                (parts::footer_meta(page))
            }
        }
    }
}
