//! Cookie-notice and GDPR banners.
//!
//! Both banners render `hidden`. `static/consent.js` reads the stored
//! choice on load and only reveals a banner when no choice has been made,
//! following the same rules as [`crate::consent`]. Buttons carry a
//! `data-consent-action` the script dispatches on.

use super::ConsentSettings;
use crate::consent::{COOKIE_CONSENT_KEY, GDPR_CONSENT_KEY, GdprCategory};
use maud::{Markup, html};

pub fn consent_banners(settings: &ConsentSettings<'_>) -> Markup {
    html! {
        @if settings.cookie_banner {
            (cookie_banner(settings.privacy_policy_url))
        }
        @if settings.gdpr_banner {
            (gdpr_banner(settings.privacy_policy_url))
        }
    }
}

fn cookie_banner(privacy_url: Option<&str>) -> Markup {
    html! {
        div.consent-banner id=(COOKIE_CONSENT_KEY) role="dialog" aria-live="polite"
            data-consent-key=(COOKIE_CONSENT_KEY) hidden {
            div.consent-copy {
                h3 { "Cookie Notice" }
                p {
                    "We use cookies to enhance your experience. By continuing to visit this site you agree to our use of cookies."
                    @if let Some(url) = privacy_url {
                        " "
                        a href=(url) { "Learn more" }
                    }
                }
            }
            div.consent-actions {
                button.button.secondary type="button" data-consent-action="decline" { "Decline" }
                button.button type="button" data-consent-action="accept" { "Accept" }
            }
        }
    }
}

fn gdpr_banner(privacy_url: Option<&str>) -> Markup {
    html! {
        div.consent-banner.gdpr id=(GDPR_CONSENT_KEY) role="dialog" aria-live="polite"
            data-consent-key=(GDPR_CONSENT_KEY) hidden {
            div.consent-summary {
                h3 { "Your Privacy Matters" }
                p {
                    "We use cookies and similar technologies to provide you with a personalized experience and to analyze our traffic. You can choose which categories of cookies you want to allow."
                    @if let Some(url) = privacy_url {
                        " "
                        a href=(url) { "Privacy Policy" }
                    }
                }
                div.consent-actions {
                    button.button.secondary type="button" data-consent-action="customize" { "Customize" }
                    button.button.secondary type="button" data-consent-action="reject-all" { "Reject All" }
                    button.button type="button" data-consent-action="accept-all" { "Accept All" }
                }
            }
            div.consent-settings hidden {
                h3 { "Cookie Preferences" }
                @for category in GdprCategory::ALL {
                    label.consent-category {
                        input type="checkbox" name=(category.key())
                            checked[category.is_required()] disabled[category.is_required()];
                        span.consent-category-title {
                            (category.title())
                            @if category.is_required() {
                                " (Required)"
                            }
                        }
                        span.consent-category-description { (category.description()) }
                    }
                }
                div.consent-actions {
                    button.button.secondary type="button" data-consent-action="reject-all" { "Reject All" }
                    button.button type="button" data-consent-action="save" { "Save Preferences" }
                }
            }
        }
    }
}
