//! Client-side consent state.
//!
//! Two independent subsystems share the same shape: a choice persisted under
//! its own storage key, a prompt that is visible until the visitor makes a
//! choice, and a named change event fired on every decision.
//!
//! | Subsystem | Storage key | Stored value | Event |
//! |-----------|-------------|--------------|-------|
//! | [`CookieConsent`] | `cookie-consent` | `"accepted"` / `"declined"` | `cookie-consent-changed` |
//! | [`GdprConsent`] | `gdpr-consent` | JSON object of four booleans | `gdpr-consent-changed` |
//!
//! The generated pages implement the same contract in `static/consent.js`
//! against `window.localStorage`; this module is the reference model and is
//! what the tests pin down. Storage is abstracted behind [`ConsentStorage`]
//! and events go through an explicit [`ConsentEvents`] bus, so nothing here
//! touches global state.
//!
//! When the site flag for a subsystem is off, that subsystem is inert: no
//! storage reads, no writes, no events, no prompt.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const COOKIE_CONSENT_KEY: &str = "cookie-consent";
pub const GDPR_CONSENT_KEY: &str = "gdpr-consent";

// =============================================================================
// Storage
// =============================================================================

/// Key/value string storage standing in for browser local storage.
pub trait ConsentStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// Volatile storage, one per client session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl ConsentStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

// =============================================================================
// Change events
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentEvent {
    CookieConsentChanged,
    GdprConsentChanged,
}

impl ConsentEvent {
    /// The DOM event name dispatched on `window`.
    pub fn name(self) -> &'static str {
        match self {
            ConsentEvent::CookieConsentChanged => "cookie-consent-changed",
            ConsentEvent::GdprConsentChanged => "gdpr-consent-changed",
        }
    }
}

type Listener = Box<dyn Fn(ConsentEvent)>;

/// Fire-and-forget publish/subscribe bus.
///
/// Listeners registered before an emit observe it, in registration order.
#[derive(Default)]
pub struct ConsentEvents {
    listeners: Vec<Listener>,
}

impl ConsentEvents {
    pub fn subscribe(&mut self, listener: impl Fn(ConsentEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn emit(&self, event: ConsentEvent) {
        tracing::debug!(event = event.name(), listeners = self.listeners.len(), "consent changed");
        for listener in &self.listeners {
            listener(event);
        }
    }
}

// =============================================================================
// Cookie consent
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CookieChoice {
    Unset,
    Accepted,
    Declined,
}

impl CookieChoice {
    /// Read a stored value. Anything but the two known values is `Unset`.
    pub fn parse(stored: Option<&str>) -> Self {
        match stored {
            Some("accepted") => CookieChoice::Accepted,
            Some("declined") => CookieChoice::Declined,
            _ => CookieChoice::Unset,
        }
    }

    pub fn as_str(self) -> Option<&'static str> {
        match self {
            CookieChoice::Unset => None,
            CookieChoice::Accepted => Some("accepted"),
            CookieChoice::Declined => Some("declined"),
        }
    }
}

/// Cookie notice: a single accept/decline choice.
#[derive(Debug, Clone)]
pub struct CookieConsent {
    enabled: bool,
    choice: CookieChoice,
    prompt_visible: bool,
}

impl CookieConsent {
    /// First-load logic: show the prompt when enabled and nothing valid is stored.
    pub fn load(enabled: bool, storage: &dyn ConsentStorage) -> Self {
        if !enabled {
            return Self {
                enabled,
                choice: CookieChoice::Unset,
                prompt_visible: false,
            };
        }
        let stored = storage.get(COOKIE_CONSENT_KEY);
        let choice = CookieChoice::parse(stored.as_deref());
        if stored.is_some() && choice == CookieChoice::Unset {
            tracing::warn!(value = ?stored, "ignoring unrecognized cookie consent value");
        }
        Self {
            enabled,
            choice,
            prompt_visible: choice == CookieChoice::Unset,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn choice(&self) -> CookieChoice {
        self.choice
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible
    }

    pub fn accept(&mut self, storage: &mut dyn ConsentStorage, events: &ConsentEvents) {
        self.decide(CookieChoice::Accepted, storage, events);
    }

    pub fn decline(&mut self, storage: &mut dyn ConsentStorage, events: &ConsentEvents) {
        self.decide(CookieChoice::Declined, storage, events);
    }

    fn decide(
        &mut self,
        choice: CookieChoice,
        storage: &mut dyn ConsentStorage,
        events: &ConsentEvents,
    ) {
        if !self.enabled {
            return;
        }
        if let Some(value) = choice.as_str() {
            storage.set(COOKIE_CONSENT_KEY, value);
        }
        self.choice = choice;
        self.prompt_visible = false;
        events.emit(ConsentEvent::CookieConsentChanged);
    }
}

// =============================================================================
// GDPR consent
// =============================================================================

/// Per-category consent. `necessary` is always true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GdprPreferences {
    pub necessary: bool,
    pub analytics: bool,
    pub marketing: bool,
    pub functional: bool,
}

impl Default for GdprPreferences {
    fn default() -> Self {
        Self::necessary_only()
    }
}

impl GdprPreferences {
    pub fn all_accepted() -> Self {
        Self {
            necessary: true,
            analytics: true,
            marketing: true,
            functional: true,
        }
    }

    pub fn necessary_only() -> Self {
        Self {
            necessary: true,
            analytics: false,
            marketing: false,
            functional: false,
        }
    }

    /// Merge a stored record over the defaults. Unknown keys and non-boolean
    /// values are skipped; `necessary` stays true whatever was stored.
    fn merged_over_defaults(stored: &str) -> Result<Self, serde_json::Error> {
        let record: serde_json::Map<String, serde_json::Value> = serde_json::from_str(stored)?;
        let mut prefs = Self::default();
        for (key, value) in record {
            let Some(flag) = value.as_bool() else { continue };
            match key.as_str() {
                "analytics" => prefs.analytics = flag,
                "marketing" => prefs.marketing = flag,
                "functional" => prefs.functional = flag,
                _ => {}
            }
        }
        Ok(prefs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GdprCategory {
    Necessary,
    Analytics,
    Marketing,
    Functional,
}

impl GdprCategory {
    pub const ALL: [GdprCategory; 4] = [
        GdprCategory::Necessary,
        GdprCategory::Analytics,
        GdprCategory::Marketing,
        GdprCategory::Functional,
    ];

    /// Key in the stored preferences record.
    pub fn key(self) -> &'static str {
        match self {
            GdprCategory::Necessary => "necessary",
            GdprCategory::Analytics => "analytics",
            GdprCategory::Marketing => "marketing",
            GdprCategory::Functional => "functional",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            GdprCategory::Necessary => "Necessary",
            GdprCategory::Analytics => "Analytics",
            GdprCategory::Marketing => "Marketing",
            GdprCategory::Functional => "Functional",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GdprCategory::Necessary => "Required for the website to function properly",
            GdprCategory::Analytics => "Help us understand how visitors interact with our website",
            GdprCategory::Marketing => {
                "Used to track visitors across websites for advertising purposes"
            }
            GdprCategory::Functional => "Enable enhanced functionality and personalization",
        }
    }

    /// Necessary cookies can't be switched off.
    pub fn is_required(self) -> bool {
        self == GdprCategory::Necessary
    }
}

/// GDPR banner with per-category toggles.
#[derive(Debug, Clone)]
pub struct GdprConsent {
    enabled: bool,
    preferences: GdprPreferences,
    banner_visible: bool,
}

impl GdprConsent {
    /// First-load logic: merge any stored record over the defaults; show the
    /// banner only when enabled and nothing is stored.
    pub fn load(enabled: bool, storage: &dyn ConsentStorage) -> Self {
        let mut state = Self {
            enabled,
            preferences: GdprPreferences::default(),
            banner_visible: false,
        };
        if !enabled {
            return state;
        }
        match storage.get(GDPR_CONSENT_KEY) {
            None => state.banner_visible = true,
            Some(stored) => match GdprPreferences::merged_over_defaults(&stored) {
                Ok(prefs) => state.preferences = prefs,
                Err(err) => {
                    tracing::warn!(%err, "failed to parse stored GDPR preferences, keeping defaults");
                }
            },
        }
        state
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn preferences(&self) -> GdprPreferences {
        self.preferences
    }

    pub fn banner_visible(&self) -> bool {
        self.banner_visible
    }

    /// Toggle a category in memory. `Necessary` cannot be switched off.
    pub fn set(&mut self, category: GdprCategory, value: bool) {
        match category {
            GdprCategory::Necessary => {}
            GdprCategory::Analytics => self.preferences.analytics = value,
            GdprCategory::Marketing => self.preferences.marketing = value,
            GdprCategory::Functional => self.preferences.functional = value,
        }
    }

    pub fn accept_all(&mut self, storage: &mut dyn ConsentStorage, events: &ConsentEvents) {
        self.commit(GdprPreferences::all_accepted(), storage, events);
    }

    pub fn reject_all(&mut self, storage: &mut dyn ConsentStorage, events: &ConsentEvents) {
        self.commit(GdprPreferences::necessary_only(), storage, events);
    }

    /// Persist the current in-memory toggles.
    pub fn save_preferences(&mut self, storage: &mut dyn ConsentStorage, events: &ConsentEvents) {
        self.commit(self.preferences, storage, events);
    }

    fn commit(
        &mut self,
        preferences: GdprPreferences,
        storage: &mut dyn ConsentStorage,
        events: &ConsentEvents,
    ) {
        if !self.enabled {
            return;
        }
        match serde_json::to_string(&preferences) {
            Ok(json) => storage.set(GDPR_CONSENT_KEY, &json),
            Err(err) => tracing::warn!(%err, "failed to serialize GDPR preferences"),
        }
        self.preferences = preferences;
        self.banner_visible = false;
        events.emit(ConsentEvent::GdprConsentChanged);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Storage that records every access, to prove disabled subsystems are inert.
    #[derive(Default)]
    struct SpyStorage {
        inner: MemoryStorage,
        reads: RefCell<usize>,
        writes: usize,
    }

    impl ConsentStorage for SpyStorage {
        fn get(&self, key: &str) -> Option<String> {
            *self.reads.borrow_mut() += 1;
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) {
            self.writes += 1;
            self.inner.set(key, value);
        }
    }

    fn recording_bus() -> (ConsentEvents, Rc<RefCell<Vec<&'static str>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut events = ConsentEvents::default();
        let sink = Rc::clone(&seen);
        events.subscribe(move |event| sink.borrow_mut().push(event.name()));
        (events, seen)
    }

    // =========================================================================
    // Cookie consent
    // =========================================================================

    #[test]
    fn cookie_prompt_shown_on_first_visit() {
        let storage = MemoryStorage::default();
        let consent = CookieConsent::load(true, &storage);
        assert!(consent.prompt_visible());
        assert_eq!(consent.choice(), CookieChoice::Unset);
    }

    #[test]
    fn cookie_accept_persists_and_notifies() {
        let mut storage = MemoryStorage::default();
        let (events, seen) = recording_bus();
        let mut consent = CookieConsent::load(true, &storage);

        consent.accept(&mut storage, &events);

        assert!(!consent.prompt_visible());
        assert_eq!(consent.choice(), CookieChoice::Accepted);
        assert_eq!(storage.get(COOKIE_CONSENT_KEY).as_deref(), Some("accepted"));
        assert_eq!(*seen.borrow(), vec!["cookie-consent-changed"]);
    }

    #[test]
    fn cookie_decline_persists_across_sessions() {
        let mut storage = MemoryStorage::default();
        let events = ConsentEvents::default();
        CookieConsent::load(true, &storage).decline(&mut storage, &events);

        let next_visit = CookieConsent::load(true, &storage);
        assert!(!next_visit.prompt_visible());
        assert_eq!(next_visit.choice(), CookieChoice::Declined);
    }

    #[test]
    fn cookie_malformed_value_reads_as_unset() {
        let mut storage = MemoryStorage::default();
        storage.set(COOKIE_CONSENT_KEY, "maybe");
        let consent = CookieConsent::load(true, &storage);
        assert_eq!(consent.choice(), CookieChoice::Unset);
        assert!(consent.prompt_visible());
    }

    #[test]
    fn cookie_disabled_is_inert() {
        let mut storage = SpyStorage::default();
        let (events, seen) = recording_bus();
        let mut consent = CookieConsent::load(false, &storage);

        consent.accept(&mut storage, &events);

        assert!(!consent.prompt_visible());
        assert_eq!(*storage.reads.borrow(), 0);
        assert_eq!(storage.writes, 0);
        assert!(seen.borrow().is_empty());
    }

    // =========================================================================
    // GDPR consent
    // =========================================================================

    #[test]
    fn gdpr_banner_shown_with_defaults_on_first_visit() {
        let storage = MemoryStorage::default();
        let consent = GdprConsent::load(true, &storage);
        assert!(consent.banner_visible());
        assert_eq!(consent.preferences(), GdprPreferences::necessary_only());
    }

    #[test]
    fn gdpr_accept_all() {
        let mut storage = MemoryStorage::default();
        let (events, seen) = recording_bus();
        let mut consent = GdprConsent::load(true, &storage);

        consent.accept_all(&mut storage, &events);

        assert_eq!(consent.preferences(), GdprPreferences::all_accepted());
        assert!(!consent.banner_visible());
        assert_eq!(*seen.borrow(), vec!["gdpr-consent-changed"]);
        let stored: GdprPreferences =
            serde_json::from_str(&storage.get(GDPR_CONSENT_KEY).unwrap()).unwrap();
        assert_eq!(stored, GdprPreferences::all_accepted());
    }

    #[test]
    fn gdpr_reject_all_ignores_prior_toggles() {
        let mut storage = MemoryStorage::default();
        let events = ConsentEvents::default();
        let mut consent = GdprConsent::load(true, &storage);
        consent.set(GdprCategory::Analytics, true);
        consent.set(GdprCategory::Marketing, true);
        consent.set(GdprCategory::Functional, true);

        consent.reject_all(&mut storage, &events);

        let expected = GdprPreferences {
            necessary: true,
            analytics: false,
            marketing: false,
            functional: false,
        };
        assert_eq!(consent.preferences(), expected);
        let stored: GdprPreferences =
            serde_json::from_str(&storage.get(GDPR_CONSENT_KEY).unwrap()).unwrap();
        assert_eq!(stored, expected);
    }

    #[test]
    fn gdpr_save_preferences_persists_toggles() {
        let mut storage = MemoryStorage::default();
        let events = ConsentEvents::default();
        let mut consent = GdprConsent::load(true, &storage);
        consent.set(GdprCategory::Analytics, true);
        consent.set(GdprCategory::Necessary, false);

        consent.save_preferences(&mut storage, &events);

        let reloaded = GdprConsent::load(true, &storage);
        assert!(!reloaded.banner_visible());
        assert_eq!(
            reloaded.preferences(),
            GdprPreferences {
                necessary: true,
                analytics: true,
                marketing: false,
                functional: false,
            }
        );
    }

    #[test]
    fn gdpr_partial_record_merges_over_defaults() {
        let mut storage = MemoryStorage::default();
        storage.set(GDPR_CONSENT_KEY, r#"{"marketing": true, "necessary": false, "extra": 1}"#);
        let consent = GdprConsent::load(true, &storage);
        assert_eq!(
            consent.preferences(),
            GdprPreferences {
                necessary: true,
                analytics: false,
                marketing: true,
                functional: false,
            }
        );
    }

    #[test]
    fn gdpr_malformed_record_keeps_defaults() {
        let mut storage = MemoryStorage::default();
        storage.set(GDPR_CONSENT_KEY, "{not json");
        let consent = GdprConsent::load(true, &storage);
        assert_eq!(consent.preferences(), GdprPreferences::default());
        // A value is stored, so the banner stays hidden.
        assert!(!consent.banner_visible());
    }

    #[test]
    fn gdpr_disabled_is_inert() {
        let mut storage = SpyStorage::default();
        let (events, seen) = recording_bus();
        let mut consent = GdprConsent::load(false, &storage);

        consent.accept_all(&mut storage, &events);
        consent.save_preferences(&mut storage, &events);

        assert!(!consent.banner_visible());
        assert_eq!(*storage.reads.borrow(), 0);
        assert_eq!(storage.writes, 0);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn subsystems_emit_distinct_events() {
        let mut storage = MemoryStorage::default();
        let (events, seen) = recording_bus();
        let mut cookie = CookieConsent::load(true, &storage);
        let mut gdpr = GdprConsent::load(true, &storage);

        cookie.accept(&mut storage, &events);
        gdpr.reject_all(&mut storage, &events);

        assert_eq!(
            *seen.borrow(),
            vec!["cookie-consent-changed", "gdpr-consent-changed"]
        );
    }

    #[test]
    fn listener_registered_after_emit_misses_it() {
        let mut storage = MemoryStorage::default();
        let mut events = ConsentEvents::default();
        let mut consent = CookieConsent::load(true, &storage);
        consent.accept(&mut storage, &events);

        let late = Rc::new(RefCell::new(0));
        let sink = Rc::clone(&late);
        events.subscribe(move |_| *sink.borrow_mut() += 1);
        assert_eq!(*late.borrow(), 0);
    }
}
