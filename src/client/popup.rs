//! One-time promotional popup
//!
//! The popup is shown at most once per browser. The "shown" transition is
//! one-way and survives across sessions through a persisted flag under a
//! namespaced key; storage and clock are injected so the logic is testable
//! without a browser.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::models::offer::Offer;

/// Storage key for the one-time popup flag
pub const OFFER_SHOWN_KEY: &str = "tripconnect.offer.shown";

/// Persisted key/value flags (backed by localStorage on the site)
#[cfg_attr(test, mockall::automock)]
pub trait FlagStore {
    /// Read the persisted value under a key, if any
    fn get(&self, key: &str) -> Option<String>;
    /// Persist a value under a key
    fn set(&mut self, key: &str, value: &str);
}

#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Decides whether and when to show the promotional popup
pub struct OfferPopup<S, C> {
    store: S,
    clock: C,
}

impl<S: FlagStore, C: Clock> OfferPopup<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// How long to wait before showing the popup, or None when there is
    /// nothing to show: no offer, an inactive offer, or a browser that has
    /// already seen one.
    pub fn plan(&self, offer: Option<&Offer>) -> Option<Duration> {
        let offer = offer?;
        if !offer.is_active {
            return None;
        }
        if self.store.get(OFFER_SHOWN_KEY).is_some() {
            return None;
        }
        Some(Duration::from_secs(offer.delay.max(0) as u64))
    }

    /// Record the one-way "shown" transition. The flag stores the timestamp
    /// of the showing and never resets.
    pub fn mark_shown(&mut self) {
        let shown_at = self.clock.now().to_rfc3339();
        self.store.set(OFFER_SHOWN_KEY, &shown_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn offer(delay: i32, is_active: bool) -> Offer {
        Offer {
            id: Uuid::nil(),
            title: "Summer escape".to_string(),
            image: "/img/summer.jpg".to_string(),
            delay,
            is_active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn fresh_store() -> MockFlagStore {
        let mut store = MockFlagStore::new();
        store.expect_get().returning(|_| None);
        store
    }

    #[test]
    fn plans_the_popup_after_the_offer_delay() {
        let popup = OfferPopup::new(fresh_store(), MockClock::new());
        let delay = popup.plan(Some(&offer(10, true)));
        assert_eq!(delay, Some(Duration::from_secs(10)));
    }

    #[test]
    fn no_offer_means_no_popup() {
        let popup = OfferPopup::new(fresh_store(), MockClock::new());
        assert_eq!(popup.plan(None), None);
    }

    #[test]
    fn inactive_offer_means_no_popup() {
        let popup = OfferPopup::new(fresh_store(), MockClock::new());
        assert_eq!(popup.plan(Some(&offer(10, false))), None);
    }

    #[test]
    fn shown_flag_suppresses_the_popup() {
        let mut store = MockFlagStore::new();
        store
            .expect_get()
            .withf(|key| key == OFFER_SHOWN_KEY)
            .returning(|_| Some("2024-01-01T00:00:00+00:00".to_string()));
        let popup = OfferPopup::new(store, MockClock::new());
        assert_eq!(popup.plan(Some(&offer(10, true))), None);
    }

    #[test]
    fn negative_delay_shows_immediately() {
        let popup = OfferPopup::new(fresh_store(), MockClock::new());
        assert_eq!(popup.plan(Some(&offer(-5, true))), Some(Duration::ZERO));
    }

    #[test]
    fn mark_shown_persists_a_timestamp_under_the_namespaced_key() {
        let shown_at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

        let mut clock = MockClock::new();
        clock.expect_now().return_const(shown_at);

        let expected = shown_at.to_rfc3339();
        let mut store = MockFlagStore::new();
        store
            .expect_set()
            .withf(move |key, value| key == OFFER_SHOWN_KEY && value == expected)
            .times(1)
            .return_const(());

        let mut popup = OfferPopup::new(store, clock);
        popup.mark_shown();
    }
}
