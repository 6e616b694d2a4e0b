//! In-memory event store standing in for the events database during local
//! development. Every operation sleeps for the configured latency first so
//! the front end sees realistic loading states.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Event, EventPatch, NewEvent, ALL_CATEGORIES};

pub mod error;
pub mod seed;

pub use error::{StoreError, StoreResult};

/// Length of the random part of generated ids.
const ID_SUFFIX_LEN: usize = 9;

#[derive(Debug, Clone)]
pub struct MockEventStore {
    events: Arc<RwLock<Vec<Event>>>,
    latency: Duration,
}

impl MockEventStore {
    pub fn new(latency: Duration) -> Self {
        Self::with_events(Vec::new(), latency)
    }

    pub fn with_events(events: Vec<Event>, latency: Duration) -> Self {
        Self {
            events: Arc::new(RwLock::new(events)),
            latency,
        }
    }

    /// Store pre-populated with the sample events, dated around `Utc::now()`.
    pub fn seeded(latency: Duration) -> Self {
        Self::with_events(seed::sample_events(Utc::now()), latency)
    }

    pub async fn len(&self) -> usize {
        self.events.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.events.read().await.is_empty()
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    pub async fn fetch_events(&self) -> Vec<Event> {
        self.simulate_latency().await;
        let events = self.events.read().await;
        debug!(count = events.len(), "Fetched all events");
        events.clone()
    }

    pub async fn fetch_event_by_id(&self, id: &str) -> Option<Event> {
        self.simulate_latency().await;
        let events = self.events.read().await;
        let found = events.iter().find(|e| e.id == id).cloned();
        debug!(event_id = %id, found = found.is_some(), "Fetched event by id");
        found
    }

    pub async fn create_event(&self, new: NewEvent) -> StoreResult<Event> {
        self.simulate_latency().await;
        let now = Utc::now();

        let mut events = self.events.write().await;
        let id = loop {
            let candidate = generate_id(now);
            if !events.iter().any(|e| e.id == candidate) {
                break candidate;
            }
        };

        let event = Event::from_new(id, new, now);
        event.validate().map_err(StoreError::Validation)?;
        events.push(event.clone());

        info!(event_id = %event.id, title = %event.title, "Created event");
        Ok(event)
    }

    pub async fn update_event(&self, id: &str, patch: EventPatch) -> StoreResult<Event> {
        self.simulate_latency().await;
        let mut events = self.events.write().await;
        let slot = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut updated = slot.clone();
        updated.apply(patch);
        updated.validate().map_err(StoreError::Validation)?;
        updated.updated_at = Some(Utc::now());
        *slot = updated.clone();

        info!(event_id = %id, "Updated event");
        Ok(updated)
    }

    pub async fn delete_event(&self, id: &str) -> StoreResult<()> {
        self.simulate_latency().await;
        let mut events = self.events.write().await;
        let index = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        events.remove(index);

        info!(event_id = %id, "Deleted event");
        Ok(())
    }

    pub async fn search_events(&self, query: &str) -> Vec<Event> {
        self.simulate_latency().await;
        let needle = query.to_lowercase();
        let events = self.events.read().await;
        let hits: Vec<Event> = events.iter().filter(|e| e.matches(&needle)).cloned().collect();
        debug!(query = %query, hits = hits.len(), "Searched events");
        hits
    }

    pub async fn fetch_events_by_category(&self, category: &str) -> Vec<Event> {
        self.simulate_latency().await;
        let events = self.events.read().await;
        if category == ALL_CATEGORIES {
            return events.clone();
        }
        events
            .iter()
            .filter(|e| e.category == category)
            .cloned()
            .collect()
    }

    /// Events dated within `[start, end]`, both ends inclusive.
    pub async fn fetch_events_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Vec<Event> {
        self.simulate_latency().await;
        let events = self.events.read().await;
        events
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect()
    }

    pub async fn fetch_upcoming_events(&self, limit: Option<usize>) -> Vec<Event> {
        self.fetch_upcoming_events_at(Utc::now(), limit).await
    }

    /// Events dated at or after `now`, soonest first.
    pub async fn fetch_upcoming_events_at(
        &self,
        now: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Vec<Event> {
        self.simulate_latency().await;
        let mut upcoming: Vec<Event> = {
            let events = self.events.read().await;
            events.iter().filter(|e| e.date >= now).cloned().collect()
        };
        upcoming.sort_by(|a, b| a.date.cmp(&b.date));
        truncate(upcoming, limit)
    }

    pub async fn fetch_past_events(&self, limit: Option<usize>) -> Vec<Event> {
        self.fetch_past_events_at(Utc::now(), limit).await
    }

    /// Events dated before `now`, most recent first.
    pub async fn fetch_past_events_at(
        &self,
        now: DateTime<Utc>,
        limit: Option<usize>,
    ) -> Vec<Event> {
        self.simulate_latency().await;
        let mut past: Vec<Event> = {
            let events = self.events.read().await;
            events.iter().filter(|e| e.date < now).cloned().collect()
        };
        past.sort_by(|a, b| b.date.cmp(&a.date));
        truncate(past, limit)
    }

    pub async fn fetch_categories(&self) -> Vec<String> {
        self.simulate_latency().await;
        let events = self.events.read().await;
        events
            .iter()
            .map(|e| e.category.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn generate_id(now: DateTime<Utc>) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("evt_{}_{}", now.timestamp_millis(), &suffix[..ID_SUFFIX_LEN])
}

fn truncate(mut events: Vec<Event>, limit: Option<usize>) -> Vec<Event> {
    if let Some(limit) = limit {
        events.truncate(limit);
    }
    events
}
