use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Category sentinel that matches every event.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub location: Location,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub capacity: u32,
    #[serde(default)]
    pub registered: u32,
    pub organizer: Organizer,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_past_event: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub time: String,
    pub activity: String,
}

/// Payload for creating an event. The store assigns the id and timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub time: Option<String>,
    pub location: Location,
    pub image_url: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub capacity: u32,
    #[serde(default)]
    pub registered: u32,
    pub organizer: Organizer,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub is_past_event: Option<bool>,
}

/// Partial update. Absent fields are left as they are; `id` and the
/// timestamps are not part of the payload and are never overwritten.
/// The optional `time` and `isPastEvent` fields are cleared by an explicit
/// `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "present_or_null")]
    pub time: Option<Option<String>>,
    pub location: Option<Location>,
    pub image_url: Option<String>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    pub capacity: Option<u32>,
    pub registered: Option<u32>,
    pub organizer: Option<Organizer>,
    pub schedule: Option<Vec<ScheduleItem>>,
    #[serde(deserialize_with = "present_or_null")]
    pub is_past_event: Option<Option<bool>>,
}

/// Distinguishes a field sent as `null` (`Some(None)`) from one left out
/// (`None`, via the container default).
fn present_or_null<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl Event {
    pub fn from_new(id: String, new: NewEvent, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            date: new.date,
            time: new.time,
            location: new.location,
            image_url: new.image_url,
            category: new.category,
            tags: dedup_tags(new.tags),
            capacity: new.capacity,
            registered: new.registered,
            organizer: new.organizer,
            schedule: new.schedule,
            is_past_event: new.is_past_event,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    /// Merges the present fields of `patch` into this event.
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(image_url) = patch.image_url {
            self.image_url = image_url;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(tags) = patch.tags {
            self.tags = dedup_tags(tags);
        }
        if let Some(capacity) = patch.capacity {
            self.capacity = capacity;
        }
        if let Some(registered) = patch.registered {
            self.registered = registered;
        }
        if let Some(organizer) = patch.organizer {
            self.organizer = organizer;
        }
        if let Some(schedule) = patch.schedule {
            self.schedule = schedule;
        }
        if let Some(is_past_event) = patch.is_past_event {
            self.is_past_event = is_past_event;
        }
    }

    /// Checks the record-level invariants. Returns a message suitable for
    /// showing to the caller.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title must not be empty".to_string());
        }
        if self.registered > self.capacity {
            return Err(format!(
                "registered ({}) exceeds capacity ({})",
                self.registered, self.capacity
            ));
        }
        Ok(())
    }

    /// Case-insensitive substring match on title, description, category
    /// and tags. `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

fn dedup_tags(tags: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}
