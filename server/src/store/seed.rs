use chrono::{DateTime, Duration, Utc};

use crate::models::{Coordinates, Event, Location, Organizer, ScheduleItem};

pub fn location(name: &str, city: &str) -> Location {
    Location {
        name: name.to_string(),
        address: "100 Main Street".to_string(),
        city: city.to_string(),
        state: "CA".to_string(),
        zip: "94110".to_string(),
        coordinates: None,
    }
}

pub fn organizer(name: &str, email: &str) -> Organizer {
    Organizer {
        name: name.to_string(),
        email: email.to_string(),
        phone: None,
    }
}

fn schedule(items: &[(&str, &str)]) -> Vec<ScheduleItem> {
    items
        .iter()
        .map(|(time, activity)| ScheduleItem {
            time: time.to_string(),
            activity: activity.to_string(),
        })
        .collect()
}

struct Sample {
    title: &'static str,
    description: &'static str,
    days_from_now: i64,
    time: &'static str,
    category: &'static str,
    tags: &'static [&'static str],
    capacity: u32,
    registered: u32,
}

const SAMPLES: &[Sample] = &[
    Sample {
        title: "Youth Coding Bootcamp",
        description: "A weekend introduction to programming for high school students.",
        days_from_now: 14,
        time: "9:00 AM - 4:00 PM",
        category: "Education",
        tags: &["technology", "youth", "workshop"],
        capacity: 30,
        registered: 18,
    },
    Sample {
        title: "Community Food Drive",
        description: "Collecting and sorting donations for the neighbourhood food bank.",
        days_from_now: 7,
        time: "10:00 AM - 2:00 PM",
        category: "Volunteering",
        tags: &["food", "community"],
        capacity: 60,
        registered: 42,
    },
    Sample {
        title: "Annual Scholarship Gala",
        description: "An evening celebrating this year's scholarship recipients.",
        days_from_now: 45,
        time: "6:30 PM - 10:00 PM",
        category: "Fundraising",
        tags: &["gala", "scholarship", "donors"],
        capacity: 200,
        registered: 120,
    },
    Sample {
        title: "Adult Literacy Tutor Training",
        description: "Training session for new volunteer reading tutors.",
        days_from_now: -10,
        time: "1:00 PM - 5:00 PM",
        category: "Education",
        tags: &["literacy", "training"],
        capacity: 25,
        registered: 25,
    },
    Sample {
        title: "Park Cleanup Day",
        description: "Litter pickup and trail maintenance in Riverside Park.",
        days_from_now: -30,
        time: "8:00 AM - 12:00 PM",
        category: "Volunteering",
        tags: &["environment", "outdoors", "community"],
        capacity: 80,
        registered: 64,
    },
    Sample {
        title: "Spring Benefit Concert",
        description: "Local musicians performing in support of after-school programs.",
        days_from_now: -60,
        time: "7:00 PM - 9:30 PM",
        category: "Arts",
        tags: &["music", "fundraiser"],
        capacity: 150,
        registered: 138,
    },
];

/// Sample events dated relative to `now`, mixing upcoming and past ones.
pub fn sample_events(now: DateTime<Utc>) -> Vec<Event> {
    SAMPLES
        .iter()
        .enumerate()
        .map(|(index, sample)| {
            let created = now - Duration::days(90);
            let date = now + Duration::days(sample.days_from_now);
            Event {
                id: format!("evt_seed_{}", index + 1),
                title: sample.title.to_string(),
                description: sample.description.to_string(),
                date,
                time: Some(sample.time.to_string()),
                location: Location {
                    coordinates: Some(Coordinates {
                        lat: 37.7599,
                        lng: -122.4148,
                    }),
                    ..location("Mission Community Center", "San Francisco")
                },
                image_url: format!("/images/events/{}.jpg", index + 1),
                category: sample.category.to_string(),
                tags: sample.tags.iter().map(|t| t.to_string()).collect(),
                capacity: sample.capacity,
                registered: sample.registered,
                organizer: organizer("Programs Team", "programs@example.org"),
                schedule: schedule(&[
                    ("Start", "Welcome and introductions"),
                    ("Midway", "Main activity"),
                    ("End", "Wrap-up"),
                ]),
                is_past_event: Some(sample.days_from_now < 0),
                created_at: Some(created),
                updated_at: Some(created),
            }
        })
        .collect()
}
