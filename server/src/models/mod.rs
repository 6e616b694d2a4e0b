pub mod event;

pub use event::{
    Coordinates, Event, EventPatch, Location, NewEvent, Organizer, ScheduleItem, ALL_CATEGORIES,
};
