use crate::store::MockEventStore;

#[derive(Debug, Clone)]
pub struct AppState {
    pub store: MockEventStore,
}

impl AppState {
    pub fn new(store: MockEventStore) -> Self {
        Self { store }
    }
}
