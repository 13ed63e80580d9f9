// src/app/state.rs
//! Application state definitions

use crate::features::Settings;

/// Main application state
pub struct App {
    /// Settings and window bookkeeping
    pub core: CoreState,
    /// Review queue data
    pub queue: QueueState,
}

/// Core infrastructure
pub struct CoreState {
    pub settings: Settings,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }
}

/// One entry in the review queue
#[derive(Debug, Clone)]
pub struct ReviewItem {
    pub id: u64,
    /// Title line
    pub primary: String,
    /// Detail line
    pub secondary: String,
    /// Set once the entry has been accepted
    pub finished: bool,
    /// Bumped whenever the row widget must rebuild its gesture state
    pub revision: u32,
}

impl ReviewItem {
    fn new(id: u64, primary: &str, secondary: &str) -> Self {
        Self {
            id,
            primary: primary.to_string(),
            secondary: secondary.to_string(),
            finished: false,
            revision: 0,
        }
    }

    /// Widget identity for the swipe row. Changes when the entry is
    /// reloaded in place, which resets any in-flight gesture.
    pub fn swipe_key(&self) -> u64 {
        (self.id << 32) | u64::from(self.revision)
    }
}

/// Review queue state
pub struct QueueState {
    pub items: Vec<ReviewItem>,
}

impl QueueState {
    /// Queue populated with the built-in demo entries
    pub fn seeded() -> Self {
        let entries = [
            ("Quarterly budget report", "submitted by Dana Whitfield"),
            ("Venue change proposal", "submitted by Theo Marsh"),
            ("New member application", "submitted by Priya Nair"),
            ("Logo redesign draft", "submitted by Jonas Eckel"),
            ("Catering contract renewal", "submitted by Mei Tanaka"),
            ("Workshop schedule update", "submitted by Ruth Adeyemi"),
            ("Equipment purchase request", "submitted by Carlos Vega"),
            ("Newsletter copy for June", "submitted by Lena Hartmann"),
        ];

        let items = entries
            .iter()
            .enumerate()
            .map(|(i, (primary, secondary))| ReviewItem::new(i as u64, primary, secondary))
            .collect();

        Self { items }
    }

    /// Replace the queue contents with loaded entries
    pub fn replace(&mut self, entries: Vec<(String, String)>) {
        self.items = entries
            .into_iter()
            .enumerate()
            .map(|(i, (primary, secondary))| ReviewItem::new(i as u64, &primary, &secondary))
            .collect();
    }

    /// Mark an entry accepted, keeping it in the list. Returns false if
    /// the id is not present or the entry is already finished.
    pub fn accept(&mut self, id: u64) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) if !item.finished => {
                item.finished = true;
                item.revision += 1;
                true
            }
            _ => false,
        }
    }

    /// Remove a declined entry. Returns false if the id is not present.
    pub fn decline(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    /// Number of entries still awaiting review
    pub fn pending(&self) -> usize {
        self.items.iter().filter(|item| !item.finished).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_marks_finished_and_changes_widget_key() {
        let mut queue = QueueState::seeded();
        let id = queue.items[0].id;
        let key_before = queue.items[0].swipe_key();

        assert!(queue.accept(id));

        let item = &queue.items[0];
        assert!(item.finished, "accepted entry should stay in the list");
        assert_ne!(
            item.swipe_key(),
            key_before,
            "widget key must change so the row rebuilds"
        );
    }

    #[test]
    fn accept_is_not_repeatable() {
        let mut queue = QueueState::seeded();
        let id = queue.items[0].id;

        assert!(queue.accept(id));
        assert!(!queue.accept(id), "second accept should be a no-op");
        assert!(!queue.accept(9999), "unknown id should be a no-op");
    }

    #[test]
    fn decline_removes_the_entry() {
        let mut queue = QueueState::seeded();
        let count = queue.items.len();
        let id = queue.items[1].id;

        assert!(queue.decline(id));
        assert_eq!(queue.items.len(), count - 1);
        assert!(queue.items.iter().all(|item| item.id != id));
        assert!(!queue.decline(id), "declining again should be a no-op");
    }

    #[test]
    fn pending_skips_finished_entries() {
        let mut queue = QueueState::seeded();
        let total = queue.items.len();
        assert_eq!(queue.pending(), total);

        let id = queue.items[0].id;
        queue.accept(id);
        assert_eq!(queue.pending(), total - 1);
        assert_eq!(queue.items.len(), total);
    }

    #[test]
    fn replace_assigns_fresh_sequential_ids() {
        let mut queue = QueueState::seeded();
        queue.replace(vec![
            ("One".to_string(), "first".to_string()),
            ("Two".to_string(), "second".to_string()),
        ]);

        assert_eq!(queue.items.len(), 2);
        assert_eq!(queue.items[0].id, 0);
        assert_eq!(queue.items[1].id, 1);
        assert!(queue.items.iter().all(|item| !item.finished));
    }
}
