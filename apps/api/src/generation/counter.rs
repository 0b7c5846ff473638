use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Process-lifetime count of generation attempts. Never persisted; starts at 0 on every boot.
#[derive(Debug, Clone, Default)]
pub struct SessionCounter {
    count: Arc<AtomicU64>,
}

impl SessionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> u64 {
        self.count.load(Ordering::Relaxed)
    }

    /// Increments by one and returns the new value.
    pub fn increment(&self) -> u64 {
        self.count.fetch_add(1, Ordering::Relaxed) + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(SessionCounter::new().get(), 0);
    }

    #[test]
    fn test_increment_returns_new_value() {
        let counter = SessionCounter::new();
        assert_eq!(counter.increment(), 1);
        assert_eq!(counter.increment(), 2);
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_clones_share_the_same_count() {
        let counter = SessionCounter::new();
        let handle = counter.clone();
        handle.increment();
        assert_eq!(counter.get(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_increments_are_not_lost() {
        let counter = SessionCounter::new();
        let mut tasks = Vec::new();
        for _ in 0..16 {
            let c = counter.clone();
            tasks.push(tokio::spawn(async move {
                for _ in 0..100 {
                    c.increment();
                }
            }));
        }
        for task in tasks {
            task.await.unwrap();
        }
        assert_eq!(counter.get(), 1600);
    }
}
