//! Queue Module Tests
//!
//! Validates the in-memory queue source. The Redis source needs a live server and is not
//! covered here.

#[cfg(test)]
mod tests {
    use crate::queue::{MemoryQueue, QueueError, QueueSource, RedisSettings};

    #[tokio::test]
    async fn test_memory_queue_is_fifo() {
        let queue = MemoryQueue::new();
        queue.push_back("jobs", "first");
        queue.push_back("jobs", "second");
        queue.push_back("jobs", "third");

        assert_eq!(queue.pop_oldest("jobs").await.unwrap().as_deref(), Some("first"));
        assert_eq!(queue.pop_oldest("jobs").await.unwrap().as_deref(), Some("second"));
        assert_eq!(queue.pop_oldest("jobs").await.unwrap().as_deref(), Some("third"));
        assert_eq!(queue.pop_oldest("jobs").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_memory_queue_pop_removes_item() {
        let queue = MemoryQueue::new();
        queue.push_back("jobs", "only");
        assert_eq!(queue.len("jobs"), 1);

        queue.pop_oldest("jobs").await.unwrap();

        assert!(queue.is_empty("jobs"));
    }

    #[tokio::test]
    async fn test_memory_queue_unknown_queue_is_empty() {
        let queue = MemoryQueue::new();
        assert_eq!(queue.pop_oldest("missing").await.unwrap(), None);
        assert_eq!(queue.len("missing"), 0);
    }

    #[tokio::test]
    async fn test_memory_queue_names_are_isolated() {
        let queue = MemoryQueue::new();
        queue.push_back("a", "item-a");

        assert_eq!(queue.pop_oldest("b").await.unwrap(), None);
        assert_eq!(queue.pop_oldest("a").await.unwrap().as_deref(), Some("item-a"));
    }

    #[test]
    fn test_queue_error_display_names_queue() {
        let err = QueueError::Pop {
            queue: "jobs".to_string(),
            source: "connection reset".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to pop from queue 'jobs': connection reset"
        );
    }

    #[test]
    fn test_redis_settings_debug_redacts_password() {
        let settings = RedisSettings {
            host: "localhost".to_string(),
            port: 6379,
            username: Some("worker".to_string()),
            password: Some("hunter2".to_string()),
        };

        let printed = format!("{:?}", settings);
        assert!(printed.contains("worker"));
        assert!(!printed.contains("hunter2"));
    }
}
