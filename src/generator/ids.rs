use uuid::Uuid;

/// Message-id seam. Everything else in the pipeline is index-derived; ids
/// are the one field that would otherwise be random, so tests inject a
/// counter-based factory to make full runs byte-comparable.
pub trait MessageIdFactory: Send {
    fn next_id(&mut self) -> String;
}

/// Production factory: random v4 uuids.
#[derive(Debug, Default)]
pub struct UuidIds;

impl MessageIdFactory for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic factory: `msg_1`, `msg_2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl MessageIdFactory for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("msg_{}", self.next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_count_up() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), "msg_1");
        assert_eq!(ids.next_id(), "msg_2");
        assert_eq!(ids.next_id(), "msg_3");
    }

    #[test]
    fn test_uuid_ids_are_unique() {
        let mut ids = UuidIds;
        assert_ne!(ids.next_id(), ids.next_id());
    }
}
