// Helper for generating UUIDv7 (timestamp-sortable UUIDs)
//
// Record ids are generated app-side so that the history queries can use
// the id as a tie-breaker when two rows share the same timestamp.

use uuid::Uuid;

/// Generate a new UUIDv7 (timestamp-sortable).
pub fn uuidv7() -> Uuid {
    Uuid::now_v7()
}
