//! Entity id generation.

use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// String id shared by every entity kind.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntityId = String;

const ID_SUFFIX_LEN: usize = 9;

/// Generates an id from the current epoch milliseconds and a random suffix.
///
/// Uniqueness is probabilistic. Collisions need two ids minted in the same
/// millisecond with the same 36-bit random suffix.
pub fn generate_id() -> EntityId {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis())
        .unwrap_or_default();
    let random = Uuid::new_v4().simple().to_string();
    format!("{millis}{}", &random[..ID_SUFFIX_LEN])
}
