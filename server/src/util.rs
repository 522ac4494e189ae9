// util.rs
use uuid::Uuid;

pub type BlogId = String;

/// Returns a fresh opaque id: a v4 UUID as 32 lowercase hex digits, no hyphens.
pub fn new_opaque_id() -> BlogId {
    Uuid::new_v4().simple().to_string()
}
