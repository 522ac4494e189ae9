// model.rs
use rocket::serde::{Deserialize, Serialize};

use crate::util::BlogId;

/// One blog post. Only `title` and `content` change after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "rocket::serde")]
pub struct Blog {
    pub id: BlogId,
    pub title: String,
    pub content: String,
}

impl Blog {
    pub fn new(id: BlogId, title: String, content: String) -> Self {
        Self { id, title, content }
    }
}
