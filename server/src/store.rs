// In src/store.rs

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::model::Blog;

/// In-memory blog records, kept in insertion order.
///
/// Lookups scan linearly and act on the first record whose id matches, so a
/// duplicated id (possible with the numeric id scheme) shadows later copies.
pub struct BlogStore {
    blogs: Mutex<Vec<Blog>>,
}

impl BlogStore {
    pub fn new() -> Self {
        BlogStore {
            blogs: Mutex::new(Vec::new()),
        }
    }

    // Every operation leaves the vector consistent before releasing the lock,
    // so a poisoned guard is still safe to use.
    fn lock(&self) -> MutexGuard<'_, Vec<Blog>> {
        self.blogs.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn append(&self, records: Vec<Blog>) {
        let mut blogs = self.lock();
        blogs.extend(records);
    }

    pub fn list(&self) -> Vec<Blog> {
        self.lock().clone()
    }

    pub fn find_by_id(&self, id: &str) -> Option<Blog> {
        let blogs = self.lock();
        blogs.iter().find(|b| b.id == id).cloned()
    }

    /// Overwrites title and content of the first record with `id`.
    pub fn update(&self, id: &str, title: &str, content: &str) -> Option<Blog> {
        let mut blogs = self.lock();
        let blog = blogs.iter_mut().find(|b| b.id == id)?;
        blog.title = title.to_string();
        blog.content = content.to_string();
        Some(blog.clone())
    }

    /// Removes the first record with `id`. Missing ids leave the store untouched.
    pub fn remove(&self, id: &str) -> Option<Blog> {
        let mut blogs = self.lock();
        let pos = blogs.iter().position(|b| b.id == id)?;
        Some(blogs.remove(pos))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Drops every record and returns how many were held.
    pub fn clear(&self) -> usize {
        let mut blogs = self.lock();
        let removed = blogs.len();
        blogs.clear();
        removed
    }
}

impl Default for BlogStore {
    fn default() -> Self {
        Self::new()
    }
}
