// Resume history
// Implements: the per-user in-memory history, its storage seam and the HTTP handlers.
// The store is rebuilt from storage whenever it is empty; it never deletes entries.

pub mod handlers;
pub mod store;
pub mod tracker;
