//! Persistence capability for the `User` entity.
//!
//! Handlers only see [`UserStore`]; [`PgUserStore`] backs the service and
//! [`MemoryUserStore`] backs tests and embedded use.

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

use crate::error::StoreError;
use crate::model::{NewUser, User};
use async_trait::async_trait;

#[async_trait]
pub trait UserStore: Send + Sync {
    /// All users ordered by id.
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    async fn find(&self, id: i64) -> Result<Option<User>, StoreError>;

    /// Insert a row; the store assigns `id` and timestamps.
    async fn insert(&self, new: NewUser) -> Result<User, StoreError>;

    /// Persist every mutable field of `user` and refresh `updated_at`.
    /// Returns `None` when no row has `user.id`.
    async fn save(&self, user: User) -> Result<Option<User>, StoreError>;

    /// Hard delete. Returns whether a row was removed.
    async fn delete(&self, id: i64) -> Result<bool, StoreError>;
}
