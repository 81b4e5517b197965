//! users-api: REST CRUD over a single `User` resource stored in PostgreSQL.

pub mod config;
pub mod error;
pub mod handlers;
pub mod migration;
pub mod model;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{DbConfig, LISTEN_ADDR};
pub use error::{AppError, ConfigError, StoreError};
pub use migration::migrate;
pub use model::{NewUser, User, UserPatch};
pub use response::MessageBody;
pub use routes::{app, user_routes};
pub use state::AppState;
pub use store::{MemoryUserStore, PgUserStore, UserStore};
