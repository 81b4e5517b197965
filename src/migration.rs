//! Auto-migration of the `users` table: create it if absent, then add any missing columns.
//! Existing columns are never altered or dropped.

use crate::error::StoreError;
use sqlx::PgPool;

pub const USERS_TABLE: &str = "users";

/// Non-key columns and their DDL; also used to add columns to an older table.
const USER_COLUMNS: &[(&str, &str)] = &[
    ("name", "TEXT NOT NULL DEFAULT ''"),
    ("email", "TEXT NOT NULL DEFAULT ''"),
    ("created_at", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
    ("updated_at", "TIMESTAMPTZ NOT NULL DEFAULT NOW()"),
];

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn create_table_sql() -> String {
    let mut col_defs = vec![format!("{} BIGSERIAL PRIMARY KEY", quote("id"))];
    for (name, def) in USER_COLUMNS {
        col_defs.push(format!("{} {}", quote(name), def));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n  {}\n)",
        quote(USERS_TABLE),
        col_defs.join(",\n  ")
    )
}

fn add_column_sql(name: &str, def: &str) -> String {
    format!(
        "ALTER TABLE {} ADD COLUMN IF NOT EXISTS {} {}",
        quote(USERS_TABLE),
        quote(name),
        def
    )
}

/// Bring the `users` table up to the shape of [`crate::model::User`]. Idempotent.
pub async fn migrate(pool: &PgPool) -> Result<(), StoreError> {
    sqlx::query(&create_table_sql()).execute(pool).await?;
    for (name, def) in USER_COLUMNS {
        sqlx::query(&add_column_sql(name, def)).execute(pool).await?;
    }
    tracing::info!(table = USERS_TABLE, "schema up to date");
    Ok(())
}
