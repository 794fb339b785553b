//! Zone Repository

use sqlx::SqlitePool;

use shared::models::{LatLng, UpsertOutcome, Zone};
use shared::util::now_millis;

use super::{RepoError, RepoResult};

/// Raw `zone` row; the ring is stored as a JSON `TEXT` column
#[derive(sqlx::FromRow)]
struct ZoneRow {
    store_id: String,
    coordinates: String,
    radius: Option<f64>,
    updated_at: i64,
}

impl ZoneRow {
    fn into_zone(self) -> RepoResult<Zone> {
        let coordinates: Vec<LatLng> = serde_json::from_str(&self.coordinates).map_err(|e| {
            RepoError::Database(format!("Corrupt ring for store {}: {e}", self.store_id))
        })?;
        Ok(Zone {
            store_id: self.store_id,
            coordinates,
            radius: self.radius,
            updated_at: self.updated_at,
        })
    }
}

pub async fn find_by_store(pool: &SqlitePool, store_id: &str) -> RepoResult<Option<Zone>> {
    let row = sqlx::query_as::<_, ZoneRow>(
        "SELECT store_id, coordinates, radius, updated_at FROM zone WHERE store_id = ?",
    )
    .bind(store_id)
    .fetch_optional(pool)
    .await?;
    row.map(ZoneRow::into_zone).transpose()
}

/// Create or replace a store's zone; last write wins
pub async fn upsert(
    pool: &SqlitePool,
    store_id: &str,
    ring: &[LatLng],
    radius: Option<f64>,
) -> RepoResult<(Zone, UpsertOutcome)> {
    let coordinates =
        serde_json::to_string(ring).map_err(|e| RepoError::Database(e.to_string()))?;
    let updated_at = now_millis();

    let existed = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM zone WHERE store_id = ?")
        .bind(store_id)
        .fetch_one(pool)
        .await?
        > 0;

    sqlx::query(
        "INSERT INTO zone (store_id, coordinates, radius, updated_at) VALUES (?, ?, ?, ?)
         ON CONFLICT(store_id) DO UPDATE SET
             coordinates = excluded.coordinates,
             radius = excluded.radius,
             updated_at = excluded.updated_at",
    )
    .bind(store_id)
    .bind(&coordinates)
    .bind(radius)
    .bind(updated_at)
    .execute(pool)
    .await?;

    let zone = find_by_store(pool, store_id)
        .await?
        .ok_or_else(|| RepoError::Database(format!("Failed to save zone for store {store_id}")))?;

    let outcome = if existed {
        UpsertOutcome::Updated
    } else {
        UpsertOutcome::Created
    };
    Ok((zone, outcome))
}

/// Remove a store's zone; false when nothing was stored
pub async fn delete(pool: &SqlitePool, store_id: &str) -> RepoResult<bool> {
    let rows = sqlx::query("DELETE FROM zone WHERE store_id = ?")
        .bind(store_id)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}
