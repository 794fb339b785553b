//! Postcode Repository
//!
//! Read-only reference data, one table per country partition.

use sqlx::SqlitePool;

use shared::models::{CountryPrefix, LatLng};

use super::RepoResult;

pub async fn find_coordinate(
    pool: &SqlitePool,
    prefix: CountryPrefix,
    postcode: &str,
) -> RepoResult<Option<LatLng>> {
    // The table name comes from the enum, never from request input.
    let sql = format!(
        "SELECT latitude, longitude FROM {} WHERE postcode = ?",
        prefix.table()
    );
    let row = sqlx::query_as::<_, (f64, f64)>(&sql)
        .bind(postcode)
        .fetch_optional(pool)
        .await?;
    Ok(row.map(|(lat, lng)| LatLng::new(lat, lng)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn seed(pool: &SqlitePool, table: &str, postcode: &str, lat: f64, lng: f64) {
        sqlx::query(&format!(
            "INSERT INTO {table} (postcode, latitude, longitude) VALUES (?, ?, ?)"
        ))
        .bind(postcode)
        .bind(lat)
        .bind(lng)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn looks_up_coordinate_in_the_right_partition() {
        let db = DbService::open_in_memory().await.unwrap();
        seed(&db.pool, "uk_postcode", "SW1A 1AA", 51.501, -0.1416).await;
        seed(&db.pool, "mt_postcode", "VLT 1110", 35.8978, 14.5125).await;

        let coord = find_coordinate(&db.pool, CountryPrefix::Uk, "SW1A 1AA")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(coord, LatLng::new(51.501, -0.1416));

        // Partitions do not leak into each other
        assert!(
            find_coordinate(&db.pool, CountryPrefix::Mt, "SW1A 1AA")
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn unknown_postcode_is_none() {
        let db = DbService::open_in_memory().await.unwrap();
        assert!(
            find_coordinate(&db.pool, CountryPrefix::Uk, "ZZ99 9ZZ")
                .await
                .unwrap()
                .is_none()
        );
    }
}
