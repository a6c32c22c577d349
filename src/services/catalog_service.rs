use crate::{
    error::AppResult,
    models::{Artwork, Event, Exhibition, GalleryStats},
    state::AppState,
};

const AVAILABLE: &str = "Available";

/// Lists artworks with their artist's name. `status` narrows the list when given.
pub async fn list_artworks(state: &AppState, status: Option<&str>) -> AppResult<Vec<Artwork>> {
    let items = sqlx::query_as::<_, Artwork>(
        r#"
        SELECT a.artwork_id, a.title, a.artist_id, a.category, a.price, a.year_created,
               a.status, a.image_url, a.description, ar.name AS artist_name
        FROM artwork a
        LEFT JOIN artist ar ON a.artist_id = ar.artist_id
        WHERE ($1::TEXT IS NULL OR a.status = $1)
        ORDER BY a.artwork_id
        "#,
    )
    .bind(status)
    .fetch_all(&state.pool)
    .await?;
    Ok(items)
}

pub async fn list_available_artworks(state: &AppState) -> AppResult<Vec<Artwork>> {
    list_artworks(state, Some(AVAILABLE)).await
}

pub async fn list_exhibitions(state: &AppState) -> AppResult<Vec<Exhibition>> {
    let items = sqlx::query_as::<_, Exhibition>(
        "SELECT exhibition_id, title, location, start_date, end_date, description \
         FROM exhibition ORDER BY exhibition_id",
    )
    .fetch_all(&state.pool)
    .await?;
    Ok(items)
}

pub async fn list_events(state: &AppState) -> AppResult<Vec<Event>> {
    let items = sqlx::query_as::<_, Event>(
        "SELECT event_id, event_name, event_date, location, description \
         FROM events ORDER BY event_id",
    )
    .fetch_all(&state.pool)
    .await?;
    Ok(items)
}

/// Dashboard counters, read in one round-trip so they agree with each other.
pub async fn gallery_stats(state: &AppState) -> AppResult<GalleryStats> {
    let stats = sqlx::query_as::<_, GalleryStats>(
        r#"
        SELECT
            (SELECT COUNT(*) FROM artist) AS total_artists,
            (SELECT COUNT(*) FROM artwork) AS total_artworks,
            (SELECT COUNT(*) FROM sales) AS total_sales,
            (SELECT COALESCE(SUM(sale_amount), 0)::DOUBLE PRECISION FROM sales) AS total_revenue,
            (SELECT COUNT(*) FROM artwork WHERE status = $1) AS available_artworks
        "#,
    )
    .bind(AVAILABLE)
    .fetch_one(&state.pool)
    .await?;
    Ok(stats)
}
