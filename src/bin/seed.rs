use art_gallery_api::{
    config::AppConfig,
    db::{DbPool, create_pool, run_migrations},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url, 2).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    ensure_user(&pool, "admin", "admin123", "admin@gallery.test", "Admin").await?;
    ensure_user(&pool, "manager", "manager123", "manager@gallery.test", "Manager").await?;
    ensure_user(&pool, "viewer", "viewer123", "viewer@gallery.test", "Viewer").await?;

    if table_is_empty(&pool, "artist").await? {
        seed_catalogue(&pool).await?;
    }
    if table_is_empty(&pool, "customer").await? {
        seed_customers(&pool).await?;
    }
    if table_is_empty(&pool, "exhibition").await? {
        seed_exhibitions_and_events(&pool).await?;
    }

    println!("Seed completed");
    Ok(())
}

async fn ensure_user(
    pool: &DbPool,
    username: &str,
    password: &str,
    email: &str,
    role: &str,
) -> anyhow::Result<i32> {
    let (user_id,): (i32,) = sqlx::query_as(
        r#"
        INSERT INTO users (username, password, email, role)
        VALUES ($1, $2, $3, $4)
        ON CONFLICT (username) DO UPDATE SET role = EXCLUDED.role
        RETURNING user_id
        "#,
    )
    .bind(username)
    .bind(password)
    .bind(email)
    .bind(role)
    .fetch_one(pool)
    .await?;

    println!("Ensured user {username} (role={role})");
    Ok(user_id)
}

// Table names come from the fixed list in `main`, never from input.
async fn table_is_empty(pool: &DbPool, table: &str) -> anyhow::Result<bool> {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;
    Ok(count == 0)
}

async fn seed_catalogue(pool: &DbPool) -> anyhow::Result<()> {
    let artists = vec![
        ("Maya Okafor", "Nigeria", "Large-format oil landscapes.", 1984, "maya@studio.test", "555-0101"),
        ("Lukas Brandt", "Germany", "Ink and charcoal studies of cities.", 1976, "lukas@studio.test", "555-0102"),
        ("Aiko Tanaka", "Japan", "Ceramics and mixed media.", 1991, "aiko@studio.test", "555-0103"),
    ];

    let mut ids = Vec::with_capacity(artists.len());
    for (name, country, bio, birth_year, email, phone) in artists {
        let (id,): (i32,) = sqlx::query_as(
            r#"
            INSERT INTO artist (name, country, biography, birth_year, email, phone)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING artist_id
            "#,
        )
        .bind(name)
        .bind(country)
        .bind(bio)
        .bind(birth_year)
        .bind(email)
        .bind(phone)
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }

    let artworks = vec![
        ("Harmattan Morning", ids[0], "Painting", 4200.0, 2019),
        ("River at Dusk", ids[0], "Painting", 3100.0, 2021),
        ("Station Nord", ids[1], "Drawing", 950.0, 2015),
        ("Tide Vessel", ids[2], "Sculpture", 1800.0, 2022),
    ];

    for (title, artist_id, category, price, year) in artworks {
        sqlx::query(
            r#"
            INSERT INTO artwork (title, artist_id, category, price, year_created, status)
            VALUES ($1, $2, $3, $4, $5, 'Available')
            "#,
        )
        .bind(title)
        .bind(artist_id)
        .bind(category)
        .bind(price)
        .bind(year)
        .execute(pool)
        .await?;
    }

    println!("Seeded artists and artworks");
    Ok(())
}

async fn seed_customers(pool: &DbPool) -> anyhow::Result<()> {
    let customers = vec![
        ("Priya Raman", "555-0201", "priya@mail.test", "12 Harbour Road"),
        ("Tom Whitaker", "555-0202", "tom@mail.test", "4 Mill Lane"),
    ];

    for (name, phone, email, address) in customers {
        sqlx::query("INSERT INTO customer (name, phone, email, address) VALUES ($1, $2, $3, $4)")
            .bind(name)
            .bind(phone)
            .bind(email)
            .bind(address)
            .execute(pool)
            .await?;
    }

    println!("Seeded customers");
    Ok(())
}

async fn seed_exhibitions_and_events(pool: &DbPool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO exhibition (title, location, start_date, end_date, description)
        VALUES
            ('Light on Water', 'Main Hall', '2025-04-01', '2025-05-15', 'Landscapes and seascapes.'),
            ('Lines of the City', 'East Wing', '2025-06-01', '2025-07-10', 'Urban drawing.')
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO events (event_name, event_date, location, description)
        VALUES
            ('Opening Night', '2025-04-01', 'Main Hall', 'Meet the artists.'),
            ('Ceramics Workshop', '2025-06-14', 'Studio B', 'Hands-on session with Aiko Tanaka.')
        "#,
    )
    .execute(pool)
    .await?;

    println!("Seeded exhibitions and events");
    Ok(())
}
