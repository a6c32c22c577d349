mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use common::{database_app, send};

fn jane_doe_submission(title: &str) -> Value {
    json!({
        "artist_name": "Jane Doe",
        "title": title,
        "category": "Painting",
        "price": 500,
        "year_created": 2020,
        "description": "Evening light over the bay",
        "image_url": "images/sunset.jpg",
        "email": "jane@x.com",
        "phone": "555-0100"
    })
}

fn rows(body: &Value) -> &Vec<Value> {
    body.as_array().expect("array body")
}

#[tokio::test]
async fn register_and_login() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };
    let router = &app.router;

    let (status, body) = send(
        router,
        Method::POST,
        "/api/register",
        Some(json!({ "username": "curator", "password": "s3cret", "email": "c@g.test", "role": "Admin" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User registered successfully");
    assert!(body["id"].as_i64().is_some());

    let (status, body) = send(
        router,
        Method::POST,
        "/api/register",
        Some(json!({ "username": "curator", "password": "other" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body["error"].is_string());

    let (status, body) = send(
        router,
        Method::POST,
        "/api/login",
        Some(json!({ "username": "curator", "password": "s3cret" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Login successful");
    assert_eq!(body["user"]["Username"], "curator");
    assert_eq!(body["user"]["Role"], "Admin");
    assert_eq!(body["user"]["Capabilities"]["canReviewSubmissions"], true);
    assert!(body["user"].get("Password").is_none());

    let (status, body) = send(
        router,
        Method::POST,
        "/api/login",
        Some(json!({ "username": "curator", "password": "wrong" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "Invalid username or password");

    // Role defaults to Viewer, which gets no mutating controls.
    send(
        router,
        Method::POST,
        "/api/register",
        Some(json!({ "username": "visitor", "password": "pw" })),
    )
    .await;
    let (_, body) = send(
        router,
        Method::POST,
        "/api/login",
        Some(json!({ "username": "visitor", "password": "pw" })),
    )
    .await;
    assert_eq!(body["user"]["Role"], "Viewer");
    assert_eq!(body["user"]["Capabilities"]["canEdit"], false);

    Ok(())
}

#[tokio::test]
async fn stats_on_empty_gallery_are_zero() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };

    let (status, stats) = send(&app.router, Method::GET, "/api/stats", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["totalArtists"], 0);
    assert_eq!(stats["totalArtworks"], 0);
    assert_eq!(stats["totalSales"], 0);
    assert_eq!(stats["totalRevenue"].as_f64(), Some(0.0));
    assert_eq!(stats["availableArtworks"], 0);
    Ok(())
}

#[tokio::test]
async fn approving_submission_publishes_artwork() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };
    let router = &app.router;

    let (status, body) = send(
        router,
        Method::POST,
        "/api/submissions/add",
        Some(jane_doe_submission("Sunset")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().expect("submission id");

    let (status, body) = send(
        router,
        Method::POST,
        &format!("/api/submissions/approve/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["artist_created"], true);

    let (_, artworks) = send(router, Method::GET, "/api/artworks", None).await;
    let sunset = rows(&artworks)
        .iter()
        .find(|a| a["Title"] == "Sunset")
        .expect("published artwork");
    assert_eq!(sunset["Artist_Name"], "Jane Doe");
    assert_eq!(sunset["Status"], "Available");
    assert_eq!(sunset["Price"].as_f64(), Some(500.0));

    let (_, artists) = send(router, Method::GET, "/api/artists", None).await;
    assert_eq!(rows(&artists).len(), 1);
    assert_eq!(rows(&artists)[0]["Biography"], "Submitted artist");
    assert_eq!(rows(&artists)[0]["Email"], "jane@x.com");

    let (_, submissions) = send(router, Method::GET, "/api/submissions", None).await;
    assert_eq!(rows(&submissions)[0]["Status"], "Approved");
    assert!(rows(&submissions)[0]["Review_Date"].is_string());

    // Terminal: neither a second approval nor a rejection is accepted.
    let (status, _) = send(
        router,
        Method::POST,
        &format!("/api/submissions/approve/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (status, _) = send(
        router,
        Method::POST,
        &format!("/api/submissions/reject/{id}"),
        Some(json!({ "notes": "changed my mind" })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // A second submission under the same name reuses the artist.
    let (_, body) = send(
        router,
        Method::POST,
        "/api/submissions/add",
        Some(jane_doe_submission("Moonrise")),
    )
    .await;
    let second = body["id"].as_i64().unwrap();
    let (status, body) = send(
        router,
        Method::POST,
        &format!("/api/submissions/approve/{second}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["artist_created"], false);

    let (_, artists) = send(router, Method::GET, "/api/artists", None).await;
    assert_eq!(rows(&artists).len(), 1);
    let (_, artworks) = send(router, Method::GET, "/api/artworks", None).await;
    assert_eq!(rows(&artworks).len(), 2);

    Ok(())
}

#[tokio::test]
async fn rejected_submission_cannot_be_approved() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };
    let router = &app.router;

    let (_, body) = send(
        router,
        Method::POST,
        "/api/submissions/add",
        Some(jane_doe_submission("Sketch")),
    )
    .await;
    let id = body["id"].as_i64().unwrap();

    let (status, body) = send(
        router,
        Method::POST,
        &format!("/api/submissions/reject/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Submission rejected");

    let (_, submissions) = send(router, Method::GET, "/api/submissions", None).await;
    assert_eq!(rows(&submissions)[0]["Status"], "Rejected");
    assert_eq!(rows(&submissions)[0]["Review_Notes"], "Rejected by admin");

    let (status, _) = send(
        router,
        Method::POST,
        &format!("/api/submissions/approve/{id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, artworks) = send(router, Method::GET, "/api/artworks", None).await;
    assert!(rows(&artworks).is_empty());
    let (_, artists) = send(router, Method::GET, "/api/artists", None).await;
    assert!(rows(&artists).is_empty());

    let (status, _) = send(router, Method::POST, "/api/submissions/approve/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(router, Method::POST, "/api/submissions/reject/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    Ok(())
}

#[tokio::test]
async fn recording_sale_bills_customer_and_hides_artwork() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };
    let router = &app.router;

    let (_, body) = send(
        router,
        Method::POST,
        "/api/submissions/add",
        Some(jane_doe_submission("Sunset")),
    )
    .await;
    let submission = body["id"].as_i64().unwrap();
    let (_, approval) = send(
        router,
        Method::POST,
        &format!("/api/submissions/approve/{submission}"),
        None,
    )
    .await;
    let artwork_id = approval["artwork_id"].as_i64().unwrap();

    let (status, body) = send(
        router,
        Method::POST,
        "/api/customers/add",
        Some(json!({ "name": "Priya Raman", "phone": "555-0201", "email": "priya@mail.test", "address": "12 Harbour Road" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let customer_id = body["id"].as_i64().unwrap();

    let (_, available) = send(router, Method::GET, "/api/artworks/available", None).await;
    assert_eq!(rows(&available).len(), 1);

    let sale = json!({
        "artwork_id": artwork_id,
        "customer_id": customer_id,
        "sale_date": "2025-03-14",
        "sale_amount": 450.0
    });
    let (status, body) = send(router, Method::POST, "/api/sales/record", Some(sale.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "Sale recorded successfully");

    let (_, available) = send(router, Method::GET, "/api/artworks/available", None).await;
    assert!(rows(&available).is_empty());

    let (status, _) = send(router, Method::POST, "/api/sales/record", Some(sale)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, sales) = send(router, Method::GET, "/api/sales", None).await;
    assert_eq!(rows(&sales).len(), 1);
    assert_eq!(rows(&sales)[0]["Artwork_Title"], "Sunset");
    assert_eq!(rows(&sales)[0]["Customer_Name"], "Priya Raman");

    let (_, bills) = send(router, Method::GET, "/api/billing", None).await;
    assert_eq!(rows(&bills).len(), 1);
    assert_eq!(rows(&bills)[0]["Status"], "Sold");
    let bill_id = rows(&bills)[0]["Bill_ID"].as_i64().unwrap();

    let (status, bill) = send(router, Method::GET, &format!("/api/billing/{bill_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bill["Artist_Name"], "Jane Doe");
    assert_eq!(bill["Customer_Address"], "12 Harbour Road");
    assert_eq!(bill["Sale_Date"], "2025-03-14");

    // The sale keeps its buyer.
    let (status, _) = send(
        router,
        Method::DELETE,
        &format!("/api/customers/delete/{customer_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (_, customers) = send(router, Method::GET, "/api/customers", None).await;
    assert_eq!(rows(&customers).len(), 1);

    let (status, body) = send(router, Method::GET, "/api/billing/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Bill not found");

    let (_, stats) = send(router, Method::GET, "/api/stats", None).await;
    assert_eq!(stats["totalSales"], 1);
    assert_eq!(stats["totalRevenue"].as_f64(), Some(450.0));
    assert_eq!(stats["availableArtworks"], 0);
    assert_eq!(stats["totalArtworks"], 1);

    Ok(())
}

#[tokio::test]
async fn artist_and_customer_maintenance() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };
    let router = &app.router;

    let (status, body) = send(
        router,
        Method::POST,
        "/api/artists/add",
        Some(json!({ "name": "Lukas Brandt", "country": "Germany", "birth_year": 1976 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let loner = body["id"].as_i64().unwrap();

    let (status, _) = send(
        router,
        Method::PUT,
        "/api/artists/update",
        Some(json!({ "artist_id": loner, "name": "Lukas Brandt", "country": "Austria" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, artists) = send(router, Method::GET, "/api/artists", None).await;
    assert_eq!(rows(&artists)[0]["Country"], "Austria");
    assert_eq!(rows(&artists)[0]["Birth_Year"], Value::Null);

    let (status, _) = send(
        router,
        Method::PUT,
        "/api/artists/update",
        Some(json!({ "artist_id": 9999, "name": "Nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // An artist with artworks cannot be deleted.
    let (_, body) = send(
        router,
        Method::POST,
        "/api/submissions/add",
        Some(jane_doe_submission("Sunset")),
    )
    .await;
    let submission = body["id"].as_i64().unwrap();
    let (_, approval) = send(
        router,
        Method::POST,
        &format!("/api/submissions/approve/{submission}"),
        None,
    )
    .await;
    let jane = approval["artist_id"].as_i64().unwrap();

    let (status, _) = send(
        router,
        Method::DELETE,
        &format!("/api/artists/delete/{jane}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (_, artists) = send(router, Method::GET, "/api/artists", None).await;
    assert_eq!(rows(&artists).len(), 2);

    let (status, _) = send(
        router,
        Method::DELETE,
        &format!("/api/artists/delete/{loner}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(
        router,
        Method::DELETE,
        &format!("/api/artists/delete/{loner}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(
        router,
        Method::POST,
        "/api/customers/add",
        Some(json!({ "name": "Tom Whitaker" })),
    )
    .await;
    let customer = body["id"].as_i64().unwrap();
    let (status, _) = send(
        router,
        Method::PUT,
        "/api/customers/update",
        Some(json!({ "customer_id": customer, "name": "Tom Whitaker", "email": "tom@mail.test" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, customers) = send(router, Method::GET, "/api/customers", None).await;
    assert_eq!(rows(&customers)[0]["Email"], "tom@mail.test");

    let (status, _) = send(
        router,
        Method::DELETE,
        &format!("/api/customers/delete/{customer}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_approvals_share_one_new_artist() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };
    const APPROVALS: usize = 8;

    let mut ids = Vec::with_capacity(APPROVALS);
    for n in 0..APPROVALS {
        let mut submission = jane_doe_submission(&format!("Study no. {n}"));
        submission["artist_name"] = json!("Ines Varela");
        let (status, body) = send(
            &app.router,
            Method::POST,
            "/api/submissions/add",
            Some(submission),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        ids.push(body["id"].as_i64().unwrap());
    }

    let handles: Vec<_> = ids
        .iter()
        .map(|id| {
            let router = app.router.clone();
            let uri = format!("/api/submissions/approve/{id}");
            tokio::spawn(async move { send(&router, Method::POST, &uri, None).await })
        })
        .collect();

    let mut artists_created = 0;
    for handle in handles {
        let (status, body) = handle.await?;
        assert_eq!(status, StatusCode::OK, "{body}");
        if body["artist_created"] == true {
            artists_created += 1;
        }
    }
    assert_eq!(artists_created, 1);

    let (_, artists) = send(&app.router, Method::GET, "/api/artists", None).await;
    assert_eq!(rows(&artists).len(), 1);
    assert_eq!(rows(&artists)[0]["Name"], "Ines Varela");

    let (_, artworks) = send(&app.router, Method::GET, "/api/artworks", None).await;
    assert_eq!(rows(&artworks).len(), APPROVALS);
    assert!(
        rows(&artworks)
            .iter()
            .all(|a| a["Artist_ID"] == rows(&artists)[0]["Artist_ID"])
    );

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_approvals_of_one_submission_publish_once() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };

    let (_, body) = send(
        &app.router,
        Method::POST,
        "/api/submissions/add",
        Some(jane_doe_submission("Twin Peaks")),
    )
    .await;
    let uri = format!("/api/submissions/approve/{}", body["id"]);

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let router = app.router.clone();
            let uri = uri.clone();
            tokio::spawn(async move { send(&router, Method::POST, &uri, None).await })
        })
        .collect();

    let mut statuses = Vec::new();
    for handle in handles {
        statuses.push(handle.await?.0.as_u16());
    }
    statuses.sort_unstable();
    assert_eq!(statuses, vec![200, 409]);

    let (_, artworks) = send(&app.router, Method::GET, "/api/artworks", None).await;
    assert_eq!(rows(&artworks).len(), 1);
    let (_, artists) = send(&app.router, Method::GET, "/api/artists", None).await;
    assert_eq!(rows(&artists).len(), 1);

    Ok(())
}

#[tokio::test]
async fn exhibitions_and_events_are_listed() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };

    sqlx::query(
        "INSERT INTO exhibition (title, location, start_date, end_date, description) \
         VALUES ('Light on Water', 'Main Hall', '2025-04-01', '2025-05-15', 'Seascapes')",
    )
    .execute(&app.state.pool)
    .await?;
    sqlx::query(
        "INSERT INTO events (event_name, event_date, location) \
         VALUES ('Opening Night', '2025-04-01', 'Main Hall')",
    )
    .execute(&app.state.pool)
    .await?;

    let (status, exhibitions) = send(&app.router, Method::GET, "/api/exhibitions", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&exhibitions).len(), 1);
    assert_eq!(rows(&exhibitions)[0]["Title"], "Light on Water");
    assert_eq!(rows(&exhibitions)[0]["End_Date"], "2025-05-15");

    let (status, events) = send(&app.router, Method::GET, "/api/events", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&events)[0]["Event_Name"], "Opening Night");
    assert_eq!(rows(&events)[0]["Description"], Value::Null);

    Ok(())
}

#[tokio::test]
async fn invalid_values_and_unknown_artworks_are_client_errors() -> anyhow::Result<()> {
    let Some(app) = database_app().await? else {
        return Ok(());
    };
    let router = &app.router;

    let mut submission = jane_doe_submission("Too Long");
    submission["artist_name"] = json!("x".repeat(200));
    let (status, body) = send(router, Method::POST, "/api/submissions/add", Some(submission)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid value"));

    let (_, body) = send(
        router,
        Method::POST,
        "/api/customers/add",
        Some(json!({ "name": "Priya Raman" })),
    )
    .await;
    let customer_id = body["id"].as_i64().unwrap();

    let (status, body) = send(
        router,
        Method::POST,
        "/api/sales/record",
        Some(json!({ "artwork_id": 999, "customer_id": customer_id, "sale_amount": 10.0 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Artwork 999 does not exist");

    let (_, sales) = send(router, Method::GET, "/api/sales", None).await;
    assert!(rows(&sales).is_empty());

    Ok(())
}
