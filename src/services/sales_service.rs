use crate::{
    dto::sales::RecordSaleRequest,
    error::{AppError, AppResult},
    models::{Bill, BillDetail, Sale},
    response::ApiMessage,
    state::AppState,
};

pub async fn list_sales(state: &AppState) -> AppResult<Vec<Sale>> {
    let items = sqlx::query_as::<_, Sale>(
        r#"
        SELECT s.sale_id, s.artwork_id, s.customer_id, s.sale_date, s.sale_amount,
               a.title AS artwork_title, c.name AS customer_name
        FROM sales s
        LEFT JOIN artwork a ON s.artwork_id = a.artwork_id
        LEFT JOIN customer c ON s.customer_id = c.customer_id
        ORDER BY s.sale_date DESC, s.sale_id DESC
        "#,
    )
    .fetch_all(&state.pool)
    .await?;
    Ok(items)
}

/// Runs the `record_sale` procedure, which inserts the sale, marks the artwork
/// sold and issues the bill in one statement. Selling an artwork that is not
/// available is refused by the procedure and surfaces as a 409; an unknown
/// artwork is a 404.
pub async fn record_sale(state: &AppState, payload: RecordSaleRequest) -> AppResult<ApiMessage> {
    sqlx::query("CALL record_sale($1, $2, $3, $4)")
        .bind(payload.artwork_id)
        .bind(payload.customer_id)
        .bind(payload.sale_date)
        .bind(payload.sale_amount)
        .execute(&state.pool)
        .await?;

    tracing::info!(
        artwork_id = payload.artwork_id,
        customer_id = payload.customer_id,
        amount = payload.sale_amount,
        "sale recorded"
    );
    Ok(ApiMessage::new("Sale recorded successfully"))
}

/// Bills for sold artworks, newest first.
pub async fn list_bills(state: &AppState) -> AppResult<Vec<Bill>> {
    let items = sqlx::query_as::<_, Bill>(
        r#"
        SELECT b.bill_id, b.sale_id, b.customer_id, b.bill_date, b.amount,
               c.name AS customer_name, c.email AS customer_email,
               a.title AS artwork_title, a.status
        FROM billing b
        INNER JOIN customer c ON b.customer_id = c.customer_id
        INNER JOIN sales s ON b.sale_id = s.sale_id
        INNER JOIN artwork a ON s.artwork_id = a.artwork_id
        WHERE a.status = $1
        ORDER BY b.bill_date DESC, b.bill_id DESC
        "#,
    )
    .bind("Sold")
    .fetch_all(&state.pool)
    .await?;

    tracing::debug!(count = items.len(), "billing records loaded");
    Ok(items)
}

pub async fn get_bill(state: &AppState, id: i32) -> AppResult<BillDetail> {
    let bill = sqlx::query_as::<_, BillDetail>(
        r#"
        SELECT b.bill_id, b.sale_id, b.customer_id, b.bill_date, b.amount,
               c.name AS customer_name, c.email AS customer_email,
               c.phone AS customer_phone, c.address AS customer_address,
               a.title AS artwork_title, a.price AS artwork_price,
               ar.name AS artist_name,
               s.sale_date
        FROM billing b
        LEFT JOIN customer c ON b.customer_id = c.customer_id
        LEFT JOIN sales s ON b.sale_id = s.sale_id
        LEFT JOIN artwork a ON s.artwork_id = a.artwork_id
        LEFT JOIN artist ar ON a.artist_id = ar.artist_id
        WHERE b.bill_id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&state.pool)
    .await?;

    bill.ok_or_else(|| AppError::not_found("Bill"))
}
