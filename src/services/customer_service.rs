use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, EntityTrait, QueryOrder, Set};

use crate::{
    dto::customers::{CreateCustomerRequest, UpdateCustomerRequest},
    entity::customers::{ActiveModel, Column, Entity as Customers, Model as CustomerModel},
    error::{AppError, AppResult},
    models::Customer,
    response::{ApiMessage, Created},
    state::AppState,
};

pub async fn list_customers(state: &AppState) -> AppResult<Vec<Customer>> {
    let items = Customers::find()
        .order_by_asc(Column::CustomerId)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(customer_from_entity)
        .collect();
    Ok(items)
}

pub async fn create_customer(
    state: &AppState,
    payload: CreateCustomerRequest,
) -> AppResult<Created> {
    let customer = ActiveModel {
        customer_id: NotSet,
        name: Set(payload.name),
        phone: Set(payload.phone),
        email: Set(payload.email),
        address: Set(payload.address),
    }
    .insert(&state.orm)
    .await?;

    Ok(Created::new("Customer added successfully", customer.customer_id))
}

pub async fn update_customer(
    state: &AppState,
    payload: UpdateCustomerRequest,
) -> AppResult<ApiMessage> {
    let existing = Customers::find_by_id(payload.customer_id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::not_found("Customer"))?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.phone = Set(payload.phone);
    active.email = Set(payload.email);
    active.address = Set(payload.address);
    active.update(&state.orm).await?;

    Ok(ApiMessage::new("Customer updated successfully"))
}

pub async fn delete_customer(state: &AppState, id: i32) -> AppResult<ApiMessage> {
    let result = Customers::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::not_found("Customer"));
    }

    Ok(ApiMessage::new("Customer deleted successfully"))
}

fn customer_from_entity(model: CustomerModel) -> Customer {
    Customer {
        customer_id: model.customer_id,
        name: model.name,
        phone: model.phone,
        email: model.email,
        address: model.address,
    }
}
