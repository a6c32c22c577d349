use sea_orm::{ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, QueryFilter, Set};

use crate::{
    dto::auth::{LoginRequest, LoginResponse, RegisterRequest, SessionUser},
    entity::users::{ActiveModel, Column, Entity as Users, Model as UserModel},
    error::{AppError, AppResult},
    response::Created,
    state::AppState,
};

pub async fn register_user(state: &AppState, payload: RegisterRequest) -> AppResult<Created> {
    let RegisterRequest {
        username,
        password,
        email,
        role,
    } = payload;

    let exist = Users::find()
        .filter(Column::Username.eq(username.as_str()))
        .one(&state.orm)
        .await?;

    if exist.is_some() {
        return Err(AppError::Conflict("Username is already taken".to_string()));
    }

    // A concurrent registration can still slip past the check above; the
    // unique index on `username` turns that into a 409 as well.
    let user = ActiveModel {
        user_id: NotSet,
        username: Set(username),
        password: Set(password),
        email: Set(email),
        role: Set(role.unwrap_or_default()),
    }
    .insert(&state.orm)
    .await?;

    tracing::info!(user_id = user.user_id, role = %user.role, "user registered");
    Ok(Created::new("User registered successfully", user.user_id))
}

pub async fn login_user(state: &AppState, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { username, password } = payload;
    let user = Users::find()
        .filter(Column::Username.eq(username.as_str()))
        .filter(Column::Password.eq(password.as_str()))
        .one(&state.orm)
        .await?;

    let user = match user {
        Some(u) => u,
        None => {
            tracing::info!(%username, "login rejected");
            return Err(AppError::Unauthorized);
        }
    };

    tracing::info!(user_id = user.user_id, role = %user.role, "user logged in");
    Ok(LoginResponse {
        message: "Login successful".to_string(),
        user: session_user(user),
    })
}

fn session_user(model: UserModel) -> SessionUser {
    SessionUser {
        user_id: model.user_id,
        username: model.username,
        email: model.email,
        role: model.role,
        capabilities: model.role.capabilities(),
    }
}
