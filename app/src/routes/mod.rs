pub mod person;

use axum::{Router, routing::get};

use infra::{AppState, http::handler::health_check};

use crate::routes::person::create_person_routes;

/// ルーターを作成する。
///
/// # 引数
///
/// * `app_state`: アプリケーション状態
pub fn create_router(app_state: AppState) -> Router {
    axum::Router::new()
        .route("/health-check", get(health_check))
        .nest("/api/v1/user", create_person_routes(app_state.clone()))
        .with_state(app_state)
}
