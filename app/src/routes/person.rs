use axum::{Router, routing::get};

use infra::{AppState, http::handler::person::find_by_document};

pub fn create_person_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(find_by_document))
        .with_state(app_state)
}
