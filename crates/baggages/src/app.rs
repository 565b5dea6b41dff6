use axum::{
    http::{header, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{
        baggages::{check_baggage, create_baggage, delete_baggage, uncheck_baggage},
        health::livez,
        lists::{create_list, get_list, list_lists},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/lists", get(list_lists).post(create_list))
        .route("/lists/{id}", get(get_list))
        .route("/lists/{id}/baggages", post(create_baggage))
        .route("/lists/{id}/baggages/{bid}", delete(delete_baggage))
        .route("/lists/{id}/baggages/{bid}/check", post(check_baggage))
        .route("/lists/{id}/baggages/{bid}/uncheck", post(uncheck_baggage))
        .route("/livez", get(livez))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
