//! Competition pages

mod handler;
pub mod request;

pub use handler::*;
pub use request::*;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::{
    middleware::auth::{admin_middleware, auth_middleware},
    state::AppState,
};

/// Competition routes. Every route requires a session; all but list and apply require admin.
pub fn routes(state: AppState) -> Router<AppState> {
    let admin = Router::new()
        .route("/delete/{id}", get(handler::delete_competition))
        .route("/edit/{id}", get(handler::edit_form))
        .route("/edit", post(handler::update_competition))
        .route("/add", get(handler::add_form).post(handler::create_competition))
        .route("/applied/{id}", get(handler::list_applied))
        .route("/bodovi/{id}", get(handler::score_form))
        .route("/bodovi", post(handler::set_score))
        .route_layer(middleware::from_fn(admin_middleware));

    Router::new()
        .route("/", get(handler::list_competitions))
        .route("/apply/{id}", get(handler::apply))
        .merge(admin)
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
