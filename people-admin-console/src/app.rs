use axum::{
    http::Method,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    handlers::{cars, health::healthcheck, houses, passports, persons},
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route(
            "/admin/persons",
            get(persons::list_persons)
                .post(persons::create_person)
                .patch(persons::edit_genders),
        )
        .route("/admin/persons/filters/{name}", get(persons::filter_persons))
        .route(
            "/admin/persons/{id}",
            get(persons::get_person)
                .put(persons::update_person)
                .delete(persons::delete_person),
        )
        .route(
            "/admin/passports",
            get(passports::list_passports).post(passports::create_passport),
        )
        .route("/admin/passports/actions", get(passports::list_actions))
        .route("/admin/passports/actions/{action}", post(passports::run_action))
        .route(
            "/admin/passports/{id}",
            get(passports::get_passport)
                .put(passports::update_passport)
                .delete(passports::delete_passport),
        )
        .route("/admin/cars", get(cars::list_cars).post(cars::create_car))
        .route(
            "/admin/cars/{id}",
            get(cars::get_car).put(cars::update_car).delete(cars::delete_car),
        )
        .route("/admin/houses", get(houses::list_houses).post(houses::create_house))
        .route(
            "/admin/houses/{id}",
            get(houses::get_house)
                .put(houses::update_house)
                .delete(houses::delete_house),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
