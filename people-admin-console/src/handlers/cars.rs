use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use people_admin_api::{CarForm, CarView, PageParams, PageView};
use people_admin_db::models::car::CarModel;
use people_admin_db::repository::{CreateBatch, DeleteBatch, ListPage, UpdateBatch};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::page_view;
use crate::error::{ConsoleError, ConsoleResult};
use crate::state::AppState;

pub async fn list_cars(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ConsoleResult<Json<PageView<CarView>>> {
    let page = state.page_request(params.page, params.page_size)?;
    let session = state.repos.begin_session().await?;
    let cars = session.repos().car_repository.list_page(&(), page).await?;
    Ok(Json(page_view(cars, |c| CarView::from(&c))))
}

pub async fn get_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ConsoleResult<Json<CarView>> {
    let session = state.repos.begin_session().await?;
    let car = session
        .repos()
        .car_repository
        .load_one(id)
        .await?
        .ok_or_else(|| ConsoleError::not_found(format!("car {id} not found")))?;
    Ok(Json(CarView::from(&car)))
}

pub async fn create_car(
    State(state): State<AppState>,
    Json(form): Json<CarForm>,
) -> ConsoleResult<(StatusCode, Json<CarView>)> {
    form.validate()?;
    let car = CarModel::from_form(Uuid::new_v4(), &form)?;

    let session = state.repos.begin_session().await?;
    let car = session.repos().car_repository.create_batch(vec![car]).await?.remove(0);
    session.commit().await?;

    info!(car = %car.id, "car created");
    Ok((StatusCode::CREATED, Json(CarView::from(&car))))
}

pub async fn update_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<CarForm>,
) -> ConsoleResult<Json<CarView>> {
    form.validate()?;
    let car = CarModel::from_form(id, &form)?;

    let session = state.repos.begin_session().await?;
    let car = session
        .repos()
        .car_repository
        .update_batch(vec![car])
        .await?
        .pop()
        .ok_or_else(|| ConsoleError::not_found(format!("car {id} not found")))?;
    session.commit().await?;

    Ok(Json(CarView::from(&car)))
}

/// Owners keep existing; only their links to the car go away
pub async fn delete_car(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ConsoleResult<StatusCode> {
    let session = state.repos.begin_session().await?;
    let deleted = session.repos().car_repository.delete_batch(&[id]).await?;
    if deleted == 0 {
        return Err(ConsoleError::not_found(format!("car {id} not found")));
    }
    session.commit().await?;

    info!(car = %id, "car deleted");
    Ok(StatusCode::NO_CONTENT)
}
