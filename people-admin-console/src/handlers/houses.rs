use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use people_admin_api::{HouseForm, HouseView, PageParams, PageView};
use people_admin_db::models::house::HouseModel;
use people_admin_db::repository::{CreateBatch, DeleteBatch, ListPage, UpdateBatch};
use people_admin_postgres::PeopleRepositories;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::passports::ensure_person_exists;
use super::{page_view, person_labels};
use crate::error::{ConsoleError, ConsoleResult};
use crate::state::AppState;

pub async fn list_houses(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ConsoleResult<Json<PageView<HouseView>>> {
    let page = state.page_request(params.page, params.page_size)?;

    let session = state.repos.begin_session().await?;
    let houses = session.repos().house_repository.list_page(&(), page).await?;
    let labels = person_labels(session.repos(), houses.items.iter().map(|h| h.person_id)).await?;
    Ok(Json(page_view(houses, |h| {
        let owner = labels.get(&h.person_id).map(String::as_str).unwrap_or_default();
        h.to_view(owner)
    })))
}

pub async fn get_house(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ConsoleResult<Json<HouseView>> {
    let session = state.repos.begin_session().await?;
    let house = session
        .repos()
        .house_repository
        .load_one(id)
        .await?
        .ok_or_else(|| ConsoleError::not_found(format!("house {id} not found")))?;
    Ok(Json(house_view(session.repos(), &house).await?))
}

pub async fn create_house(
    State(state): State<AppState>,
    Json(form): Json<HouseForm>,
) -> ConsoleResult<(StatusCode, Json<HouseView>)> {
    form.validate()?;
    let house = HouseModel::from_form(Uuid::new_v4(), &form)?;

    let session = state.repos.begin_session().await?;
    let repos = session.repos();
    ensure_person_exists(repos, form.person_id).await?;
    let house = repos.house_repository.create_batch(vec![house]).await?.remove(0);
    let view = house_view(repos, &house).await?;
    session.commit().await?;

    info!(house = %house.id, owner = %house.person_id, "house created");
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_house(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<HouseForm>,
) -> ConsoleResult<Json<HouseView>> {
    form.validate()?;
    let house = HouseModel::from_form(id, &form)?;

    let session = state.repos.begin_session().await?;
    let repos = session.repos();
    ensure_person_exists(repos, form.person_id).await?;
    let house = repos
        .house_repository
        .update_batch(vec![house])
        .await?
        .pop()
        .ok_or_else(|| ConsoleError::not_found(format!("house {id} not found")))?;
    let view = house_view(repos, &house).await?;
    session.commit().await?;

    Ok(Json(view))
}

pub async fn delete_house(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ConsoleResult<StatusCode> {
    let session = state.repos.begin_session().await?;
    let deleted = session.repos().house_repository.delete_batch(&[id]).await?;
    if deleted == 0 {
        return Err(ConsoleError::not_found(format!("house {id} not found")));
    }
    session.commit().await?;

    info!(house = %id, "house deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn house_view(repos: &PeopleRepositories, house: &HouseModel) -> ConsoleResult<HouseView> {
    let labels = person_labels(repos, [house.person_id]).await?;
    let owner = labels.get(&house.person_id).map(String::as_str).unwrap_or_default();
    Ok(house.to_view(owner))
}
