use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use people_admin_api::{
    CarView, Gender, GenderEdit, InlineEditResult, PageParams, PageView, PersonDetail, PersonForm,
    PersonListQuery, PersonListRow,
};
use people_admin_db::models::person::{PersonFilter, PersonModel};
use people_admin_db::repository::{CreateBatch, DeleteBatch, ListPage, UpdateBatch};
use people_admin_postgres::PeopleRepositories;
use tracing::{debug, info};
use uuid::Uuid;
use validator::Validate;

use super::page_view;
use crate::error::{ConsoleError, ConsoleResult};
use crate::state::AppState;

pub async fn list_persons(
    State(state): State<AppState>,
    Query(query): Query<PersonListQuery>,
) -> ConsoleResult<Json<PageView<PersonListRow>>> {
    let page = state.page_request(query.page, query.page_size)?;

    let mut filter = PersonFilter {
        age: query.age,
        first_name_contains: query.q.filter(|q| !q.trim().is_empty()),
        ..PersonFilter::default()
    };
    if let Some(code) = query.gender.as_deref() {
        match PersonFilter::by_gender_code(code) {
            Some(by_gender) => filter.gender = by_gender.gender,
            None => {
                debug!(code, "unrecognized gender filter, empty list");
                return Ok(Json(PageView::empty(page.limit)));
            }
        }
    }

    let session = state.repos.begin_session().await?;
    let persons = session.repos().person_repository.list_page(&filter, page).await?;
    Ok(Json(page_view(persons, |p| PersonListRow::from(&p))))
}

/// Named gender filters: `male`, `female` and `other`
pub async fn filter_persons(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(params): Query<PageParams>,
) -> ConsoleResult<Json<PageView<PersonListRow>>> {
    let gender = match name.as_str() {
        "male" => Gender::Male,
        "female" => Gender::Female,
        "other" => Gender::Other,
        _ => return Err(ConsoleError::not_found(format!("unknown person filter: {name}"))),
    };
    let page = state.page_request(params.page, params.page_size)?;

    let session = state.repos.begin_session().await?;
    let person_repo = &session.repos().person_repository;
    let persons = match gender {
        Gender::Male => person_repo.male(page).await?,
        Gender::Female => person_repo.female(page).await?,
        Gender::Other => person_repo.other(page).await?,
    };
    Ok(Json(page_view(persons, |p| PersonListRow::from(&p))))
}

pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ConsoleResult<Json<PersonDetail>> {
    let session = state.repos.begin_session().await?;
    let detail = load_detail(session.repos(), id).await?;
    Ok(Json(detail))
}

pub async fn create_person(
    State(state): State<AppState>,
    Json(form): Json<PersonForm>,
) -> ConsoleResult<(StatusCode, Json<PersonDetail>)> {
    form.validate()?;
    let person = PersonModel::from_form(Uuid::new_v4(), &form)?;

    let session = state.repos.begin_session().await?;
    let repos = session.repos();
    let person = repos.person_repository.create_batch(vec![person]).await?.remove(0);
    repos.person_repository.set_cars(person.id, &form.cars).await?;
    let detail = load_detail(repos, person.id).await?;
    session.commit().await?;

    info!(person = %person.id, "person created");
    Ok((StatusCode::CREATED, Json(detail)))
}

pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<PersonForm>,
) -> ConsoleResult<Json<PersonDetail>> {
    form.validate()?;
    let person = PersonModel::from_form(id, &form)?;

    let session = state.repos.begin_session().await?;
    let repos = session.repos();
    let updated = repos.person_repository.update_batch(vec![person]).await?;
    if updated.is_empty() {
        return Err(ConsoleError::not_found(format!("person {id} not found")));
    }
    repos.person_repository.set_cars(id, &form.cars).await?;
    let detail = load_detail(repos, id).await?;
    session.commit().await?;

    info!(person = %id, "person updated");
    Ok(Json(detail))
}

/// Inline gender edits submitted from the person list
pub async fn edit_genders(
    State(state): State<AppState>,
    Json(edits): Json<Vec<GenderEdit>>,
) -> ConsoleResult<Json<InlineEditResult>> {
    if edits.is_empty() {
        return Ok(Json(InlineEditResult { updated: 0 }));
    }
    let edits: Vec<(Uuid, _)> = edits.iter().map(|e| (e.id, e.gender)).collect();

    let session = state.repos.begin_session().await?;
    let updated = session.repos().person_repository.update_genders(&edits).await?;
    session.commit().await?;

    info!(updated, "person genders edited");
    Ok(Json(InlineEditResult { updated }))
}

pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ConsoleResult<StatusCode> {
    let session = state.repos.begin_session().await?;
    let deleted = session.repos().person_repository.delete_batch(&[id]).await?;
    if deleted == 0 {
        return Err(ConsoleError::not_found(format!("person {id} not found")));
    }
    session.commit().await?;

    info!(person = %id, "person deleted with passport, houses and car links");
    Ok(StatusCode::NO_CONTENT)
}

async fn load_detail(repos: &PeopleRepositories, id: Uuid) -> ConsoleResult<PersonDetail> {
    let person_repo = &repos.person_repository;
    let person = person_repo
        .load_one(id)
        .await?
        .ok_or_else(|| ConsoleError::not_found(format!("person {id} not found")))?;

    let cars = person_repo.find_car_ids(id).await?;
    let has_passport = person_repo.has_passport(id).await?;
    let owned_cars = person_repo.owned_cars(id).await?;
    let owned_houses = repos.house_repository.find_by_person_id(id).await?;
    let owner = person.to_string();

    Ok(PersonDetail {
        id: person.id,
        first_name: person.first_name.to_string(),
        last_name: person.last_name.to_string(),
        age: person.age,
        gender: person.gender,
        cars,
        has_passport,
        owned_cars: owned_cars.iter().map(CarView::from).collect(),
        owned_houses: owned_houses.iter().map(|h| h.to_view(&owner)).collect(),
    })
}
