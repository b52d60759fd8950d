use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use people_admin_api::{
    ActionDescriptor, BulkActionResult, BulkSelection, PageParams, PageView, PassportAction,
    PassportForm, PassportListRow,
};
use people_admin_db::models::passport::PassportModel;
use people_admin_db::repository::{CreateBatch, DeleteBatch, ExistByIds, ListPage, UpdateBatch};
use people_admin_db::rules::ShiftDirection;
use people_admin_postgres::PeopleRepositories;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use super::{page_view, person_labels};
use crate::error::{ConsoleError, ConsoleResult};
use crate::state::AppState;

pub async fn list_passports(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> ConsoleResult<Json<PageView<PassportListRow>>> {
    let page = state.page_request(params.page, params.page_size)?;

    let session = state.repos.begin_session().await?;
    let passports = session.repos().passport_repository.list_page(&(), page).await?;
    let labels = person_labels(session.repos(), passports.items.iter().map(|p| p.person_id)).await?;
    Ok(Json(page_view(passports, |p| {
        let owner = labels.get(&p.person_id).map(String::as_str).unwrap_or_default();
        p.to_list_row(owner)
    })))
}

pub async fn get_passport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ConsoleResult<Json<PassportListRow>> {
    let session = state.repos.begin_session().await?;
    let passport = session
        .repos()
        .passport_repository
        .load_one(id)
        .await?
        .ok_or_else(|| ConsoleError::not_found(format!("passport {id} not found")))?;
    let row = list_rows(session.repos(), vec![passport]).await?.remove(0);
    Ok(Json(row))
}

/// The stored expiry is the submitted one extended by the lifecycle hook
pub async fn create_passport(
    State(state): State<AppState>,
    Json(form): Json<PassportForm>,
) -> ConsoleResult<(StatusCode, Json<PassportListRow>)> {
    form.validate()?;
    let today = Utc::now().date_naive();
    let passport = PassportModel::from_form(Uuid::new_v4(), &form, today, today)?;

    let session = state.repos.begin_session().await?;
    let repos = session.repos();
    ensure_person_exists(repos, form.person_id).await?;
    ensure_no_other_passport(repos, form.person_id, None).await?;
    let passport = repos.passport_repository.create_batch(vec![passport]).await?.remove(0);
    let row = list_rows(repos, vec![passport]).await?.remove(0);
    session.commit().await?;

    info!(passport = %row.id, expire_date = %row.expire_date, "passport created");
    Ok((StatusCode::CREATED, Json(row)))
}

pub async fn update_passport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<PassportForm>,
) -> ConsoleResult<Json<PassportListRow>> {
    form.validate()?;

    let session = state.repos.begin_session().await?;
    let repos = session.repos();
    let existing = repos
        .passport_repository
        .load_one(id)
        .await?
        .ok_or_else(|| ConsoleError::not_found(format!("passport {id} not found")))?;
    ensure_person_exists(repos, form.person_id).await?;
    ensure_no_other_passport(repos, form.person_id, Some(id)).await?;

    let passport = PassportModel::from_form(id, &form, existing.issue_date, existing.expire_date)?;
    let passport = repos
        .passport_repository
        .update_batch(vec![passport])
        .await?
        .pop()
        .ok_or_else(|| ConsoleError::not_found(format!("passport {id} not found")))?;
    let row = list_rows(repos, vec![passport]).await?.remove(0);
    session.commit().await?;

    info!(passport = %id, "passport updated");
    Ok(Json(row))
}

pub async fn delete_passport(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ConsoleResult<StatusCode> {
    let session = state.repos.begin_session().await?;
    let deleted = session.repos().passport_repository.delete_batch(&[id]).await?;
    if deleted == 0 {
        return Err(ConsoleError::not_found(format!("passport {id} not found")));
    }
    session.commit().await?;

    info!(passport = %id, "passport deleted");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_actions() -> Json<Vec<ActionDescriptor>> {
    Json(PassportAction::ALL.into_iter().map(ActionDescriptor::from).collect())
}

/// Run a bulk action over the selected passports
pub async fn run_action(
    State(state): State<AppState>,
    Path(action): Path<String>,
    Json(selection): Json<BulkSelection>,
) -> ConsoleResult<Json<BulkActionResult>> {
    let action: PassportAction = action
        .parse()
        .map_err(|_| ConsoleError::not_found(format!("unknown passport action: {action}")))?;
    selection.validate()?;

    let direction = match action {
        PassportAction::IncreaseExpiryDate => ShiftDirection::Increase,
        PassportAction::DecreaseExpiryDate => ShiftDirection::Decrease,
    };

    let session = state.repos.begin_session().await?;
    let repos = session.repos();
    let shifted = repos
        .passport_repository
        .shift_expiry(&selection.ids, direction, state.shift_mode)
        .await?;
    let passports = list_rows(repos, shifted).await?;
    session.commit().await?;

    info!(action = action.name(), updated = passports.len(), "passport bulk action applied");
    Ok(Json(BulkActionResult {
        action,
        updated: passports.len(),
        passports,
    }))
}

async fn list_rows(
    repos: &PeopleRepositories,
    passports: Vec<PassportModel>,
) -> ConsoleResult<Vec<PassportListRow>> {
    let labels = person_labels(repos, passports.iter().map(|p| p.person_id)).await?;
    Ok(passports
        .iter()
        .map(|p| {
            let owner = labels.get(&p.person_id).map(String::as_str).unwrap_or_default();
            p.to_list_row(owner)
        })
        .collect())
}

/// A person holds at most one passport; `passport_id` is the one being saved, if any.
async fn ensure_no_other_passport(
    repos: &PeopleRepositories,
    person_id: Uuid,
    passport_id: Option<Uuid>,
) -> ConsoleResult<()> {
    match repos.passport_repository.find_by_person_id(person_id).await? {
        Some(held) if Some(held.id) != passport_id => Err(ConsoleError::conflict(format!(
            "person {person_id} already has passport {}",
            held.passport_id
        ))),
        _ => Ok(()),
    }
}

pub(crate) async fn ensure_person_exists(repos: &PeopleRepositories, person_id: Uuid) -> ConsoleResult<()> {
    let exists = repos
        .person_repository
        .exist_by_ids(&[person_id])
        .await?
        .first()
        .is_some_and(|(_, exists)| *exists);
    if !exists {
        return Err(ConsoleError::validation(format!("person {person_id} does not exist")));
    }
    Ok(())
}
