//! Competition handler implementations

use axum::{
    extract::{rejection::FormRejection, Path, State},
    Form,
};
use tracing::debug;

use crate::{
    constants::COMPETITIONS_PATH,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::CompetitionService,
    state::AppState,
    views::{Page, Template, View},
};

use super::request::{AddCompetitionForm, EditCompetitionForm, IdParams, ScoreForm};

/// List all competitions
pub async fn list_competitions(State(state): State<AppState>) -> AppResult<Page> {
    let items = CompetitionService::list_competitions(state.store()).await?;
    Ok(View::competitions(items).into())
}

/// Delete a competition
pub async fn delete_competition(
    State(state): State<AppState>,
    Path(params): Path<IdParams>,
) -> AppResult<Page> {
    let id = params.into_id()?;
    CompetitionService::delete_competition(state.store(), id).await?;
    Ok(Page::redirect(COMPETITIONS_PATH))
}

/// Show the edit form for an existing competition
pub async fn edit_form(
    State(state): State<AppState>,
    Path(params): Path<IdParams>,
) -> AppResult<Page> {
    let id = params.into_id()?;
    let competition = CompetitionService::get_competition(state.store(), id).await?;
    Ok(View::form(Some(competition)).into())
}

/// Submit the edit form
pub async fn update_competition(
    State(state): State<AppState>,
    form: Result<Form<EditCompetitionForm>, FormRejection>,
) -> AppResult<Page> {
    let (id, input) = match form
        .map_err(form_rejected)
        .and_then(|Form(form)| form.into_input())
    {
        Ok(parsed) => parsed,
        Err(_) => return Ok(View::form_validation_error().into()),
    };

    match CompetitionService::update_competition(state.store(), id, &input).await {
        Ok(()) => Ok(Page::redirect(COMPETITIONS_PATH)),
        Err(AppError::OperationFailed(_)) => Ok(View::database_error(Template::Form).into()),
        Err(e) => Err(e),
    }
}

/// Show the empty add form
pub async fn add_form() -> Page {
    View::form(None).into()
}

/// Submit the add form; the session user becomes the author
pub async fn create_competition(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    form: Result<Form<AddCompetitionForm>, FormRejection>,
) -> AppResult<Page> {
    let input = match form
        .map_err(form_rejected)
        .and_then(|Form(form)| form.into_input())
    {
        Ok(input) => input,
        Err(_) => return Ok(View::form_validation_error().into()),
    };

    match CompetitionService::create_competition(state.store(), user.id, &input).await {
        Ok(()) => Ok(View::form_success().into()),
        Err(AppError::OperationFailed(_)) => Ok(View::database_error(Template::Form).into()),
        Err(e) => Err(e),
    }
}

/// Apply the current user to a competition
pub async fn apply(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    Path(params): Path<IdParams>,
) -> AppResult<Page> {
    let competition_id = params.into_id()?;

    match CompetitionService::apply(state.store(), user.id, competition_id).await {
        Ok(()) => Ok(View::form_success().into()),
        Err(AppError::OperationFailed(_)) => Ok(View::database_error(Template::Form).into()),
        Err(e) => Err(e),
    }
}

/// List applicants of a competition with their scores
pub async fn list_applied(
    State(state): State<AppState>,
    Path(params): Path<IdParams>,
) -> AppResult<Page> {
    let competition_id = params.into_id()?;
    let items = CompetitionService::list_applied(state.store(), competition_id).await?;
    Ok(View::applied(items).into())
}

/// Show the score form for one applicant
pub async fn score_form(
    State(state): State<AppState>,
    Path(params): Path<IdParams>,
) -> AppResult<Page> {
    let id = params.into_id()?;
    let competitor = CompetitionService::get_competitor(state.store(), id).await?;
    Ok(View::score_form(competitor).into())
}

/// Submit a score; invalid input is an error, not a form re-render
pub async fn set_score(
    State(state): State<AppState>,
    form: Result<Form<ScoreForm>, FormRejection>,
) -> AppResult<Page> {
    let Form(form) = form.map_err(form_rejected)?;
    let (id, bodovi) = form.into_score()?;

    match CompetitionService::set_score(state.store(), id, bodovi).await {
        Ok(competition_id) => Ok(Page::redirect(format!(
            "{COMPETITIONS_PATH}/applied/{competition_id}"
        ))),
        Err(AppError::OperationFailed(_)) => Ok(View::database_error(Template::Bodovi).into()),
        Err(e) => Err(e),
    }
}

fn form_rejected(rejection: FormRejection) -> AppError {
    debug!(error = %rejection, "Form body rejected");
    AppError::invalid_call()
}
