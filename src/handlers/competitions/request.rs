//! Competition request DTOs
//!
//! Every field arrives as text so that malformed input reaches validation
//! instead of being rejected by the extractor. `into_*` methods validate and
//! convert to typed values.

use serde::Deserialize;
use validator::Validate;

use crate::{
    constants::{
        MAX_COMPETITION_DESCRIPTION_LENGTH, MAX_COMPETITION_NAME_LENGTH,
        MIN_COMPETITION_DESCRIPTION_LENGTH, MIN_COMPETITION_NAME_LENGTH,
    },
    error::{AppError, AppResult},
    models::CompetitionInput,
    utils::validation::{
        parse_date, parse_positive_id, parse_score, validate_iso_date, validate_positive_id,
        validate_score,
    },
};

/// `:id` path parameter
#[derive(Debug, Deserialize, Validate)]
pub struct IdParams {
    #[validate(custom(function = "validate_positive_id"))]
    pub id: String,
}

impl IdParams {
    pub fn into_id(self) -> AppResult<i64> {
        self.validate()?;
        parse_positive_id(&self.id).ok_or_else(AppError::invalid_call)
    }
}

/// Add competition form
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct AddCompetitionForm {
    #[validate(
        required,
        length(min = MIN_COMPETITION_NAME_LENGTH, max = MAX_COMPETITION_NAME_LENGTH)
    )]
    pub name: Option<String>,

    #[validate(
        required,
        length(min = MIN_COMPETITION_DESCRIPTION_LENGTH, max = MAX_COMPETITION_DESCRIPTION_LENGTH)
    )]
    pub description: Option<String>,

    #[validate(required, custom(function = "validate_iso_date"))]
    pub apply_till: Option<String>,
}

impl AddCompetitionForm {
    pub fn into_input(self) -> AppResult<CompetitionInput> {
        self.validate()?;
        competition_input(self.name, self.description, self.apply_till)
    }
}

/// Edit competition form
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct EditCompetitionForm {
    #[validate(required, custom(function = "validate_positive_id"))]
    pub id: Option<String>,

    #[validate(
        required,
        length(min = MIN_COMPETITION_NAME_LENGTH, max = MAX_COMPETITION_NAME_LENGTH)
    )]
    pub name: Option<String>,

    #[validate(
        required,
        length(min = MIN_COMPETITION_DESCRIPTION_LENGTH, max = MAX_COMPETITION_DESCRIPTION_LENGTH)
    )]
    pub description: Option<String>,

    #[validate(required, custom(function = "validate_iso_date"))]
    pub apply_till: Option<String>,
}

impl EditCompetitionForm {
    pub fn into_input(self) -> AppResult<(i64, CompetitionInput)> {
        self.validate()?;
        let id = self
            .id
            .as_deref()
            .and_then(parse_positive_id)
            .ok_or_else(AppError::invalid_call)?;
        Ok((id, competition_input(self.name, self.description, self.apply_till)?))
    }
}

/// Score form
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct ScoreForm {
    #[validate(required, custom(function = "validate_positive_id"))]
    pub id: Option<String>,

    #[validate(required, custom(function = "validate_score"))]
    pub bodovi: Option<String>,
}

impl ScoreForm {
    pub fn into_score(self) -> AppResult<(i64, f64)> {
        self.validate()?;
        let id = self.id.as_deref().and_then(parse_positive_id);
        let bodovi = self.bodovi.as_deref().and_then(parse_score);
        match (id, bodovi) {
            (Some(id), Some(bodovi)) => Ok((id, bodovi)),
            _ => Err(AppError::invalid_call()),
        }
    }
}

fn competition_input(
    name: Option<String>,
    description: Option<String>,
    apply_till: Option<String>,
) -> AppResult<CompetitionInput> {
    let apply_till = apply_till
        .as_deref()
        .and_then(parse_date)
        .ok_or_else(AppError::invalid_call)?;
    match (name, description) {
        (Some(name), Some(description)) => Ok(CompetitionInput {
            name,
            description,
            apply_till,
        }),
        _ => Err(AppError::invalid_call()),
    }
}
