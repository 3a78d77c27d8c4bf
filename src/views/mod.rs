//! Server-rendered views
//!
//! Handlers produce a [`Page`]: either a [`View`] (template name plus a result
//! payload of flags and data) or a redirect. The payload is serializable so a
//! template engine can consume it unchanged; [`html`] is the built-in renderer.

pub mod html;

use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Serialize;

use crate::models::{AppliedItem, Competition, CompetitionListItem, Competitor};

/// Templates known to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Template {
    #[serde(rename = "competitions/index")]
    Index,
    #[serde(rename = "competitions/form")]
    Form,
    #[serde(rename = "competitions/applied")]
    Applied,
    #[serde(rename = "competitions/bodovi")]
    Bodovi,
}

/// List payloads
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ViewItems {
    Competitions(Vec<CompetitionListItem>),
    Applied(Vec<AppliedItem>),
}

/// The `result` object handed to a template
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ViewResult {
    #[serde(skip_serializing_if = "is_false")]
    pub display_form: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub validation_error: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub database_error: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<ViewItems>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<Competition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bodovi: Option<Competitor>,
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// A template together with its payload
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct View {
    pub template: Template,
    pub result: ViewResult,
}

impl View {
    pub fn new(template: Template, result: ViewResult) -> Self {
        Self { template, result }
    }

    pub fn competitions(items: Vec<CompetitionListItem>) -> Self {
        Self::new(
            Template::Index,
            ViewResult {
                items: Some(ViewItems::Competitions(items)),
                ..Default::default()
            },
        )
    }

    pub fn applied(items: Vec<AppliedItem>) -> Self {
        Self::new(
            Template::Applied,
            ViewResult {
                items: Some(ViewItems::Applied(items)),
                ..Default::default()
            },
        )
    }

    /// Empty add form, or the edit form when `edit` is given
    pub fn form(edit: Option<Competition>) -> Self {
        Self::new(
            Template::Form,
            ViewResult {
                display_form: true,
                edit,
                ..Default::default()
            },
        )
    }

    pub fn form_validation_error() -> Self {
        Self::new(
            Template::Form,
            ViewResult {
                display_form: true,
                validation_error: true,
                ..Default::default()
            },
        )
    }

    pub fn database_error(template: Template) -> Self {
        Self::new(
            template,
            ViewResult {
                database_error: true,
                ..Default::default()
            },
        )
    }

    pub fn form_success() -> Self {
        Self::new(
            Template::Form,
            ViewResult {
                success: true,
                ..Default::default()
            },
        )
    }

    pub fn score_form(competitor: Competitor) -> Self {
        Self::new(
            Template::Bodovi,
            ViewResult {
                display_form: true,
                bodovi: Some(competitor),
                ..Default::default()
            },
        )
    }
}

/// Handler outcome: a rendered view or a redirect
#[derive(Debug)]
pub enum Page {
    View(View),
    Redirect(String),
}

impl Page {
    pub fn redirect(to: impl Into<String>) -> Self {
        Self::Redirect(to.into())
    }
}

impl From<View> for Page {
    fn from(view: View) -> Self {
        Self::View(view)
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        match self {
            Page::View(view) => Html(html::render(&view)).into_response(),
            Page::Redirect(to) => Redirect::to(&to).into_response(),
        }
    }
}
