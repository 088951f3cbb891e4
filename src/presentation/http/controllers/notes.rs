// src/presentation/http/controllers/notes.rs
use crate::application::{
    commands::notes::{CreateNoteCommand, DeleteNoteCommand, UpdateNoteCommand},
    dto::{AuthenticatedUser, NoteDto, NoteFormDto, NoteListDto},
    queries::notes::GetNoteBySlugQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Authenticated;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Form, Json, extract::Path, response::Redirect};
use serde::Serialize;

/// Fixed landing page after a successful create, edit or delete.
pub const SUCCESS_PATH: &str = "/done";

/// A note form ready to be rendered: where it posts and its current values.
#[derive(Debug, Serialize)]
pub struct NoteFormPage {
    pub action: String,
    pub form: NoteFormDto,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<NoteDto>,
}

#[derive(Debug, Serialize)]
pub struct DeletePage {
    pub action: String,
    pub note: NoteDto,
}

pub async fn list_notes(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
) -> HttpResult<Json<NoteListDto>> {
    state
        .services
        .note_queries
        .list_notes(&actor)
        .await
        .into_http()
        .map(Json)
}

pub async fn add_form(Authenticated(_actor): Authenticated) -> Json<NoteFormPage> {
    Json(NoteFormPage {
        action: "/notes/add".into(),
        form: NoteFormDto::default(),
        note: None,
    })
}

pub async fn create_note(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Form(form): Form<NoteFormDto>,
) -> HttpResult<Redirect> {
    let command = CreateNoteCommand {
        title: form.title.clone(),
        text: form.text.clone(),
        slug: form.slug(),
    };

    state
        .services
        .note_commands
        .create_note(&actor, command)
        .await
        .into_form_http(&form)?;

    Ok(Redirect::to(SUCCESS_PATH))
}

pub async fn note_detail(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<NoteDto>> {
    load_note(&state, &actor, slug).await.map(Json)
}

pub async fn edit_form(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<NoteFormPage>> {
    let note = load_note(&state, &actor, slug).await?;
    Ok(Json(NoteFormPage {
        action: format!("/notes/{}/edit", note.slug),
        form: NoteFormDto::from(&note),
        note: Some(note),
    }))
}

pub async fn update_note(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
    Form(form): Form<NoteFormDto>,
) -> HttpResult<Redirect> {
    let command = UpdateNoteCommand {
        current_slug: slug,
        title: form.title.clone(),
        text: form.text.clone(),
        slug: form.slug(),
    };

    state
        .services
        .note_commands
        .update_note(&actor, command)
        .await
        .into_form_http(&form)?;

    Ok(Redirect::to(SUCCESS_PATH))
}

pub async fn delete_confirm(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Json<DeletePage>> {
    let note = load_note(&state, &actor, slug).await?;
    Ok(Json(DeletePage {
        action: format!("/notes/{}/delete", note.slug),
        note,
    }))
}

pub async fn delete_note(
    Extension(state): Extension<HttpState>,
    Authenticated(actor): Authenticated,
    Path(slug): Path<String>,
) -> HttpResult<Redirect> {
    state
        .services
        .note_commands
        .delete_note(&actor, DeleteNoteCommand { slug })
        .await
        .into_http()?;

    Ok(Redirect::to(SUCCESS_PATH))
}

async fn load_note(
    state: &HttpState,
    actor: &AuthenticatedUser,
    slug: String,
) -> HttpResult<NoteDto> {
    state
        .services
        .note_queries
        .get_note_by_slug(actor, GetNoteBySlugQuery { slug })
        .await
        .into_http()
}
