//! Form schema handler.

use axum::{extract::State, Json};

use crate::form::{form_schema, FormSchema};
use crate::web::state::WebAppState;

/// Describe the player form so a client can render it.
pub async fn get_form(State(state): State<WebAppState>) -> Json<FormSchema> {
    Json(form_schema(state.export_settings()))
}
