//! Contact CRUD and search endpoints.
//!
//! Route table:
//!
//! | Verb | Path | Success |
//! |---|---|---|
//! | GET | /contacts | 200 |
//! | GET | /contacts/search?query= | 200 |
//! | GET | /contacts/{id} | 200 |
//! | POST | /contacts | 201 |
//! | PUT | /contacts/{id} | 200 |
//! | DELETE | /contacts/{id} | 200 |
//! | GET | /contacts/ping | 200 "Pong" |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info, warn};

use crate::contacts::Contact;

use super::envelope::ApiResponse;
use super::requests::{ContactInput, SearchParams};
use super::validation;
use super::{ApiError, ApiState};

type Envelope<T> = (StatusCode, Json<ApiResponse<T>>);
type ApiResult<T> = Result<Envelope<T>, ApiError>;

/// Build the contact router.
pub fn contact_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/contacts", get(list_contacts).post(create_contact))
        .route("/contacts/search", get(search_contacts))
        .route("/contacts/ping", get(ping))
        .route(
            "/contacts/{id}",
            get(get_contact).put(update_contact).delete(delete_contact),
        )
        .with_state(state)
}

/// Id segments must parse as a positive integer before any store access.
fn parse_id(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ApiError::BadId),
    }
}

async fn list_contacts(State(state): State<Arc<ApiState>>) -> ApiResult<Vec<Contact>> {
    info!("getting all contacts");

    let contacts = state.contacts.get_all().await.map_err(|e| {
        error!(error = %e, "failed to fetch contacts");
        ApiError::Internal("An error occurred while retrieving contacts")
    })?;

    info!(count = contacts.len(), "retrieved contacts");
    let message = format!("Retrieved {} contacts successfully", contacts.len());
    Ok((StatusCode::OK, Json(ApiResponse::success(contacts, message))))
}

async fn search_contacts(
    State(state): State<Arc<ApiState>>,
    Query(params): Query<SearchParams>,
) -> ApiResult<Vec<Contact>> {
    let raw = params.query.unwrap_or_default();

    let validation_errors = validation::validate_search_query(&raw);
    if !validation_errors.is_empty() {
        warn!(errors = ?validation_errors, "search validation failed");
        return Err(ApiError::Validation(validation_errors));
    }

    let safe_query = raw.trim();
    info!(query = safe_query, "searching contacts");

    let contacts = state.contacts.search(safe_query).await.map_err(|e| {
        error!(error = %e, query = safe_query, "search failed");
        ApiError::Internal("An error occurred while searching contacts")
    })?;

    info!(count = contacts.len(), query = safe_query, "search finished");
    let message = format!(
        "Found {} contacts matching the search criteria",
        contacts.len()
    );
    Ok((StatusCode::OK, Json(ApiResponse::success(contacts, message))))
}

async fn get_contact(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<Contact> {
    let id = parse_id(&id)?;
    info!(contact_id = id, "getting contact");

    let contact = state.contacts.get_by_id(id).await.map_err(|e| {
        error!(error = %e, contact_id = id, "failed to fetch contact");
        ApiError::Internal("An error occurred while retrieving the contact")
    })?;

    match contact {
        Some(contact) => Ok((
            StatusCode::OK,
            Json(ApiResponse::success(contact, "Contact retrieved successfully")),
        )),
        None => {
            warn!(contact_id = id, "contact not found");
            Err(ApiError::NotFound(id))
        }
    }
}

async fn create_contact(
    State(state): State<Arc<ApiState>>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> ApiResult<Contact> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(detail = %rejection.body_text(), "create body rejected");
        ApiError::Validation(vec![rejection.body_text()])
    })?;

    let validation_errors = validation::validate_contact(&input);
    if !validation_errors.is_empty() {
        warn!(errors = ?validation_errors, "create validation failed");
        return Err(ApiError::Validation(validation_errors));
    }

    info!(
        first_name = %input.first_name,
        last_name = %input.last_name,
        "creating contact"
    );

    let created = state
        .contacts
        .create(input.into_new_contact())
        .await
        .map_err(|e| {
            error!(error = %e, "failed to create contact");
            ApiError::Internal("An error occurred while creating the contact")
        })?;

    info!(contact_id = created.id, "contact created");
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Contact created successfully")),
    ))
}

async fn update_contact(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
    payload: Result<Json<ContactInput>, JsonRejection>,
) -> ApiResult<Contact> {
    let Json(input) = payload.map_err(|rejection| {
        warn!(detail = %rejection.body_text(), "update body rejected");
        ApiError::Validation(vec![rejection.body_text()])
    })?;

    let validation_errors = validation::validate_contact(&input);
    if !validation_errors.is_empty() {
        warn!(errors = ?validation_errors, "update validation failed");
        return Err(ApiError::Validation(validation_errors));
    }

    let id = parse_id(&id)?;
    info!(contact_id = id, "updating contact");

    let updated = state
        .contacts
        .update(id, input.into_new_contact())
        .await
        .map_err(|e| {
            error!(error = %e, contact_id = id, "failed to update contact");
            ApiError::Internal("An error occurred while updating the contact")
        })?;

    match updated {
        Some(contact) => {
            info!(contact_id = contact.id, "contact updated");
            Ok((
                StatusCode::OK,
                Json(ApiResponse::success(contact, "Contact updated successfully")),
            ))
        }
        None => {
            warn!(contact_id = id, "contact not found for update");
            Err(ApiError::NotFound(id))
        }
    }
}

async fn delete_contact(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<String>,
) -> ApiResult<()> {
    let id = parse_id(&id)?;
    info!(contact_id = id, "deleting contact");

    let deleted = state.contacts.delete(id).await.map_err(|e| {
        error!(error = %e, contact_id = id, "failed to delete contact");
        ApiError::Internal("An error occurred while deleting the contact")
    })?;

    if !deleted {
        warn!(contact_id = id, "contact not found for deletion");
        return Err(ApiError::NotFound(id));
    }

    info!(contact_id = id, "contact deleted");
    Ok((
        StatusCode::OK,
        Json(ApiResponse::success_empty("Contact deleted successfully")),
    ))
}

async fn ping() -> &'static str {
    info!("ping received");
    "Pong"
}
