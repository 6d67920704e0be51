use axum::{
    extract::rejection::{JsonRejection, QueryRejection, StringRejection},
    extract::multipart::{MultipartError, MultipartRejection},
    http::StatusCode,
    response::IntoResponse,
};
use pool_server_app::workflow::{
    background::{
        activate::ActivateBackgroundError, delete::DeleteBackgroundError,
        list::ListBackgroundsError, upload::UploadBackgroundError,
    },
    contest::form::GetContestFormError,
    entry::{
        clear::ClearEntriesError, export::ExportEntriesError, list::ListEntriesError,
        submit::SubmitEntryError,
    },
    roster::{
        add::AddGolferError, import::ImportGolfersError, list::ListGolfersError,
        remove::RemoveGolfersError,
    },
    settings::{get::GetSettingsError, update::UpdateSettingError},
};

#[derive(Debug)]
pub enum ServiceError {
    NotFound(String),
    Unauthorized(String),
    BadRequest(String),
    MethodNotAllowed(String),
    Internal(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServiceError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ServiceError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ServiceError::MethodNotAllowed(msg) => write!(f, "Method not allowed: {}", msg),
            ServiceError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match self {
            ServiceError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ServiceError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServiceError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServiceError::MethodNotAllowed(msg) => (StatusCode::METHOD_NOT_ALLOWED, msg),
            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };
        let body = serde_json::json!({ "error": msg });
        (status, axum::Json(body)).into_response()
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        ServiceError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ServiceError {
    fn from(rejection: QueryRejection) -> Self {
        ServiceError::BadRequest(rejection.body_text())
    }
}

impl From<StringRejection> for ServiceError {
    fn from(rejection: StringRejection) -> Self {
        ServiceError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartRejection> for ServiceError {
    fn from(rejection: MultipartRejection) -> Self {
        ServiceError::BadRequest(rejection.body_text())
    }
}

impl From<MultipartError> for ServiceError {
    fn from(e: MultipartError) -> Self {
        ServiceError::BadRequest(e.body_text())
    }
}

impl From<SubmitEntryError> for ServiceError {
    fn from(e: SubmitEntryError) -> Self {
        match e {
            SubmitEntryError::MissingField(_) | SubmitEntryError::InvalidPicks(_) => {
                ServiceError::BadRequest(e.to_string())
            }
            SubmitEntryError::Repository => {
                ServiceError::Internal("Failed to save entry".to_string())
            }
        }
    }
}

impl From<GetContestFormError> for ServiceError {
    fn from(GetContestFormError::RepositoryError: GetContestFormError) -> Self {
        ServiceError::Internal("Failed to load contest".to_string())
    }
}

impl From<ListEntriesError> for ServiceError {
    fn from(ListEntriesError::RepositoryError: ListEntriesError) -> Self {
        ServiceError::Internal("Failed to load entries".to_string())
    }
}

impl From<ExportEntriesError> for ServiceError {
    fn from(e: ExportEntriesError) -> Self {
        match e {
            ExportEntriesError::RepositoryError => {
                ServiceError::Internal("Failed to load entries".to_string())
            }
            ExportEntriesError::FormatError => {
                ServiceError::Internal("Failed to format export".to_string())
            }
        }
    }
}

impl From<ClearEntriesError> for ServiceError {
    fn from(ClearEntriesError::RepositoryError: ClearEntriesError) -> Self {
        ServiceError::Internal("Failed to clear entries".to_string())
    }
}

impl From<ListGolfersError> for ServiceError {
    fn from(ListGolfersError::RepositoryError: ListGolfersError) -> Self {
        ServiceError::Internal("Failed to load golfers".to_string())
    }
}

impl From<AddGolferError> for ServiceError {
    fn from(e: AddGolferError) -> Self {
        match e {
            AddGolferError::InvalidGolfer(reason) => ServiceError::BadRequest(reason.to_string()),
            AddGolferError::RepositoryError => {
                ServiceError::Internal("Failed to add golfer".to_string())
            }
        }
    }
}

impl From<ImportGolfersError> for ServiceError {
    fn from(e: ImportGolfersError) -> Self {
        match e {
            ImportGolfersError::EmptyBatch => {
                ServiceError::BadRequest("No golfers to add".to_string())
            }
            ImportGolfersError::InvalidRow(row) => ServiceError::BadRequest(row.to_string()),
            ImportGolfersError::RepositoryError => {
                ServiceError::Internal("Failed to add golfers".to_string())
            }
        }
    }
}

impl From<RemoveGolfersError> for ServiceError {
    fn from(e: RemoveGolfersError) -> Self {
        match e {
            RemoveGolfersError::NotFound => ServiceError::NotFound("Golfer not found".to_string()),
            RemoveGolfersError::RepositoryError => {
                ServiceError::Internal("Failed to remove golfers".to_string())
            }
        }
    }
}

impl From<GetSettingsError> for ServiceError {
    fn from(GetSettingsError::RepositoryError: GetSettingsError) -> Self {
        ServiceError::Internal("Failed to load settings".to_string())
    }
}

impl From<UpdateSettingError> for ServiceError {
    fn from(e: UpdateSettingError) -> Self {
        match e {
            UpdateSettingError::MissingKey => {
                ServiceError::BadRequest("Missing \"key\" in request body".to_string())
            }
            UpdateSettingError::RepositoryError => {
                ServiceError::Internal("Failed to save setting".to_string())
            }
        }
    }
}

impl From<ListBackgroundsError> for ServiceError {
    fn from(ListBackgroundsError::StorageError: ListBackgroundsError) -> Self {
        ServiceError::Internal("Failed to list backgrounds".to_string())
    }
}

impl From<UploadBackgroundError> for ServiceError {
    fn from(e: UploadBackgroundError) -> Self {
        match e {
            UploadBackgroundError::EmptyFile => ServiceError::BadRequest("No file".to_string()),
            UploadBackgroundError::UnsupportedType(content_type) => ServiceError::BadRequest(
                format!("Unsupported content type '{}'", content_type),
            ),
            UploadBackgroundError::StorageError => {
                ServiceError::Internal("Failed to store background".to_string())
            }
            UploadBackgroundError::ActivationFailed => {
                ServiceError::Internal("Failed to activate background".to_string())
            }
        }
    }
}

impl From<ActivateBackgroundError> for ServiceError {
    fn from(e: ActivateBackgroundError) -> Self {
        match e {
            ActivateBackgroundError::InvalidKey => {
                ServiceError::BadRequest("Invalid background key".to_string())
            }
            ActivateBackgroundError::NotFound => {
                ServiceError::NotFound("Background not found".to_string())
            }
            ActivateBackgroundError::StorageError | ActivateBackgroundError::RepositoryError => {
                ServiceError::Internal("Failed to activate background".to_string())
            }
        }
    }
}

impl From<DeleteBackgroundError> for ServiceError {
    fn from(e: DeleteBackgroundError) -> Self {
        match e {
            DeleteBackgroundError::InvalidKey => {
                ServiceError::BadRequest("Invalid background key".to_string())
            }
            DeleteBackgroundError::NotFound => {
                ServiceError::NotFound("Background not found".to_string())
            }
            DeleteBackgroundError::StorageError | DeleteBackgroundError::RepositoryError => {
                ServiceError::Internal("Failed to delete background".to_string())
            }
        }
    }
}
