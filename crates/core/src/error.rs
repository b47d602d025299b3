use crate::resource::Resource;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The path id did not resolve to a stored record. `id` is the raw path
    /// segment, which may not even be numeric.
    #[error("{resource} with id {id} not found")]
    NotFound { resource: Resource, id: String },

    #[error("Missing '{0}' in request body")]
    MissingField(&'static str),

    #[error("{}", .0.empty_update_message())]
    EmptyUpdate(Resource),

    #[error("Unauthorized request")]
    Unauthorized,
}

impl CoreError {
    /// Message safe to show to API clients in the `{ error: { message } }`
    /// envelope.
    pub fn client_message(&self) -> String {
        match self {
            CoreError::NotFound { resource, .. } => resource.not_found_message().to_string(),
            other => other.to_string(),
        }
    }
}
