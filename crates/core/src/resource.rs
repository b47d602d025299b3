//! The two resources exposed by the API and their client-facing messages.

use std::fmt;

/// A resource kind served under `/api/<segment>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Folder,
    Note,
}

impl Resource {
    /// Human-readable entity name, used in logs and error `Display`.
    pub fn name(self) -> &'static str {
        match self {
            Resource::Folder => "Folder",
            Resource::Note => "Note",
        }
    }

    /// Message returned in the `404` envelope when an id does not resolve.
    pub fn not_found_message(self) -> &'static str {
        match self {
            Resource::Folder => "Folder doesn't exist",
            Resource::Note => "Note Not Found",
        }
    }

    /// Message returned in the `400` envelope when a PATCH body carries none
    /// of the updatable fields.
    pub fn empty_update_message(self) -> &'static str {
        match self {
            Resource::Folder => "Request body must contain 'folder_name'",
            Resource::Note => {
                "Request body must content either 'name', 'folder_id', or 'content'"
            }
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
