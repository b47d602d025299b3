pub mod folder;
pub mod note;
pub mod root;
