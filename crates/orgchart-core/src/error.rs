pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by editing operations. Layout itself is total and never fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("role name is empty")]
    EmptyRole,

    #[error("role already exists: {role}")]
    DuplicateRole { role: String },

    #[error("unknown node: {id}")]
    UnknownNode { id: String },

    #[error("cannot connect node {id} to itself")]
    SelfLoop { id: String },
}
