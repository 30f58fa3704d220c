use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MergeError {
    #[error("cannot merge {left} with {right}: only path tries merge")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },
    #[error("cannot merge nodes with different keys: {left} and {right}")]
    KeyMismatch { left: String, right: String },
    #[error("cannot merge two leaf nodes: {left} and {right}")]
    DuplicateLeaf { left: String, right: String },
}

impl MergeError {
    /// True for structural conflicts, as opposed to incompatible operands.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            MergeError::KeyMismatch { .. } | MergeError::DuplicateLeaf { .. }
        )
    }
}

pub type MergeResult<T> = Result<T, MergeError>;
