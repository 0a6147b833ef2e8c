//! Session identity types.

use serde::{Deserialize, Serialize};

/// Unique identifier for one diagnostic session.
///
/// A session spans one initial scoring pass plus every sequential update
/// applied afterwards. Belief state is never shared across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub uuid::Uuid);

impl SessionId {
    /// Create a new, unique session ID.
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}
