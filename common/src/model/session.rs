use serde::{Deserialize, Serialize};

use super::Actor;

/// The persisted client session: who is signed in and the bearer token the
/// submission call attaches. Stored as two keys in browser local storage and
/// kept in sync across tabs by the frontend's session provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Actor,
    pub token: String,
}
