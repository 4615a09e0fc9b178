use serde::{Deserialize, Serialize};

/// One post from the remote collection. Read-only once fetched; held in
/// memory for the session and handed to the detail route by value.
///
/// The wire objects carry more fields (e.g. `userId`); everything not
/// listed here is ignored on deserialize.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}
