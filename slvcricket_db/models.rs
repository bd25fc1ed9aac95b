use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One entry of the stored player list.
///
/// `created_at` stays as text here; turning it back into a timestamp is the
/// job of `mapping`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPlayer {
    pub id: Uuid,
    pub name: String,
    pub runs: u32,
    pub balls: u32,
    pub is_out: bool,
    pub created_at: String,
}
