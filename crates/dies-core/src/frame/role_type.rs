use serde::{Deserialize, Serialize};
use typeshare::typeshare;

/// Role type that determines special rules applied to a player.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[typeshare]
pub enum RoleType {
    /// No special role.
    #[default]
    None,
    /// A player who is the goalkeeper.
    Goalkeeper,
}
