use serde::{Deserialize, Serialize};
use typeshare::typeshare;

use crate::{FieldGeometry, PlayerId, RoleType, Vector2, Vector3};

/// A single opponent as seen in one frame.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[typeshare]
pub struct PlayerFrame {
    /// The player's unique id
    pub id: PlayerId,
    /// Position of the player in m, in team coordinates
    pub position: Vector2,
    /// The role the player was assigned, if any
    #[serde(default)]
    pub role: RoleType,
}

impl PlayerFrame {
    pub fn new(id: PlayerId, position: Vector2) -> Self {
        Self {
            id,
            position,
            role: RoleType::None,
        }
    }

    pub fn goalkeeper(id: PlayerId, position: Vector2) -> Self {
        Self {
            id,
            position,
            role: RoleType::Goalkeeper,
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        self.role == RoleType::Goalkeeper
    }
}

/// The ball state from a single frame.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[typeshare]
pub struct BallFrame {
    /// Position of the ball in m, in team coordinates
    pub position: Vector3,
    /// Velocity of the ball in m/s, in team coordinates
    #[serde(default = "Vector3::zeros")]
    pub velocity: Vector3,
}

impl BallFrame {
    /// A ball lying still on the ground at `position`.
    pub fn at_rest(position: Vector2) -> Self {
        Self {
            position: Vector3::new(position.x, position.y, 0.0),
            velocity: Vector3::zeros(),
        }
    }
}

/// Read-only snapshot of what an evaluation needs to know about the world for one
/// tick.
///
/// All coordinates are in the team frame, so `+x` points at the enemy goal.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[typeshare]
pub struct TeamFrame {
    /// Opponent players, in the order they were reported
    pub opp_players: Vec<PlayerFrame>,
    /// The ball, if it has been detected
    pub ball: Option<BallFrame>,
    /// The field geometry, if it has been received
    pub field_geom: Option<FieldGeometry>,
}

impl TeamFrame {
    /// Positions of every opponent, the goalkeeper included.
    pub fn opp_positions(&self) -> Vec<Vector2> {
        self.opp_players.iter().map(|p| p.position).collect()
    }

    /// Positions of every opponent that is not the goalkeeper.
    pub fn opp_field_player_positions(&self) -> Vec<Vector2> {
        self.opp_players
            .iter()
            .filter(|p| !p.is_goalkeeper())
            .map(|p| p.position)
            .collect()
    }

    pub fn opp_goalkeeper(&self) -> Option<&PlayerFrame> {
        self.opp_players.iter().find(|p| p.is_goalkeeper())
    }
}
