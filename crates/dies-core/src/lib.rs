mod angle;
mod chip_settings;
mod frame;
mod geom;
mod player_id;
mod triangle;

pub use angle::*;
pub use chip_settings::*;
pub use frame::*;
pub use geom::*;
pub use player_id::*;
pub use triangle::*;

/// 2D vector/point in team coordinates, in m.
pub type Vector2 = nalgebra::Vector2<f64>;
/// 3D vector/point in team coordinates, in m.
pub type Vector3 = nalgebra::Vector3<f64>;
