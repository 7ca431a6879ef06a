mod role_type;
mod team_frame;

pub use role_type::*;
pub use team_frame::*;
