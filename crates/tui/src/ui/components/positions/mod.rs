mod positions_component;
mod state;

pub use positions_component::PositionsComponent;
pub use state::PositionsState;
