pub mod factory;
pub mod snapshot;

pub use factory::GameStateFactory;
pub use snapshot::{GameState, Profile};
