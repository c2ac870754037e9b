pub mod authorizers;
pub mod events;
pub mod state;
