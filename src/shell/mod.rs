// Composition root for the events API.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the store and the authorizer.
// - Wire the use case inbound adapters into the router.

pub mod config;
pub mod http;
pub mod state;
