// Composition root.
//
// - Read config from the environment.
// - Build the Sheets, Gemini and SMTP adapters.
// - Wire them into the use case handlers held by AppState.
// - Expose the REST and GraphQL surfaces.

pub mod config;
pub mod error;
pub mod graphql;
pub mod http;
pub mod state;
