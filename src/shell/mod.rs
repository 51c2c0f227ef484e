// Composition root for the employees bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the store and wire it into the use case handlers.
// - Expose the handlers over HTTP and GraphQL.

pub mod graphql;
pub mod http;
pub mod state;
