// Composition root for the time_entries bounded context.
//
// Responsibilities
// - Wire the storage adapter into the use case handlers.
// - Expose the HTTP router the binary serves.

pub mod http;
pub mod state;
