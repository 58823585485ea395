/// Thin HTTP layer over the fetcher, stats engine and progress store
pub mod routes;
pub mod server;
pub mod state;

pub use server::start_server;
pub use state::AppState;
