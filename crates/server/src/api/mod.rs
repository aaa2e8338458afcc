pub mod handlers;
pub mod middleware;
pub mod profile;
pub mod routes;

pub use routes::create_router;
