// portal-web — the social-login demo application.
//
// Wires the auth layer into an axum router: pages, sign-in/sign-out
// actions, the OAuth callback endpoint, and the route guard.

pub mod context;
pub mod cookies;
pub mod error;
pub mod guard;
pub mod hooks;
pub mod routes;

pub use context::AppContext;
pub use routes::build_router;
