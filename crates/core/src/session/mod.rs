//! Session module - demo login, current user, logout.

mod session_service;
mod session_traits;

pub use session_service::{SessionService, UserProfile};
pub use session_traits::SessionServiceTrait;
