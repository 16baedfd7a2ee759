//! Reusable UI components

pub mod loading;
pub mod navbar;
pub mod notice;
pub mod protected_route;

pub use loading::LoadingSpinner;
pub use navbar::Navbar;
pub use notice::{ErrorNotice, SuccessNotice};
pub use protected_route::ProtectedRoute;
