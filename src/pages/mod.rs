//! Pages

mod client_detail;
mod clients;
mod dashboard;
mod landing;
mod login;
mod project_detail;
mod signup;

pub use client_detail::ClientDetail;
pub use clients::Clients;
pub use dashboard::Dashboard;
pub use landing::LandingPage;
pub use login::Login;
pub use project_detail::ProjectDetail;
pub use signup::Signup;
