pub mod freelance_dashboard;
pub mod home;
pub mod login;

pub use marketplace::page::Page;
