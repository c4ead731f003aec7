#![warn(clippy::cloned_instead_of_copied)]
#![warn(clippy::cognitive_complexity)]
#![warn(clippy::equatable_if_let)]
#![warn(clippy::expect_used)]
#![warn(clippy::manual_let_else)]
#![warn(clippy::match_same_arms)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_docs_in_private_items)]
#![warn(clippy::missing_errors_doc)]
#![warn(clippy::needless_pass_by_value)]
#![warn(clippy::print_stdout)]
#![warn(clippy::str_to_string)]
#![warn(clippy::uninlined_format_args)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::use_self)]
#![warn(clippy::wildcard_imports)]

//! Headless core of the freelance marketplace portal. Holds the data exchanged with the backend,
//! login form validation, the persisted session and the state of the freelancer dashboard. The
//! browser front end renders these stores and forwards user events to them.

pub mod config;
pub mod dashboard;
pub mod data;
pub mod login;
pub mod notice;
pub mod page;
pub mod service;
pub mod session;
pub mod store;
pub mod validation;
