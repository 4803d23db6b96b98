//! Routed pages

pub mod home;
pub mod movie_details;
pub mod not_found;
pub mod search;
pub mod tv_details;
