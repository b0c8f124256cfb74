//! Data services.
//!
//! The site is fully static: the only external call is fetching the
//! exported dataset document once at startup.
//!
//! # Services
//!
//! - [`places`] - Fetch the places dataset

pub mod places;

pub use places::*;
