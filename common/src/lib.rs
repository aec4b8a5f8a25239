//! Shared data model and wizard core for the portfolio front-end.
//!
//! Everything in this crate is platform independent: no DOM, no network.
//! The `frontend` crate binds these types to the browser (file handles,
//! multipart transmission, rendering).

pub mod model;
pub mod wizard;
