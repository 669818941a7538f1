//! Types and logic shared by the book club backend and the browser frontend.
//!
//! Everything in this crate is target independent: it compiles both natively
//! (for the actix server and the test suite) and to `wasm32` (for the Yew app).

pub mod export_gate;
pub mod form;
pub mod model;
pub mod notion;
pub mod requests;
pub mod store;
