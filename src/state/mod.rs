//! Client-side state machines.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `view`, `routes`, `search`) so pages
//! can drive small focused models. Everything in here is plain data that is
//! testable on the host; pages wrap these models in `RwSignal`s and apply
//! network completions to them.

pub mod routes;
pub mod search;
pub mod session;
pub mod view;
