//! Hall-call dispatch for the Lift elevator simulation.
//!
//! A [`DispatchPolicy`] decides which car, if any, takes a hall call.
//! Policies only read car state; the building applies the decision.
//!
//! Two policies are provided:
//!
//! - [`FirstFit`]: the lowest-indexed car that can accept the call.
//! - [`NearestCar`]: the accepting car closest to the call's origin.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod policy;

pub use policy::{DispatchPolicy, FirstFit, NearestCar};
