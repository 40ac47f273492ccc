//! HTTP collaborator for the Israel Post zip-code lookup.
//!
//! `mikud-core` owns the protocol semantics; this crate owns the one
//! blocking step — the GET request — plus the policies that go with it:
//! request pacing, block-page detection, and normalizing every transport
//! failure into a [`mikud_core::LookupResult`] so failures never cross the
//! boundary as panics or stray errors.

pub mod client;
pub mod error;
pub mod pace;

pub use client::PostClient;
pub use error::PostClientError;
pub use pace::Pacer;
