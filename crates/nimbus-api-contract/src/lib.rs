//! Nimbus REST API contract types
//!
//! This crate defines the schema types for the Nimbus monitoring REST API.
//! Models mirror the vendor's published JSON schemas: required properties are
//! plain fields, optional properties are `Option` (or [`Nullable`] where the
//! wire format distinguishes `null` from a missing key), and every object
//! keeps unknown members in an additional-properties map so that payloads
//! round-trip losslessly even when the server is newer than this crate.
//!
//! Responses decoded by the client are wrapped in [`Decoded`], which keeps
//! the raw payload verbatim whenever typed decoding is not possible instead
//! of failing the call.

pub mod decoded;
pub mod error;
pub mod incidents;
pub mod nullable;
pub mod security;
pub mod users;
pub mod validation;

pub use decoded::Decoded;
pub use error::*;
pub use incidents::*;
pub use nullable::Nullable;
pub use security::*;
pub use users::*;
