//! GitHub REST API access
//!
//! This module is the HTTP boundary of the tool. [`ApiClient`] wraps a raw
//! `reqwest` client together with an `octocrab` instance sharing the same
//! credentials. Most operations go straight to the REST endpoints with
//! minimal wire structs carrying only the fields the reports need; the SDK
//! is used where it models the response well (rate limits).
//!
//! The fork-parent lookup deliberately bypasses the SDK, whose repository
//! model always reports a null parent, and classifies its outcome into the
//! sentinel values of [`crate::roster::ParentName`].

mod client;

pub use client::{ApiClient, LicenseRef, OwnerRef, RepoDescriptor, UserInfo};
