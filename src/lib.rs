//! DNS records for services stored in a hierarchical registry.
//!
//! Services live in a key/value registry under keys such as
//! `/skydns/local/example/db`, which correspond to DNS names such as
//! `db.example.local.`. This crate provides the pieces between the registry
//! and a DNS server:
//!
//! - [`Service`], the registry value, and its record builders
//!   ([`Service::srv`], [`Service::a`], [`Service::txt`], ...).
//! - [`path`], [`domain`] and [`path_with_wildcard`] to move between keys and
//!   names, with [`RegistryKeys`] for registries rooted elsewhere.
//! - [`group`] to narrow a lookup down to services sharing a group.
//!
//! Reading the registry and assembling responses are left to the caller.

mod error;
pub mod group;
pub mod keys;
pub mod rr;
mod service;
pub mod text;

pub use self::error::ServiceError;
pub use self::group::group;
pub use self::keys::{RegistryKeys, domain, matches_wildcard, path, path_with_wildcard};
pub use self::service::Service;
pub use self::text::{MAX_CHARACTER_STRING, split_character_strings};
