//! Salesforce provider adapter: configuration (data) and strategy (behavior).
//!
//! `config` resolves caller options into an immutable [`SalesforceConfig`] with the fixed
//! production endpoints and the resolved scope list. `params` holds the authorization-request
//! multimap the OAuth2 core hands to the adapter. `profile` defines the normalized profile
//! contract. `strategy` declares the [`ProviderStrategy`] seam and `salesforce` implements it.

pub mod config;
pub mod params;
pub mod profile;
pub mod salesforce;
pub mod strategy;

pub use config::*;
pub use params::*;
pub use profile::*;
pub use salesforce::*;
pub use strategy::*;
