//! Wire contracts shared by the sales & commission web client.
//!
//! Field names follow the JSON emitted by the API, which is why most of them
//! are in Portuguese.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;
pub mod usecases;
