//! Remote data access: request description, response interpretation and
//! per-view loading state.

pub mod error;
pub mod remote;
pub mod request;
pub mod state;

pub use error::FetchError;
pub use remote::RemoteData;
pub use request::{fetch_json, interpret_response, send, ApiRequest, ApiResponse, HttpMethod};
pub use state::{FetchState, Resolution};
