//! Data provider: typed request functions over the remote generative
//! text/JSON service.
//!
//! Each request builds a natural-language prompt plus a JSON response
//! schema, sends it through [`GenerativeClient`], strips optional markdown
//! fencing from the reply and parses it into a domain type. Failures never
//! cross the view boundary as anything other than a
//! [`ProviderError`](error::ProviderError).

mod client;
mod error;
mod fence;
mod normalize;
mod requests;

pub use client::{GenerateRequest, GenerativeClient};
pub use error::ProviderError;
pub use fence::{parse_fenced_json, strip_code_fence};
pub use normalize::{collation_key, renumber_skus};
