mod error;
mod fetcher;
mod traits;

pub use error::{FetchError, Result};
pub use fetcher::ContextFetcher;
pub use traits::ContextTransport;
