mod types;

pub use types::{Collab, Context};
