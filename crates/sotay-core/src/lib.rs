pub mod error;
pub mod extract;
pub mod lessons;
pub mod preprocess;
pub mod request;
pub mod vocabulary;

pub use error::{ExtractError, StoreError};
pub use extract::extract;
pub use request::ExtractRequest;
