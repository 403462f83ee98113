mod categories;
mod error;
mod mapping;

pub use categories::{ConfigurationError, NetworkError};
pub use error::{AssistantsError, AssistantsResult};
pub use mapping::{ApiErrorDetail, ApiErrorResponse, ErrorMapper};
