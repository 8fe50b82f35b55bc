pub mod url_validator;

pub use url_validator::{header_safe_location, validate_url};
