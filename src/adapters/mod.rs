// Adapters layer: concrete implementations for the external collaborators
// (recipe storage, HTTP source, report output, authorization).

pub mod auth;
pub mod http_source;
pub mod json_store;
pub mod report;

pub use auth::{AllowAll, TokenAuthorizer};
pub use http_source::HttpRecipeSource;
pub use json_store::JsonFileStore;
pub use report::LocalReportSink;
