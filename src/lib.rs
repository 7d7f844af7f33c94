pub mod config;
pub mod error;
pub mod observability;
pub mod sources;

pub use config::Config;
pub use error::AppError;
pub use sources::SourcePaths;
