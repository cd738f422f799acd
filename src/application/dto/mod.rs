/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod discovery_options;
mod output_format;
mod share_outcome;
mod toggle_outcome;

pub use discovery_options::{DiscoveryOptions, DEFAULT_SHARE_BASE_URL};
pub use output_format::OutputFormat;
pub use share_outcome::ShareOutcome;
pub use toggle_outcome::{ToggleOutcome, DEFAULT_LOGIN_PATH};
