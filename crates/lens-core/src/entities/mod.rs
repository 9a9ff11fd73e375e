//! Entity structs for all CookieLens domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! roundtrip and schema validation. Snapshot fields use the scanner's
//! `camelCase` spelling; report fields use `snake_case`.

mod control;
mod framework;
mod report;
mod risk;
mod snapshot;
mod verdict;

pub use control::{Control, FrameworkInfo};
pub use framework::{FrameworkResult, FrameworkResults};
pub use report::{OverallSummary, Report, ScanReport};
pub use risk::ThirdPartyRisk;
pub use snapshot::{Cookie, Snapshot};
pub use verdict::Verdict;
