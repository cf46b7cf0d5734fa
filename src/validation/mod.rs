mod error;
pub mod evidence;
mod orphans;
mod report;
mod rows;
pub(crate) mod schemas;
mod validator;


pub use error::{UntrimmedCell, ValidationError, VoteCell};
pub use orphans::find_orphans;
pub use report::{ReportSummary, ValidationReport, ViolationSummary};
pub use rows::{RowOutcome, RowValidator, parse_identifiers};
// Re-export the main Validator
pub use validator::{KnowledgeBasePaths, Validator, validate_knowledge_base};
