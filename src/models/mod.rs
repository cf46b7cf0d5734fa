pub mod identity;
pub mod record;
pub mod roster;
pub mod schema;
pub mod table;

// Re-export commonly used types
pub use identity::{IDENTITY_SEPARATOR, IdentitySet, RepeatedIdentity};
pub use record::{
    APPROVALS_COLUMN, CONJUGATE_COLUMN, Configuration, GroupKey, IDENTIFIER_COLUMNS,
    REJECTIONS_COLUMN, Record, TARGET_COLUMN, is_identifier_column,
};
pub use roster::{Reviewer, Roster};
pub use schema::Schema;
pub use table::Table;
