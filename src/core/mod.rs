//! Core domain types shared by every scoring module.

pub mod activity;
pub mod errors;
pub mod score_types;
pub mod traits;

pub use activity::{items_from_json, ActivityItem, ActivityType, Target, TargetType};
pub use errors::{Error, Result, ResultExt};
pub use score_types::Score0To100;
pub use traits::{ActivityStore, PreferenceSource};
