pub mod row;
pub mod section;

pub use row::Row;
pub use section::{SectionGroup, group_sections};
