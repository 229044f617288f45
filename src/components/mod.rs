//! Small reusable view components.

pub mod schedule_list;
pub mod sidebar;
