pub mod data_table;
pub mod empty_state;
pub mod header;
pub mod pager;
pub mod sidebar;
