pub mod calculator;
pub mod district_stats;
pub mod header;
pub mod map_controls;
pub mod map_view;
pub mod right_panel;
