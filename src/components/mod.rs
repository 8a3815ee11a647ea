pub mod command_menu;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod page;
pub mod side_panel;
