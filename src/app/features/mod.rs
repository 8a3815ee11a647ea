pub mod command_menu;
pub mod navigation;
pub mod remote;
pub mod session;
