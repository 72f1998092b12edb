pub mod nav_menu;
pub mod viewport;
