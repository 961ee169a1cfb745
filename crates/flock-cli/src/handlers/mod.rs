pub mod board_create;
pub mod board_list;
pub mod board_show;
pub mod dashboard;
pub mod post_list;
