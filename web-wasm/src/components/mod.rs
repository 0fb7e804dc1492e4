pub mod footer;
pub mod nav_bar;
pub mod qr_card;
pub mod save_modal;
pub mod saved_page;
pub mod scanner_page;
pub mod view_modal;
