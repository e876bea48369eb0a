pub mod create_form;
pub mod departments;
pub mod edit_dialog;
pub mod status_bar;
pub mod table;
