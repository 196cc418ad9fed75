pub mod alert;
pub mod catalog;
pub mod movie_table;
pub mod review_form;
