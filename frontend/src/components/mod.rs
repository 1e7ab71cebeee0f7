pub mod analysis_menu;
pub mod choose_data;
pub mod clustering;
pub mod handlers;
pub mod header;
pub mod menu;
pub mod prediction;
pub mod preprocess_form;
pub mod regression;
pub mod results;
pub mod statistics;
pub mod trends;
pub mod upload_section;
pub mod utils;
