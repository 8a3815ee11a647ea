pub mod crm;
pub mod logo;
pub mod models;
pub mod search;
