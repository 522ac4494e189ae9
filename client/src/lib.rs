pub mod blog_client;
pub mod client_api;
pub mod command;
