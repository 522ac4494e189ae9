pub mod cli;
pub mod error;
pub mod faker;
pub mod model;
pub mod server;
pub mod store;
pub mod util;
