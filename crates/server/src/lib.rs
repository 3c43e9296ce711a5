pub mod errors;
pub mod openapi;
pub mod routes;
pub mod startup;

pub use startup::{run_shop, run_tasks};
