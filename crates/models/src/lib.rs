pub mod db;
pub mod errors;
pub mod item;
pub mod order;
pub mod task;
pub mod user;

#[cfg(test)]
mod tests;
