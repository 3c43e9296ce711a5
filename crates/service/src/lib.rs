pub mod errors;
pub mod item_service;
pub mod order_service;
pub mod password;
pub mod task_service;
pub mod user_service;

#[cfg(test)]
pub mod test_support;
