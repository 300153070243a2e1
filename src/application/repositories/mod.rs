mod customer_directory;
mod order_repository;

pub use customer_directory::CustomerDirectory;
pub use order_repository::OrderRepository;
