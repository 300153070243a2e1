mod schema;
mod sqlite_customer_directory;
mod sqlite_order_repository;

pub use schema::initialize_database;
pub use sqlite_customer_directory::SqliteCustomerDirectory;
pub use sqlite_order_repository::SqliteOrderRepository;
