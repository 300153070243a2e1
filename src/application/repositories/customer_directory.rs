use crate::domain::{entities::Customer, DomainResult};

/// Lookup collaborator for the birthday notifier.
///
/// Implementations resolve customers whose birth date matches a given
/// month/day, regardless of year.
pub trait CustomerDirectory {
    /// Adds a customer to the directory, replacing any existing entry
    /// with the same ID.
    fn save(&mut self, customer: &Customer) -> DomainResult<()>;

    /// Returns every customer whose birth date falls on the given
    /// month (1-12) and day (1-31).
    fn find_by_birth_day(&self, month: u32, day: u32) -> DomainResult<Vec<Customer>>;
}
