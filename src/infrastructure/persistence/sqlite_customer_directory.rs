use crate::application::repositories::CustomerDirectory;
use crate::domain::base::DomainError;
use crate::domain::entities::Customer;
use crate::domain::value_objects::{CustomerId, EmailAddress};
use crate::domain::DomainResult;
use chrono::NaiveDate;
use rusqlite::{params, Connection, Result as SqliteResult};

/// SQLite-based implementation of the CustomerDirectory trait
pub struct SqliteCustomerDirectory {
    conn: Connection,
}

impl SqliteCustomerDirectory {
    pub fn new(conn: Connection) -> Self {
        SqliteCustomerDirectory { conn }
    }

    pub fn new_in_memory() -> SqliteResult<Self> {
        let conn = Connection::open_in_memory()?;
        super::schema::initialize_database(&conn)?;
        Ok(SqliteCustomerDirectory { conn })
    }

    pub fn new_with_path(path: impl AsRef<std::path::Path>) -> SqliteResult<Self> {
        let conn = Connection::open(path)?;
        super::schema::initialize_database(&conn)?;
        Ok(SqliteCustomerDirectory { conn })
    }
}

impl CustomerDirectory for SqliteCustomerDirectory {
    fn save(&mut self, customer: &Customer) -> DomainResult<()> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO customers (id, name, email, birth_date)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    customer.id().to_string(),
                    customer.name(),
                    customer.email().as_str(),
                    customer.birth_date().format("%Y-%m-%d").to_string(),
                ],
            )
            .map_err(|e| DomainError::Persistence(format!("database error: {}", e)))?;
        Ok(())
    }

    fn find_by_birth_day(&self, month: u32, day: u32) -> DomainResult<Vec<Customer>> {
        // birth_date is ISO text, so month/day match on the stored string
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, name, email, birth_date FROM customers
                 WHERE strftime('%m', birth_date) = ?1
                   AND strftime('%d', birth_date) = ?2
                 ORDER BY name",
            )
            .map_err(|e| DomainError::Persistence(format!("database error: {}", e)))?;

        let rows: Vec<(String, String, String, String)> = stmt
            .query_map(params![format!("{:02}", month), format!("{:02}", day)], |row| {
                Ok((row.get(0)?, row.get(1)?, row.get(2)?, row.get(3)?))
            })
            .map_err(|e| DomainError::Persistence(format!("database error: {}", e)))?
            .collect::<SqliteResult<Vec<_>>>()
            .map_err(|e| DomainError::Persistence(format!("database error: {}", e)))?;

        let mut customers = Vec::with_capacity(rows.len());
        for (id, name, email, birth_date) in rows {
            let id = CustomerId::parse(&id)
                .map_err(|e| DomainError::Persistence(format!("corrupt customer id: {}", e)))?;
            let email = EmailAddress::new(email)
                .map_err(|e| DomainError::Persistence(format!("corrupt email: {}", e)))?;
            let birth_date = NaiveDate::parse_from_str(&birth_date, "%Y-%m-%d")
                .map_err(|e| DomainError::Persistence(format!("corrupt birth date: {}", e)))?;
            customers.push(Customer::new(id, name, email, birth_date));
        }

        Ok(customers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(name: &str, y: i32, m: u32, d: u32) -> Customer {
        Customer::new(
            CustomerId::generate(),
            name.to_string(),
            EmailAddress::new(format!("{}@example.com", name)).unwrap(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    #[test]
    fn test_find_by_birth_day_matches_across_years() {
        let mut directory = SqliteCustomerDirectory::new_in_memory().unwrap();
        directory.save(&customer("ada", 1990, 6, 15)).unwrap();
        directory.save(&customer("bo", 1985, 6, 15)).unwrap();
        directory.save(&customer("cyd", 1990, 7, 1)).unwrap();

        let matched = directory.find_by_birth_day(6, 15).unwrap();

        assert_eq!(matched.len(), 2);
        let names: Vec<&str> = matched.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["ada", "bo"]);
    }

    #[test]
    fn test_find_by_birth_day_single_digit_parts() {
        let mut directory = SqliteCustomerDirectory::new_in_memory().unwrap();
        directory.save(&customer("dee", 2000, 3, 5)).unwrap();

        let matched = directory.find_by_birth_day(3, 5).unwrap();

        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name(), "dee");
    }

    #[test]
    fn test_find_by_birth_day_no_match() {
        let mut directory = SqliteCustomerDirectory::new_in_memory().unwrap();
        directory.save(&customer("ed", 1999, 1, 2)).unwrap();

        let matched = directory.find_by_birth_day(12, 31).unwrap();
        assert!(matched.is_empty());
    }

    #[test]
    fn test_save_replaces_existing_entry() {
        let mut directory = SqliteCustomerDirectory::new_in_memory().unwrap();
        let original = customer("fay", 1992, 9, 9);
        directory.save(&original).unwrap();

        let updated = Customer::new(
            *original.id(),
            "fay".to_string(),
            EmailAddress::new("fay@elsewhere.com").unwrap(),
            original.birth_date(),
        );
        directory.save(&updated).unwrap();

        let matched = directory.find_by_birth_day(9, 9).unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].email().as_str(), "fay@elsewhere.com");
    }
}
