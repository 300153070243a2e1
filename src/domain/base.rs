/// Base DDD abstractions for the domain layer
use std::fmt::Debug;

/// Trait for value objects - immutable objects defined by their attributes
/// Value objects are equal if all their attributes are equal
pub trait ValueObject: Clone + PartialEq + Eq + Debug {}

/// Trait for entities - objects with identity that can change over time
/// Entities are equal if their IDs are equal, regardless of other attributes
pub trait Entity: Debug {
    type Id: ValueObject;

    fn id(&self) -> &Self::Id;
}

/// Trait for aggregate roots - entities that are the entry point to an aggregate
/// Aggregates ensure consistency boundaries and encapsulate business rules.
/// Mutations record domain events that callers drain after a successful save.
pub trait AggregateRoot: Entity {
    type Event: DomainEvent;

    /// Record an event produced by a state change
    fn record_event(&mut self, event: Self::Event);

    /// Drain all events recorded since the last drain
    fn take_events(&mut self) -> Vec<Self::Event>;
}

/// Trait for domain events - things that have happened in the domain
pub trait DomainEvent: Debug + Clone {
    /// The name/type of the event
    fn event_type(&self) -> &'static str;

    /// The identity of the aggregate the event belongs to
    fn aggregate_id(&self) -> String;
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-specific errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Caller-supplied input violates a precondition
    Validation(String),
    /// Referenced entity does not exist
    NotFound(String),
    /// The repository failed; propagated unchanged
    Persistence(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::Validation(msg) => write!(f, "Validation failed: {}", msg),
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::Persistence(msg) => write!(f, "Persistence failure: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
