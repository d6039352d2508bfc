//! PostgreSQL adapters - Database implementations of the reader and
//! repository ports.
//!
//! Each adapter wraps a `PgPool` and issues runtime-checked queries with
//! explicit row structs, converting rows to domain types via `TryFrom`.

mod essay_reader;
mod essay_repository;
mod event_reader;
mod membership_reader;
mod package_reader;
mod product_reader;
mod rsvp_repository;

pub use essay_reader::PostgresEssayReader;
pub use essay_repository::PostgresEssayRepository;
pub use event_reader::PostgresEventReader;
pub use membership_reader::PostgresMembershipReader;
pub use package_reader::PostgresPackageReader;
pub use product_reader::PostgresProductReader;
pub use rsvp_repository::PostgresRsvpRepository;
