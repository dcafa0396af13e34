pub mod sqlite;

use crate::models::Booking;

pub use sqlite::SqliteStore;

/// Store key for the serialized booking list. The schema version lives in
/// the key: adding fields to the record means bumping to `bookings_v2` and
/// migrating on load.
pub const STORE_KEY: &str = "bookings_v1";

/// The single named entry holding all bookings. The whole set is replaced on
/// every write (read-modify-write of one document), which is what keeps the
/// backend swappable for a real database later.
pub trait BookingStore: Send {
    fn load(&self) -> anyhow::Result<Vec<Booking>>;
    fn replace(&mut self, bookings: &[Booking]) -> anyhow::Result<()>;
}
