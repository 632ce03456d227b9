/// Data layer: core types, loading, filtering and writing.
///
/// Architecture:
/// ```text
///  customers.txt (one JSON object per line)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse lines → Vec<Customer>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  haversine distance ≤ threshold → Vec<Invitation>, sort by id
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  "<user_id> <name>" per line → guestlist.txt
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
