pub mod db;
pub mod models;
pub mod repos;
pub mod seed;
pub mod store;

pub use store::{MemStore, PgStore, Store, StoreError, StoreResult};
