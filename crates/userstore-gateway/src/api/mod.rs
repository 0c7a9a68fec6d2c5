//! JSON API over the record store.

pub mod users;
