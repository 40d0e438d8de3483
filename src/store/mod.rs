//! Persistence layer: single-statement operations against the shared
//! `SqlitePool`. Handlers receive the pool through `web::Data` and pass it
//! down explicitly; there is no module-global connection handle.

pub mod tasks;
pub mod users;
