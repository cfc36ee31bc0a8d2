pub mod db;
mod descriptions;
mod images;
mod links;
pub mod models;
mod tables;

pub use db::{Database, DatabaseError};
pub use tables::*;
