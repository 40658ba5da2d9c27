// SQLite reference adapter over rusqlite.
//
// - adapter: connection lifecycle, statement execution, transactions
// - params: conversion from facade values to rusqlite named parameters
// - query: result-set extraction

mod adapter;
mod params;
mod query;

pub use adapter::SqliteAdapter;
pub use params::{SqliteParams, row_value_to_sqlite_value};
pub use query::build_result_set;
