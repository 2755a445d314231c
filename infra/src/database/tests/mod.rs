//! Unit tests for the database layer

mod connection_tests;
mod manager_tests;
