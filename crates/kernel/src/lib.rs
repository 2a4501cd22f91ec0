//! Shelf Kernel Library
//!
//! Product catalog store and the join/filter/sort query engine that turns
//! users, categories, and products into product list rows. The `shelf`
//! binary is a thin command-line front end over this library.

pub mod catalog;
pub mod config;
pub mod controls;
pub mod error;
pub mod gather;
pub mod models;
pub mod render;
