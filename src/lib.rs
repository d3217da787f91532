// src/lib.rs

pub mod config;
pub mod domain;
pub mod error;
pub mod io;
pub mod lifecycle;
pub mod views;
pub mod workspace;

#[cfg(test)]
mod test_utils;
