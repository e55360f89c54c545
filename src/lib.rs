pub mod arith;
pub mod config;
pub mod demo;
pub mod error;
pub mod greeting;
pub mod ledger;
pub mod output;

pub use arith::{add, multiply, subtract};
pub use greeting::greet;
