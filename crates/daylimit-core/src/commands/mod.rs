pub mod calories;
pub mod cash;
pub mod common;
pub mod currencies;
pub mod demo;
