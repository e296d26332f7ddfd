// This file makes the screen modules available to the rest of the application.

pub mod chart;
pub mod coin;
pub mod coins;
pub mod price;
