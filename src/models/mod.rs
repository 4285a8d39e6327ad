pub mod decklist;

pub use decklist::*;
