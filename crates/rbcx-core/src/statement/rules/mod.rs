//! Rule-based field parsers for statement rows.

pub mod amounts;
pub mod dates;
pub mod patterns;

pub use amounts::parse_amount;
pub use dates::DateParser;
pub use patterns::*;
