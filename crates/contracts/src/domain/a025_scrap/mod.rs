pub mod aggregate;

pub use aggregate::Scrap;
