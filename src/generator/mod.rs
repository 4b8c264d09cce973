mod record_generator;
#[cfg(test)]
mod tests;

pub use record_generator::{GeneratorSettings, RecordGenerator};

pub const DEFAULT_CUSTOMER_ID: &str = "P-0123456789";
/// Amount bounds in cents, both ends inclusive.
pub const MIN_AMOUNT_CENTS: i64 = 10_00;
pub const MAX_AMOUNT_CENTS: i64 = 5_000_00;
