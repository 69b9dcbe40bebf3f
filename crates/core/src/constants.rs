/// Constants used throughout the outcome crates
// Error codes
pub const DEFAULT_ERROR_CODE: &str = "0";

// Collection projections of child codes and messages
pub const COLLECTION_OPEN: &str = "[";
pub const COLLECTION_CLOSE: &str = "]";
pub const COLLECTION_SEPARATOR: &str = ", ";

// Aggregate fault banner
pub const AGGREGATE_FAULT_MESSAGE: &str = "one or more faults occurred";

// Panic payloads that are neither `&str` nor `String`
pub const UNKNOWN_PANIC_MESSAGE: &str = "panic with a non-string payload";
