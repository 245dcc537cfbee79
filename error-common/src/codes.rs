// Error codes implementation
// This module contains standardized error codes for the Transport Engine

pub mod validation {
    pub const INVALID_INPUT: &str = "VALIDATION_1000";
    pub const TYPE_MISMATCH: &str = "VALIDATION_1001";
    pub const DOMAIN_VIOLATION: &str = "VALIDATION_1002";
    pub const CROSS_FIELD_VIOLATION: &str = "VALIDATION_1003";
    pub const UNKNOWN_FIELD: &str = "VALIDATION_1004";
    pub const INVALID_FORMAT: &str = "VALIDATION_1005";
}

pub mod configuration {
    pub const LOAD_FAILED: &str = "CONFIG_2001";
}

pub mod internal {
    pub const PRECONDITION_VIOLATION: &str = "INTERNAL_9001";
    pub const UNEXPECTED: &str = "INTERNAL_9999";
}
