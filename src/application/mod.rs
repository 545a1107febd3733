pub mod crosswalk;
pub mod dto;
pub mod errors;
pub mod mets;
pub mod ports;
pub mod use_cases;
