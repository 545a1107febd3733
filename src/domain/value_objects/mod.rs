mod deposit_document;
mod file_metadata_record;
mod group;
mod work_model;

pub use deposit_document::{DepositDocument, Record};
pub use file_metadata_record::FileMetadataRecord;
pub use group::{Cardinality, Group};
pub use work_model::WorkModel;
