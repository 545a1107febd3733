//! METS compound document assembly

mod assembler;
mod location;

pub use assembler::MetsAssembler;
pub use location::{has_url_scheme, normalize_location};

pub const METS_NS: &str = "http://www.loc.gov/METS/";
pub const MODS_NS: &str = "http://www.loc.gov/mods/v3";
pub const METSRIGHTS_NS: &str = "http://cosimo.stanford.edu/sdr/metsrights/";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
pub const METS_SCHEMA_LOCATION: &str =
    "http://www.loc.gov/METS/ http://www.loc.gov/standards/mets/mets.xsd";

/// `mets:metsHdr` CREATEDATE format
pub const CREATE_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub const WORK_DMD_ID: &str = "DMDLOG_0000";
pub const WORK_AMD_ID: &str = "AMDLOG_0000";
pub const RIGHTS_MD_ID: &str = "RIGHTSMD_01";
pub const SOURCE_MD_ID: &str = "SOURCEMD_01";
pub const ROOT_DIV_ID: &str = "LOG_0000";

/// `mets:file` id for the `n`th file (1-based)
pub fn file_id(n: usize) -> String {
    format!("FILENAME{}", n)
}

/// Per-file `mets:dmdSec` id for the `n`th file (1-based)
pub fn file_dmd_id(n: usize) -> String {
    format!("DMDFILE{:03}", n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_ids() {
        assert_eq!(file_id(1), "FILENAME1");
        assert_eq!(file_id(12), "FILENAME12");
        assert_eq!(file_dmd_id(3), "DMDFILE003");
        assert_eq!(file_dmd_id(1000), "DMDFILE1000");
    }
}
