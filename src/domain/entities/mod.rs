mod attribute_tree;
mod work_file;

pub use attribute_tree::{AttributeTree, Attributes};
pub use work_file::WorkFile;
