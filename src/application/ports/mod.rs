mod descriptive_renderer;
mod repository_work;

pub use descriptive_renderer::{FileDescriptiveRenderer, RenderError, WorkDescriptiveRenderer};
pub use repository_work::RepositoryWork;

#[cfg(test)]
pub use descriptive_renderer::{MockFileDescriptiveRenderer, MockWorkDescriptiveRenderer};
#[cfg(test)]
pub use repository_work::MockRepositoryWork;
