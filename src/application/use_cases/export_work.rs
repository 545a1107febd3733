use std::sync::Arc;

use crate::application::errors::AssemblyError;
use crate::application::mets::MetsAssembler;
use crate::application::ports::RepositoryWork;

/// Use case: export a repository work as a METS XML string
pub struct ExportWorkUseCase {
    assembler: Arc<MetsAssembler>,
}

impl ExportWorkUseCase {
    pub fn new(assembler: Arc<MetsAssembler>) -> Self {
        Self { assembler }
    }

    pub fn execute(&self, work: &dyn RepositoryWork) -> Result<String, AssemblyError> {
        let document = self.assembler.assemble(work)?;
        Ok(document.to_xml_string()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{
        MockFileDescriptiveRenderer, MockRepositoryWork, MockWorkDescriptiveRenderer,
    };
    use crate::config::Config;
    use crate::domain::entities::WorkFile;

    #[test]
    fn test_execute_writes_xml() {
        let mut work_renderer = MockWorkDescriptiveRenderer::new();
        work_renderer.expect_render_work().returning(|_| Ok(None));
        let mut file_renderer = MockFileDescriptiveRenderer::new();
        file_renderer.expect_render_file().returning(|_| Ok(None));
        let assembler = MetsAssembler::new(
            Arc::new(work_renderer),
            Arc::new(file_renderer),
            &Config::default(),
        )
        .unwrap();

        let mut work = MockRepositoryWork::new();
        work.expect_files()
            .returning(|| vec![WorkFile::new("f").with_location("x & y.pdf")]);
        work.expect_rights().returning(|| Some("Rights <reserved>".to_string()));

        let xml = ExportWorkUseCase::new(Arc::new(assembler))
            .execute(&work)
            .unwrap();

        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains(r#"xlink:href="file:///x &amp; y.pdf""#));
        assert!(xml.contains("Rights &lt;reserved&gt;"));
        assert!(xml.contains(r#"ID="FILENAME1""#));
    }
}
