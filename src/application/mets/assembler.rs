use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::location::normalize_location;
use super::{
    file_dmd_id, file_id, CREATE_DATE_FORMAT, METSRIGHTS_NS, METS_NS, METS_SCHEMA_LOCATION,
    MODS_NS, RIGHTS_MD_ID, ROOT_DIV_ID, SOURCE_MD_ID, WORK_AMD_ID, WORK_DMD_ID, XLINK_NS, XSI_NS,
};
use crate::application::errors::AssemblyError;
use crate::application::ports::{FileDescriptiveRenderer, RepositoryWork, WorkDescriptiveRenderer};
use crate::config::Config;
use crate::domain::entities::WorkFile;
use crate::infrastructure::xml::{Element, XmlDocument};

/// Builds the METS exchange package for a repository work
///
/// Descriptive documents come from the renderer ports and are copied into
/// the package; every build owns its own tree.
pub struct MetsAssembler {
    work_renderer: Arc<dyn WorkDescriptiveRenderer>,
    file_renderer: Arc<dyn FileDescriptiveRenderer>,
    agent_name: String,
    file_uri_prefix: String,
}

impl MetsAssembler {
    pub fn new(
        work_renderer: Arc<dyn WorkDescriptiveRenderer>,
        file_renderer: Arc<dyn FileDescriptiveRenderer>,
        config: &Config,
    ) -> Result<Self, AssemblyError> {
        config.validate().map_err(AssemblyError::InvalidConfig)?;

        Ok(Self {
            work_renderer,
            file_renderer,
            agent_name: config.agent_name.clone(),
            file_uri_prefix: config.file_uri_prefix.clone(),
        })
    }

    /// Assemble with the current time as creation date
    pub fn assemble(&self, work: &dyn RepositoryWork) -> Result<XmlDocument, AssemblyError> {
        self.assemble_at(work, Utc::now())
    }

    pub fn assemble_at(
        &self,
        work: &dyn RepositoryWork,
        created_at: DateTime<Utc>,
    ) -> Result<XmlDocument, AssemblyError> {
        let mut root = self.mets_root(created_at);

        let descriptive = self.work_renderer.render_work(work)?;
        if descriptive.is_none() {
            debug!("Work has no descriptive document; leaving {} empty", WORK_DMD_ID);
        }
        root.push(dmd_sec(WORK_DMD_ID, "MODS", descriptive.as_ref()));
        root.push(amd_sec(work.rights().as_deref(), descriptive.as_ref()));

        let mut file_grp = Element::new("mets:fileGrp");
        let mut root_div = Element::new("mets:div")
            .with_attr("DMDID", WORK_DMD_ID)
            .with_attr("ADMID", WORK_AMD_ID)
            .with_attr("ID", ROOT_DIV_ID)
            .with_attr("LABEL", "Object ID")
            .with_attr("TYPE", "Repository object");

        let files = work.files();
        for (index, file) in files.iter().enumerate() {
            let n = index + 1;
            let dmd_id = file_dmd_id(n);
            let file_id = file_id(n);

            if let Some(document) = self.file_renderer.render_file(file)? {
                root.push(dmd_sec(&dmd_id, "OTHER", Some(&document)));
            }
            file_grp.push(self.file_entry(&file_id, file));
            root_div.push(
                Element::new("mets:div")
                    .with_attr("DMDID", &dmd_id)
                    .with_attr("LABEL", &file_id)
                    .with_attr("TYPE", "Repository file")
                    .with_child(Element::new("mets:fptr").with_attr("FILEID", &file_id)),
            );
        }

        root.push(Element::new("mets:fileSec").with_child(file_grp));
        root.push(
            Element::new("mets:structMap")
                .with_attr("TYPE", "LOGICAL")
                .with_child(root_div),
        );

        info!("Assembled METS package with {} files", files.len());
        Ok(XmlDocument::new(root))
    }

    fn mets_root(&self, created_at: DateTime<Utc>) -> Element {
        let agent = Element::new("mets:agent")
            .with_attr("OTHERTYPE", "SOFTWARE")
            .with_attr("ROLE", "CREATOR")
            .with_attr("TYPE", "OTHER")
            .with_child(Element::new("mets:name").with_text(&self.agent_name))
            .with_child(Element::new("mets:note"));

        Element::new("mets:mets")
            .with_attr("xmlns:mets", METS_NS)
            .with_attr("xmlns:mods", MODS_NS)
            .with_attr("xmlns:metsrights", METSRIGHTS_NS)
            .with_attr("xmlns:xlink", XLINK_NS)
            .with_attr("xmlns:xsi", XSI_NS)
            .with_attr("xsi:schemaLocation", METS_SCHEMA_LOCATION)
            .with_child(
                Element::new("mets:metsHdr")
                    .with_attr(
                        "CREATEDATE",
                        created_at.format(CREATE_DATE_FORMAT).to_string(),
                    )
                    .with_child(agent),
            )
    }

    fn file_entry(&self, file_id: &str, file: &WorkFile) -> Element {
        let mut entry = Element::new("mets:file").with_attr("ID", file_id);
        if let Some(mime_type) = file.known_mime_type() {
            entry.set_attr("MIMETYPE", mime_type);
        }

        let mut locator = Element::new("mets:FLocat").with_attr("LOCTYPE", "URL");
        match file.known_location() {
            Some(location) => {
                locator.set_attr(
                    "xlink:href",
                    normalize_location(location, &self.file_uri_prefix),
                );
            }
            None => debug!("File {} has no resolvable location", file_id),
        }
        entry.with_child(locator)
    }
}

/// `mets:dmdSec` wrapping a copy of `document`, or an empty `xmlData`
fn dmd_sec(id: &str, md_type: &str, document: Option<&XmlDocument>) -> Element {
    Element::new("mets:dmdSec")
        .with_attr("ID", id)
        .with_child(md_wrap(md_type, document))
}

fn md_wrap(md_type: &str, document: Option<&XmlDocument>) -> Element {
    let mut xml_data = Element::new("mets:xmlData");
    if let Some(document) = document {
        xml_data.push(document.import_root());
    }
    Element::new("mets:mdWrap")
        .with_attr("MDTYPE", md_type)
        .with_child(xml_data)
}

fn amd_sec(rights: Option<&str>, descriptive: Option<&XmlDocument>) -> Element {
    let mut declaration = Element::new("metsrights:RightsDeclaration");
    if let Some(rights) = rights.filter(|r| !r.trim().is_empty()) {
        declaration.push_text(rights);
    }

    let rights_wrap = Element::new("mets:mdWrap")
        .with_attr("MDTYPE", "METSRIGHTS")
        .with_child(
            Element::new("mets:xmlData").with_child(
                Element::new("metsrights:RightsDeclarationMD")
                    .with_attr("RIGHTSCATEGORY", "LICENSED")
                    .with_child(declaration),
            ),
        );

    Element::new("mets:amdSec")
        .with_attr("ID", WORK_AMD_ID)
        .with_child(
            Element::new("mets:rightsMD")
                .with_attr("ID", RIGHTS_MD_ID)
                .with_child(rights_wrap),
        )
        .with_child(
            Element::new("mets:sourceMD")
                .with_attr("ID", SOURCE_MD_ID)
                .with_child(md_wrap("MODS", descriptive)),
        )
}
