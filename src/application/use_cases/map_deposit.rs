use tracing::info;

use crate::application::crosswalk::AttributeCrosswalk;
use crate::application::dto::{MapDepositRequest, MapDepositResponse, MappedFileDto};
use crate::application::errors::CrosswalkError;
use crate::config::Config;
use crate::domain::value_objects::WorkModel;

/// Use case: map a deposit and its files into model attributes
pub struct MapDepositUseCase {
    config: Config,
}

impl MapDepositUseCase {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn execute(&self, request: MapDepositRequest) -> Result<MapDepositResponse, CrosswalkError> {
        let model = match request.model.as_deref() {
            Some(model) => model.parse::<WorkModel>()?,
            None => WorkModel::default(),
        };
        let crosswalk = AttributeCrosswalk::new(model);

        let attributes = crosswalk.map(&request.metadata)?;
        let files: Vec<MappedFileDto> = crosswalk
            .map_files(&request.files)?
            .into_iter()
            .map(|mapped| MappedFileDto::from_mapped(mapped, &self.config))
            .collect();

        info!(
            "Mapped {} deposit with {} file metadata records",
            crosswalk.model(),
            files.len()
        );

        Ok(MapDepositResponse {
            model: crosswalk.model().to_string(),
            attributes,
            files,
        })
    }
}
