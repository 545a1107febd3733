pub mod export_work;
pub mod map_deposit;

pub use export_work::ExportWorkUseCase;
pub use map_deposit::MapDepositUseCase;
