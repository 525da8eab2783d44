use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("duplicate vehicle id {0} in manifest")]
    DuplicateVehicleId(u32),
}

pub type SimResult<T> = Result<T, SimError>;
