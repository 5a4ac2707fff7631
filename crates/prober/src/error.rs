use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Failed to write probe output: {0}")]
    Output(#[from] std::io::Error),
}
