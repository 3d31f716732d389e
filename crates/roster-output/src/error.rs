use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while encoding the output workbook.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("nothing to write: the batch produced no sheets")]
    NoSheets,

    #[error("failed to encode workbook {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;
