use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate catalog code: {code}")]
    DuplicateCode { code: String },

    #[error("blank code in catalog entry or reference")]
    BlankCode,

    #[error("unknown catalog code requested: {code}")]
    UnknownCode { code: String },
}
