use crate::shifting::ShiftStatus;

#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("record not found: {0}")]
    NotFound(String),
    #[error("a shifting request, once {}, cannot be updated", status.label().to_lowercase())]
    TerminalStatus { status: ShiftStatus },
    #[error("unknown shifting status: {0}")]
    UnknownStatus(String),
    #[error("failed to read record file: {0}")]
    FileRead(std::io::Error),
    #[error("failed to write record file: {0}")]
    FileWrite(std::io::Error),
    #[error("failed to delete record file: {0}")]
    FileDelete(std::io::Error),
    #[error("failed to create record directory: {0}")]
    DirCreation(std::io::Error),
    #[error("failed to serialise record: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialise record: {0}")]
    Deserialization(serde_json::Error),
    #[error("failed to deserialise configuration: {0}")]
    YamlDeserialization(serde_yaml::Error),
}

pub type RecordResult<T> = std::result::Result<T, RecordError>;
