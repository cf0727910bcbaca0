use thiserror::Error;

#[derive(Error, Debug)]
pub enum CourseplanError {
    #[error("The spreadsheet has no data rows (a header plus at least one row is required)")]
    EmptyInput,

    #[error("No valid course rows found: column A needs a name and column B a positive number of hours")]
    NoValidRows,

    #[error("Unsupported file type: {0} (expected an .xlsx workbook)")]
    UnsupportedFileType(String),

    #[error("Failed to read file: {0}")]
    FileRead(std::io::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("A course cannot be its own prerequisite: {0}")]
    SelfPrerequisite(String),

    #[error("Prerequisite course not found: {0}")]
    UnknownPrerequisite(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Storage(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CourseplanError>;
