use serde::{Deserialize, Serialize};

/// Column data types supported by the data dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DataType {
    Int,
    Bigint,
    Smallint,
    Varchar,
    Char,
    Text,
    Boolean,
    Date,
    Time,
    Timestamp,
    Decimal,
    Float,
    Double,
}

impl DataType {
    /// All types, in dictionary-editor order.
    pub const ALL: [DataType; 13] = [
        DataType::Int,
        DataType::Bigint,
        DataType::Smallint,
        DataType::Varchar,
        DataType::Char,
        DataType::Text,
        DataType::Boolean,
        DataType::Date,
        DataType::Time,
        DataType::Timestamp,
        DataType::Decimal,
        DataType::Float,
        DataType::Double,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Int => "INT",
            DataType::Bigint => "BIGINT",
            DataType::Smallint => "SMALLINT",
            DataType::Varchar => "VARCHAR",
            DataType::Char => "CHAR",
            DataType::Text => "TEXT",
            DataType::Boolean => "BOOLEAN",
            DataType::Date => "DATE",
            DataType::Time => "TIME",
            DataType::Timestamp => "TIMESTAMP",
            DataType::Decimal => "DECIMAL",
            DataType::Float => "FLOAT",
            DataType::Double => "DOUBLE",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.as_str() == s)
    }

    /// Whether the type takes a `(size)` suffix in DDL.
    pub fn takes_size(&self) -> bool {
        matches!(self, DataType::Varchar | DataType::Char | DataType::Decimal)
    }
}

impl std::fmt::Display for DataType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An attribute of an entity, an association, or the dictionary.
///
/// Attributes are plain values: they are owned by exactly one container
/// and carry no identity beyond their content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub data_type: DataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(default)]
    pub is_primary_key: bool,
}

impl Attribute {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
            size: None,
            is_primary_key: false,
        }
    }

    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn primary_key(mut self) -> Self {
        self.is_primary_key = true;
        self
    }

    /// SQL spelling of the type, with the size suffix when applicable.
    pub fn sql_type(&self) -> String {
        match self.size {
            Some(size) if self.data_type.takes_size() => {
                format!("{}({})", self.data_type, size)
            }
            _ => self.data_type.to_string(),
        }
    }
}
