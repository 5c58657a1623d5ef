/// Swift types a schema property can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwiftType {
    String,
    Int64,
    Bool,
    Double,
}

impl SwiftType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Int64 => "Int64",
            Self::Bool => "Bool",
            Self::Double => "Double",
        }
    }

    /// The Fluent `DatabaseSchema.DataType` used in migrations.
    pub fn fluent_data_type(&self) -> &'static str {
        match self {
            Self::String => ".string",
            Self::Int64 => ".int64",
            Self::Bool => ".bool",
            Self::Double => ".double",
        }
    }
}

/// Map a schema `type` keyword to its Swift type. Anything unrecognised,
/// including a missing type, falls back to `String`.
pub fn map_type(spec_type: Option<&str>) -> SwiftType {
    match spec_type {
        Some("string") => SwiftType::String,
        Some("integer") => SwiftType::Int64,
        Some("boolean") => SwiftType::Bool,
        Some("number") => SwiftType::Double,
        _ => SwiftType::String,
    }
}
