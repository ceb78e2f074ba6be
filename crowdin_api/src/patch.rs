//! JSON-Patch-like partial updates: `[{"op", "path", "value"}, ...]`.

use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::Error;

/// Accepted patch operation names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Replace,
    Remove,
    Test,
}

impl PatchOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatchOp::Add => "add",
            PatchOp::Replace => "replace",
            PatchOp::Remove => "remove",
            PatchOp::Test => "test",
        }
    }
}

impl fmt::Display for PatchOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatchOp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(PatchOp::Add),
            "replace" => Ok(PatchOp::Replace),
            "remove" => Ok(PatchOp::Remove),
            "test" => Ok(PatchOp::Test),
            _ => Err(Error::InvalidPatchOp { op: s.to_string() }),
        }
    }
}

impl Serialize for PatchOp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One instruction of a partial update. `path` is an RFC 6901 JSON Pointer
/// such as `/name` or `/targetLanguageIds/0`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    #[serde(default)]
    pub value: Option<Value>,
}

impl PatchOperation {
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(PatchOp::Add, path, value)
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(PatchOp::Replace, path, value)
    }

    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::with_value(PatchOp::Test, path, value)
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOp::Remove,
            path: path.into(),
            value: None,
        }
    }

    /// Builds an operation from an untyped name, rejecting unknown names.
    pub fn parse(op: &str, path: impl Into<String>, value: Option<Value>) -> Result<Self, Error> {
        Ok(Self {
            op: op.parse()?,
            path: path.into(),
            value,
        })
    }

    fn with_value(op: PatchOp, path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op,
            path: path.into(),
            value: Some(value.into()),
        }
    }
}

impl Serialize for PatchOperation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = match self.op {
            PatchOp::Remove => None,
            _ => self.value.as_ref(),
        };
        let len = if value.is_some() { 3 } else { 2 };
        let mut state = serializer.serialize_struct("PatchOperation", len)?;
        state.serialize_field("op", &self.op)?;
        state.serialize_field("path", &self.path)?;
        if let Some(value) = value {
            state.serialize_field("value", value)?;
        }
        state.end()
    }
}

/// Serializes a partial-update body, preserving operation order.
///
/// Fails with [`Error::EmptyPatch`] when there is nothing to apply.
pub fn build_patch_body(operations: &[PatchOperation]) -> Result<Vec<u8>, Error> {
    if operations.is_empty() {
        return Err(Error::EmptyPatch);
    }
    serde_json::to_vec(operations).map_err(Error::Encode)
}
