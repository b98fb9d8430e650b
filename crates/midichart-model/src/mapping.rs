use serde::{Deserialize, Serialize};

/// One parameter-to-control-change pair extracted from the input header.
///
/// Both fields hold the raw captured text. The CC value is deliberately
/// kept opaque instead of being parsed as a number, so non-decimal
/// declarations survive the trip to the rendered chart unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    /// Parameter name, without the `PARAM_MC_` prefix.
    pub param: String,
    /// Control-change value as written in the source.
    pub cc: String,
}

impl Mapping {
    pub fn new(param: impl Into<String>, cc: impl Into<String>) -> Self {
        Self {
            param: param.into(),
            cc: cc.into(),
        }
    }
}

/// An ordered collection of mappings.
///
/// Insertion order equals the order the matching lines appeared in the
/// input and determines the output row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chart {
    pub mappings: Vec<Mapping>,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mapping: Mapping) {
        self.mappings.push(mapping);
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}
