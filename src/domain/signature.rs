//! Chain signature inference.

use serde::{Deserialize, Serialize};

use crate::domain::chain::PromptChain;

/// A single named, typed column in a chain signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    #[serde(rename = "type")]
    pub column_type: String,
    pub name: String,
}

impl ColumnSpec {
    fn string(name: &str) -> Self {
        Self { column_type: "string".to_string(), name: name.to_string() }
    }
}

/// Input/output signature recorded alongside a logged chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainSignature {
    pub inputs: Vec<ColumnSpec>,
    pub outputs: Vec<ColumnSpec>,
}

impl ChainSignature {
    /// Derive a signature from a chain: one string input column per template
    /// variable, one string output column named by the chain's output key.
    pub fn infer(chain: &PromptChain) -> Self {
        Self {
            inputs: vec![ColumnSpec::string(chain.template().input_variable())],
            outputs: vec![ColumnSpec::string(chain.output_key())],
        }
    }
}
