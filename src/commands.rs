use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{
    adapter::admit,
    cli::Command,
    error::AmenableError,
    signature::{Parameter, ParameterShape, Signature, analyze_signature},
    types::{Call, Kwargs, Value},
};

#[derive(Debug, Clone, Deserialize)]
pub struct SignatureDocument {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl SignatureDocument {
    pub fn signature(&self) -> Signature {
        self.parameters.iter().cloned().collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ShapeReport {
    pub name: Option<String>,
    pub shape: ParameterShape,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdmissionReport {
    pub name: Option<String>,
    pub shape: ParameterShape,
    pub forwarded: Call,
    pub dropped_args: Vec<Value>,
    pub dropped_kwargs: Kwargs,
}

pub fn shape_report(document: &SignatureDocument) -> Result<ShapeReport, AmenableError> {
    Ok(ShapeReport {
        name: document.name.clone(),
        shape: analyze_signature(&document.signature())?,
    })
}

pub fn admission_report(
    document: &SignatureDocument,
    call: &Call,
) -> Result<AdmissionReport, AmenableError> {
    let shape = analyze_signature(&document.signature())?;
    let forwarded = admit(&shape, call);

    let dropped_args = call.args[forwarded.args.len()..].to_vec();
    let dropped_kwargs = call
        .kwargs
        .iter()
        .filter(|(name, _)| !forwarded.kwargs.contains_key(name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();

    Ok(AdmissionReport {
        name: document.name.clone(),
        shape,
        forwarded,
        dropped_args,
        dropped_kwargs,
    })
}

pub async fn run(command: &Command) -> Result<Value> {
    match command {
        Command::Shape { signature_path } => {
            let document: SignatureDocument = read_jsonc(signature_path).await?;
            let report = shape_report(&document)
                .with_context(|| format!("cannot analyze {}", signature_path.display()))?;
            tracing::debug!(
                target: "commands",
                name = ?report.name,
                positional = report.shape.positional_names().len(),
                keywords = report.shape.keyword_names().len(),
                "shape_analyzed"
            );
            serde_json::to_value(report).context("failed to encode shape report")
        }
        Command::Admit {
            signature_path,
            call_path,
        } => {
            let document: SignatureDocument = read_jsonc(signature_path).await?;
            let call: Call = read_jsonc(call_path).await?;
            let report = admission_report(&document, &call)
                .with_context(|| format!("cannot analyze {}", signature_path.display()))?;
            tracing::debug!(
                target: "commands",
                name = ?report.name,
                dropped_args = report.dropped_args.len(),
                dropped_kwargs = report.dropped_kwargs.len(),
                "call_admitted"
            );
            serde_json::to_value(report).context("failed to encode admission report")
        }
    }
}

async fn read_jsonc<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    json5::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
