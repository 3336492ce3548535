use std::path::PathBuf;

use anyhow::{Result, anyhow};

const USAGE: &str = "usage: amenable [--config <path>] shape <signature-file> | admit <signature-file> <call-file>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Shape {
        signature_path: PathBuf,
    },
    Admit {
        signature_path: PathBuf,
        call_path: PathBuf,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: Option<PathBuf>,
    pub command: Command,
}

pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs> {
    let mut args = args.into_iter();
    let mut config_path = None;
    let mut positionals = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| anyhow!("missing value for --config. {USAGE}"))?;
                config_path = Some(PathBuf::from(value));
            }
            other if other.starts_with("--") => {
                return Err(anyhow!("unknown argument: {other}. {USAGE}"));
            }
            _ => positionals.push(arg),
        }
    }

    let mut positionals = positionals.into_iter();
    let command = match positionals.next().as_deref() {
        Some("shape") => Command::Shape {
            signature_path: next_path(&mut positionals, "signature-file")?,
        },
        Some("admit") => Command::Admit {
            signature_path: next_path(&mut positionals, "signature-file")?,
            call_path: next_path(&mut positionals, "call-file")?,
        },
        Some(other) => return Err(anyhow!("unknown command: {other}. {USAGE}")),
        None => return Err(anyhow!("missing command. {USAGE}")),
    };

    if let Some(extra) = positionals.next() {
        return Err(anyhow!("unexpected argument: {extra}. {USAGE}"));
    }

    Ok(CliArgs {
        config_path,
        command,
    })
}

fn next_path(positionals: &mut impl Iterator<Item = String>, label: &str) -> Result<PathBuf> {
    positionals
        .next()
        .map(PathBuf::from)
        .ok_or_else(|| anyhow!("missing <{label}>. {USAGE}"))
}
