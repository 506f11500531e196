use crate::error::CliError;
use mongo_filter::{CompiledFilter, Operator, Template, template::slot_count};
use serde::Serialize;
use std::collections::BTreeSet;

#[derive(Debug, Serialize)]
pub struct OperatorInfo {
    pub name: &'static str,
    pub supported: bool,
    /// Accepted argument counts; empty when not implemented.
    pub arities: Vec<usize>,
}

pub fn operator_catalogue() -> Vec<OperatorInfo> {
    Operator::ALL
        .iter()
        .map(|op| {
            let arities: BTreeSet<usize> = (0..=3)
                .filter_map(|arity| match op.template(arity) {
                    Template::Slots(text) => Some(slot_count(text)),
                    Template::Unsupported => None,
                })
                .collect();

            OperatorInfo {
                name: op.name(),
                supported: op.is_supported(),
                arities: arities.into_iter().collect(),
            }
        })
        .collect()
}

pub fn render_compiled(compiled: &CompiledFilter, json: bool) -> Result<String, CliError> {
    if json {
        return serde_json::to_string_pretty(compiled).map_err(CliError::JsonSerialize);
    }

    let mut out = compiled.fragment.to_string();
    for (i, param) in compiled.params.iter().enumerate() {
        out.push_str(&format!("\n@p{} = {} ({})", i + 1, param.value, param.kind));
    }
    Ok(out)
}

pub fn render_operators(json: bool) -> Result<String, CliError> {
    let catalogue = operator_catalogue();
    if json {
        return serde_json::to_string_pretty(&catalogue).map_err(CliError::JsonSerialize);
    }

    let lines: Vec<String> = catalogue
        .iter()
        .map(|info| {
            let status = if info.supported {
                let arities: Vec<String> = info.arities.iter().map(|a| a.to_string()).collect();
                format!("supported ({} args)", arities.join(" or "))
            } else {
                "not implemented".to_string()
            };
            format!("{:<20}{}", info.name, status)
        })
        .collect();
    Ok(lines.join("\n"))
}
