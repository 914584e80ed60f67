//! Routes a schema-tagged record to its specialized renderer, or to the
//! generic structural renderer when the schema is unknown. Total over
//! every possible tag; the only error channel is the nesting guard.

use log::debug;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::generic::{render_record, StructuralError};
use super::output::{Block, RenderedSection, Theme};
use super::sections;
use crate::analysis::schema::SchemaType;
use crate::analysis::AnalysisRecord;

pub fn dispatch(
    schema: &SchemaType,
    record: &AnalysisRecord,
    sub_section_name: &str,
) -> Result<RenderedSection, StructuralError> {
    let theme = Theme::from(schema);
    match schema {
        SchemaType::Business => typed(record, sub_section_name, theme, sections::business::render),
        SchemaType::RiskFactors => {
            typed(record, sub_section_name, theme, sections::risk_factors::render)
        }
        SchemaType::ManagementDiscussion => {
            typed(record, sub_section_name, theme, sections::management::render)
        }
        SchemaType::BalanceSheet => {
            typed(record, sub_section_name, theme, sections::balance_sheet::render)
        }
        SchemaType::IncomeStatement => typed(
            record,
            sub_section_name,
            theme,
            sections::income_statement::render,
        ),
        SchemaType::CashFlow => typed(record, sub_section_name, theme, sections::cash_flow::render),
        SchemaType::Unknown(tag) => {
            debug!(
                "no specialized renderer for schema `{}`, rendering `{}` generically",
                tag, sub_section_name
            );
            generic_section(record, sub_section_name, theme)
        }
    }
}

/// Deserializes the record into its declared shape and renders it. A record
/// that does not fit its own schema is rendered generically instead; the
/// declared theme is kept as the style hint.
fn typed<T, F>(
    record: &AnalysisRecord,
    name: &str,
    theme: Theme,
    render: F,
) -> Result<RenderedSection, StructuralError>
where
    T: DeserializeOwned,
    F: Fn(&T) -> Vec<Block>,
{
    match serde_json::from_value::<T>(Value::Object(record.clone())) {
        Ok(typed_record) => Ok(RenderedSection {
            title: name.to_string(),
            theme,
            blocks: render(&typed_record),
        }),
        Err(err) => {
            debug!(
                "record for `{}` does not match its declared schema ({}), rendering generically",
                name, err
            );
            generic_section(record, name, theme)
        }
    }
}

fn generic_section(
    record: &AnalysisRecord,
    name: &str,
    theme: Theme,
) -> Result<RenderedSection, StructuralError> {
    Ok(RenderedSection {
        title: name.to_string(),
        theme,
        blocks: render_record(record, 0)?,
    })
}
