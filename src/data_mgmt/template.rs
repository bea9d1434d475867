use std::collections::HashMap;

use thiserror::Error;

use super::models::Value;
use super::schema::RecordFormat;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("template '{template}' references unknown field '{field}'; check that the record format supports the requested fields")]
    MissingField { field: String, template: String },
    #[error("unbalanced braces in template '{0}'")]
    UnbalancedBraces(String),
}

/// A line-protocol template validated against a record format.
///
/// Placeholders are `{FieldName}`; literal braces can be written as `{{`
/// and `}}`. The trailing newline expected by the InfluxDB write endpoint
/// is appended once at validation time.
#[derive(Debug)]
pub struct LineTemplate {
    text: String,
}

impl LineTemplate {
    /// Validate a template before any data is read, by rendering it against
    /// a synthetic mapping of every field name to its positional index.
    /// Fails naming the missing field, so a malformed template aborts the
    /// run before any I/O.
    pub fn validate(template: &str, format: RecordFormat) -> Result<Self, TemplateError> {
        let synthetic: HashMap<&'static str, Value> = format
            .fields()
            .iter()
            .enumerate()
            .map(|(idx, name)| (*name, Value::Int(idx as i64)))
            .collect();
        render(template, &synthetic)?;

        Ok(LineTemplate {
            text: format!("{template}\n"),
        })
    }

    /// Render one output line. Unknown-field errors cannot occur here since
    /// the template was pre-validated against the same field set.
    pub fn render(&self, fields: &HashMap<&'static str, Value>) -> Result<String, TemplateError> {
        render(&self.text, fields)
    }
}

fn render(template: &str, fields: &HashMap<&'static str, Value>) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(ch) => name.push(ch),
                        None => {
                            return Err(TemplateError::UnbalancedBraces(template.to_string()))
                        }
                    }
                }
                match fields.get(name.as_str()) {
                    Some(value) => out.push_str(&value.to_string()),
                    None => {
                        return Err(TemplateError::MissingField {
                            field: name,
                            template: template.to_string(),
                        })
                    }
                }
            }
            '}' => return Err(TemplateError::UnbalancedBraces(template.to_string())),
            _ => out.push(c),
        }
    }

    Ok(out)
}
