//! Form payload export and restore.
//!
//! A payload is the ordered list of `(param, values)` pairs a page submits:
//! one pair per category, values in selection order. The query-string form
//! joins values with the configured separator and form-urlencodes the pairs
//! (`regions=North+America%2CEurope&languages=English`).

use serde::Serialize;
use tracing::warn;
use url::form_urlencoded;

use super::transfer::CategoryReset;
use super::{ExportError, Selection};
use crate::catalog::ItemId;
use crate::config::types::{ExportConfig, ExportField};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub param: String,
    pub values: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormPayload {
    fields: Vec<FormField>,
}

impl FormPayload {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn get(&self, param: &str) -> Option<&[String]> {
        self.fields
            .iter()
            .find(|field| field.param == param)
            .map(|field| field.values.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_query_string(&self, separator: &str) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for field in &self.fields {
            serializer.append_pair(&field.param, &field.values.join(separator));
        }
        serializer.finish()
    }

    /// Parse a query string produced by [`FormPayload::to_query_string`].
    ///
    /// A leading `?` is ignored. Empty values are dropped; a repeated
    /// parameter keeps its first occurrence.
    pub fn parse_query(query: &str, separator: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut fields: Vec<FormField> = Vec::new();

        for (param, value) in form_urlencoded::parse(query.as_bytes()) {
            if fields.iter().any(|field| field.param.as_str() == &*param) {
                continue;
            }
            let values = value
                .split(separator)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect();
            fields.push(FormField {
                param: param.into_owned(),
                values,
            });
        }

        Self { fields }
    }
}

impl Selection {
    /// Export the current selection.
    ///
    /// Categories with nothing selected are omitted unless they declare a
    /// fallback value.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::SeparatorInValue`] if an exported value contains
    /// the separator, since the payload could not be restored unambiguously.
    pub fn export(&self, config: &ExportConfig) -> Result<FormPayload, ExportError> {
        let mut fields = Vec::new();

        for category in self.catalog.categories() {
            let Some(state) = self.states.get(category.id()) else {
                continue;
            };

            let mut values: Vec<String> = state
                .pair
                .selected()
                .filter_map(|id| category.item(id.as_str()))
                .map(|item| match config.field() {
                    ExportField::Labels => item.label().to_string(),
                    ExportField::Ids => item.id().to_string(),
                })
                .collect();

            if values.is_empty() {
                match category.fallback() {
                    Some(fallback) => values.push(fallback.to_string()),
                    None => continue,
                }
            }

            if let Some(value) = values.iter().find(|v| v.contains(config.separator())) {
                return Err(ExportError::SeparatorInValue {
                    param: category.param().to_string(),
                    value: value.clone(),
                    separator: config.separator().to_string(),
                });
            }

            fields.push(FormField {
                param: category.param().to_string(),
                values,
            });
        }

        Ok(FormPayload::new(fields))
    }

    /// Replace the whole selection with the contents of `payload`.
    ///
    /// Every category is restored: categories missing from the payload end up
    /// with an empty selection. Unknown parameters and values are logged and
    /// skipped. Queries are left untouched.
    ///
    /// An empty category exports its `fallback`, and the payload does not
    /// record whether a value came from there. A fallback value that names an
    /// item restores as that item being selected; one that names no item is
    /// skipped without a warning and leaves the category empty.
    pub fn restore_payload(&mut self, payload: &FormPayload, field: ExportField) -> Vec<CategoryReset> {
        for unknown in payload
            .fields()
            .iter()
            .filter(|f| self.catalog.category_by_param(&f.param).is_none())
        {
            warn!(
                event = "core.export.unknown_param_skipped",
                param = %unknown.param
            );
        }

        let plan: Vec<(String, Vec<ItemId>)> = self
            .catalog
            .categories()
            .map(|category| {
                let values = payload.get(category.param()).unwrap_or_default();
                let ids = values
                    .iter()
                    .filter_map(|value| match field {
                        ExportField::Ids => Some(ItemId::new(value.as_str())),
                        ExportField::Labels => {
                            let found = category.item_by_label(value).map(|item| item.id().clone());
                            if found.is_none() && category.fallback() != Some(value.as_str()) {
                                warn!(
                                    event = "core.export.unknown_label_skipped",
                                    category = %category.id(),
                                    label = %value
                                );
                            }
                            found
                        }
                    })
                    .collect();
                (category.id().to_string(), ids)
            })
            .collect();

        plan.into_iter()
            .filter_map(|(category, ids)| self.restore(&category, &ids).ok())
            .filter(|reset| !reset.is_empty())
            .collect()
    }
}
