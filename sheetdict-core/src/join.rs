//! Join of fields onto their owning tables

use crate::model::{FieldEntry, TableEntry};

/// A table with the fields that belong to it, in field-sheet order
#[derive(Debug, Clone, PartialEq)]
pub struct TableFields<'a> {
    pub table: &'a TableEntry,
    pub fields: Vec<&'a FieldEntry>,
}

impl TableFields<'_> {
    pub fn has_fields(&self) -> bool {
        !self.fields.is_empty()
    }
}

/// Match fields to tables by schema name, ignoring case.
///
/// Every table appears once in original order, including tables with no
/// fields. Tables sharing a schema name each receive the same fields.
pub fn join_fields<'a>(
    tables: &'a [TableEntry],
    fields: &'a [FieldEntry],
) -> Vec<TableFields<'a>> {
    // Fold each owner once rather than per table
    let owners: Vec<String> = fields
        .iter()
        .map(|f| f.owner_entity_logical_name.to_lowercase())
        .collect();

    let joined: Vec<TableFields<'a>> = tables
        .iter()
        .map(|table| {
            let key = table.schema_name.to_lowercase();
            let fields = fields
                .iter()
                .zip(&owners)
                .filter(|(_, owner)| **owner == key)
                .map(|(field, _)| field)
                .collect();
            TableFields { table, fields }
        })
        .collect();

    tracing::debug!(
        "Joined {} fields onto {} tables ({} without fields)",
        fields.len(),
        tables.len(),
        joined.iter().filter(|t| !t.has_fields()).count()
    );

    joined
}
