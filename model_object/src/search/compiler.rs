//! Descriptor compilation
//!
//! Turns a [`Lookup`] into an executable [`Statement`] against one table.

use std::sync::Arc;

use crate::errors::ModelError;
use crate::naming::to_storage_name;
use crate::query_builder::{Condition, Statement, Table};
use crate::search::descriptor::Lookup;

/// Compile `lookup` onto `start`, or onto a full-row select when no start is given.
///
/// Every filter and order field is translated to storage convention and must name a declared
/// column. Filters are ANDed in descriptor order. No ordering is added when none is asked for.
pub fn compile(
    table: &Arc<Table>,
    lookup: Lookup,
    start: Option<Statement>,
) -> Result<Statement, ModelError> {
    let search = lookup.into_search()?;
    let mut statement = start.unwrap_or_else(|| Statement::select(Arc::clone(table)));

    for filter in search.filters {
        let column = resolve_column(table, &filter.field)?;
        statement = statement.filter(Condition::new(column, filter.operator, filter.value)?);
    }

    for (field, order) in search.order {
        let column = resolve_column(table, &field)?;
        statement = statement.order_by(column, order);
    }

    if let Some(limit) = search.limit {
        if limit == 0 {
            return Err(ModelError::InvalidDescriptor(
                "limit must be a positive integer".to_string(),
            ));
        }
        statement = statement.limit(limit);
    }

    Ok(statement)
}

fn resolve_column<'t>(table: &'t Table, field: &str) -> Result<&'t str, ModelError> {
    let snaked = to_storage_name(field);
    table
        .column(&snaked)
        .ok_or_else(|| ModelError::unknown_column(snaked))
}
