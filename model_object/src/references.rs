//! Relation expansion
//!
//! After a row is materialized every declared [`Reference`] is looked up on its target model
//! and attached to the instance under the relation name. Lookups for one instance run
//! concurrently.

use futures::future::{try_join_all, BoxFuture};
use serde_json::Value;

use crate::errors::ModelError;
use crate::instance::Instance;
use crate::model::Model;
use crate::schema::Reference;
use crate::search::Lookup;

/// Resolve every reference `model` declares onto `instance`.
///
/// A null key resolves to `None` without a lookup, as does a key no target row matches. A key
/// the instance does not carry at all is [`ModelError::MissingForeignKey`].
pub(crate) fn expand<'a>(
    model: &'a Model,
    mut instance: Instance,
) -> BoxFuture<'a, Result<Instance, ModelError>> {
    Box::pin(async move {
        let references = model.references();
        if references.is_empty() {
            return Ok(instance);
        }

        let mut pending = Vec::with_capacity(references.len());
        for (name, reference) in references {
            let key = instance.get(&reference.key).cloned().ok_or_else(|| {
                ModelError::MissingForeignKey {
                    reference: name.clone(),
                    key: reference.key.clone(),
                }
            })?;
            pending.push(resolve(name, reference, key));
        }

        for (name, related) in try_join_all(pending).await? {
            instance.set_related(name, related);
        }

        Ok(instance)
    })
}

async fn resolve(
    name: &str,
    reference: &Reference,
    key: Value,
) -> Result<(String, Option<Instance>), ModelError> {
    if key.is_null() {
        return Ok((name.to_string(), None));
    }

    let related = reference.model.find_one(Lookup::Id(key)).await?;
    Ok((name.to_string(), related))
}
