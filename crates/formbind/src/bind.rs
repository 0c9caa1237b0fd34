use crate::{epoch, Config, Filter};
use formbind_core::{stmt::ValueMap, Record, Result};
use log::{debug, trace};

/// Writes form output back into `record`.
///
/// Only eligible fields are written. Date and time fields decode numeric
/// values from seconds since the epoch; every other value is handed to the
/// record's setter unchanged. Fields absent from `data` are left untouched,
/// and entries naming unknown or filtered-out fields are ignored. Nothing is
/// persisted.
///
/// All values are decoded before the first assignment. If decoding or any
/// setter fails, fields already written are restored to their previous
/// values before the error is returned, so a failed bind leaves the record
/// unchanged.
pub(crate) fn bind<R>(
    config: &Config,
    record: &mut R,
    data: &ValueMap,
    expose_audit_fields: bool,
) -> Result<()>
where
    R: Record + ?Sized,
{
    let filter = Filter::new(config, expose_audit_fields);
    let model = record.model();

    let mut assignments = Vec::with_capacity(data.len());

    for field in filter.eligible(model) {
        let Some(value) = data.get(&field.name) else {
            continue;
        };

        let value = if field.is_date_time() && !value.is_null() {
            epoch::decode(value.clone())?
        } else {
            value.clone()
        };

        assignments.push((field.name.clone(), value));
    }

    if log::log_enabled!(log::Level::Trace) {
        for key in data.keys() {
            if !assignments.iter().any(|(name, _)| name == key) {
                trace!(
                    "ignoring form value for `{key}` on model `{}`",
                    model.display_name()
                );
            }
        }
    }

    let previous = assignments
        .iter()
        .map(|(name, _)| record.get(name))
        .collect::<Result<Vec<_>>>()?;

    for (i, (name, value)) in assignments.iter().enumerate() {
        debug!("binding form value to field `{name}`");

        if let Err(err) = record.set(name, value.clone()) {
            for ((name, _), value) in assignments[..i].iter().zip(&previous).rev() {
                trace!("restoring field `{name}` after failed bind");
                record.set(name, value.clone())?;
            }
            return Err(err);
        }
    }

    Ok(())
}
