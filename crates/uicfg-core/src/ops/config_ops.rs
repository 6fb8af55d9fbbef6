//! Config store operations
//!
//! Each operation owns its logging boundary: one `start` event, then one
//! `end` or `end_error`. Errors are logged here and returned unchanged;
//! nothing is retried.

use std::time::Instant;

use super::store::ConfigStore;
use crate::errors::ExResult;
use crate::model::{
    AttributeRow, AttributeRowPatch, ButtonConfig, NewAttributeRow, BUTTON_COMPONENT_TYPE,
    DEFAULT_BUTTON_ID,
};
use crate::resolver::resolve_button_config;
use crate::{log_op_end, log_op_error, log_op_start};

pub const OP_CREATE_UI_CONFIG: &str = "create_ui_config";
pub const OP_GET_UI_CONFIG: &str = "get_ui_config";
pub const OP_UPDATE_UI_CONFIG: &str = "update_ui_config";
pub const OP_GET_BUTTON_CONFIG: &str = "get_button_config";

fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

/// Create a new attribute row
///
/// Always inserts, even when a row with the same triple already exists.
///
/// # Errors
/// Propagates the store's `Persistence` error.
pub fn create_ui_config<S>(store: &mut S, input: NewAttributeRow) -> ExResult<AttributeRow>
where
    S: ConfigStore + ?Sized,
{
    let start = Instant::now();
    log_op_start!(
        OP_CREATE_UI_CONFIG,
        component_type = input.component_type.as_str(),
        component_id = input.component_id.as_str(),
        style_property = input.style_property.as_str(),
    );

    match store.insert_row(input) {
        Ok(row) => {
            log_op_end!(
                OP_CREATE_UI_CONFIG,
                duration_ms = elapsed_ms(start),
                row_id = row.id,
                component_id = row.component_id.as_str(),
            );
            Ok(row)
        }
        Err(err) => {
            log_op_error!(OP_CREATE_UI_CONFIG, err.clone(), duration_ms = elapsed_ms(start));
            Err(err)
        }
    }
}

/// List every row for one component instance, in ascending id order
///
/// # Errors
/// Propagates the store's `Persistence` error.
pub fn get_ui_config<S>(
    store: &S,
    component_type: &str,
    component_id: &str,
) -> ExResult<Vec<AttributeRow>>
where
    S: ConfigStore + ?Sized,
{
    let start = Instant::now();
    log_op_start!(
        OP_GET_UI_CONFIG,
        component_type = component_type,
        component_id = component_id,
    );

    match store.rows_for_component(component_type, component_id) {
        Ok(rows) => {
            log_op_end!(
                OP_GET_UI_CONFIG,
                duration_ms = elapsed_ms(start),
                component_id = component_id,
                row_count = rows.len() as u64,
            );
            Ok(rows)
        }
        Err(err) => {
            log_op_error!(
                OP_GET_UI_CONFIG,
                err.clone(),
                duration_ms = elapsed_ms(start),
                component_id = component_id,
            );
            Err(err)
        }
    }
}

/// Update the row with `id`, applying only the fields present in `patch`
///
/// # Errors
/// * `NotFound` - no row has `id`; the store is left unchanged
/// * `Persistence` - the store rejected the write
pub fn update_ui_config<S>(
    store: &mut S,
    id: i64,
    patch: &AttributeRowPatch,
) -> ExResult<AttributeRow>
where
    S: ConfigStore + ?Sized,
{
    let start = Instant::now();
    log_op_start!(OP_UPDATE_UI_CONFIG, row_id = id);

    match store.update_row(id, patch) {
        Ok(row) => {
            log_op_end!(OP_UPDATE_UI_CONFIG, duration_ms = elapsed_ms(start), row_id = id);
            Ok(row)
        }
        Err(err) => {
            log_op_error!(
                OP_UPDATE_UI_CONFIG,
                err.clone(),
                duration_ms = elapsed_ms(start),
                row_id = id,
            );
            Err(err)
        }
    }
}

/// Resolve the configuration of one button
///
/// Reads rows with component type `"button"` and the given id (default
/// `"default-button"`), then folds them over the defaults. Recomputed on
/// every call.
///
/// # Errors
/// Propagates the store's `Persistence` error.
pub fn get_button_config<S>(store: &S, button_id: Option<&str>) -> ExResult<ButtonConfig>
where
    S: ConfigStore + ?Sized,
{
    let button_id = button_id.unwrap_or(DEFAULT_BUTTON_ID);
    let start = Instant::now();
    log_op_start!(OP_GET_BUTTON_CONFIG, component_id = button_id);

    match store.rows_for_component(BUTTON_COMPONENT_TYPE, button_id) {
        Ok(rows) => {
            let config = resolve_button_config(&rows);
            log_op_end!(
                OP_GET_BUTTON_CONFIG,
                duration_ms = elapsed_ms(start),
                component_id = button_id,
                row_count = rows.len() as u64,
            );
            Ok(config)
        }
        Err(err) => {
            log_op_error!(
                OP_GET_BUTTON_CONFIG,
                err.clone(),
                duration_ms = elapsed_ms(start),
                component_id = button_id,
            );
            Err(err)
        }
    }
}
