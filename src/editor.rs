//! Parameter editor: per-field text and validation state.
//!
//! The editor copies the incoming model's values at construction and never
//! touches the original again. Every field change updates the text and the
//! field's validation state in one step; the full model is read back with
//! [`Editor::get_model`].

use std::collections::HashMap;

use tracing::debug;

use crate::form::{Model, ParamId, ParamValue, Parameter};
use crate::validation::{FieldError, FieldState};

/// Editable copy of a model plus the validation state of every field.
#[derive(Debug, Clone)]
pub struct Editor {
    params: Vec<Parameter>,
    /// Parameter id → slot in `params` and `states`.
    slots: HashMap<ParamId, usize>,
    /// One state per parameter, same order as `params`.
    states: Vec<FieldState>,
    values: Vec<ParamValue>,
    /// Model handed in at construction, kept for its passthrough fields.
    origin: Model,
}

impl Editor {
    /// Create an editor for `params`, starting from `model`'s values.
    ///
    /// No validation runs here: every field starts out valid.
    pub fn new(params: Vec<Parameter>, model: Model) -> Self {
        let mut slots = HashMap::with_capacity(params.len());
        for (slot, param) in params.iter().enumerate() {
            slots.entry(param.id).or_insert(slot);
        }

        Self {
            states: vec![FieldState::Valid; params.len()],
            values: model.param_values.clone(),
            params,
            slots,
            origin: model,
        }
    }

    /// Parameters in display order.
    pub fn params(&self) -> &[Parameter] {
        &self.params
    }

    pub fn has_param(&self, id: ParamId) -> bool {
        self.slots.contains_key(&id)
    }

    /// Text currently displayed for `id` (empty when there is no value).
    pub fn value(&self, id: ParamId) -> &str {
        self.values
            .iter()
            .find(|pv| pv.param_id == id)
            .map(|pv| pv.value.as_str())
            .unwrap_or("")
    }

    /// Current parameter values, in model order.
    pub fn values(&self) -> &[ParamValue] {
        &self.values
    }

    /// Validation state of `id`, or `None` for an unknown parameter.
    pub fn field_state(&self, id: ParamId) -> Option<&FieldState> {
        self.slots.get(&id).map(|&slot| &self.states[slot])
    }

    pub fn error(&self, id: ParamId) -> Option<&FieldError> {
        self.field_state(id).and_then(FieldState::error)
    }

    /// Invalid fields in parameter order.
    pub fn errors(&self) -> impl Iterator<Item = (&Parameter, &FieldError)> {
        self.params
            .iter()
            .zip(&self.states)
            .filter_map(|(param, state)| state.error().map(|e| (param, e)))
    }

    pub fn invalid_count(&self) -> usize {
        self.states.iter().filter(|s| !s.is_valid()).count()
    }

    pub fn is_valid(&self) -> bool {
        self.states.iter().all(FieldState::is_valid)
    }

    /// Apply new text to a field.
    ///
    /// The field's state follows the trimmed text; the value entry for `id`
    /// takes `text` as-is. Other fields are untouched and entry order is kept.
    /// A parameter without a value entry only has its state updated; no entry
    /// is created for it.
    pub fn on_field_change(&mut self, id: ParamId, text: impl Into<String>) {
        let text = text.into();
        let state = FieldState::after_input(&text);

        let Some(&slot) = self.slots.get(&id) else {
            debug!(param = %id, "change for unknown parameter ignored");
            return;
        };
        self.states[slot] = state;

        for pv in self.values.iter_mut().filter(|pv| pv.param_id == id) {
            pv.value.clone_from(&text);
        }

        debug!(param = %id, valid = state.is_valid(), "field changed");
    }

    /// Current model: the original passthrough fields with the edited values.
    ///
    /// Returned whatever the validation state; check [`Editor::is_valid`]
    /// to tell a clean snapshot from one with invalid fields.
    pub fn get_model(&self) -> Model {
        Model {
            param_values: self.values.clone(),
            ..self.origin.clone()
        }
    }
}
