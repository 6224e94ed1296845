//! Form model behind the interactive controls.
//!
//! Holds the current value of every control, which control has focus, an
//! optional in-progress text entry for numeric fields, and whether the user
//! pressed submit since the last [`FormState::collect`].

use crate::domain::{
    choice_labels, CodedChoice, FeatureColumn, FeatureKind, PredictionRequest, CANONICAL_ORDER,
};

/// Message shown when typed input falls outside a control's range.
pub fn range_notice(column: FeatureColumn) -> String {
    match column.numeric_spec() {
        Some(spec) => format!(
            "{}: nilai harus antara {} dan {}",
            column.label(),
            spec.format(spec.min),
            spec.format(spec.max)
        ),
        None => format!("{}: nilai tidak valid", column.label()),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    values: PredictionRequest,
    focus: usize,
    edit: Option<String>,
    submitted: bool,
    notice: Option<String>,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self {
            values: PredictionRequest::default(),
            focus: 0,
            edit: None,
            submitted: false,
            notice: None,
        }
    }

    /// Controls in display order (continuous first, then choices).
    pub fn controls(&self) -> &'static [FeatureColumn] {
        &CANONICAL_ORDER
    }

    pub fn values(&self) -> &PredictionRequest {
        &self.values
    }

    pub fn focused(&self) -> FeatureColumn {
        CANONICAL_ORDER[self.focus]
    }

    pub fn editing(&self) -> Option<&str> {
        self.edit.as_deref()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Text shown inside a control.
    pub fn display(&self, column: FeatureColumn) -> String {
        if column == self.focused() {
            if let Some(buffer) = &self.edit {
                return buffer.clone();
            }
        }
        self.values.display_value(column)
    }

    /// Labels offered by a choice control and the selected index.
    pub fn options(&self, column: FeatureColumn) -> Option<(Vec<&'static str>, usize)> {
        let labels = choice_labels(column)?;
        let current = self.values.display_value(column);
        let selected = labels.iter().position(|l| *l == current).unwrap_or(0);
        Some((labels, selected))
    }

    pub fn focus_next(&mut self) {
        self.commit_edit();
        self.focus = (self.focus + 1) % CANONICAL_ORDER.len();
    }

    pub fn focus_prev(&mut self) {
        self.commit_edit();
        self.focus = if self.focus == 0 {
            CANONICAL_ORDER.len() - 1
        } else {
            self.focus - 1
        };
    }

    pub fn focus_column(&mut self, column: FeatureColumn) {
        self.commit_edit();
        if let Some(idx) = CANONICAL_ORDER.iter().position(|c| *c == column) {
            self.focus = idx;
        }
    }

    /// Step the focused control up: +step for numbers, next option for choices.
    pub fn increment(&mut self) {
        self.step(1);
    }

    pub fn decrement(&mut self) {
        self.step(-1);
    }

    fn step(&mut self, direction: i8) {
        self.edit = None;
        self.notice = None;
        let column = self.focused();
        match column.numeric_spec() {
            Some(spec) => {
                let current = self.values.value(column);
                let next = spec.snap(current + f64::from(direction) * spec.step);
                self.store_numeric(column, next);
            }
            None => self.cycle_choice(column, direction),
        }
    }

    fn cycle_choice(&mut self, column: FeatureColumn, direction: i8) {
        let v = &mut self.values;
        match column {
            FeatureColumn::Sex => v.sex = cycle(v.sex, direction),
            FeatureColumn::Cp => v.cp = cycle(v.cp, direction),
            FeatureColumn::Fbs => v.fbs = cycle(v.fbs, direction),
            FeatureColumn::Restecg => v.restecg = cycle(v.restecg, direction),
            FeatureColumn::Exang => v.exang = cycle(v.exang, direction),
            FeatureColumn::Slope => v.slope = cycle(v.slope, direction),
            _ => {}
        }
    }

    /// Type into the focused numeric control. Ignored for choice controls.
    pub fn type_char(&mut self, c: char) {
        if self.focused().kind() != FeatureKind::Continuous {
            return;
        }
        if !(c.is_ascii_digit() || c == '.' || c == ',') {
            return;
        }
        let buffer = self.edit.get_or_insert_with(String::new);
        if buffer.len() < 8 {
            buffer.push(if c == ',' { '.' } else { c });
        }
    }

    pub fn backspace(&mut self) {
        if let Some(buffer) = &mut self.edit {
            buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    /// Apply the pending text entry. Out-of-range or unparsable input is
    /// rejected: the previous value stays and a notice is set.
    pub fn commit_edit(&mut self) -> bool {
        let Some(buffer) = self.edit.take() else {
            return true;
        };
        let column = self.focused();
        let Some(spec) = column.numeric_spec() else {
            return true;
        };
        match buffer.parse::<f64>() {
            Ok(value) if spec.contains(value) => {
                self.notice = None;
                self.store_numeric(column, value);
                true
            }
            _ => {
                self.notice = Some(range_notice(column));
                false
            }
        }
    }

    /// Set a numeric control directly. Returns false and keeps the old
    /// value when out of range.
    pub fn set_numeric(&mut self, column: FeatureColumn, value: f64) -> bool {
        match column.numeric_spec() {
            Some(spec) if spec.contains(value) => {
                self.store_numeric(column, value);
                true
            }
            _ => {
                self.notice = Some(range_notice(column));
                false
            }
        }
    }

    fn store_numeric(&mut self, column: FeatureColumn, value: f64) {
        let v = &mut self.values;
        match column {
            FeatureColumn::Age => v.age = value,
            FeatureColumn::Trestbps => v.trestbps = value,
            FeatureColumn::Chol => v.chol = value,
            FeatureColumn::Thalach => v.thalach = value,
            FeatureColumn::Oldpeak => v.oldpeak = value,
            _ => {}
        }
    }

    /// Press the submit button. A pending entry is committed first; if it is
    /// rejected the submission does not happen.
    pub fn submit(&mut self) -> bool {
        if !self.commit_edit() {
            return false;
        }
        self.submitted = true;
        true
    }

    /// Current record plus whether submit was pressed since the last call.
    pub fn collect(&mut self) -> (PredictionRequest, bool) {
        let submitted = std::mem::take(&mut self.submitted);
        (self.values.clone(), submitted)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

fn cycle<C: CodedChoice>(current: C, direction: i8) -> C {
    let n = C::ALL.len();
    let idx = current.index();
    let next = if direction >= 0 {
        (idx + 1) % n
    } else {
        (idx + n - 1) % n
    };
    C::ALL[next]
}
