//! Conversion session - the state a UI shell holds
//!
//! Every mutating method re-runs parse -> convert -> format before it
//! returns, so `result()` is never derived from stale input. The from and
//! to units always belong to the active category.

use serde::Serialize;
use tracing::{debug, trace, warn};
use metron_core::{FormatConfig, MeasureError, Reading};
use crate::{Unit, Category};
use crate::convert::convert;
use crate::format::try_format;
use crate::parse::{parse, ParseResult};
use crate::selector::default_pair;
use crate::unit::ConversionError;
use crate::units::UNITS;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    active_category: Category,
    from_unit: Unit,
    to_unit: Unit,
    raw_input: String,
    last_result: Reading,
    #[serde(skip)]
    last_value: Option<f64>,
    config: FormatConfig,
}

impl Session {
    /// Start a session on `category` with its default unit pair and no input
    pub fn new(category: Category) -> Self {
        Self::with_config(category, FormatConfig::default())
    }

    pub fn with_config(category: Category, config: FormatConfig) -> Self {
        let (from_unit, to_unit) = default_pair(category);
        let mut session = Session {
            active_category: category,
            from_unit,
            to_unit,
            raw_input: String::new(),
            last_result: Reading::Empty,
            last_value: None,
            config,
        };
        session.recompute();
        session
    }

    // ========== Accessors ==========

    pub fn active_category(&self) -> Category {
        self.active_category
    }

    pub fn from_unit(&self) -> &Unit {
        &self.from_unit
    }

    pub fn to_unit(&self) -> &Unit {
        &self.to_unit
    }

    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn config(&self) -> &FormatConfig {
        &self.config
    }

    /// The outcome of the last recomputation
    pub fn result(&self) -> &Reading {
        &self.last_result
    }

    /// Text to render: the formatted number, the placeholder, or the
    /// invalid-input marker
    pub fn display(&self) -> &str {
        self.last_result.display(&self.config)
    }

    /// Unformatted result, when the input converted cleanly
    pub fn converted_value(&self) -> Option<f64> {
        self.last_value
    }

    /// Units a shell may offer for the active category
    pub fn units(&self) -> Vec<&'static Unit> {
        UNITS.list_units(self.active_category)
    }

    // ========== State transitions ==========

    pub fn set_input(&mut self, text: impl Into<String>) -> &Reading {
        self.raw_input = text.into();
        debug!(input = %self.raw_input, "input changed");
        self.recompute();
        &self.last_result
    }

    /// Replace the source unit. A unit outside the active category is a
    /// caller defect and leaves the session untouched.
    pub fn set_from_unit(&mut self, unit: Unit) -> Result<&Reading, ConversionError> {
        self.check_member(&unit)?;
        debug!(from = %unit, "from unit changed");
        self.from_unit = unit;
        self.recompute();
        Ok(&self.last_result)
    }

    /// Replace the target unit. Same contract as [`Session::set_from_unit`].
    pub fn set_to_unit(&mut self, unit: Unit) -> Result<&Reading, ConversionError> {
        self.check_member(&unit)?;
        debug!(to = %unit, "to unit changed");
        self.to_unit = unit;
        self.recompute();
        Ok(&self.last_result)
    }

    /// Exchange the from and to units and convert the current input again
    pub fn swap(&mut self) -> &Reading {
        std::mem::swap(&mut self.from_unit, &mut self.to_unit);
        debug!(from = %self.from_unit, to = %self.to_unit, "units swapped");
        self.recompute();
        &self.last_result
    }

    /// Switch category, resetting both units to the new category's default
    /// pair and clearing the input. Switching to the active category does
    /// nothing.
    pub fn change_category(&mut self, category: Category) -> &Reading {
        if category == self.active_category {
            return &self.last_result;
        }

        let (from_unit, to_unit) = default_pair(category);
        debug!(
            previous = %self.active_category,
            category = %category,
            from = %from_unit,
            to = %to_unit,
            "category changed"
        );
        self.active_category = category;
        self.from_unit = from_unit;
        self.to_unit = to_unit;
        self.raw_input.clear();
        self.recompute();
        &self.last_result
    }

    fn check_member(&self, unit: &Unit) -> Result<(), ConversionError> {
        if UNITS.is_member(unit, self.active_category) {
            return Ok(());
        }
        warn!(
            unit = %unit,
            category = %self.active_category,
            "rejected unit outside the active category"
        );
        Err(ConversionError::UnitNotInCategory {
            unit: unit.symbol.to_string(),
            category: self.active_category,
        })
    }

    fn recompute(&mut self) {
        let (reading, value) = match parse(&self.raw_input) {
            ParseResult::Empty => (Reading::Empty, None),
            ParseResult::Invalid => {
                (Reading::Error(MeasureError::invalid_input(&self.raw_input)), None)
            }
            ParseResult::Valid(v) => {
                let converted = convert(v, &self.from_unit, &self.to_unit);
                match try_format(converted, self.config.decimals) {
                    Some(text) => (Reading::Number(text), Some(converted)),
                    None => (Reading::Error(MeasureError::non_finite()), None),
                }
            }
        };

        trace!(
            input = %self.raw_input,
            from = %self.from_unit,
            to = %self.to_unit,
            result = %reading,
            "recomputed"
        );
        self.last_result = reading;
        self.last_value = value;
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Category::default())
    }
}
