//! Hovmoeller features: per-variable values over a domain.

use super::HovmoellerDomain;
use crate::array::Array2D;
use edal_common::{EdalError, EdalResult, Extent};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Metadata describing one measured variable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub units: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standard_name: Option<String>,
}

impl Parameter {
    pub fn new(id: impl Into<String>, title: impl Into<String>, units: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            units: units.into(),
            standard_name: None,
        }
    }
}

/// Values of one or more variables over a Hovmoeller domain.
///
/// Each variable's values are shaped like the domain,
/// `[number_of_times][number_of_points]`; `None` marks a missing value.
#[derive(Debug, Clone, PartialEq)]
pub struct HovmoellerFeature {
    id: String,
    name: String,
    description: String,
    domain: HovmoellerDomain,
    parameters: BTreeMap<String, Parameter>,
    values: BTreeMap<String, Array2D<Option<f64>>>,
}

impl HovmoellerFeature {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        domain: HovmoellerDomain,
        parameters: BTreeMap<String, Parameter>,
        values: BTreeMap<String, Array2D<Option<f64>>>,
    ) -> EdalResult<Self> {
        let expected = [domain.number_of_times(), domain.number_of_points()];
        for (var, array) in &values {
            if !parameters.contains_key(var) {
                return Err(EdalError::construction(format!(
                    "values given for unknown variable '{var}'"
                )));
            }
            if array.shape() != expected {
                return Err(EdalError::construction(format!(
                    "values for '{var}' have shape {:?}, domain has {:?}",
                    array.shape(),
                    expected
                )));
            }
        }

        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            domain,
            parameters,
            values,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn domain(&self) -> &HovmoellerDomain {
        &self.domain
    }

    pub fn parameter(&self, var: &str) -> Option<&Parameter> {
        self.parameters.get(var)
    }

    /// Ids of variables that carry values, in sorted order.
    pub fn variable_ids(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn values(&self, var: &str) -> Option<&Array2D<Option<f64>>> {
        self.values.get(var)
    }

    /// Smallest and largest non-missing value of `var`.
    ///
    /// `None` when the variable is unknown or every value is missing.
    pub fn value_range(&self, var: &str) -> Option<Extent<f64>> {
        let mut present = self
            .values
            .get(var)?
            .iter()
            .flatten()
            .copied()
            .filter(|v| !v.is_nan());
        let first = present.next()?;
        let (min, max) = present.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Extent::from_unordered(min, max))
    }
}
