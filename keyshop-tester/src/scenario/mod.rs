use anyhow::Result;
use keyshop_core::Catalog;

pub mod catalog;

use catalog::catalog_scenarios;

/// Cart check run against a fresh store on every iteration.
pub type Expectation = fn(&Catalog) -> Result<()>;

#[derive(Clone)]
pub struct CartScenario {
    key: &'static str,
    name: &'static str,
    description: &'static str,
    expectation: Expectation,
}

impl CartScenario {
    pub const fn new(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        expectation: Expectation,
    ) -> Self {
        Self {
            key,
            name,
            description,
            expectation,
        }
    }

    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn description(&self) -> &'static str {
        self.description
    }

    /// Run the expectation once.
    ///
    /// # Errors
    ///
    /// Returns the first expectation that did not hold.
    pub fn check(&self, catalog: &Catalog) -> Result<()> {
        (self.expectation)(catalog)
    }
}

pub fn get_scenario(key: &str) -> Option<CartScenario> {
    catalog_scenarios().into_iter().find(|s| s.key() == key)
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    catalog_scenarios()
        .iter()
        .map(|s| (s.key(), s.description()))
        .collect()
}

/// Every scenario key, in catalog order.
pub fn all_scenario_keys() -> Vec<String> {
    catalog_scenarios()
        .iter()
        .map(|s| s.key().to_string())
        .collect()
}
