use colored::Colorize;
use keyshop_core::Catalog;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::scenario::CartScenario;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub scenario_name: String,
    pub passed: bool,
    pub iterations_run: usize,
    pub successful_iterations: usize,
    pub failures: Vec<String>,
    #[serde(with = "duration_serde")]
    pub average_duration: Duration,
    #[serde(with = "duration_vec_serde")]
    pub performance_data: Vec<Duration>,
}

pub struct CartTester {
    catalog: Catalog,
    verbose: bool,
}

impl CartTester {
    pub const fn new(catalog: Catalog, verbose: bool) -> Self {
        Self { catalog, verbose }
    }

    pub fn run_scenario(&self, scenario: &CartScenario, iterations: usize) -> ScenarioResult {
        if self.verbose {
            println!(
                "🧪 Testing scenario: {} ({iterations} iterations)",
                scenario.name().bright_white()
            );
        }

        let mut successes = 0;
        let mut failures = Vec::new();
        let mut performance_data = Vec::with_capacity(iterations);

        for i in 0..iterations {
            let start_time = Instant::now();
            let outcome = scenario.check(&self.catalog);
            performance_data.push(start_time.elapsed());

            match outcome {
                Ok(()) => successes += 1,
                Err(err) => {
                    log::debug!("{} iteration {} failed: {err:#}", scenario.key(), i + 1);
                    failures.push(format!("Iteration {}: {err:#}", i + 1));
                }
            }
        }

        let average_duration = if performance_data.is_empty() {
            Duration::ZERO
        } else {
            performance_data.iter().sum::<Duration>()
                / u32::try_from(performance_data.len()).unwrap_or(u32::MAX)
        };

        ScenarioResult {
            scenario_name: scenario.name().to_string(),
            passed: failures.is_empty(),
            iterations_run: iterations,
            successful_iterations: successes,
            failures,
            average_duration,
            performance_data,
        }
    }
}

mod duration_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_micros().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = u128::deserialize(deserializer)?;
        Ok(Duration::from_micros(u64::try_from(micros).unwrap_or(0)))
    }
}

mod duration_vec_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(durations: &[Duration], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let micros: Vec<u128> = durations.iter().map(Duration::as_micros).collect();
        micros.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let micros = Vec::<u128>::deserialize(deserializer)?;
        Ok(micros
            .into_iter()
            .map(|m| Duration::from_micros(u64::try_from(m).unwrap_or(0)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::get_scenario;

    fn failing(_: &Catalog) -> anyhow::Result<()> {
        anyhow::bail!("total mismatch")
    }

    #[test]
    fn passing_scenario_counts_every_iteration() {
        let tester = CartTester::new(Catalog::builtin(), false);
        let scenario = get_scenario("smoke").unwrap();
        let result = tester.run_scenario(&scenario, 3);
        assert!(result.passed);
        assert_eq!(result.iterations_run, 3);
        assert_eq!(result.successful_iterations, 3);
        assert_eq!(result.performance_data.len(), 3);
    }

    #[test]
    fn failures_are_numbered() {
        let tester = CartTester::new(Catalog::builtin(), false);
        let scenario = CartScenario::new("broken", "Broken", "always fails", failing);
        let result = tester.run_scenario(&scenario, 2);
        assert!(!result.passed);
        assert_eq!(result.successful_iterations, 0);
        assert_eq!(result.failures[1], "Iteration 2: total mismatch");
    }

    #[test]
    fn zero_iterations_passes_vacuously() {
        let tester = CartTester::new(Catalog::builtin(), false);
        let result = tester.run_scenario(&get_scenario("smoke").unwrap(), 0);
        assert!(result.passed);
        assert_eq!(result.average_duration, Duration::ZERO);
    }

    #[test]
    fn result_serializes_durations_as_micros() {
        let result = ScenarioResult {
            scenario_name: "Smoke".to_string(),
            passed: true,
            iterations_run: 1,
            successful_iterations: 1,
            failures: Vec::new(),
            average_duration: Duration::from_micros(250),
            performance_data: vec![Duration::from_micros(250)],
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["average_duration"], 250);
        let back: ScenarioResult = serde_json::from_value(json).unwrap();
        assert_eq!(back.performance_data, vec![Duration::from_micros(250)]);
    }
}
