//! BDD-style testing helpers for skipmap.
//!
//! Given/When/Then infrastructure for describing container behavior as
//! scenarios. Steps share a [`ScenarioContext`] holding a map, a set and a
//! few named scratch values.

use skipmap_engine::IntMap;
use skipmap_set::IntSet;
use std::collections::HashMap;

/// A BDD scenario context that carries state through Given/When/Then steps.
#[derive(Debug, Default)]
pub struct ScenarioContext {
    /// Map under test
    pub map: IntMap<i64>,
    /// Set under test
    pub set: IntSet,
    /// Numeric values (counts, levels, etc.)
    pub numbers: HashMap<String, u64>,
    /// Boolean flags
    pub flags: HashMap<String, bool>,
    /// Captured key sequences
    pub keys: HashMap<String, Vec<i64>>,
}

impl ScenarioContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_number(mut self, key: &str, value: u64) -> Self {
        self.numbers.insert(key.to_string(), value);
        self
    }

    pub fn with_flag(mut self, key: &str, value: bool) -> Self {
        self.flags.insert(key.to_string(), value);
        self
    }

    pub fn number(&self, key: &str) -> Option<u64> {
        self.numbers.get(key).copied()
    }

    pub fn flag(&self, key: &str) -> Option<bool> {
        self.flags.get(key).copied()
    }

    pub fn keys(&self, key: &str) -> Option<&[i64]> {
        self.keys.get(key).map(|k| k.as_slice())
    }

    /// Record the map's keys in iteration order under `name`.
    pub fn capture_map_keys(&mut self, name: &str) {
        let keys = self.map.keys().copied().collect();
        self.keys.insert(name.to_string(), keys);
    }

    /// Record the set's members in iteration order under `name`.
    pub fn capture_set_members(&mut self, name: &str) {
        let keys = self.set.iter().copied().collect();
        self.keys.insert(name.to_string(), keys);
    }
}

/// Step definition types for BDD scenarios
pub type GivenStep = fn(&mut ScenarioContext);
pub type WhenStep = fn(&mut ScenarioContext) -> Result<(), String>;
pub type ThenStep = fn(&ScenarioContext) -> Result<(), String>;

/// A BDD scenario with named steps
pub struct Scenario {
    pub name: String,
    pub given_steps: Vec<(&'static str, GivenStep)>,
    pub when_steps: Vec<(&'static str, WhenStep)>,
    pub then_steps: Vec<(&'static str, ThenStep)>,
}

impl Scenario {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            given_steps: Vec::new(),
            when_steps: Vec::new(),
            then_steps: Vec::new(),
        }
    }

    pub fn given(mut self, description: &'static str, step: GivenStep) -> Self {
        self.given_steps.push((description, step));
        self
    }

    pub fn when(mut self, description: &'static str, step: WhenStep) -> Self {
        self.when_steps.push((description, step));
        self
    }

    pub fn then(mut self, description: &'static str, step: ThenStep) -> Self {
        self.then_steps.push((description, step));
        self
    }

    /// Run every step against a fresh context, stopping at the first failure.
    pub fn run(&self) -> Result<(), String> {
        self.run_with(ScenarioContext::new())
    }

    /// Run every step against `ctx`.
    pub fn run_with(&self, mut ctx: ScenarioContext) -> Result<(), String> {
        eprintln!("Scenario: {}", self.name);

        for (desc, step) in &self.given_steps {
            eprintln!("  Given: {}", desc);
            step(&mut ctx);
        }

        for (desc, step) in &self.when_steps {
            eprintln!("  When: {}", desc);
            step(&mut ctx).map_err(|err| format!("{desc}: {err}"))?;
        }

        for (desc, step) in &self.then_steps {
            eprintln!("  Then: {}", desc);
            step(&ctx).map_err(|err| format!("{desc}: {err}"))?;
        }

        Ok(())
    }
}

/// Assertion helpers for BDD scenarios
pub mod assertions {
    use std::fmt::Debug;

    pub fn assert_present<T: Debug>(option: Option<T>, name: &str) -> Result<T, String> {
        option.ok_or_else(|| format!("Expected {} to be present, but was None", name))
    }

    pub fn assert_absent<T: Debug>(option: Option<T>, name: &str) -> Result<(), String> {
        match option {
            None => Ok(()),
            Some(value) => Err(format!("Expected {} to be absent, but was {:?}", name, value)),
        }
    }

    pub fn assert_eq<T: Debug + PartialEq>(
        actual: T,
        expected: T,
        name: &str,
    ) -> Result<(), String> {
        if actual != expected {
            Err(format!(
                "Expected {} to be {:?}, but was {:?}",
                name, expected, actual
            ))
        } else {
            Ok(())
        }
    }

    pub fn assert_true(flag: bool, name: &str) -> Result<(), String> {
        if !flag {
            Err(format!("Expected {} to be true, but was false", name))
        } else {
            Ok(())
        }
    }

    pub fn assert_false(flag: bool, name: &str) -> Result<(), String> {
        if flag {
            Err(format!("Expected {} to be false, but was true", name))
        } else {
            Ok(())
        }
    }

    pub fn assert_sorted(keys: &[i64], name: &str) -> Result<(), String> {
        if crate::model::strictly_increasing(keys) {
            Ok(())
        } else {
            Err(format!("Expected {} to be strictly increasing, but was {:?}", name, keys))
        }
    }
}
