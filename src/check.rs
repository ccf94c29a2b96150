// Copyright 2024 Martin Pool

//! Check factorial implementations against a table of known answers.

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;
use serde::Serialize;
use tracing::{debug, warn};

use crate::{exit_code, Method, Result};

/// Inputs and their factorials that every method must reproduce.
pub const KNOWN_ANSWERS: &[(u32, u128)] = &[(0, 1), (1, 1), (2, 2), (10, 3_628_800)];

/// Whether one method produced the expected answer for one input.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Passed,
    Failed,
}

/// The result of checking one method on one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub method: Method,
    pub n: u32,
    pub expected: u128,
    /// The computed value, if the method produced one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<u128>,
    /// Why the method failed to produce a value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub status: Status,
}

/// The outcome from checking a table of cases with some methods.
#[derive(Debug, Default, Clone, Serialize)]
pub struct CheckReport {
    pub cases: Vec<CaseResult>,
    /// Inputs on which the methods produced different outcomes.
    pub disagreements: Vec<u32>,
    #[serde(skip)]
    count_by_status: HashMap<Status, usize>,
}

/// Evaluate every case with every method.
pub fn run_checks(cases: &[(u32, u128)], methods: &[Method]) -> CheckReport {
    run_checks_with(cases, methods, Method::apply)
}

/// Evaluate every case with every method, computing each value with `apply`.
pub fn run_checks_with<F>(cases: &[(u32, u128)], methods: &[Method], apply: F) -> CheckReport
where
    F: Fn(Method, u32) -> Result<u128>,
{
    let mut report = CheckReport::default();
    for &(n, expected) in cases {
        for &method in methods {
            let result = check_one(method, n, expected, apply(method, n));
            debug!(%method, n, status = ?result.status, "checked");
            report.add(result);
        }
        if !report.methods_agree(n) {
            warn!(n, "methods disagree");
            report.disagreements.push(n);
        }
    }
    report
}

fn check_one(method: Method, n: u32, expected: u128, outcome: Result<u128>) -> CaseResult {
    let (actual, error) = match outcome {
        Ok(value) => (Some(value), None),
        Err(err) => (None, Some(err.to_string())),
    };
    let status = if actual == Some(expected) {
        Status::Passed
    } else {
        Status::Failed
    };
    CaseResult {
        method,
        n,
        expected,
        actual,
        error,
        status,
    }
}

impl CheckReport {
    /// Record the result of one case.
    pub fn add(&mut self, result: CaseResult) {
        self.count_by_status
            .entry(result.status)
            .and_modify(|c| *c += 1)
            .or_insert(1);
        self.cases.push(result);
    }

    /// Return the number of cases with the given status.
    pub fn count(&self, status: Status) -> usize {
        self.count_by_status
            .get(&status)
            .cloned()
            .unwrap_or_default()
    }

    /// True if every method checked on `n` produced the same value or error.
    pub fn methods_agree(&self, n: u32) -> bool {
        self.cases
            .iter()
            .filter(|r| r.n == n)
            .map(|r| (&r.actual, &r.error))
            .all_equal()
    }

    /// Return `(passed, failed)` counts.
    pub fn counts(&self) -> (usize, usize) {
        (self.count(Status::Passed), self.count(Status::Failed))
    }

    /// True if every case passed and the methods never disagreed.
    pub fn all_passed(&self) -> bool {
        self.count(Status::Failed) == 0 && self.disagreements.is_empty()
    }

    /// Return the overall program exit code reflecting this report.
    ///
    /// Methods disagreeing with each other is an internal error, and outranks
    /// a wrong answer from every method.
    pub fn exit_code(&self) -> i32 {
        if !self.disagreements.is_empty() {
            exit_code::SOFTWARE
        } else if self.count(Status::Failed) > 0 {
            exit_code::FOUND_PROBLEMS
        } else {
            exit_code::SUCCESS
        }
    }
}

impl fmt::Display for CaseResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let CaseResult {
            method,
            n,
            expected,
            ..
        } = self;
        match (&self.actual, &self.error, self.status) {
            (Some(actual), _, Status::Passed) => write!(f, "{method}({n}) = {actual} ... ok"),
            (Some(actual), _, Status::Failed) => write!(
                f,
                "{method}({n}) = {actual}, expected {expected} ... FAILED"
            ),
            (None, error, _) => write!(
                f,
                "{method}({n}): {}, expected {expected} ... FAILED",
                error.as_deref().unwrap_or("no value")
            ),
        }
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for case in &self.cases {
            writeln!(f, "{case}")?;
        }
        for n in &self.disagreements {
            writeln!(f, "methods disagree on {n}")?;
        }
        let (passed, failed) = self.counts();
        writeln!(f, "{passed} passed; {failed} failed")
    }
}
