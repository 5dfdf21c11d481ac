// Dweve PackBench - Compression Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! End-to-end tests for suite execution, ranking and the bootstrap.
//!
//! Tests cover:
//! - Deterministic percentage ranking
//! - Empty parameter lists and unregistered passes
//! - Disabled passes and pass isolation
//! - Fatal errors discarding partial results
//! - Lifecycle ordering across samples

use packbench::core::{Parameter, PassConfig, SortMode, SortOrder, TieBreak};
use packbench::harness::{BenchTest, Bootstrap, Pass, TestHarness, TestResults, TestSuite};
use packbench::{BenchError, Result};
use std::cell::RefCell;
use std::rc::Rc;

fn fixed(state: &mut u64, _: &Parameter) -> Result<u64> {
    Ok(*state)
}

fn length(_: &mut u64, param: &Parameter) -> Result<u64> {
    Ok(param.len() as u64)
}

fn compressor(name: &str, size: u64) -> BenchTest<u64> {
    BenchTest::new(name, size)
        .with_pass(Pass::new("compression", fixed))
        .with_pass(Pass::new("decompression", length))
}

fn hundred() -> Parameter {
    Parameter::sized("hundred.bin", vec![7; 100])
}

fn percentage() -> PassConfig {
    PassConfig::default().with_sort(SortMode::Percentage)
}

// ============================================================================
// Rankings
// ============================================================================

#[test]
fn test_percentage_ranking_is_deterministic() {
    for _ in 0..10 {
        let results = TestSuite::new("determinism")
            .with_test(compressor("fifty", 50))
            .with_test(compressor("forty", 40))
            .with_parameter(hundred())
            .with_pass_config("compression", percentage())
            .execute()
            .unwrap();

        let ranked = results.ranking("compression", 0);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "forty");
        assert_eq!(ranked[0].ratio, Some(0.4));
        assert_eq!(ranked[1].name, "fifty");
        assert_eq!(ranked[1].ratio, Some(0.5));
    }
}

#[test]
fn test_equal_ratios_keep_registration_order() {
    let results = TestSuite::new("ties")
        .with_test(compressor("zstd", 40))
        .with_test(compressor("brotli", 40))
        .with_parameter(hundred())
        .with_pass_config("compression", percentage())
        .execute()
        .unwrap();

    let names: Vec<String> = results
        .ranking("compression", 0)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(names, vec!["zstd", "brotli"]);

    let by_name = TestSuite::new("ties")
        .with_test(compressor("zstd", 40))
        .with_test(compressor("brotli", 40))
        .with_parameter(hundred())
        .with_pass_config("compression", percentage().with_ties(TieBreak::Name))
        .execute()
        .unwrap();
    assert_eq!(by_name.ranking("compression", 0)[0].name, "brotli");
}

#[test]
fn test_descending_value_ranking() {
    let results = TestSuite::new("descending")
        .with_test(compressor("small", 10))
        .with_test(compressor("large", 90))
        .with_parameter(hundred())
        .with_pass_config(
            "compression",
            PassConfig::default()
                .with_sort(SortMode::Value)
                .with_order(SortOrder::Descending),
        )
        .execute()
        .unwrap();
    assert_eq!(results.ranking("compression", 0)[0].name, "large");
}

#[test]
fn test_unbounded_parameter_ranks_without_ratio() {
    let results = TestSuite::new("unbounded")
        .with_test(compressor("a", 10))
        .with_parameter(Parameter::new("raw", vec![1; 10]))
        .with_pass_config("compression", percentage())
        .execute()
        .unwrap();
    let ranked = results.ranking("compression", 0);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].ratio, None);
}

#[test]
fn test_summary_sums_enabled_passes() {
    let results = TestSuite::new("summary")
        .with_test(compressor("a", 30))
        .with_parameter(hundred())
        .with_pass_config("compression", percentage())
        .with_pass_config("decompression", PassConfig::default())
        .with_summary_config(PassConfig::default().with_sort(SortMode::Value))
        .execute()
        .unwrap();

    let summary = results.summary(0);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].value, 130);
}

// ============================================================================
// Matrix shape
// ============================================================================

#[test]
fn test_empty_parameters_yield_empty_results() {
    let results = TestSuite::new("empty")
        .with_test(compressor("a", 1))
        .with_pass_config("compression", percentage())
        .execute()
        .unwrap();

    assert!(results.is_empty());
    assert!(results.parameters().is_empty());
    assert!(results.ranking("compression", 0).is_empty());
}

#[test]
fn test_unregistered_pass_is_skipped() {
    let results = TestSuite::new("fuzz")
        .with_test(compressor("a", 1))
        .with_test(compressor("b", 2))
        .with_parameter(hundred())
        .with_pass_config("compression", percentage())
        .with_pass_config("fuzz", PassConfig::default())
        .execute()
        .unwrap();

    assert_eq!(results.count_for_pass("fuzz"), 0);
    assert_eq!(results.count_for_pass("compression"), 2);
    assert!(results.ranking("fuzz", 0).is_empty());
}

#[test]
fn test_disabled_pass_never_runs() {
    fn explode(_: &mut u64, _: &Parameter) -> Result<u64> {
        Err(BenchError::codec("explode", "must not run"))
    }

    let results = TestSuite::new("disabled")
        .with_test(
            BenchTest::new("a", 5u64)
                .with_pass(Pass::new("compression", fixed))
                .with_pass(Pass::new("decompression", explode)),
        )
        .with_parameter(hundred())
        .with_pass_config("compression", percentage())
        .with_pass_config("decompression", PassConfig::default().disabled())
        .execute()
        .unwrap();

    assert_eq!(results.len(), 1);
    assert!(results.get("a", "hundred.bin", "decompression").is_none());
    assert!(results.ranking("decompression", 0).is_empty());
}

#[test]
fn test_passes_see_only_their_own_test_state() {
    fn bump(state: &mut u64, _: &Parameter) -> Result<u64> {
        *state += 1;
        Ok(*state)
    }

    let results = TestSuite::new("isolation")
        .with_test(BenchTest::new("a", 0u64).with_pass(Pass::new("count", bump)))
        .with_test(BenchTest::new("b", 100u64).with_pass(Pass::new("count", bump)))
        .with_parameter(Parameter::new("one", vec![1]))
        .with_parameter(Parameter::new("two", vec![2]))
        .with_pass_config("count", PassConfig::default())
        .execute()
        .unwrap();

    assert_eq!(results.get("a", "one", "count").unwrap().value, 1);
    assert_eq!(results.get("a", "two", "count").unwrap().value, 2);
    assert_eq!(results.get("b", "one", "count").unwrap().value, 101);
    assert_eq!(results.get("b", "two", "count").unwrap().value, 102);
}

// ============================================================================
// Failures and lifecycle
// ============================================================================

struct Harness {
    fail_on: Option<&'static str>,
    printed: RefCell<Option<TestResults>>,
}

fn failing(_: &mut u64, param: &Parameter) -> Result<u64> {
    if param.name() == "bad" {
        Err(BenchError::RoundTrip {
            expected_len: 1,
            actual_len: 0,
            first_mismatch: None,
        })
    } else {
        Ok(1)
    }
}

impl TestHarness for Harness {
    fn create_test(&self) -> Result<TestSuite> {
        let mut suite = TestSuite::new("bootstrap");
        suite
            .add_test(BenchTest::new("a", 0u64).with_pass(Pass::new("compression", failing)))
            .add_parameter(Parameter::new("good", vec![1]));
        if let Some(name) = self.fail_on {
            suite.add_parameter(Parameter::new(name, vec![1]));
        }
        suite.set_pass_config("compression", PassConfig::default());
        Ok(suite)
    }

    fn print_test(&self, results: TestResults) -> Result<()> {
        *self.printed.borrow_mut() = Some(results);
        Ok(())
    }
}

#[test]
fn test_fatal_error_publishes_nothing() {
    let harness = Harness {
        fail_on: Some("bad"),
        printed: RefCell::new(None),
    };

    let err = Bootstrap::run_tests(&harness).unwrap_err();
    match &err {
        BenchError::PassFailed {
            test,
            parameter,
            pass,
            source,
        } => {
            assert_eq!(test, "a");
            assert_eq!(parameter, "bad");
            assert_eq!(pass, "compression");
            assert!(matches!(**source, BenchError::RoundTrip { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!err.is_recoverable());
    assert!(harness.printed.borrow().is_none());
}

#[test]
fn test_successful_run_prints_once() {
    let harness = Harness {
        fail_on: None,
        printed: RefCell::new(None),
    };

    Bootstrap::run_tests(&harness).unwrap();
    let printed = harness.printed.borrow();
    let results = printed.as_ref().unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results.suite_name(), "bootstrap");
}

type Log = Rc<RefCell<Vec<String>>>;

fn setup(log: &mut Log, param: &Parameter) -> Result<()> {
    log.borrow_mut().push(format!("setup:{}", param.name()));
    Ok(())
}

fn execute(log: &mut Log, param: &Parameter) -> Result<u64> {
    log.borrow_mut().push(format!("execute:{}", param.name()));
    Ok(0)
}

fn teardown(log: &mut Log, param: &Parameter) -> Result<()> {
    log.borrow_mut().push(format!("teardown:{}", param.name()));
    Ok(())
}

#[test]
fn test_lifecycle_order_per_sample() {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    let test = BenchTest::new("logged", Rc::clone(&log)).with_pass(
        Pass::new("compression", execute)
            .with_setup(setup)
            .with_teardown(teardown),
    );

    let mut suite = TestSuite::new("lifecycle");
    suite
        .add_test(test)
        .add_parameter(Parameter::new("p1", vec![1]))
        .add_parameter(Parameter::new("p2", vec![2]))
        .set_pass_config("compression", PassConfig::default());
    suite.set_samples(2).unwrap();

    let results = suite.execute().unwrap();
    assert_eq!(results.get("logged", "p1", "compression").unwrap().samples, 2);

    let expected: Vec<String> = [
        "setup:p1",
        "execute:p1",
        "teardown:p1",
        "setup:p1",
        "execute:p1",
        "teardown:p1",
        "setup:p2",
        "execute:p2",
        "teardown:p2",
        "setup:p2",
        "execute:p2",
        "teardown:p2",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();
    assert_eq!(*log.borrow(), expected);
}
