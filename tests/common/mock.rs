//! Testify-style mock used as the expectation-bearing type in integration tests.
#![allow(dead_code)]

use std::cell::RefCell;

use mockwalk::domain::ports::Reporter;
use mockwalk::Mock;

/// One registered expectation.
#[derive(Debug, Clone)]
struct ExpectedCall {
    method: String,
    args: Vec<String>,
    /// `None` accepts any number of calls (at least one).
    remaining: Option<usize>,
    total_calls: usize,
}

impl ExpectedCall {
    fn describe(&self) -> String {
        format!("{}({})", self.method, self.args.join(","))
    }

    fn is_satisfied(&self) -> bool {
        self.total_calls > 0 && self.remaining.is_none_or(|left| left == 0)
    }
}

/// Records calls and checks them against registered expectations.
#[derive(Debug, Default)]
pub struct Expectations {
    expected: RefCell<Vec<ExpectedCall>>,
    calls: RefCell<Vec<(String, Vec<String>)>>,
}

/// Handle returned by [`Expectations::on`] to refine the latest expectation.
pub struct ExpectationHandle<'m> {
    mock: &'m Expectations,
    index: usize,
}

impl ExpectationHandle<'_> {
    pub fn times(self, n: usize) -> Self {
        self.mock.expected.borrow_mut()[self.index].remaining = Some(n);
        self
    }

    pub fn once(self) -> Self {
        self.times(1)
    }
}

impl Expectations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(&self, method: &str, args: &[&str]) -> ExpectationHandle<'_> {
        let mut expected = self.expected.borrow_mut();
        expected.push(ExpectedCall {
            method: method.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            remaining: None,
            total_calls: 0,
        });
        ExpectationHandle {
            mock: self,
            index: expected.len() - 1,
        }
    }

    /// Record a call. Panics when nothing matches, like an unexpected call on a real mock.
    pub fn called(&self, method: &str, args: &[&str]) {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let mut expected = self.expected.borrow_mut();
        let call = expected
            .iter_mut()
            .find(|c| {
                c.method == method && c.args == args && c.remaining.is_none_or(|left| left > 0)
            })
            .unwrap_or_else(|| panic!("mock: unexpected call {method}({})", args.join(",")));
        call.total_calls += 1;
        if let Some(left) = call.remaining.as_mut() {
            *left -= 1;
        }
        self.calls.borrow_mut().push((method.to_string(), args));
    }

    pub fn number_of_calls(&self, method: &str) -> usize {
        self.calls.borrow().iter().filter(|(m, _)| m == method).count()
    }
}

mockwalk::inspect_struct!(Expectations {});

impl Mock for Expectations {
    fn assert_expectations(&self, reporter: &mut dyn Reporter) -> bool {
        let expected = self.expected.borrow();
        let mut failed = 0;
        for call in expected.iter() {
            if call.is_satisfied() {
                reporter.report_log(format_args!("PASS:\t{}", call.describe()));
            } else {
                failed += 1;
                reporter.report_log(format_args!(
                    "FAIL:\t{}\n\t\tcalled {} time(s)",
                    call.describe(),
                    call.total_calls
                ));
            }
        }

        if failed != 0 {
            reporter.report_error(format_args!(
                "FAIL: {} out of {} expectation(s) were met.\n\tThe code you are testing needs to make {} more call(s).",
                expected.len() - failed,
                expected.len(),
                failed
            ));
        }
        failed == 0
    }
}

