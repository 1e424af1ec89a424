//! Tests for tracing integration.

use std::panic::{self, AssertUnwindSafe};

use method_rail::decorators::{fail_safe, log_time_to, report_to, LogFormat, ReportFormat};
use method_rail::sink::{MemorySink, TracingSink};
use method_rail::traits::Invoke;
use method_rail::{ContractViolation, Outcome};
use tracing::Level;

use crate::common::capture::EventCapture;
use crate::common::{fixed_clock, Apples, LOG_LINE, NO_APPLES};

#[test]
fn tracing_sink_reports_one_info_event() {
    let capture = EventCapture::new();
    let chain = report_to(
        fail_safe(|_: &(), (n,): (u32,)| Ok::<_, String>(n * 3)),
        ReportFormat::default(),
        TracingSink::report(),
    );

    let outcome = capture.run(|| chain.invoke(&(), (2,)));

    assert_eq!(outcome, Outcome::Success(6));
    let events = capture.for_target("method_rail::report");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::INFO);
    assert_eq!(events[0].message, "value: 6");
}

#[test]
fn tracing_sink_logs_one_info_event() {
    let capture = EventCapture::new();
    let chain = log_time_to(
        fail_safe(|_: &(), (): ()| Ok::<_, String>("done")),
        LogFormat::utc(),
        fixed_clock(),
        TracingSink::log_time(),
    );

    capture.run(|| chain.invoke(&(), ()));

    let events = capture.for_target("method_rail::log_time");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].level, Level::INFO);
    assert_eq!(events[0].message, LOG_LINE);
    assert!(capture.for_target("method_rail::report").is_empty());
}

#[test]
fn assignment_emits_trace_event() {
    let capture = EventCapture::new();
    let apples = Apples::bare(1.0);

    capture.run(|| {
        apples.calculate_cost.assign(|_: &Apples, _: (i32, f64)| Outcome::success(1.0));
        apples.calculate_cost.assign(|_: &Apples, _: (i32, f64)| Outcome::success(2.0));
    });

    let assigned: Vec<_> = capture
        .at(Level::TRACE)
        .into_iter()
        .filter(|event| event.message == "member function assigned")
        .collect();
    assert_eq!(assigned.len(), 2);
    assert_eq!(assigned[0].field("replaced"), Some("false"));
    assert_eq!(assigned[1].field("replaced"), Some("true"));
    assert_eq!(assigned[0].field("arity"), Some("2"));
}

#[test]
fn contained_failure_emits_debug_event() {
    let capture = EventCapture::new();
    let apples = Apples::new(1.09, &MemorySink::new());

    let outcome = capture.run(|| apples.calculate_cost.call(0, 3.34));

    assert!(outcome.is_failure());
    let contained: Vec<_> = capture
        .at(Level::DEBUG)
        .into_iter()
        .filter(|event| event.message == "contained failure")
        .collect();
    assert_eq!(contained.len(), 1);
    assert_eq!(contained[0].field("kind"), Some("domain"));
    assert_eq!(contained[0].field("reason"), Some(NO_APPLES));
}

#[test]
fn contained_panic_emits_debug_event() {
    let capture = EventCapture::new();
    let chain = fail_safe(|_: &(), (): ()| -> Result<u8, String> { panic!("gauge stuck") });

    let outcome = capture.run(|| chain.invoke(&(), ()));

    assert_eq!(outcome.message(), Some("gauge stuck"));
    let contained: Vec<_> = capture
        .at(Level::DEBUG)
        .into_iter()
        .filter(|event| event.message == "contained panic")
        .collect();
    assert_eq!(contained.len(), 1);
    assert_eq!(contained[0].field("reason"), Some("gauge stuck"));
}

#[test]
fn violation_emits_error_event_with_diagnostic() {
    let capture = EventCapture::new();
    let apples = Apples::bare(1.09);

    let result = capture.run(|| {
        panic::catch_unwind(AssertUnwindSafe(|| apples.calculate_cost.call(5, 3.34)))
    });

    assert!(result.is_err());
    let errors = capture.at(Level::ERROR);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, ContractViolation::Unassigned.diagnostic());
    assert!(errors[0].message.contains("before a callable was assigned"));
    assert!(errors[0].field("location").is_some_and(|at| at.contains("tracing_tests.rs")));
}
