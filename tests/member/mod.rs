use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use method_rail::decorators::{classmethod, fail_safe};
use method_rail::sink::MemorySink;
use method_rail::{ContractViolation, EnableMemberFn, MemberFn, Outcome};

use crate::common::{assert_close, Apples, LOG_LINE, NO_APPLES, WEIGHTLESS};

pub mod enable;

#[test]
fn decorated_call_returns_raw_value() {
    let sink = MemorySink::new();
    let apples = Apples::new(1.09, &sink);

    let outcome = apples.calculate_cost.call(5, 3.34);

    assert!(outcome.is_success());
    assert_close(*outcome.value(), 18.203);
    assert_close(outcome.into_value(), apples.calculate_cost_impl(5, 3.34).unwrap());
}

#[test]
fn success_emits_report_then_log_line() {
    let sink = MemorySink::new();
    let apples = Apples::new(1.09, &sink);

    let _ = apples.calculate_cost.call(5, 3.34);

    let lines = sink.lines();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Bag cost $18.20"), "unexpected report line: {}", lines[0]);
    assert_eq!(lines[1], LOG_LINE);
}

#[test]
fn non_positive_count_is_contained() {
    let sink = MemorySink::new();
    let apples = Apples::new(1.09, &sink);

    let outcome = apples.calculate_cost.call(0, 3.34);

    assert_eq!(outcome.message(), Some(NO_APPLES));
    assert_eq!(
        sink.lines(),
        vec![format!("There was an error: {NO_APPLES}"), LOG_LINE.to_string()]
    );
}

#[test]
fn non_positive_weight_is_contained() {
    let sink = MemorySink::new();
    let apples = Apples::new(1.09, &sink);

    let outcome = apples.calculate_cost.call(5, 0.0);

    assert_eq!(outcome.message(), Some(WEIGHTLESS));
    assert_eq!(sink.len(), 2);
}

#[test]
fn repeated_calls_are_independent() {
    let sink = MemorySink::new();
    let apples = Apples::new(1.09, &sink);

    let first = apples.calculate_cost.call(5, 3.34);
    let second = apples.calculate_cost.call(5, 3.34);
    assert_eq!(first, second);

    let first = apples.calculate_cost.call(0, 3.34);
    let second = apples.calculate_cost.call(0, 3.34);
    assert_eq!(first, second);

    assert_eq!(sink.len(), 8);
}

#[test]
fn reassignment_replaces_the_chain() {
    let sink = MemorySink::new();
    let apples = Apples::new(1.09, &sink);

    apples
        .calculate_cost
        .assign(|owner: &Apples, (count, _weight): (i32, f64)| {
            Outcome::success(f64::from(count) * owner.cost_per_apple)
        });

    let outcome = apples.calculate_cost.call(2, 100.0);
    assert_close(outcome.into_value(), 2.18);
    // the new chain has no reporting or logging
    assert!(sink.is_empty());

    let outcome = apples.calculate_cost.call(0, 3.34);
    assert!(outcome.is_success());
}

#[test]
fn callable_may_reassign_its_own_slot() {
    let apples = Apples::bare(1.0);

    apples.calculate_cost.assign(|owner: &Apples, (_count, _weight): (i32, f64)| {
        owner.calculate_cost.assign(|_: &Apples, _: (i32, f64)| Outcome::success(2.0));
        Outcome::success(1.0)
    });

    assert_eq!(apples.calculate_cost.call(1, 1.0).into_value(), 1.0);
    assert_eq!(apples.calculate_cost.call(1, 1.0).into_value(), 2.0);
}

#[test]
fn unassigned_slot_reports_contract_violation() {
    let apples = Apples::bare(1.09);

    assert!(!apples.calculate_cost.is_assigned());
    assert_eq!(apples.calculate_cost.try_call(5, 3.34), Err(ContractViolation::Unassigned));
}

#[test]
fn unassigned_slot_panics_with_violation_payload() {
    let apples = Apples::bare(1.09);

    let payload = panic::catch_unwind(AssertUnwindSafe(|| apples.calculate_cost.call(5, 3.34)))
        .expect_err("calling an unassigned slot must panic");

    assert_eq!(
        ContractViolation::from_panic(payload.as_ref()),
        Some(&ContractViolation::Unassigned)
    );
}

#[test]
fn contract_violation_escapes_fail_safe() {
    struct Outer {
        inner: Rc<Apples>,
        delegate: MemberFn<Outer, fn(i32) -> Outcome<f64>>,
    }

    impl EnableMemberFn for Outer {}

    impl Outer {
        fn forward(&self, count: i32) -> Result<f64, String> {
            Ok(self.inner.calculate_cost.call(count, 1.0).into_value())
        }
    }

    let outer = Outer::new_bound(|me| Outer {
        inner: Apples::bare(1.0),
        delegate: Outer::member_fn(me).with(fail_safe(classmethod(Outer::forward))),
    });

    let payload = panic::catch_unwind(AssertUnwindSafe(|| outer.delegate.call(3)))
        .expect_err("violation must not be contained");

    assert_eq!(
        ContractViolation::from_panic(payload.as_ref()),
        Some(&ContractViolation::Unassigned)
    );
}

#[test]
fn slot_detached_from_dropped_owner_is_a_violation() {
    let sink = MemorySink::new();
    let apples = Apples::new(1.09, &sink);
    let detached = apples.calculate_cost.clone();

    drop(apples);

    assert!(detached.owner().is_none());
    assert_eq!(detached.try_call(5, 3.34), Err(ContractViolation::OwnerDropped));
    assert!(sink.is_empty());
}

#[test]
fn clone_keeps_owner_and_callable() {
    let sink = MemorySink::new();
    let apples = Apples::new(1.09, &sink);

    let copy = apples.calculate_cost.clone();
    assert!(copy.is_assigned());
    assert!(Rc::ptr_eq(&copy.owner().unwrap(), &apples));
    assert_close(copy.call(5, 3.34).into_value(), 18.203);

    // reassigning the copy leaves the original untouched
    copy.assign(|_: &Apples, _: (i32, f64)| Outcome::success(0.0));
    assert_close(apples.calculate_cost.call(5, 3.34).into_value(), 18.203);
}

#[test]
fn owner_state_changes_are_visible_through_receiver() {
    struct Tally {
        total: Cell<u32>,
        add: MemberFn<Tally, fn(u32) -> u32>,
    }

    impl EnableMemberFn for Tally {}

    let tally = Tally::new_bound(|me| Tally {
        total: Cell::new(0),
        add: Tally::member_fn(me).with(|owner: &Tally, (n,): (u32,)| {
            owner.total.set(owner.total.get() + n);
            owner.total.get()
        }),
    });

    assert_eq!(tally.add.call(2), 2);
    assert_eq!(tally.add.call(3), 5);
    assert_eq!(tally.total.get(), 5);
}

#[test]
fn zero_argument_slots_work_uniformly() {
    struct Clockwork {
        ticks: u8,
        read: MemberFn<Clockwork, fn() -> u8>,
    }

    impl EnableMemberFn for Clockwork {}

    impl Clockwork {
        fn read_impl(&self) -> u8 {
            self.ticks
        }
    }

    let clockwork = Clockwork::new_bound(|me| Clockwork {
        ticks: 7,
        read: Clockwork::member_fn(me).with(classmethod(Clockwork::read_impl)),
    });

    assert_eq!(clockwork.read.call(), 7);
    assert_eq!(clockwork.read.call_with(()), 7);
}

#[test]
fn debug_reports_slot_state() {
    let apples = Apples::bare(1.0);
    let rendered = format!("{:?}", apples.calculate_cost);

    assert!(rendered.contains("arity: 2"));
    assert!(rendered.contains("assigned: false"));
    assert!(rendered.contains("owner_alive: true"));
}
