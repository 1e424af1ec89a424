//! The grocery example: a `calculate_cost` member wrapped in logging,
//! reporting and failure containment.
use std::fmt;
use std::rc::Rc;

use method_rail::prelude::*;

#[derive(Debug)]
enum AppleError {
    NoApples,
    Weightless,
}

impl fmt::Display for AppleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoApples => f.write_str("must have 1 or more apples"),
            Self::Weightless => f.write_str("apples must weigh more than 0 ounces"),
        }
    }
}

impl_into_failure!(AppleError);

struct Apples {
    cost_per_apple: f64,
    calculate_cost: ApplesFn<fn(i32, f64) -> Outcome<f64>>,
}

enable_member_fn!(Apples as ApplesFn);

impl Apples {
    fn new(cost_per_apple: f64) -> Rc<Self> {
        Self::new_bound(|me| Apples {
            cost_per_apple,
            calculate_cost: Self::member_fn(me).with(log_time(report_to(
                fail_safe(classmethod(Self::calculate_cost_impl)),
                ReportFormat::labeled("Bag cost $"),
                method_rail::sink::StdoutSink,
            ))),
        })
    }

    fn calculate_cost_impl(&self, count: i32, weight: f64) -> Result<f64, AppleError> {
        if count <= 0 {
            return Err(AppleError::NoApples);
        }
        if weight <= 0.0 {
            return Err(AppleError::Weightless);
        }
        Ok(f64::from(count) * weight * self.cost_per_apple)
    }
}

fn main() {
    let groceries = Apples::new(1.09);

    let _ = groceries.calculate_cost.call(5, 3.34);
    let _ = groceries.calculate_cost.call(0, 3.34);
    let _ = groceries.calculate_cost.call(5, 0.0);
}
