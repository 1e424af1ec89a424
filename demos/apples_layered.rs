//! The grocery example with its chain assembled by `tower::ServiceBuilder`.
use std::rc::Rc;

use method_rail::prelude::*;
use method_rail::tower::{ContextLayer, FailSafeLayer, LogTimeLayer, ReportLayer};
use tower::ServiceBuilder;

struct Apples {
    cost_per_apple: f64,
    calculate_cost: ApplesFn<fn(i32, f64) -> Outcome<f64>>,
}

enable_member_fn!(Apples as ApplesFn);

impl Apples {
    fn new(cost_per_apple: f64) -> Rc<Self> {
        Self::new_bound(|me| {
            let chain = ServiceBuilder::new()
                .layer(LogTimeLayer::new().format(LogFormat::rfc3339()))
                .layer(ReportLayer::new().format(ReportFormat::labeled("Bag cost $").with_context_chain()))
                .layer(ContextLayer::new("calculate_cost"))
                .layer(FailSafeLayer)
                .service(classmethod(Self::calculate_cost_impl));

            Apples { cost_per_apple, calculate_cost: Self::member_fn(me).with(chain) }
        })
    }

    fn calculate_cost_impl(&self, count: i32, weight: f64) -> Result<f64, String> {
        if count <= 0 {
            return Err("must have 1 or more apples".into());
        }
        if weight <= 0.0 {
            return Err("apples must weigh more than 0 ounces".into());
        }
        Ok(f64::from(count) * weight * self.cost_per_apple)
    }
}

fn main() {
    let groceries = Apples::new(1.09);

    let _ = groceries.calculate_cost.call(5, 3.34);
    let _ = groceries.calculate_cost.call(0, 3.34);
}
