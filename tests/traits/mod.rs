use std::any::TypeId;
use std::borrow::Cow;
use std::error::Error;

use method_rail::traits::{ArgsOf, IntoFailure, Invoke, OutputOf, Signature};
use method_rail::{impl_into_failure, Failure, FailureKind, Outcome};

fn type_of<T: 'static>() -> TypeId {
    TypeId::of::<T>()
}

#[test]
fn signature_extracts_output_and_ordered_args() {
    type Shape = fn(i32, f64) -> Outcome<f64>;

    assert_eq!(type_of::<OutputOf<Shape>>(), type_of::<Outcome<f64>>());
    assert_eq!(type_of::<ArgsOf<Shape>>(), type_of::<(i32, f64)>());
    assert_ne!(type_of::<ArgsOf<Shape>>(), type_of::<(f64, i32)>());
    assert_eq!(<Shape as Signature>::ARITY, 2);
}

#[test]
fn signature_handles_zero_and_many_args() {
    assert_eq!(type_of::<ArgsOf<fn() -> u8>>(), type_of::<()>());
    assert_eq!(<fn() -> u8 as Signature>::ARITY, 0);

    type Wide = fn(u8, u16, u32, u64, i8, i16, i32, i64) -> bool;
    assert_eq!(type_of::<ArgsOf<Wide>>(), type_of::<(u8, u16, u32, u64, i8, i16, i32, i64)>());
    assert_eq!(<Wide as Signature>::ARITY, 8);
}

#[test]
fn signature_is_deterministic() {
    type First = fn(String) -> Vec<u8>;
    type Second = fn(String) -> Vec<u8>;

    assert_eq!(type_of::<ArgsOf<First>>(), type_of::<ArgsOf<Second>>());
    assert_eq!(type_of::<OutputOf<First>>(), type_of::<OutputOf<Second>>());
}

#[test]
fn closures_invoke_with_receiver_and_tuple() {
    let join = |sep: &str, (a, b): (&str, &str)| format!("{a}{sep}{b}");
    assert_eq!(join.invoke(",", ("x", "y")), "x,y");
}

#[test]
fn into_failure_classifies_common_errors() {
    assert_eq!("bad".into_failure().kind(), FailureKind::Domain);
    assert_eq!(String::from("bad").into_failure().kind(), FailureKind::Domain);
    assert_eq!(Cow::Borrowed("bad").into_failure().message(), "bad");

    let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream ended");
    assert_eq!(io.into_failure(), Failure::io("stream ended"));

    let failure = Failure::domain("same");
    assert_eq!(failure.clone().into_failure(), failure);
}

#[test]
fn boxed_errors_keep_io_classification() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(std::io::Error::other("pipe"));
    assert_eq!(boxed.into_failure().kind(), FailureKind::Io);

    let boxed: Box<dyn Error + Send + Sync> = "parse".into();
    let failure = boxed.into_failure();
    assert_eq!(failure.kind(), FailureKind::Domain);
    assert_eq!(failure.message(), "parse");
}

#[derive(Debug)]
struct Timeout(u64);

impl std::fmt::Display for Timeout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "timed out after {}ms", self.0)
    }
}

impl_into_failure!(Timeout => Io);

#[test]
fn macro_implements_into_failure() {
    let failure = Timeout(250).into_failure();

    assert_eq!(failure.kind(), FailureKind::Io);
    assert_eq!(failure.message(), "timed out after 250ms");
}
