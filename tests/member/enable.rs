use std::rc::Rc;

use method_rail::decorators::{classmethod, fail_safe, with_context};
use method_rail::{enable_member_fn, EnableMemberFn, MemberFn, Outcome};

struct Inventory {
    stock: u32,
    take: InventoryFn<fn(u32) -> Outcome<u32>>,
    peek: InventoryFn<fn() -> u32>,
}

enable_member_fn!(Inventory as InventoryFn);

impl Inventory {
    fn new(stock: u32) -> Rc<Self> {
        Self::new_bound(|me| Inventory {
            stock,
            take: Self::member_fn(me)
                .with(with_context(fail_safe(classmethod(Self::take_impl)), "take")),
            peek: Self::member_fn(me).with(classmethod(Self::peek_impl)),
        })
    }

    fn take_impl(&self, count: u32) -> Result<u32, String> {
        self.stock.checked_sub(count).ok_or_else(|| format!("only {} left", self.stock))
    }

    fn peek_impl(&self) -> u32 {
        self.stock
    }
}

struct Plain;

enable_member_fn!(Plain);

#[test]
fn alias_declares_slots_for_the_owner() {
    let inventory = Inventory::new(3);

    assert_eq!(inventory.take.call(2).into_value(), 1);
    assert_eq!(inventory.peek.call(), 3);

    let failure = inventory.take.call(5).as_failure().cloned().unwrap();
    assert_eq!(failure.message(), "only 3 left");
    assert_eq!(failure.context()[0], "take");
}

#[test]
fn alias_and_full_type_are_identical() {
    fn same<T>(_: &T, _: &T) {}

    let inventory = Inventory::new(1);
    let full: MemberFn<Inventory, fn(u32) -> Outcome<u32>> = inventory.take.clone();
    same(&inventory.take, &full);
}

#[test]
fn plain_form_only_adopts_the_trait() {
    let plain = Plain::new_bound(|_| Plain);
    let slot = Plain::member_fn::<fn(u8) -> u8>(&Rc::downgrade(&plain));

    slot.assign(|_: &Plain, (x,): (u8,)| x + 1);
    assert_eq!(slot.call(1), 2);
}

#[test]
fn slots_are_bound_to_the_constructed_instance() {
    let first = Inventory::new(4);
    let second = Inventory::new(9);

    assert!(Rc::ptr_eq(&first.take.owner().unwrap(), &first));
    assert_eq!(first.peek.call(), 4);
    assert_eq!(second.peek.call(), 9);
}
