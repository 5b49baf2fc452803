use crate::{Letter, ModeReporter, CONST_QS, NO_QS, RVREF_QS};
use core::cell::Cell;
use fnsig::{mode, BindKind, BindMode, Discard, Invocable};
use std::string::ToString;

fn invocable<F, Args, R>(_: &F) -> bool
where
    F: Invocable<Args, R>,
{
    true
}

#[test]
fn plain_call() {
    let add = |a: i32, b: i32| a + b;
    assert_eq!(fnsig::invoke(&add, (2, 3)), 5);
    assert_eq!(fnsig::invoke(&i32::max, (2, 3)), 3);

    let pointer: fn(i32) -> i32 = i32::wrapping_neg;
    assert_eq!(fnsig::invoke(&pointer, (4,)), -4);
}

#[test]
fn converted_result() {
    let small = |x: u8| x;
    assert!(invocable::<_, (u8,), u64>(&small));
    assert_eq!(fnsig::invoke_r::<u64, _, _>(&small, (200,)), 200u64);

    let borrowed = || "text";
    assert_eq!(
        fnsig::invoke_r::<std::string::String, _, _>(&borrowed, ()),
        "text"
    );
}

#[test]
fn discarded_result() {
    let calls = Cell::new(0);
    let counted = |x: u32| {
        calls.set(calls.get() + 1);
        x * 2
    };

    fnsig::invoke_discarding(&counted, (1,));
    fnsig::invoke_discarding(&counted, (2,));
    assert_eq!(calls.get(), 2, "discarding must still perform the call");

    let unit = || ();
    fnsig::invoke_discarding(&unit, ());
}

#[test]
fn binding_modes() {
    let reporter = ModeReporter;
    assert_eq!(fnsig::invoke(&reporter, ()), CONST_QS);
    assert_eq!(fnsig::invoke_in::<mode::Mutable, _, _>(&reporter, ()), NO_QS);
    assert_eq!(fnsig::invoke_in::<mode::Shared, _, _>(&reporter, ()), CONST_QS);
    assert_eq!(fnsig::invoke_in::<mode::Transient, _, _>(&reporter, ()), RVREF_QS);
    assert_eq!(
        fnsig::invoke_in::<mode::SharedTransient, _, _>(&reporter, ()),
        CONST_QS | RVREF_QS
    );

    fnsig::invoke_adapted::<mode::Transient, Discard, (), _, _>(&reporter, ());
    assert_eq!(
        fnsig::invoke_adapted::<mode::SharedTransient, fnsig::Convert, i64, _, _>(&reporter, ()),
        i64::from(CONST_QS | RVREF_QS)
    );
}

#[test]
fn closures_ignore_binding_modes() {
    let f = || 9;
    assert_eq!(fnsig::invoke_in::<mode::Mutable, _, _>(&f, ()), 9);
    assert_eq!(fnsig::invoke_in::<mode::Transient, _, _>(&f, ()), 9);
}

#[test]
fn members_through_invoke() {
    let letter = Letter { c: 'k' };
    assert_eq!(fnsig::invoke(&fnsig::field!(Letter, c), (&letter,)), 'k');
    assert_eq!(
        fnsig::invoke_r::<u32, _, _>(&fnsig::field!(Letter, c), (letter,)),
        u32::from('k')
    );
}

#[test]
fn bind_kind_descriptions() {
    assert_eq!(mode::Mutable::KIND, BindKind::Mutable);
    assert!(mode::SharedTransient::KIND.is_shared());
    assert!(mode::SharedTransient::KIND.is_transient());
    assert!(!mode::Mutable::KIND.is_shared());
    assert!(!mode::Shared::KIND.is_transient());

    insta::assert_snapshot!(BindKind::Mutable.to_string(), @"mutable");
    insta::assert_snapshot!(BindKind::SharedTransient.to_string(), @"shared transient");
}
