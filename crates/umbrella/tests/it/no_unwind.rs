use crate::Letter;
use core::cell::Cell;
use fnsig::{field, FnRef, FnRefKind, NoUnwind, NoUnwindFnRef};

const _: () = assert!(<NoUnwindFnRef<'static, fn()> as FnRefKind<'static>>::NO_UNWIND);
const _: () = assert!(!<FnRef<'static, fn()> as FnRefKind<'static>>::NO_UNWIND);

fn no_unwind_of<'a, K: FnRefKind<'a>>(_: &K) -> bool {
    K::NO_UNWIND
}

fn call_any<'a, K>(f: K, x: u8) -> u8
where
    K: FnRefKind<'a, Signature = fn(u8) -> u8>,
{
    f.call_with((x,))
}

#[test]
fn round_trip() {
    let noop = NoUnwind::new(|| ());
    let refined = NoUnwindFnRef::<fn()>::new(&noop);
    refined.call();
    assert!(no_unwind_of(&refined));

    let general: FnRef<'_, fn()> = refined.into();
    general.call();
    assert!(!no_unwind_of(&general));
    assert!(FnRef::ptr_eq(&general, refined.as_fn_ref()));
    assert!(general.refers_to(&noop));
}

#[test]
fn upcast_behaves_like_general() {
    let calls = Cell::new(0u8);
    let counted = NoUnwind::new(|x: u8| {
        calls.set(calls.get() + 1);
        x + calls.get()
    });

    let refined = NoUnwindFnRef::<fn(u8) -> u8>::new(&counted);
    let general = FnRef::<fn(u8) -> u8>::new(&counted);

    assert_eq!(refined.call(10), 11);
    assert_eq!(general.call(10), 12);
    assert_eq!(refined.as_fn_ref().call(10), 13);
    assert_eq!(refined.into_fn_ref().call(10), 14);
    assert_eq!(call_any(refined, 10), 15);
    assert_eq!(call_any(general, 10), 16);
    assert_eq!(refined.call_with((10,)), 17);
}

#[test]
fn deref_to_general() {
    fn call_general(f: &FnRef<'_, fn(u8) -> u8>) -> u8 {
        f.call(4)
    }

    let double = NoUnwind::new(|x: u8| x * 2);
    let refined = NoUnwindFnRef::<fn(u8) -> u8>::new(&double);
    assert_eq!(call_general(&refined), 8);
    assert!(refined.refers_to(&double));
}

#[test]
fn copied_fields_never_unwind() {
    let c = field!(Letter, c);
    let refined = NoUnwindFnRef::<fn(Letter) -> char>::new(&c);
    assert_eq!(refined.call(Letter { c: 'n' }), 'n');

    NoUnwindFnRef::<fn(Letter)>::discarding(&c).call(Letter { c: 'm' });
}

#[test]
fn discarding_no_unwind() {
    let calls = Cell::new(0);
    let counted = NoUnwind::new(|| {
        calls.set(calls.get() + 1);
        "result"
    });

    let refined = NoUnwindFnRef::<fn()>::discarding(&counted);
    refined.call();
    refined.call();
    assert_eq!(calls.get(), 2);
}

#[test]
fn debug_output() {
    let noop = NoUnwind::new(|| ());
    let refined = NoUnwindFnRef::<fn()>::new(&noop);
    let debug = std::format!("{refined:?}");
    assert!(debug.starts_with("NoUnwindFnRef(FnRef"), "{debug}");
}

#[test]
fn lossless_conversions_never_unwind() {
    let same = NoUnwind::new(|x: u8| x);
    let widened = NoUnwindFnRef::<fn(u8) -> u32>::new(&same);
    assert_eq!(widened.call(7), 7u32);

    let half = NoUnwind::new(|| 1.5f32);
    assert_eq!(NoUnwindFnRef::<fn() -> f64>::new(&half).call(), 1.5);
}

#[test]
fn refined_wrapper_rebound() {
    let three = NoUnwind::new(|| 3u8);
    let narrow = NoUnwindFnRef::<fn() -> u8>::new(&three);
    let wide = NoUnwindFnRef::<fn() -> u16>::new(&narrow);

    assert_eq!(wide.call(), 3u16);
    assert!(wide.refers_to(&narrow));
    assert_eq!(FnRef::<fn() -> u64>::new(&narrow).call(), 3);
}

const ABORTING_CHILD: &str = "FNSIG_ABORTING_CHILD";

/// Only does something when started by `panic_inside_call_aborts`.
#[test]
fn aborting_child() {
    if std::env::var_os(ABORTING_CHILD).is_none() {
        return;
    }

    let fails = NoUnwind::new(|| -> u8 { panic!("unwinding out of a call that must not unwind") });
    NoUnwindFnRef::<fn() -> u8>::new(&fails).call();
}

#[test]
fn panic_inside_call_aborts() {
    let test_binary = std::env::current_exe().expect("path to the test binary");
    let output = std::process::Command::new(test_binary)
        .args([
            "no_unwind::aborting_child",
            "--exact",
            "--nocapture",
            "--test-threads=1",
        ])
        .env(ABORTING_CHILD, "1")
        .output()
        .expect("could not start child test");

    let stderr = std::string::String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "child should abort:\n{stderr}");
    assert!(
        stderr.contains("fatal: a call that must not unwind panicked, aborting"),
        "{stderr}"
    );

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        // SIGABRT
        assert_eq!(output.status.signal(), Some(6), "{:?}", output.status);
    }
}
