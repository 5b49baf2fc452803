//! Integration tests for [`fnsig`].

#![no_std]
#![deny(clippy::std_instead_of_core)]

extern crate std;

mod exclusive;
mod invoke;
mod no_unwind;

/// Callable that reports which binding mode it was called through.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeReporter;

pub const NO_QS: u8 = 0;
pub const CONST_QS: u8 = 1;
pub const RVREF_QS: u8 = 2;

impl fnsig::Callable<()> for ModeReporter {
    type Output = u8;

    fn call(&self, (): ()) -> u8 {
        CONST_QS
    }

    fn call_mutable(&self, (): ()) -> u8 {
        NO_QS
    }

    fn call_transient(&self, (): ()) -> u8 {
        RVREF_QS
    }

    fn call_shared_transient(&self, (): ()) -> u8 {
        CONST_QS | RVREF_QS
    }
}

/// Type with a data member and a method consuming its receiver's state.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Letter {
    pub c: char,
}

impl Letter {
    pub fn next(&mut self) -> Letter {
        Letter {
            c: char::from(self.c as u8 + 1),
        }
    }

    pub fn is(&self, c: char) -> bool {
        self.c == c
    }
}
