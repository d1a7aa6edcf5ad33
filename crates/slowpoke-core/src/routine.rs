//! Step-based routines: units of work resumed repeatedly by a scheduler.
//!
//! A routine is resumed once with [`Routine::start`] and afterwards only with
//! [`Routine::send`]. Keeping the first resumption a separate method means "no
//! value yet" is never encoded in the sent value itself, so a zero, empty or
//! `false` value is always delivered as a real value.

/// Outcome of one resumption.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<Y, R> {
    /// The routine suspended, handing `Y` to the scheduler.
    Yielded(Y),
    /// The routine finished with `R`.
    Complete(R),
}

impl<Y, R> Step<Y, R> {
    pub fn is_complete(&self) -> bool {
        matches!(self, Step::Complete(_))
    }
}

/// A routine that accepts [`Routine::Sent`] on every resumption after the
/// first.
///
/// Resuming a routine after it returned [`Step::Complete`] is a contract
/// violation; implementations may panic.
pub trait Routine {
    type Sent;
    type Yield;
    type Return;

    /// First resumption, carrying no value.
    fn start(&mut self) -> Step<Self::Yield, Self::Return>;

    /// Every later resumption, carrying the value the scheduler sends back.
    fn send(&mut self, value: Self::Sent) -> Step<Self::Yield, Self::Return>;

    /// Source line the routine is currently suspended at, if it tracks one.
    fn line(&self) -> Option<u32> {
        None
    }
}

/// Builds a fresh routine from an argument list.
///
/// Any `Fn(&A) -> R` is a factory; the routine it returns must own whatever it
/// needs from the arguments.
pub trait RoutineFactory<A> {
    type Routine;

    fn spawn(&self, args: A) -> Self::Routine;
}

impl<F, A, R> RoutineFactory<A> for F
where
    F: Fn(&A) -> R,
{
    type Routine = R;

    fn spawn(&self, args: A) -> R {
        self(&args)
    }
}
