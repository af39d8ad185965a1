//! The unit of work: a callable handle plus its captured argument.
//!
//! Call shapes are a closed enumeration sized at compile time: a zero-arg
//! `fn()` or a one-arg-by-value `fn(P)`. This keeps tasks allocation-free
//! (no boxed closures) while still supporting a typed payload per queue
//! instance. Identity is derived from the function pointer alone, so two
//! tasks bound to the same function compare equal regardless of their
//! arguments - this is what revocation matches on.

/// Outcome of attempting to run a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// The callable was invoked with its captured argument.
    Ran,
    /// The task was empty or its argument was already consumed.
    NothingToRun,
}

/// Comparable-by-identity handle for a task's callable.
///
/// Derived from the function pointer's address, independent of any bound
/// argument. Used by [`DelayedSchedule::revoke`] to match entries.
///
/// [`DelayedSchedule::revoke`]: crate::core::DelayedSchedule::revoke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallableId(usize);

impl CallableId {
    /// Identity of a zero-arg callable.
    pub fn of(f: fn()) -> Self {
        Self(f as usize)
    }

    /// Identity of a one-arg callable.
    pub fn of_unary<P>(f: fn(P)) -> Self {
        Self(f as usize)
    }
}

/// Closed set of supported call shapes.
#[derive(Debug)]
enum Binding<P> {
    Bare(fn()),
    Unary(fn(P)),
}

/// A stored callable plus its captured argument; the unit of work.
///
/// A task is either *empty* (no callable bound) or *runnable* (callable
/// bound, argument valid for its shape). Running consumes the argument
/// exactly once but does **not** clear the callable: callers reset
/// explicitly, which lets revocation inspect a still-bound task's identity
/// before clearing it.
#[derive(Debug)]
pub struct Task<P> {
    binding: Option<Binding<P>>,
    arg: Option<P>,
}

impl<P> Default for Task<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P> Task<P> {
    /// An empty task (no callable bound).
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            binding: None,
            arg: None,
        }
    }

    /// A runnable zero-arg task.
    #[must_use]
    pub fn bare(run: fn()) -> Self {
        let mut task = Self::empty();
        task.set_bare(run);
        task
    }

    /// A runnable one-arg task capturing `arg` by value.
    #[must_use]
    pub fn unary(run: fn(P), arg: P) -> Self {
        let mut task = Self::empty();
        task.set_unary(run, arg);
        task
    }

    /// Binds a zero-arg callable, overwriting any previous binding.
    pub fn set_bare(&mut self, run: fn()) {
        self.binding = Some(Binding::Bare(run));
        self.arg = None;
    }

    /// Binds a one-arg callable and its argument, overwriting any previous
    /// binding.
    pub fn set_unary(&mut self, run: fn(P), arg: P) {
        self.binding = Some(Binding::Unary(run));
        self.arg = Some(arg);
    }

    /// Clears the task back to empty. Idempotent.
    pub fn reset(&mut self) {
        self.binding = None;
        self.arg = None;
    }

    /// True iff a callable is bound and its argument (if any) is still
    /// available.
    #[must_use]
    pub const fn is_runnable(&self) -> bool {
        match &self.binding {
            Some(Binding::Bare(_)) => true,
            Some(Binding::Unary(_)) => self.arg.is_some(),
            None => false,
        }
    }

    /// Invokes the callable with its captured argument, consuming the
    /// argument exactly once.
    ///
    /// Returns [`RunStatus::NothingToRun`] for an empty task or one whose
    /// argument was already consumed; neither case has side effects. The
    /// callable stays bound either way - clearing is the caller's job via
    /// [`Task::reset`].
    pub fn run(&mut self) -> RunStatus {
        match &self.binding {
            Some(Binding::Bare(f)) => {
                f();
                RunStatus::Ran
            }
            Some(Binding::Unary(f)) => {
                let f = *f;
                self.arg.take().map_or(RunStatus::NothingToRun, |arg| {
                    f(arg);
                    RunStatus::Ran
                })
            }
            None => RunStatus::NothingToRun,
        }
    }

    /// Identity of the bound callable, or `None` for an empty task.
    #[must_use]
    pub fn identity(&self) -> Option<CallableId> {
        match &self.binding {
            Some(Binding::Bare(f)) => Some(CallableId(*f as usize)),
            Some(Binding::Unary(f)) => Some(CallableId(*f as usize)),
            None => None,
        }
    }
}
