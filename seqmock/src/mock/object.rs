use std::cell::RefCell;
use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::rc::Rc;

use crate::call::{CONSTRUCTOR, ITERATE};
use crate::{verify, Args, Call, Result, Value};

/// Instance of a [`MockType`](super::MockType).
///
/// Every access to a method of the mock is recorded as [`Call`] in the order
/// it happened. If the recorded call equals the expectation at the same
/// position, the side effect of the expectation is executed and its return
/// value is produced. Mismatches are not reported until [`verify`](Self::verify)
/// is called.
///
/// Cloning a [`MockObject`] creates a new handle to the same instance.
#[derive(Clone)]
pub struct MockObject {
    inner: Rc<Inner>,
}

struct Inner {
    name: Rc<str>,
    expected: Rc<[Call]>,
    actual: RefCell<Vec<Call>>,
}

impl MockObject {
    pub(crate) fn construct(name: Rc<str>, expected: Rc<[Call]>, args: Args) -> Self {
        let mock = Self {
            inner: Rc::new(Inner {
                name,
                expected,
                actual: RefCell::new(Vec::new()),
            }),
        };

        let _ = mock.begin_call(CONSTRUCTOR).complete(args);

        mock
    }

    /// Get the display name of the mock.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Get the expected calls.
    #[must_use]
    pub fn expected(&self) -> &[Call] {
        &self.inner.expected
    }

    /// Get a snapshot of the calls that were recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<Call> {
        self.inner.actual.borrow().clone()
    }

    /// Record an access to the method `name`.
    ///
    /// The call is recorded without arguments. Use [`PendingCall::complete`]
    /// to attach the arguments of the invocation and to get the configured
    /// return value.
    pub fn begin_call<S: Into<String>>(&self, name: S) -> PendingCall<'_> {
        let call = Call::new(name);

        let mut actual = self.inner.actual.borrow_mut();
        let index = actual.len();

        tracing::trace!(mock = %self.name(), call = %call, index, "record call");

        actual.push(call);

        PendingCall { mock: self, index }
    }

    /// Alias of [`begin_call`](Self::begin_call).
    ///
    /// ```
    /// use seqmock::{args, Call, MockType};
    ///
    /// let mock = MockType::new("mock", [
    ///     Call::constructor(),
    ///     Call::new("run").with_args(args![1, 2]).and_return(true),
    /// ]);
    ///
    /// let obj = mock.instantiate(args![]);
    /// let ret = obj.method("run").complete(args![1, 2]);
    ///
    /// assert_eq!(Some(true), ret.and_then(|v| v.get::<bool>()));
    /// ```
    pub fn method<S: Into<String>>(&self, name: S) -> PendingCall<'_> {
        self.begin_call(name)
    }

    /// Record and complete a call to the iteration protocol of the mock.
    pub fn iterate(&self) -> Option<Value> {
        self.begin_call(ITERATE).complete(Args::new())
    }

    /// Verify the recorded calls against the expected calls.
    ///
    /// # Errors
    /// Returns the first divergence between the expected and the recorded
    /// calls.
    pub fn verify(&self) -> Result<()> {
        let actual = self.inner.actual.borrow();

        verify::verify(&self.inner.expected, &actual).inspect_err(|err| {
            tracing::debug!(mock = %self.name(), %err, "verification failed");
        })
    }

    fn complete(&self, index: usize, args: Args) -> Option<Value> {
        let actual = {
            let mut actual = self.inner.actual.borrow_mut();
            let call = actual.get_mut(index)?;
            call.set_args(args);

            call.clone()
        };

        tracing::trace!(mock = %self.name(), call = %actual, args = %actual.args(), index, "complete call");

        let Some(expected) = self.inner.expected.get(index) else {
            tracing::debug!(mock = %self.name(), call = %actual, index, "no expectation left");

            return None;
        };

        if *expected != actual {
            tracing::debug!(
                mock = %self.name(),
                expected = ?expected,
                actual = ?actual,
                index,
                "call does not match expectation"
            );

            return None;
        }

        tracing::debug!(mock = %self.name(), call = %actual, index, "call matched expectation");

        expected.side_effect().exec(actual.args());

        expected.return_value().cloned()
    }
}

impl<'a> IntoIterator for &'a MockObject {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        let items = match self.iterate() {
            Some(value) => match value.get::<Vec<Value>>() {
                Some(items) => items,
                None => vec![value],
            },
            None => Vec::new(),
        };

        items.into_iter()
    }
}

impl Display for MockObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.name())
    }
}

impl Debug for MockObject {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MockObject")
            .field("name", &self.name())
            .field("expected", &self.expected())
            .field("actual", &*self.inner.actual.borrow())
            .finish()
    }
}

/// A recorded method access that was not completed with arguments yet.
///
/// Dropping the pending call keeps the access recorded without arguments.
#[derive(Debug)]
pub struct PendingCall<'a> {
    mock: &'a MockObject,
    index: usize,
}

impl PendingCall<'_> {
    /// Get the position of the call in the recorded call sequence.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Attach the `args` to the recorded call and execute the matching
    /// expectation.
    ///
    /// Returns the configured return value if the expectation at the same
    /// position equals the completed call, `None` otherwise.
    pub fn complete<A: Into<Args>>(self, args: A) -> Option<Value> {
        self.mock.complete(self.index, args.into())
    }
}
