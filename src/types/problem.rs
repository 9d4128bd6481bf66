//! The `Problem` capability and its basic implementation.
//!
//! A problem is a domain-level failure with a human-readable `detail`. Any
//! type can become a problem by implementing [`Problem`]; outcomes carry
//! problems behind a shared [`ProblemRef`] so that a problem raised at the
//! start of a long chain reaches the end as the very same allocation.
//!
//! Two problems are equal when they have the same concrete type and the same
//! detail. Types with extra fields may narrow that by overriding
//! [`Problem::same_problem`].

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::borrow::Cow;
use std::sync::Arc;

use super::outcome::Outcome;

/// Shared handle to a problem, as carried by [`Outcome::Problem`].
///
/// Compare two handles through the problems they point to (`*a == *b`);
/// `a == b` on the handles themselves moves the right-hand side.
pub type ProblemRef = Arc<dyn Problem>;

/// Upcast helper so `dyn Problem` can be inspected as `dyn Any`.
///
/// Implemented for every sized `Any + Send + Sync` type; there is no need to
/// implement it by hand.
pub trait AsAny: Any + Send + Sync {
    /// Returns `self` as `&dyn Any`.
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Send + Sync> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A domain-level failure.
///
/// # Example
///
/// ```
/// use outcomes::{Outcome, Problem};
///
/// #[derive(Debug)]
/// struct OutOfStock {
///     sku: String,
///     detail: String,
/// }
///
/// impl Problem for OutOfStock {
///     fn detail(&self) -> &str {
///         &self.detail
///     }
/// }
///
/// let outcome: Outcome<u32> = OutOfStock {
///     sku: "A-1".into(),
///     detail: "A-1 is out of stock".into(),
/// }
/// .into_outcome();
/// assert!(outcome.problem().is_some_and(|p| p.is::<OutOfStock>()));
/// ```
pub trait Problem: AsAny + fmt::Debug {
    /// Human-readable description of what went wrong.
    fn detail(&self) -> &str;

    /// Type-appropriate equality against another problem.
    ///
    /// The default requires the same concrete type and an equal detail.
    fn same_problem(&self, other: &dyn Problem) -> bool {
        AsAny::as_any(self).type_id() == other.as_any().type_id() && self.detail() == other.detail()
    }

    /// Wraps this problem in a problem outcome of any value type.
    fn into_outcome<T>(self) -> Outcome<T>
    where
        Self: Sized,
    {
        Outcome::Problem(Arc::new(self))
    }

    /// Moves this problem behind a shared handle.
    fn shared(self) -> ProblemRef
    where
        Self: Sized,
    {
        Arc::new(self)
    }
}

impl dyn Problem {
    /// Returns true if the concrete type of this problem is `P`.
    #[must_use]
    pub fn is<P: Problem>(&self) -> bool {
        self.as_any().is::<P>()
    }

    /// Returns the concrete problem if it is of type `P`.
    #[must_use]
    pub fn downcast_ref<P: Problem>(&self) -> Option<&P> {
        self.as_any().downcast_ref::<P>()
    }
}

impl PartialEq for dyn Problem {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::addr_eq(self, other) || self.same_problem(other)
    }
}

impl Eq for dyn Problem {}

impl Hash for dyn Problem {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_any().type_id().hash(state);
        self.detail().hash(state);
    }
}

impl fmt::Display for dyn Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.detail())
    }
}

/// Conversion into a shared problem handle.
///
/// Lets constructors such as [`Outcome::fail`] accept either a concrete
/// problem or a [`ProblemRef`] that is already shared.
pub trait IntoProblem {
    /// Converts `self` into a [`ProblemRef`].
    fn into_problem(self) -> ProblemRef;
}

impl<P: Problem> IntoProblem for P {
    fn into_problem(self) -> ProblemRef {
        Arc::new(self)
    }
}

impl IntoProblem for ProblemRef {
    fn into_problem(self) -> ProblemRef {
        self
    }
}

/// A problem that carries nothing but its detail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BasicProblem {
    detail: Cow<'static, str>,
}

impl BasicProblem {
    /// Creates a problem with the given detail.
    #[must_use]
    pub fn new(detail: impl Into<Cow<'static, str>>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

impl Problem for BasicProblem {
    fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for BasicProblem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.detail)
    }
}

impl From<&'static str> for BasicProblem {
    fn from(detail: &'static str) -> Self {
        Self::new(detail)
    }
}

impl From<String> for BasicProblem {
    fn from(detail: String) -> Self {
        Self::new(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn init_test(name: &str) {
        crate::test_utils::init_test_logging();
        crate::test_phase!(name);
    }

    #[derive(Debug)]
    struct NotFound {
        detail: String,
    }

    impl Problem for NotFound {
        fn detail(&self) -> &str {
            &self.detail
        }
    }

    #[derive(Debug)]
    struct Conflict {
        version: u64,
    }

    impl Problem for Conflict {
        fn detail(&self) -> &str {
            "version conflict"
        }

        fn same_problem(&self, other: &dyn Problem) -> bool {
            other
                .downcast_ref::<Self>()
                .is_some_and(|o| o.version == self.version)
        }
    }

    fn shared(p: impl Problem) -> ProblemRef {
        Arc::new(p)
    }

    #[test]
    fn same_type_and_detail_are_equal() {
        init_test("same_type_and_detail_are_equal");
        let a = shared(BasicProblem::new("x"));
        let b = shared(BasicProblem::new("x"));
        let equal = *a == *b;
        crate::assert_with_log!(equal, "same detail equal", true, equal);
        let different = shared(BasicProblem::new("y"));
        let unequal = *a != *different;
        crate::assert_with_log!(unequal, "different detail", true, unequal);
        crate::test_complete!("same_type_and_detail_are_equal");
    }

    #[test]
    fn different_types_with_same_detail_are_not_equal() {
        init_test("different_types_with_same_detail_are_not_equal");
        let basic = shared(BasicProblem::new("missing"));
        let typed = shared(NotFound {
            detail: "missing".into(),
        });
        let equal = *basic == *typed;
        crate::assert_with_log!(!equal, "cross-type equality", false, equal);
        let reverse = *typed == *basic;
        crate::assert_with_log!(!reverse, "symmetric", false, reverse);
        crate::test_complete!("different_types_with_same_detail_are_not_equal");
    }

    #[test]
    fn same_allocation_is_equal() {
        init_test("same_allocation_is_equal");
        let a = shared(Conflict { version: 1 });
        let b = Arc::clone(&a);
        let identical = *a == *b;
        crate::assert_with_log!(identical, "identity", true, identical);
        crate::test_complete!("same_allocation_is_equal");
    }

    #[test]
    fn narrowed_equality_uses_extra_fields() {
        init_test("narrowed_equality_uses_extra_fields");
        let v1 = shared(Conflict { version: 1 });
        let v1_again = shared(Conflict { version: 1 });
        let v2 = shared(Conflict { version: 2 });
        let same = *v1 == *v1_again;
        crate::assert_with_log!(same, "same version", true, same);
        let differs = *v1 != *v2;
        crate::assert_with_log!(differs, "different version", true, differs);
        crate::test_complete!("narrowed_equality_uses_extra_fields");
    }

    #[test]
    fn downcast_recovers_concrete_type() {
        init_test("downcast_recovers_concrete_type");
        let p = shared(NotFound {
            detail: "order 7".into(),
        });
        let found = p.downcast_ref::<NotFound>().map(|n| n.detail.clone());
        crate::assert_with_log!(
            found.as_deref() == Some("order 7"),
            "downcast detail",
            Some("order 7"),
            found
        );
        crate::assert_with_log!(!p.is::<BasicProblem>(), "not basic", false, p.is::<BasicProblem>());
        crate::test_complete!("downcast_recovers_concrete_type");
    }

    #[test]
    fn equal_problems_hash_alike() {
        init_test("equal_problems_hash_alike");
        let mut set: HashSet<ProblemRef> = HashSet::new();
        set.insert(shared(BasicProblem::new("x")));
        set.insert(shared(BasicProblem::new("x")));
        set.insert(shared(NotFound { detail: "x".into() }));
        crate::assert_with_log!(set.len() == 2, "distinct problems", 2, set.len());
        crate::test_complete!("equal_problems_hash_alike");
    }

    #[test]
    fn display_prints_detail() {
        init_test("display_prints_detail");
        let p = shared(BasicProblem::new(String::from("disk full")));
        let text = p.to_string();
        crate::assert_with_log!(text == "disk full", "display", "disk full", text);
        crate::test_complete!("display_prints_detail");
    }

    #[test]
    fn into_problem_keeps_shared_handle() {
        init_test("into_problem_keeps_shared_handle");
        let original = shared(BasicProblem::new("x"));
        let converted = Arc::clone(&original).into_problem();
        let same = Arc::ptr_eq(&original, &converted);
        crate::assert_with_log!(same, "no re-wrap", true, same);
        crate::test_complete!("into_problem_keeps_shared_handle");
    }
}
