//! Property-based test generators and laws for the outcome types
//!
//! The merge laws are checked on the flattened atom sequence, since a
//! naive merge can silently reorder or double-flatten children.

use crate::either::Either;
use crate::errors::{Error, Fault, PanicFault};
use crate::outcome::Outcome;
use proptest::prelude::*;

/// Property-based test generators
pub mod generators {
    use super::*;
    use proptest::collection::vec;
    use proptest::string::string_regex;

    /// Generate error codes
    pub fn error_code() -> impl Strategy<Value = String> {
        string_regex("[0-9]{1,3}").unwrap()
    }

    /// Generate expected atoms
    pub fn expected_error() -> impl Strategy<Value = Error> {
        ("[a-z ]{1,16}", error_code())
            .prop_map(|(message, code)| Error::with_code(message, code))
    }

    /// Generate unexpected atoms wrapping a panic fault
    pub fn unexpected_error() -> impl Strategy<Value = Error> {
        let messages = proptest::option::of("[a-z]{1,8}");
        ("[a-z ]{1,16}", messages).prop_map(crashed)
    }

    fn crashed((fault, message): (String, Option<String>)) -> Error {
        let fault = Fault::new(PanicFault { message: fault });
        Error::from_fault_with(fault, message, "500")
    }

    /// Generate atoms of either kind
    pub fn atom() -> impl Strategy<Value = Error> {
        prop_oneof![expected_error(), unexpected_error()]
    }

    /// Generate atoms and collections, including the empty collection
    pub fn any_error() -> impl Strategy<Value = Error> {
        prop_oneof![atom(), vec(atom(), 0..5).prop_map(Error::merge_all)]
    }

    /// Generate unions with a string on the left
    pub fn either_of<R: std::fmt::Debug>(
        right: impl Strategy<Value = R>,
    ) -> impl Strategy<Value = Either<String, R>> {
        prop_oneof![
            "[a-z]{1,8}".prop_map(Either::Left),
            right.prop_map(Either::Right),
        ]
    }

    /// Generate outcomes
    pub fn outcome_of<T: std::fmt::Debug>(
        success: impl Strategy<Value = T>,
    ) -> impl Strategy<Value = Outcome<T>> {
        prop_oneof![
            any_error().prop_map(Outcome::Fail),
            success.prop_map(Outcome::Success),
        ]
    }
}

/// Property-based tests
#[cfg(test)]
mod property_tests {
    use super::generators::*;
    use super::*;
    use crate::batch::sequence;
    use crate::errors::ErrorKind;
    use proptest::proptest;

    fn flattened(error: &Error) -> Vec<Error> {
        error.iter().cloned().collect()
    }

    proptest! {
        /// The empty collection is a two-sided identity
        #[test]
        fn merge_identity(e in any_error()) {
            prop_assert_eq!(Error::empty() + e.clone(), e.clone());
            prop_assert_eq!(e.clone() + Error::empty(), e);
        }

        /// Grouping does not change the flattened children or their order
        #[test]
        fn merge_is_associative(a in any_error(), b in any_error(), c in any_error()) {
            let left = (a.clone() + b.clone()) + c.clone();
            let right = a.clone() + (b.clone() + c.clone());
            prop_assert_eq!(flattened(&left), flattened(&right));

            let mut expected = flattened(&a);
            expected.extend(flattened(&b));
            expected.extend(flattened(&c));
            prop_assert_eq!(flattened(&left), expected);
        }

        /// No merge result ever holds a collection as a child
        #[test]
        fn merge_never_nests(errors in proptest::collection::vec(any_error(), 0..6)) {
            let merged = Error::merge_all(errors.clone());
            prop_assert!(merged.iter().all(|child| child.kind() != ErrorKind::Collection));
            prop_assert_eq!(merged.count(), errors.iter().map(Error::count).sum::<usize>());
        }

        /// Right values are observable through the accessors
        #[test]
        fn right_accessors(v in any::<i64>()) {
            let either: Either<String, i64> = Either::right(v);
            prop_assert!(either.is_right());
            prop_assert_eq!(either.right_value(), Some(&v));
        }

        /// Left values are observable through the accessors
        #[test]
        fn left_accessors(v in "[a-z]{0,8}") {
            let either: Either<String, i64> = Either::left(v.clone());
            prop_assert!(either.is_left());
            prop_assert_eq!(either.left_value(), Some(&v));
        }

        /// Outcome -> Either -> Outcome is lossless
        #[test]
        fn outcome_round_trips_through_either(outcome in outcome_of(any::<u32>())) {
            let either: Either<Error, u32> = outcome.clone().into();
            prop_assert_eq!(either.is_right(), outcome.is_success());
            prop_assert_eq!(Outcome::from(either), outcome);
        }

        /// Map never runs on a left value and is identity-preserving on the right
        #[test]
        fn map_respects_branches(either in either_of(any::<i32>())) {
            let mut calls = 0;
            let mapped = either.clone().map(|v| { calls += 1; v });
            prop_assert_eq!(calls, usize::from(either.is_right()));
            prop_assert_eq!(mapped, either);
        }

        /// Bind with the unit constructor is the identity
        #[test]
        fn bind_right_identity(outcome in outcome_of(any::<i32>())) {
            prop_assert_eq!(outcome.clone().bind(Outcome::success), outcome);
        }

        /// Sequence fails with the first failure, or collects every value
        #[test]
        fn sequence_is_fail_fast(
            outcomes in proptest::collection::vec(outcome_of(any::<u8>()), 0..8)
        ) {
            let first_failure = outcomes.iter().find_map(|o| o.error_value().cloned());
            match sequence(outcomes.clone()) {
                Outcome::Fail(error) => prop_assert_eq!(Some(error), first_failure),
                Outcome::Success(values) => {
                    prop_assert!(first_failure.is_none());
                    let expected: Vec<u8> = outcomes
                        .into_iter()
                        .filter_map(Outcome::into_success)
                        .collect();
                    prop_assert_eq!(values, expected);
                }
            }
        }
    }
}
