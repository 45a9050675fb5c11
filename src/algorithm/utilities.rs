//! # Utilities
//!
//! Helper functions for algorithms.
use num_traits::PrimInt;

/// Find the largest count for which a monotone probe still succeeds.
///
/// The probe should succeed for all counts up to some unknown limit and fail beyond it. Counts are
/// tried by doubling the step size until the probe fails, after which the step size is halved
/// until it is one. This needs a logarithmic number of probes in the limit.
///
/// # Arguments
///
/// * `first`: Value that the probe produced for a count of one, which is known to succeed.
/// * `probe`: Produces a value for a count, or `None` if the count is past the limit. It is
/// expected to also return `None` if the count can't be represented by the caller.
///
/// # Return value
///
/// The largest successful count and the value that the probe produced for it.
pub(crate) fn last_satisfying<I: PrimInt, T>(
    first: T,
    mut probe: impl FnMut(I) -> Option<T>,
) -> (I, T) {
    let two = I::one() + I::one();

    let (mut count, mut last) = (I::one(), first);
    let mut step = I::one();
    let mut growing = true;
    loop {
        let next = count.checked_add(&step)
            .and_then(|next| probe(next).map(|value| (next, value)));

        match next {
            Some((next, value)) => {
                count = next;
                last = value;
                if growing {
                    step = step.checked_mul(&two).unwrap_or(step);
                }
            },
            None if step == I::one() => return (count, last),
            None => {
                growing = false;
                step = step / two;
            },
        }
    }
}
