//! Recursive arithmetic, computed iteratively.
//!
//! Each function is defined by a recurrence but implemented with a loop and
//! an accumulator, so no input can exhaust the stack.

/// The sum 1 + 2 + ... + n.
///
/// # Panics
///
/// The sum is undefined below 1; passing `n = 0` panics with a domain
/// error.
///
/// ```
/// use etude::recurse::sum_to;
///
/// assert_eq!(sum_to(5), 15);
/// ```
pub fn sum_to(n: u64) -> u64 {
    assert!(n >= 1, "sum_to is undefined for n = 0");
    let mut total = 0;
    for i in 1..=n {
        total += i;
    }
    return total;
}

/// The factorial n! = n * (n - 1) * ... * 1, with `factorial(0) == 1`.
///
/// Overflows `u64` for `n > 20`.
///
/// ```
/// use etude::recurse::factorial;
///
/// assert_eq!(factorial(0), 1);
/// assert_eq!(factorial(5), 120);
/// ```
pub fn factorial(n: u64) -> u64 {
    let mut product = 1;
    for i in 1..=n {
        product *= i;
    }
    return product;
}

/// The n-th Fibonacci number, with `fibonacci(0) == 0` and
/// `fibonacci(1) == 1`.
///
/// Overflows `u64` for `n > 93`.
///
/// ```
/// use etude::recurse::fibonacci;
///
/// assert_eq!(fibonacci(6), 8);
/// ```
pub fn fibonacci(n: u64) -> u64 {
    let mut previous = 0u64;
    let mut current = 1u64;
    for _ in 0..n {
        let next = previous + current;
        previous = current;
        current = next;
    }
    return previous;
}

/// Integer exponentiation by repeated multiplication, with `pow(x, 0) == 1`.
pub fn pow(base: u64, exp: u32) -> u64 {
    let mut result = 1;
    for _ in 0..exp {
        result *= base;
    }
    return result;
}
