//! Sample per-element operators.
//!
//! Operators are plain function pointers: pure, stateless, and safe to
//! invoke concurrently from any number of workers.

pub type Operator = fn(f64) -> f64;

/// A named operator; the name is used only in the console report.
#[derive(Clone, Copy)]
pub struct OperatorDescriptor {
    pub name: &'static str,
    pub op: Operator,
}

/// Cheap operator: a single addition.
pub fn fast_op(x: f64) -> f64 {
    x + 1.0
}

/// Expensive operator: a fixed-iteration trigonometric sum recomputed on
/// every call. The sum is independent of `x` on purpose; it stands in for
/// fixed-cost pure work, not for an input-dependent computation.
pub fn slow_op(x: f64) -> f64 {
    let mut s = 0.0;
    for i in 0..100 {
        s += (i as f64).sin();
    }
    x + s
}

pub fn default_operators() -> Vec<OperatorDescriptor> {
    vec![
        OperatorDescriptor { name: "fast", op: fast_op },
        OperatorDescriptor { name: "slow", op: slow_op },
    ]
}
