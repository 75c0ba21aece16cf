//! Recording the steps taken by the simplifier.

/// Somewhere to record the rewriting steps taken while simplifying an expression.
pub trait StepLog<S> {
    /// Records that a step was taken.
    fn record(&mut self, step: S);
}

/// Keeps every step, in the order they were taken.
impl<S> StepLog<S> for Vec<S> {
    fn record(&mut self, step: S) {
        self.push(step);
    }
}

/// Counts the steps without keeping them.
impl<S> StepLog<S> for usize {
    fn record(&mut self, _: S) {
        *self += 1;
    }
}
