/// A type that collects the steps of an algorithm.
///
/// [`StepCollector`] is also implemented for the unit type `()`. This is useful when you only
/// need the result of a solver, which lets it skip formatting the intermediate expressions.
pub trait StepCollector<S> {
    /// Adds a step to the collector.
    fn push(&mut self, step: S);

    /// Returns true if pushed steps are kept.
    ///
    /// Solvers can check this before building expensive step expressions.
    fn is_collecting(&self) -> bool {
        true
    }
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}

    #[inline]
    fn is_collecting(&self) -> bool {
        false
    }
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
