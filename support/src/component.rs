use crate::{Corpus, Request, RunError};

/// A stage in an NLU pipeline.
///
/// Components are immutable once created. Any state they need is given to
/// them at construction time, and their results are written back onto the
/// messages passed in.
pub trait Component {
    /// Process every example in a training corpus.
    fn train(&self, corpus: &mut Corpus) -> Result<(), RunError>;

    /// Process a single request at inference time.
    fn process(&self, request: &mut Request) -> Result<(), RunError>;
}

impl<C: Component + ?Sized> Component for Box<C> {
    fn train(&self, corpus: &mut Corpus) -> Result<(), RunError> {
        (**self).train(corpus)
    }

    fn process(&self, request: &mut Request) -> Result<(), RunError> {
        (**self).process(request)
    }
}
