//! Per-message classification hook.
//!
//! Sentiment scoring, emoji tagging and similar labels are computed outside
//! this crate. They plug in as a pure function of the message text, applied
//! to each record independently of the others.

/// A pure `message text -> label` function.
///
/// Implementations must not depend on call order or keep mutable state, so
/// that [`ChatTable::classify`](super::ChatTable::classify) gives the same
/// labels however often it is called.
///
/// Any `Fn(&str) -> L` closure is a classifier:
///
/// ```rust
/// use chatsift::core::MessageClassifier;
///
/// let length = |m: &str| m.chars().count();
/// assert_eq!(length.classify("héllo"), 5);
/// ```
pub trait MessageClassifier: Send + Sync {
    type Label;

    fn classify(&self, message: &str) -> Self::Label;
}

impl<F, L> MessageClassifier for F
where
    F: Fn(&str) -> L + Send + Sync,
{
    type Label = L;

    fn classify(&self, message: &str) -> L {
        self(message)
    }
}
