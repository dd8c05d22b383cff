#[cfg(test)]
#[path = "../../tests/unit/training/schedule_test.rs"]
mod schedule_test;

use crate::utils::{Float, GenericResult};

/// Specifies how a hyperparameter moves from its initial to its final value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecayKind {
    /// `initial + (final - initial) * progress`.
    Linear,
    /// `initial * (final / initial) ^ progress`.
    Exponential,
}

/// A decay schedule between two values driven by progress in `[0, 1]`.
#[derive(Clone, Copy, Debug)]
pub struct Decay {
    initial: Float,
    last: Float,
    kind: DecayKind,
}

impl Decay {
    /// Creates a new instance of `Decay`. Exponential decay needs both values to be positive.
    pub fn new(initial: Float, last: Float, kind: DecayKind) -> GenericResult<Self> {
        if !initial.is_finite() || !last.is_finite() || initial < 0. || last < 0. {
            return Err(format!("decay bounds must be non-negative numbers, got ({initial}, {last})").into());
        }

        if kind == DecayKind::Exponential && (initial <= 0. || last <= 0.) {
            return Err(format!("exponential decay bounds must be positive, got ({initial}, {last})").into());
        }

        Ok(Self { initial, last, kind })
    }

    /// Returns initial value.
    pub fn initial(&self) -> Float {
        self.initial
    }

    /// Returns final value.
    pub fn last(&self) -> Float {
        self.last
    }

    /// Returns value at given progress, which is clamped to `[0, 1]`.
    pub fn value(&self, progress: Float) -> Float {
        let progress = progress.clamp(0., 1.);

        match self.kind {
            DecayKind::Linear => self.initial + (self.last - self.initial) * progress,
            DecayKind::Exponential => self.initial * (self.last / self.initial).powf(progress),
        }
    }
}
