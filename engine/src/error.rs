use thiserror::Error;

use crate::ecs::Kind;

/// Failures from game actions. None of these are fatal, the caller
/// reports them and keeps the turn loop going.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EngineError {
    /// The attack target is the attacker itself, already dead, or not
    /// in the attacker's room.
    #[error("invalid attack target")]
    InvalidTarget,

    /// A variant's special action has no implementation yet.
    ///
    /// Distinguishes "not yet built" from "no effect by design".
    #[error("{kind} has no special behavior yet")]
    Unimplemented { kind: Kind },
}
