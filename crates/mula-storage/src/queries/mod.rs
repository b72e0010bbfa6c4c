//! Raw SQL operations, one module per table. Every function takes a borrowed
//! connection so callers decide which pool connection or transaction runs it.

pub mod attempt_ops;
pub mod feedback_ops;
pub mod period_ops;
