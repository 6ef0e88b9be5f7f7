//! Shared types for the Covbot message-understanding pipeline.
//!
//! Everything here is a plain value: the classifiers in `cb-nlu` produce
//! these types, and the answer executor and persistence layer consume them.

pub mod intent;
pub mod location;
pub mod message;
pub mod record;
pub mod slots;
pub mod topic;

pub use intent::*;
pub use message::*;
pub use record::*;
pub use slots::*;
pub use topic::*;
