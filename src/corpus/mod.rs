//! Static corpus tables the generator draws from: names, avatar pools,
//! scripted dialogues, filler scenes, and unread follow-ups. Pure data,
//! immutable for the process lifetime.

pub mod line;
pub mod people;
pub mod groups;
pub mod media;
pub mod direct_flows;
pub mod group_flows;
pub mod unread;

pub use line::{FlowLine, Speaker};
