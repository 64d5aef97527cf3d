//! # Events Module
//!
//! Event-driven progress reporting for the recovery pipeline.
//!
//! ## Design
//! The core library emits events through a channel, so any front end
//! (CLI, GUI, tests) can subscribe and display progress without the core
//! knowing who is listening.
//!
//! ## Example
//! ```rust,ignore
//! let (sender, receiver) = EventChannel::new();
//!
//! std::thread::spawn(move || {
//!     for event in receiver.iter() {
//!         if let Event::Search(SearchEvent::MatchFound { candidate }) = event {
//!             println!("recovered: {candidate}");
//!         }
//!     }
//! });
//!
//! pipeline.run_with_events(&sender)?;
//! ```

mod channel;
mod types;

pub use channel::{null_sender, EventChannel, EventReceiver, EventSender};
pub use types::*;
