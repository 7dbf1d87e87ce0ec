//! Shared application state with unidirectional data flow.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Views
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Views never mutate shared state directly: every change is an intent
//! reduced by a pure function, and the next render observes the result.

mod intent;
mod reducer;
mod state;

pub use intent::StoreIntent;
pub use reducer::StoreReducer;
pub use state::{StoreState, View, CURRENT_USER};

/// Pure function that transforms state based on intents.
pub trait Reducer {
    type State;
    type Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
