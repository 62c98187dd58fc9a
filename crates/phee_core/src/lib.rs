//! Phee core - pure guess-the-player game logic
//!
//! Everything here is free of I/O: the roster is handed in, time is
//! advanced by the caller, and randomness comes from a caller-supplied RNG.
//!
//! # Example
//!
//! ```
//! use phee_core::{GuessOutcome, Player, Roster, Session};
//!
//! let target = Player::new("1", "Jon Smith", "Ravens", "QB", "AFC", "6'2", 24, "12");
//! let roster = Roster::new(vec![target.clone()]);
//!
//! let mut session = Session::new();
//! session.start(target);
//! let outcome = session.submit_guess(&roster, "jon   smith");
//! assert!(matches!(outcome, GuessOutcome::Correct { .. }));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod assets;
mod clock;
mod feedback;
mod name;
mod player;
mod roster;
mod session;

pub use assets::{AssetKind, DEFAULT_IMAGES_DIR, asset_path, asset_stem};
pub use clock::format_elapsed;
pub use feedback::{Feedback, JerseyHint, Match, Trend};
pub use name::{names_match, normalize_name};
pub use player::{Height, JerseyNumber, Player, PlayerId, parse_leading_int};
pub use roster::Roster;
pub use session::{Guess, GuessOutcome, MAX_GUESSES, Phase, Session, SessionError};
