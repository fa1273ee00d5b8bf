//! Interaction resolver.
//!
//! The rules in this module read and write more than one player's pawns:
//! - Bump: landing on an opponent sends it to Start
//! - Slide: landing on another color's slide start carries the pawn four
//!   tiles and clears the path
//! - Switch: card 11's exchange of two track pawns
//! - Sorry!: a Start pawn takes an opponent's tile
//!
//! Movement in `board` calls bump and slide after every landing; the card
//! dispatch calls switch and Sorry! directly.

mod resolver;

pub use resolver::InteractionResolver;
