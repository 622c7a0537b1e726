use crate::card::Card;
use crate::game::state::GameState;
use crate::game::zones::Hand;
use crate::simulation::strategy::DeckRoles;

/// Where the scried card goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScryDecision {
    Top,
    Bottom,
}

/// Vancouver mulligan scry: decide whether the library's top card stays.
///
/// Rules in order, first match wins:
/// - a Tron land the hand lacks stays
/// - with fewer than two lands in hand everything else goes
/// - Expedition Map stays
/// - a tutor stays when the hand can make green
/// - a filter artifact stays when the hand has Sylvan Scrying, or has
///   Ancient Stirrings but no green source
/// - everything else goes
pub fn choose_scry(top: &Card, hand: &Hand, roles: &DeckRoles) -> ScryDecision {
    if let Some(piece) = top.tron_piece() {
        if hand.position_of_piece(piece).is_none() {
            return ScryDecision::Top;
        }
    }

    if hand.count_lands() < 2 {
        return ScryDecision::Bottom;
    }

    let id = top.id();
    let keep = if id == roles.map {
        true
    } else if id == roles.first_tutor || id == roles.second_tutor {
        hand.has_green_source()
    } else if roles.filters.contains(&id) {
        hand.contains(roles.first_tutor)
            || (hand.contains(roles.second_tutor) && !hand.has_green_source())
    } else {
        false
    };

    if keep {
        ScryDecision::Top
    } else {
        ScryDecision::Bottom
    }
}

/// Scry 1 after a mulligan. Moves at most one card and never touches the hand.
/// Returns None when the library is empty.
pub fn vancouver_scry(state: &mut GameState, roles: &DeckRoles, verbose: bool) -> Option<ScryDecision> {
    let top = state.library.peek_top()?;
    let decision = choose_scry(top, &state.hand, roles);

    if verbose {
        let place = match decision {
            ScryDecision::Top => "top",
            ScryDecision::Bottom => "bottom",
        };
        println!("[Scry] {} -> {}", top.name(), place);
    }

    if decision == ScryDecision::Bottom {
        state.library.scry_bottom();
    }
    Some(decision)
}
