use crate::card::{Card, Effect, ManaCost, TronPiece};
use crate::game::state::{GameError, GameState};
use crate::game::zones::Permanent;

/// Whether a cast pays its mana cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostMode {
    Pay,
    Free,
}

/// Cast a spell or artifact from hand.
///
/// Spells resolve and go to the graveyard, artifacts enter the battlefield.
/// Returns false without touching the game when the card is missing, is a
/// land, or cannot be paid for.
pub fn cast_card(
    state: &mut GameState,
    hand_index: usize,
    mode: CostMode,
    verbose: bool,
) -> Result<bool, GameError> {
    let cost = match state.hand.cards().get(hand_index) {
        Some(card) if !card.is_land() => card.mana_cost(),
        _ => return Ok(false),
    };
    if mode == CostMode::Pay && !state.mana_pool.pay(&cost) {
        return Ok(false);
    }
    let card = match state.hand.remove_card(hand_index) {
        Some(card) => card,
        None => return Ok(false),
    };

    if verbose {
        let free = if mode == CostMode::Free { " (free)" } else { "" };
        println!("  [Cast] {}{}", card.name(), free);
    }

    match &card {
        Card::Spell(spell) => {
            let effect = spell.on_cast;
            state.graveyard.add_card(card);
            resolve_effect(state, effect, verbose)?;
        }
        _ => state.battlefield.add_permanent(Permanent::new(card)),
    }
    Ok(true)
}

/// Activate the ability of an artifact on the battlefield, sacrificing it.
/// Returns false when there is no ability there or its cost cannot be paid.
pub fn activate_ability(
    state: &mut GameState,
    battlefield_index: usize,
    verbose: bool,
) -> Result<bool, GameError> {
    let ability = match state
        .battlefield
        .permanents()
        .get(battlefield_index)
        .and_then(|p| p.card.ability())
    {
        Some(ability) => *ability,
        None => return Ok(false),
    };
    if !state.mana_pool.pay(&ManaCost::generic(ability.cost)) {
        return Ok(false);
    }
    let permanent = match state.battlefield.remove_permanent(battlefield_index) {
        Some(permanent) => permanent,
        None => return Ok(false),
    };

    if verbose {
        println!("  [Ability] {}", permanent.card.name());
    }
    state.graveyard.add_card(permanent.card);

    if ability.adds_green {
        state.mana_pool.add_floating(true);
    }
    resolve_effect(state, ability.effect, verbose)?;
    Ok(true)
}

/// Apply an effect to the game
pub fn resolve_effect(state: &mut GameState, effect: Effect, verbose: bool) -> Result<(), GameError> {
    match effect {
        Effect::None => Ok(()),
        Effect::TutorTronLand => {
            tutor_tron_land(state, verbose);
            Ok(())
        }
        Effect::DigForLand { depth, colorless_only } => {
            dig_for_land(state, depth, colorless_only, verbose);
            Ok(())
        }
        Effect::Draw { count } => {
            for _ in 0..count {
                state.draw_card()?;
                if verbose {
                    if let Some(card) = state.hand.cards().last() {
                        println!("    Drew {}", card.name());
                    }
                }
            }
            Ok(())
        }
    }
}

/// Tron pieces worth fetching: unseen ones first, then ones only in hand
fn wanted_pieces(state: &GameState) -> Vec<TronPiece> {
    let mut wanted: Vec<TronPiece> = state.unseen_tron().collect();
    for piece in state.missing_tron() {
        if !wanted.contains(&piece) {
            wanted.push(piece);
        }
    }
    wanted
}

/// Search the library for a Tron land. The library keeps its order otherwise.
fn tutor_tron_land(state: &mut GameState, verbose: bool) {
    for piece in wanted_pieces(state) {
        if let Some(card) = state.library.take_first(|c| c.tron_piece() == Some(piece)) {
            if verbose {
                println!("    Searched for {}", card.name());
            }
            state.hand.add_card(card);
            return;
        }
    }
    if verbose {
        println!("    Search found nothing");
    }
}

/// Look at the top cards, keep the best land and bottom the rest.
/// With `colorless_only` a colorless card is taken when no land shows up.
fn dig_for_land(state: &mut GameState, depth: usize, colorless_only: bool, verbose: bool) {
    let mut revealed = state.library.take_top(depth);
    let wanted = wanted_pieces(state);

    let pick = wanted
        .iter()
        .find_map(|piece| revealed.iter().position(|c| c.tron_piece() == Some(*piece)))
        .or_else(|| revealed.iter().position(|c| c.is_land()))
        .or_else(|| {
            if !colorless_only {
                return None;
            }
            revealed
                .iter()
                .position(|c| c.ability().is_some())
                .or_else(|| revealed.iter().position(|c| c.is_colorless()))
        });

    if verbose {
        let names: Vec<&str> = revealed.iter().map(|c| c.name()).collect();
        println!("    Looked at: {}", names.join(", "));
    }

    if let Some(index) = pick {
        let card = revealed.remove(index);
        if verbose {
            println!("    -> Took {}", card.name());
        }
        state.hand.add_card(card);
    }
    state.library.put_bottom(revealed);
}
