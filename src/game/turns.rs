use crate::card::{ManaCost, TronPiece};
use crate::game::cards::{activate_ability, cast_card, CostMode};
use crate::game::state::{GameError, GameState};
use crate::simulation::strategy::{ActionKind, Strategy};

/// Where the resolver is within a turn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverState {
    Scanning,
    ActionTaken,
    NoActionAvailable,
    WinAchieved,
}

/// How a turn ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    WinAchieved,
    NoActionAvailable,
}

/// A legal action found by the priority scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Activate(usize),
    Cast(usize),
    Play(usize),
}

/// All three Tron lands are in play.
/// The land count check is implied by the pieces but kept as a guard.
pub fn tron_assembled(state: &GameState) -> bool {
    TronPiece::ALL
        .iter()
        .all(|piece| state.battlefield.contains_piece(*piece))
        && state.land_count() >= 3
}

/// Play out one turn greedily. The turn's draw has already happened.
pub fn resolve_turn(
    state: &mut GameState,
    strategy: &Strategy,
    verbose: bool,
) -> Result<TurnOutcome, GameError> {
    state.begin_turn();

    if state.turn == 0 {
        if let Some(index) = state.hand.position(strategy.free_spell) {
            cast_card(state, index, CostMode::Free, verbose)?;
        }
    }

    let mut resolver = ResolverState::Scanning;
    loop {
        resolver = match resolver {
            ResolverState::Scanning => scan(state, strategy, verbose)?,
            ResolverState::ActionTaken => ResolverState::Scanning,
            ResolverState::NoActionAvailable => return Ok(TurnOutcome::NoActionAvailable),
            ResolverState::WinAchieved => return Ok(TurnOutcome::WinAchieved),
        };
    }
}

/// One pass: terminal check, Tron land shortcut, then the priority list
fn scan(
    state: &mut GameState,
    strategy: &Strategy,
    verbose: bool,
) -> Result<ResolverState, GameError> {
    if tron_assembled(state) {
        return Ok(ResolverState::WinAchieved);
    }

    if !state.land_played_this_turn {
        let missing = state
            .missing_tron()
            .find_map(|piece| state.hand.position_of_piece(piece));
        if let Some(index) = missing {
            if let Some(card) = state.play_land(index) {
                if verbose {
                    println!("  [Land] {} (Tron)", card.name());
                }
            }
            if tron_assembled(state) {
                return Ok(ResolverState::WinAchieved);
            }
        }
    }

    let action = match next_action(state, strategy) {
        Some(action) => action,
        None => return Ok(ResolverState::NoActionAvailable),
    };

    let acted = match action {
        Action::Activate(index) => activate_ability(state, index, verbose)?,
        Action::Cast(index) => cast_card(state, index, CostMode::Pay, verbose)?,
        Action::Play(index) => match state.play_land(index) {
            Some(card) => {
                if verbose {
                    println!("  [Land] {}", card.name());
                }
                true
            }
            None => false,
        },
    };
    if acted {
        Ok(ResolverState::ActionTaken)
    } else {
        Ok(ResolverState::NoActionAvailable)
    }
}

/// First entry of the priority list that is legal and affordable right now
fn next_action(state: &GameState, strategy: &Strategy) -> Option<Action> {
    strategy.priority.iter().find_map(|entry| match entry.kind {
        ActionKind::Ability => {
            let index = state.battlefield.position(entry.card)?;
            let ability = state.battlefield.permanents()[index].card.ability()?;
            state
                .mana_pool
                .can_pay(&ManaCost::generic(ability.cost))
                .then_some(Action::Activate(index))
        }
        ActionKind::Cast => {
            let index = state.hand.position(entry.card)?;
            let card = &state.hand.cards()[index];
            (!card.is_land() && state.mana_pool.can_pay(&card.mana_cost()))
                .then_some(Action::Cast(index))
        }
        ActionKind::Play => {
            if state.land_played_this_turn {
                return None;
            }
            let index = state.hand.position(entry.card)?;
            state.hand.cards()[index].is_land().then_some(Action::Play(index))
        }
    })
}
