//! Wumpus World simulation: layout generation, movement, sensing, shooting.

use super::types::{Coord, Direction, GRID_SIZE};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, instrument};

/// Number of pits scattered across the grid.
const PIT_COUNT: usize = 10;

/// Arrows granted at the start of each game.
const ARROW_COUNT: u32 = 1;

/// The player's fixed starting cell.
const START: Coord = Coord(0, 0);

/// Wumpus World game engine.
///
/// One wumpus, one gold cell, and [`PIT_COUNT`] pits on an 8x8 grid, all
/// placed at game start and mutated only by [`move_player`](Self::move_player)
/// and [`shoot`](Self::shoot). Once the player is dead, both operations are
/// no-ops.
#[derive(Debug, Clone)]
pub struct Game {
    player_pos: Coord,
    wumpus_pos: Coord,
    gold_pos: Option<Coord>,
    pits: HashSet<Coord>,
    arrows: u32,
    is_alive: bool,
    is_wumpus_alive: bool,
    has_gold: bool,
}

/// Client-facing snapshot of the game.
///
/// Hidden entities stay hidden: pits are never listed, the wumpus position
/// appears only once it is dead, and the gold position disappears when
/// grabbed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameView {
    /// Player position.
    pub player_pos: Coord,
    /// Wumpus position, visible only after it has been shot.
    pub wumpus_pos: Option<Coord>,
    /// Pits are hidden from the client.
    pub pits: Vec<Coord>,
    /// Gold position, `null` once collected.
    pub gold_pos: Option<Coord>,
    /// Whether the player carries the gold.
    pub has_gold: bool,
    /// Whether the player is alive.
    pub is_alive: bool,
    /// Whether the wumpus is alive.
    pub is_wumpus_alive: bool,
    /// Remaining arrows.
    pub arrows: u32,
    /// A pit sits in an adjacent cell.
    pub breeze: bool,
    /// The live wumpus sits in an adjacent cell.
    pub stinky: bool,
}

impl Game {
    /// Generates a fresh random layout.
    ///
    /// The wumpus lands anywhere but the start; pits avoid the start and the
    /// wumpus; gold avoids all of the above.
    #[instrument(skip(rng))]
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let wumpus_pos = loop {
            let cell = random_cell(rng);
            if cell != START {
                break cell;
            }
        };

        let mut pits = HashSet::new();
        while pits.len() < PIT_COUNT {
            let cell = random_cell(rng);
            if cell != START && cell != wumpus_pos {
                pits.insert(cell);
            }
        }

        let gold_pos = loop {
            let cell = random_cell(rng);
            if cell != START && cell != wumpus_pos && !pits.contains(&cell) {
                break cell;
            }
        };

        info!(?wumpus_pos, ?gold_pos, "Generated new layout");
        Self {
            player_pos: START,
            wumpus_pos,
            gold_pos: Some(gold_pos),
            pits,
            arrows: ARROW_COUNT,
            is_alive: true,
            is_wumpus_alive: true,
            has_gold: false,
        }
    }

    /// Builds a game from a fixed layout. Useful for deterministic setups.
    pub fn with_layout(
        wumpus_pos: Coord,
        gold_pos: Coord,
        pits: impl IntoIterator<Item = Coord>,
    ) -> Self {
        Self {
            player_pos: START,
            wumpus_pos,
            gold_pos: Some(gold_pos),
            pits: pits.into_iter().collect(),
            arrows: ARROW_COUNT,
            is_alive: true,
            is_wumpus_alive: true,
            has_gold: false,
        }
    }

    /// Returns the player position.
    pub fn player_pos(&self) -> Coord {
        self.player_pos
    }

    /// Returns whether the player is alive.
    pub fn is_alive(&self) -> bool {
        self.is_alive
    }

    /// Returns whether the wumpus is alive.
    pub fn is_wumpus_alive(&self) -> bool {
        self.is_wumpus_alive
    }

    /// Returns whether the player carries the gold.
    pub fn has_gold(&self) -> bool {
        self.has_gold
    }

    /// Returns the remaining arrow count.
    pub fn arrows(&self) -> u32 {
        self.arrows
    }

    /// Moves the player one cell, then resolves the cell's contents.
    ///
    /// No-op when the player is dead or the target lies off the grid.
    /// Entering the live wumpus's cell or a pit is fatal; entering the gold
    /// cell picks it up.
    #[instrument(skip(self))]
    pub fn move_player(&mut self, direction: Direction) {
        if !self.is_alive {
            debug!("Move ignored, player is dead");
            return;
        }
        let Some(next) = self.player_pos.step(direction) else {
            debug!(?direction, "Move ignored, grid edge");
            return;
        };
        self.player_pos = next;
        self.enter(next);
    }

    /// Resolves hazards and pickups on the cell just entered.
    fn enter(&mut self, cell: Coord) {
        if cell == self.wumpus_pos && self.is_wumpus_alive {
            info!(?cell, "Player walked into the wumpus");
            self.is_alive = false;
        } else if self.pits.contains(&cell) {
            info!(?cell, "Player fell into a pit");
            self.is_alive = false;
        } else if Some(cell) == self.gold_pos {
            info!(?cell, "Player picked up the gold");
            self.has_gold = true;
            self.gold_pos = None;
        }
    }

    /// Fires an arrow in a straight line to the grid edge.
    ///
    /// Returns whether the wumpus was on the flight path. Consumes one
    /// arrow; a no-op returning `false` when dead or out of arrows.
    #[instrument(skip(self))]
    pub fn shoot(&mut self, direction: Direction) -> bool {
        if self.arrows == 0 || !self.is_alive {
            debug!(arrows = self.arrows, "Shot ignored");
            return false;
        }
        self.arrows -= 1;

        let hit = self.player_pos.ray(direction).any(|c| c == self.wumpus_pos);
        if hit {
            info!(?direction, "Arrow hit the wumpus");
            self.is_wumpus_alive = false;
        } else {
            debug!(?direction, "Arrow missed");
        }
        hit
    }

    /// Snapshot with sensing flags recomputed from the current position.
    pub fn view(&self) -> GameView {
        let breeze = self.player_pos.neighbors().any(|c| self.pits.contains(&c));
        let stinky = self.is_wumpus_alive
            && self.player_pos.neighbors().any(|c| c == self.wumpus_pos);

        GameView {
            player_pos: self.player_pos,
            wumpus_pos: (!self.is_wumpus_alive).then_some(self.wumpus_pos),
            pits: Vec::new(),
            gold_pos: self.gold_pos,
            has_gold: self.has_gold,
            is_alive: self.is_alive,
            is_wumpus_alive: self.is_wumpus_alive,
            arrows: self.arrows,
            breeze,
            stinky,
        }
    }
}

fn random_cell<R: Rng>(rng: &mut R) -> Coord {
    Coord(rng.gen_range(0..GRID_SIZE), rng.gen_range(0..GRID_SIZE))
}
