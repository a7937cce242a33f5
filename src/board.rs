//! Game board: a flat grid of cells owning ship occupancy and shot state.

use alloc::vec::Vec;

use crate::common::{BoardError, PlacementError, Shot};
use crate::config::BOARD_SIZE;
use crate::ship::Ship;

/// Index of a ship in its board's ship list.
pub type ShipId = usize;

/// One square of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    x: usize,
    y: usize,
    ship: Option<ShipId>,
    was_shot: bool,
}

impl Cell {
    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// Ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    pub fn has_ship(&self) -> bool {
        self.ship.is_some()
    }

    /// Set once a shot lands here; never cleared.
    pub fn was_shot(&self) -> bool {
        self.was_shot
    }
}

/// What the presentation layer draws for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellView {
    /// Unshot water, or an unshot cell of an obscured board.
    Empty,
    /// Unshot ship segment on a visible board.
    Ship,
    Miss,
    /// Damaged segment of a ship still afloat.
    Hit,
    /// Segment of a sunk ship.
    Sunk,
}

/// Rendering view of a board, rows indexed by `y` then `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub cells: [[CellView; BOARD_SIZE]; BOARD_SIZE],
    pub ships_remaining: usize,
}

impl BoardSnapshot {
    pub fn get(&self, x: usize, y: usize) -> CellView {
        self.cells[y][x]
    }
}

/// A 10×10 board. Ships live in `ships`; cells refer to them by index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    is_enemy: bool,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
    ships_remaining: usize,
}

impl Board {
    /// Create an empty board. `is_enemy` only affects [`Board::snapshot`].
    pub fn new(is_enemy: bool) -> Self {
        let cells = (0..BOARD_SIZE * BOARD_SIZE)
            .map(|i| Cell {
                x: i % BOARD_SIZE,
                y: i / BOARD_SIZE,
                ship: None,
                was_shot: false,
            })
            .collect();
        Board {
            is_enemy,
            cells,
            ships: Vec::new(),
            ships_remaining: 0,
        }
    }

    pub fn is_enemy(&self) -> bool {
        self.is_enemy
    }

    pub fn in_bounds(x: usize, y: usize) -> bool {
        x < BOARD_SIZE && y < BOARD_SIZE
    }

    fn index(x: usize, y: usize) -> usize {
        assert!(
            Self::in_bounds(x, y),
            "coordinate ({}, {}) outside the {}x{} board",
            x,
            y,
            BOARD_SIZE,
            BOARD_SIZE
        );
        y * BOARD_SIZE + x
    }

    /// Cell at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate lies outside the board.
    pub fn cell(&self, x: usize, y: usize) -> &Cell {
        &self.cells[Self::index(x, y)]
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id)
    }

    /// Ship covering `(x, y)`, if any.
    pub fn ship_at(&self, x: usize, y: usize) -> Option<&Ship> {
        self.cell(x, y).ship.and_then(|id| self.ships.get(id))
    }

    /// Ships placed and not yet sunk.
    pub fn ships_remaining(&self) -> usize {
        self.ships_remaining
    }

    /// `true` once every placed ship is sunk (or nothing was placed).
    pub fn all_sunk(&self) -> bool {
        self.ships_remaining == 0
    }

    pub fn was_shot(&self, x: usize, y: usize) -> bool {
        self.cell(x, y).was_shot
    }

    /// Coordinates not shot yet, in row-major order.
    pub fn unshot_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .filter(|c| !c.was_shot)
            .map(|c| (c.x, c.y))
    }

    /// Orthogonal neighbours of `(x, y)` that lie on the board.
    pub fn neighbors(x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        let candidates = [
            x.checked_sub(1).map(|l| (l, y)),
            Some((x + 1, y)),
            y.checked_sub(1).map(|u| (x, u)),
            Some((x, y + 1)),
        ];
        candidates
            .into_iter()
            .flatten()
            .filter(|&(nx, ny)| Self::in_bounds(nx, ny))
    }

    /// Explain why `ship` cannot be anchored at `(x, y)`.
    ///
    /// Every segment must be on the board, free, and share no edge with an
    /// occupied cell. Diagonal contact is allowed.
    pub fn check_placement(&self, ship: &Ship, x: usize, y: usize) -> Result<(), PlacementError> {
        if !Self::in_bounds(x, y) {
            return Err(PlacementError::OutOfBounds);
        }
        for (sx, sy) in ship.segments(x, y) {
            if !Self::in_bounds(sx, sy) {
                return Err(PlacementError::OutOfBounds);
            }
            if self.cell(sx, sy).has_ship() {
                return Err(PlacementError::Overlaps);
            }
            if Self::neighbors(sx, sy).any(|(nx, ny)| self.cell(nx, ny).has_ship()) {
                return Err(PlacementError::TouchesShip);
            }
        }
        Ok(())
    }

    pub fn can_place_ship(&self, ship: &Ship, x: usize, y: usize) -> bool {
        self.check_placement(ship, x, y).is_ok()
    }

    /// Anchor `ship` at `(x, y)` (left-most or top-most segment).
    /// Returns `false` and leaves the board untouched when the spot is invalid.
    pub fn place_ship(&mut self, mut ship: Ship, x: usize, y: usize) -> bool {
        if !self.can_place_ship(&ship, x, y) {
            return false;
        }
        let id = self.ships.len();
        for (sx, sy) in ship.segments(x, y) {
            self.cells[Self::index(sx, sy)].ship = Some(id);
        }
        ship.set_origin(x, y);
        self.ships.push(ship);
        self.ships_remaining += 1;
        true
    }

    /// Fire at `(x, y)`.
    ///
    /// A repeated shot is rejected with [`BoardError::AlreadyShot`] and
    /// changes nothing.
    pub fn shoot(&mut self, x: usize, y: usize) -> Result<Shot, BoardError> {
        let idx = Self::index(x, y);
        let cell = &mut self.cells[idx];
        if cell.was_shot {
            return Err(BoardError::AlreadyShot { x, y });
        }
        cell.was_shot = true;
        let Some(id) = cell.ship else {
            return Ok(Shot::Miss);
        };
        let ship = &mut self.ships[id];
        let was_alive = ship.is_alive();
        ship.hit();
        if was_alive && !ship.is_alive() {
            self.ships_remaining -= 1;
            Ok(Shot::Sunk { size: ship.size() })
        } else {
            Ok(Shot::Hit)
        }
    }

    fn view(&self, cell: &Cell, reveal: bool) -> CellView {
        let ship = cell.ship.and_then(|id| self.ships.get(id));
        match (cell.was_shot, ship) {
            (true, Some(s)) if !s.is_alive() => CellView::Sunk,
            (true, Some(_)) => CellView::Hit,
            (true, None) => CellView::Miss,
            (false, Some(_)) if reveal => CellView::Ship,
            (false, _) => CellView::Empty,
        }
    }

    /// View for rendering; unshot ships of an enemy board are hidden.
    pub fn snapshot(&self) -> BoardSnapshot {
        self.snapshot_with(!self.is_enemy)
    }

    /// View with every ship visible.
    pub fn revealed_snapshot(&self) -> BoardSnapshot {
        self.snapshot_with(true)
    }

    fn snapshot_with(&self, reveal: bool) -> BoardSnapshot {
        let mut cells = [[CellView::Empty; BOARD_SIZE]; BOARD_SIZE];
        for cell in &self.cells {
            cells[cell.y][cell.x] = self.view(cell, reveal);
        }
        BoardSnapshot {
            cells,
            ships_remaining: self.ships_remaining,
        }
    }

    /// Check the invariants a deserialized board must satisfy: a full grid,
    /// cell references to existing ships, segment counts matching sizes,
    /// health matching shots taken, and an accurate survivor count.
    pub fn is_consistent(&self) -> bool {
        if self.cells.len() != BOARD_SIZE * BOARD_SIZE {
            return false;
        }
        let mut segments = alloc::vec![0usize; self.ships.len()];
        let mut hits = alloc::vec![0usize; self.ships.len()];
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.x != i % BOARD_SIZE || cell.y != i / BOARD_SIZE {
                return false;
            }
            if let Some(id) = cell.ship {
                if id >= self.ships.len() {
                    return false;
                }
                segments[id] += 1;
                if cell.was_shot {
                    hits[id] += 1;
                }
            }
        }
        let ships_ok = self.ships.iter().enumerate().all(|(id, ship)| {
            segments[id] == ship.size() && ship.health() == ship.size() - hits[id]
        });
        let alive = self.ships.iter().filter(|s| s.is_alive()).count();
        ships_ok && alive == self.ships_remaining
    }
}
