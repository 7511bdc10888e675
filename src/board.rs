//! Game board: ship placement, shot resolution and text rendering.

use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardError, Outcome};
use crate::config::BOARD_SIZE;
use crate::coordinate::Coordinate;
use crate::ship::Ship;

/// State of a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Ship,
    Hit,
    Miss,
}

impl Cell {
    fn symbol(self, conceal: bool) -> char {
        match self {
            Cell::Empty => 'O',
            Cell::Ship if conceal => 'O',
            Cell::Ship => '■',
            Cell::Hit => 'X',
            Cell::Miss => '.',
        }
    }
}

/// One side's fleet and the record of shots fired at it.
///
/// Two coordinate sets are kept apart. `reserved` holds ship cells and their
/// halos while the fleet is being placed; `shots` holds every cell resolved
/// by fire. A cell in either set is *used*. [`Board::reset_turn_state`] hands
/// over from setup to play by clearing `reserved` only.
#[derive(Clone)]
pub struct Board {
    size: i32,
    conceal: bool,
    destroyed: usize,
    grid: Vec<Cell>,
    reserved: BTreeSet<Coordinate>,
    shots: BTreeSet<Coordinate>,
    ships: Vec<Ship>,
}

impl Default for Board {
    fn default() -> Self {
        Board::new(BOARD_SIZE)
    }
}

impl Board {
    /// Create an empty `size`×`size` board with no ships.
    pub fn new(size: i32) -> Self {
        let size = size.max(0);
        Board {
            size,
            conceal: false,
            destroyed: 0,
            grid: vec![Cell::Empty; (size * size) as usize],
            reserved: BTreeSet::new(),
            shots: BTreeSet::new(),
            ships: Vec::new(),
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Whether ship cells are hidden when rendering.
    pub fn is_concealed(&self) -> bool {
        self.conceal
    }

    pub fn set_concealed(&mut self, conceal: bool) {
        self.conceal = conceal;
    }

    /// Number of ships sunk so far.
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Returns `true` when at least one ship is placed and all are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.destroyed == self.ships.len()
    }

    /// `true` iff `coord` lies outside the grid.
    pub fn out(&self, coord: Coordinate) -> bool {
        !((0..self.size).contains(&coord.row) && (0..self.size).contains(&coord.col))
    }

    /// State of the cell at `coord`, or `None` when out of bounds.
    pub fn cell(&self, coord: Coordinate) -> Option<Cell> {
        self.index(coord).map(|i| self.grid[i])
    }

    /// Whether `coord` is reserved by setup or has already been shot.
    pub fn is_used(&self, coord: Coordinate) -> bool {
        self.reserved.contains(&coord) || self.shots.contains(&coord)
    }

    fn index(&self, coord: Coordinate) -> Option<usize> {
        if self.out(coord) {
            None
        } else {
            Some((coord.row * self.size + coord.col) as usize)
        }
    }

    fn mark(&mut self, coord: Coordinate, cell: Cell) {
        if let Some(i) = self.index(coord) {
            self.grid[i] = cell;
        }
    }

    /// Place `ship`, reserving its cells and the halo around them.
    ///
    /// Fails without touching the board if any cell is off the grid or
    /// already used.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if let Some(bad) = ship.cells().find(|&c| self.out(c) || self.is_used(c)) {
            return Err(BoardError::InvalidShipPlacement(bad));
        }
        for cell in ship.cells() {
            self.mark(cell, Cell::Ship);
            self.reserved.insert(cell);
        }
        self.ships.push(ship);
        self.reserve_halo(&ship);
        Ok(())
    }

    fn reserve_halo(&mut self, ship: &Ship) {
        for coord in ship.cells().flat_map(Coordinate::neighbourhood) {
            if !self.out(coord) && !self.is_used(coord) {
                self.reserved.insert(coord);
            }
        }
    }

    /// Mark the untouched water around a sunk ship as missed so it is not
    /// targeted again.
    fn reveal_halo(&mut self, ship: &Ship) {
        for coord in ship.cells().flat_map(Coordinate::neighbourhood) {
            if !self.out(coord) && !self.is_used(coord) {
                self.mark(coord, Cell::Miss);
                self.shots.insert(coord);
            }
        }
    }

    /// Drop the setup reservations so only real shots count as used.
    pub fn reset_turn_state(&mut self) {
        self.reserved.clear();
    }

    /// Fire at `coord`, updating ships and cells.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<Outcome, BoardError> {
        if self.out(coord) {
            return Err(BoardError::OutOfBounds(coord));
        }
        if self.is_used(coord) {
            return Err(BoardError::AlreadyShot(coord));
        }
        self.shots.insert(coord);

        let Some(idx) = self.ships.iter().position(|s| s.contains(coord)) else {
            self.mark(coord, Cell::Miss);
            return Ok(Outcome::Miss);
        };

        self.ships[idx].apply_hit()?;
        self.mark(coord, Cell::Hit);
        let ship = self.ships[idx];
        if ship.is_sunk() {
            self.destroyed += 1;
            self.reveal_halo(&ship);
            Ok(Outcome::Sunk)
        } else {
            Ok(Outcome::Hit)
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  destroyed: {},\n  shots: {:?},\n  ships: {:?}\n}}",
            self.size, self.destroyed, self.shots, self.ships
        )
    }
}

/// Row/column-labelled grid, one-based. Concealed boards show ship cells as
/// open water.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  |")?;
        for c in 0..self.size {
            write!(f, " {} |", c + 1)?;
        }
        for r in 0..self.size {
            write!(f, "\n{} |", r + 1)?;
            for c in 0..self.size {
                let cell = self.grid[(r * self.size + c) as usize];
                write!(f, " {} |", cell.symbol(self.conceal))?;
            }
        }
        Ok(())
    }
}
