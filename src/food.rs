use std::collections::HashSet;

use log::debug;
use rand::Rng;
use thiserror::Error;

use crate::config::FULL_SCAN_OCCUPANCY_PERCENT;
use crate::grid::{GridSize, Position};

/// Failure to find a cell for new food.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum PlacementError {
    #[error("no free cell left on the {width}x{height} board")]
    NoFreeCell { width: u16, height: u16 },
}

/// Picks a uniformly random cell that is not in `occupied`.
///
/// Rejection sampling is used while the board is mostly empty. Once more than
/// [`FULL_SCAN_OCCUPANCY_PERCENT`] of the cells are taken, the free cells are
/// enumerated instead so placement never spins on a crowded board.
pub fn place<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    occupied: &HashSet<Position>,
) -> Result<Position, PlacementError> {
    let total = bounds.total_cells();
    let taken = occupied
        .iter()
        .filter(|position| bounds.contains(**position))
        .count();

    if taken >= total {
        return Err(PlacementError::NoFreeCell {
            width: bounds.width,
            height: bounds.height,
        });
    }

    if taken * 100 > total * FULL_SCAN_OCCUPANCY_PERCENT {
        debug!("board {taken}/{total} occupied, placing food from free-cell scan");
        return place_from_free_cells(rng, bounds, occupied);
    }

    loop {
        let candidate = Position::new(
            rng.gen_range(0..i32::from(bounds.width)),
            rng.gen_range(0..i32::from(bounds.height)),
        );
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
    }
}

fn place_from_free_cells<R: Rng + ?Sized>(
    rng: &mut R,
    bounds: GridSize,
    occupied: &HashSet<Position>,
) -> Result<Position, PlacementError> {
    let mut candidates = Vec::new();

    for y in 0..i32::from(bounds.height) {
        for x in 0..i32::from(bounds.width) {
            let position = Position::new(x, y);
            if !occupied.contains(&position) {
                candidates.push(position);
            }
        }
    }

    if candidates.is_empty() {
        return Err(PlacementError::NoFreeCell {
            width: bounds.width,
            height: bounds.height,
        });
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}
