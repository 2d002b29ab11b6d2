//! Minimum-gap enforcement between co-lane actors
//!
//! Independent spawn timers and jittered speeds make exact clearance
//! impossible to guarantee at spawn time alone, so spacing is enforced twice:
//! candidates are rejected at insertion if they cannot clear the lane, and an
//! O(n log n) per-lane pass after motion restores the gap invariant every
//! tick without full physics.

use std::cmp::Ordering;

use super::actor::Actor;
use super::lane::Lane;
use super::rect::Rect;

/// Insertion-time check: a candidate expanded by `gap` on both horizontal
/// sides must clear every co-lane actor already present
pub fn has_room(candidate: &Rect, lane_y: f32, actors: &[Actor], gap: f32) -> bool {
    let probe = candidate.expanded_x(gap);
    actors
        .iter()
        .filter(|a| a.in_lane(lane_y))
        .all(|a| !probe.intersects(&a.bounds()))
}

/// Post-motion correction for one class across its lanes
pub fn resolve(actors: &mut [Actor], lanes: &[Lane], gap: f32) {
    for lane in lanes {
        resolve_lane(actors, lane, gap);
    }
}

/// Restore the minimum gap between adjacent co-lane actors.
///
/// Pairs are walked front-to-back in travel order so that pushing a follower
/// backward cannot reopen a pair that was already corrected: once a pair is
/// separated, neither of its members moves again this pass.
fn resolve_lane(actors: &mut [Actor], lane: &Lane, gap: f32) {
    let mut idx: Vec<usize> = (0..actors.len())
        .filter(|&i| actors[i].in_lane(lane.y))
        .collect();
    if idx.len() < 2 {
        return;
    }
    idx.sort_by(|&a, &b| {
        actors[a]
            .pos
            .x
            .partial_cmp(&actors[b].pos.x)
            .unwrap_or(Ordering::Equal)
    });

    let rightward = lane.speed > 0.0;
    let last = idx.len() - 1;
    for p in 0..last {
        // front-most pair first: for rightward traffic that is the highest-x
        // pair, for leftward the lowest-x pair
        let p = if rightward { last - 1 - p } else { p };
        let (a, b) = (idx[p], idx[p + 1]);
        let deficit = actors[a].bounds().right() + gap - actors[b].pos.x;
        if deficit <= 0.0 {
            continue;
        }
        if actors[a].speed.is_sign_positive() == actors[b].speed.is_sign_positive() {
            // same direction: the trailing actor gives way by the full
            // deficit
            if actors[a].speed > 0.0 {
                actors[a].pos.x -= deficit;
            } else {
                actors[b].pos.x += deficit;
            }
        } else {
            // head-on pair: split the correction
            actors[a].pos.x -= deficit / 2.0;
            actors[b].pos.x += deficit / 2.0;
        }
    }
}
