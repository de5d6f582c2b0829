/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bounding_box::*;
use super::coordinate::*;

///
/// An event encountered while sweeping a set of bounding boxes along the x-axis
///
#[derive(Clone, Copy, PartialEq, Debug)]
struct SweepEvent {
    x: f64,
    closing: bool,
    on_first_set: bool,
    index: usize,
}

///
/// Finds the pairs of overlapping bounding boxes between two sets of boxes
///
/// Returns the indexes `(i, j)` where `a[i]` overlaps `b[j]`. Boxes that merely touch count as
/// overlapping: the result may contain near-misses but never omits a true overlap, so callers
/// that need exact geometry must re-verify each candidate pair.
///
pub fn sweep_bounds<BoundsA, BoundsB>(a: &[BoundsA], b: &[BoundsB]) -> Vec<(usize, usize)>
where
    BoundsA: BoundingBox,
    BoundsB: BoundingBox<Point = BoundsA::Point>,
{
    let mut events = Vec::with_capacity((a.len() + b.len()) * 2);

    for (index, bounds) in a.iter().enumerate() {
        if bounds.is_empty() {
            continue;
        }
        events.push(SweepEvent { x: bounds.min().get(0), closing: false, on_first_set: true, index });
        events.push(SweepEvent { x: bounds.max().get(0), closing: true, on_first_set: true, index });
    }
    for (index, bounds) in b.iter().enumerate() {
        if bounds.is_empty() {
            continue;
        }
        events.push(SweepEvent { x: bounds.min().get(0), closing: false, on_first_set: false, index });
        events.push(SweepEvent { x: bounds.max().get(0), closing: true, on_first_set: false, index });
    }

    // Opening events sort ahead of closing events at the same x so that touching boxes count
    sort_events(&mut events);

    let mut open_a = Vec::<usize>::new();
    let mut open_b = Vec::<usize>::new();
    let mut pairs = Vec::new();

    for event in events {
        if event.closing {
            let open = if event.on_first_set { &mut open_a } else { &mut open_b };
            open.retain(|index| *index != event.index);
            continue;
        }

        if event.on_first_set {
            for b_index in open_b.iter() {
                if overlaps_from_axis(&a[event.index], &b[*b_index], 1) {
                    pairs.push((event.index, *b_index));
                }
            }
            open_a.push(event.index);
        } else {
            for a_index in open_a.iter() {
                if overlaps_from_axis(&a[*a_index], &b[event.index], 1) {
                    pairs.push((*a_index, event.index));
                }
            }
            open_b.push(event.index);
        }
    }

    pairs
}

///
/// Finds the pairs of overlapping bounding boxes within a single set of boxes
///
/// Returns the index pairs `(i, j)` with `i < j` where `bounds[i]` overlaps `bounds[j]`.
///
pub fn sweep_self<BoundsT: BoundingBox>(bounds: &[BoundsT]) -> Vec<(usize, usize)> {
    let mut events = Vec::with_capacity(bounds.len() * 2);

    for (index, item) in bounds.iter().enumerate() {
        if item.is_empty() {
            continue;
        }
        events.push(SweepEvent { x: item.min().get(0), closing: false, on_first_set: true, index });
        events.push(SweepEvent { x: item.max().get(0), closing: true, on_first_set: true, index });
    }

    sort_events(&mut events);

    let mut open = Vec::<usize>::new();
    let mut pairs = Vec::new();

    for event in events {
        if event.closing {
            open.retain(|index| *index != event.index);
            continue;
        }

        for other in open.iter() {
            if overlaps_from_axis(&bounds[*other], &bounds[event.index], 1) {
                let (i, j) = if *other < event.index {
                    (*other, event.index)
                } else {
                    (event.index, *other)
                };
                pairs.push((i, j));
            }
        }
        open.push(event.index);
    }

    pairs
}

fn sort_events(events: &mut Vec<SweepEvent>) {
    events.sort_by(|e1, e2| {
        e1.x.partial_cmp(&e2.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| e1.closing.cmp(&e2.closing))
    });
}

///
/// Tests whether two boxes overlap on every axis from `axis` onwards (the sweep has already
/// established overlap on the axes before it)
///
fn overlaps_from_axis<BoundsA, BoundsB>(a: &BoundsA, b: &BoundsB, axis: usize) -> bool
where
    BoundsA: BoundingBox,
    BoundsB: BoundingBox<Point = BoundsA::Point>,
{
    let (min1, max1) = (a.min(), a.max());
    let (min2, max2) = (b.min(), b.max());

    (axis..<BoundsA::Point as Coordinate>::len())
        .all(|index| min1.get(index) <= max2.get(index) && min2.get(index) <= max1.get(index))
}
