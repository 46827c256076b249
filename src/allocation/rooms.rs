//! Room allocator.
//!
//! Owns the free-time blocks of every room for the duration of a run.
//!
//! # Search
//! Rooms are scanned in ascending capacity order (stable, so rooms of
//! equal capacity keep input order). Rooms too small for the request are
//! skipped. Within a room, blocks are scanned in time order and the first
//! block long enough yields a candidate starting at the block's start.
//! The best candidate is the one with the earliest start; on equal starts
//! the first one found wins, which prefers the smaller room.
//!
//! # Commit
//! Placing an exam removes its block. If time remains after the exam, the
//! remainder `[end, block.end)` replaces the block in place. Time before
//! the exam start is never given back.
//!
//! # Complexity
//! O(r * b) per search, where r = rooms and b = blocks per room.

use crate::error::ScheduleError;
use crate::models::{Interval, IntervalSet, Room, MS_PER_MINUTE};
use crate::validation;

/// A feasible (room, block) placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    /// Position of the room in the allocator's capacity-ascending order.
    pub room_index: usize,
    /// Position of the block within the room's free list.
    pub block_index: usize,
    /// Exam window; always starts at the block's start.
    pub window: Interval,
}

#[derive(Debug, Clone)]
struct RoomState {
    id: String,
    capacity: i32,
    free: IntervalSet,
}

/// Per-room free-time state for one scheduling run.
#[derive(Debug, Clone)]
pub struct RoomAllocator {
    rooms: Vec<RoomState>,
}

impl RoomAllocator {
    /// Builds the allocator from declared rooms.
    ///
    /// Fails if any room has a negative capacity, a malformed availability
    /// window, overlapping windows, or a duplicate ID.
    pub fn new(rooms: &[Room]) -> Result<Self, ScheduleError> {
        validation::validate_rooms(rooms).map_err(ScheduleError::InvalidInput)?;

        let mut states = rooms
            .iter()
            .map(|r| {
                Ok(RoomState {
                    id: r.id.clone(),
                    capacity: r.capacity,
                    free: r.free_blocks()?,
                })
            })
            .collect::<Result<Vec<_>, ScheduleError>>()?;
        states.sort_by_key(|s| s.capacity);

        Ok(Self { rooms: states })
    }

    /// Enumerates every (room, block) pair that satisfies capacity and
    /// duration, in scan order.
    pub fn candidates(
        &self,
        required_capacity: i32,
        duration_ms: i64,
    ) -> impl Iterator<Item = Candidate> + '_ {
        self.rooms
            .iter()
            .enumerate()
            .filter(move |(_, room)| room.capacity >= required_capacity)
            .flat_map(move |(room_index, room)| {
                room.free
                    .iter()
                    .enumerate()
                    .filter(move |(_, block)| block.duration_ms() >= duration_ms)
                    .map(move |(block_index, block)| Candidate {
                        room_index,
                        block_index,
                        window: Interval::starting_at(block.start_ms, duration_ms),
                    })
            })
    }

    /// Finds the earliest placement for an exam of `duration_minutes` in a
    /// room seating at least `required_capacity`.
    ///
    /// Returns `None` if no room has a block that is large enough.
    pub fn find_earliest_feasible(
        &self,
        required_capacity: i32,
        duration_minutes: i32,
    ) -> Option<Candidate> {
        let duration_ms = i64::from(duration_minutes) * MS_PER_MINUTE;
        self.find_earliest_where(required_capacity, duration_ms, |_| true)
    }

    /// Like [`RoomAllocator::find_earliest_feasible`], but a candidate
    /// must also satisfy `accept`.
    ///
    /// Blocks are sorted, so the first accepted block in a room is that
    /// room's earliest; later blocks of the room are not examined. Blocks
    /// starting at or after the current best are skipped without calling
    /// `accept`.
    pub fn find_earliest_where<F>(
        &self,
        required_capacity: i32,
        duration_ms: i64,
        mut accept: F,
    ) -> Option<Candidate>
    where
        F: FnMut(&Candidate) -> bool,
    {
        let mut best: Option<Candidate> = None;

        for (room_index, room) in self.rooms.iter().enumerate() {
            if room.capacity < required_capacity {
                continue;
            }

            let found = room
                .free
                .iter()
                .enumerate()
                .take_while(|(_, block)| best.map_or(true, |b| block.start_ms < b.window.start_ms))
                .filter(|(_, block)| block.duration_ms() >= duration_ms)
                .map(|(block_index, block)| Candidate {
                    room_index,
                    block_index,
                    window: Interval::starting_at(block.start_ms, duration_ms),
                })
                .find(|c| accept(c));

            if found.is_some() {
                best = found;
            }
        }

        best
    }

    /// Checks a candidate against the current state without changing it.
    ///
    /// Returns the ID of the candidate's room. A candidate that passes is
    /// guaranteed to commit.
    pub fn verify(&self, candidate: &Candidate) -> Result<&str, ScheduleError> {
        self.block_for(candidate).map(|(room, _)| room.id.as_str())
    }

    /// Commits a placement, shrinking the chosen block.
    ///
    /// Returns the consumed window. Fails if the candidate does not match
    /// the current state (block gone or no longer enclosing the window).
    pub fn commit(&mut self, candidate: &Candidate) -> Result<Interval, ScheduleError> {
        let (_, block) = self.block_for(candidate)?;

        let remainder = (candidate.window.end_ms < block.end_ms)
            .then(|| Interval::new(candidate.window.end_ms, block.end_ms));

        let room = &mut self.rooms[candidate.room_index];
        room.free.replace(candidate.block_index, remainder);
        Ok(candidate.window)
    }

    fn block_for(&self, candidate: &Candidate) -> Result<(&RoomState, Interval), ScheduleError> {
        let room = self.rooms.get(candidate.room_index);
        match room.and_then(|r| r.free.get(candidate.block_index).map(|b| (r, *b))) {
            Some((room, block))
                if block.encloses(&candidate.window) && candidate.window.is_well_formed() =>
            {
                Ok((room, block))
            }
            _ => Err(ScheduleError::StaleCandidate {
                room_id: room.map(|r| r.id.clone()).unwrap_or_default(),
                block_index: candidate.block_index,
            }),
        }
    }

    /// Room ID at a scan position.
    pub fn room_id(&self, room_index: usize) -> Option<&str> {
        self.rooms.get(room_index).map(|r| r.id.as_str())
    }

    /// Room capacity at a scan position.
    pub fn room_capacity(&self, room_index: usize) -> Option<i32> {
        self.rooms.get(room_index).map(|r| r.capacity)
    }

    /// Room IDs in scan (capacity-ascending) order.
    pub fn room_ids(&self) -> impl Iterator<Item = &str> {
        self.rooms.iter().map(|r| r.id.as_str())
    }

    /// Current free blocks of a room.
    pub fn free_blocks(&self, room_id: &str) -> Option<&IntervalSet> {
        self.rooms.iter().find(|r| r.id == room_id).map(|r| &r.free)
    }

    /// Total remaining free time of a room (ms).
    pub fn total_free_ms(&self, room_id: &str) -> Option<i64> {
        self.free_blocks(room_id).map(IntervalSet::total_duration_ms)
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
