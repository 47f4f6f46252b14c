//! Attendance matrix
//!
//! Dense view of attendance over a member roster and a set of meetings.
//! Storage is sparse; every pair without a stored record reads as absent.

use std::collections::{HashMap, HashSet};

use crate::entities::AttendanceRecord;
use crate::value_objects::AttendanceStatus;

/// Composite-key map `(member_id, meeting_id) -> status`, always fully populated
/// for the roster and meetings it was built with
#[derive(Debug, Clone, Default)]
pub struct AttendanceMatrix {
    member_ids: Vec<i64>,
    meeting_ids: Vec<i64>,
    cells: HashMap<(i64, i64), AttendanceStatus>,
}

impl AttendanceMatrix {
    /// Build a dense matrix. Duplicate ids are collapsed (first position wins)
    /// and records for pairs outside the roster are ignored.
    pub fn build<M, G, R>(member_ids: M, meeting_ids: G, records: R) -> Self
    where
        M: IntoIterator<Item = i64>,
        G: IntoIterator<Item = i64>,
        R: IntoIterator<Item = AttendanceRecord>,
    {
        let member_ids = dedup(member_ids);
        let meeting_ids = dedup(meeting_ids);

        let mut cells = HashMap::with_capacity(member_ids.len() * meeting_ids.len());
        for &member in &member_ids {
            for &meeting in &meeting_ids {
                cells.insert((member, meeting), AttendanceStatus::default());
            }
        }

        for record in records {
            if let Some(cell) = cells.get_mut(&record.key()) {
                *cell = record.status;
            }
        }

        Self {
            member_ids,
            meeting_ids,
            cells,
        }
    }

    /// Status of a pair, `None` only when the pair is outside the matrix
    pub fn get(&self, member_id: i64, meeting_id: i64) -> Option<AttendanceStatus> {
        self.cells.get(&(member_id, meeting_id)).copied()
    }

    /// Overwrite one cell. Returns false when the pair is outside the matrix.
    pub fn set(&mut self, member_id: i64, meeting_id: i64, status: AttendanceStatus) -> bool {
        match self.cells.get_mut(&(member_id, meeting_id)) {
            Some(cell) => {
                *cell = status;
                true
            }
            None => false,
        }
    }

    pub fn member_ids(&self) -> &[i64] {
        &self.member_ids
    }

    pub fn meeting_ids(&self) -> &[i64] {
        &self.meeting_ids
    }

    /// Statuses of one member across all meetings, in meeting order
    pub fn row(&self, member_id: i64) -> Vec<(i64, AttendanceStatus)> {
        self.meeting_ids
            .iter()
            .filter_map(|&meeting| self.get(member_id, meeting).map(|s| (meeting, s)))
            .collect()
    }

    /// How many meetings a member attended
    pub fn attended_count(&self, member_id: i64) -> usize {
        self.row(member_id)
            .iter()
            .filter(|(_, s)| *s == AttendanceStatus::Attended)
            .count()
    }

    /// Number of cells: members x meetings
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

fn dedup<I: IntoIterator<Item = i64>>(ids: I) -> Vec<i64> {
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(*id)).collect()
}
