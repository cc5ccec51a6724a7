//! The segment table: a growable mapping from segment ID to word array, with
//! LIFO reuse of freed IDs.

use crate::consts::PROGRAM_SEGMENT;
use crate::error::SegmentFault;

/// Owns every live segment and the free-ID pool.
///
/// Segment 0 always exists from construction until the table is dropped; it
/// is the only segment `unmap` refuses to release, and the only one
/// `replace_zero` ever overwrites.
#[derive(Debug, Clone)]
pub struct SegmentTable {
    // `None` marks a freed slot. The spine never shrinks: a freed ID's slot
    // stays in place so the ID can be reused without renumbering anything.
    spine: Vec<Option<Vec<u32>>>,
    free: Vec<u32>,
}

impl SegmentTable {
    /// Builds a table whose segment 0 is `program`, with no other segments
    /// mapped and an empty free-ID pool.
    pub fn new(program: Vec<u32>) -> Self {
        SegmentTable {
            spine: vec![Some(program)],
            free: Vec::new(),
        }
    }

    fn slot(&self, id: u32) -> Result<&Vec<u32>, SegmentFault> {
        self.spine
            .get(id as usize)
            .and_then(Option::as_ref)
            .ok_or(SegmentFault::Unmapped { id })
    }

    fn slot_mut(&mut self, id: u32) -> Result<&mut Vec<u32>, SegmentFault> {
        self.spine
            .get_mut(id as usize)
            .and_then(Option::as_mut)
            .ok_or(SegmentFault::Unmapped { id })
    }

    /// Returns a fresh segment ID backed by `length` zero-initialized words.
    ///
    /// Reuses the most recently unmapped ID if the free pool is non-empty;
    /// otherwise mints one past the current high-water mark.
    pub fn map(&mut self, length: u32) -> u32 {
        let segment = vec![0u32; length as usize];

        let id = if let Some(id) = self.free.pop() {
            self.spine[id as usize] = Some(segment);
            id
        } else {
            let id = self.spine.len() as u32;
            self.spine.push(Some(segment));
            id
        };

        tracing::debug!(id, length, "map");
        id
    }

    /// Releases the segment at `id` and returns its ID to the free pool.
    ///
    /// # Errors
    ///
    /// [`SegmentFault::UnmapProgramSegment`] if `id == 0`;
    /// [`SegmentFault::UnmapNotMapped`] if `id` is not currently mapped.
    pub fn unmap(&mut self, id: u32) -> Result<(), SegmentFault> {
        if id == PROGRAM_SEGMENT {
            return Err(SegmentFault::UnmapProgramSegment);
        }

        let slot = self
            .spine
            .get_mut(id as usize)
            .ok_or(SegmentFault::UnmapNotMapped { id })?;

        if slot.take().is_none() {
            return Err(SegmentFault::UnmapNotMapped { id });
        }

        self.free.push(id);
        tracing::debug!(id, "unmap");
        Ok(())
    }

    /// Reads word `offset` of segment `id`.
    pub fn get(&self, id: u32, offset: u32) -> Result<u32, SegmentFault> {
        let segment = self.slot(id)?;
        segment
            .get(offset as usize)
            .copied()
            .ok_or(SegmentFault::OutOfBounds { id, offset, len: segment.len() as u32 })
    }

    /// Writes `word` to word `offset` of segment `id`.
    pub fn set(&mut self, id: u32, offset: u32, word: u32) -> Result<(), SegmentFault> {
        let segment = self.slot_mut(id)?;
        let len = segment.len() as u32;
        let slot = segment
            .get_mut(offset as usize)
            .ok_or(SegmentFault::OutOfBounds { id, offset, len })?;
        *slot = word;
        Ok(())
    }

    /// Logical length, in words, of segment `id`.
    pub fn length(&self, id: u32) -> Result<u32, SegmentFault> {
        Ok(self.slot(id)?.len() as u32)
    }

    /// Replaces segment 0 with a deep copy of segment `id`. A no-op when
    /// `id == 0`.
    pub fn replace_zero(&mut self, id: u32) -> Result<(), SegmentFault> {
        if id == PROGRAM_SEGMENT {
            return Ok(());
        }

        let copy = self
            .spine
            .get(id as usize)
            .and_then(Option::as_ref)
            .ok_or(SegmentFault::LoadProgramUnmapped { id })?
            .clone();

        tracing::debug!(id, len = copy.len(), "load program replaced segment 0");
        self.spine[0] = Some(copy);
        Ok(())
    }
}
