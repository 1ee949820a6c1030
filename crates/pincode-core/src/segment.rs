//! Segment row model

use crate::numeric;

/// One single-character cell of the PIN row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// Position in the row
    pub index: usize,
    /// Current character, `None` when empty
    pub value: Option<char>,
}

impl Segment {
    /// Create an empty segment at `index`
    pub fn empty(index: usize) -> Self {
        Self { index, value: None }
    }

    /// Whether the segment holds a character
    pub fn is_filled(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the current value reads as a number (empty counts as numeric)
    pub fn is_numeric(&self) -> bool {
        match self.value {
            None => true,
            Some(c) => {
                let mut buf = [0u8; 4];
                numeric::is_numeric(c.encode_utf8(&mut buf))
            }
        }
    }
}

/// Ordered row of segments with contiguous indices from zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentList {
    segments: Vec<Segment>,
}

impl SegmentList {
    /// Create `count` empty segments
    pub fn new(count: usize) -> Self {
        Self {
            segments: (0..count).map(Segment::empty).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// Whether the segment at `index` holds a character
    pub fn is_filled(&self, index: usize) -> bool {
        self.get(index).is_some_and(Segment::is_filled)
    }

    /// Whether every segment holds a character
    pub fn all_filled(&self) -> bool {
        self.segments.iter().all(Segment::is_filled)
    }

    /// Whether at least one segment is empty
    pub fn any_empty(&self) -> bool {
        !self.all_filled()
    }

    /// Number of filled segments
    pub fn filled_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_filled()).count()
    }

    /// Write `chars` one per segment starting at `start`.
    ///
    /// Stops when either the characters or the row run out. Returns how many
    /// segments were written.
    pub fn write_from(&mut self, start: usize, chars: impl IntoIterator<Item = char>) -> usize {
        let Some(tail) = self.segments.get_mut(start..) else {
            return 0;
        };

        let mut written = 0;
        for (segment, c) in tail.iter_mut().zip(chars) {
            segment.value = Some(c);
            written += 1;
        }
        written
    }

    /// Empty the segment at `index`
    pub fn clear(&mut self, index: usize) {
        if let Some(segment) = self.segments.get_mut(index) {
            segment.value = None;
        }
    }

    /// Empty every segment
    pub fn clear_all(&mut self) {
        for segment in &mut self.segments {
            segment.value = None;
        }
    }

    /// Truncate or extend with empty segments to `count`
    pub fn resize(&mut self, count: usize) {
        if count < self.segments.len() {
            self.segments.truncate(count);
        } else {
            let start = self.segments.len();
            self.segments.extend((start..count).map(Segment::empty));
        }
    }

    /// Empty every segment whose value is not numeric.
    ///
    /// Returns the number of segments cleared.
    pub fn retain_numeric(&mut self) -> usize {
        let mut cleared = 0;
        for segment in &mut self.segments {
            if !segment.is_numeric() {
                segment.value = None;
                cleared += 1;
            }
        }
        cleared
    }

    /// Concatenate all values in index order (empty segments contribute nothing)
    pub fn joined(&self) -> String {
        self.segments.iter().filter_map(|s| s.value).collect()
    }
}

impl Default for SegmentList {
    fn default() -> Self {
        Self::new(crate::DEFAULT_SEGMENTS)
    }
}
