/// Cursor over a decoded stream that never reads past its end.
pub struct StreamReader<'a> {
    values: &'a [u8],
    cursor: usize,
}

impl<'a> StreamReader<'a> {
    pub fn new(values: &'a [u8]) -> Self {
        Self { values, cursor: 0 }
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.values.len()
    }

    /// Reads the count slot at the cursor and steps over it.
    pub fn read_count(&mut self) -> Option<u8> {
        let count = self.values.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(count)
    }

    /// Takes up to `count` values and advances by `count` regardless of how
    /// many were available.
    pub fn read_members(&mut self, count: usize) -> &'a [u8] {
        let start = self.cursor.min(self.values.len());
        let end = self.cursor.saturating_add(count).min(self.values.len());
        self.cursor = self.cursor.saturating_add(count);
        &self.values[start..end]
    }
}
