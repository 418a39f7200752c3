use super::DrawCmd;

/// Recorded draw stream for one picture.
///
/// Paint order is insertion order: later commands occlude earlier ones where
/// they overlap. The list is append-only; nothing is reordered or removed
/// once pushed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns commands in paint order (back-to-front).
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Appends a command on top of everything recorded so far.
    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.items.push(cmd);
    }
}
