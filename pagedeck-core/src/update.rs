use bitflags::bitflags;

bitflags! {
    /// Invalidation flags a container operation hands back to the host loop.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Update: u8 {
        /// The container has deferred work and wants another turn of the
        /// host loop even if no input arrives.
        const EVAL = 0b0001;
        /// Layout-affecting state changed (strip geometry, page membership).
        const LAYOUT = 0b0010;
        /// Visible state changed and the host should redraw.
        const DRAW = 0b0100;
        /// The host should process the flags even if it would otherwise
        /// coalesce this turn.
        const FORCE = 0b1000;
    }
}

impl Default for Update {
    fn default() -> Self {
        Update::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_combine() {
        let update = Update::DRAW | Update::LAYOUT;
        assert!(update.contains(Update::DRAW));
        assert!(update.contains(Update::LAYOUT));
        assert!(!update.contains(Update::EVAL));
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(Update::default(), Update::empty());
    }
}
