//! Logical row kinds.

/// The logical category of a list position.
///
/// The adapter resolves every position to exactly one kind; the host
/// framework keys its recycling pool on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// Reserved for a pinned header row. Never produced by resolution today;
    /// kept so pool keys stay stable if headers land later.
    Header,
    /// A standard data row. The payload is a consumer-defined subtype
    /// selecting between item layouts; 0 when the consumer only has one.
    Item(u32),
    /// The trailing load-more row.
    Footer,
    /// The single synthetic row replacing the whole list in an empty/error
    /// state.
    Placeholder,
}

impl RowKind {
    /// `true` for kinds that occupy the full cross-axis span in multi-column
    /// layouts.
    pub fn is_full_span(&self) -> bool {
        matches!(self, RowKind::Footer | RowKind::Placeholder)
    }

    /// `true` for standard data rows of any subtype.
    pub fn is_item(&self) -> bool {
        matches!(self, RowKind::Item(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_span_kinds() {
        assert!(RowKind::Footer.is_full_span());
        assert!(RowKind::Placeholder.is_full_span());
        assert!(!RowKind::Item(0).is_full_span());
        assert!(!RowKind::Header.is_full_span());
    }

    #[test]
    fn test_item_subtypes_are_distinct() {
        assert!(RowKind::Item(2).is_item());
        assert_ne!(RowKind::Item(0), RowKind::Item(1));
    }
}
