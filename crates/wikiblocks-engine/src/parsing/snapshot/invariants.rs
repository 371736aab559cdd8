use crate::models::Block;

/// Validates converter output invariants for one block.
///
/// Asserts that:
/// - Every bounded tag satisfies `start <= end <= len(text)` in characters
/// - The block's first tag (its own) is unbounded
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(block: &Block) {
    let n = block.char_len();
    for (i, tag) in block.tags.iter().enumerate() {
        if let Some(span) = tag.span {
            assert!(
                span.start <= span.end && span.end <= n,
                "tag {i} ({}) span out of bounds: {:?} (text len: {})",
                tag.kind,
                span,
                n
            );
        }
    }
    if let Some(own) = block.tags.first() {
        assert!(
            own.span.is_none(),
            "own tag ({}) must be unbounded, got {:?}",
            own.kind,
            own.span
        );
    }
}

/// Checks every block of a document.
pub fn check_all(blocks: &[Block]) {
    for block in blocks {
        check(block);
    }
}
