//! Shared utility functions for output formatting

/// Guide line for an ancestor that still has siblings below it.
pub const LEVEL_LINE: &str = "│   ";
/// Spacer for an ancestor that was the last of its siblings.
pub const LAST_SPACING: &str = "    ";
pub const CHILD: &str = "├──";
pub const LAST_CHILD: &str = "└──";

/// Build the prefix for an entry: one guide block per ancestor, then the
/// branch glyph for the entry itself.
pub fn indentation(ancestors: &[bool], is_last: bool) -> String {
    let mut prefix = String::with_capacity((ancestors.len() + 1) * LEVEL_LINE.len());

    for &ancestor_is_last in ancestors {
        prefix.push_str(if ancestor_is_last {
            LAST_SPACING
        } else {
            LEVEL_LINE
        });
    }

    prefix.push_str(if is_last { LAST_CHILD } else { CHILD });
    prefix
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation_top_level() {
        assert_eq!(indentation(&[], false), "├──");
        assert_eq!(indentation(&[], true), "└──");
    }

    #[test]
    fn test_indentation_guides() {
        assert_eq!(indentation(&[false], true), "│   └──");
        assert_eq!(indentation(&[true], false), "    ├──");
        assert_eq!(indentation(&[false, true, false], true), "│       │   └──");
    }

    #[test]
    fn test_indentation_width() {
        // Every ancestor block is four columns wide
        let prefix = indentation(&[true, false, true, false], false);
        assert_eq!(prefix.chars().count(), 4 * 4 + 3);
    }
}
