use std::fmt::{self, Debug, Formatter};

/// Writes each of the provided `items` between `#{` and `}`, separated by commas. The braces are
/// prefixed with `#` to make it clear that the contents are unordered.
pub fn write_set<I, F>(f: &mut Formatter<'_>, items: I, mut write_item: F) -> fmt::Result
where
    I: IntoIterator,
    F: FnMut(&mut Formatter<'_>, I::Item) -> fmt::Result,
{
    f.write_str("#{")?;
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write_item(f, item)?;
    }
    f.write_str("}")
}

/// Debug formats the items of a cloneable iterator in the same manner as [`write_set`], so that it
/// can be used as a field with [`Formatter::debug_struct`].
pub struct DebugContents<I>(pub I);

impl<I> Debug for DebugContents<I>
where
    I: Iterator + Clone,
    I::Item: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_set(f, self.0.clone(), |f, item| write!(f, "{item:?}"))
    }
}
