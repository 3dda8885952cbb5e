//! Textual reports on the content of an IntSet.
//!
//! Those are meant for humans, debugging or demonstrating; their format is
//! stable but not meant to be parsed.

use super::root::fmt;
use super::root::string::{String, ToString};

use super::{IntSet, IntSetView};

/// `Summary`
///
/// Formats the values of a set in iteration order, followed by its load
/// factor with two decimals: `{ 13 5 7 11 } : 0.40`.
#[derive(Clone, Copy, Debug)]
pub struct Summary<'a>(IntSetView<'a>);

impl<'a> fmt::Display for Summary<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;

        for value in self.0 {
            write!(f, " {}", value)?;
        }

        write!(f, " }} : {:.2}", self.0.load_factor())
    }
}

/// `BucketTable`
///
/// Formats the chain of each bucket of a set, one line per bucket:
///
/// ```text
///  0 | {13} -> {5}
///  1 |
///  2 |
///  3 | {7}
/// ```
#[derive(Clone, Copy, Debug)]
pub struct BucketTable<'a>(IntSetView<'a>);

impl<'a> fmt::Display for BucketTable<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (index, chain) in self.0.buckets().enumerate() {
            write!(f, "{:>2} |", index)?;

            let mut separator = " ";
            for value in chain {
                write!(f, "{}{{{}}}", separator, value)?;
                separator = " -> ";
            }

            f.write_str("\n")?;
        }

        Ok(())
    }
}

impl<'a> IntSetView<'a> {
    /// Returns the summary of the set, suitable for `Display`.
    pub fn summary(&self) -> Summary<'a> { Summary(*self) }

    /// Returns the table of the buckets of the set, suitable for `Display`.
    pub fn bucket_table(&self) -> BucketTable<'a> { BucketTable(*self) }
}

impl IntSet {
    /// Returns the values of the set followed by its load factor.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(10);
    /// assert_eq!("{ } : 0.00", set.summarize());
    ///
    /// set.extend([5, 7, 11, 13]);
    /// assert_eq!("{ 13 5 7 11 } : 0.40", set.summarize());
    /// ```
    pub fn summarize(&self) -> String { self.view().summary().to_string() }

    /// Returns the chains of the buckets of the set, one line per bucket.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use chainset::intset::IntSet;
    /// let mut set = IntSet::with_capacity(4);
    /// set.extend([5, 7]);
    ///
    /// assert_eq!(" 0 | {5}\n 1 | {7}\n 2 |\n 3 |\n", set.describe_buckets());
    /// ```
    pub fn describe_buckets(&self) -> String { self.view().bucket_table().to_string() }
}

impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.view().summary(), f)
    }
}

#[cfg(test)]
mod tests {

use super::IntSet;

fn set_of(capacity: usize, values: &[i64]) -> IntSet {
    let mut set = IntSet::with_capacity(capacity);
    set.extend(values);
    set
}

#[test]
fn summary() {
    let a = set_of(10, &[5, 7, 11, 13]);
    let b = set_of(10, &[1, 3, 9, 15]);

    assert_eq!("{ 13 5 7 11 } : 0.40", a.summarize());
    assert_eq!("{ 15 9 1 3 } : 0.40", b.summarize());
    assert_eq!("{ 13 5 7 11 } : 0.40", format!("{}", a));
}

#[test]
fn summary_negative() {
    let set = set_of(10, &[-1]);

    assert_eq!("{ -1 } : 0.10", set.summarize());
}

#[test]
fn bucket_table() {
    let a = set_of(10, &[5, 7, 11, 13]);

    let expected = concat!(
        " 0 | {13} -> {5}\n",
        " 1 |\n",
        " 2 |\n",
        " 3 | {7}\n",
        " 4 |\n",
        " 5 |\n",
        " 6 |\n",
        " 7 | {11}\n",
        " 8 |\n",
        " 9 |\n",
    );

    assert_eq!(expected, a.describe_buckets());
    assert_eq!(expected, format!("{}", a.view().bucket_table()));
}

#[test]
fn bucket_table_wide_index() {
    let set = set_of(12, &[]);
    let table = set.describe_buckets();

    assert_eq!(12, table.lines().count());
    assert_eq!(Some("11 |"), table.lines().last());
}

}   //  mod tests
