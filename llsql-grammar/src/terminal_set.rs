//! Sets of terminals.

use std::fmt;

use bit_vec::BitVec;

use crate::Terminal;

/// A set of terminals in the form of a bit vector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TerminalSet {
    bit_vec: BitVec,
}

impl Default for TerminalSet {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalSet {
    /// Constructs an empty `TerminalSet`.
    pub fn new() -> Self {
        TerminalSet {
            bit_vec: BitVec::from_elem(Terminal::COUNT, false),
        }
    }

    /// Adds a terminal. Returns whether it was absent.
    pub fn insert(&mut self, terminal: Terminal) -> bool {
        let absent = !self.contains(terminal);
        self.bit_vec.set(terminal.index(), true);
        absent
    }

    pub fn remove(&mut self, terminal: Terminal) {
        self.bit_vec.set(terminal.index(), false);
    }

    pub fn contains(&self, terminal: Terminal) -> bool {
        self.bit_vec[terminal.index()]
    }

    /// Adds all terminals of `other`. Returns whether `self` changed.
    pub fn union(&mut self, other: &TerminalSet) -> bool {
        self.bit_vec.or(&other.bit_vec)
    }

    pub fn len(&self) -> usize {
        self.bit_vec.iter().filter(|&bit| bit).count()
    }

    pub fn is_empty(&self) -> bool {
        self.bit_vec.none()
    }

    /// Iterates over terminals in the set, in index order.
    pub fn iter(&self) -> impl Iterator<Item = Terminal> + '_ {
        self.bit_vec
            .iter()
            .enumerate()
            .filter_map(|(i, bit)| if bit { Terminal::from_index(i) } else { None })
    }

    pub fn to_vec(&self) -> Vec<Terminal> {
        self.iter().collect()
    }
}

impl FromIterator<Terminal> for TerminalSet {
    fn from_iter<I: IntoIterator<Item = Terminal>>(iter: I) -> Self {
        let mut set = TerminalSet::new();
        for terminal in iter {
            set.insert(terminal);
        }
        set
    }
}

impl fmt::Display for TerminalSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("{")?;
        for (i, terminal) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", terminal)?;
        }
        f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_reports_growth() {
        let mut a: TerminalSet = [Terminal::Id, Terminal::Num].into_iter().collect();
        let b: TerminalSet = [Terminal::Num].into_iter().collect();
        assert!(!a.union(&b));
        let c: TerminalSet = [Terminal::Str].into_iter().collect();
        assert!(a.union(&c));
        assert_eq!(a.to_vec(), vec![Terminal::Id, Terminal::Num, Terminal::Str]);
        assert_eq!(a.to_string(), "{ID, NUM, STRING}");
    }

    #[test]
    fn test_insert_and_remove() {
        let mut set = TerminalSet::new();
        assert!(set.is_empty());
        assert!(set.insert(Terminal::Eof));
        assert!(!set.insert(Terminal::Eof));
        assert_eq!(set.len(), 1);
        set.remove(Terminal::Eof);
        assert!(!set.contains(Terminal::Eof));
        assert!(set.is_empty());
    }
}
