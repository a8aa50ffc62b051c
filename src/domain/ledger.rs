use std::{
    cmp::Ordering,
    collections::{VecDeque, vec_deque},
};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::{entry::ChainEntry, traverse::InOrder},
};

pub(crate) type NodeId = usize;

/// One date in the tree. The chain is never empty while the node is linked;
/// its entries all carry the node's date.
#[derive(Debug)]
pub(crate) struct TreeNode {
    pub(crate) chain: VecDeque<ChainEntry>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl TreeNode {
    pub(crate) fn date(&self) -> &str {
        self.chain.front().map_or("", |entry| entry.date.as_str())
    }
}

/// The slot that references a node: the root or one side of a parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Root,
    Left(NodeId),
    Right(NodeId),
}

/// What `insert_or_accumulate` did with the entry it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Insertion {
    /// The date was not in the tree; a node was created for it.
    NewDate,
    /// The date existed; the category was new and now heads the chain.
    NewCategory,
    /// Date and category matched; the amount was added to the existing entry.
    Accumulated,
}

/// Binary search tree of dates, each date owning a chain of entries that are
/// distinct by category.
///
/// Nodes live in an arena and refer to their children by index. Every node is
/// referenced by exactly one link (the root or a parent's side), so removing a
/// node only ever has to repair one link. The tree is never rebalanced.
///
/// # Examples
/// ```
/// use date_ledger::common::money::Money;
/// use date_ledger::domain::{entry::ChainEntry, ledger::Ledger};
///
/// let mut ledger = Ledger::new();
/// for (name, amount) in [("ana", "50"), ("bo", "30")] {
///     let entry = ChainEntry::new(name, "2024-01-01", amount.parse().unwrap(), "food");
///     ledger.insert_or_accumulate(entry).unwrap();
/// }
///
/// let entries: Vec<_> = ledger.find_exact("2024-01-01").unwrap().collect();
/// assert_eq!(entries.len(), 1);
/// assert_eq!(entries[0].amount, "80".parse::<Money>().unwrap());
/// ```
#[derive(Debug, Default)]
pub struct Ledger {
    nodes: Vec<TreeNode>,
    root: Option<NodeId>,
    entries: usize,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries across every chain.
    pub fn len(&self) -> usize {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries == 0
    }

    /// Number of distinct dates.
    pub fn date_count(&self) -> usize {
        self.nodes.len()
    }

    /// Records `entry`, accumulating into an existing entry when one with the
    /// same date and category is already present.
    ///
    /// Storage is reserved before any link changes, so on error the ledger is
    /// exactly as it was.
    pub fn insert_or_accumulate(&mut self, entry: ChainEntry) -> Result<Insertion, LedgerError> {
        let (link, found) = self.descend(&entry.date);
        let outcome = match found {
            Some(id) => merge_into_chain(&mut self.nodes[id].chain, entry)?,
            None => {
                self.attach(link, entry)?;
                Insertion::NewDate
            }
        };
        if outcome != Insertion::Accumulated {
            self.entries += 1;
        }
        Ok(outcome)
    }

    /// Removes the entry recorded under `date` and `category`.
    ///
    /// Returns `None` and leaves the ledger untouched when there is no such
    /// entry. Removing the last entry of a date removes the date from the tree.
    pub fn delete(&mut self, date: &str, category: &str) -> Option<ChainEntry> {
        let (link, id) = match self.descend(date) {
            (link, Some(id)) => (link, id),
            (_, None) => return None,
        };

        let chain = &mut self.nodes[id].chain;
        let position = chain.iter().position(|entry| entry.category == category)?;
        let removed = chain.remove(position)?;
        self.entries -= 1;

        if self.nodes[id].chain.is_empty() {
            self.excise(link, id);
            tracing::debug!(date, "date emptied and removed from tree");
        }
        Some(removed)
    }

    /// Every entry, by ascending date and then chain order.
    pub fn iter(&self) -> impl Iterator<Item = &ChainEntry> + '_ {
        self.in_order().flat_map(|node| node.chain.iter())
    }

    /// The chain recorded on exactly `date`, or `None` when the date has no
    /// entries.
    pub fn find_exact(&self, date: &str) -> Option<vec_deque::Iter<'_, ChainEntry>> {
        let (_, found) = self.descend(date);
        found.map(|id| self.nodes[id].chain.iter())
    }

    /// Every entry dated on or before `bound`, in ascending date order.
    ///
    /// The walk stops at the first date past the bound; everything after it in
    /// order is greater still.
    pub fn up_to<'a>(&'a self, bound: &'a str) -> impl Iterator<Item = &'a ChainEntry> + 'a {
        self.in_order()
            .take_while(move |node| node.date() <= bound)
            .flat_map(|node| node.chain.iter())
    }

    /// Sum of every entry's amount. Fails rather than wrapping when the total
    /// leaves the `Money` range, even if every single amount fits.
    pub fn aggregate(&self) -> Result<Money, LedgerError> {
        Money::checked_sum(self.iter().map(|entry| &entry.amount))
            .ok_or(LedgerError::TotalOverflow)
    }

    /// Dates present in the tree, ascending.
    pub fn dates(&self) -> impl Iterator<Item = &str> + '_ {
        self.in_order().map(TreeNode::date)
    }

    /// Drops every node and entry, leaving an empty ledger. Returns how many
    /// entries were released.
    pub fn release(&mut self) -> usize {
        let released = self.entries;
        self.nodes = Vec::new();
        self.root = None;
        self.entries = 0;
        released
    }

    fn in_order(&self) -> InOrder<'_> {
        InOrder::new(&self.nodes, self.root)
    }

    fn link(&self, link: Link) -> Option<NodeId> {
        match link {
            Link::Root => self.root,
            Link::Left(parent) => self.nodes[parent].left,
            Link::Right(parent) => self.nodes[parent].right,
        }
    }

    fn set_link(&mut self, link: Link, target: Option<NodeId>) {
        match link {
            Link::Root => self.root = target,
            Link::Left(parent) => self.nodes[parent].left = target,
            Link::Right(parent) => self.nodes[parent].right = target,
        }
    }

    /// Walks towards `date`. Returns the node holding it, or the empty link
    /// where it would be attached.
    fn descend(&self, date: &str) -> (Link, Option<NodeId>) {
        let mut link = Link::Root;
        while let Some(id) = self.link(link) {
            link = match date.cmp(self.nodes[id].date()) {
                Ordering::Less => Link::Left(id),
                Ordering::Greater => Link::Right(id),
                Ordering::Equal => return (link, Some(id)),
            };
        }
        (link, None)
    }

    fn attach(&mut self, link: Link, entry: ChainEntry) -> Result<(), LedgerError> {
        self.nodes.try_reserve(1)?;
        let mut chain = VecDeque::new();
        chain.try_reserve(1)?;
        chain.push_back(entry);

        let id = self.nodes.len();
        self.nodes.push(TreeNode {
            chain,
            left: None,
            right: None,
        });
        self.set_link(link, Some(id));
        Ok(())
    }

    /// Unlinks node `id` (referenced from `link`) and frees its slot.
    fn excise(&mut self, link: Link, id: NodeId) {
        let (left, right) = (self.nodes[id].left, self.nodes[id].right);
        let replacement = match (left, right) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                // in-order successor: leftmost node of the right subtree
                let mut successor_link = Link::Right(id);
                let mut successor = right;
                while let Some(next) = self.nodes[successor].left {
                    successor_link = Link::Left(successor);
                    successor = next;
                }
                let successor_right = self.nodes[successor].right;
                self.set_link(successor_link, successor_right);
                self.nodes[successor].left = Some(left);
                self.nodes[successor].right = self.nodes[id].right;
                Some(successor)
            }
        };
        self.set_link(link, replacement);

        self.nodes.swap_remove(id);
        let moved_from = self.nodes.len();
        if id < moved_from {
            self.relink_moved(moved_from, id);
        }
    }

    /// After `swap_remove`, the node formerly at `from` lives at `to`; repoint
    /// the one link that still names `from`.
    fn relink_moved(&mut self, from: NodeId, to: NodeId) {
        let found = {
            let date = self.nodes[to].date();
            let mut link = Link::Root;
            loop {
                match self.link(link) {
                    None => break None,
                    Some(id) if id == from => break Some(link),
                    Some(id) => {
                        link = match date.cmp(self.nodes[id].date()) {
                            Ordering::Less => Link::Left(id),
                            Ordering::Greater => Link::Right(id),
                            Ordering::Equal => break None,
                        }
                    }
                }
            }
        };
        if let Some(link) = found {
            self.set_link(link, Some(to));
        }
    }

    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let reachable: Vec<&TreeNode> = self.in_order().collect();
        assert_eq!(reachable.len(), self.nodes.len(), "every node is linked once");

        for pair in reachable.windows(2) {
            assert!(
                pair[0].date() < pair[1].date(),
                "dates out of order: {} then {}",
                pair[0].date(),
                pair[1].date()
            );
        }

        let mut counted = 0;
        for node in &reachable {
            assert!(!node.chain.is_empty(), "empty chain at {}", node.date());
            for (i, entry) in node.chain.iter().enumerate() {
                assert_eq!(entry.date, node.date());
                assert!(
                    node.chain.iter().skip(i + 1).all(|other| other.category != entry.category),
                    "duplicate category {:?} at {}",
                    entry.category,
                    entry.date
                );
            }
            counted += node.chain.len();
        }
        assert_eq!(counted, self.entries);
    }
}

/// Adds `entry` to the chain of its date: into the entry of the same category
/// when there is one, otherwise as the new chain head.
fn merge_into_chain(
    chain: &mut VecDeque<ChainEntry>,
    entry: ChainEntry,
) -> Result<Insertion, LedgerError> {
    if let Some(existing) = chain
        .iter_mut()
        .find(|existing| existing.category == entry.category)
    {
        existing.amount = existing.amount.checked_add(entry.amount).ok_or_else(|| {
            LedgerError::AmountOverflow {
                date: entry.date,
                category: entry.category,
            }
        })?;
        return Ok(Insertion::Accumulated);
    }

    chain.try_reserve(1)?;
    chain.push_front(entry);
    Ok(Insertion::NewCategory)
}
