//! The chains of colliding values, one per bucket.
//!
//! All nodes of all chains live in a single arena, and refer to one another by
//! index. Unlinked nodes are threaded onto a free list, and recycled by the
//! next insertion.

use super::root::{fmt, iter, vec::Vec};

use super::capacity::{BucketIndex, NumberBuckets};
use super::Value;

//  The index of a Node within the arena.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
struct NodeIndex(usize);

//  A link of a chain.
#[derive(Clone, Copy, Debug)]
struct Node {
    value: Value,
    next: Option<NodeIndex>,
}

//  The chains.
//
//  Invariants:
//  -   A value appears in at most one node reachable from `heads`.
//  -   Nodes reachable from `free` are not reachable from `heads`.
#[derive(Clone, Default)]
pub struct Chains {
    //  The head of the chain of each bucket.
    heads: Vec<Option<NodeIndex>>,
    //  The arena.
    nodes: Vec<Node>,
    //  The head of the list of recyclable nodes.
    free: Option<NodeIndex>,
}

impl Chains {
    //  Creates an instance with `number_buckets` empty chains.
    pub fn new(number_buckets: NumberBuckets) -> Self {
        let mut heads = Vec::with_capacity(number_buckets.0);
        heads.resize(number_buckets.0, None);

        Self { heads, nodes: Vec::new(), free: None }
    }

    //  Returns the number of buckets, that is of chains.
    pub fn number_buckets(&self) -> NumberBuckets { NumberBuckets(self.heads.len()) }

    //  Returns the chain of `bucket`, from head to tail.
    pub fn chain(&self, bucket: BucketIndex) -> Chain<'_> {
        Chain { nodes: &self.nodes, current: self.heads[bucket.0] }
    }

    //  Returns all chains, in bucket order.
    pub fn buckets(&self) -> Buckets<'_> {
        Buckets { chains: self, next: BucketIndex(0) }
    }

    //  Returns all values, in bucket order and from head to tail within a chain.
    pub fn values(&self) -> Values<'_> {
        Values { buckets: self.buckets(), chain: None }
    }

    //  Returns whether the chain of `bucket` contains `value`.
    pub fn contains(&self, bucket: BucketIndex, value: Value) -> bool {
        self.chain(bucket).any(|v| v == value)
    }

    //  Prepends `value` to the chain of `bucket`.
    //
    //  The caller guarantees that `value` is not already present.
    pub fn push_front(&mut self, bucket: BucketIndex, value: Value) {
        debug_assert!(!self.contains(bucket, value));

        let node = Node { value, next: self.heads[bucket.0] };

        let index = match self.free {
            Some(index) => {
                self.free = self.nodes[index.0].next;
                self.nodes[index.0] = node;
                index
            },
            None => {
                self.nodes.push(node);
                NodeIndex(self.nodes.len() - 1)
            },
        };

        self.heads[bucket.0] = Some(index);
    }

    //  Unlinks `value` from the chain of `bucket`, if present.
    //
    //  Returns whether `value` was present.
    pub fn unlink(&mut self, bucket: BucketIndex, value: Value) -> bool {
        let mut previous: Option<NodeIndex> = None;
        let mut current = self.heads[bucket.0];

        while let Some(index) = current {
            let node = self.nodes[index.0];

            if node.value == value {
                match previous {
                    None => self.heads[bucket.0] = node.next,
                    Some(previous) => self.nodes[previous.0].next = node.next,
                }

                self.nodes[index.0].next = self.free;
                self.free = Some(index);

                return true;
            }

            previous = current;
            current = node.next;
        }

        false
    }

    //  Unlinks all nodes, and releases the arena.
    //
    //  The number of buckets is unchanged.
    pub fn clear(&mut self) {
        for head in &mut self.heads {
            *head = None;
        }

        self.nodes.clear();
        self.free = None;
    }

    //  Returns the number of nodes reachable from the heads.
    #[cfg(test)]
    pub fn reachable(&self) -> usize {
        self.buckets().map(|chain| chain.count()).sum()
    }
}

impl fmt::Debug for Chains {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.buckets()).finish()
    }
}

/// An iterator over the values of a single bucket, from head to tail.
///
/// The head of a chain is the value most recently inserted in this bucket.
#[derive(Clone)]
pub struct Chain<'a> {
    nodes: &'a [Node],
    current: Option<NodeIndex>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let node = self.nodes[self.current?.0];
        self.current = node.next;
        Some(node.value)
    }
}

impl<'a> iter::FusedIterator for Chain<'a> {}

impl<'a> fmt::Debug for Chain<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

/// An iterator over the chains of all buckets, in bucket order.
#[derive(Clone)]
pub struct Buckets<'a> {
    chains: &'a Chains,
    next: BucketIndex,
}

impl<'a> Iterator for Buckets<'a> {
    type Item = Chain<'a>;

    fn next(&mut self) -> Option<Chain<'a>> {
        if self.next.0 >= self.chains.heads.len() {
            return None;
        }

        let chain = self.chains.chain(self.next);
        self.next = BucketIndex(self.next.0 + 1);
        Some(chain)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.chains.heads.len().saturating_sub(self.next.0);
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for Buckets<'a> {}

impl<'a> iter::FusedIterator for Buckets<'a> {}

/// An iterator over all values, in bucket order, and from head to tail within
/// each bucket.
#[derive(Clone)]
pub struct Values<'a> {
    buckets: Buckets<'a>,
    chain: Option<Chain<'a>>,
}

impl<'a> Iterator for Values<'a> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        loop {
            if let Some(value) = self.chain.as_mut().and_then(Iterator::next) {
                return Some(value);
            }

            self.chain = Some(self.buckets.next()?);
        }
    }
}

impl<'a> iter::FusedIterator for Values<'a> {}

//  mod tests
