use super::TermStore;

/// Index of the sentinel node, which is never freed.
const HEAD: usize = 0;

#[derive(Clone, Debug)]
struct Node<T> {
    exponent: u32,
    /// `None` for the sentinel and for nodes sitting in the free list.
    coeff: Option<T>,
    next: usize,
}

/// Terms kept in a circular singly linked list, sorted by descending
/// exponent.
///
/// Nodes live in an arena owned by the store and link to each other by
/// index. The list starts and ends at a sentinel node, so an empty list is a
/// sentinel pointing at itself and insertion never special-cases the ends.
/// Removed nodes go to a free list and are reused by later insertions; the
/// free list belongs to this store alone.
///
/// Merging a term costs `O(n)`.
#[derive(Clone, Debug)]
pub struct ListStore<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    len: usize,
}

impl<T> Default for ListStore<T> {
    fn default() -> Self {
        Self {
            nodes: vec![Node {
                exponent: 0,
                coeff: None,
                next: HEAD,
            }],
            free: Vec::new(),
            len: 0,
        }
    }
}

impl<T> ListStore<T> {
    /// Number of freed nodes waiting to be reused.
    #[must_use]
    pub fn recycled(&self) -> usize {
        self.free.len()
    }

    /// Finds the last node with an exponent strictly greater than
    /// `exponent`, and the node following it.
    fn locate(&self, exponent: u32) -> (usize, usize) {
        let mut prev = HEAD;
        let mut cur = self.nodes[HEAD].next;
        while cur != HEAD && self.nodes[cur].exponent > exponent {
            prev = cur;
            cur = self.nodes[cur].next;
        }
        (prev, cur)
    }

    fn find(&self, exponent: u32) -> Option<usize> {
        let (_, cur) = self.locate(exponent);
        (cur != HEAD && self.nodes[cur].exponent == exponent).then_some(cur)
    }

    fn alloc(&mut self, exponent: u32, coeff: T, next: usize) -> usize {
        let node = Node {
            exponent,
            coeff: Some(coeff),
            next,
        };
        if let Some(idx) = self.free.pop() {
            log::trace!("reusing node {idx} for degree {exponent}");
            self.nodes[idx] = node;
            idx
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }
}

impl<T: Clone + std::fmt::Debug> TermStore<T> for ListStore<T> {
    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, exponent: u32) -> Option<&T> {
        self.find(exponent)
            .and_then(|idx| self.nodes[idx].coeff.as_ref())
    }

    fn get_mut(&mut self, exponent: u32) -> Option<&mut T> {
        self.find(exponent)
            .and_then(|idx| self.nodes[idx].coeff.as_mut())
    }

    fn insert(&mut self, exponent: u32, coeff: T) {
        let (prev, cur) = self.locate(exponent);
        debug_assert!(
            cur == HEAD || self.nodes[cur].exponent != exponent,
            "exponent {exponent} was already stored"
        );
        let idx = self.alloc(exponent, coeff, cur);
        self.nodes[prev].next = idx;
        self.len += 1;
    }

    fn remove(&mut self, exponent: u32) -> Option<T> {
        let (prev, cur) = self.locate(exponent);
        if cur == HEAD || self.nodes[cur].exponent != exponent {
            return None;
        }
        self.nodes[prev].next = self.nodes[cur].next;
        self.free.push(cur);
        self.len -= 1;
        self.nodes[cur].coeff.take()
    }

    fn iter<'a>(&'a self) -> impl Iterator<Item = (u32, &'a T)>
    where
        T: 'a,
    {
        Iter {
            nodes: &self.nodes,
            cursor: self.nodes[HEAD].next,
        }
    }
}

struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = (u32, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor == HEAD {
            return None;
        }
        let node = &self.nodes[self.cursor];
        self.cursor = node.next;
        node.coeff.as_ref().map(|c| (node.exponent, c))
    }
}
