use gc_arena::{Collect, Collection};

use crate::value::Value;

macro_rules! devout {
    ($($arg:tt)*) => {
        #[cfg(feature = "dev-out")]
        println!($($arg)*);
    }
}

/// One link of the chain. Owns its value handle and everything reachable
/// through `next`; every node has exactly one owner, the node before it or
/// the list head slot.
struct Node<'gc> {
    value: Value<'gc>,
    next: Option<Box<Node<'gc>>>,
}

impl<'gc> Node<'gc> {
    fn new(value: Value<'gc>) -> Self {
        Node { value, next: None }
    }
}

/// Singly linked list of host value handles. The node chain lives on the
/// plain heap outside the host's arena, so the list has to report every
/// handle it holds during a trace pass or the collector would reclaim
/// values reachable only from here.
pub struct LinkedList<'gc> {
    head: Option<Box<Node<'gc>>>,
}

impl<'gc> LinkedList<'gc> {
    pub const TYPE_NAME: &'static str = "LinkedList";

    /** The only construction path, a list always starts empty */
    pub fn new() -> Self {
        LinkedList { head: None }
    }

    /// Link a new node holding `value` after the current tail, scanning
    /// from the head to find it. Returns self so calls chain.
    // TODO benchmark a cached tail pointer if append ever shows up hot,
    // the scan is O(n) on purpose to keep the chain single-owner only
    pub fn append(&mut self, value: Value<'gc>) -> &mut Self {
        devout!(" | append: {} ({})", value, value.type_name());
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node::new(value)));
        self
    }

    /// Make a new node holding `value` the head in O(1); the old head, if
    /// any, becomes its successor. Returns self so calls chain.
    pub fn prepend(&mut self, value: Value<'gc>) -> &mut Self {
        devout!(" | prepend: {} ({})", value, value.type_name());
        let mut node = Box::new(Node::new(value));
        node.next = self.head.take();
        self.head = Some(node);
        self
    }

    /// Unlink the head node and hand back its value, freeing the node
    /// immediately. An empty list is not an error, it yields `Nil`.
    pub fn shift(&mut self) -> Value<'gc> {
        match self.head.take() {
            Some(node) => {
                let Node { value, next } = *node;
                devout!(" | shift: {}", value);
                self.head = next;
                value
            }
            None => Value::Nil,
        }
    }

    /// Head to tail traversal over the stored values. Terminates because
    /// only `append` and `prepend` ever link nodes, always at the tail or
    /// head, so the chain cannot cycle.
    pub fn iter(&self) -> Iter<'_, 'gc> {
        Iter {
            node: self.head.as_deref(),
        }
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walk the chain and report every non nil value to the collector's
    /// callback, once per node. Nil nodes are walked over without being
    /// reported. Read only, the collector may call this mid pause.
    pub fn mark<F: FnMut(&Value<'gc>)>(&self, mut report: F) {
        let mut node = self.head.as_deref();
        while let Some(n) = node {
            if !n.value.is_nil() {
                report(&n.value);
            }
            node = n.next.as_deref();
        }
    }

    /// Readable rendering in the host's inspect format,
    /// `#<LinkedList {v1, v2}>`, values head to tail.
    pub fn inspect(&self) -> String {
        format!(
            "#<{} {{{}}}>",
            Self::TYPE_NAME,
            self.iter()
                .map(|v| v.to_string())
                .collect::<Vec<String>>()
                .join(", ")
        )
    }

    /// Bytes held outside the host's arena, the struct itself plus every
    /// owned node. This is the memory the collector cannot account for on
    /// its own.
    pub fn memsize(&self) -> usize {
        std::mem::size_of::<Self>() + self.len() * std::mem::size_of::<Node<'gc>>()
    }
}

pub struct Iter<'a, 'gc> {
    node: Option<&'a Node<'gc>>,
}

impl<'a, 'gc> Iterator for Iter<'a, 'gc> {
    type Item = &'a Value<'gc>;

    fn next(&mut self) -> Option<Self::Item> {
        let n = self.node?;
        self.node = n.next.as_deref();
        Some(&n.value)
    }
}

// Manual impl because of the Drop below. Safe: drop never touches a Gc
// pointer, it only releases the node boxes.
unsafe impl<'gc> Collect for LinkedList<'gc> {
    fn trace(&self, cc: &Collection) {
        self.mark(|value| value.trace(cc));
    }
}

impl Drop for LinkedList<'_> {
    fn drop(&mut self) {
        // pop one box at a time, the default cascading drop would recurse
        // once per node and blow the stack on a long chain
        let mut node = self.head.take();
        while let Some(mut n) = node {
            node = n.next.take();
        }
    }
}
