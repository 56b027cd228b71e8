mod error;
mod list;
pub mod prelude;
pub mod userdata;
pub mod value;

pub use error::ListError;
pub use list::{Iter, LinkedList};
pub use value::Value;

// hosts embedding the container root it in the same arena types
pub use gc_arena;

#[allow(unused_macros)]
macro_rules! vint {
    ($n:literal) => {
        Value::Integer($n)
    };
}

#[cfg(test)]
mod tests {
    use crate::{value::Value, LinkedList};

    #[test]
    fn shift_on_fresh_list_is_nil() {
        let mut list = LinkedList::new();
        assert_eq!(list.shift(), Value::Nil);
        assert_eq!(list.shift(), Value::Nil);
    }

    #[test]
    fn append_then_shift_is_fifo() {
        let mut list = LinkedList::new();
        for n in 1..=5 {
            list.append(Value::Integer(n));
        }
        for n in 1..=5 {
            assert_eq!(list.shift(), Value::Integer(n));
        }
        // and nil forever after
        assert_eq!(list.shift(), Value::Nil);
        assert_eq!(list.shift(), Value::Nil);
    }

    #[test]
    fn prepend_then_shift_is_lifo() {
        let mut list = LinkedList::new();
        for n in 1..=5 {
            list.prepend(Value::Integer(n));
        }
        for n in (1..=5).rev() {
            assert_eq!(list.shift(), Value::Integer(n));
        }
        assert_eq!(list.shift(), Value::Nil);
    }

    #[test]
    fn chained_calls_equal_sequential_calls() {
        let mut chained = LinkedList::new();
        chained
            .append(vint!(1))
            .append(vint!(2))
            .prepend(vint!(0));

        let mut sequential = LinkedList::new();
        sequential.append(vint!(1));
        sequential.append(vint!(2));
        sequential.prepend(vint!(0));

        assert!(chained.iter().eq(sequential.iter()));
    }

    #[test]
    fn inspect_empty() {
        let list = LinkedList::new();
        assert_eq!(list.inspect(), "#<LinkedList {}>");
    }

    #[test]
    fn inspect_lists_values_head_to_tail() {
        let mut list = LinkedList::new();
        list.append(vint!(1)).append(vint!(2)).append(vint!(3));
        assert_eq!(list.inspect(), "#<LinkedList {1, 2, 3}>");
        // read only, nothing moved
        assert_eq!(list.len(), 3);
        assert_eq!(list.shift(), vint!(1));
    }

    #[test]
    fn inspect_renders_each_value_kind() {
        let mut list = LinkedList::new();
        list.append(Value::Integer(7))
            .append(Value::Number(1.5))
            .append(Value::Bool(true))
            .append(Value::Nil);
        assert_eq!(list.inspect(), "#<LinkedList {7, 1.5, true, nil}>");
    }

    #[test]
    fn mark_reports_each_live_value_once() {
        let mut list = LinkedList::new();
        list.append(vint!(1)).append(vint!(2)).append(vint!(3));
        list.shift();

        let mut seen = vec![];
        list.mark(|v| {
            if let Value::Integer(n) = v {
                seen.push(*n);
            }
        });
        assert_eq!(seen, vec![2, 3]);
    }

    #[test]
    fn mark_skips_nil_nodes() {
        let mut list = LinkedList::new();
        list.append(vint!(1)).append(Value::Nil).append(vint!(2));

        let mut reported = 0;
        list.mark(|v| {
            assert!(!v.is_nil());
            reported += 1;
        });
        assert_eq!(reported, 2);
        // the nil node is still stored, just never reported
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn mark_on_empty_list_reports_nothing() {
        let list = LinkedList::new();
        list.mark(|_| panic!("nothing to report"));
    }

    #[test]
    fn node_count_tracks_operations() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        list.append(vint!(1));
        list.prepend(vint!(0));
        list.append(vint!(2));
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());

        list.shift();
        assert_eq!(list.len(), 2);
        list.shift();
        list.shift();
        assert!(list.is_empty());

        // empty shift leaves the count alone
        list.shift();
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn empty_nonempty_transitions() {
        let mut list = LinkedList::new();
        assert!(list.is_empty());
        list.prepend(vint!(1));
        assert!(!list.is_empty());
        list.shift();
        assert!(list.is_empty());
        list.append(vint!(1));
        list.append(vint!(2));
        list.shift();
        assert!(!list.is_empty());
    }

    #[test]
    fn memsize_follows_node_count() {
        let mut list = LinkedList::new();
        let empty = list.memsize();
        list.append(vint!(1));
        let one = list.memsize();
        list.append(vint!(2));
        let two = list.memsize();
        assert!(one > empty);
        assert!(two > one);

        list.shift();
        assert_eq!(list.memsize(), one);
        list.shift();
        assert_eq!(list.memsize(), empty);
    }

    #[test]
    fn value_type_names_render_for_diagnostics() {
        assert_eq!(Value::Nil.type_name().to_string(), "nil");
        assert_eq!(Value::Integer(1).type_name().to_string(), "integer");
        assert_eq!(Value::Number(1.5).type_name().to_string(), "number");
        assert_eq!(Value::Bool(false).type_name().to_string(), "bool");
    }

    #[test]
    fn dropping_a_long_chain_does_not_recurse() {
        let mut list = LinkedList::new();
        for n in 0..100_000 {
            list.prepend(Value::Integer(n));
        }
        assert_eq!(list.len(), 100_000);
        drop(list);
    }
}
