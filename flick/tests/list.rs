use std::cmp::Ordering;
use std::rc::Rc;

use flick::prelude::*;

/// A list item labelled with its text.
struct Item<P> {
    base: ComponentBase<Node>,
    payload: P,
}

impl<P: 'static> Item<P> {
    fn new(payload: P, label: &str) -> Rc<Self> {
        let node = Node::element("li");
        node.set_text(label);
        Rc::new(Self {
            base: ComponentBase::new(node),
            payload,
        })
    }
}

impl<P: 'static> Component<Node> for Item<P> {
    fn base(&self) -> &ComponentBase<Node> {
        &self.base
    }
}

impl<P: 'static> PayloadComponent<P, Node> for Item<P> {
    fn payload(&self) -> &P {
        &self.payload
    }
}

fn num(value: f64) -> Rc<Item<f64>> {
    Item::new(value, &value.to_string())
}

fn erase<P: 'static>(item: Rc<Item<P>>) -> Rc<dyn PayloadComponent<P, Node>> {
    item
}

fn nums(values: &[f64]) -> Vec<Rc<dyn PayloadComponent<f64, Node>>> {
    values.iter().map(|v| erase(num(*v))).collect()
}

fn ascending(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

/// Labels of the list's nodes in sibling order.
fn sibling_labels<P: 'static>(list: &ListComponent<P, Node>) -> Vec<String> {
    list.node()
        .children()
        .iter()
        .map(Node::text_content)
        .collect()
}

/// Model order matches sibling order, and the model is sorted.
fn assert_in_sync<P: 'static>(list: &ListComponent<P, Node>, cmp: impl Fn(&P, &P) -> Ordering) {
    let items = list.items();
    let nodes = list.node().children();
    assert_eq!(items.len(), nodes.len());
    for (item, node) in items.iter().zip(&nodes) {
        assert_eq!(item.node(), node);
    }
    for pair in items.windows(2) {
        assert_ne!(cmp(pair[0].payload(), pair[1].payload()), Ordering::Greater);
    }
    assert_eq!(list.children().len(), items.len());
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construction_sorts_items() {
    let list = ListComponent::unordered_by(nums(&[3.0, 1.0, 2.0]), ascending).unwrap();

    assert_eq!(list.payloads(), vec![1.0, 2.0, 3.0]);
    assert_eq!(sibling_labels(&list), vec!["1", "2", "3"]);
    assert_eq!(list.node().tag().as_deref(), Some("ul"));
    assert_in_sync(&list, ascending);
}

#[test]
fn test_default_compare_keeps_input_order() {
    let list = ListComponent::div(nums(&[3.0, 1.0, 2.0])).unwrap();

    assert_eq!(list.payloads(), vec![3.0, 1.0, 2.0]);
    assert_eq!(list.node().tag().as_deref(), Some("div"));

    list.add_child(num(0.0)).unwrap();
    assert_eq!(list.payloads(), vec![3.0, 1.0, 2.0, 0.0]);
    assert_eq!(sibling_labels(&list), vec!["3", "1", "2", "0"]);
}

#[test]
fn test_construction_over_connected_node_mounts_items() {
    let items = nums(&[2.0, 1.0]);
    let list = ListComponent::with_compare(Node::root("app"), items.clone(), ascending).unwrap();

    assert!(list.is_mounted());
    assert!(items.iter().all(|item| item.is_mounted()));
}

#[test]
fn test_construction_items_are_not_mounted_when_detached() {
    let items = nums(&[2.0, 1.0]);
    let list = ListComponent::unordered_by(items.clone(), ascending).unwrap();

    assert!(!list.is_mounted());
    assert!(items.iter().all(|item| !item.is_mounted()));
}

// ============================================================================
// Insertion
// ============================================================================

#[test]
fn test_insertion_keeps_sorted_order() {
    let list = ListComponent::unordered_by(nums(&[3.0, 1.0, 2.0]), ascending).unwrap();

    list.add_child(num(0.0)).unwrap();
    assert_eq!(list.payloads(), vec![0.0, 1.0, 2.0, 3.0]);
    assert_eq!(sibling_labels(&list), vec!["0", "1", "2", "3"]);
    assert_in_sync(&list, ascending);

    list.add_child(num(1.5)).unwrap();
    assert_eq!(list.payloads(), vec![0.0, 1.0, 1.5, 2.0, 3.0]);
    assert_eq!(sibling_labels(&list), vec!["0", "1", "1.5", "2", "3"]);
    assert_in_sync(&list, ascending);

    list.add_child(num(4.0)).unwrap();
    assert_eq!(sibling_labels(&list), vec!["0", "1", "1.5", "2", "3", "4"]);
    assert_in_sync(&list, ascending);
}

#[test]
fn test_insertion_into_empty_list() {
    let list = ListComponent::<f64, Node>::unordered_by(Vec::new(), ascending).unwrap();
    assert!(list.is_empty());

    list.add_child(num(2.0)).unwrap();
    list.add_child(num(1.0)).unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(sibling_labels(&list), vec!["1", "2"]);
}

#[test]
fn test_equal_payloads_keep_insertion_order() {
    let by_key = |a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0);
    let items = vec![
        erase(Item::new((1, 'a'), "1a")),
        erase(Item::new((0, 'b'), "0b")),
        erase(Item::new((1, 'c'), "1c")),
    ];
    let list = ListComponent::unordered_by(items, by_key).unwrap();
    assert_eq!(sibling_labels(&list), vec!["0b", "1a", "1c"]);

    list.add_child(Item::new((1, 'd'), "1d")).unwrap();
    list.add_child(Item::new((0, 'e'), "0e")).unwrap();

    assert_eq!(sibling_labels(&list), vec!["0b", "0e", "1a", "1c", "1d"]);
    assert_in_sync(&list, by_key);
}

#[test]
fn test_insertion_into_mounted_list_mounts_item() {
    let list = ListComponent::with_compare(Node::root("app"), nums(&[1.0]), ascending).unwrap();
    let item = num(0.5);

    list.add_child(item.clone()).unwrap();

    assert!(item.is_mounted());
    assert_eq!(list.position(&*item), Some(0));
}

#[test]
fn test_adding_an_attached_item_fails_without_changes() {
    let item = num(1.0);
    let list = ListComponent::unordered_by(nums(&[2.0]), ascending).unwrap();
    list.add_child(item.clone()).unwrap();

    let err = list.add_child(item.clone()).unwrap_err();

    assert_eq!(err, ComponentError::AlreadyAttached { child: item.id() });
    assert_eq!(list.payloads(), vec![1.0, 2.0]);
    assert_eq!(sibling_labels(&list), vec!["1", "2"]);
}

// ============================================================================
// Removal
// ============================================================================

#[test]
fn test_removal_keeps_order() {
    let items = nums(&[1.0, 2.0, 3.0]);
    let middle = items[1].clone();
    let list = ListComponent::unordered_by(items, ascending).unwrap();

    list.remove_child(&*middle).unwrap();

    assert_eq!(list.payloads(), vec![1.0, 3.0]);
    assert_eq!(sibling_labels(&list), vec!["1", "3"]);
    assert!(middle.node().parent().is_none());
    assert_in_sync(&list, ascending);

    // Insertion still lands in the right place after a removal
    list.add_child(num(2.5)).unwrap();
    assert_eq!(sibling_labels(&list), vec!["1", "2.5", "3"]);
}

#[test]
fn test_removal_unmounts_item() {
    let items = nums(&[1.0, 2.0]);
    let first = items[0].clone();
    let list = ListComponent::with_compare(Node::root("app"), items, ascending).unwrap();
    assert!(first.is_mounted());

    list.remove_child(&*first).unwrap();

    assert!(!first.is_mounted());
}

#[test]
fn test_removing_unknown_item_fails_without_changes() {
    let list = ListComponent::unordered_by(nums(&[1.0, 2.0]), ascending).unwrap();
    let stranger = num(1.5);

    let err = list.remove_child(&*stranger).unwrap_err();

    assert_eq!(
        err,
        ComponentError::ChildNotFound {
            parent: list.id(),
            child: stranger.id(),
        }
    );
    assert_eq!(list.payloads(), vec![1.0, 2.0]);
    assert_eq!(sibling_labels(&list), vec!["1", "2"]);
}

#[test]
fn test_double_removal_fails() {
    let items = nums(&[1.0]);
    let only = items[0].clone();
    let list = ListComponent::unordered_by(items, ascending).unwrap();

    list.remove_child(&*only).unwrap();

    assert!(matches!(
        list.remove_child(&*only),
        Err(ComponentError::ChildNotFound { .. })
    ));
    assert!(list.is_empty());
}

#[test]
fn test_removal_through_component_keeps_items_in_sync() {
    let items = nums(&[1.0, 2.0]);
    let second = items[1].clone();
    let list = Rc::new(ListComponent::unordered_by(items, ascending).unwrap());
    let erased: Rc<dyn Component<Node>> = list.clone();

    erased.remove_child(&*second.clone().as_component()).unwrap();

    assert_eq!(list.payloads(), vec![1.0]);
    assert_eq!(list.len(), list.node().child_count());
    assert!(second.node().parent().is_none());
    assert_in_sync(&list, ascending);

    list.add_child(num(3.0)).unwrap();
    list.add_child(num(0.0)).unwrap();
    assert_eq!(sibling_labels(&list), vec!["0", "1", "3"]);
    assert_in_sync(&list, ascending);

    // The removed item is free again and the list no longer knows it
    assert!(matches!(
        list.remove_child(&*second),
        Err(ComponentError::ChildNotFound { .. })
    ));
    list.add_child(second.clone()).unwrap();
    assert_eq!(sibling_labels(&list), vec!["0", "1", "2", "3"]);
    assert_in_sync(&list, ascending);
}

#[test]
fn test_failed_removal_through_component_changes_nothing() {
    let list = ListComponent::unordered_by(nums(&[1.0, 2.0]), ascending).unwrap();
    let stranger = num(1.5);

    let err = Component::remove_child(&list, &*stranger).unwrap_err();

    assert!(matches!(err, ComponentError::ChildNotFound { .. }));
    assert_eq!(list.payloads(), vec![1.0, 2.0]);
    assert_eq!(sibling_labels(&list), vec!["1", "2"]);
    assert_in_sync(&list, ascending);
}

// ============================================================================
// Failed construction
// ============================================================================

#[test]
fn test_construction_with_attached_item_leaves_items_free() {
    let taken = num(2.0);
    let owner = ListComponent::unordered_by(vec![erase(taken.clone())], ascending).unwrap();
    let free = num(1.0);

    let err = ListComponent::unordered_by(vec![erase(free.clone()), erase(taken.clone())], ascending)
        .unwrap_err();

    assert_eq!(err, ComponentError::AlreadyAttached { child: taken.id() });
    assert!(free.node().parent().is_none());
    assert_eq!(owner.payloads(), vec![2.0]);
    assert_eq!(taken.node().parent(), Some(owner.node().clone()));

    let fresh = ListComponent::<f64, Node>::unordered_by(Vec::new(), ascending).unwrap();
    fresh.add_child(free.clone()).unwrap();
    assert_eq!(fresh.payloads(), vec![1.0]);
}

#[test]
fn test_construction_with_duplicate_item_fails() {
    let twice = num(1.0);
    let other = num(0.0);

    let err = ListComponent::unordered_by(
        vec![erase(other.clone()), erase(twice.clone()), erase(twice.clone())],
        ascending,
    )
    .unwrap_err();

    assert_eq!(err, ComponentError::AlreadyAttached { child: twice.id() });
    assert!(other.node().parent().is_none());
    assert!(twice.node().parent().is_none());

    let list = ListComponent::unordered_by(vec![erase(twice), erase(other)], ascending).unwrap();
    assert_eq!(sibling_labels(&list), vec!["0", "1"]);
}

#[test]
fn test_construction_rolls_back_refused_nodes() {
    // A root node cannot be inserted anywhere
    let rooted = Rc::new(Item {
        base: ComponentBase::new(Node::root("rooted")),
        payload: 2.0,
    });
    let free = num(1.0);

    let err = ListComponent::unordered_by(vec![erase(free.clone()), erase(rooted)], ascending)
        .unwrap_err();

    assert!(matches!(
        err,
        ComponentError::Node(NodeError::HierarchyRequest(_))
    ));
    assert!(free.node().parent().is_none());
    let fresh = ListComponent::div(vec![erase(free.clone())]).unwrap();
    assert_eq!(fresh.len(), 1);
}

// ============================================================================
// Nesting
// ============================================================================

#[test]
fn test_list_as_child_component() {
    struct Root {
        base: ComponentBase<Node>,
    }

    impl Component<Node> for Root {
        fn base(&self) -> &ComponentBase<Node> {
            &self.base
        }
    }

    let root = Rc::new(Root {
        base: ComponentBase::new(Node::root("app")),
    });
    let items = nums(&[2.0, 1.0]);
    let list = Rc::new(ListComponent::unordered_by(items.clone(), ascending).unwrap());

    root.add_child(list.clone()).unwrap();

    assert!(list.is_mounted());
    assert!(items.iter().all(|item| item.node().is_connected()));
    assert_eq!(
        root.node().outer_html(),
        "<div id=\"app\"><ul><li>1</li><li>2</li></ul></div>"
    );

    root.remove_child(&*list).unwrap();
    assert!(items.iter().all(|item| !item.is_mounted()));
}
