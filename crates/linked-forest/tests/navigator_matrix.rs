use linked_forest::{
    append_child, cross_bridge_right, descend_leftmost, BinaryNavigator, BinaryNode,
    NaryNavigator, NaryNode, Navigator,
};

// A(B(D, E), C(·, F)): ids 0=A 1=B 2=C 3=D 4=E 5=F.
fn binary_arena() -> Vec<BinaryNode<&'static str>> {
    let mut arena = vec![
        BinaryNode::new("A"),
        BinaryNode::new("B"),
        BinaryNode::new("C"),
        BinaryNode::new("D"),
        BinaryNode::new("E"),
        BinaryNode::new("F"),
    ];
    arena[0].left = Some(1);
    arena[0].right = Some(2);
    arena[1].parent = Some(0);
    arena[1].left = Some(3);
    arena[1].right = Some(4);
    arena[2].parent = Some(0);
    arena[2].right = Some(5);
    arena[3].parent = Some(1);
    arena[4].parent = Some(1);
    arena[5].parent = Some(2);
    arena
}

// R(X(W), Y, Z): ids 0=R 1=X 2=Y 3=Z 4=W.
fn nary_arena() -> Vec<NaryNode<&'static str>> {
    let mut arena = vec![
        NaryNode::new("R"),
        NaryNode::new("X"),
        NaryNode::new("Y"),
        NaryNode::new("Z"),
        NaryNode::new("W"),
    ];
    append_child(&mut arena, 0, 1);
    append_child(&mut arena, 0, 2);
    append_child(&mut arena, 0, 3);
    append_child(&mut arena, 1, 4);
    arena
}

#[test]
fn binary_navigator_uniform_ops_matrix() {
    let arena = binary_arena();
    let nav = BinaryNavigator::new(0);
    assert_eq!(nav.root, 0);
    assert!(nav.is_subtree);

    // first child = left else right, last child symmetric.
    assert_eq!(nav.first_child(&arena, 0), Some(1));
    assert_eq!(nav.last_child(&arena, 0), Some(2));
    assert_eq!(nav.first_child(&arena, 2), Some(5));
    assert_eq!(nav.last_child(&arena, 2), Some(5));
    assert_eq!(nav.first_child(&arena, 3), None);
    assert_eq!(nav.last_child(&arena, 3), None);

    // Siblings derived from the parent's left/right pair.
    assert_eq!(nav.next_sibling(&arena, 3), Some(4));
    assert_eq!(nav.next_sibling(&arena, 4), None);
    assert_eq!(nav.prev_sibling(&arena, 4), Some(3));
    assert_eq!(nav.prev_sibling(&arena, 3), None);
    assert_eq!(nav.next_sibling(&arena, 1), Some(2));
    assert_eq!(nav.prev_sibling(&arena, 2), Some(1));
    // F is a lone right child.
    assert_eq!(nav.next_sibling(&arena, 5), None);
    assert_eq!(nav.prev_sibling(&arena, 5), None);

    assert_eq!(nav.parent(&arena, 5), Some(2));
    assert_eq!(nav.parent(&arena, 0), None);
}

#[test]
fn binary_only_child_ops_matrix() {
    let arena = binary_arena();
    let nav = BinaryNavigator::new(0);
    assert_eq!(nav.left_child(&arena, 0), Some(1));
    assert_eq!(nav.right_child(&arena, 0), Some(2));
    assert_eq!(nav.left_child(&arena, 2), None);
    assert_eq!(nav.right_child(&arena, 2), Some(5));
    assert_eq!(nav.left_child(&arena, 4), None);
}

#[test]
fn binary_bounded_root_matrix() {
    let arena = binary_arena();

    // Bounded at B: no parent, no siblings, children still reachable.
    let bounded = BinaryNavigator::new(1);
    assert_eq!(bounded.parent(&arena, 1), None);
    assert_eq!(bounded.next_sibling(&arena, 1), None);
    assert_eq!(bounded.prev_sibling(&arena, 1), None);
    assert_eq!(bounded.first_child(&arena, 1), Some(3));
    // Nodes below the bounded root keep their parent.
    assert_eq!(bounded.parent(&arena, 3), Some(1));

    let unbounded = BinaryNavigator::unbounded(1);
    assert!(!unbounded.is_subtree);
    assert_eq!(unbounded.parent(&arena, 1), Some(0));
    assert_eq!(unbounded.next_sibling(&arena, 1), Some(2));
}

#[test]
fn slice_store_navigation_matrix() {
    // Store is implemented for bare slices too, so borrowed views of an
    // arena navigate the same as the owning Vec.
    let arena = binary_arena();
    let store: &[BinaryNode<&str>] = &arena;
    let nav = BinaryNavigator::new(0);
    assert_eq!(nav.first_child(store, 0), Some(1));
    assert_eq!(nav.left_child(store, 1), Some(3));
    assert_eq!(descend_leftmost(&nav, store, 0), 3);
    assert_eq!(cross_bridge_right(&nav, store, 3), Some(4));

    let arena = nary_arena();
    let store: &[NaryNode<&str>] = &arena;
    let nav = NaryNavigator::new(0);
    assert_eq!(nav.last_child(store, 0), Some(3));
    assert_eq!(descend_leftmost(&nav, store, 0), 4);
    assert_eq!(cross_bridge_right(&nav, store, 4), Some(2));
}

#[test]
fn nary_navigator_matrix() {
    let arena = nary_arena();
    let nav = NaryNavigator::new(0);

    assert_eq!(nav.first_child(&arena, 0), Some(1));
    assert_eq!(nav.last_child(&arena, 0), Some(3));
    assert_eq!(nav.next_sibling(&arena, 1), Some(2));
    assert_eq!(nav.next_sibling(&arena, 2), Some(3));
    assert_eq!(nav.next_sibling(&arena, 3), None);
    assert_eq!(nav.prev_sibling(&arena, 3), Some(2));
    assert_eq!(nav.prev_sibling(&arena, 2), Some(1));
    assert_eq!(nav.prev_sibling(&arena, 1), None);
    assert_eq!(nav.first_child(&arena, 1), Some(4));
    assert_eq!(nav.last_child(&arena, 1), Some(4));
    assert_eq!(nav.parent(&arena, 4), Some(1));
    assert_eq!(nav.parent(&arena, 0), None);
}

#[test]
fn nary_append_child_link_invariants_matrix() {
    let arena = nary_arena();
    // Sibling list head/tail match the parent's first/last child and every
    // member points back to the same parent.
    assert_eq!(arena[0].first_child, Some(1));
    assert_eq!(arena[0].last_child, Some(3));
    for id in [1u32, 2, 3] {
        assert_eq!(arena[id as usize].parent, Some(0));
    }
    assert_eq!(arena[1].prev_sibling, None);
    assert_eq!(arena[1].next_sibling, Some(2));
    assert_eq!(arena[2].prev_sibling, Some(1));
    assert_eq!(arena[2].next_sibling, Some(3));
    assert_eq!(arena[3].prev_sibling, Some(2));
    assert_eq!(arena[3].next_sibling, None);
}

#[test]
fn nary_bounded_root_matrix() {
    let arena = nary_arena();

    let bounded = NaryNavigator::new(1);
    assert_eq!(bounded.parent(&arena, 1), None);
    assert_eq!(bounded.next_sibling(&arena, 1), None);
    assert_eq!(bounded.prev_sibling(&arena, 1), None);
    assert_eq!(bounded.first_child(&arena, 1), Some(4));

    let unbounded = NaryNavigator::unbounded(1);
    assert_eq!(unbounded.parent(&arena, 1), Some(0));
    assert_eq!(unbounded.next_sibling(&arena, 1), Some(2));
}
