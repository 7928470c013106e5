fn main() {
    use itertools::assert_equal;
    use packed_bitset::Set;

    let a = Set::<u64>::from_iter_capacity(16, [1, 2, 3, 4]);
    let b = Set::<u64>::from_iter_capacity(16, [3, 4, 5, 6]);
    let c = Set::<u64>::from_iter_capacity(16, [4, 9, 10]);

    // set algebra between owned sets, via references
    let intersection = &a & &b;
    assert_equal(intersection.iter(), [3, 4]);

    let union = &intersection | &c;
    assert_equal(union.iter(), [3, 4, 9, 10]);

    // bidirectional iteration
    let mut iter = union.iter();
    assert_eq!(iter.next(), Some(3));
    assert_eq!(iter.next_back(), Some(10));
    assert_equal(iter, [4, 9]);

    // lower_bound / upper_bound over present-or-absent keys
    assert_eq!(union.lower_bound(5), Some(9));
    assert_eq!(union.upper_bound(9), Some(10));

    println!("{union}");
}
