//! End-to-end scenarios exercising both façades together, each directly
//! mirroring a documented concrete scenario rather than a generated
//! round-trip grid.

use rand::Rng;

use crate::bitset::BitSet;
use crate::set::{erase_if, Set};

const PRIMES_BELOW_100: [usize; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89, 97,
];

fn sieve(n: usize) -> BitSet<u64> {
    let mut is_prime = BitSet::<u64>::new(n);
    is_prime.set_all();
    is_prime.reset(0).unwrap();
    is_prime.reset(1).unwrap();
    let mut p = 2;
    while p * p < n {
        if is_prime.test(p).unwrap() {
            let mut m = p * p;
            while m < n {
                is_prime.reset(m).unwrap();
                m += p;
            }
        }
        p += 1;
    }
    is_prime
}

#[test]
fn scenario_1_sieve_of_eratosthenes() {
    let primes = sieve(100);
    let got: Vec<usize> = primes.iter().collect();
    assert_eq!(got, PRIMES_BELOW_100.to_vec());
}

#[test]
fn scenario_2_twin_prime_filter() {
    let primes = sieve(100);
    let shifted = primes.clone() >> 2;
    let twins = primes & &shifted;
    let got: Vec<usize> = twins.iter().collect();
    assert_eq!(got, vec![3, 5, 11, 17, 29, 41, 59, 71]);
}

#[test]
fn scenario_3_empty_and_full_extremes() {
    let empty = BitSet::<u64>::new(100);
    assert_eq!(empty.count(), 0);

    let full = !empty;
    assert_eq!(full.count(), 100);
    assert_eq!(full.iter().next(), Some(0));
    assert_eq!(full.iter().next_back(), Some(99));
}

#[test]
fn scenario_4_n17_w8_single_unused_bit() {
    let mut a = BitSet::<u8>::new(17);
    a.set(16, true).unwrap();
    assert_eq!(a.count(), 1);
    assert_eq!(a.iter().next_back(), Some(16));
    assert!(!a.all());
    for i in 0..16 {
        a.set(i, true).unwrap();
    }
    assert!(a.all());
}

#[test]
fn scenario_5_string_constructor() {
    let s = BitSet::<u8>::from_bit_str(16, "0000000000000001").unwrap();
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![0]);
}

#[test]
fn scenario_6_erase_if_over_primes() {
    let mut primes = Set::<u64>::from_iter_capacity(100, PRIMES_BELOW_100);
    let removed = erase_if(&mut primes, |x| x > 50);
    assert_eq!(removed, 10);
    assert_eq!(
        primes.iter().collect::<Vec<_>>(),
        vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
    );
}

#[test]
fn algebraic_laws_hold_over_random_pairs() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(42);
    const N: usize = 200;

    for _ in 0..50 {
        let a = random_bitset(&mut rng, N);
        let b = random_bitset(&mut rng, N);
        let c = random_bitset(&mut rng, N);

        let a_or_b = a.clone() | &b;
        let a_and_b = a.clone() & &b;
        let a_xor_b = a.clone() ^ &b;
        let b_or_c = b.clone() | &c;
        let b_and_c = b.clone() & &c;
        let b_xor_c = b.clone() ^ &c;
        let a_diff_b = a.clone() - &b;
        let b_diff_a = b.clone() - &a;

        // idempotence / nilpotence
        assert_eq!(a.clone() | &a, a);
        assert_eq!(a.clone() & &a, a);
        assert!((a.clone() ^ &a).none());
        assert!((a.clone() - &a).none());

        // commutativity
        assert_eq!(a_or_b, b.clone() | &a);
        assert_eq!(a_and_b, b.clone() & &a);
        assert_eq!(a_xor_b, b.clone() ^ &a);

        // associativity
        assert_eq!(a_or_b.clone() | &c, a.clone() | &b_or_c);
        assert_eq!(a_and_b.clone() & &c, a.clone() & &b_and_c);
        assert_eq!(a_xor_b.clone() ^ &c, a.clone() ^ &b_xor_c);

        // distributivity
        assert_eq!(a.clone() & &b_or_c, a_and_b.clone() | &(a.clone() & &c));
        assert_eq!(a.clone() | &b_and_c, a_or_b.clone() & &(a.clone() | &c));

        // involution / De Morgan
        assert_eq!(!(!a.clone()), a);
        assert_eq!(!a_or_b.clone(), !a.clone() & &!b.clone());
        assert_eq!(!a_and_b.clone(), !a.clone() | &!b.clone());

        // difference / symmetric difference identities
        assert_eq!(a_diff_b, a.clone() & &!b.clone());
        assert_eq!(a_diff_b, a_or_b.clone() - &b);
        assert_eq!(a_xor_b, a_diff_b.clone() | &b_diff_a);
        assert_eq!(a_xor_b, a_or_b.clone() - &a_and_b);
    }
}

fn random_bitset(rng: &mut impl rand::Rng, n: usize) -> BitSet<u64> {
    let mut s = BitSet::<u64>::new(n);
    for i in 0..n {
        if rng.gen_bool(0.4) {
            s.set(i, true).unwrap();
        }
    }
    s
}

#[test]
fn shift_boundary_property() {
    let mut a = BitSet::<u64>::new(64);
    for i in [3usize, 10, 40, 63] {
        a.set(i, true).unwrap();
    }
    let before = a.clone();
    let n = 7;
    a <<= n;
    for j in 0..64 {
        let expected = if j >= n { before.test(j - n).unwrap() } else { false };
        assert_eq!(a.test(j).unwrap(), expected);
    }
}
