//! Sieve of Eratosthenes over a fixed universe, using [`BitSet`] as the
//! "is candidate" array.

fn main() {
    use packed_bitset::BitSet;

    const N: usize = 100;

    let mut is_prime = BitSet::<u64>::new(N);
    is_prime.set_all();
    is_prime.reset(0).unwrap();
    is_prime.reset(1).unwrap();

    let mut p = 2;
    while p * p < N {
        if is_prime.test(p).unwrap() {
            let mut m = p * p;
            while m < N {
                is_prime.reset(m).unwrap();
                m += p;
            }
        }
        p += 1;
    }

    let primes: Vec<usize> = is_prime.iter().collect();
    assert_eq!(primes.len(), 25);
    assert_eq!(primes.first(), Some(&2));
    assert_eq!(primes.last(), Some(&97));

    // twin primes: p and p + 2 both prime. shifting right by 2 moves the
    // bit at p + 2 down to p, so the AND's set bits are the low member
    // of each twin pair.
    let shifted = is_prime.clone() >> 2;
    let twins = is_prime.clone() & &shifted;
    let twin_lows: Vec<usize> = twins.iter().collect();
    assert!(twin_lows.contains(&3)); // 3 and 5
    assert!(twin_lows.contains(&5)); // 5 and 7

    println!("primes below {N}: {primes:?}");
    println!("twin prime (low member) below {N}: {twin_lows:?}");
}
