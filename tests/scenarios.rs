use {arrview::prelude::*, pretty_assertions::assert_eq, std::sync::Arc, std::thread};

fn digits() -> VecBuffer<i32> {
    VecBuffer::with_data((0..10).collect())
}

#[test]
fn basic_queries() {
    let v = digits();

    assert_eq!(v.first().unwrap(), 0);
    assert_eq!(v.last().unwrap(), 9);
    assert_eq!(v.len(), 10);
    assert_eq!(v.get(&5), 5);
    assert_eq!(v.sum(), 45);
    assert_eq!(v.reverse().last().unwrap(), 0);
}

#[test]
fn sub_arrays_of_three() {
    let groups = digits().sub_arrays(3);

    assert_eq!(groups.len(), 4);
    let realized: Vec<Vec<i32>> = groups.iter().map(|g| g.to_vec()).collect();
    assert_eq!(
        realized,
        vec![vec![0, 1, 2], vec![3, 4, 5], vec![6, 7, 8], vec![9]]
    );

    assert!(groups.flatten().sequence_equals(&digits()));
}

#[test]
fn split_by_indices_counts() {
    let parts = digits().split_by_indices(VecBuffer::with_data(vec![3, 6]));
    let counts = parts.map(|p| p.len());

    assert_eq!(counts.to_vec(), vec![3, 3, 4]);
    assert_eq!(counts.accumulate(|a, b| a + b).to_vec(), vec![3, 6, 10]);
    assert_eq!(
        counts.post_accumulate(0, |a, b| a + b).to_vec(),
        vec![0, 3, 6, 10]
    );
}

#[test]
fn zip_each_with_next_deltas() {
    let deltas = digits().zip_each_with_next(|a, b| b - a);

    assert_eq!(deltas.to_vec(), vec![1; 9]);
}

#[test]
fn deep_chain_then_realize() {
    let chain = range(100)
        .map(|x| x as i64)
        .reverse()
        .skip(10)
        .stride(3)
        .map_with_index(|x, i| x - i as i64)
        .append(-1);

    let realized = chain.realize();

    assert_eq!(realized.len(), chain.len());
    assert!(realized.sequence_equals(&chain));
    assert_eq!(realized.get(&0), 89);
    assert_eq!(realized.get(&1), 85);
    assert_eq!(realized.last().unwrap(), -1);
}

#[test]
fn shared_across_threads() {
    let view = Arc::new(range(1000).map(|x| x * 2).reverse());

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let view = view.clone();
            thread::spawn(move || view.clone().skip(t * 250).take(250).sum())
        })
        .collect();

    let total: usize = handles.into_iter().map(|h| h.join().unwrap()).sum();
    assert_eq!(total, view.sum());
}

#[test]
fn build_and_filter() {
    let collatz = build(27u64, |n| if n % 2 == 0 { n / 2 } else { 3 * n + 1 }, |n| *n != 1);

    assert_eq!(collatz.len(), 111);
    assert_eq!(collatz.max().unwrap(), 9232);

    let odd: Vec<u64> = collatz.filter(|n| n % 2 == 1).take(3).collect();
    assert_eq!(odd, vec![27, 41, 31]);
}
