use super::*;

#[test]
fn zero_threads_is_rejected() {
    let err = build_thread_pool(Some(0)).unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn explicit_thread_count_is_honored() {
    let pool = build_thread_pool(Some(2)).unwrap();
    assert_eq!(pool.current_num_threads(), 2);
}

#[test]
fn rows_are_visited_in_both_modes_with_their_index() {
    let pool = build_thread_pool(Some(3)).unwrap();
    for exec in [Exec::Sequential, Exec::Pool(&pool)] {
        let mut data = vec![0usize; 12];
        for_each_row(exec, &mut data, 4, |y, row| {
            for (x, v) in row.iter_mut().enumerate() {
                *v = y * 10 + x;
            }
        });
        assert_eq!(data, vec![0, 1, 2, 3, 10, 11, 12, 13, 20, 21, 22, 23]);
    }
}

#[test]
fn zero_row_len_is_a_noop() {
    let mut data: Vec<u8> = Vec::new();
    for_each_row(Exec::Sequential, &mut data, 0, |_, _| panic!("no rows expected"));
}
