//! Encoding from several threads at once.

use std::sync::Arc;
use std::thread;

use soundex::encode;

#[test]
fn test_parallel_encoding_matches_sequential() {
    let names: Arc<Vec<&'static str>> = Arc::new(vec![
        "Robert", "Rupert", "Pfister", "husobee", "Tymczak", "Ashcraft", "Lloyd", "Gutierrez",
    ]);
    let expected: Vec<String> = names.iter().map(|n| encode(n).unwrap()).collect();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let names = Arc::clone(&names);
            thread::spawn(move || {
                names
                    .iter()
                    .map(|n| encode(n).unwrap())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
