#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibseq_core::event::Event;
use fibseq_core::generator::SequenceGenerator;
use fibseq_core::generator_iterative::IterativeGenerator;
use fibseq_core::point::PointQueryEngine;
use fibseq_core::progress::CancellationToken;
use fibseq_core::sinks::CollectingSink;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // Two bytes of quantity (capped for speed), one byte of batch size.
    let quantity = u64::from(u16::from_le_bytes([data[0], data[1]])) % 2_000 + 1;
    let batch_size = usize::from(data[2]);

    let sink = CollectingSink::new();
    IterativeGenerator::with_batch_size(batch_size).generate(
        quantity,
        &CancellationToken::new(),
        &sink,
    );
    let events = sink.take();
    assert!(matches!(events.last(), Some(Event::Completed { .. })));

    let text: String = events
        .iter()
        .filter_map(|e| match e {
            Event::Batch { text } => Some(text.as_str()),
            _ => None,
        })
        .collect();

    // Line i holds F(i - 1); line 1 is 0, the rest must match the point query.
    let engine = PointQueryEngine::new();
    let mut count = 0u64;
    for (i, line) in (1u64..).zip(text.lines()) {
        let (index, value) = line.split_once(". ").expect("malformed line");
        assert_eq!(index.parse::<u64>().ok(), Some(i));
        let value = BigUint::parse_bytes(value.as_bytes(), 10).expect("bad number");
        if i == 1 {
            assert_eq!(value, BigUint::from(0u32));
        } else {
            assert_eq!(value, engine.compute(i - 1).expect("point query failed"), "line {i}");
        }
        count = i;
    }
    assert_eq!(count, quantity);
});
