use criterion::{Criterion, criterion_group};

mod ed25519_benches {
    use super::*;
    use ed25519_batch::Verifier;
    use ed25519_dalek::{Signer, SigningKey};
    use rand::prelude::ThreadRng;
    use rand::thread_rng;

    fn batch_verify_signatures(c: &mut Criterion) {
        static BATCH_SIZES: [usize; 3] = [128, 256, 1024];

        // Benchmark batch verification for all the above batch sizes
        let mut group = c.benchmark_group("Ed25519 batch signature verification");
        for size in BATCH_SIZES {
            let name = format!("size={size}");
            group.bench_function(name, |b| {
                let mut csprng: ThreadRng = thread_rng();
                let msg: &[u8] = b"aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";
                let mut verifier = Verifier::new();
                for _ in 0..size {
                    let key = SigningKey::generate(&mut csprng);
                    let signature = key.sign(msg).to_bytes();
                    assert!(verifier.add(key.verifying_key().as_bytes(), &signature, msg));
                }

                b.iter(|| verifier.batch_verify().expect("Batch verification failed"));
            });
        }
    }

    criterion_group! {
        name = ed25519_benches;
        config = Criterion::default();
        targets =
            batch_verify_signatures,
    }
}

criterion::criterion_main!(ed25519_benches::ed25519_benches);
